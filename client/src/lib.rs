//! Blocking client for the organisation accounts API.
//!
//! # Overview
//! Four stateless operations — create, fetch, list, delete — each a single
//! blocking HTTP round trip against a fixed URL convention. Transport
//! failures, undecodable bodies, and server-reported errors map into the
//! uniform [`Error`] taxonomy; server error text is passed through verbatim.
//!
//! # Design
//! - `AccountClient` holds only the base URL and a reusable agent; there is
//!   no state shared between calls.
//! - Each operation is split into `build_*` (produces an [`HttpRequest`])
//!   and `parse_*` (consumes an [`HttpResponse`]), so the mapping layer is
//!   deterministic and unit-testable without a network. The blocking
//!   wrappers chain build → execute → parse.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::AccountClient;
pub use config::Config;
pub use error::Error;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Account, AccountEnvelope, AccountListEnvelope, Attributes, Links};
