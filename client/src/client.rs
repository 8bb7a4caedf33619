//! Request building, response parsing, and the blocking operations.
//!
//! # Design
//! `AccountClient` holds the base URL and a reusable agent and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an [`HttpRequest`] and a `parse_*` method that
//! consumes an [`HttpResponse`]; the blocking wrappers (`create`, `fetch`,
//! `list`, `delete`, `health`) chain build → execute → parse. The split
//! keeps the request/response mapping deterministic and testable without a
//! network.
//!
//! `fetch` and `delete` take the account id as a plain `&str`: malformed ids
//! are sent to the server as-is so its literal diagnostics come back
//! untouched.

use std::fmt;

use crate::config::Config;
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{Account, AccountEnvelope, AccountListEnvelope};

const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";
const HEALTH_PATH: &str = "/v1/health";
const CONTENT_TYPE: &str = "application/vnd.api+json";

/// Blocking, stateless client for the accounts API.
#[derive(Clone)]
pub struct AccountClient {
    base_url: String,
    agent: ureq::Agent,
}

impl fmt::Debug for AccountClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AccountClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: transport::agent(),
        }
    }

    // --- blocking operations ---

    /// Register an account and return the server-assigned copy.
    pub fn create(&self, account: &Account) -> Result<Account, Error> {
        let req = self.build_create(account)?;
        self.parse_create(transport::execute(&self.agent, req)?)
    }

    /// Fetch a single account by id.
    pub fn fetch(&self, id: &str) -> Result<Account, Error> {
        let req = self.build_fetch(id);
        self.parse_fetch(transport::execute(&self.agent, req)?)
    }

    /// List one page of accounts. `page` is zero-based; a page beyond the
    /// available data yields an empty vec, not an error. Server order is
    /// preserved.
    pub fn list(&self, page: u32, size: u32) -> Result<Vec<Account>, Error> {
        let req = self.build_list(page, size);
        self.parse_list(transport::execute(&self.agent, req)?)
    }

    /// Delete an account. `version` must match the stored
    /// optimistic-concurrency version (0 for a fresh, unmodified record).
    pub fn delete(&self, id: &str, version: i64) -> Result<(), Error> {
        let req = self.build_delete(id, version);
        self.parse_delete(transport::execute(&self.agent, req)?)
    }

    /// Probe the service health endpoint. Optional setup step; never run
    /// implicitly by the constructor.
    pub fn health(&self) -> Result<(), Error> {
        let req = self.build_health();
        self.parse_health(transport::execute(&self.agent, req)?)
    }

    // --- request building ---

    pub fn build_create(&self, account: &Account) -> Result<HttpRequest, Error> {
        let envelope = serde_json::json!({ "data": account });
        let body = serde_json::to_string(&envelope).map_err(|e| Error::Decode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{ACCOUNTS_PATH}", self.base_url),
            headers: vec![("content-type".to_string(), CONTENT_TYPE.to_string())],
            body: Some(body),
        })
    }

    pub fn build_fetch(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{ACCOUNTS_PATH}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The bracket characters in `page[number]`/`page[size]` are
    /// percent-encoded; they are not valid raw query bytes for strict URI
    /// parsers, and the server decodes them back to the bracketed keys.
    pub fn build_list(&self, page: u32, size: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!(
                "{}{ACCOUNTS_PATH}?page%5Bnumber%5D={page}&page%5Bsize%5D={size}",
                self.base_url
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete(&self, id: &str, version: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}{ACCOUNTS_PATH}/{id}?version={version}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{HEALTH_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    // --- response parsing ---

    pub fn parse_create(&self, response: HttpResponse) -> Result<Account, Error> {
        if !matches!(response.status, 200 | 201) {
            return Err(api_error(response));
        }
        let envelope: AccountEnvelope =
            serde_json::from_str(&response.body).map_err(|e| Error::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    pub fn parse_fetch(&self, response: HttpResponse) -> Result<Account, Error> {
        if response.status != 200 {
            return Err(api_error(response));
        }
        let envelope: AccountEnvelope =
            serde_json::from_str(&response.body).map_err(|e| Error::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Account>, Error> {
        if response.status != 200 {
            return Err(api_error(response));
        }
        let envelope: AccountListEnvelope =
            serde_json::from_str(&response.body).map_err(|e| Error::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), Error> {
        if response.status != 204 {
            return Err(api_error(response));
        }
        Ok(())
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<(), Error> {
        if response.status == 200 && response.body == r#"{"status":"up"}"# {
            return Ok(());
        }
        Err(Error::Api {
            status: response.status,
            message: "server not found".to_string(),
        })
    }
}

/// Surface a non-success response as `Error::Api` with the body verbatim.
fn api_error(response: HttpResponse) -> Error {
    Error::Api {
        status: response.status,
        message: response.body,
    }
}
