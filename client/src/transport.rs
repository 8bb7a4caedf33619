//! Blocking execution of built requests over ureq.
//!
//! # Design
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data rather than `Err` — status interpretation
//! belongs to the `parse_*` methods, not the transport. Anything that
//! prevents obtaining a complete response (connect failure, mid-stream read
//! failure) maps to [`Error::Transport`].

use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Build an agent suitable for this client.
pub fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Execute an `HttpRequest` and return the status and body as data.
pub fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, Error> {
    let content_type = req
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.clone());

    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            let mut builder = agent.post(&req.url);
            if let Some(value) = content_type {
                builder = builder.content_type(value.as_str());
            }
            builder.send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
    };

    let mut response = result.map_err(|e| Error::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| Error::Transport(e.to_string()))?;

    tracing::debug!(url = %req.url, status, "account api round trip");

    Ok(HttpResponse { status, body })
}
