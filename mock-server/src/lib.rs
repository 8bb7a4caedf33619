//! In-memory implementation of the organisation accounts API.
//!
//! Serves the wire protocol the account client speaks: envelope-wrapped
//! create/fetch/list, version-checked delete, `{"error_message": ...}`
//! error bodies, and a health endpoint. The store preserves insertion order
//! so pagination is stable across requests. DTOs are defined independently
//! of the client crate; the client's integration tests catch schema drift.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    #[serde(rename = "type")]
    pub account_type: String,
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub attributes: Attributes,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    pub bank_id: String,
    pub bank_id_code: String,
    pub base_currency: String,
    pub bic: String,
    pub country: String,
}

/// Envelope for a single account. `links` is omitted on the way in and
/// populated on the way out.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountEnvelope {
    pub data: Account,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountListEnvelope {
    pub data: Vec<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub this: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_message: String,
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(rename = "page[number]", default)]
    number: usize,
    #[serde(rename = "page[size]", default = "default_page_size")]
    size: usize,
}

fn default_page_size() -> usize {
    100
}

#[derive(Deserialize)]
struct DeleteQuery {
    version: Option<i64>,
}

/// A stored account plus its optimistic-concurrency version.
#[derive(Clone, Debug)]
struct Record {
    account: Account,
    version: i64,
}

/// Insertion-ordered store, so list pagination is stable across requests.
type Db = Arc<RwLock<Vec<Record>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/v1/health", get(health))
        .route(
            "/v1/organisation/accounts",
            get(list_accounts).post(create_account),
        )
        .route(
            "/v1/organisation/accounts/{id}",
            get(fetch_account).delete(delete_account),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorBody {
            error_message: message,
        }),
    )
        .into_response()
}

fn self_link(id: Uuid) -> Links {
    Links {
        this: Some(format!("/v1/organisation/accounts/{id}")),
        ..Links::default()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "up" }))
}

async fn create_account(
    State(db): State<Db>,
    Json(input): Json<AccountEnvelope>,
) -> Response {
    let mut records = db.write().await;
    let account = input.data;
    if records.iter().any(|r| r.account.id == account.id) {
        return error_response(
            StatusCode::CONFLICT,
            format!("record {} already exists", account.id),
        );
    }
    let envelope = AccountEnvelope {
        data: account.clone(),
        links: Some(self_link(account.id)),
    };
    records.push(Record {
        account,
        version: 0,
    });
    (StatusCode::CREATED, Json(envelope)).into_response()
}

async fn fetch_account(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let Ok(uuid) = Uuid::parse_str(&id) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "id is not a valid uuid".to_string(),
        );
    };
    let records = db.read().await;
    match records.iter().find(|r| r.account.id == uuid) {
        Some(record) => Json(AccountEnvelope {
            data: record.account.clone(),
            links: Some(self_link(uuid)),
        })
        .into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("record {id} does not exist"),
        ),
    }
}

async fn list_accounts(State(db): State<Db>, Query(page): Query<PageQuery>) -> Response {
    let records = db.read().await;
    let start = page.number.saturating_mul(page.size);
    let data: Vec<Account> = records
        .iter()
        .skip(start)
        .take(page.size)
        .map(|r| r.account.clone())
        .collect();
    Json(AccountListEnvelope {
        data,
        links: Some(Links {
            this: Some("/v1/organisation/accounts".to_string()),
            ..Links::default()
        }),
    })
    .into_response()
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    let Ok(uuid) = Uuid::parse_str(&id) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "id is not a valid uuid".to_string(),
        );
    };
    let mut records = db.write().await;
    let Some(position) = records.iter().position(|r| r.account.id == uuid) else {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("record {id} does not exist"),
        );
    };
    if query.version != Some(records[position].version) {
        return error_response(StatusCode::CONFLICT, "invalid version".to_string());
    }
    records.remove(position);
    StatusCode::NO_CONTENT.into_response()
}
