//! End-to-end tests against the live mock server.
//!
//! # Design
//! Each test starts the mock server on its own random port, then drives the
//! blocking client over real HTTP. Exact error strings are asserted against
//! the literal wire text, since the client's contract is to surface server
//! error bodies verbatim.

use account_client::{Account, AccountClient, Attributes, Error};
use uuid::Uuid;

/// Boot the mock server on a random port and return a client pointed at it.
fn start_server() -> AccountClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    AccountClient::with_base_url(&format!("http://{addr}"))
}

fn test_account() -> Account {
    Account::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        Attributes {
            bank_id: "123456".to_string(),
            bank_id_code: "GBDSC".to_string(),
            base_currency: "EUR".to_string(),
            bic: "NWBKGB22".to_string(),
            country: "SI".to_string(),
        },
    )
}

#[test]
fn create_fetch_delete_lifecycle() {
    let client = start_server();

    // Fresh server: first page is empty.
    let accounts = client.list(0, 10).unwrap();
    assert!(accounts.is_empty(), "expected empty list");

    // Create echoes back every submitted field.
    let account = test_account();
    let created = client.create(&account).unwrap();
    assert_eq!(created.id, account.id);
    assert_eq!(created.organisation_id, account.organisation_id);
    assert_eq!(created.attributes, account.attributes);

    // Fetch by the returned id yields the same account.
    let fetched = client.fetch(&created.id.to_string()).unwrap();
    assert_eq!(fetched, created);

    // Delete with the fresh-record version succeeds.
    client.delete(&created.id.to_string(), 0).unwrap();

    // Fetch after delete reports the literal does-not-exist message.
    let err = client.fetch(&created.id.to_string()).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(r#"{{"error_message":"record {} does not exist"}}"#, created.id)
    );

    let accounts = client.list(0, 10).unwrap();
    assert!(accounts.is_empty(), "expected empty list after delete");
}

#[test]
fn fetch_invalid_id_surfaces_exact_server_message() {
    let client = start_server();
    let err = client.fetch("not-a-uuid").unwrap_err();
    assert!(matches!(err, Error::Api { status: 400, .. }));
    assert_eq!(err.to_string(), r#"{"error_message":"id is not a valid uuid"}"#);
}

#[test]
fn fetch_unknown_uuid_surfaces_exact_server_message() {
    let client = start_server();
    let id = "00000000-1111-2222-3333-444444555555";
    let err = client.fetch(id).unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
    assert_eq!(
        err.to_string(),
        format!(r#"{{"error_message":"record {id} does not exist"}}"#)
    );
}

#[test]
fn delete_with_wrong_version_is_a_version_conflict() {
    let client = start_server();
    let account = test_account();
    client.create(&account).unwrap();

    let err = client.delete(&account.id.to_string(), 1).unwrap_err();
    assert_eq!(err.to_string(), r#"{"error_message":"invalid version"}"#);

    // The record survives a failed delete.
    assert!(client.fetch(&account.id.to_string()).is_ok());
}

#[test]
fn list_pages_through_accounts_in_server_order() {
    let client = start_server();
    let accounts: Vec<Account> = (0..3).map(|_| test_account()).collect();
    for account in &accounts {
        client.create(account).unwrap();
    }

    // Exactly N accounts on a size-N page.
    let page = client.list(0, 3).unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page, accounts);

    // Pages split without reordering.
    let first = client.list(0, 2).unwrap();
    let second = client.list(1, 2).unwrap();
    assert_eq!(first, &accounts[..2]);
    assert_eq!(second, &accounts[2..]);

    // A page beyond the data is empty, not an error.
    let beyond = client.list(9, 2).unwrap();
    assert!(beyond.is_empty());
}

#[test]
fn duplicate_create_surfaces_conflict() {
    let client = start_server();
    let account = test_account();
    client.create(&account).unwrap();

    let err = client.create(&account).unwrap_err();
    assert!(matches!(err, Error::Api { status: 409, .. }));
}

#[test]
fn health_probe_succeeds_against_live_server() {
    let client = start_server();
    client.health().unwrap();
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind a port and drop it so nothing is listening there.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = AccountClient::with_base_url(&format!("http://{addr}"));
    let err = client.list(0, 10).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
