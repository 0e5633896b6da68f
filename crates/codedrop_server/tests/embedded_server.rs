//! Embedded server lifecycle tests over real sockets.

use codedrop_core::constants::{ACCESS_TOKEN, ACCESS_TOKEN_HEADER};
use codedrop_server::EmbeddedServer;
use serde_json::json;

#[test]
fn embedded_server_serves_until_dropped() {
    let server = EmbeddedServer::start_ephemeral().expect("start server");
    assert!(server.addr().ip().is_loopback());
    assert_ne!(server.addr().port(), 0);

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(format!("{}/api/pastes", server.base_url()))
        .header(ACCESS_TOKEN_HEADER, ACCESS_TOKEN)
        .json(&json!({"content": "puts 1", "language": "ruby", "ttl_seconds": 120}))
        .send()
        .expect("create request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    assert_eq!(server.state().store.len(), 1);

    let addr = server.addr();
    drop(response);
    drop(client);
    drop(server);
    assert!(std::net::TcpStream::connect(addr).is_err());
}
