//! The serve loop on a real socket.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use colorsvc::color::FixedColor;
use colorsvc::config::ServiceConfig;
use colorsvc::error::ColorError;
use colorsvc::server::{AppState, serve, serve_on};

use crate::common::init_test_logging;

async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(request.as_bytes()).await.expect("write");
    let mut response = String::new();
    stream.read_to_string(&mut response).await.expect("read");
    response
}

#[tokio::test]
async fn serves_until_shutdown() {
    init_test_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::with_source(ServiceConfig::default(), FixedColor("red".into()));
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve_on(listener, state, async move {
        let _ = stop_rx.await;
    }));

    let ok = raw_request(
        addr,
        "GET /color HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(ok.starts_with("HTTP/1.1 200"), "{ok}");
    assert!(ok.ends_with("\"red\""), "{ok}");

    let body = r#"[{"color":"blue","delayLength":0}]"#;
    let failing = raw_request(
        addr,
        &format!(
            "POST /color HTTP/1.1\r\nHost: localhost\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ),
    )
    .await;
    assert!(failing.starts_with("HTTP/1.1 500"), "{failing}");
    assert!(failing.ends_with("\"blue\""), "{failing}");

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn bind_failure_is_reported() {
    init_test_logging();
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let mut config = ServiceConfig::default();
    config.port = port;

    match serve(config).await {
        Err(ColorError::ServerFailed { addr, .. }) => {
            assert_eq!(addr, format!("127.0.0.1:{port}"));
        }
        other => panic!("Expected ServerFailed, got {other:?}"),
    }
}
