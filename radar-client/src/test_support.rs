//! One-shot HTTP stub for exercising real requests in unit tests

use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves a single canned response on a local port
///
/// Returns the base URL to point a client at and a handle resolving to the
/// lowercased request head (request line plus headers) that was received.
pub(crate) async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).to_lowercase()
    });

    (base_url, handle)
}

/// HTTP client that ignores proxy environment variables
pub(crate) fn direct_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}
