//! End-to-end submission tests against a local one-shot HTTP responder.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use invio::client::services::submit_service::SubmitService;
use invio::config::ClientConfig;

struct CapturedRequest {
    head: String,
    body: String,
}

/// Serve exactly one canned HTTP response and hand back what the client sent.
async fn one_shot_server(
    status_line: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (SocketAddr, tokio::task::JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");

        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.expect("read request");
            raw.extend_from_slice(&buf[..n]);

            // Complete once the headers and the announced body are in.
            if let Some(pos) = blank_line(&raw) {
                let head = String::from_utf8_lossy(&raw[..pos]).to_string();
                let expected = content_length(&head);
                if raw.len() >= pos + 4 + expected {
                    let request_body =
                        String::from_utf8_lossy(&raw[pos + 4..pos + 4 + expected]).to_string();

                    let response = format!(
                        "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status_line,
                        content_type,
                        body.len(),
                        body
                    );
                    stream.write_all(response.as_bytes()).await.expect("write response");
                    stream.shutdown().await.ok();

                    return CapturedRequest {
                        head,
                        body: request_body,
                    };
                }
            }

            assert!(n > 0, "connection closed before the request was complete");
        }
    });

    (addr, handle)
}

fn blank_line(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn service_for(addr: SocketAddr) -> SubmitService {
    SubmitService::new(&ClientConfig {
        endpoint_url: format!("http://{}/submit", addr),
    })
}

#[tokio::test]
async fn json_success_renders_the_pretty_printed_body() {
    let (addr, server) = one_shot_server("200 OK", "application/json", "{\"a\":1}").await;

    let output = service_for(addr).submit_text("hello").await;
    assert_eq!(output, "{\n  \"a\": 1\n}");

    let request = server.await.expect("server task");
    assert!(request.head.starts_with("POST /submit HTTP/1.1"));
    assert!(
        request.head.to_ascii_lowercase().contains("content-type: application/json"),
        "missing json content type in:\n{}",
        request.head
    );
    assert_eq!(request.body, "{\"text\":\"hello\"}");
}

#[tokio::test]
async fn input_is_sent_untrimmed() {
    let (addr, server) = one_shot_server("200 OK", "application/json", "{}").await;

    let _ = service_for(addr).submit_text("  padded  ").await;

    let request = server.await.expect("server task");
    assert_eq!(request.body, "{\"text\":\"  padded  \"}");
}

#[tokio::test]
async fn http_error_renders_the_diagnostic_report() {
    let (addr, server) = one_shot_server(
        "500 Internal Server Error",
        "application/json",
        "{\"err\":\"x\"}",
    )
    .await;

    let output = service_for(addr).submit_text("hello").await;
    let expected = concat!(
        "{\n",
        "  \"ok\": false,\n",
        "  \"status\": 500,\n",
        "  \"statusText\": \"Internal Server Error\",\n",
        "  \"data\": {\n",
        "    \"err\": \"x\"\n",
        "  }\n",
        "}",
    );
    assert_eq!(output, expected);

    server.await.expect("server task");
}

#[tokio::test]
async fn plain_text_body_is_rendered_as_a_json_string() {
    let (addr, server) =
        one_shot_server("200 OK", "text/plain; charset=utf-8", "pong").await;

    let output = service_for(addr).submit_text("hello").await;
    assert_eq!(output, "\"pong\"");

    server.await.expect("server task");
}

#[tokio::test]
async fn html_error_body_lands_in_the_report_as_text() {
    let (addr, server) = one_shot_server(
        "404 Not Found",
        "text/html",
        "<h1>missing</h1>",
    )
    .await;

    let output = service_for(addr).submit_text("hello").await;
    let expected = concat!(
        "{\n",
        "  \"ok\": false,\n",
        "  \"status\": 404,\n",
        "  \"statusText\": \"Not Found\",\n",
        "  \"data\": \"<h1>missing</h1>\"\n",
        "}",
    );
    assert_eq!(output, expected);

    server.await.expect("server task");
}

#[tokio::test]
async fn refused_connection_renders_an_error_line() {
    // Bind then drop so the port is very likely closed when the client dials.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let output = service_for(addr).submit_text("hello").await;
    assert!(
        output.starts_with("Error: "),
        "expected a transport error line, got:\n{}",
        output
    );
}
