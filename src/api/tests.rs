use super::*;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct CapturedRequest {
    request_line: String,
    body: Vec<u8>,
}

async fn read_http_request(
    stream: &mut tokio::net::TcpStream,
) -> Result<CapturedRequest, String> {
    let mut buffer = Vec::new();
    let header_end = loop {
        let mut chunk = [0_u8; 1024];
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| err.to_string())?;
        if read == 0 {
            return Err("Unexpected EOF while reading HTTP headers".to_string());
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().map_err(|_| "bad length")?;
            }
        }
    }

    let mut body = buffer[header_end..].to_vec();
    while body.len() < content_length {
        let mut chunk = vec![0_u8; content_length - body.len()];
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| err.to_string())?;
        if read == 0 {
            return Err("Unexpected EOF while reading HTTP body".to_string());
        }
        body.extend_from_slice(&chunk[..read]);
    }
    body.truncate(content_length);

    Ok(CapturedRequest { request_line, body })
}

/// Serve exactly one canned response and hand back what the client sent.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (SocketAddr, JoinHandle<Result<CapturedRequest, String>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("local addr should resolve");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.map_err(|err| err.to_string())?;
        let captured = read_http_request(&mut stream).await?;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .map_err(|err| err.to_string())?;
        Ok(captured)
    });

    (addr, handle)
}

fn backend_for(addr: SocketAddr) -> HttpBackend {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client should build");
    HttpBackend::with_client(client, &format!("http://{addr}/"))
}

fn sample_request() -> TranslateRequest {
    TranslateRequest {
        text: "hello".to_string(),
        source_language: "en".to_string(),
        target_language: "hi".to_string(),
    }
}

#[tokio::test]
async fn fetch_languages_parses_list() {
    let (addr, server) = serve_once(
        "200 OK",
        r#"{"languages":[{"code":"en","name":"English"},{"code":"hi","name":"Hindi"}]}"#,
    )
    .await;

    let languages = backend_for(addr)
        .fetch_languages()
        .await
        .expect("languages should load");

    assert_eq!(
        languages,
        vec![
            LanguageOption::new("en", "English"),
            LanguageOption::new("hi", "Hindi")
        ]
    );
    let captured = server.await.expect("join").expect("server");
    assert_eq!(captured.request_line, "GET /languages HTTP/1.1");
}

#[tokio::test]
async fn fetch_languages_reports_server_errors() {
    let (addr, _server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;

    let err = backend_for(addr)
        .fetch_languages()
        .await
        .expect_err("500 should fail");

    assert_eq!(
        err,
        BackendError::Status {
            status: 500,
            detail: Some("boom".to_string())
        }
    );
}

#[tokio::test]
async fn translate_posts_json_body_and_maps_response() {
    let (addr, server) = serve_once(
        "200 OK",
        r#"{"translated_text":"नमस्ते","hinglish_text":"Namaste","source_language":"en","target_language":"hi"}"#,
    )
    .await;

    let result = backend_for(addr)
        .translate(&sample_request())
        .await
        .expect("translation should succeed");

    assert_eq!(result.translated_text, "नमस्ते");
    assert_eq!(result.transliterated_text, "Namaste");

    let captured = server.await.expect("join").expect("server");
    assert_eq!(captured.request_line, "POST /translate HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_slice(&captured.body).expect("json body");
    assert_eq!(
        sent,
        serde_json::json!({
            "text": "hello",
            "source_language": "en",
            "target_language": "hi"
        })
    );
}

#[tokio::test]
async fn translate_surfaces_rate_limit_status() {
    let (addr, _server) = serve_once(
        "429 Too Many Requests",
        r#"{"detail":"API quota exceeded. Please try again later or contact support."}"#,
    )
    .await;

    let err = backend_for(addr)
        .translate(&sample_request())
        .await
        .expect_err("429 should fail");

    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn translate_with_undecodable_success_body_is_decode_error() {
    let (addr, _server) = serve_once("200 OK", r#"{"unexpected":true}"#).await;

    let err = backend_for(addr)
        .translate(&sample_request())
        .await
        .expect_err("missing fields should fail");

    assert!(matches!(err, BackendError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    // Bind then drop to obtain a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = backend_for(addr)
        .fetch_languages()
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err, BackendError::Transport { .. }));
}

#[tokio::test]
async fn status_reads_health_message() {
    let (addr, server) = serve_once(
        "200 OK",
        r#"{"message":"Language Translator API is running"}"#,
    )
    .await;

    let message = backend_for(addr).status().await.expect("status");

    assert_eq!(message, "Language Translator API is running");
    let captured = server.await.expect("join").expect("server");
    assert_eq!(captured.request_line, "GET / HTTP/1.1");
}

#[test]
fn status_error_keeps_only_string_details() {
    assert_eq!(
        client::status_error(500, r#"{"detail":"  Translation failed: quota  "}"#),
        BackendError::Status {
            status: 500,
            detail: Some("Translation failed: quota".to_string())
        }
    );
    assert_eq!(
        client::status_error(422, r#"{"detail":[{"loc":["body","text"],"msg":"field required"}]}"#),
        BackendError::Status {
            status: 422,
            detail: None
        }
    );
    assert_eq!(
        client::status_error(502, "<html>Bad Gateway</html>"),
        BackendError::Status {
            status: 502,
            detail: None
        }
    );
    assert_eq!(
        client::status_error(500, r#"{"detail":""}"#),
        BackendError::Status {
            status: 500,
            detail: None
        }
    );
}

#[test]
fn base_url_is_normalized() {
    let backend = HttpBackend::with_client(reqwest::Client::new(), "http://localhost:8000///");
    assert_eq!(backend.base_url(), "http://localhost:8000");
}
