//! Gemini provider against a local canned HTTP server

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use vozgenius_core::tts::{
    GeminiConfig, GeminiProvider, GenerateSpeechRequest, ProviderError, ResponseModality,
    SpeechProvider,
};

/// Serve one request with `status` and `body`, handing back the raw request
async fn serve_once(status: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1beta", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
    });

    (base_url, rx)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn provider(base_url: String) -> GeminiProvider {
    let mut config = GeminiConfig::new("test-key".to_string());
    config.base_url = base_url;
    config.timeout = Duration::from_secs(5);
    GeminiProvider::new(config).unwrap()
}

fn request() -> GenerateSpeechRequest {
    GenerateSpeechRequest {
        prompt: "[Instruction: ...]\nHola".to_string(),
        system_instruction: "Act as a professional Spanish Text-to-Speech engine.".to_string(),
        modality: ResponseModality::Audio,
        voice_name: "Puck".to_string(),
    }
}

#[tokio::test]
async fn test_successful_generation() {
    let body = r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"audio/L16;codec=pcm;rate=24000","data":"/z8AwA=="}}],"role":"model"},"finishReason":"STOP"}]}"#;
    let (base_url, captured) = serve_once("200 OK", body.to_string()).await;

    let response = provider(base_url).generate(request()).await.unwrap();
    assert_eq!(response.audio_payload().unwrap().as_str(), "/z8AwA==");

    let raw = captured.await.unwrap();
    assert!(raw.starts_with(
        "POST /v1beta/models/gemini-2.5-flash-preview-tts:generateContent HTTP/1.1"
    ));
    assert!(raw.to_lowercase().contains("x-goog-api-key: test-key"));
    assert!(raw.contains(r#""voiceName":"Puck""#));
    assert!(raw.contains(r#""responseModalities":["AUDIO"]"#));
}

#[tokio::test]
async fn test_error_status_is_api_error() {
    let (base_url, _captured) =
        serve_once("403 Forbidden", r#"{"error":"bad key"}"#.to_string()).await;

    let err = provider(base_url).generate(request()).await.unwrap_err();
    match err {
        ProviderError::Api { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("bad key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_body_is_invalid_response() {
    let (base_url, _captured) = serve_once("200 OK", "not json".to_string()).await;

    let err = provider(base_url).generate(request()).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1beta", listener.local_addr().unwrap());
    drop(listener);

    let err = provider(base_url).generate(request()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)));
}
