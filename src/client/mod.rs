// src/client/mod.rs
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::{AnalyzeRequest, AnalyzeResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Could not reach the analysis service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Could not parse the analysis response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error body the analysis service may send on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the remote analysis service. One request per submission, no
/// retries; a failed call is surfaced to the user who can resubmit.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    client: Client,
    base_url: String,
}

impl AnalyzeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Performs exactly one `POST /analyze` exchange and maps the outcome.
    /// A non-2xx status becomes `ClientError::Api` carrying the server's
    /// `detail` string verbatim when the body provides one.
    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ClientError> {
        let url = format!("{}/analyze", self.base_url);
        debug!(
            jd_inputs = request.jd_inputs.len(),
            "submitting analysis request to {}", url
        );

        let response = self.client.post(&url).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| {
                    format!("Analysis service returned status {}", status.as_u16())
                });
            warn!(status = status.as_u16(), "analysis request failed: {}", message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text()?;
        let parsed: AnalyzeResponse = serde_json::from_str(&body)?;
        info!(
            match_score = parsed.gap_summary.match_score,
            "analysis completed"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{JdCategory, JdEntry};
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    /// One-shot HTTP server on a loopback port. Answers a single request
    /// with the canned status/body and hands the raw request back through
    /// the join handle.
    fn spawn_stub(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (format!("http://{}", addr), handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
            if let Some(header_end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    fn request_body(raw: &str) -> serde_json::Value {
        let body = raw.split("\r\n\r\n").nth(1).unwrap();
        serde_json::from_str(body).unwrap()
    }

    fn single_entry_request() -> AnalyzeRequest {
        AnalyzeRequest {
            resume_text: "X".to_string(),
            jd_inputs: vec![JdEntry {
                id: "e1".to_string(),
                category: JdCategory::Required,
                text: "Y".to_string(),
            }],
        }
    }

    #[test]
    fn success_response_is_parsed() {
        let (base_url, handle) = spawn_stub(
            "200 OK",
            r#"{"gap_summary":{"match_score":72,"keyword_matches":[],"missing_keywords":["SQL"],"validated_missing_keywords":["SQL"],"notes":""}}"#,
        );

        let client = AnalyzeClient::new(&base_url);
        let response = client.analyze(&single_entry_request()).unwrap();

        assert_eq!(response.gap_summary.match_score, 72.0);
        assert_eq!(response.gap_summary.validated_missing_keywords, vec!["SQL"]);

        let raw = handle.join().unwrap();
        assert!(raw.starts_with("POST /analyze HTTP/1.1\r\n"));
        assert!(raw.to_lowercase().contains("content-type: application/json"));

        let body = request_body(&raw);
        assert_eq!(body["resume_text"], "X");
        assert_eq!(body["jd_inputs"].as_array().unwrap().len(), 1);
        assert_eq!(body["jd_inputs"][0]["category"], "required");
        assert_eq!(body["jd_inputs"][0]["text"], "Y");
    }

    #[test]
    fn server_detail_is_used_verbatim() {
        let (base_url, handle) = spawn_stub(
            "422 Unprocessable Entity",
            r#"{"detail":"resume_text required"}"#,
        );

        let client = AnalyzeClient::new(&base_url);
        let err = client.analyze(&single_entry_request()).unwrap_err();
        handle.join().unwrap();

        assert_eq!(err.to_string(), "resume_text required");
        match err {
            ClientError::Api { status, .. } => assert_eq!(status, 422),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let (base_url, handle) = spawn_stub("500 Internal Server Error", "not json");

        let client = AnalyzeClient::new(&base_url);
        let err = client.analyze(&single_entry_request()).unwrap_err();
        handle.join().unwrap();

        assert_eq!(err.to_string(), "Analysis service returned status 500");
    }

    #[test]
    fn malformed_success_body_is_a_parse_error() {
        let (base_url, handle) = spawn_stub("200 OK", "{\"gap_summary\":");

        let client = AnalyzeClient::new(&base_url);
        let err = client.analyze(&single_entry_request()).unwrap_err();
        handle.join().unwrap();

        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let (base_url, handle) = spawn_stub("200 OK", r#"{"gap_summary":{"match_score":1}}"#);

        let client = AnalyzeClient::new(&format!("{}/", base_url));
        client.analyze(&single_entry_request()).unwrap();

        let raw = handle.join().unwrap();
        assert!(raw.starts_with("POST /analyze "));
    }
}
