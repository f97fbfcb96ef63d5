//! Mock account API server for testing
//!
//! Serves `GET /users/{id}/accounts` with a canned reply so the HTTP
//! adapter can be exercised without a real backend.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::wire::{AccountWire, AccountsWire};

/// Reply the server gives to every accounts request
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with the given accounts as wire JSON
    Accounts(Vec<AccountWire>),
    /// Error status with a small JSON error body
    Status(u16),
    /// Arbitrary status and body text
    Raw(u16, String),
}

/// Configuration for the mock server
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub reply: MockReply,
    /// Whether requests must carry an `x-api-key` header
    pub require_api_key: bool,
    /// Delay in milliseconds before responding
    pub delay_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            reply: MockReply::Accounts(sample_accounts()),
            require_api_key: true,
            delay_ms: 0,
        }
    }
}

/// Mock account API server
pub struct MockAccountServer {
    port: u16,
    running: Arc<AtomicBool>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

impl MockAccountServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        // Non-blocking so the accept loop can notice shutdown
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        thread::spawn(move || handle_connection(stream, &cfg));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockAccountServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(mut stream: TcpStream, config: &MockConfig) {
    // Accepted sockets inherit non-blocking mode on some platforms
    let _ = stream.set_nonblocking(false);

    let mut buffer = [0; 4096];
    let Ok(n) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..n]);

    if config.delay_ms > 0 {
        thread::sleep(std::time::Duration::from_millis(config.delay_ms));
    }

    let first_line = request.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_response(&mut stream, 400, r#"{"error": "Invalid request"}"#);
        return;
    }
    let (method, path) = (parts[0], parts[1]);

    if config.require_api_key && !request.to_lowercase().contains("x-api-key: test_") {
        send_response(&mut stream, 401, r#"{"error": "Invalid API key"}"#);
        return;
    }

    if method != "GET" {
        send_response(&mut stream, 405, r#"{"error": "Method not allowed"}"#);
        return;
    }

    let path = path.split('?').next().unwrap_or(path);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    if !matches!(segments.as_slice(), ["users", _, "accounts"]) {
        send_response(&mut stream, 404, r#"{"error": "Endpoint not found"}"#);
        return;
    }

    match &config.reply {
        MockReply::Accounts(accounts) => {
            let body = AccountsWire::new(accounts.clone())
                .to_json()
                .map(|json| json.to_string())
                .unwrap_or_default();
            send_response(&mut stream, 200, &body);
        }
        MockReply::Status(status) => {
            send_response(&mut stream, *status, r#"{"error": "Request failed"}"#);
        }
        MockReply::Raw(status, body) => send_response(&mut stream, *status, body),
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn send_response(stream: &mut TcpStream, status: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason_phrase(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Deterministic sample accounts
pub fn sample_accounts() -> Vec<AccountWire> {
    vec![
        AccountWire::new("acc-1", true, 1520.75),
        AccountWire::new("acc-2", false, 310.0),
        AccountWire::new("acc-3", false, -42.5),
    ]
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::http::HttpAccountClient;
    use crate::ports::AccountClient;

    #[test]
    fn test_mock_server_starts() {
        let server = MockAccountServer::start(MockConfig::default()).unwrap();
        assert!(server.port() > 0);
        assert!(server.base_url().starts_with("http://127.0.0.1:"));
    }

    #[tokio::test]
    async fn test_mock_server_serves_sample_accounts() {
        let server = MockAccountServer::start(MockConfig::default()).unwrap();
        let client =
            HttpAccountClient::new(&server.base_url(), Some("test_key"), Duration::from_secs(5))
                .unwrap();

        let response = client.get_user_account("user-9").await.unwrap();

        assert_eq!(response.status_code, Some(200));
        assert_eq!(response.body.unwrap().accounts, sample_accounts());
    }

    #[tokio::test]
    async fn test_mock_server_unknown_path() {
        let server = MockAccountServer::start(MockConfig::default()).unwrap();
        let client = HttpAccountClient::new(
            &format!("{}/other", server.base_url()),
            Some("test_key"),
            Duration::from_secs(5),
        )
        .unwrap();

        let response = client.get_user_account("user-9").await.unwrap();
        assert_eq!(response.status_code, Some(404));
    }
}
