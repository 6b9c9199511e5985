//! Throwaway localhost health endpoints for integration tests

use std::io::{Read, Write};
use std::net::TcpListener;

/// A minimal single-purpose health endpoint on an ephemeral port
///
/// Serves the same fixed response to every request until the process
/// exits; the serving thread is detached and dies with the test binary.
pub struct HealthStub {
    url: String,
}

impl HealthStub {
    /// Serve `200 OK` to every request
    pub fn healthy() -> Self {
        Self::with_status(200, "OK")
    }

    /// Serve a fixed non-success status to every request
    pub fn with_status(status: u16, reason: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind health stub");
        let url = format!("http://{}/health", listener.local_addr().unwrap());

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                // Drain the request headers before answering
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let body = "ok";
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { url }
    }

    /// A URL on a port that nothing listens on (connection refused)
    pub fn dead_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/health")
    }

    /// The stub's health URL
    pub fn url(&self) -> &str {
        &self.url
    }
}
