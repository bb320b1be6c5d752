//! Minimal HTTP/1.1 server serving one catalog body for integration tests.
//!
//! Answers HEAD with Content-Length only and GET with the full body.
//! Status codes are configurable to exercise failure handling.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct CatalogServerOptions {
    /// Status returned for HEAD requests.
    pub head_status: u16,
    /// Status returned for GET requests.
    pub get_status: u16,
}

impl Default for CatalogServerOptions {
    fn default() -> Self {
        Self {
            head_status: 200,
            get_status: 200,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345/"). The server runs until the process
/// exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, CatalogServerOptions::default())
}

/// Like `start` but with configurable response statuses.
pub fn start_with_options(body: Vec<u8>, opts: CatalogServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, body: &[u8], opts: CatalogServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let method = request.split_whitespace().next().unwrap_or("");

    if method.eq_ignore_ascii_case("HEAD") {
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            opts.head_status,
            reason(opts.head_status),
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if method.eq_ignore_ascii_case("GET") {
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            opts.get_status,
            reason(opts.get_status),
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.write_all(body);
        return;
    }
    let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
