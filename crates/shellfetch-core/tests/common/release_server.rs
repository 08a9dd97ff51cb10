//! Minimal HTTP/1.1 server standing in for a release host in tests.
//!
//! Serves one static body for any GET, with configurable status and an
//! optional truncated-body failure mode (Content-Length overstates what is
//! actually sent, then the socket closes). Counts requests so tests can
//! assert whether the fallback host was contacted.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    /// HTTP status for every response.
    pub status: u16,
    /// If set, send only the first N body bytes then close the socket,
    /// while still advertising the full Content-Length.
    pub truncate_body_at: Option<usize>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            truncate_body_at: None,
        }
    }
}

pub struct ReleaseServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl ReleaseServer {
    /// Base URL, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` with a 200 status.
/// The server runs until the process exits.
pub fn start(body: Vec<u8>) -> ReleaseServer {
    start_with_options(body, ServerOptions::default())
}

/// Like `start` but with customizable status and failure mode.
pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> ReleaseServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            hits_srv.fetch_add(1, Ordering::SeqCst);
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    ReleaseServer {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: ServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        reason,
        body.len()
    );
    if stream.write_all(header.as_bytes()).is_err() {
        return;
    }
    let slice = match opts.truncate_body_at {
        Some(n) => &body[..n.min(body.len())],
        None => body,
    };
    let _ = stream.write_all(slice);
    // Dropping the stream closes the socket; with truncate_body_at set the
    // client sees a short body against the advertised Content-Length.
}
