//! Minimal HTTP/1.1 server that replays scripted responses for integration tests.
//!
//! Each accepted connection gets the next scripted `(status, body)` pair; once
//! the script runs out the last entry is repeated. Request heads are recorded
//! so tests can assert on the path, query and headers curl sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Scripted {
    pub status: u16,
    pub body: String,
}

impl Scripted {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: format!("{{\"message\":\"status {}\"}}", status),
        }
    }
}

/// Handle to a running server. The server runs until the process exits.
pub struct SearchServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl SearchServer {
    /// Request heads received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Just the request lines (`GET /path?query HTTP/1.1`).
    pub fn request_lines(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.lines().next().unwrap_or("").to_string())
            .collect()
    }
}

/// Starts a server replaying `script` and returns its handle.
pub fn start(script: Vec<Scripted>) -> SearchServer {
    assert!(!script.is_empty(), "script needs at least one response");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        let mut served = 0usize;
        for stream in listener.incoming().flatten() {
            let reply = script[served.min(script.len() - 1)].clone();
            served += 1;
            handle(stream, &reply, &recorded);
        }
    });
    SearchServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// A base URL nothing listens on (bind, read the port, drop the listener).
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, reply: &Scripted, recorded: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let mut head = Vec::new();
    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(_) => return,
        };
        head.extend_from_slice(&buf[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    let request = String::from_utf8_lossy(&head).to_string();
    recorded.lock().unwrap().push(request);

    let reason = match reply.status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reason,
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// JSON payload in the shape of GitHub's `/search/users` response.
pub fn users_payload(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                "{{\"login\":\"user{i}\",\"id\":{id},\"avatar_url\":\"https://avatars.example/{id}\",\"html_url\":\"https://github.com/user{i}\",\"type\":\"User\",\"score\":1.0}}",
                i = i,
                id = 1000 + i
            )
        })
        .collect();
    format!(
        "{{\"total_count\":{},\"incomplete_results\":false,\"items\":[{}]}}",
        n,
        items.join(",")
    )
}
