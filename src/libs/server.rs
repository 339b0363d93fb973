//! Minimal HTTP surface for the countdown page.
//!
//! The service exposes exactly one document: `GET /` returns the rendered
//! countdown page, any other path is a 404, and non-GET methods get a 405.
//! With no other routes, no query parameters, and no request bodies, a small
//! hand-rolled responder on `tokio::net::TcpListener` covers the whole
//! surface: read the request head, match the request line, write one
//! response, close.
//!
//! The page is rendered once at bind time from the immutable configuration
//! and shared across connections; each accepted connection is served by its
//! own spawned task.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::page;
use crate::{msg_debug, msg_error_anyhow, msg_warning};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};

/// Upper bound on the request head the server is willing to buffer.
const MAX_REQUEST_BYTES: usize = 8 * 1024;

/// The countdown HTTP server.
pub struct Server {
    listener: TcpListener,
    page: Arc<String>,
}

impl Server {
    /// Binds the listen socket and renders the page it will serve.
    pub async fn bind<A: ToSocketAddrs>(addr: A, config: &Config) -> Result<Self> {
        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => return Err(msg_error_anyhow!(Message::ServerBindFailed(e.to_string()))),
        };
        Ok(Server {
            listener,
            page: Arc::new(page::render(config)),
        })
    }

    /// The address the server is actually listening on.
    ///
    /// Useful when binding to port 0 and letting the OS pick.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the accept loop until the process is stopped.
    ///
    /// Accept errors are transient (e.g. a connection reset before accept)
    /// and logged rather than propagated; per-connection errors terminate
    /// only that connection's task.
    pub async fn run(self) -> Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, _)) => {
                    let page = self.page.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_client(stream, page).await {
                            msg_debug!(format!("Connection error: {}", e));
                        }
                    });
                }
                Err(e) => msg_warning!(Message::ConnectionFailed(e.to_string())),
            }
        }
    }
}

/// Serves a single connection: one request head in, one response out.
async fn handle_client(mut stream: TcpStream, page: Arc<String>) -> Result<()> {
    let head = read_request_head(&mut stream).await?;
    let (method, path) = parse_request_line(&head);
    let (status, content_type, body) = match (method.as_str(), path.as_str()) {
        ("GET", "/") => ("200 OK", "text/html; charset=utf-8", page.as_str()),
        ("GET", _) => ("404 Not Found", "text/plain; charset=utf-8", "Not Found"),
        _ => ("405 Method Not Allowed", "text/plain; charset=utf-8", "Method Not Allowed"),
    };
    msg_debug!(format!("{} {} -> {}", method, path, status));
    stream.write_all(http_response(status, content_type, body).as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Reads until the end of the request head or the size cap, whichever first.
async fn read_request_head(stream: &mut TcpStream) -> Result<String> {
    let mut head = Vec::with_capacity(512);
    let mut chunk = [0u8; 512];
    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..n]);
        if head.windows(4).any(|window| window == b"\r\n\r\n") || head.len() >= MAX_REQUEST_BYTES {
            break;
        }
    }
    Ok(String::from_utf8_lossy(&head).into_owned())
}

/// Extracts the method and path from the request line.
fn parse_request_line(head: &str) -> (String, String) {
    let mut parts = head.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    (method, path)
}

/// Assembles a complete HTTP/1.1 response with a closed connection.
fn http_response(status: &str, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    )
}
