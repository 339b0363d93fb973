#[cfg(test)]
mod tests {
    use downcount::libs::config::{Config, Target};
    use downcount::libs::server::Server;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn test_config() -> Config {
        Config {
            target: Target::parse("2030-01-01T00:00:00Z"),
            port: 0,
        }
    }

    async fn start_server() -> SocketAddr {
        let server = Server::bind(("127.0.0.1", 0), &test_config()).await.unwrap();
        let addr = server.local_addr().unwrap();
        tokio::spawn(server.run());
        addr
    }

    async fn request(addr: SocketAddr, head: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(head.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_countdown_page_on_root() {
        let addr = start_server().await;
        let response = request(addr, "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n").await;
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("Content-Type: text/html; charset=utf-8"));
        assert!(response.contains("const TARGET = \"2030-01-01T00:00:00Z\";"));
        assert!(response.contains("setInterval(tick, 1000);"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let addr = start_server().await;
        let response = request(addr, "GET /metrics HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(response.starts_with("HTTP/1.1 404 Not Found"));
    }

    #[tokio::test]
    async fn test_non_get_method_is_rejected() {
        let addr = start_server().await;
        let response = request(addr, "POST / HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\n\r\n").await;
        assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed"));
    }

    #[tokio::test]
    async fn test_serves_concurrent_connections() {
        let addr = start_server().await;
        let first = tokio::spawn(request(addr, "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n"));
        let second = tokio::spawn(request(addr, "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n"));
        assert!(first.await.unwrap().starts_with("HTTP/1.1 200 OK"));
        assert!(second.await.unwrap().starts_with("HTTP/1.1 200 OK"));
    }
}
