//! Minimal HTTP/1.1 responder for exercising the fetch paths offline.

use crate::config::ScraperConfig;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Config pointed at local servers: short timeout, no proxy, tiny delays
pub fn test_config() -> ScraperConfig {
    ScraperConfig {
        timeout_secs: 2,
        page_delay_secs: 0.01,
        image_delay_secs: 0.0,
        use_system_proxy: false,
        ..ScraperConfig::default()
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Respond {
        status: u16,
        content_type: &'static str,
        body: Vec<u8>,
    },
    Hang,
}

#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    reply: Reply,
}

impl Route {
    pub fn html(path: &str, body: &str) -> Self {
        Self::bytes(path, "text/html; charset=utf-8", body.as_bytes().to_vec())
    }

    pub fn bytes(path: &str, content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            path: path.to_string(),
            reply: Reply::Respond {
                status: 200,
                content_type,
                body,
            },
        }
    }

    pub fn status(path: &str, status: u16) -> Self {
        Self {
            path: path.to_string(),
            reply: Reply::Respond {
                status,
                content_type: "text/plain",
                body: b"error".to_vec(),
            },
        }
    }

    /// Accepts the request and never answers
    pub fn hang(path: &str) -> Self {
        Self {
            path: path.to_string(),
            reply: Reply::Hang,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Header lookup by lowercase name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let recorded = Arc::clone(&requests);
        let task = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    handle(stream, &routes, &recorded).await;
                });
            }
        });

        Self {
            addr,
            requests,
            task,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Request paths in arrival order
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A URL on a local port with nothing listening
pub async fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/nothing-here", addr)
}

async fn handle(mut stream: TcpStream, routes: &[Route], recorded: &Mutex<Vec<RecordedRequest>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf).to_string();
    let mut lines = head.split("\r\n");
    let path = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    recorded.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        headers,
    });

    let reply = routes
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.reply.clone())
        .unwrap_or(Reply::Respond {
            status: 404,
            content_type: "text/plain",
            body: b"not found".to_vec(),
        });

    match reply {
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        Reply::Respond {
            status,
            content_type,
            body,
        } => {
            let head = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                reason(status),
                content_type,
                body.len()
            );
            let _ = stream.write_all(head.as_bytes()).await;
            let _ = stream.write_all(&body).await;
            let _ = stream.shutdown().await;
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
