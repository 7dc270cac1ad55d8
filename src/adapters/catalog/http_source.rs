//! HTTP catalog source. One GET per load, no retry.

use crate::domain::LoadError;
use crate::ports::CatalogSource;
use reqwest::Client;
use tracing::debug;

pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Unreachable(format!("request failed: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::Unreachable(format!("HTTP {}", status.as_u16())));
        }
        debug!(url = %self.url, %status, "catalog response");

        res.text()
            .await
            .map_err(|e| LoadError::Unreachable(format!("read body: {}", e)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accept one connection on 127.0.0.1 and answer it with `response`.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}/workshops.json", addr)
    }

    fn source(url: String) -> HttpCatalogSource {
        HttpCatalogSource {
            client: Client::builder().no_proxy().build().unwrap(),
            url,
        }
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let err = source(url).fetch().await.unwrap_err();
        assert_eq!(err, LoadError::Unreachable("HTTP 500".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]",
        )
        .await;
        assert_eq!(source(url).fetch().await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_fetch_closed_port_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(format!("http://{}/workshops.json", addr))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Unreachable(_)));
    }
}
