// src/core/net.rs
// Blocking HTTP GET. Scrapes run on their own thread, so blocking is fine here.

use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::ScrapeOptions;
use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Source of page bodies. `HttpClient` talks to the wiki; tests plug in
/// canned pages.
pub trait Fetch {
    /// GET `url` and return the body. Non-success statuses are errors.
    fn get(&self, url: &Url) -> Result<String, FetchError>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(opts.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &Url) -> Result<String, FetchError> {
        info!("Loading web page: {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        let status = resp.status();
        info!("Page returned status code: {}", status.as_u16());
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = resp
            .text()
            .map_err(|source| FetchError::Body { url: url.to_string(), source })?;
        debug!("{url}: {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    // Serves one canned response per connection, in order, and hands back
    // each raw request.
    fn serve(responses: Vec<(u16, &'static str)>) -> (Url, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut req = Vec::new();
                let mut buf = [0u8; 1024];
                while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 { break; }
                    req.extend_from_slice(&buf[..n]);
                }
                let _ = tx.send(String::from_utf8_lossy(&req).into_owned());

                let resp = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(resp.as_bytes()).unwrap();
            }
        });

        (Url::parse(&format!("http://{addr}/wiki/NPCs")).unwrap(), rx)
    }

    fn client() -> HttpClient {
        let mut opts = ScrapeOptions::default();
        opts.set_timeout_secs(5);
        HttpClient::new(&opts).unwrap()
    }

    #[test]
    fn non_success_status_is_an_error_then_body_comes_back() {
        let (url, requests) = serve(vec![(404, "gone"), (200, "hello")]);
        let http = client();

        match http.get(&url) {
            Err(FetchError::Status { status, url: failed }) => {
                assert_eq!(status, 404);
                assert!(failed.ends_with("/wiki/NPCs"));
            }
            other => panic!("expected 404 status error, got {other:?}"),
        }
        assert_eq!(http.get(&url).unwrap(), "hello");

        let first = requests.recv().unwrap();
        assert!(first.starts_with("GET /wiki/NPCs HTTP/1.1"));
        assert!(first.to_ascii_lowercase().contains(&format!("user-agent: {}", USER_AGENT.to_ascii_lowercase())));
    }

    #[test]
    fn refused_connection_is_a_request_error() {
        // bind then drop to get a port nothing listens on
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
        assert!(matches!(client().get(&url), Err(FetchError::Request { .. })));
    }
}
