//! Blocking HTTP fetching behind a small trait so fetch-driven code can be
//! exercised without a network.

use crate::error::{Error, Result};

/// A successful HTTP response.
#[derive(Debug, Clone)]
pub struct Fetched {
    /// Final URL after redirects.
    pub url: String,
    pub status: u16,
    /// `Content-Type` header, empty when absent.
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Fetched {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Issues a GET request. Non-success statuses are errors.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Fetched>;
}

/// [`Fetch`] backed by a reqwest blocking client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::HttpError {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Fetched> {
        log::debug!("GET {url}");
        let http_err = |e: reqwest::Error| Error::HttpError {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.bytes().map_err(http_err)?.to_vec();

        Ok(Fetched {
            url: final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_lossy() {
        let fetched = Fetched {
            url: "https://example.com".into(),
            status: 200,
            content_type: "text/html".into(),
            body: vec![b'o', b'k', 0xFF],
        };
        assert_eq!(fetched.text(), "ok\u{FFFD}");
    }

    #[test]
    fn test_status_error_message() {
        let err = Error::HttpStatus {
            url: "https://example.com/missing.png".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 from https://example.com/missing.png");
    }
}
