use async_trait::async_trait;

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or no response arrived.
    #[error("{0}")]
    Request(String),
    /// A response arrived but its body could not be read.
    #[error("{0}")]
    Body(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

// ── Fetcher seam ─────────────────────────────────────────────────────────────

/// Retrieves the body of a URL as text.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// ── reqwest implementation ───────────────────────────────────────────────────

/// Plain GET with the client's default settings: no timeout, no extra
/// headers, library-default redirect and TLS handling.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(describe(&e)))?;

        // Non-2xx bodies are returned as content; the status is only logged.
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, %status, "upstream returned non-success status");
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(describe(&e)))
    }
}

/// Render an error with its full `source()` chain, outermost first.
///
/// reqwest's own `Display` stops at the top level ("error sending request
/// for url ..."), which hides causes such as a refused connection.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
