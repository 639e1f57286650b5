/// Load failures for the static JSON documents backing the page.
///
/// Transport errors, non-success statuses, and malformed bodies are distinct
/// variants for logging, but callers treat all three as the single "load
/// failed" outcome and substitute fallback content instead of surfacing an
/// error state.

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
