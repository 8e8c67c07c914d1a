//! Fetch a URL and return the visible text of its HTML.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod routes;

pub use error::ExtractionError;
pub use extract::{extract, html_to_text};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use models::{ExtractRequest, ExtractResponse};
pub use routes::{create_router, AppState};
