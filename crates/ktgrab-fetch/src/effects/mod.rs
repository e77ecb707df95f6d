//! I/O operations: the HTTP client abstraction, the download loop, and
//! the presence resolver.

mod ensure;
mod fetcher;
mod http;

pub use ensure::{ensure_present, missing_artifacts};
pub use fetcher::Fetcher;
pub use http::{BoxStream, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
