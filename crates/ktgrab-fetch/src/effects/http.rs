use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;
use url::Url;

/// A boxed stream type for HTTP response bodies.
///
/// The stream yields `Result<Bytes, E>` where `E` is the error type of
/// the HTTP client that produced it.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// One HTTP response, decoded just far enough for the download loop.
pub struct HttpResponse<E> {
    /// HTTP status code.
    pub status: u16,

    /// Value of the `Location` header, if present.
    pub location: Option<String>,

    /// Declared `Content-Length`, absent for chunked transfer encoding.
    pub content_length: Option<u64>,

    /// The response body as a byte stream.
    pub body: BoxStream<'static, std::result::Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations must NOT follow redirects themselves: the download
/// loop owns redirect handling so the depth bound stays observable and
/// the `Location` resolution stays a pure, tested function.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures (DNS failure,
    /// connection reset, TLS errors). Non-2xx statuses are data, not
    /// errors; they come back in [`HttpResponse::status`].
    fn get(
        &self,
        url: &Url,
    ) -> impl Future<Output = std::result::Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use futures_util::StreamExt;

    use crate::error::{FetchError, Result};

    /// Production HTTP client implementation using reqwest.
    ///
    /// Redirect following is disabled on the inner client; 3xx
    /// responses surface to the download loop unchanged.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new client with redirects disabled.
        pub fn new() -> Result<Self> {
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &Url,
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.client.get(url.clone()).send().await?;

            let status = response.status().as_u16();
            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let content_length = response
                .headers()
                .get(reqwest::header::CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            let body = response.bytes_stream().boxed();

            Ok(HttpResponse {
                status,
                location,
                content_length,
                body,
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
