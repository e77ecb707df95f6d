use url::Url;

use crate::error::{FetchError, Result};

/// Returns `true` for the redirect statuses this fetcher follows.
///
/// # Recognized Redirect Codes
///
/// - 301: Moved Permanently
/// - 302: Found
/// - 307: Temporary Redirect
/// - 308: Permanent Redirect
///
/// 303 is not followed; release asset hosts never emit it for GET and
/// it surfaces as an unexpected status instead.
///
/// # Examples
///
/// ```
/// use ktgrab_fetch::is_redirect;
///
/// assert!(is_redirect(302));
/// assert!(!is_redirect(200));
/// ```
pub fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 307 | 308)
}

/// Resolve a Location header value against the URL that produced it.
///
/// A relative target becomes absolute against the *current* request URL
/// (not the original one); an already-absolute target passes through
/// unchanged.
///
/// # Examples
///
/// ```
/// use ktgrab_fetch::resolve_redirect;
/// use url::Url;
///
/// let base = Url::parse("https://host/a/b/c").unwrap();
/// let next = resolve_redirect(&base, "/x/y?z=1").unwrap();
/// assert_eq!(next.as_str(), "https://host/x/y?z=1");
/// ```
pub fn resolve_redirect(base: &Url, location: &str) -> Result<Url> {
    base.join(location)
        .map_err(|_| FetchError::InvalidUrl(location.to_string()))
}
