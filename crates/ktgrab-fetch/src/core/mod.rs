//! Pure transformations for fetch operations.
//!
//! Nothing here performs I/O; redirect classification and resolution
//! are plain functions so they can be tested without a server.

mod redirect;

pub use redirect::{is_redirect, resolve_redirect};
