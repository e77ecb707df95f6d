pub use error::{Error, Result};

mod error;
pub mod os;
pub mod perms;
pub mod profile;
pub mod release;
