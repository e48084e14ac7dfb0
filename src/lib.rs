// Library root. Re-exports the formatters so integration tests can `use scilent::*`.

pub mod config;
pub mod error;
pub mod format;
pub mod locale;
pub mod logging;
pub mod timestamp;

pub use error::{Error, Result};
pub use format::*;
pub use locale::Locale;
pub use timestamp::{Timestamp, TimestampValue};
