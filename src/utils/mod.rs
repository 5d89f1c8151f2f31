//! Miscellaneous components used in the library.

mod error;
pub use error::HarnessError;
