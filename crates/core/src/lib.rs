#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod model;

pub use error::Error;
pub use filter::RecordFilter;
