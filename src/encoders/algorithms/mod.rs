pub mod chunked;
pub mod errors;
pub mod math;

pub use errors::{DecodeError, find_closest_name};
