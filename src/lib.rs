pub mod utils;

#[cfg(feature = "http")]
pub mod http;
