pub mod http_body;
pub mod http_header;
pub mod http_response;
pub mod http_status;
#[cfg(feature = "hyper")]
pub mod hyper_response;
