pub mod charset;
pub mod encoding;
pub mod headers;
