//! Headers module
//!
//! This module provides a constants for HTTP headers.
//!

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub(crate) const APPLICATION_JSON_UTF8: &str = "application/json; charset=UTF-8";
pub(crate) const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
