//! # Error types
//!
//! This module contains the error types for the [`common_params`] crate.
//!
//! [`common_params`]: ../index.html

/// Common parameters error type
///
/// This type is used to represent errors that can occur while common
/// parameters are injected into a request or while the request is sent.
/// It is used as the error type for the [`Result`] type.
///
/// Unsupported body encodings and unsupported HTTP methods are **not**
/// errors. Such requests are forwarded untouched.
///
/// # Examples
/// ```
/// use common_params::core::ParamsError;
///
/// fn foo() -> Result<(), ParamsError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   ParamsError::Transport(_) => println!("Transport error"),
///   ParamsError::Deserialization(_) => println!("Malformed body"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// this error is returned when the transport layer fails
    #[error("Transport error: {0}")]
    Transport(String),

    /// this error is returned when a merged body can't be serialized or
    /// encoded back into its charset
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// this error is returned when a body that declares a JSON media type
    /// doesn't hold a single JSON object
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// this error is returned when the common parameters source fails
    #[error("Parameter source error: {0}")]
    ParameterSource(String),

    /// this error is returned when the initialization of client fails
    #[error("Client initialization error: {0}")]
    ClientInitialization(String),
}
