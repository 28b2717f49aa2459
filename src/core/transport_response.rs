//! # Transport Response
//!
//! This module contains the `TransportResponse` struct.
//!
//! It is used as the response type for the [`Transport`] trait. Middlewares
//! never touch it, they hand back whatever the next stage returned.
//!
//! [`Transport`]: ../transport/trait.Transport.html

/// This struct is used to represent the response to a request.
/// It is used as the response type for the [`Transport`] trait.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// status code of the response
    pub status: u16,

    /// headers of the response
    pub headers: Vec<(String, String)>,

    /// body of the response
    pub body: Option<Vec<u8>>,
}
