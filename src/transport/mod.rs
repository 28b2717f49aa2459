//! # Transport Module
//!
//! This module contains the request chain stages which can be put in front
//! of any [`Transport`] and the [`reqwest`] based transport implementation.
//! It is intended to be used by the [`common_params`] crate.
//!
//! [`Transport`]: ../core/trait.Transport.html
//! [`reqwest`]: https://docs.rs/reqwest
//! [`common_params`]: ../index.html

pub use middleware::{BodyParamsMiddleware, HeaderParamsMiddleware};
pub mod middleware;

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;
