//! # Developer Experience
//!
//! This module provides the builder which assembles the request chain.
//! It is intended to be used by the [`common_params`] crate.
//!
//! [`common_params`]: ../index.html

pub use params_client::{ParamsClient, ParamsClientBuilder, ParamsClientConfig};
pub mod params_client;
