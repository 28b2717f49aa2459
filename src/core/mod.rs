//! # Common Params Core
//!
//! Core functionality of the crate.
//!
//! The `core` module contains the request model, the [`Transport`] boundary
//! of the request chain and the pure functions which merge common parameters
//! into requests. It is intended to be used by the [`common_params`] crate.
//!
//! [`common_params`]: ../index.html

pub use error::ParamsError;
pub mod error;

pub use transport::Transport;
pub mod transport;

#[cfg(feature = "blocking")]
pub use transport::blocking;

pub use transport_request::{TransportMethod, TransportRequest};
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;

pub use parameters::{CommonParameters, ParameterSource, StaticParameters};
pub mod parameters;

pub use media_type::MediaType;
pub mod media_type;

pub use body::{BodyKind, FormBody, MultipartBody, MultipartKind, Part, RequestBody};
pub mod body;

pub use merge::merge_body;
pub mod merge;

pub use inject::{inject_headers, inject_parameters};
pub mod inject;

pub(crate) mod utils;
