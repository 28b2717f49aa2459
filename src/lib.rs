//! # Common Params
//!
//! Outbound HTTP request transformer which injects a set of common
//! parameters into every request a client sends.
//!
//! * `GET` and `DELETE` requests get the parameters appended to the query
//!   string.
//! * `PUT` and `POST` requests get the parameters merged into the body,
//!   depending on the body encoding:
//!   * form bodies get the parameters appended,
//!   * multipart bodies keep their parts and get one text part per parameter,
//!   * JSON bodies get the parameters written as top-level string members,
//!   * untyped or missing bodies are replaced with a JSON object of the
//!     parameters,
//!   * any other body is sent unchanged.
//! * A separate stage appends common headers to every request.
//!
//! ## Getting started
//!
//! ```toml
//! [dependencies]
//! common-params = "0.1.0"
//! ```
//!
//! ```no_run
//! use common_params::{
//!     core::{StaticParameters, Transport, TransportMethod, TransportRequest},
//!     ParamsClientBuilder,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ParamsClientBuilder::with_reqwest_transport()
//!     .with_body_parameters(
//!         [("app_version", "3.1.0"), ("platform", "linux")]
//!             .into_iter()
//!             .collect::<StaticParameters>(),
//!     )
//!     .with_header_parameters(
//!         [("X-Client", "cli")]
//!             .into_iter()
//!             .collect::<StaticParameters>(),
//!     )
//!     .build()?;
//!
//! let response = client
//!     .send(TransportRequest {
//!         path: "/users".into(),
//!         method: TransportMethod::Get,
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * `full` - enables all non-conflicting features
//! * `reqwest` - uses [`reqwest`] as a transport layer
//! * `blocking` - enables blocking transport and request chain
//!
//! JSON bodies are always handled with [`serde_json`].
//!
//! [`serde_json`]: https://docs.rs/serde_json
//! [`reqwest`]: https://docs.rs/reqwest

#![warn(missing_docs)]

#[doc(inline)]
pub use dx::{ParamsClient, ParamsClientBuilder, ParamsClientConfig};

#[doc(inline)]
pub use crate::core::{CommonParameters, ParameterSource, ParamsError, StaticParameters};

pub mod core;
pub mod dx;
pub mod transport;
