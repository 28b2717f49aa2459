//! # Transport module
//!
//! This module contains the [`Transport`] trait which is the boundary of the
//! request chain.
//!
//! Every stage of the chain (the parameter and header middlewares as well as
//! the real HTTP client) implements this trait. A stage receives a
//! [`TransportRequest`], may build a new one from it and forwards exactly one
//! request to the next stage.

use super::{ParamsError, TransportRequest, TransportResponse};

/// This trait is used to send requests down the chain.
///
/// You can implement this trait for your own types, or use one of the provided
/// features to use a transport library.
///
/// # Examples
/// ```
/// use common_params::core::{Transport, TransportRequest, TransportResponse, ParamsError};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to the next stage.
    ///
    /// # Errors
    /// Should return an [`ParamsError::Transport`] if the request cannot be sent.
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError>;
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Blocking transport module
    //!
    //! This module contains the blocking flavour of the [`Transport`] trait.

    use crate::core::{ParamsError, TransportRequest, TransportResponse};

    /// This trait is used to send requests down the chain.
    ///
    /// This trait is used for blocking requests.
    ///
    /// # Examples
    /// ```
    /// use common_params::core::{blocking::Transport, TransportRequest, TransportResponse, ParamsError};
    ///
    /// struct MyTransport;
    ///
    /// impl Transport for MyTransport {
    ///    fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError> {
    ///         // Send your request here
    ///
    ///         Ok(TransportResponse::default())
    ///    }
    /// }
    /// ```
    pub trait Transport {
        /// Send a request to the next stage.
        ///
        /// # Errors
        /// Should return an [`ParamsError::Transport`] if the request cannot be sent.
        fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError>;
    }
}
