//! Params client module
//!
//! This module contains the [`ParamsClientBuilder`] which composes the
//! parameter and header middlewares in front of a transport.
//!
//! Requests pass the header stage first, then the parameter stage, then the
//! transport.

use std::sync::Arc;

use derive_builder::Builder;
use log::info;

use crate::{
    core::{ParameterSource, ParamsError, StaticParameters},
    transport::middleware::{BodyParamsMiddleware, HeaderParamsMiddleware},
};

#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;

/// Request chain with common parameters and headers in front of `T`.
///
/// It implements [`Transport`] (and [`blocking::Transport`] with the
/// `blocking` feature) whenever `T` does.
///
/// # Examples
/// ```
/// use common_params::{core::StaticParameters, ParamsClientBuilder};
///
/// # use common_params::core::{Transport, TransportRequest, TransportResponse, ParamsError};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, ParamsError> {
/// #         unimplemented!()
/// #     }
/// # }
/// # fn main() -> Result<(), ParamsError> {
/// let client = ParamsClientBuilder::default()
///     .with_transport(MyTransport)
///     .with_body_parameters([("app_version", "3.1.0")].into_iter().collect::<StaticParameters>())
///     .with_header_parameters([("X-Platform", "linux")].into_iter().collect::<StaticParameters>())
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`Transport`]: ../../core/trait.Transport.html
/// [`blocking::Transport`]: ../../core/blocking/trait.Transport.html
pub type ParamsClient<T> = HeaderParamsMiddleware<BodyParamsMiddleware<T>>;

/// Client configuration.
///
/// Not intended to be used directly. Use [`ParamsClientBuilder`] instead.
#[derive(Builder)]
#[builder(
    pattern = "owned",
    name = "ParamsClientBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct ParamsClientConfig<T> {
    /// Transport layer
    pub(crate) transport: T,

    /// Common parameters for query strings and bodies
    #[builder(setter(custom), default = "None")]
    pub(crate) body_parameters: Option<Arc<dyn ParameterSource>>,

    /// Common headers
    #[builder(setter(custom), default = "None")]
    pub(crate) header_parameters: Option<Arc<dyn ParameterSource>>,
}

impl<T> ParamsClientBuilder<T> {
    /// Source of parameters merged into query strings and bodies.
    ///
    /// Nothing is injected when no source is set.
    pub fn with_body_parameters<S>(mut self, source: S) -> Self
    where
        S: ParameterSource + 'static,
    {
        self.body_parameters = Some(Some(Arc::new(source)));
        self
    }

    /// Source of headers appended to every request.
    ///
    /// Nothing is appended when no source is set.
    pub fn with_header_parameters<S>(mut self, source: S) -> Self
    where
        S: ParameterSource + 'static,
    {
        self.header_parameters = Some(Some(Arc::new(source)));
        self
    }

    /// Build the request chain.
    ///
    /// # Errors
    /// Returns [`ParamsError::ClientInitialization`] when no transport has
    /// been set.
    pub fn build(self) -> Result<ParamsClient<T>, ParamsError> {
        self.build_internal()
            .map_err(|err| ParamsError::ClientInitialization(err.to_string()))
            .map(|pre_build| {
                info!(
                    "Client Configuration: \n body parameters: {}\n header parameters: {}",
                    pre_build.body_parameters.is_some(),
                    pre_build.header_parameters.is_some()
                );

                HeaderParamsMiddleware {
                    source: pre_build.header_parameters.unwrap_or_else(no_parameters),
                    transport: BodyParamsMiddleware {
                        source: pre_build.body_parameters.unwrap_or_else(no_parameters),
                        transport: pre_build.transport,
                    },
                }
            })
    }
}

#[cfg(feature = "reqwest")]
impl ParamsClientBuilder<TransportReqwest> {
    /// Creates a new [`ParamsClientBuilder`] with the default
    /// [`TransportReqwest`] transport.
    ///
    /// # Examples
    /// ```
    /// use common_params::{core::StaticParameters, ParamsClientBuilder};
    ///
    /// let client = ParamsClientBuilder::with_reqwest_transport()
    ///     .with_body_parameters([("token", "abc")].into_iter().collect::<StaticParameters>())
    ///     .build();
    /// ```
    pub fn with_reqwest_transport() -> Self {
        Self::default().with_transport(TransportReqwest::new())
    }
}

#[cfg(all(feature = "reqwest", feature = "blocking"))]
impl ParamsClientBuilder<crate::transport::reqwest::blocking::TransportReqwest> {
    /// Creates a new [`ParamsClientBuilder`] with the blocking
    /// [`TransportReqwest`] transport.
    ///
    /// [`TransportReqwest`]: ../../transport/reqwest/blocking/struct.TransportReqwest.html
    pub fn with_reqwest_blocking_transport() -> Self {
        Self::default().with_transport(crate::transport::reqwest::blocking::TransportReqwest::new())
    }
}

fn no_parameters() -> Arc<dyn ParameterSource> {
    Arc::new(StaticParameters::default())
}
