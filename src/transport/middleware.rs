//! # Middlewares
//!
//! Request chain stages which inject common parameters and headers before
//! handing the request to the wrapped [`Transport`].
//!
//! Both stages ask their [`ParameterSource`] once per request, build at most
//! one new request and forward exactly that request. A failing source or a
//! failing merge stops the request before it reaches the wrapped transport.

use std::sync::Arc;

use log::debug;

use crate::core::{
    inject_headers, inject_parameters, ParameterSource, ParamsError, Transport, TransportRequest,
    TransportResponse,
};

/// Injects common parameters into the query string or body of every request.
///
/// `GET` and `DELETE` requests get the parameters in the query string, `PUT`
/// and `POST` requests in the body. See [`inject_parameters`] for details.
///
/// # Examples
/// ```
/// use common_params::{
///     core::{ParamsError, Transport, TransportRequest, TransportResponse, StaticParameters},
///     transport::middleware::BodyParamsMiddleware,
/// };
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///     async fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError> {
///         Ok(TransportResponse::default())
///     }
/// }
///
/// let middleware = BodyParamsMiddleware::new(
///     MyTransport,
///     [("app_version", "1.4.2")].into_iter().collect::<StaticParameters>(),
/// );
/// ```
pub struct BodyParamsMiddleware<T> {
    /// next stage of the chain
    pub transport: T,

    /// common parameters provider
    pub source: Arc<dyn ParameterSource>,
}

impl<T> BodyParamsMiddleware<T> {
    /// Wrap `transport` with parameters from `source`.
    pub fn new<S>(transport: T, source: S) -> Self
    where
        S: ParameterSource + 'static,
    {
        Self {
            transport,
            source: Arc::new(source),
        }
    }

    fn prepare(&self, request: TransportRequest) -> Result<TransportRequest, ParamsError> {
        match self.source.parameters()? {
            Some(parameters) => inject_parameters(&request, &parameters),
            None => {
                debug!("No common parameters for {} {}", request.method, request.path);
                Ok(request)
            }
        }
    }
}

#[async_trait::async_trait]
impl<T> Transport for BodyParamsMiddleware<T>
where
    T: Transport + Sync + Send,
{
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError> {
        let req = self.prepare(req)?;
        self.transport.send(req).await
    }
}

#[cfg(feature = "blocking")]
impl<T> crate::core::blocking::Transport for BodyParamsMiddleware<T>
where
    T: crate::core::blocking::Transport,
{
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError> {
        let req = self.prepare(req)?;
        self.transport.send(req)
    }
}

/// Appends a fixed set of headers to every request.
///
/// Only entries with a non-empty name and value are sent. Headers are
/// appended, never replaced.
pub struct HeaderParamsMiddleware<T> {
    /// next stage of the chain
    pub transport: T,

    /// headers provider
    pub source: Arc<dyn ParameterSource>,
}

impl<T> HeaderParamsMiddleware<T> {
    /// Wrap `transport` with headers from `source`.
    pub fn new<S>(transport: T, source: S) -> Self
    where
        S: ParameterSource + 'static,
    {
        Self {
            transport,
            source: Arc::new(source),
        }
    }

    fn prepare(&self, request: TransportRequest) -> Result<TransportRequest, ParamsError> {
        let headers = self.source.parameters()?;
        Ok(inject_headers(&request, headers.as_ref()))
    }
}

#[async_trait::async_trait]
impl<T> Transport for HeaderParamsMiddleware<T>
where
    T: Transport + Sync + Send,
{
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError> {
        let req = self.prepare(req)?;
        self.transport.send(req).await
    }
}

#[cfg(feature = "blocking")]
impl<T> crate::core::blocking::Transport for HeaderParamsMiddleware<T>
where
    T: crate::core::blocking::Transport,
{
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, ParamsError> {
        let req = self.prepare(req)?;
        self.transport.send(req)
    }
}
