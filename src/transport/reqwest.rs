//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to send requests over HTTP using the [`reqwest`] crate.
//! It is the last stage of the request chain.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`reqwest`]: https://docs.rs/reqwest
//! [`reqwest` feature]: ../index.html#features

use bytes::Bytes;
use log::info;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method, StatusCode,
};

use crate::core::{
    utils::encoding::encode_form, ParamsError, RequestBody, Transport, TransportMethod,
    TransportRequest, TransportResponse,
};

/// This struct is used to send requests using the [`reqwest`] crate.
///
/// [`reqwest`]: https://docs.rs/reqwest
#[derive(Clone, Debug)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,

    /// The hostname to use for requests.
    /// It is used as the base URL for all requests.
    ///
    /// It defaults to `http://localhost/`.
    /// # Examples
    /// ```
    /// use common_params::transport::TransportReqwest;
    ///
    /// let transport = {
    ///    let mut transport = TransportReqwest::default();
    ///    transport.hostname = "https://wherever.you.want.com/".into();
    ///    transport
    /// };
    /// ```
    pub hostname: String,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ParamsError> {
        let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
        info!("{} {}", request.method, request_url);
        let headers = prepare_headers(&request.headers, request.body.as_ref())?;

        let builder = self
            .reqwest_client
            .request(prepare_method(request.method), request_url)
            .headers(headers);
        let builder = match prepare_body(request.method, request.body.as_ref()) {
            Some(body) => builder.body(body),
            None => builder,
        };

        let result = builder
            .send()
            .await
            .map_err(|e| ParamsError::Transport(e.to_string()))?;

        let status = result.status();
        let headers = result.headers().clone();
        result
            .bytes()
            .await
            .map_err(|e| ParamsError::Transport(e.to_string()))
            .map(|bytes| create_result(status, &headers, bytes))
    }
}

impl Default for TransportReqwest {
    fn default() -> Self {
        Self {
            reqwest_client: reqwest::Client::default(),
            hostname: "http://localhost/".into(),
        }
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using [`reqwest::Client::default()`]
    /// and a default hostname of `http://localhost/`.
    ///
    /// # Example
    /// ```
    /// use common_params::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`TransportReqwest`]: ./struct.TransportReqwest.html
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// set the custom hostname for request
    pub fn set_hostname<S>(&mut self, hostname: S)
    where
        S: Into<String>,
    {
        self.hostname = hostname.into();
    }
}

fn prepare_method(method: TransportMethod) -> Method {
    match method {
        TransportMethod::Get => Method::GET,
        TransportMethod::Post => Method::POST,
        TransportMethod::Put => Method::PUT,
        TransportMethod::Delete => Method::DELETE,
        TransportMethod::Patch => Method::PATCH,
        TransportMethod::Head => Method::HEAD,
        TransportMethod::Options => Method::OPTIONS,
    }
}

// Request headers are appended in order; the body's own content type wins
// over any `Content-Type` set on the request.
fn prepare_headers(
    request_headers: &[(String, String)],
    body: Option<&RequestBody>,
) -> Result<HeaderMap, ParamsError> {
    let mut headers = HeaderMap::new();

    for (name, value) in request_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| ParamsError::Transport(err.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|err| ParamsError::Transport(err.to_string()))?;
        headers.append(name, value);
    }

    if let Some(content_type) = body.and_then(RequestBody::content_type) {
        let value = HeaderValue::from_str(&content_type)
            .map_err(|err| ParamsError::Transport(err.to_string()))?;
        headers.insert(CONTENT_TYPE, value);
    }

    Ok(headers)
}

// Methods which carry a body always get one, empty when the request has none.
fn prepare_body(method: TransportMethod, body: Option<&RequestBody>) -> Option<Vec<u8>> {
    match body {
        Some(body) => Some(body.to_bytes()),
        None if method.allows_body() => Some(Vec::new()),
        None => None,
    }
}

fn prepare_url(hostname: &str, path: &str, query_params: &[(String, String)]) -> String {
    let base = format!(
        "{}/{}",
        hostname.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    if query_params.is_empty() {
        return base;
    }

    format!("{}?{}", base, encode_form(query_params))
}

fn create_result(status: StatusCode, headers: &HeaderMap, body: Bytes) -> TransportResponse {
    TransportResponse {
        status: status.as_u16(),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect(),
        body: (!body.is_empty()).then(|| body.to_vec()),
    }
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Reqwest Transport Blocking Implementation
    //!
    //! This module contains the blocking [`TransportReqwest`] struct.
    //!
    //! It requires the [`reqwest` and `blocking` feature] to be enabled.
    //!
    //! [`TransportReqwest`]: ./struct.TransportReqwest.html
    //! [`reqwest` and `blocking` feature]: ../../index.html#features

    use log::info;

    use crate::{
        core::{ParamsError, TransportRequest, TransportResponse},
        transport::reqwest::{
            create_result, prepare_body, prepare_headers, prepare_method, prepare_url,
        },
    };

    /// This struct is used to send blocking requests using the [`reqwest`]
    /// crate.
    ///
    /// It requires the [`reqwest` and `blocking` feature] to be enabled.
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    #[derive(Clone, Debug)]
    pub struct TransportReqwest {
        reqwest_client: reqwest::blocking::Client,

        /// The hostname to use for requests.
        /// It is used as the base URL for all requests.
        ///
        /// It defaults to `http://localhost/`.
        pub hostname: String,
    }

    impl crate::core::blocking::Transport for TransportReqwest {
        fn send(&self, request: TransportRequest) -> Result<TransportResponse, ParamsError> {
            let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
            info!("{} {}", request.method, request_url);
            let headers = prepare_headers(&request.headers, request.body.as_ref())?;

            let builder = self
                .reqwest_client
                .request(prepare_method(request.method), request_url)
                .headers(headers);
            let builder = match prepare_body(request.method, request.body.as_ref()) {
                Some(body) => builder.body(body),
                None => builder,
            };

            let result = builder
                .send()
                .map_err(|e| ParamsError::Transport(e.to_string()))?;

            let status = result.status();
            let headers = result.headers().clone();
            result
                .bytes()
                .map_err(|e| ParamsError::Transport(e.to_string()))
                .map(|bytes| create_result(status, &headers, bytes))
        }
    }

    impl Default for TransportReqwest {
        fn default() -> Self {
            Self {
                reqwest_client: reqwest::blocking::Client::default(),
                hostname: "http://localhost/".into(),
            }
        }
    }

    impl TransportReqwest {
        /// Create a new blocking [`TransportReqwest`] instance.
        ///
        /// [`TransportReqwest`]: ./struct.TransportReqwest.html
        pub fn new() -> Self {
            Self::default()
        }
    }

}
