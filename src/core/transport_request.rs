//! # Transport Request
//!
//! This module contains the `TransportRequest` struct and related types.
//!
//! Query parameters and headers are kept as ordered lists of pairs so that
//! insertion order survives and the same name may appear more than once.

use std::fmt::Display;

use super::RequestBody;

/// The method to use for a request.
///
/// This enum represents the method to use for a request. It is used by the
/// [`TransportRequest`] struct.
///
/// [`TransportRequest`]: struct.TransportRequest.html
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash)]
pub enum TransportMethod {
    /// `GET` request. Common parameters go to the query string.
    #[default]
    Get,

    /// `POST` request. Common parameters go to the body.
    Post,

    /// `PUT` request. Common parameters go to the body.
    Put,

    /// `DELETE` request. Common parameters go to the query string.
    Delete,

    /// `PATCH` request. Passed through untouched.
    Patch,

    /// `HEAD` request. Passed through untouched.
    Head,

    /// `OPTIONS` request. Passed through untouched.
    Options,
}

impl TransportMethod {
    /// Whether the method may carry a request body.
    pub fn allows_body(&self) -> bool {
        matches!(
            self,
            TransportMethod::Post | TransportMethod::Put | TransportMethod::Patch
        )
    }
}

impl Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportMethod::Get => "GET",
                TransportMethod::Post => "POST",
                TransportMethod::Put => "PUT",
                TransportMethod::Delete => "DELETE",
                TransportMethod::Patch => "PATCH",
                TransportMethod::Head => "HEAD",
                TransportMethod::Options => "OPTIONS",
            }
        )
    }
}

/// This struct represents a request travelling through the chain.
///
/// All fields are representing certain parts of the request that can be used
/// to prepare one. Stages never mutate a received request in place, they
/// build a new one and forward it.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportRequest {
    /// path to the resource
    pub path: String,

    /// query parameters to be sent with the request, in order
    pub query_parameters: Vec<(String, String)>,

    /// method to use for the request
    pub method: TransportMethod,

    /// headers to be sent with the request, in order
    pub headers: Vec<(String, String)>,

    /// body to be sent with the request
    pub body: Option<RequestBody>,
}

impl TransportRequest {
    /// Values of every query parameter called `name`, in order.
    pub fn query_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.query_parameters
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Values of every header called `name` (case-insensitive), in order.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
