//! # Common parameters
//!
//! This module contains the [`CommonParameters`] map and the
//! [`ParameterSource`] capability which produces it for every request.
//!
//! Sources are consulted exactly once per request and are allowed to do I/O
//! (e.g. read the current access token). Whatever they fail with is handed
//! back to the caller as is.

use indexmap::IndexMap;

use super::ParamsError;

/// Key / value pairs injected into every outgoing request.
///
/// Iteration order of the map is the order in which entries end up in the
/// query string, the form body, the multipart body or the headers.
pub type CommonParameters = IndexMap<String, String>;

/// Produces current common parameters.
///
/// `Ok(None)` and an empty map both mean "nothing to inject".
///
/// Implemented for closures, so a source can be provided in place:
///
/// # Examples
/// ```
/// use common_params::core::{CommonParameters, ParameterSource, ParamsError};
///
/// let source = || -> Result<Option<CommonParameters>, ParamsError> {
///     Ok(Some(CommonParameters::from([("app".into(), "1.2.0".into())])))
/// };
///
/// assert_eq!(source.parameters().unwrap().unwrap()["app"], "1.2.0");
/// ```
pub trait ParameterSource: Send + Sync {
    /// Current set of common parameters.
    ///
    /// # Errors
    /// Should return an [`ParamsError::ParameterSource`] if the parameters
    /// can't be produced. The request is not sent in that case.
    fn parameters(&self) -> Result<Option<CommonParameters>, ParamsError>;
}

impl<F> ParameterSource for F
where
    F: Fn() -> Result<Option<CommonParameters>, ParamsError> + Send + Sync,
{
    fn parameters(&self) -> Result<Option<CommonParameters>, ParamsError> {
        self()
    }
}

/// Source which always returns the same set of parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticParameters(pub CommonParameters);

impl ParameterSource for StaticParameters {
    fn parameters(&self) -> Result<Option<CommonParameters>, ParamsError> {
        Ok(Some(self.0.clone()))
    }
}

impl<K, V> FromIterator<(K, V)> for StaticParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Entries which take part in injection.
///
/// Entries with an empty key or an empty value are skipped by every
/// injection path.
pub(crate) fn usable_entries(
    parameters: &CommonParameters,
) -> impl Iterator<Item = (&str, &str)> + '_ {
    parameters
        .iter()
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .map(|(key, value)| (key.as_str(), value.as_str()))
}
