//! # Request body
//!
//! This module contains the [`RequestBody`] representation and the
//! [`BodyKind`] classification used to decide how common parameters are
//! merged into a body.
//!
//! Bodies are values. Merging never changes a body in place, it builds a new
//! one which shares untouched multipart parts with the original.

use std::sync::Arc;

use uuid::Uuid;

use super::{
    utils::{
        encoding::{encode_form, encode_multipart},
        headers::{APPLICATION_JSON_UTF8, CONTENT_DISPOSITION, CONTENT_TYPE, FORM_URLENCODED},
    },
    MediaType,
};

/// Body of a [`TransportRequest`].
///
/// [`TransportRequest`]: ../transport_request/struct.TransportRequest.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded` body.
    Form(FormBody),

    /// `multipart/*` body.
    Multipart(MultipartBody),

    /// Any other body, with an optional media type.
    Raw {
        /// declared media type
        content_type: Option<MediaType>,

        /// body bytes
        content: Vec<u8>,
    },
}

impl RequestBody {
    /// Body without a declared media type.
    pub fn bytes<B>(content: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        RequestBody::Raw {
            content_type: None,
            content: content.into(),
        }
    }

    /// Body with the given media type.
    pub fn typed<B>(content_type: MediaType, content: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        RequestBody::Raw {
            content_type: Some(content_type),
            content: content.into(),
        }
    }

    /// `application/json; charset=UTF-8` body.
    pub fn json<B>(content: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        RequestBody::Raw {
            content_type: MediaType::parse(APPLICATION_JSON_UTF8),
            content: content.into(),
        }
    }

    /// Value of the `Content-Type` header for this body.
    pub fn content_type(&self) -> Option<String> {
        match self {
            RequestBody::Form(_) => Some(FORM_URLENCODED.into()),
            RequestBody::Multipart(multipart) => Some(multipart.content_type()),
            RequestBody::Raw { content_type, .. } => content_type.as_ref().map(|t| t.to_string()),
        }
    }

    /// Serialized body bytes, as they go on the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            RequestBody::Form(form) => encode_form(form.pairs()).into_bytes(),
            RequestBody::Multipart(multipart) => encode_multipart(multipart),
            RequestBody::Raw { content, .. } => content.clone(),
        }
    }
}

/// Ordered list of form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Existing fields with the same name are kept.
    pub fn add<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.pairs.push((name.into(), value.into()));
        self
    }

    /// Fields in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for FormBody
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FormBody::new(), |form, (name, value)| form.add(name, value))
    }
}

/// Multipart subtype.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MultipartKind {
    /// `multipart/mixed`
    #[default]
    Mixed,

    /// `multipart/alternative`
    Alternative,

    /// `multipart/digest`
    Digest,

    /// `multipart/parallel`
    Parallel,

    /// `multipart/form-data`
    FormData,
}

impl MultipartKind {
    /// Media subtype name.
    pub fn subtype(&self) -> &'static str {
        match self {
            MultipartKind::Mixed => "mixed",
            MultipartKind::Alternative => "alternative",
            MultipartKind::Digest => "digest",
            MultipartKind::Parallel => "parallel",
            MultipartKind::FormData => "form-data",
        }
    }
}

/// Multipart body.
///
/// Parts are shared, not copied: cloning the body or merging parameters into
/// it keeps pointing at the very same [`Part`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartBody {
    kind: MultipartKind,
    boundary: String,
    parts: Vec<Arc<Part>>,
}

impl MultipartBody {
    /// Empty multipart body with a random boundary.
    pub fn new(kind: MultipartKind) -> Self {
        Self::with_boundary(kind, Uuid::new_v4().simple().to_string())
    }

    /// Empty multipart body with the given boundary.
    pub fn with_boundary<S>(kind: MultipartKind, boundary: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            kind,
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    /// Append a part.
    pub fn add_part<P>(mut self, part: P) -> Self
    where
        P: Into<Arc<Part>>,
    {
        self.parts.push(part.into());
        self
    }

    /// Append a text form field.
    pub fn add_form_data_part<N, V>(self, name: N, value: V) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        self.add_part(Part::form_data(name.as_ref(), value.as_ref()))
    }

    /// Multipart subtype.
    pub fn kind(&self) -> MultipartKind {
        self.kind
    }

    /// Boundary which delimits parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Parts in order.
    pub fn parts(&self) -> &[Arc<Part>] {
        &self.parts
    }

    /// Value of the `Content-Type` header for this body.
    pub fn content_type(&self) -> String {
        format!(
            "multipart/{}; boundary={}",
            self.kind.subtype(),
            self.boundary
        )
    }
}

/// Single part of a [`MultipartBody`].
///
/// The content is never inspected. It's written out exactly as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    headers: Vec<(String, String)>,
    content: Vec<u8>,
}

impl Part {
    /// Part with custom headers.
    pub fn new<B>(headers: Vec<(String, String)>, content: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        Self {
            headers,
            content: content.into(),
        }
    }

    /// Text form field.
    pub fn form_data(name: &str, value: &str) -> Self {
        Self::new(
            vec![(
                CONTENT_DISPOSITION.into(),
                format!("form-data; name={}", quoted(name)),
            )],
            value,
        )
    }

    /// File form field.
    pub fn form_data_file<B>(name: &str, file_name: &str, content_type: &str, content: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        Self::new(
            vec![
                (
                    CONTENT_DISPOSITION.into(),
                    format!(
                        "form-data; name={}; filename={}",
                        quoted(name),
                        quoted(file_name)
                    ),
                ),
                (CONTENT_TYPE.into(), content_type.into()),
            ],
            content,
        )
    }

    /// Part headers in order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Part content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

// Quote a disposition parameter; quotes and line breaks are percent-escaped.
fn quoted(value: &str) -> String {
    let escaped = value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A");

    format!("\"{escaped}\"")
}

/// How a body takes common parameters.
///
/// Determined once per request with [`BodyKind::of`], then matched
/// exhaustively by the merge engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind<'a> {
    /// Form body, parameters are appended as fields.
    Form(&'a FormBody),

    /// Multipart body, parameters are appended as text parts.
    Multipart(&'a MultipartBody),

    /// Body without a media type, replaced by the parameters alone.
    Untyped,

    /// JSON body, parameters are set on the top-level object.
    Json {
        /// declared media type
        content_type: &'a MediaType,

        /// body bytes
        content: &'a [u8],
    },

    /// Body of any other media type, left alone.
    Opaque(&'a RequestBody),

    /// No body at all.
    Absent,
}

impl<'a> BodyKind<'a> {
    /// Classify `body`.
    pub fn of(body: Option<&'a RequestBody>) -> Self {
        match body {
            None => BodyKind::Absent,
            Some(RequestBody::Form(form)) => BodyKind::Form(form),
            Some(RequestBody::Multipart(multipart)) => BodyKind::Multipart(multipart),
            Some(RequestBody::Raw {
                content_type: None, ..
            }) => BodyKind::Untyped,
            Some(RequestBody::Raw {
                content_type: Some(content_type),
                content,
            }) if content_type.is_json() => BodyKind::Json {
                content_type,
                content,
            },
            Some(raw @ RequestBody::Raw { .. }) => BodyKind::Opaque(raw),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn classify_every_body_kind() {
        let form = RequestBody::Form(FormBody::new().add("a", "1"));
        let multipart = RequestBody::Multipart(MultipartBody::new(MultipartKind::FormData));
        let untyped = RequestBody::bytes("whatever");
        let json = RequestBody::json("{}");
        let text = RequestBody::typed(MediaType::parse("text/plain").unwrap(), "hi");

        assert!(matches!(BodyKind::of(Some(&form)), BodyKind::Form(_)));
        assert!(matches!(
            BodyKind::of(Some(&multipart)),
            BodyKind::Multipart(_)
        ));
        assert_eq!(BodyKind::of(Some(&untyped)), BodyKind::Untyped);
        assert!(matches!(BodyKind::of(Some(&json)), BodyKind::Json { .. }));
        assert_eq!(BodyKind::of(Some(&text)), BodyKind::Opaque(&text));
        assert_eq!(BodyKind::of(None), BodyKind::Absent);
    }

    #[test]
    fn report_content_type_per_body() {
        let multipart = MultipartBody::with_boundary(MultipartKind::FormData, "xyz");

        assert_eq!(
            RequestBody::Form(FormBody::new()).content_type().as_deref(),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            RequestBody::Multipart(multipart).content_type().as_deref(),
            Some("multipart/form-data; boundary=xyz")
        );
        assert_eq!(
            RequestBody::json("{}").content_type().as_deref(),
            Some("application/json; charset=UTF-8")
        );
        assert_eq!(RequestBody::bytes("raw").content_type(), None);
    }

    #[test]
    fn escape_form_data_names() {
        let part = Part::form_data("say \"hi\"\r\n", "value");

        assert_eq!(
            part.headers()[0].1,
            "form-data; name=\"say %22hi%22%0D%0A\""
        );
    }

    #[test]
    fn generate_distinct_boundaries() {
        let first = MultipartBody::new(MultipartKind::Mixed);
        let second = MultipartBody::new(MultipartKind::Mixed);

        assert_ne!(first.boundary(), second.boundary());
        assert!(first.content_type().starts_with("multipart/mixed; boundary="));
    }
}
