//! Encoding module
//!
//! Wire encodings for query strings, form bodies and multipart bodies.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::core::MultipartBody;

/// https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set
/// without the `+` for space substitution.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Percent-encode one query or form component.
///
/// Everything except ASCII alphanumerics and `* - . _` is escaped, and a
/// space becomes `%20`, so the same output is valid in a URL query and in an
/// `application/x-www-form-urlencoded` body.
pub fn url_encode(data: &[u8]) -> String {
    percent_encode(data, FORM).to_string()
}

/// Join `name=value` pairs with `&`, percent-encoding both sides.
///
/// Used for query strings and `application/x-www-form-urlencoded` bodies.
pub fn encode_form(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                url_encode(name.as_bytes()),
                url_encode(value.as_bytes())
            )
        })
        .collect::<Vec<String>>()
        .join("&")
}

/// Serialize multipart body parts between boundary delimiters.
///
/// Part headers and content are written exactly as stored.
pub fn encode_multipart(multipart: &MultipartBody) -> Vec<u8> {
    let boundary = multipart.boundary();
    let mut out = Vec::new();

    for part in multipart.parts() {
        out.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        for (name, value) in part.headers() {
            out.extend_from_slice(format!("{name}: {value}\r\n").as_bytes());
        }
        out.extend_from_slice(b"\r\n");
        out.extend_from_slice(part.content());
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    out
}
