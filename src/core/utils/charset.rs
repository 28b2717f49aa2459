//! Charset module
//!
//! Text codecs for bodies that are decoded, rewritten and encoded back.
//! Every WHATWG encoding label is understood through [`encoding_rs`], with
//! `US-ASCII` and `ISO-8859-1` kept strict instead of being read as
//! `windows-1252`.
//!
//! Characters the target charset can't represent are written as JSON `\u`
//! escapes. Non-ASCII characters only occur inside JSON strings, so the
//! document stays valid and nothing is lost.
//!
//! [`encoding_rs`]: https://docs.rs/encoding_rs

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::core::ParamsError;

const ASCII_LABELS: &[&str] = &[
    "us-ascii",
    "ascii",
    "ansi_x3.4-1968",
    "iso646-us",
    "iso-ir-6",
    "cp367",
    "ibm367",
    "csascii",
];

const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "latin1",
    "l1",
    "iso-ir-100",
    "cp819",
    "ibm819",
    "csisolatin1",
];

#[derive(Clone, Copy, Debug, PartialEq)]
enum Codec {
    UsAscii,
    Latin1,
    Encoding(&'static Encoding),
}

/// Charset declared by a body's media type.
///
/// A charset returned by [`Charset::decode`] remembers whether the content
/// started with a byte order mark, and [`Charset::encode`] writes it back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charset {
    codec: Codec,
    bom: bool,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            codec: Codec::Encoding(UTF_8),
            bom: false,
        }
    }
}

impl Charset {
    /// Resolve a charset label (case-insensitive).
    ///
    /// # Errors
    /// Returns [`ParamsError::Deserialization`] for labels which aren't
    /// known encodings.
    pub fn from_label(label: &str) -> Result<Self, ParamsError> {
        let normalized = label.trim().to_ascii_lowercase();

        let codec = if ASCII_LABELS.contains(&normalized.as_str()) {
            Codec::UsAscii
        } else if LATIN1_LABELS.contains(&normalized.as_str()) {
            Codec::Latin1
        } else {
            Encoding::for_label(normalized.as_bytes())
                .map(Codec::Encoding)
                .ok_or_else(|| {
                    ParamsError::Deserialization(format!("unsupported charset: {normalized}"))
                })?
        };

        Ok(Self { codec, bom: false })
    }

    /// Canonical name of the charset.
    pub fn name(&self) -> &'static str {
        match self.codec {
            Codec::UsAscii => "US-ASCII",
            Codec::Latin1 => "ISO-8859-1",
            Codec::Encoding(encoding) => encoding.name(),
        }
    }

    /// Decode `bytes` into text.
    ///
    /// A leading byte order mark selects the Unicode encoding it belongs to.
    /// The returned charset is the one to encode the rewritten text with.
    ///
    /// # Errors
    /// Returns [`ParamsError::Deserialization`] when `bytes` aren't valid in
    /// the charset.
    pub fn decode(&self, bytes: &[u8]) -> Result<(String, Charset), ParamsError> {
        match self.codec {
            Codec::UsAscii if !bytes.is_ascii() => Err(ParamsError::Deserialization(
                "body is not valid US-ASCII".into(),
            )),
            Codec::UsAscii | Codec::Latin1 => {
                Ok((bytes.iter().map(|&byte| char::from(byte)).collect(), *self))
            }
            Codec::Encoding(encoding) => {
                let (text, used, malformed) = encoding.decode(bytes);
                if malformed {
                    return Err(ParamsError::Deserialization(format!(
                        "body is not valid {}",
                        used.name()
                    )));
                }

                Ok((
                    text.into_owned(),
                    Charset {
                        codec: Codec::Encoding(used),
                        bom: Encoding::for_bom(bytes).is_some(),
                    },
                ))
            }
        }
    }

    /// Encode `text` into bytes.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self.codec {
            Codec::UsAscii => escape_unmappable(text, |c| c.is_ascii()).into_bytes(),
            Codec::Latin1 => escape_unmappable(text, |c| u32::from(c) <= 0xff)
                .chars()
                .map(|c| c as u8)
                .collect(),
            Codec::Encoding(encoding) if encoding == UTF_8 => {
                let mut out = Vec::with_capacity(text.len() + 3);
                if self.bom {
                    out.extend_from_slice(b"\xEF\xBB\xBF");
                }
                out.extend_from_slice(text.as_bytes());
                out
            }
            Codec::Encoding(encoding) if encoding == UTF_16BE || encoding == UTF_16LE => {
                let big_endian = encoding == UTF_16BE;
                let bom = self.bom.then_some(0xfeff_u16);

                bom.into_iter()
                    .chain(text.encode_utf16())
                    .flat_map(|unit| {
                        if big_endian {
                            unit.to_be_bytes()
                        } else {
                            unit.to_le_bytes()
                        }
                    })
                    .collect()
            }
            Codec::Encoding(encoding) => {
                let escaped = escape_unmappable(text, |c| {
                    c.is_ascii() || !encoding.encode(c.encode_utf8(&mut [0; 4])).2
                });
                encoding.encode(&escaped).0.into_owned()
            }
        }
    }
}

fn escape_unmappable<F>(text: &str, mappable: F) -> String
where
    F: Fn(char) -> bool,
{
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        if mappable(c) {
            escaped.push(c);
            continue;
        }

        for unit in c.encode_utf16(&mut [0; 2]).iter() {
            escaped.push_str(&format!("\\u{unit:04x}"));
        }
    }

    escaped
}
