//! # Body merge engine
//!
//! Merges [`CommonParameters`] into a request body according to the body's
//! encoding:
//!
//! | body                          | result                                         |
//! |-------------------------------|------------------------------------------------|
//! | form                          | existing fields followed by parameters         |
//! | multipart                     | existing parts followed by one text part each  |
//! | no media type / no body       | parameters alone, as a JSON object             |
//! | media subtype `json`          | parameters set on the top-level object         |
//! | anything else                 | untouched, parameters dropped                  |
//!
//! Form and multipart bodies tolerate repeated names so parameters are
//! appended. JSON objects have unique keys so parameters overwrite.

use log::debug;
use serde_json::{Map, Value};

use super::{
    parameters::usable_entries,
    utils::charset::Charset,
    BodyKind, CommonParameters, FormBody, MediaType, MultipartBody, MultipartKind, ParamsError,
    RequestBody,
};

/// Merge `parameters` into `body`.
///
/// # Errors
/// Returns [`ParamsError::Deserialization`] when a body declaring a JSON
/// media type doesn't hold a single JSON object, declares an unknown charset
/// or can't be decoded with its charset.
pub fn merge_body(
    body: Option<&RequestBody>,
    parameters: &CommonParameters,
) -> Result<RequestBody, ParamsError> {
    let merged = match BodyKind::of(body) {
        BodyKind::Form(form) => RequestBody::Form(merge_form(form, parameters)),
        BodyKind::Multipart(multipart) => {
            RequestBody::Multipart(merge_multipart(Some(multipart), parameters))
        }
        BodyKind::Untyped | BodyKind::Absent => {
            debug!("Body has no media type, sending common parameters as JSON");
            parameters_as_json(parameters)?
        }
        BodyKind::Json {
            content_type,
            content,
        } => merge_json(content_type, content, parameters)?,
        BodyKind::Opaque(body) => {
            debug!(
                "Unsupported body type {:?}, common parameters dropped",
                body.content_type()
            );
            body.clone()
        }
    };

    Ok(merged)
}

/// Existing fields in order, then one field per parameter.
pub fn merge_form(form: &FormBody, parameters: &CommonParameters) -> FormBody {
    usable_entries(parameters).fold(form.clone(), |form, (name, value)| form.add(name, value))
}

/// Existing parts in order, then one text form part per parameter.
///
/// The result is always `multipart/form-data`. Without a source body the
/// result holds only the parameters.
pub fn merge_multipart(
    multipart: Option<&MultipartBody>,
    parameters: &CommonParameters,
) -> MultipartBody {
    let merged = multipart
        .into_iter()
        .flat_map(|multipart| multipart.parts())
        .fold(MultipartBody::new(MultipartKind::FormData), |merged, part| {
            merged.add_part(part.clone())
        });

    usable_entries(parameters).fold(merged, |merged, (name, value)| {
        merged.add_form_data_part(name, value)
    })
}

/// Set every parameter on the top-level JSON object of `content`.
///
/// Key order of the original object is kept; new keys are appended and
/// existing keys are overwritten in place.
pub fn merge_json(
    content_type: &MediaType,
    content: &[u8],
    parameters: &CommonParameters,
) -> Result<RequestBody, ParamsError> {
    let charset = content_type
        .charset()
        .map(Charset::from_label)
        .transpose()?
        .unwrap_or_default();

    let (text, charset) = charset.decode(content)?;
    let mut object = match serde_json::from_str::<Value>(&text)
        .map_err(|e| ParamsError::Deserialization(e.to_string()))?
    {
        Value::Object(object) => object,
        other => {
            return Err(ParamsError::Deserialization(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            )))
        }
    };

    usable_entries(parameters).for_each(|(key, value)| {
        object.insert(key.into(), Value::String(value.into()));
    });

    let text = serde_json::to_string(&Value::Object(object))
        .map_err(|e| ParamsError::Serialization(e.to_string()))?;

    Ok(RequestBody::typed(content_type.clone(), charset.encode(&text)))
}

/// The parameters alone as an `application/json; charset=UTF-8` body.
pub fn parameters_as_json(parameters: &CommonParameters) -> Result<RequestBody, ParamsError> {
    let object = usable_entries(parameters)
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect::<Map<String, Value>>();

    serde_json::to_vec(&Value::Object(object))
        .map(RequestBody::json)
        .map_err(|e| ParamsError::Serialization(e.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
