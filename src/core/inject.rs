//! # Injection
//!
//! Pure functions which build a new [`TransportRequest`] with common
//! parameters or headers applied. The received request is only borrowed.

use log::debug;

use super::{
    merge::merge_body, parameters::usable_entries, BodyKind, CommonParameters, ParamsError,
    TransportMethod, TransportRequest,
};

/// Apply `parameters` to `request` according to its method.
///
/// * `GET`, `DELETE` - appended to the query string after existing entries.
/// * `PUT`, `POST` - merged into the body, see [`merge_body`].
/// * anything else - request is returned unchanged.
///
/// Without usable entries the query string and untyped or missing bodies are
/// left alone. Other bodies still go through [`merge_body`], so a malformed
/// JSON body fails either way.
///
/// # Errors
/// Propagates [`merge_body`] failures.
///
/// # Examples
/// ```
/// use common_params::core::{inject_parameters, CommonParameters, TransportMethod, TransportRequest};
///
/// # fn main() -> Result<(), common_params::core::ParamsError> {
/// let request = TransportRequest {
///     path: "/users".into(),
///     query_parameters: vec![("page".into(), "2".into())],
///     method: TransportMethod::Get,
///     ..Default::default()
/// };
/// let parameters = CommonParameters::from([("token".into(), "abc".into())]);
///
/// let request = inject_parameters(&request, &parameters)?;
///
/// assert_eq!(
///     request.query_parameters,
///     vec![
///         ("page".to_string(), "2".to_string()),
///         ("token".to_string(), "abc".to_string())
///     ]
/// );
/// # Ok(())
/// # }
/// ```
pub fn inject_parameters(
    request: &TransportRequest,
    parameters: &CommonParameters,
) -> Result<TransportRequest, ParamsError> {
    let has_entries = usable_entries(parameters).next().is_some();

    match request.method {
        TransportMethod::Get | TransportMethod::Delete if !has_entries => Ok(request.clone()),
        TransportMethod::Put | TransportMethod::Post
            if !has_entries
                && matches!(
                    BodyKind::of(request.body.as_ref()),
                    BodyKind::Untyped | BodyKind::Absent
                ) =>
        {
            Ok(request.clone())
        }
        TransportMethod::Get | TransportMethod::Delete => {
            debug!("Adding common parameters to {} query", request.method);
            let query_parameters = request
                .query_parameters
                .iter()
                .cloned()
                .chain(
                    usable_entries(parameters)
                        .map(|(key, value)| (key.to_string(), value.to_string())),
                )
                .collect();

            Ok(TransportRequest {
                query_parameters,
                ..request.clone()
            })
        }
        TransportMethod::Put | TransportMethod::Post => {
            debug!("Adding common parameters to {} body", request.method);
            let body = merge_body(request.body.as_ref(), parameters)?;

            Ok(TransportRequest {
                body: Some(body),
                ..request.clone()
            })
        }
        TransportMethod::Patch | TransportMethod::Head | TransportMethod::Options => {
            Ok(request.clone())
        }
    }
}

/// Append one header per entry of `headers`.
///
/// Existing headers with the same name are kept, so applying the same set
/// twice sends every header twice.
pub fn inject_headers(
    request: &TransportRequest,
    headers: Option<&CommonParameters>,
) -> TransportRequest {
    let Some(headers) = headers else {
        return request.clone();
    };

    TransportRequest {
        headers: request
            .headers
            .iter()
            .cloned()
            .chain(
                usable_entries(headers).map(|(name, value)| (name.to_string(), value.to_string())),
            )
            .collect(),
        ..request.clone()
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::{FormBody, MediaType, MultipartBody, MultipartKind, RequestBody};
    use test_case::test_case;

    fn parameters(entries: &[(&str, &str)]) -> CommonParameters {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test_case(TransportMethod::Get ; "get")]
    #[test_case(TransportMethod::Delete ; "delete")]
    fn append_parameters_to_query(method: TransportMethod) {
        let request = TransportRequest {
            path: "/items".into(),
            method,
            query_parameters: pairs(&[("token", "old"), ("page", "1")]),
            body: Some(RequestBody::bytes("untouched")),
            ..Default::default()
        };

        let result =
            inject_parameters(&request, &parameters(&[("token", "new"), ("v", "3")])).unwrap();

        assert_eq!(
            result.query_parameters,
            pairs(&[("token", "old"), ("page", "1"), ("token", "new"), ("v", "3")])
        );
        assert_eq!(result.body, request.body);
        assert_eq!(result.path, request.path);
    }

    #[test_case(TransportMethod::Put ; "put")]
    #[test_case(TransportMethod::Post ; "post")]
    fn merge_parameters_into_body(method: TransportMethod) {
        let request = TransportRequest {
            method,
            query_parameters: pairs(&[("page", "1")]),
            body: Some(RequestBody::Form(FormBody::new().add("a", "1"))),
            ..Default::default()
        };

        let result = inject_parameters(&request, &parameters(&[("token", "abc")])).unwrap();

        assert_eq!(result.query_parameters, request.query_parameters);
        assert_eq!(
            result.body,
            Some(RequestBody::Form(
                FormBody::new().add("a", "1").add("token", "abc")
            ))
        );
    }

    #[test_case(TransportMethod::Patch ; "patch")]
    #[test_case(TransportMethod::Head ; "head")]
    #[test_case(TransportMethod::Options ; "options")]
    fn pass_other_methods_through(method: TransportMethod) {
        let request = TransportRequest {
            method,
            query_parameters: pairs(&[("page", "1")]),
            body: Some(RequestBody::json("{}")),
            ..Default::default()
        };

        let result = inject_parameters(&request, &parameters(&[("token", "abc")])).unwrap();

        assert_eq!(result, request);
    }

    #[test_case(TransportMethod::Get ; "get")]
    #[test_case(TransportMethod::Post ; "post")]
    fn leave_request_alone_without_parameters(method: TransportMethod) {
        let request = TransportRequest {
            method,
            query_parameters: pairs(&[("page", "1")]),
            body: Some(RequestBody::bytes("keep")),
            ..Default::default()
        };

        assert_eq!(
            inject_parameters(&request, &CommonParameters::new()).unwrap(),
            request
        );
        assert_eq!(
            inject_parameters(&request, &parameters(&[("", "x")])).unwrap(),
            request
        );
    }

    #[test_case(TransportMethod::Put ; "put")]
    #[test_case(TransportMethod::Post ; "post")]
    fn fail_on_malformed_json_without_parameters(method: TransportMethod) {
        let request = TransportRequest {
            method,
            body: Some(RequestBody::json("{ broken")),
            ..Default::default()
        };

        assert!(matches!(
            inject_parameters(&request, &CommonParameters::new()),
            Err(ParamsError::Deserialization(_))
        ));
    }

    #[test]
    fn keep_absent_body_without_parameters() {
        let request = TransportRequest {
            method: TransportMethod::Put,
            ..Default::default()
        };

        assert_eq!(
            inject_parameters(&request, &CommonParameters::new()).unwrap(),
            request
        );
    }

    #[test]
    fn create_json_body_for_post_without_body() {
        let request = TransportRequest {
            method: TransportMethod::Post,
            ..Default::default()
        };

        let result = inject_parameters(&request, &parameters(&[("token", "abc")])).unwrap();

        assert_eq!(
            result.body,
            Some(RequestBody::json(br#"{"token":"abc"}"#.to_vec()))
        );
    }

    #[test]
    fn rebuild_multipart_body_for_put() {
        let original = MultipartBody::new(MultipartKind::FormData).add_form_data_part("a", "1");
        let request = TransportRequest {
            method: TransportMethod::Put,
            body: Some(RequestBody::Multipart(original.clone())),
            ..Default::default()
        };

        let result = inject_parameters(&request, &parameters(&[("token", "abc")])).unwrap();

        let Some(RequestBody::Multipart(merged)) = result.body else {
            panic!("expected multipart body");
        };
        assert_eq!(merged.parts()[0], original.parts()[0]);
        assert_eq!(merged.parts().len(), 2);
    }

    #[test]
    fn propagate_malformed_json_body() {
        let request = TransportRequest {
            method: TransportMethod::Post,
            body: Some(RequestBody::typed(
                MediaType::parse("application/json").unwrap(),
                "[1,2,3]",
            )),
            ..Default::default()
        };

        assert!(matches!(
            inject_parameters(&request, &parameters(&[("token", "abc")])),
            Err(ParamsError::Deserialization(_))
        ));
    }

    #[test]
    fn append_headers_with_non_empty_key_and_value() {
        let request = TransportRequest {
            headers: pairs(&[("Accept", "application/json")]),
            ..Default::default()
        };
        let headers = parameters(&[("X-Token", "abc"), ("", "x"), ("X-Empty", ""), ("X-App", "1")]);

        let result = inject_headers(&request, Some(&headers));

        assert_eq!(
            result.headers,
            pairs(&[
                ("Accept", "application/json"),
                ("X-Token", "abc"),
                ("X-App", "1")
            ])
        );
    }

    #[test]
    fn duplicate_headers_when_applied_twice() {
        let headers = parameters(&[("X-Token", "abc")]);

        let once = inject_headers(&TransportRequest::default(), Some(&headers));
        let twice = inject_headers(&once, Some(&headers));

        assert_eq!(
            twice.header_values("X-Token").collect::<Vec<_>>(),
            vec!["abc", "abc"]
        );
    }

    #[test]
    fn keep_request_without_headers() {
        let request = TransportRequest {
            headers: pairs(&[("Accept", "*/*")]),
            ..Default::default()
        };

        assert_eq!(inject_headers(&request, None), request);
    }
}
