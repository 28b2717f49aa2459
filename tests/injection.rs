#[cfg(test)]
mod integration {
    use common_params::{
        core::{
            FormBody, MediaType, MultipartBody, MultipartKind, RequestBody, Transport,
            TransportMethod, TransportRequest,
        },
        transport::TransportReqwest,
        CommonParameters, ParamsClient, ParamsClientBuilder, ParamsError, StaticParameters,
    };
    use wiremock::{
        matchers::{body_string, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn client(server: &MockServer) -> Result<ParamsClient<TransportReqwest>, ParamsError> {
        let mut transport = TransportReqwest::new();
        transport.set_hostname(server.uri());

        ParamsClientBuilder::default()
            .with_transport(transport)
            .with_body_parameters(
                [("app_version", "3.1.0"), ("device", "tablet 7")]
                    .into_iter()
                    .collect::<StaticParameters>(),
            )
            .with_header_parameters(
                [("X-Client", "integration")]
                    .into_iter()
                    .collect::<StaticParameters>(),
            )
            .build()
    }

    /// Query string gets the common parameters after the request's own.
    #[tokio::test]
    async fn should_add_parameters_to_get_query() -> Result<(), Box<dyn std::error::Error>> {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .and(query_param("app_version", "3.1.0"))
            .and(query_param("device", "tablet 7"))
            .and(header("X-Client", "integration"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)?
            .send(TransportRequest {
                path: "/users".into(),
                query_parameters: vec![("page".into(), "2".into())],
                method: TransportMethod::Get,
                ..Default::default()
            })
            .await?;

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Some(b"[]".to_vec()));
        Ok(())
    }

    /// Form body gets the common parameters appended.
    #[tokio::test]
    async fn should_append_parameters_to_form_body() -> Result<(), Box<dyn std::error::Error>> {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(
                "user=neo&app_version=3.1.0&device=tablet%207".to_string(),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)?
            .send(TransportRequest {
                path: "/login".into(),
                method: TransportMethod::Post,
                body: Some(RequestBody::Form(FormBody::new().add("user", "neo"))),
                ..Default::default()
            })
            .await?;

        assert_eq!(response.status, 200);
        Ok(())
    }

    /// JSON body keeps its own members and gets the common parameters as strings.
    #[tokio::test]
    async fn should_merge_parameters_into_json_body() -> Result<(), Box<dyn std::error::Error>> {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/profile"))
            .and(header("content-type", "application/json"))
            .and(body_string(
                r#"{"name":"neo","app_version":"3.1.0","device":"tablet 7"}"#.to_string(),
            ))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)?
            .send(TransportRequest {
                path: "/profile".into(),
                method: TransportMethod::Put,
                body: Some(RequestBody::typed(
                    MediaType::parse("application/json").ok_or("invalid media type")?,
                    r#"{"name":"neo","app_version":"1.0"}"#,
                )),
                ..Default::default()
            })
            .await?;

        assert_eq!(response.status, 204);
        Ok(())
    }

    /// POST without a body sends the common parameters as a JSON object.
    #[tokio::test]
    async fn should_send_parameters_as_json_without_body() -> Result<(), Box<dyn std::error::Error>>
    {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ping"))
            .and(header("content-type", "application/json; charset=UTF-8"))
            .and(body_string(
                r#"{"app_version":"3.1.0","device":"tablet 7"}"#.to_string(),
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)?
            .send(TransportRequest {
                path: "/ping".into(),
                method: TransportMethod::Post,
                ..Default::default()
            })
            .await?;

        assert_eq!(response.status, 200);
        Ok(())
    }

    /// Multipart body keeps its parts and is sent with a fresh boundary.
    #[tokio::test]
    async fn should_extend_multipart_body() -> Result<(), Box<dyn std::error::Error>> {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)?
            .send(TransportRequest {
                path: "/upload".into(),
                method: TransportMethod::Post,
                body: Some(RequestBody::Multipart(
                    MultipartBody::with_boundary(MultipartKind::FormData, "original")
                        .add_form_data_part("title", "cat"),
                )),
                ..Default::default()
            })
            .await?;

        let requests = server.received_requests().await.ok_or("recording disabled")?;
        let body = String::from_utf8(requests[0].body.clone())?;

        assert!(!body.contains("--original"));
        assert!(body.contains("name=\"title\"\r\n\r\ncat\r\n"));
        assert!(body.contains("name=\"app_version\"\r\n\r\n3.1.0\r\n"));
        assert!(body.contains("name=\"device\"\r\n\r\ntablet 7\r\n"));
        Ok(())
    }

    /// Broken JSON never reaches the server.
    #[tokio::test]
    async fn should_not_send_malformed_json_body() -> Result<(), Box<dyn std::error::Error>> {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client(&server)?
            .send(TransportRequest {
                path: "/profile".into(),
                method: TransportMethod::Post,
                body: Some(RequestBody::json("{\"name\":")),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ParamsError::Deserialization(_))));
        Ok(())
    }

    /// Source is asked for every request and may skip injection.
    #[tokio::test]
    async fn should_forward_untouched_when_source_has_nothing() -> Result<(), Box<dyn std::error::Error>>
    {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/raw"))
            .and(body_string("payload".to_string()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut transport = TransportReqwest::new();
        transport.set_hostname(server.uri());
        let client = ParamsClientBuilder::default()
            .with_transport(transport)
            .with_body_parameters(|| -> Result<Option<CommonParameters>, ParamsError> { Ok(None) })
            .build()?;

        let response = client
            .send(TransportRequest {
                path: "/raw".into(),
                method: TransportMethod::Post,
                body: Some(RequestBody::bytes("payload")),
                ..Default::default()
            })
            .await?;

        assert_eq!(response.status, 200);
        Ok(())
    }
}
