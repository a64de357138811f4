use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use hello_functions::{handler::hello_handler::hello_world, model::GREETING};
use serde_json::{Value, json};

async fn call(method: Method, uri: &str) -> (StatusCode, String, Option<String>) {
    let response = hello_world(method, uri.parse::<Uri>().unwrap())
        .await
        .into_response();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (
        status,
        String::from_utf8(body_bytes.to_vec()).unwrap(),
        content_type,
    )
}

#[tokio::test]
async fn test_hello_world_returns_greeting() {
    let (status, body, content_type) = call(Method::GET, "/helloWorld").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"Hello From firebase functions"}"#);
    assert_eq!(content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_hello_world_ignores_method_and_path() {
    let expected = json!({ "message": GREETING });

    for (method, uri) in [
        (Method::POST, "/helloWorld"),
        (Method::PUT, "/helloWorld/a/b?x=1"),
        (Method::DELETE, "/"),
        (Method::PATCH, "/helloWorld?name=ignored"),
    ] {
        let (status, body, _) = call(method.clone(), uri).await;
        let parsed: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK, "{method} {uri}");
        assert_eq!(parsed, expected, "{method} {uri}");
    }
}
