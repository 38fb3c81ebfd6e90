//! Signed URL requests against a mock proxy backend.

use mediagate_api_client::{ApiClient, SignedUrlError};
use mediagate_core::ProxyConfig;
use mockito::Matcher;

const SOURCE: &str = "https://listings.s3.us-east-1.amazonaws.com/properties/p1/cover.jpg";
const SIGNED: &str = "https://listings.s3.us-east-1.amazonaws.com/properties/p1/cover.jpg?X-Amz-Signature=abc";

fn client_for(server: &mockito::Server) -> ApiClient {
    let config = ProxyConfig::new(server.url(), "listings").with_signed_url_timeout_secs(5);
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn sends_original_url_and_returns_signed_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/s3-proxy/signed-url")
        .match_query(Matcher::UrlEncoded("url".into(), SOURCE.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"success":true,"signedUrl":"{}"}}"#, SIGNED))
        .create_async()
        .await;

    let client = client_for(&server);

    assert_eq!(client.try_fetch_signed_url(SOURCE).await.unwrap(), SIGNED);
    mock.assert_async().await;
}

#[tokio::test]
async fn http_500_falls_back_to_source_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/s3-proxy/signed-url")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);

    let err = client.try_fetch_signed_url(SOURCE).await.unwrap_err();
    assert!(matches!(err, SignedUrlError::Http { status: 500, .. }));

    assert_eq!(client.fetch_signed_url(SOURCE).await, SOURCE);
    mock.assert_async().await;
}

#[tokio::test]
async fn server_reported_failure_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/s3-proxy/signed-url")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"error":"Access denied"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);

    let err = client.try_fetch_signed_url(SOURCE).await.unwrap_err();
    assert!(matches!(err, SignedUrlError::Rejected(ref msg) if msg == "Access denied"));
    assert_eq!(client.fetch_signed_url(SOURCE).await, SOURCE);
}

#[tokio::test]
async fn malformed_json_falls_back_to_source_url() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/s3-proxy/signed-url")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>not json</html>")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);

    assert!(matches!(
        client.try_fetch_signed_url(SOURCE).await,
        Err(SignedUrlError::Decode(_))
    ));
    assert_eq!(client.fetch_signed_url(SOURCE).await, SOURCE);
}

#[tokio::test]
async fn unreachable_backend_falls_back_to_source_url() {
    let config = ProxyConfig::new("http://127.0.0.1:1", "listings").with_signed_url_timeout_secs(2);
    let client = ApiClient::new(&config).unwrap();

    assert!(matches!(
        client.try_fetch_signed_url(SOURCE).await,
        Err(SignedUrlError::Request(_))
    ));
    assert_eq!(client.fetch_signed_url(SOURCE).await, SOURCE);
}

#[tokio::test]
async fn batch_requests_keep_order_and_fall_back_individually() {
    let first = "https://listings.s3.amazonaws.com/gallery/1.jpg";
    let second = "https://listings.s3.amazonaws.com/gallery/2.jpg";
    let third = "https://listings.s3.amazonaws.com/gallery/3.jpg";

    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for (source, signed) in [(first, "https://signed.example/1"), (third, "https://signed.example/3")] {
        let mock = server
            .mock("GET", "/api/s3-proxy/signed-url")
            .match_query(Matcher::UrlEncoded("url".into(), source.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"success":true,"signedUrl":"{}"}}"#, signed))
            .create_async()
            .await;
        mocks.push(mock);
    }
    let missing = server
        .mock("GET", "/api/s3-proxy/signed-url")
        .match_query(Matcher::UrlEncoded("url".into(), second.into()))
        .with_status(404)
        .create_async()
        .await;
    mocks.push(missing);

    let client = client_for(&server);

    let results = client.fetch_signed_urls(&[first, second, third]).await;
    assert_eq!(
        results,
        vec![
            "https://signed.example/1".to_string(),
            second.to_string(),
            "https://signed.example/3".to_string(),
        ]
    );
    for mock in mocks {
        mock.assert_async().await;
    }
}
