//! # 挨拶エンドポイントのテスト
//!
//! Welcome サービスのルーターが以下を満たすことを検証する:
//!
//! - `GET /` は常に 200 と固定の挨拶文字列を返す
//! - 未登録パスへのリクエストは 404 を返す
//! - `/` への GET 以外のメソッドは 405 を返す

use axum::body::Body;
use greeting_welcome::{app_builder::build_app, handler::greeting::GREETING};
use http::{Method, Request, StatusCode, header};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

#[tokio::test]
async fn test_get_ルートは200と固定の挨拶を返す() {
    let app = build_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("Content-Type ヘッダーが含まれること")
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("text/plain"),
        "Content-Type が text/plain であること: {content_type}"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(std::str::from_utf8(&body).unwrap(), GREETING);
}

#[tokio::test]
async fn test_get_ルートは繰り返し呼んでも同じ結果を返す() {
    for _ in 0..3 {
        let response = build_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(std::str::from_utf8(&body).unwrap(), GREETING);
    }
}

#[tokio::test]
async fn test_未登録パスは404を返す() {
    let response = build_app()
        .oneshot(
            Request::builder()
                .uri("/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ルートへのpostは405を返す() {
    for _ in 0..2 {
        let response = build_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
