//! # アプリケーション構築
//!
//! ルーター構築を担当する。`main.rs` はサーバー起動に集中する。

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::hello;

/// ルーターを構築する
///
/// 登録するルートは `GET /hello` の 1 つのみ。未登録パスは 404、
/// `/hello` への GET 以外のメソッドは 405 となる（いずれも axum の
/// デフォルト動作であり、アプリケーション側でのハンドリングは行わない）。
///
/// TraceLayer により、すべての HTTP リクエストがトレーシングされる。
pub fn build_app() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .layer(TraceLayer::new_for_http())
}
