//! # アプリケーション構築
//!
//! ルーター構築を担当する。`main.rs` はサーバー起動に集中する。

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::welcome;

/// ルーターを構築する
///
/// 登録するルートはルートパス `GET /` の 1 つのみ。未登録パスは 404、
/// `/` への GET 以外のメソッドは 405 となる（いずれも axum のデフォルト動作）。
pub fn build_app() -> Router {
    Router::new()
        .route("/", get(welcome))
        .layer(TraceLayer::new_for_http())
}
