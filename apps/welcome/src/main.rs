//! # Welcome サービス
//!
//! コンテナデプロイ検証用の最小 HTTP サービス。
//!
//! ## 役割
//!
//! ルートパス `GET /` を公開し、固定の挨拶文字列を返す。
//! Hello サービス（`/hello` で同じ挨拶を返す）とは独立したプロセスであり、
//! コードの共有も通信も行わない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `WELCOME_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `WELCOME_PORT` | No | ポート番号（デフォルト: `8081`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p greeting-welcome
//!
//! # 本番環境
//! WELCOME_PORT=8081 cargo run -p greeting-welcome --release
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use greeting_welcome::{app_builder::build_app, config::WelcomeConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Welcome サービスのエントリーポイント
///
/// Hello サービスとは独立した設定（`WELCOME_HOST`, `WELCOME_PORT`）を使用する。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,greeting_welcome=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = WelcomeConfig::from_env();

    tracing::info!(
        "Welcome サービスを起動します: {}:{}",
        config.host,
        config.port
    );

    // ルーター構築
    let app = build_app();

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Welcome サービスが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
