//! # Hello サービス
//!
//! コンテナデプロイ検証用の最小 HTTP サービス。
//!
//! ## 役割
//!
//! 単一のエンドポイント `GET /hello` を公開し、固定の挨拶文字列を返す。
//! ビジネスロジック・永続化・外部サービス連携は持たず、
//! コンテナイメージ化と基本的な Web サービスのデプロイ検証を目的とする。
//!
//! Welcome サービス（ルートパス `/` で同じ挨拶を返す）とは独立した
//! プロセスであり、コードの共有も通信も行わない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HELLO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `HELLO_PORT` | No | ポート番号（デフォルト: `8080`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p greeting-hello
//!
//! # 本番環境（環境変数を直接指定）
//! HELLO_PORT=8080 cargo run -p greeting-hello --release
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use greeting_hello::{app_builder::build_app, config::HelloConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Hello サービスのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    // RUST_LOG 環境変数でログレベルを制御可能
    // 例: RUST_LOG=debug,tower_http=trace
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,greeting_hello=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = HelloConfig::from_env();

    tracing::info!(
        "Hello サービスを起動します: {}:{}",
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
    tracing::info!("Hello サービスが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
