//! # Hello サービス ライブラリ
//!
//! コンテナデプロイ検証用の最小 HTTP サービスのコアモジュール。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`handler`] - HTTP リクエストハンドラ
//!
//! バイナリ（`main.rs`）とテストの双方がこのライブラリを通じて
//! 同一のルーターを構築する。

pub mod app_builder;
pub mod config;
pub mod handler;
