//! # Hello サービス設定
//!
//! 環境変数から Hello サービスの設定を読み込む。

use std::env;

/// ポート番号のデフォルト値
const DEFAULT_PORT: u16 = 8080;

/// Hello サービスの設定
#[derive(Debug, Clone)]
pub struct HelloConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
}

impl HelloConfig {
   /// 環境変数から設定を読み込む
   ///
   /// すべての変数にデフォルト値があるため、読み込みは失敗しない。
   /// 不正な値（数値でないポート番号など）はデフォルト値として扱う。
   pub fn from_env() -> Self {
      Self {
         host: env::var("HELLO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: parse_port(env::var("HELLO_PORT").ok()),
      }
   }
}

/// 環境変数の値からポート番号をパースする
///
/// 未設定または不正な値の場合はデフォルト値（8080）を返す。
fn parse_port(value: Option<String>) -> u16 {
   value.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}
