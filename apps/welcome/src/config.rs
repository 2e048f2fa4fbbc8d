//! # Welcome サービス設定
//!
//! 環境変数から Welcome サービスの設定を読み込む。

use std::env;

/// ポート番号のデフォルト値
///
/// Hello サービス（8080）と同時に起動できるよう、隣接ポートを使用する。
const DEFAULT_PORT: u16 = 8081;

/// Welcome サービスの設定
#[derive(Debug, Clone)]
pub struct WelcomeConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
}

impl WelcomeConfig {
   /// 環境変数から設定を読み込む
   ///
   /// すべての変数にデフォルト値があるため、読み込みは失敗しない。
   /// 不正な値（数値でないポート番号など）はデフォルト値として扱う。
   pub fn from_env() -> Self {
      Self {
         host: env::var("WELCOME_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: parse_port(env::var("WELCOME_PORT").ok()),
      }
   }
}

/// 環境変数の値からポート番号をパースする
///
/// 未設定または不正な値の場合はデフォルト値（8081）を返す。
fn parse_port(value: Option<String>) -> u16 {
   value.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
   // テスト間で環境変数の競合を避けるため、
   // パース関数に対して検証する

   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_ポート未設定のときデフォルト値() {
      assert_eq!(parse_port(None), 8081);
   }

   #[test]
   fn test_ポート設定済みのときその値() {
      assert_eq!(parse_port(Some("9100".to_string())), 9100);
   }

   #[test]
   fn test_ポートが数値でないときデフォルト値() {
      assert_eq!(parse_port(Some("web".to_string())), 8081);
   }
}
