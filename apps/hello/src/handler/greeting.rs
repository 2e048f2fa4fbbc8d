//! # 挨拶ハンドラ
//!
//! `GET /hello` に対して固定の挨拶文字列を返す。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /hello
//! ```
//!
//! ## レスポンス例
//!
//! ```text
//! Hello Docker from 2DAM
//! ```

/// 固定の挨拶メッセージ
///
/// プロセスの生存期間を通じて不変。Welcome サービスと同一の文字列を返す。
pub const GREETING: &str = "Hello Docker from 2DAM";

/// 挨拶エンドポイント
///
/// リクエストの内容（ボディ・ヘッダー・クエリパラメータ）は一切参照せず、
/// 常に 200 OK と固定文字列を返す。レスポンスの Content-Type は
/// `text/plain; charset=utf-8`。
///
/// # 使用例
///
/// ```text
/// $ curl http://localhost:8080/hello
/// Hello Docker from 2DAM
/// ```
pub async fn hello() -> &'static str {
    GREETING
}
