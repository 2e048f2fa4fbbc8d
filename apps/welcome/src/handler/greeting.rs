//! # 挨拶ハンドラ
//!
//! ルートパス `GET /` に対して固定の挨拶文字列を返す。

/// 固定の挨拶メッセージ
///
/// プロセスの生存期間を通じて不変。Hello サービスと同一の文字列を返す。
pub const GREETING: &str = "Hello Docker from 2DAM";

/// 挨拶エンドポイント
///
/// リクエストの内容は一切参照せず、常に 200 OK と固定文字列を返す。
/// レスポンスの Content-Type は `text/plain; charset=utf-8`。
///
/// # 使用例
///
/// ```text
/// $ curl http://localhost:8081/
/// Hello Docker from 2DAM
/// ```
pub async fn welcome() -> &'static str {
    GREETING
}
