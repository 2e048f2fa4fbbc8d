//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。

pub mod greeting;

pub use greeting::welcome;
