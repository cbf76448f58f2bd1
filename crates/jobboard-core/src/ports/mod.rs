//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 投稿ワークフローが外部に依存するのは key-value ストレージだけです。
//!
//! # 設計原則
//! - ストレージは文字列キー → 文字列値（localStorage と同じ形）
//! - 値の形式（JSON）を知っているのは JobStore だけ

pub mod storage;

pub use self::storage::Storage;
