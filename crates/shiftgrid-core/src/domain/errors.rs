//! Errors - 変換時のエラー型
//!
//! どのエラーも batch 全体を止めません。builder は malformed なレコードを
//! skip して続行します（部分的な出力に degrade する設計）。

use thiserror::Error;

/// TransformError は 1 レコードの正規化に失敗した理由
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("malformed timestamp: {value:?}")]
    MalformedTimestamp { value: String },

    #[error("duration must be positive, got {minutes} minutes")]
    InvalidDuration { minutes: u32 },
}
