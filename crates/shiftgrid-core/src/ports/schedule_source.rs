//! ScheduleSource port - 外部スケジューリングサービスの抽象化
//!
//! サービスは task batch（と、あれば roster）を JSON で返します。
//! core はこの 1 リクエスト/レスポンスを受け取るだけで、retry は
//! しません（呼び出し側の責務）。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Employee, TaskRecord};

/// One fetched batch: the raw task records plus, optionally, the
/// authoritative roster. When `employees` is absent the transform
/// synthesizes a placeholder roster instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBatch {
    pub tasks: Vec<TaskRecord>,

    #[serde(default)]
    pub employees: Option<Vec<Employee>>,
}

/// SourceError は batch 取得時のエラー
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("schedule payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("schedule source unavailable: {0}")]
    Unavailable(String),
}

/// ScheduleSource は raw task batch の取得境界
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数タスクから使える）
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch the current batch. A single request/response; no retry here.
    async fn fetch_batch(&self) -> Result<ScheduleBatch, SourceError>;
}
