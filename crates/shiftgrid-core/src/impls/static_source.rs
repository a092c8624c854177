//! StaticSource - 開発用の ScheduleSource
//!
//! JSON を一度デコードして保持し、fetch のたびに clone を返します。
//! リモートのマッチングサービスが無い環境（デモ、テスト）での代役です。

use async_trait::async_trait;

use crate::ports::{ScheduleBatch, ScheduleSource, SourceError};

/// StaticSource は in-memory の batch を配るだけの ScheduleSource
///
/// # 使用例
/// ```ignore
/// let source = StaticSource::from_json(SAMPLE_BATCH)?;
/// let batch = source.fetch_batch().await?;
/// ```
#[derive(Debug, Clone)]
pub struct StaticSource {
    batch: ScheduleBatch,
}

impl StaticSource {
    pub fn new(batch: ScheduleBatch) -> Self {
        Self { batch }
    }

    /// Decode a batch from its wire JSON. Decode errors surface here, once,
    /// instead of on every fetch.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let batch = serde_json::from_str(json)?;
        Ok(Self { batch })
    }
}

#[async_trait]
impl ScheduleSource for StaticSource {
    async fn fetch_batch(&self) -> Result<ScheduleBatch, SourceError> {
        Ok(self.batch.clone())
    }
}
