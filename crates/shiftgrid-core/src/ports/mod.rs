//! Ports - 抽象化レイヤー
//!
//! 外部スケジューリング/マッチングサービスへの境界を trait として定義し、
//! 実装の詳細（HTTP, ファイル, 開発用 in-memory など）を隠蔽します。
//! core 本体は pure なので、async なのはこの境界だけです。

pub mod schedule_source;

pub use self::schedule_source::{ScheduleBatch, ScheduleSource, SourceError};
