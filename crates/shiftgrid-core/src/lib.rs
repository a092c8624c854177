//! shiftgrid-core
//!
//! Core building blocks for the shiftgrid schedule viewer.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（record, block, category, errors）
//! - **schedule**: 変換パイプライン（normalize, roster, builder）
//! - **layout**: 週間グリッドへの配置エンジン（clipping, visibility）
//! - **ports**: 抽象化レイヤー（ScheduleSource: 外部マッチングサービス）
//! - **impls**: 実装（StaticSource など開発用）
//!
//! The transform pipeline and the layout engine are pure, synchronous
//! functions over in-memory data: no I/O, no shared state, safe to call
//! reentrantly from any thread. The only async edge is the
//! [`ports::ScheduleSource`] boundary where the raw task batch comes from.

pub mod domain;
pub mod impls;
pub mod layout;
pub mod ports;
pub mod schedule;
