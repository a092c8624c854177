//! 実装（開発用）

pub mod static_source;

pub use self::static_source::StaticSource;
