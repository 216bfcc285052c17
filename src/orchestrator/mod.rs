//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<RenameMapping>)
//!     ↓
//! services (能力层：mapping_builder / rename_executor)
//!     ↓
//! models (SourceRow / RenameMapping / RenameOutcome, CSV 加载)
//! ```
//!
//! 本层只做调度和统计，不做具体的文件判断。

pub mod batch_processor;

pub use batch_processor::{App, RenameStats};
