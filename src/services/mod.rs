pub mod mapping_builder;
pub mod rename_executor;

pub use mapping_builder::build_mappings;
pub use rename_executor::RenameExecutor;
