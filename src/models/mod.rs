pub mod loaders;
pub mod outcome;
pub mod rename_mapping;
pub mod source_row;

pub use loaders::load_source_rows;
pub use outcome::RenameOutcome;
pub use rename_mapping::{RenameMapping, PLAYER_IMAGE_HEADERS, PLAYER_KEY_HEADERS};
pub use source_row::SourceRow;
