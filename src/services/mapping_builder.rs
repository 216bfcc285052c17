//! 映射构建服务 - 业务能力层
//!
//! 把原始 CSV 行转换成重命名映射，缺字段的行直接丢弃（不计数、不记日志）。

use crate::models::{RenameMapping, SourceRow, PLAYER_IMAGE_HEADERS, PLAYER_KEY_HEADERS};

/// 由单行记录构建映射
pub fn mapping_from_row(row: &SourceRow) -> Option<RenameMapping> {
    let player_key = row.first_of(PLAYER_KEY_HEADERS)?;
    let player_image = row.first_of(PLAYER_IMAGE_HEADERS)?;

    RenameMapping::new(player_image, player_key)
}

/// 按输入顺序构建全部映射
pub fn build_mappings(rows: &[SourceRow]) -> Vec<RenameMapping> {
    rows.iter().filter_map(mapping_from_row).collect()
}
