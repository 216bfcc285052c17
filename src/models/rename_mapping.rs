use std::path::Path;

/// PlayerKey 列可接受的表头写法（按顺序尝试）
pub const PLAYER_KEY_HEADERS: &[&str] = &["PlayerKey", "playerKey"];

/// PlayerImage 列可接受的表头写法（按顺序尝试）
pub const PLAYER_IMAGE_HEADERS: &[&str] = &["PlayerImage", "playerImage"];

/// 一条重命名映射：旧文件名 → 新文件名（不含扩展名）
///
/// 两个字段都已去除首尾空白且非空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameMapping {
    pub old_name: String,
    pub new_name_stem: String,
}

impl RenameMapping {
    /// 去空白后任一字段为空则返回 `None`
    pub fn new(old_name: &str, new_name_stem: &str) -> Option<Self> {
        let old_name = old_name.trim();
        let new_name_stem = new_name_stem.trim();

        if old_name.is_empty() || new_name_stem.is_empty() {
            return None;
        }

        Some(Self {
            old_name: old_name.to_string(),
            new_name_stem: new_name_stem.to_string(),
        })
    }

    /// 旧文件名的扩展名（含 `.`），没有则为空串
    pub fn extension(&self) -> String {
        Path::new(&self.old_name)
            .extension()
            .map(|ext| ext.to_string_lossy())
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }

    /// 目标文件名 = 新 stem + 旧扩展名
    pub fn new_name(&self) -> String {
        format!("{}{}", self.new_name_stem, self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(old: &str, new: &str) -> RenameMapping {
        RenameMapping::new(old, new).unwrap()
    }

    #[test]
    fn test_trims_both_fields() {
        let m = mapping("  img1.jpg ", " p1\t");
        assert_eq!(m.old_name, "img1.jpg");
        assert_eq!(m.new_name_stem, "p1");
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        // 纯空白的 key 同样视为空，避免生成 ".jpg" 这样的目标文件名
        assert!(RenameMapping::new("img1.jpg", "   ").is_none());
        assert!(RenameMapping::new("  ", "p1").is_none());
        assert!(RenameMapping::new("", "").is_none());
    }

    #[test]
    fn test_extension_uses_last_dot() {
        assert_eq!(mapping("img1.jpg", "p1").extension(), ".jpg");
        assert_eq!(mapping("photo.final.PNG", "p1").new_name(), "p1.PNG");
        assert_eq!(mapping("archive.tar.gz", "p1").extension(), ".gz");
    }

    #[test]
    fn test_no_extension_cases() {
        assert_eq!(mapping("README", "p1").extension(), "");
        assert_eq!(mapping(".hidden", "p1").extension(), "");
        assert_eq!(mapping("trailing.", "p1").extension(), "");
        assert_eq!(mapping("README", "p1").new_name(), "p1");
    }
}
