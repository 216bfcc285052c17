//! CSV 中的一行原始记录

use std::collections::HashMap;

/// 一行原始记录，按表头名取字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    fields: HashMap<String, String>,
}

impl SourceRow {
    /// 由表头与一行数据组装；行比表头短时，缺少的列视为不存在
    pub fn new<'a>(
        headers: impl IntoIterator<Item = &'a str>,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let fields = headers
            .into_iter()
            .zip(values)
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();

        Self { fields }
    }

    /// 按表头名精确查找（区分大小写）
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    /// 依次尝试多个表头名，返回第一个非空的取值
    pub fn first_of(&self, headers: &[&str]) -> Option<&str> {
        headers
            .iter()
            .filter_map(|header| self.get(header))
            .find(|value| !value.is_empty())
    }
}
