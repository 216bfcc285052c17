use crate::error::{AppError, AppResult};
use crate::models::source_row::SourceRow;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// 从 CSV 文件加载全部记录（首行为表头），保持原有顺序
///
/// 文件不存在返回 `InputNotFound`；任何读取 / 解码 / 解析错误返回
/// `InputReadError`，不会返回部分结果。
pub fn load_source_rows(csv_file_path: &Path) -> AppResult<Vec<SourceRow>> {
    if !csv_file_path.exists() {
        return Err(AppError::InputNotFound {
            path: csv_file_path.to_path_buf(),
        });
    }

    let reader = csv_reader_builder()
        .from_path(csv_file_path)
        .map_err(|e| AppError::input_read_failed(csv_file_path, e))?;

    let rows = collect_rows(reader).map_err(|e| AppError::input_read_failed(csv_file_path, e))?;

    tracing::debug!(
        "Loaded {} rows from {}",
        rows.len(),
        csv_file_path.display()
    );

    Ok(rows)
}

/// 从任意 reader 读取 CSV 记录
pub fn read_source_rows<R: Read>(source: R) -> Result<Vec<SourceRow>, csv::Error> {
    collect_rows(csv_reader_builder().from_reader(source))
}

fn csv_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<SourceRow>, csv::Error> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(UTF8_BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(SourceRow::new(
            headers.iter().map(String::as_str),
            record.iter(),
        ));
    }

    Ok(rows)
}
