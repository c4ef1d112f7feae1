use crate::domain::model::{Binding, BindingValue, FlatRecord};
use crate::utils::error::{EtlError, Result};
use serde::Deserialize;
use serde_json::Value;

const BINDINGS_PATH: &str = "results.bindings";

/// 未綁定的欄位或 `null` 一律回傳空字串；字串原樣保留，其他純量轉成文字
pub fn field_value(field: Option<BindingValue>) -> String {
    match field.and_then(|binding| binding.value) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) => value,
        Some(other) => other.to_string(),
    }
}

impl From<Binding> for FlatRecord {
    fn from(binding: Binding) -> Self {
        Self {
            label: field_value(binding.company_label),
            alias: field_value(binding.alias),
            description: field_value(binding.description),
        }
    }
}

/// 取出 `results.bindings`；缺少這個路徑代表回應格式不符
pub fn bindings(response: &Value) -> Result<&Vec<Value>> {
    response
        .pointer("/results/bindings")
        .ok_or_else(|| EtlError::ResponseShapeError {
            path: BINDINGS_PATH.to_string(),
            message: "path not found in response".to_string(),
        })?
        .as_array()
        .ok_or_else(|| EtlError::ResponseShapeError {
            path: BINDINGS_PATH.to_string(),
            message: "expected a JSON array".to_string(),
        })
}

/// 將 SPARQL JSON 回應攤平成 FlatRecord，一筆對一筆、順序不變
pub fn flatten_response(response: &Value) -> Result<Vec<FlatRecord>> {
    bindings(response)?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let binding: Binding =
                Binding::deserialize(item).map_err(|e| EtlError::ResponseShapeError {
                    path: format!("{}[{}]", BINDINGS_PATH, index),
                    message: e.to_string(),
                })?;
            Ok(FlatRecord::from(binding))
        })
        .collect()
}

/// 輸出含標題列的 CSV；沒有資料時只有標題列
pub fn render_csv(records: &[FlatRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(FlatRecord::HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
