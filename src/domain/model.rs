use serde::{Deserialize, Serialize};

/// SPARQL JSON 結果中單一變數的綁定值，例如 `{ "type": "literal", "value": "Acme" }`
///
/// `value` 不限定為字串，`null` 或數字由攤平時轉成文字。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BindingValue {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// `results.bindings` 中的一筆結果；未綁定的變數整個欄位都不會出現
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Binding {
    #[serde(rename = "companyLabel", default)]
    pub company_label: Option<BindingValue>,
    #[serde(default)]
    pub alias: Option<BindingValue>,
    #[serde(default)]
    pub description: Option<BindingValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatRecord {
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Alias")]
    pub alias: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl FlatRecord {
    pub const HEADERS: [&'static str; 3] = ["Label", "Alias", "Description"];
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<FlatRecord>,
    pub csv_output: String,
}
