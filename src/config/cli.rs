use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// 輸出 CSV 的本機目錄，預設為 `data/`
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 檔案在輸出目錄下的位置，也就是完成訊息中顯示的路徑
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

impl Storage for LocalStorage {
    /// 資料已完整在記憶體中，一次寫入；目錄不存在時先建立
    async fn write_file(&self, file_name: &str, data: &[u8]) -> Result<String> {
        let target = self.resolve(file_name);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&target, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), target.display());

        Ok(target.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_PATH};
    use tempfile::TempDir;

    #[test]
    fn test_default_location_is_data_dir() {
        let storage = LocalStorage::new(DEFAULT_OUTPUT_PATH);

        assert_eq!(storage.output_dir(), Path::new("data"));
        assert_eq!(
            storage.resolve(DEFAULT_OUTPUT_FILE),
            Path::new("data/wikidata_input.csv")
        );
    }

    #[tokio::test]
    async fn test_write_creates_missing_directory_and_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("data");
        let storage = LocalStorage::new(base.clone());

        let written = storage
            .write_file("wikidata_input.csv", b"Label,Alias,Description\n")
            .await
            .unwrap();

        let expected = base.join("wikidata_input.csv");
        assert_eq!(written, expected.display().to_string());
        assert_eq!(
            fs::read_to_string(&expected).unwrap(),
            "Label,Alias,Description\n"
        );
    }

    #[tokio::test]
    async fn test_write_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        fs::write(temp_dir.path().join("out.csv"), "Label,Alias,Description\nOld Co,,\n").unwrap();

        storage
            .write_file("out.csv", b"Label,Alias,Description\n")
            .await
            .unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("out.csv")).unwrap(),
            "Label,Alias,Description\n"
        );
    }
}
