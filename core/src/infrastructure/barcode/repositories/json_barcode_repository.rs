use std::path::PathBuf;

use tracing::{debug, error};

use crate::domain::{
    barcode::{entities::BarcodeInfo, ports::BarcodeRepository},
    common::entities::app_errors::CoreError,
};

/// Barcode catalogue read from a JSON array on every lookup.
#[derive(Debug, Clone)]
pub struct JsonBarcodeRepository {
    path: PathBuf,
}

impl JsonBarcodeRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BarcodeRepository for JsonBarcodeRepository {
    async fn lookup(&self, barcode: String) -> Result<Option<BarcodeInfo>, CoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(
                    "Failed to read barcode catalogue {}: {}",
                    self.path.display(),
                    e
                );
                return Ok(None);
            }
        };

        let entries: Vec<BarcodeInfo> = match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                error!(
                    "Failed to parse barcode catalogue {}: {}",
                    self.path.display(),
                    e
                );
                return Ok(None);
            }
        };

        let found = entries.into_iter().find(|entry| entry.barcode == barcode);
        debug!(barcode = %barcode, found = found.is_some(), "barcode lookup");

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_matching_entry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("barcodes.json");
        std::fs::write(
            &path,
            r#"[
                {"barcode": "111", "productName": "Cola", "ingredients": "Water, Sugar"},
                {"barcode": "222", "productName": "Plain Water"}
            ]"#,
        )
        .expect("written");

        let repository = JsonBarcodeRepository::new(&path);

        let cola = repository.lookup("111".to_string()).await.expect("lookup");
        assert_eq!(
            cola.map(|c| (c.product_name, c.ingredients)),
            Some(("Cola".to_string(), "Water, Sugar".to_string()))
        );

        let water = repository.lookup("222".to_string()).await.expect("lookup");
        assert_eq!(water.map(|w| w.ingredients), Some(String::new()));

        assert_eq!(repository.lookup("333".to_string()).await, Ok(None));
    }

    #[tokio::test]
    async fn unreadable_catalogue_yields_no_match() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = JsonBarcodeRepository::new(dir.path().join("missing.json"));
        assert_eq!(missing.lookup("111".to_string()).await, Ok(None));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").expect("written");
        let broken = JsonBarcodeRepository::new(&path);
        assert_eq!(broken.lookup("111".to_string()).await, Ok(None));
    }
}
