use std::{path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{entities::TrackedProduct, ports::ProductRepository, value_objects::ProductPatch},
};

/// On-disk layout: one JSON document holding every tracked product.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "nutriTrackProducts", default)]
    products: Vec<TrackedProduct>,
}

/// Product store kept in memory and mirrored to a JSON file when a path is set.
#[derive(Debug, Clone)]
pub struct LocalProductRepository {
    path: Option<PathBuf>,
    products: Arc<RwLock<Vec<TrackedProduct>>>,
}

impl LocalProductRepository {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            products: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Loads the document at `path`. A missing file starts an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();

        let products = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => {
                let document: ProductDocument = serde_json::from_slice(&bytes).map_err(|e| {
                    error!("Failed to parse product store {}: {}", path.display(), e);
                    CoreError::StorageError(format!("Corrupt product store: {}", e))
                })?;
                document.products
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Product store {} not found, starting empty", path.display());
                Vec::new()
            }
            Err(e) => {
                error!("Failed to read product store {}: {}", path.display(), e);
                return Err(CoreError::StorageError(e.to_string()));
            }
        };

        Ok(Self {
            path: Some(path),
            products: Arc::new(RwLock::new(products)),
        })
    }

    async fn persist(&self, products: &[TrackedProduct]) -> Result<(), CoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let document = ProductDocument {
            products: products.to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&document).map_err(|e| {
            error!("Failed to serialize product store: {}", e);
            CoreError::StorageError(e.to_string())
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create {}: {}", parent.display(), e);
                CoreError::StorageError(e.to_string())
            })?;
        }

        tokio::fs::write(path, bytes).await.map_err(|e| {
            error!("Failed to write product store {}: {}", path.display(), e);
            CoreError::StorageError(e.to_string())
        })
    }
}

impl ProductRepository for LocalProductRepository {
    async fn list(&self) -> Result<Vec<TrackedProduct>, CoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn append(&self, product: TrackedProduct) -> Result<TrackedProduct, CoreError> {
        let mut products = self.products.write().await;
        products.push(product.clone());

        if let Err(e) = self.persist(&products).await {
            products.pop();
            return Err(e);
        }

        Ok(product)
    }

    async fn update(
        &self,
        product_id: Uuid,
        patch: ProductPatch,
    ) -> Result<TrackedProduct, CoreError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or(CoreError::NotFound)?;

        let previous = products[index].clone();
        products[index].apply(patch);

        if let Err(e) = self.persist(&products).await {
            products[index] = previous;
            return Err(e);
        }

        Ok(products[index].clone())
    }

    async fn adjust_quantity(
        &self,
        product_id: Uuid,
        change: i64,
    ) -> Result<TrackedProduct, CoreError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or(CoreError::NotFound)?;

        let previous = products[index].quantity;
        let quantity = i64::from(previous).saturating_add(change).max(1);
        products[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Err(e) = self.persist(&products).await {
            products[index].quantity = previous;
            return Err(e);
        }

        Ok(products[index].clone())
    }

    async fn remove(&self, product_id: Uuid) -> Result<(), CoreError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or(CoreError::NotFound)?;

        let removed = products.remove(index);

        if let Err(e) = self.persist(&products).await {
            products.insert(index, removed);
            return Err(e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn product(name: &str) -> TrackedProduct {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        TrackedProduct::new(
            name.to_string(),
            "MANUAL".to_string(),
            1,
            "Snacks".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 20).expect("valid date"),
            "N/A".to_string(),
            today,
        )
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repository = LocalProductRepository::open(dir.path().join("products.json"))
            .await
            .expect("opened");

        assert!(repository.list().await.expect("listed").is_empty());
    }

    #[tokio::test]
    async fn writes_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store").join("products.json");

        let repository = LocalProductRepository::open(&path).await.expect("opened");
        let chips = repository.append(product("Chips")).await.expect("appended");
        let biscuits = repository.append(product("Biscuits")).await.expect("appended");
        repository
            .update(
                chips.id,
                ProductPatch {
                    quantity: Some(4),
                    ..Default::default()
                },
            )
            .await
            .expect("updated");
        repository.remove(biscuits.id).await.expect("removed");

        let raw = std::fs::read_to_string(&path).expect("file written");
        assert!(raw.contains("\"nutriTrackProducts\""));

        let reopened = LocalProductRepository::open(&path).await.expect("reopened");
        let products = reopened.list().await.expect("listed");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_name, "Chips");
        assert_eq!(products[0].quantity, 4);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let repository = LocalProductRepository::in_memory();

        assert_eq!(
            repository.remove(Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        );
        assert_eq!(
            repository
                .update(Uuid::new_v4(), ProductPatch::default())
                .await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_quantity_changes_are_not_lost() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repository = LocalProductRepository::open(dir.path().join("products.json"))
            .await
            .expect("opened");
        let milk = repository.append(product("Milk")).await.expect("appended");

        let tasks = (0..50)
            .map(|_| {
                let repository = repository.clone();
                tokio::spawn(async move { repository.adjust_quantity(milk.id, 1).await })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await.expect("task joined").expect("adjusted");
        }

        let reopened = LocalProductRepository::open(dir.path().join("products.json"))
            .await
            .expect("reopened");
        assert_eq!(reopened.list().await.expect("listed")[0].quantity, 51);
    }

    #[tokio::test]
    async fn quantity_adjustment_floors_at_one() {
        let repository = LocalProductRepository::in_memory();
        let milk = repository.append(product("Milk")).await.expect("appended");

        let lowered = repository
            .adjust_quantity(milk.id, i64::MIN)
            .await
            .expect("adjusted");
        assert_eq!(lowered.quantity, 1);

        assert_eq!(
            repository.adjust_quantity(Uuid::new_v4(), 1).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("products.json");
        std::fs::write(&path, "{not json").expect("written");

        assert!(matches!(
            LocalProductRepository::open(&path).await,
            Err(CoreError::StorageError(_))
        ));
    }
}
