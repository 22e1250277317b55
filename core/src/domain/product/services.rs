use tracing::info;
use uuid::Uuid;

use crate::domain::{
    barcode::ports::BarcodeRepository,
    common::{entities::app_errors::CoreError, services::Service, today},
    flow::ports::LLMClient,
    product::{
        csv::products_to_csv,
        entities::{
            DEFAULT_CATEGORY, MANUAL_BARCODE, TrackedProduct, UNKNOWN_INGREDIENTS,
        },
        ports::{ProductRepository, ProductService},
        value_objects::{
            AddProductInput, ListProductsFilter, ProductSortKey, SortDirection,
        },
    },
};

impl<PR, BR, LLM> ProductService for Service<PR, BR, LLM>
where
    PR: ProductRepository,
    BR: BarcodeRepository,
    LLM: LLMClient,
{
    async fn add_product(&self, input: AddProductInput) -> Result<TrackedProduct, CoreError> {
        let expiry_date = input
            .expiry_date
            .ok_or_else(|| CoreError::Invalid("Please enter the expiry date.".to_string()))?;

        let quantity = input.quantity.unwrap_or(1);
        if quantity < 1 {
            return Err(CoreError::Invalid(
                "Quantity must be at least 1.".to_string(),
            ));
        }

        let barcode = non_blank(input.barcode).filter(|b| b != MANUAL_BARCODE);
        let catalogue_entry = match &barcode {
            Some(barcode) => self.barcode_repository.lookup(barcode.clone()).await?,
            None => None,
        };

        let product_name = non_blank(input.product_name)
            .or_else(|| catalogue_entry.as_ref().map(|e| e.product_name.clone()))
            .ok_or_else(|| {
                CoreError::Invalid(
                    "Please enter the product name for manual entry or look up a barcode."
                        .to_string(),
                )
            })?;

        let ingredients = non_blank(input.ingredients)
            .or_else(|| {
                catalogue_entry
                    .as_ref()
                    .and_then(|e| non_blank(Some(e.ingredients.clone())))
            })
            .unwrap_or_else(|| UNKNOWN_INGREDIENTS.to_string());

        let product = TrackedProduct::new(
            product_name,
            barcode.unwrap_or_else(|| MANUAL_BARCODE.to_string()),
            quantity,
            non_blank(input.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            expiry_date,
            ingredients,
            today(),
        );

        let product = self.product_repository.append(product).await?;
        info!(product_id = %product.id, name = %product.product_name, "product added to tracker");

        Ok(product)
    }

    async fn list_products(
        &self,
        filter: ListProductsFilter,
    ) -> Result<Vec<TrackedProduct>, CoreError> {
        let today = today();
        let mut products = self.product_repository.list().await?;

        for product in products.iter_mut() {
            product.refresh_status(today);
        }

        if let Some(status) = filter.status {
            products.retain(|p| p.status == status);
        }

        sort_products(&mut products, filter.sort_by, filter.direction);

        Ok(products)
    }

    async fn update_quantity(
        &self,
        product_id: Uuid,
        change: i64,
    ) -> Result<TrackedProduct, CoreError> {
        let mut product = self
            .product_repository
            .adjust_quantity(product_id, change)
            .await?;
        product.refresh_status(today());

        Ok(product)
    }

    async fn remove_product(&self, product_id: Uuid) -> Result<(), CoreError> {
        self.product_repository.remove(product_id).await?;
        info!(product_id = %product_id, "product removed from tracker");

        Ok(())
    }

    async fn export_products_csv(&self, filter: ListProductsFilter) -> Result<String, CoreError> {
        let products = self.list_products(filter).await?;
        if products.is_empty() {
            return Err(CoreError::Invalid("No products to export.".to_string()));
        }

        Ok(products_to_csv(&products))
    }
}

pub fn sort_products(
    products: &mut [TrackedProduct],
    sort_by: ProductSortKey,
    direction: SortDirection,
) {
    products.sort_by(|a, b| {
        let ordering = match sort_by {
            ProductSortKey::ProductName => a
                .product_name
                .to_lowercase()
                .cmp(&b.product_name.to_lowercase()),
            ProductSortKey::ExpiryDate => a.expiry_date.cmp(&b.expiry_date),
            ProductSortKey::UploadDate => a.upload_date.cmp(&b.upload_date),
            ProductSortKey::Status => a.status.rank().cmp(&b.status.rank()),
        };

        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
