use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::TrackedProduct,
        value_objects::{AddProductInput, ListProductsFilter, ProductPatch},
    },
};

/// Storage for tracked products.
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<TrackedProduct>, CoreError>> + Send;

    fn append(
        &self,
        product: TrackedProduct,
    ) -> impl Future<Output = Result<TrackedProduct, CoreError>> + Send;

    fn update(
        &self,
        product_id: Uuid,
        patch: ProductPatch,
    ) -> impl Future<Output = Result<TrackedProduct, CoreError>> + Send;

    /// Adds `change` to the stored quantity in one step, never going below one.
    fn adjust_quantity(
        &self,
        product_id: Uuid,
        change: i64,
    ) -> impl Future<Output = Result<TrackedProduct, CoreError>> + Send;

    fn remove(&self, product_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    fn add_product(
        &self,
        input: AddProductInput,
    ) -> impl Future<Output = Result<TrackedProduct, CoreError>> + Send;

    fn list_products(
        &self,
        filter: ListProductsFilter,
    ) -> impl Future<Output = Result<Vec<TrackedProduct>, CoreError>> + Send;

    /// Adds `change` to the quantity, never going below one.
    fn update_quantity(
        &self,
        product_id: Uuid,
        change: i64,
    ) -> impl Future<Output = Result<TrackedProduct, CoreError>> + Send;

    fn remove_product(&self, product_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn export_products_csv(
        &self,
        filter: ListProductsFilter,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
