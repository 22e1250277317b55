use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

use super::handlers::add_product::{__path_add_product, add_product};
use super::handlers::delete_product::{__path_delete_product, delete_product};
use super::handlers::export_products::{__path_export_products, export_products};
use super::handlers::get_products::{__path_get_products, get_products};
use super::handlers::guess_ingredients::{__path_guess_ingredients, guess_ingredients};
use super::handlers::update_quantity::{__path_update_quantity, update_quantity};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_products,
    add_product,
    update_quantity,
    delete_product,
    export_products,
    guess_ingredients
))]
pub struct ProductApiDoc;

pub fn product_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/products", root_path),
            get(get_products).post(add_product),
        )
        .route(
            &format!("{}/products/export", root_path),
            get(export_products),
        )
        .route(
            &format!("{}/products/guess-ingredients", root_path),
            post(guess_ingredients),
        )
        .route(
            &format!("{}/products/{{product_id}}/quantity", root_path),
            patch(update_quantity),
        )
        .route(
            &format!("{}/products/{{product_id}}", root_path),
            delete(delete_product),
        )
}
