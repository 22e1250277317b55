pub mod add_product;
pub mod delete_product;
pub mod export_products;
pub mod get_products;
pub mod guess_ingredients;
pub mod update_quantity;
