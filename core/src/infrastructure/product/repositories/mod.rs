pub mod local_product_repository;
