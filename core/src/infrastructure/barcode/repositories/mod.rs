pub mod json_barcode_repository;
