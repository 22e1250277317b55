pub mod barcode;
pub mod llm;
pub mod product;
