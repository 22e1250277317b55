pub mod analysis;
pub mod barcode;
pub mod common;
pub mod flow;
pub mod product;
