pub mod barcode;
pub mod fssai_chatbot;
pub mod health;
pub mod ingredient_analyzer;
pub mod product;
pub mod server;
