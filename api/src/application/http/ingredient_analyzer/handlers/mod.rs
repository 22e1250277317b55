pub mod analyze_ingredients;
pub mod analyze_product;
pub mod summarize_analysis;
