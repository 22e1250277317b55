use crate::domain::product::entities::TrackedProduct;

pub const CSV_HEADERS: [&str; 8] = [
    "Product Name",
    "Barcode",
    "Quantity",
    "Category",
    "Expiry Date",
    "Upload Date",
    "Status",
    "Ingredients",
];

pub const CSV_FILE_NAME: &str = "nutriTrack_products.csv";

/// Serializes products as CSV. Free-text columns are always quoted.
pub fn products_to_csv(products: &[TrackedProduct]) -> String {
    let mut rows = Vec::with_capacity(products.len() + 1);
    rows.push(CSV_HEADERS.join(","));

    for product in products {
        rows.push(
            [
                quoted(&product.product_name),
                product.barcode.clone(),
                product.quantity.to_string(),
                quoted(&product.category),
                product.expiry_date.format("%Y-%m-%d").to_string(),
                product.upload_date.format("%Y-%m-%d").to_string(),
                product.status.to_string(),
                quoted(&product.ingredients),
            ]
            .join(","),
        );
    }

    rows.join("\n")
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
