use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use nutritrack_core::{
    domain::common::services::Service,
    infrastructure::{
        barcode::repositories::json_barcode_repository::JsonBarcodeRepository,
        llm::GeminiLLMClient,
        product::repositories::local_product_repository::LocalProductRepository,
    },
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path_regex},
};

use crate::application::http::server::{app_state::AppState, http_server::api_routes};
use crate::args::Args;

pub const KNOWN_BARCODE: &str = "8901491101837";

/// A running API wired to a fake Gemini endpoint and a scratch barcode catalogue.
pub struct TestApp {
    pub server: TestServer,
    pub gemini: MockServer,
    _catalogue_dir: TempDir,
}

impl TestApp {
    pub async fn start() -> Self {
        let gemini = MockServer::start().await;

        let catalogue_dir = tempfile::tempdir().expect("tempdir");
        let barcodes_file = catalogue_dir.path().join("barcodes.json");
        std::fs::write(
            &barcodes_file,
            json!([{
                "barcode": KNOWN_BARCODE,
                "productName": "Lay's Classic Salted Chips",
                "ingredients": "Potato, Edible Vegetable Oil, Iodised Salt"
            }])
            .to_string(),
        )
        .expect("catalogue written");

        let args = Args::parse_from(["nutritrack-api", "--gemini-api-key", "test-key"]);
        let service = Service::new(
            LocalProductRepository::in_memory(),
            JsonBarcodeRepository::new(barcodes_file),
            GeminiLLMClient::new("test-key".to_string(), "gemini-2.0-flash".to_string())
                .with_base_url(gemini.uri()),
        );

        let state = AppState::new(Arc::new(args), service);
        let server = TestServer::new(api_routes("").with_state(state)).expect("test server");

        Self {
            server,
            gemini,
            _catalogue_dir: catalogue_dir,
        }
    }

    /// Makes every Gemini call answer with `text` as the model output.
    pub async fn gemini_replies(&self, text: &str) {
        Mock::given(method("POST"))
            .and(path_regex(r":generateContent$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": text }] } }]
            })))
            .mount(&self.gemini)
            .await;
    }

    pub async fn gemini_fails(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&self.gemini)
            .await;
    }
}
