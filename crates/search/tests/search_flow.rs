//! End-to-end search flow against the in-memory catalog

use std::time::Duration;

use search::{InMemoryCatalog, SearchConfig, SearchPipeline};
use tokio::time::sleep;

const CATALOG: &str = r#"[
    {"id": "p-1", "name": "USB Gamepad", "thumbnail_url": "https://cdn.example.com/p-1.jpg", "unit_price": 59.99},
    {"id": "p-2", "name": "Mechanical Keyboard", "thumbnail_url": "https://cdn.example.com/p-2.jpg", "unit_price": 120.0},
    {"id": "p-3", "name": "Gaming Monitor", "thumbnail_url": "https://cdn.example.com/p-3.jpg", "unit_price": 310.0},
    {"id": "p-4", "name": "Webcam", "thumbnail_url": "https://cdn.example.com/p-4.jpg", "unit_price": 45.0}
]"#;

#[tokio::test(start_paused = true)]
async fn typing_then_pausing_surfaces_matching_products() {
    let catalog = InMemoryCatalog::from_json(CATALOG).unwrap();
    let (mut pipeline, mut updates) = SearchPipeline::new(catalog, SearchConfig::default());

    pipeline.on_input_change("g");
    sleep(Duration::from_millis(120)).await;
    pipeline.on_input_change("ga");
    sleep(Duration::from_millis(120)).await;
    pipeline.on_input_change("gam");

    let update = updates.recv().await.unwrap();
    assert_eq!(update.query, "gam");
    let names: Vec<_> = update.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["USB Gamepad", "Gaming Monitor"]);

    let snapshot = pipeline.snapshot();
    assert_eq!(snapshot.raw_text, "gam");
    assert_eq!(snapshot.committed_query.as_deref(), Some("gam"));

    // Clearing the box returns to idle; the last result set is kept (the
    // render layer hides the dropdown when no query is committed).
    pipeline.on_input_change("");
    let snapshot = pipeline.snapshot();
    assert_eq!(snapshot.committed_query, None);
    assert!(snapshot.results.is_some());
}

#[tokio::test(start_paused = true)]
async fn configured_window_controls_when_the_lookup_fires() {
    let catalog = InMemoryCatalog::from_json(CATALOG).unwrap();
    let config = SearchConfig::from_toml_str("debounce_ms = 100").unwrap();
    let (mut pipeline, mut updates) = SearchPipeline::new(catalog, config);

    pipeline.on_input_change("webcam");
    sleep(Duration::from_millis(99)).await;
    assert!(updates.try_recv().is_err());

    sleep(Duration::from_millis(5)).await;
    let update = updates.recv().await.unwrap();
    assert_eq!(update.products.len(), 1);
    assert_eq!(update.products[0].id, "p-4");
}

#[tokio::test(start_paused = true)]
async fn no_match_yields_an_empty_result_set() {
    let catalog = InMemoryCatalog::from_json(CATALOG).unwrap();
    let (mut pipeline, mut updates) = SearchPipeline::new(catalog, SearchConfig::default());

    pipeline.on_input_change("teapot");
    let update = updates.recv().await.unwrap();
    assert!(update.products.is_empty());
    assert_eq!(pipeline.snapshot().results, Some(Vec::new()));
}
