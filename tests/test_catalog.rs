use catalog_composer::prelude::*;
use catalog_composer::ReporterKind;
use std::sync::Arc;

#[test]
fn test_full_run_emits_lines_in_call_order() {
    let reporter = MemoryReporter::new();
    let orchestrator =
        CatalogOrchestrator::new(Arc::new(reporter.clone()), CatalogConfig::default());

    let summary = orchestrator.run_all().unwrap();

    assert_eq!(
        reporter.lines(),
        vec![
            "Regular fly with wings",
            "Regular quack!",
            "Cannot fly!",
            "Rubber ducky squeak.",
            "Decorated description: House Blend, with Milk, with Mocha, with Mocha",
            "Cost: 2.49",
            "Preparing Cheese Pizza",
            "Baking Cheese Pizza",
            "Cutting Cheese Pizza",
            "Boxing Cheese Pizza",
            "Ordered a Cheese Pizza",
            "No pizza on the menu for 'anchovy'",
        ]
    );
    assert_eq!(summary.orders.len(), 2);
    assert_eq!(summary.unknown_keys(), 1);
}

#[test]
fn test_configured_run() {
    let config = CatalogConfig::from_json_str(
        r#"{
            "reporter": "memory",
            "house_blend_price": 210,
            "beverage_condiments": ["soy", "whip"],
            "pizza_orders": ["greek", "pepperoni", "hawaiian"]
        }"#,
    )
    .unwrap();
    assert_eq!(config.reporter, ReporterKind::Memory);

    let orchestrator = CatalogOrchestrator::from_config(config);
    let summary = orchestrator.run_all().unwrap();

    assert_eq!(summary.beverage.cost, Price::from_cents(235));
    assert_eq!(summary.beverage.description, "House Blend, with Soy, with Whip");
    let products: Vec<Option<&str>> = summary
        .orders
        .iter()
        .map(|o| o.product.as_deref())
        .collect();
    assert_eq!(
        products,
        vec![Some("Greek Pizza"), Some("Pepperoni Pizza"), None]
    );

    let lines = orchestrator.captured_lines().unwrap();
    assert_eq!(lines[0], "Regular fly with wings");
    assert!(lines.contains(&"Cost: 2.35".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("No pizza on the menu for 'hawaiian'"));
}

#[test]
fn test_summary_serializes() {
    let config = CatalogConfig::default().with_reporter(ReporterKind::Silent);
    let summary = CatalogOrchestrator::from_config(config).run_all().unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["beverage"]["cost"], 249);
    assert_eq!(json["orders"][0]["stages"], serde_json::json!(["prepare", "bake", "cut", "box"]));
    assert_eq!(json["orders"][1]["product"], serde_json::Value::Null);
}
