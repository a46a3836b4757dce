/// Integration tests for the pricing page flow
use std::collections::HashMap;

use askama::Template;
use cloudml::catalog::Catalog;
use cloudml::config;
use cloudml::models::{build_summary, parse_selection};
use cloudml::templates::PricingTemplate;
use cloudml::utils::{absolute_url, build_query_string};

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn render_page(catalog: &Catalog, q: &HashMap<String, String>) -> String {
    let state = parse_selection(catalog, q);
    let summary = build_summary(&state);
    PricingTemplate {
        platform_name: "CloudML Platform".into(),
        base_url: "http://localhost:5000".into(),
        tagline: config::PLATFORM_TAGLINE,
        home_url: absolute_url("http://localhost:5000", "/"),
        plans: catalog.plans(),
        gpu_options: catalog.gpu_options(),
        memory_options: catalog.memory_options(),
        state: &state,
        summary,
    }
    .render()
    .expect("pricing page should render")
}

#[test]
fn test_full_configuration_flow() {
    let catalog = Catalog::standard();

    // Fresh page: Starter selected, panel hidden
    let state = parse_selection(&catalog, &query(&[]));
    assert_eq!(state.plan.name, "Starter");
    assert!(!state.config_panel_visible);

    // Select the Pro plan: panel visible, fields empty, not ready
    let state = parse_selection(&catalog, &query(&[("plan", "Pro")]));
    assert!(state.config_panel_visible);
    assert!(state.gpu.is_empty() && state.memory.is_empty() && state.alias.is_empty());
    assert!(!state.is_ready());

    // Fill in the configuration panel
    let state = parse_selection(
        &catalog,
        &query(&[
            ("plan", "Pro"),
            ("gpu", "A100"),
            ("memory", "32"),
            ("alias", "my-box"),
        ]),
    );
    assert!(state.is_ready());
    let summary = build_summary(&state);
    assert_eq!(summary.plan_name, "Pro");
    assert_eq!(summary.plan_features.len(), 5);
    assert_eq!(summary.gpu_label, "A100");
    assert_eq!(summary.memory_label, "32 GiB");
    assert_eq!(summary.alias_label, "my-box");
}

#[test]
fn test_initial_page_hides_config_panel_and_disables_cta() {
    let catalog = Catalog::standard();
    let html = render_page(&catalog, &query(&[]));
    assert!(!html.contains("Customize Your GPU Setup"));
    assert!(html.contains("disabled"));
    assert!(html.contains("Get Started with Your Custom Setup"));
    assert!(html.contains("Not selected"));
    assert!(html.contains("Not set"));
}

#[test]
fn test_selecting_a_plan_reveals_config_panel() {
    let catalog = Catalog::standard();
    let html = render_page(&catalog, &query(&[("plan", "Pro")]));
    assert!(html.contains("Customize Your GPU Setup"));
    assert!(html.contains("Choose a GPU"));
    assert!(html.contains("Choose memory size"));
    assert!(html.contains("Enter SSH alias or instance name"));
    // Pro card is highlighted
    assert!(html.contains("plan-card-selected"));
}

#[test]
fn test_fully_configured_page_enables_cta() {
    let catalog = Catalog::standard();
    let html = render_page(
        &catalog,
        &query(&[
            ("plan", "Pro"),
            ("gpu", "A100"),
            ("memory", "32"),
            ("alias", "my-box"),
        ]),
    );
    assert!(!html.contains("disabled"));
    assert!(html.contains("GPU: A100"));
    assert!(html.contains("Memory: 32 GiB"));
    assert!(html.contains("SSH Alias: my-box"));
}

#[test]
fn test_enterprise_price_renders_custom_literal() {
    let catalog = Catalog::standard();
    let state = parse_selection(&catalog, &query(&[("plan", "Enterprise")]));
    assert_eq!(state.plan.price, "Custom");
    let html = render_page(&catalog, &query(&[("plan", "Enterprise")]));
    assert!(html.contains(r#"Custom<span class="price-period">/month</span>"#));
}

#[test]
fn test_every_plan_price_carries_month_suffix() {
    let catalog = Catalog::standard();
    let html = render_page(&catalog, &query(&[]));
    for plan in catalog.plans() {
        let rendered = format!(r#"{}<span class="price-period">/month</span>"#, plan.price);
        assert!(html.contains(&rendered), "missing price for {}", plan.name);
    }
}

#[test]
fn test_build_query_string_percent_encodes() {
    let pairs = vec![
        ("plan".to_string(), "Pro".to_string()),
        ("alias".to_string(), "my box".to_string()),
    ];
    assert_eq!(build_query_string(&pairs), "plan=Pro&alias=my%20box");
}

#[test]
fn test_absolute_url_joins_base_and_path() {
    assert_eq!(absolute_url("http://localhost:5000", "/"), "http://localhost:5000");
    assert_eq!(
        absolute_url("http://localhost:5000", "/static/styles.css"),
        "http://localhost:5000/static/styles.css"
    );
    assert_eq!(
        absolute_url("http://localhost:5000", "https://other.example.com/x"),
        "https://other.example.com/x"
    );
}
