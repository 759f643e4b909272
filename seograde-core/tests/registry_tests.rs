// Tests for the operation registry and dispatch

use seograde_core::analysis::AnalysisOptions;
use seograde_core::registry::{builtin_registry, AnalysisRequest, OperationRegistry};
use seograde_core::report::AnalysisMode;
use std::sync::Arc;
use std::time::Duration;

fn request_for(url: &str) -> AnalysisRequest {
    AnalysisRequest {
        url: url.to_string(),
        options: AnalysisOptions {
            timeout: Duration::from_secs(2),
            ..AnalysisOptions::default()
        },
    }
}

// ============================================================================
// Registration Tests
// ============================================================================

#[test]
fn test_builtin_registry_exposes_three_operations() {
    let registry = builtin_registry();
    assert_eq!(
        registry.names(),
        vec!["analyze", "quick_check", "meta_tags_check"]
    );
}

#[test]
fn test_builtin_operations_have_descriptions() {
    let registry = builtin_registry();
    for name in registry.names() {
        let op = registry.get(name).unwrap();
        assert!(!op.description.is_empty());
    }
}

#[test]
fn test_reregistering_replaces_the_handler() {
    let mut registry = OperationRegistry::new();
    let handler = |mode: AnalysisMode| {
        Arc::new(move |request: AnalysisRequest| {
            let future: futures::future::BoxFuture<'static, _> = Box::pin(async move {
                seograde_core::analysis::run_analysis(&request.url, &request.options, mode).await
            });
            future
        })
    };

    registry.register("analyze", "first", handler(AnalysisMode::Full));
    registry.register("analyze", "second", handler(AnalysisMode::Quick));

    assert_eq!(registry.names().len(), 1);
    assert_eq!(registry.get("analyze").unwrap().description, "second");
}

#[test]
fn test_unknown_operation_dispatches_to_none() {
    let registry = builtin_registry();
    assert!(registry
        .dispatch("deep_crawl", request_for("https://example.com"))
        .is_none());
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[tokio::test]
async fn test_dispatch_invalid_url_returns_error_report() {
    let registry = builtin_registry();

    let report = registry
        .dispatch("analyze", request_for("not a valid url!!!"))
        .unwrap()
        .await;

    assert!(report.is_error());
    assert_eq!(report.mode, AnalysisMode::Full);
}

#[tokio::test]
async fn test_quick_check_tags_errors_the_same_way() {
    let registry = builtin_registry();

    let full = registry
        .dispatch("analyze", request_for("http://127.0.0.1:1/"))
        .unwrap()
        .await;
    let quick = registry
        .dispatch("quick_check", request_for("http://127.0.0.1:1/"))
        .unwrap()
        .await;

    assert!(full.is_error());
    assert!(quick.is_error());
    assert_eq!(quick.mode, AnalysisMode::Quick);
}

#[tokio::test]
async fn test_operations_map_to_their_modes() {
    let registry = builtin_registry();

    for (name, mode) in [
        ("analyze", AnalysisMode::Full),
        ("quick_check", AnalysisMode::Quick),
        ("meta_tags_check", AnalysisMode::MetaOnly),
    ] {
        let report = registry
            .dispatch(name, request_for("not a valid url!!!"))
            .unwrap()
            .await;
        assert_eq!(report.mode, mode);
    }
}
