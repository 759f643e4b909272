// Explicit dispatch table for the analysis operations. An external
// invocation layer asks for an operation by name and gets a future back;
// nothing is registered through global state.

use crate::analysis::{run_analysis, AnalysisOptions};
use crate::report::{AnalysisMode, AnalysisReport};
use futures::future::BoxFuture;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub url: String,
    pub options: AnalysisOptions,
}

pub type OperationHandler =
    Arc<dyn Fn(AnalysisRequest) -> BoxFuture<'static, AnalysisReport> + Send + Sync>;

pub struct RegisteredOperation {
    pub name: String,
    pub description: String,
    handler: OperationHandler,
}

#[derive(Default)]
pub struct OperationRegistry {
    operations: Vec<RegisteredOperation>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Register a named operation. Re-registering a name replaces the
    /// previous handler.
    pub fn register(&mut self, name: &str, description: &str, handler: OperationHandler) {
        self.operations.retain(|op| op.name != name);
        self.operations.push(RegisteredOperation {
            name: name.to_string(),
            description: description.to_string(),
            handler,
        });
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredOperation> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Look up an operation and invoke it. `None` means no such operation is
    /// registered.
    pub fn dispatch(
        &self,
        name: &str,
        request: AnalysisRequest,
    ) -> Option<BoxFuture<'static, AnalysisReport>> {
        self.get(name).map(|op| (op.handler)(request))
    }

    pub fn names(&self) -> Vec<&str> {
        self.operations.iter().map(|op| op.name.as_str()).collect()
    }
}

fn mode_handler(mode: AnalysisMode) -> OperationHandler {
    Arc::new(move |request: AnalysisRequest| {
        Box::pin(async move { run_analysis(&request.url, &request.options, mode).await })
    })
}

/// The three built-in operations, each conforming to the
/// `(url, options) -> AnalysisReport` contract.
pub fn builtin_registry() -> OperationRegistry {
    let mut registry = OperationRegistry::new();

    registry.register(
        "analyze",
        "Comprehensive SEO analysis of a webpage",
        mode_handler(AnalysisMode::Full),
    );
    registry.register(
        "quick_check",
        "Quick SEO health check",
        mode_handler(AnalysisMode::Quick),
    );
    registry.register(
        "meta_tags_check",
        "Focused analysis of meta tags and social media optimization",
        mode_handler(AnalysisMode::MetaOnly),
    );

    registry
}
