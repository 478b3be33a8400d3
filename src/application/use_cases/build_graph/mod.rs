use crate::application::dto::{GraphRequest, GraphResponse};
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::resolution::domain::{GraphMetadata, GraphModel};
use crate::resolution::services::ResolutionEngine;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// How often the resolution spinner redraws (milliseconds)
const SPINNER_TICK_MS: u64 = 100;

/// BuildGraphUseCase - Core use case producing a dependency graph
///
/// Orchestrates the resolution engine against an injected DependencySource
/// and reports progress and warnings through the injected ProgressReporter.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildGraphUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> BuildGraphUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new BuildGraphUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes the graph build use case
    ///
    /// Resolution failures on individual packages surface as warnings and an
    /// under-populated graph; only an invalid root aborts the call.
    pub async fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependencies for '{}' (max depth: {})",
            request.root, request.max_depth
        ));

        let spinner = Self::start_spinner();
        let engine = ResolutionEngine::new(request.max_depth);
        let resolution = engine.resolve(&request.root, &self.source).await;
        spinner.finish_and_clear();
        let resolution = resolution?;

        for warning in resolution.warnings() {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }

        let graph = GraphModel::from_dependency_map(resolution.map());
        let metadata = GraphMetadata::generate(resolution.root(), request.max_depth);
        let warning_count = resolution.warnings().len();

        self.progress_reporter.report(&format!(
            "   - Packages expanded: {}",
            resolution.map().len()
        ));
        self.progress_reporter.report(&format!(
            "   - Graph: {} node(s), {} edge(s)",
            graph.node_count(),
            graph.edge_count()
        ));
        for cycle in graph.cycles() {
            self.progress_reporter.report(&format!(
                "   ↻ Circular dependency: {} -> {}",
                cycle.join(" -> "),
                cycle[0]
            ));
        }

        if warning_count > 0 {
            self.progress_reporter.report_completion(&format!(
                "✅ Resolution complete with {} warning(s); the graph is partial",
                warning_count
            ));
        } else {
            self.progress_reporter
                .report_completion("✅ Resolution complete");
        }

        Ok(GraphResponse::new(
            resolution.into_map(),
            graph,
            metadata,
            warning_count,
        ))
    }

    fn start_spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Querying dependency source...");
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        spinner
    }
}

#[cfg(test)]
mod tests;
