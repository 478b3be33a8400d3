use super::*;
use crate::ports::outbound::LookupError;
use crate::resolution::domain::PackageName;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

// Mock implementations for testing

struct MockDependencySource {
    dependencies: HashMap<String, Vec<String>>,
}

impl MockDependencySource {
    fn new(table: &[(&str, &[&str])]) -> Self {
        let dependencies = table
            .iter()
            .map(|(package, deps)| {
                (
                    package.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        Self { dependencies }
    }
}

#[async_trait]
impl DependencySource for MockDependencySource {
    async fn direct_dependencies(
        &self,
        package: &PackageName,
    ) -> std::result::Result<Vec<PackageName>, LookupError> {
        match self.dependencies.get(package.as_str()) {
            Some(deps) => Ok(deps
                .iter()
                .map(|d| PackageName::new(d).unwrap())
                .collect()),
            None => Err(LookupError::NotFound),
        }
    }
}

#[derive(Default)]
struct RecordingProgressReporter {
    messages: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingProgressReporter {
    fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn pn(name: &str) -> PackageName {
    PackageName::new(name).unwrap()
}

#[tokio::test]
async fn test_execute_builds_graph() {
    let source = MockDependencySource::new(&[
        ("myapp", &["requests", "click"]),
        ("requests", &["urllib3"]),
        ("click", &[]),
        ("urllib3", &[]),
    ]);
    let use_case = BuildGraphUseCase::new(source, RecordingProgressReporter::default());

    let request = GraphRequest::new("myapp".to_string(), 5);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.dependency_map.len(), 4);
    assert_eq!(response.graph.node_count(), 4);
    assert_eq!(response.graph.edge_count(), 3);
    assert!(response.graph.contains(&pn("urllib3")));
    assert_eq!(response.warning_count, 0);
    assert_eq!(response.metadata.root(), "myapp");
    assert_eq!(response.metadata.max_depth(), 5);
}

#[tokio::test]
async fn test_execute_reports_lookup_warnings() {
    let source = MockDependencySource::new(&[("myapp", &["ghost", "click"]), ("click", &[])]);
    let reporter = RecordingProgressReporter::default();
    let use_case = BuildGraphUseCase::new(source, reporter);

    let request = GraphRequest::new("myapp".to_string(), 3);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.warning_count, 1);
    // ghost still shows up in the graph as an expanded-but-empty node
    assert!(response.graph.contains(&pn("ghost")));
    assert!(response.graph.contains(&pn("click")));
}

#[tokio::test]
async fn test_execute_surfaces_warnings_through_reporter() {
    let source = MockDependencySource::new(&[("myapp", &["ghost"])]);
    let use_case = BuildGraphUseCase::new(source, RecordingProgressReporter::default());

    let request = GraphRequest::new("myapp".to_string(), 3);
    let response = use_case.execute(request).await.unwrap();
    assert_eq!(response.warning_count, 1);

    let errors = use_case.progress_reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("ghost"));
    assert!(errors[0].contains("Warning"));
}

#[tokio::test]
async fn test_execute_depth_zero() {
    let source = MockDependencySource::new(&[("myapp", &["requests"])]);
    let use_case = BuildGraphUseCase::new(source, RecordingProgressReporter::default());

    let request = GraphRequest::new("myapp".to_string(), 0);
    let response = use_case.execute(request).await.unwrap();

    assert!(response.dependency_map.is_empty());
    assert!(response.graph.is_empty());
}

#[tokio::test]
async fn test_execute_invalid_root_fails() {
    let source = MockDependencySource::new(&[]);
    let use_case = BuildGraphUseCase::new(source, RecordingProgressReporter::default());

    let request = GraphRequest::new("  ".to_string(), 1);
    let result = use_case.execute(request).await;

    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Invalid root package name"));
}

#[tokio::test]
async fn test_execute_with_cycle() {
    let source = MockDependencySource::new(&[("a", &["b"]), ("b", &["a"])]);
    let use_case = BuildGraphUseCase::new(source, RecordingProgressReporter::default());

    let request = GraphRequest::new("a".to_string(), 5);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.dependency_map.len(), 2);
    assert!(response.graph.has_cycles());
}
