use async_trait::async_trait;
use pipgraph::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock DependencySource for testing
///
/// Answers lookups from a fixed table and records every queried package so
/// tests can assert on call counts and ordering.
#[derive(Default, Clone)]
pub struct MockDependencySource {
    dependencies: HashMap<String, Vec<String>>,
    unavailable: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDependencySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package with the given direct dependencies
    pub fn with_dependencies(mut self, package: &str, dependencies: &[&str]) -> Self {
        self.dependencies.insert(
            package.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    /// Registers a package whose lookup fails with SourceUnavailable
    pub fn with_unavailable(mut self, package: &str, details: &str) -> Self {
        self.unavailable
            .insert(package.to_string(), details.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, package: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.as_str() == package)
            .count()
    }
}

#[async_trait]
impl DependencySource for MockDependencySource {
    async fn direct_dependencies(&self, package: &PackageName) -> LookupResult {
        self.calls
            .lock()
            .unwrap()
            .push(package.as_str().to_string());

        if let Some(details) = self.unavailable.get(package.as_str()) {
            return Err(LookupError::SourceUnavailable {
                details: details.clone(),
            });
        }

        match self.dependencies.get(package.as_str()) {
            Some(dependencies) => Ok(dependencies
                .iter()
                .map(|d| PackageName::new(d).expect("mock dependency names must be valid"))
                .collect()),
            None => Err(LookupError::NotFound),
        }
    }
}
