use crate::ports::outbound::{DependencySource, LookupError};
use crate::resolution::domain::{DependencyMap, PackageName};
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::collections::HashSet;
use std::fmt;

/// Ceiling on distinct packages visited in one run.
/// Bounds worst-case work against a pathologically large or hostile
/// dependency tree; real trees stay far below it.
const MAX_PACKAGES: usize = 10_000;

/// A non-fatal event observed during resolution.
///
/// Warnings never abort a run; the caller decides how to surface them.
#[derive(Debug)]
pub enum ResolutionWarning {
    /// A package lookup failed; it was recorded with no dependencies
    LookupFailed {
        package: PackageName,
        error: LookupError,
    },
    /// The package ceiling was reached and remaining work items were dropped
    PackageLimitReached { limit: usize },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::LookupFailed { package, error } => {
                write!(f, "Could not resolve '{}' ({}): {}", package, error.kind(), error)
            }
            ResolutionWarning::PackageLimitReached { limit } => {
                write!(
                    f,
                    "Package limit of {} reached; the graph is truncated",
                    limit
                )
            }
        }
    }
}

/// Outcome of a resolution run: the discovered mapping plus any warnings.
///
/// The mapping may legitimately under-represent the true dependency tree
/// when lookups fail. It is a best-effort graph, not an authoritative one.
#[derive(Debug)]
pub struct Resolution {
    root: PackageName,
    map: DependencyMap,
    warnings: Vec<ResolutionWarning>,
}

impl Resolution {
    /// Normalized root package of this run
    pub fn root(&self) -> &PackageName {
        &self.root
    }

    pub fn map(&self) -> &DependencyMap {
        &self.map
    }

    pub fn warnings(&self) -> &[ResolutionWarning] {
        &self.warnings
    }

    pub fn into_map(self) -> DependencyMap {
        self.map
    }
}

/// ResolutionEngine drives the depth-bounded traversal of a dependency tree.
///
/// The traversal uses an explicit work stack instead of recursion, so deep
/// trees cannot exhaust the call stack. Each work item carries the package
/// and its distance from the root. The visited check happens when an item is
/// popped, not when it is pushed: a package reachable through several parents
/// is pushed once per parent but expanded at most once, which is exactly what
/// keeps diamonds from duplicating work and cycles from looping forever.
///
/// A package whose depth has reached the bound is marked visited but never
/// queried and never keyed in the resulting map; it survives only as an edge
/// target of its parent.
pub struct ResolutionEngine {
    max_depth: usize,
}

impl ResolutionEngine {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Resolves the dependency closure of `root`, up to the configured depth.
    ///
    /// Lookup failures for individual packages are recorded as warnings and
    /// empty dependency lists; the only fatal error is a root name that fails
    /// normalization.
    pub async fn resolve<S>(&self, root: &str, source: &S) -> Result<Resolution>
    where
        S: DependencySource,
    {
        let root = PackageName::new(root).map_err(|e| GraphError::InvalidRoot {
            name: root.to_string(),
            reason: e.to_string(),
        })?;

        let mut visited: HashSet<PackageName> = HashSet::new();
        let mut map = DependencyMap::new();
        let mut warnings = Vec::new();
        let mut stack: Vec<(PackageName, usize)> = vec![(root.clone(), 0)];

        while let Some((package, depth)) = stack.pop() {
            if visited.contains(&package) {
                continue;
            }
            if visited.len() >= MAX_PACKAGES {
                warnings.push(ResolutionWarning::PackageLimitReached {
                    limit: MAX_PACKAGES,
                });
                break;
            }
            visited.insert(package.clone());

            if depth >= self.max_depth {
                continue;
            }

            match source.direct_dependencies(&package).await {
                Ok(dependencies) => {
                    // Reverse push keeps pop order first-dependency-first,
                    // so discovery order matches a preorder walk.
                    for dependency in dependencies.iter().rev() {
                        stack.push((dependency.clone(), depth + 1));
                    }
                    map.insert(package, dependencies);
                }
                Err(error) => {
                    map.insert(package.clone(), Vec::new());
                    warnings.push(ResolutionWarning::LookupFailed { package, error });
                }
            }
        }

        Ok(Resolution {
            root,
            map,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn pn(name: &str) -> PackageName {
        PackageName::new(name).unwrap()
    }

    /// In-memory source over a fixed adjacency table, recording every call.
    struct MapSource {
        dependencies: HashMap<String, Vec<String>>,
        calls: Mutex<Vec<String>>,
    }

    impl MapSource {
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
            Self {
                dependencies,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn call_count(&self, package: &str) -> usize {
            self.calls().iter().filter(|c| c.as_str() == package).count()
        }
    }

    #[async_trait]
    impl DependencySource for MapSource {
        async fn direct_dependencies(
            &self,
            package: &PackageName,
        ) -> std::result::Result<Vec<PackageName>, LookupError> {
            self.calls.lock().unwrap().push(package.as_str().to_string());
            match self.dependencies.get(package.as_str()) {
                Some(deps) => Ok(deps.iter().map(|d| pn(d)).collect()),
                None => Err(LookupError::NotFound),
            }
        }
    }

    #[tokio::test]
    async fn test_cycle_terminates() {
        let source = MapSource::new(&[("a", &["b"]), ("b", &["a"])]);
        let engine = ResolutionEngine::new(5);

        let resolution = engine.resolve("a", &source).await.unwrap();
        let map = resolution.map();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&pn("a")), Some(&[pn("b")][..]));
        assert_eq!(map.get(&pn("b")), Some(&[pn("a")][..]));
        assert!(resolution.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_diamond_expanded_at_most_once() {
        let source = MapSource::new(&[
            ("a", &["b", "c"]),
            ("b", &["d"]),
            ("c", &["d"]),
            ("d", &[]),
        ]);
        let engine = ResolutionEngine::new(10);

        let resolution = engine.resolve("a", &source).await.unwrap();

        assert_eq!(source.call_count("d"), 1);
        assert_eq!(resolution.map().len(), 4);
    }

    #[tokio::test]
    async fn test_max_depth_zero_yields_empty_map() {
        let source = MapSource::new(&[("root", &["child"])]);
        let engine = ResolutionEngine::new(0);

        let resolution = engine.resolve("root", &source).await.unwrap();

        assert!(resolution.map().is_empty());
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_depth_boundary_node_is_not_a_key() {
        let source = MapSource::new(&[("root", &["child"]), ("child", &["grandchild"])]);
        let engine = ResolutionEngine::new(1);

        let resolution = engine.resolve("root", &source).await.unwrap();
        let map = resolution.map();

        // child is cut off at the boundary: present as an edge target only
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&pn("root")), Some(&[pn("child")][..]));
        assert!(!map.contains_key(&pn("child")));
        assert_eq!(source.call_count("child"), 0);
    }

    #[tokio::test]
    async fn test_discovery_order_is_preorder() {
        let source = MapSource::new(&[
            ("root", &["b", "c"]),
            ("b", &["d"]),
            ("c", &[]),
            ("d", &[]),
        ]);
        let engine = ResolutionEngine::new(10);

        let resolution = engine.resolve("root", &source).await.unwrap();
        let keys: Vec<&str> = resolution.map().keys().map(|k| k.as_str()).collect();

        assert_eq!(keys, vec!["root", "b", "d", "c"]);
    }

    #[tokio::test]
    async fn test_deterministic_across_runs() {
        let table: &[(&str, &[&str])] = &[
            ("root", &["b", "c"]),
            ("b", &["d", "c"]),
            ("c", &["d"]),
            ("d", &[]),
        ];
        let engine = ResolutionEngine::new(10);

        let first = engine
            .resolve("root", &MapSource::new(table))
            .await
            .unwrap();
        let second = engine
            .resolve("root", &MapSource::new(table))
            .await
            .unwrap();

        assert_eq!(first.map(), second.map());
    }

    #[tokio::test]
    async fn test_partial_failure_continues_with_siblings() {
        // "ghost" is unknown to the source; "real" resolves fine
        let source = MapSource::new(&[("root", &["ghost", "real"]), ("real", &["six"]), ("six", &[])]);
        let engine = ResolutionEngine::new(10);

        let resolution = engine.resolve("root", &source).await.unwrap();
        let map = resolution.map();

        assert_eq!(map.get(&pn("root")), Some(&[pn("ghost"), pn("real")][..]));
        assert_eq!(map.get(&pn("ghost")), Some(&[][..]));
        assert_eq!(map.get(&pn("real")), Some(&[pn("six")][..]));

        assert_eq!(resolution.warnings().len(), 1);
        match &resolution.warnings()[0] {
            ResolutionWarning::LookupFailed { package, error } => {
                assert_eq!(package.as_str(), "ghost");
                assert!(matches!(error, LookupError::NotFound));
            }
            other => panic!("unexpected warning: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_root_is_not_fatal() {
        let source = MapSource::new(&[]);
        let engine = ResolutionEngine::new(3);

        let resolution = engine.resolve("phantom", &source).await.unwrap();

        assert_eq!(resolution.map().get(&pn("phantom")), Some(&[][..]));
        assert_eq!(resolution.warnings().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_root_is_fatal() {
        let source = MapSource::new(&[]);
        let engine = ResolutionEngine::new(3);

        let result = engine.resolve("", &source).await;
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("Invalid root package name"));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_root_name_is_normalized() {
        let source = MapSource::new(&[("flask-login", &[])]);
        let engine = ResolutionEngine::new(2);

        let resolution = engine.resolve("Flask_Login", &source).await.unwrap();

        assert_eq!(resolution.root().as_str(), "flask-login");
        assert!(resolution.map().contains_key(&pn("flask-login")));
        assert!(resolution.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_dependency_entries_expand_once() {
        let source = MapSource::new(&[("root", &["dup", "dup"]), ("dup", &[])]);
        let engine = ResolutionEngine::new(5);

        let resolution = engine.resolve("root", &source).await.unwrap();

        // both occurrences stay in the parent's list, but one expansion
        assert_eq!(
            resolution.map().get(&pn("root")),
            Some(&[pn("dup"), pn("dup")][..])
        );
        assert_eq!(source.call_count("dup"), 1);
    }

    #[tokio::test]
    async fn test_warning_display() {
        let warning = ResolutionWarning::LookupFailed {
            package: pn("ghost"),
            error: LookupError::NotFound,
        };
        let display = format!("{}", warning);
        assert!(display.contains("ghost"));
        assert!(display.contains("not found"));

        let limit = ResolutionWarning::PackageLimitReached { limit: 10 };
        assert!(format!("{}", limit).contains("truncated"));
    }
}
