use super::PackageName;
use indexmap::IndexMap;

/// Insertion-ordered mapping from a package to its direct dependencies.
///
/// Key order is discovery order: the root first, then packages in the order
/// the traversal expanded them. A key is only ever present for a package the
/// engine actually queried; packages cut off at the depth boundary appear
/// solely as values.
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    entries: IndexMap<PackageName, Vec<PackageName>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the direct dependencies discovered for `package`.
    pub fn insert(&mut self, package: PackageName, dependencies: Vec<PackageName>) {
        self.entries.insert(package, dependencies);
    }

    pub fn get(&self, package: &PackageName) -> Option<&[PackageName]> {
        self.entries.get(package).map(|deps| deps.as_slice())
    }

    pub fn contains_key(&self, package: &PackageName) -> bool {
        self.entries.contains_key(package)
    }

    /// Number of packages that were expanded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (package, dependency) pairs
    pub fn edge_count(&self) -> usize {
        self.entries.values().map(|deps| deps.len()).sum()
    }

    /// Iterates entries in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &Vec<PackageName>)> + '_ {
        self.entries.iter()
    }

    /// Iterates keys in discovery order
    pub fn keys(&self) -> impl Iterator<Item = &PackageName> + '_ {
        self.entries.keys()
    }
}

impl PartialEq for DependencyMap {
    /// Order-sensitive equality: two maps are equal only when they hold the
    /// same entries in the same discovery order.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().zip(other.entries.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for DependencyMap {}
