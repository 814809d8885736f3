//! Algorithm registry
//!
//! Maps string identifiers to shared algorithm instances. Identifiers are
//! bound once for the lifetime of the registry; there is no unregistration.

use crate::{InsertionSort, MergeSort, QuickSort, SelectionSort, ShellSort, SortingAlgorithm};
use indexmap::IndexMap;
use sortvis_core::{CoreError, Result};
use std::sync::Arc;

/// Registered sorting algorithms, in registration order
#[derive(Default)]
pub struct AlgorithmRegistry {
    algorithms: IndexMap<String, Arc<dyn SortingAlgorithm>>,
}

impl AlgorithmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            algorithms: IndexMap::new(),
        }
    }

    /// Create a registry holding every built-in variant under its
    /// canonical identifier.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [(&str, Arc<dyn SortingAlgorithm>); 7] = [
            ("selection", Arc::new(SelectionSort)),
            ("insertion", Arc::new(InsertionSort)),
            ("shell", Arc::new(ShellSort)),
            ("merge-top-down", Arc::new(MergeSort::top_down())),
            ("merge-bottom-up", Arc::new(MergeSort::bottom_up())),
            ("quick-two-way-partitioning", Arc::new(QuickSort::two_way())),
            (
                "quick-three-way-partitioning",
                Arc::new(QuickSort::three_way()),
            ),
        ];

        for (identifier, algorithm) in defaults {
            registry
                .algorithms
                .insert(identifier.to_string(), algorithm);
        }

        registry
    }

    /// Bind `identifier` to `algorithm`.
    ///
    /// Fails with [`CoreError::DuplicateRegistration`] if the identifier is
    /// already bound; the existing binding is left untouched.
    pub fn register<A>(&mut self, identifier: impl Into<String>, algorithm: A) -> Result<()>
    where
        A: SortingAlgorithm + 'static,
    {
        self.register_shared(identifier, Arc::new(algorithm))
    }

    /// Bind `identifier` to an already shared algorithm instance
    pub fn register_shared(
        &mut self,
        identifier: impl Into<String>,
        algorithm: Arc<dyn SortingAlgorithm>,
    ) -> Result<()> {
        let identifier = identifier.into();

        if self.algorithms.contains_key(&identifier) {
            tracing::warn!("Rejected duplicate algorithm registration: {}", identifier);
            return Err(CoreError::DuplicateRegistration(identifier));
        }

        tracing::debug!("Registered algorithm {} ({})", identifier, algorithm.name());
        self.algorithms.insert(identifier, algorithm);
        Ok(())
    }

    /// Produce the algorithm bound to `identifier`.
    ///
    /// Fails with [`CoreError::UnknownIdentifier`] if nothing is bound.
    pub fn use_algorithm(&self, identifier: &str) -> Result<Arc<dyn SortingAlgorithm>> {
        self.algorithms
            .get(identifier)
            .cloned()
            .ok_or_else(|| CoreError::UnknownIdentifier(identifier.to_string()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.algorithms.contains_key(identifier)
    }

    /// Registered identifiers, in registration order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.algorithms.keys().map(String::as_str)
    }

    /// Registered identifiers with their algorithms
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn SortingAlgorithm>)> {
        self.algorithms
            .iter()
            .map(|(identifier, algorithm)| (identifier.as_str(), algorithm))
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.algorithms.keys()).finish()
    }
}
