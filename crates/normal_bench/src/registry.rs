//! Adapter set construction.
//!
//! Builds the named adapters a run compares. Backends whose engine is not
//! compiled into the build are excluded here, once, before any timing
//! starts; the remaining adapters proceed normally.

use normal_core::engine::HostSeed;
use normal_core::{Adapter, AdapterKind, GenerationError};
use tracing::{debug, warn};

/// An adapter paired with the label shown in reports.
#[derive(Clone, Debug)]
pub struct NamedAdapter {
    /// Report label.
    pub name: String,
    /// The adapter itself.
    pub adapter: Adapter,
}

impl NamedAdapter {
    /// Pairs `adapter` with an explicit label.
    pub fn new(name: impl Into<String>, adapter: Adapter) -> Self {
        Self {
            name: name.into(),
            adapter,
        }
    }

    /// Labels `adapter` with its backend identifier.
    pub fn from_adapter(adapter: Adapter) -> Self {
        Self::new(adapter.name(), adapter)
    }
}

/// The adapters selected for a run, plus the startup errors of those that
/// could not be built.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
    adapters: Vec<NamedAdapter>,
    startup_errors: Vec<GenerationError>,
}

impl AdapterRegistry {
    /// Builds one adapter per kind, in the given order.
    ///
    /// The host adapter is seeded with `host_seed`; the Mersenne Twister
    /// adapters use their literal seed constants. Duplicate kinds are built
    /// once.
    pub fn from_kinds(kinds: &[AdapterKind], host_seed: HostSeed) -> Self {
        Self::from_builder(kinds, host_seed, Adapter::build)
    }

    /// Like [`from_kinds`](Self::from_kinds), constructing each adapter with
    /// `build(kind, seed)`.
    ///
    /// Kinds whose construction fails are excluded and their errors kept in
    /// [`startup_errors`](Self::startup_errors); the rest are registered.
    pub fn from_builder<F>(kinds: &[AdapterKind], host_seed: HostSeed, mut build: F) -> Self
    where
        F: FnMut(AdapterKind, u64) -> Result<Adapter, GenerationError>,
    {
        let mut registry = Self::default();
        let mut seen = Vec::with_capacity(kinds.len());

        for &kind in kinds {
            if seen.contains(&kind) {
                continue;
            }
            seen.push(kind);

            let seed = match kind {
                AdapterKind::Host => host_seed.value(),
                other => other.default_seed(),
            };

            match build(kind, seed) {
                Ok(adapter) => {
                    debug!(adapter = %kind, seed, "Adapter registered");
                    registry.adapters.push(NamedAdapter::from_adapter(adapter));
                }
                Err(err) => {
                    warn!(adapter = %kind, error = %err, "Adapter excluded from benchmark");
                    registry.startup_errors.push(err);
                }
            }
        }

        registry
    }

    /// Builds every known kind.
    pub fn all(host_seed: HostSeed) -> Self {
        Self::from_kinds(&AdapterKind::ALL, host_seed)
    }

    /// Adds an already-built adapter.
    pub fn push(&mut self, adapter: NamedAdapter) {
        self.adapters.push(adapter);
    }

    /// Returns the registered adapters.
    pub fn adapters(&self) -> &[NamedAdapter] {
        &self.adapters
    }

    /// Returns the registered adapters mutably, for running.
    pub fn adapters_mut(&mut self) -> &mut [NamedAdapter] {
        &mut self.adapters
    }

    /// Returns the errors of adapters excluded at construction.
    pub fn startup_errors(&self) -> &[GenerationError] {
        &self.startup_errors
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns `true` if no adapter could be registered.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kinds_preserves_order_and_dedups() {
        let registry = AdapterRegistry::from_kinds(
            &[AdapterKind::Library, AdapterKind::Host, AdapterKind::Library],
            HostSeed::new(5),
        );
        let names: Vec<&str> = registry.adapters().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["library", "host"]);
        assert_eq!(registry.adapters()[1].adapter.seed(), 5);
        assert!(registry.startup_errors().is_empty());
    }

    #[test]
    fn test_all_accounts_for_every_kind() {
        let registry = AdapterRegistry::all(HostSeed::default());
        assert_eq!(registry.len() + registry.startup_errors().len(), AdapterKind::ALL.len());
    }

    #[cfg(not(feature = "extended-std"))]
    #[test]
    fn test_unavailable_engine_is_excluded() {
        let registry = AdapterRegistry::all(HostSeed::default());
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.startup_errors(),
            &[GenerationError::EngineUnavailable(AdapterKind::Standard)]
        );
    }

    /// Builder that refuses the standard engine, as a build without it does.
    fn without_standard(kind: AdapterKind, seed: u64) -> Result<Adapter, GenerationError> {
        match kind {
            AdapterKind::Standard => Err(GenerationError::EngineUnavailable(kind)),
            other => Adapter::build(other, seed),
        }
    }

    #[test]
    fn test_failed_build_is_excluded_and_recorded() {
        let registry =
            AdapterRegistry::from_builder(&AdapterKind::ALL, HostSeed::new(3), without_standard);

        let names: Vec<&str> = registry.adapters().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["host", "library"]);
        assert_eq!(registry.adapters()[0].adapter.seed(), 3);
        assert_eq!(
            registry.startup_errors(),
            &[GenerationError::EngineUnavailable(AdapterKind::Standard)]
        );
    }

    #[test]
    fn test_builder_sees_configured_seeds() {
        let mut calls = Vec::new();
        let registry = AdapterRegistry::from_builder(
            &[AdapterKind::Host, AdapterKind::Library, AdapterKind::Host],
            HostSeed::new(11),
            |kind, seed| {
                calls.push((kind, seed));
                Adapter::build(kind, seed)
            },
        );
        assert_eq!(registry.len(), 2);
        assert_eq!(calls, vec![(AdapterKind::Host, 11), (AdapterKind::Library, 123_456)]);
    }

    #[test]
    fn test_push_and_empty() {
        let mut registry = AdapterRegistry::default();
        assert!(registry.is_empty());
        let adapter = Adapter::with_default_seed(AdapterKind::Library).unwrap();
        registry.push(NamedAdapter::new("mt-zig", adapter));
        assert_eq!(registry.adapters()[0].name, "mt-zig");
        assert!(!registry.is_empty());
    }
}
