//! # Generator Adapters
//!
//! Uniform wrappers exposing `generate(n) -> Vec<f64>` over one specific
//! source of standard normal variates.
//!
//! ## Variants
//!
//! | Kind | Engine | Transform | Default seed |
//! |------|--------|-----------|--------------|
//! | `host` | host RNG (`StdRng`) | Ziggurat | [`DEFAULT_HOST_SEED`] |
//! | `library` | MT19937 | Ziggurat | [`LIBRARY_SEED`] |
//! | `standard` | MT19937 | Marsaglia polar | [`STANDARD_SEED`] |
//!
//! The set is closed: [`Adapter`] is an enum and dispatch is static. Each
//! adapter owns its engine, so adapters can be invoked in any order or
//! interleaving without affecting one another's streams.
//!
//! The `standard` adapter is compiled in only with the `extended-std`
//! feature; without it [`Adapter::build`] reports
//! [`GenerationError::EngineUnavailable`].
//!
//! ## Usage Example
//!
//! ```rust
//! use normal_core::adapter::{draw, Adapter, AdapterKind, GenerationRequest};
//!
//! let mut adapter = Adapter::with_default_seed(AdapterKind::Library).unwrap();
//! let samples = adapter.generate(1_000).unwrap();
//! assert_eq!(samples.len(), 1_000);
//!
//! // Stateless form: a fresh engine per call
//! let request = GenerationRequest::new(10, 123_456);
//! let first = draw(AdapterKind::Library, &request).unwrap();
//! let second = draw(AdapterKind::Library, &request).unwrap();
//! assert_eq!(first, second);
//! ```

mod host;
mod mersenne;

use std::fmt;
use std::str::FromStr;

pub use host::{HostAdapter, NormalSampler};
pub use mersenne::{LibraryAdapter, MersenneAdapter, StandardAdapter, LIBRARY_SEED, STANDARD_SEED};

use crate::engine::{HostSeed, DEFAULT_HOST_SEED};
use crate::error::GenerationError;

/// An ordered sequence of normal variates owned by the caller.
pub type SampleVector = Vec<f64>;

/// Reserves an output buffer for `count` samples without aborting on
/// allocation failure.
pub(crate) fn allocate(count: usize) -> Result<SampleVector, GenerationError> {
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| GenerationError::AllocationFailure { requested: count })?;
    Ok(samples)
}

/// Identifies one of the three generator backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AdapterKind {
    /// Host-environment statistical RNG.
    Host,
    /// General-purpose library Mersenne Twister with Ziggurat transform.
    Library,
    /// Standard-library Mersenne Twister with polar transform.
    Standard,
}

impl AdapterKind {
    /// All kinds, in report order.
    pub const ALL: [AdapterKind; 3] = [AdapterKind::Host, AdapterKind::Library, AdapterKind::Standard];

    /// Returns the lowercase identifier used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterKind::Host => "host",
            AdapterKind::Library => "library",
            AdapterKind::Standard => "standard",
        }
    }

    /// Returns the literal seed constant associated with this backend.
    pub fn default_seed(&self) -> u64 {
        match self {
            AdapterKind::Host => DEFAULT_HOST_SEED,
            AdapterKind::Library => u64::from(LIBRARY_SEED),
            AdapterKind::Standard => u64::from(STANDARD_SEED),
        }
    }

    /// Returns `true` when this backend is compiled into the build.
    pub fn is_available(&self) -> bool {
        match self {
            AdapterKind::Host | AdapterKind::Library => true,
            AdapterKind::Standard => cfg!(feature = "extended-std"),
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AdapterKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "host" => Ok(AdapterKind::Host),
            "library" | "lib" => Ok(AdapterKind::Library),
            "standard" | "std" => Ok(AdapterKind::Standard),
            other => Err(GenerationError::InvalidArgument(format!(
                "Unknown adapter: {}. Supported: host, library, standard",
                other
            ))),
        }
    }
}

/// Parameters of a single stateless generation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    count: usize,
    seed: u64,
}

impl GenerationRequest {
    /// Creates a request for `count` variates from an engine seeded with `seed`.
    #[inline]
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Returns the number of variates requested.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the engine seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// A generator adapter of any kind.
#[derive(Clone, Debug)]
pub enum Adapter {
    /// Host-environment RNG.
    Host(HostAdapter),
    /// Library engine.
    Library(LibraryAdapter),
    /// Standard-library engine.
    Standard(StandardAdapter),
}

impl Adapter {
    /// Builds an adapter of `kind` seeded with `seed`.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::EngineUnavailable`] if the kind is not compiled in
    /// - [`GenerationError::InvalidArgument`] if a Mersenne Twister seed does
    ///   not fit in 32 bits
    pub fn build(kind: AdapterKind, seed: u64) -> Result<Self, GenerationError> {
        if !kind.is_available() {
            return Err(GenerationError::EngineUnavailable(kind));
        }

        match kind {
            AdapterKind::Host => Ok(Adapter::Host(HostAdapter::new(HostSeed::new(seed)))),
            AdapterKind::Library => Ok(Adapter::Library(LibraryAdapter::new(engine_seed(seed)?))),
            AdapterKind::Standard => Ok(Adapter::Standard(StandardAdapter::new(engine_seed(seed)?))),
        }
    }

    /// Builds an adapter of `kind` with its literal seed constant.
    pub fn with_default_seed(kind: AdapterKind) -> Result<Self, GenerationError> {
        Self::build(kind, kind.default_seed())
    }

    /// Returns the backend kind.
    pub fn kind(&self) -> AdapterKind {
        match self {
            Adapter::Host(_) => AdapterKind::Host,
            Adapter::Library(_) => AdapterKind::Library,
            Adapter::Standard(_) => AdapterKind::Standard,
        }
    }

    /// Returns the backend identifier.
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Returns the seed the engine was initialised with.
    pub fn seed(&self) -> u64 {
        match self {
            Adapter::Host(adapter) => adapter.sampler().seed(),
            Adapter::Library(adapter) => u64::from(adapter.seed()),
            Adapter::Standard(adapter) => u64::from(adapter.seed()),
        }
    }

    /// Draws `count` standard normal variates, advancing the engine by
    /// exactly `count` draws. `count == 0` yields an empty vector.
    pub fn generate(&mut self, count: usize) -> Result<SampleVector, GenerationError> {
        match self {
            Adapter::Host(adapter) => adapter.generate(count),
            Adapter::Library(adapter) => adapter.generate(count),
            Adapter::Standard(adapter) => adapter.generate(count),
        }
    }
}

fn engine_seed(seed: u64) -> Result<u32, GenerationError> {
    u32::try_from(seed).map_err(|_| {
        GenerationError::InvalidArgument(format!(
            "seed {} exceeds the 32-bit engine range",
            seed
        ))
    })
}

/// Draws `request.count()` variates from a freshly seeded adapter of `kind`.
///
/// Equal requests always produce equal vectors.
pub fn draw(kind: AdapterKind, request: &GenerationRequest) -> Result<SampleVector, GenerationError> {
    Adapter::build(kind, request.seed())?.generate(request.count())
}
