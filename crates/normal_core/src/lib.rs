//! # normal_core: Standard-Normal Generator Adapters
//!
//! Interchangeable sources of N(0, 1) variates behind one contract,
//! `generate(n) -> Vec<f64>`, so that backends can be compared fairly.
//!
//! ## Module Structure
//!
//! - [`engine`]: Mersenne Twister and host RNG engines
//! - [`transform`]: Ziggurat and polar normal transforms
//! - [`adapter`]: the closed set of generator adapters
//! - [`moments`]: sample mean/variance for sanity checks
//! - [`error`]: [`GenerationError`]
//!
//! ## Feature Flags
//!
//! - `extended-std` (default): compile in the standard-library style
//!   engine/transform pair
//! - `serde`: serialisation for [`AdapterKind`] and [`SampleMoments`]
//!
//! ## Usage Example
//!
//! ```rust
//! use normal_core::{Adapter, AdapterKind, SampleMoments};
//!
//! let mut adapter = Adapter::with_default_seed(AdapterKind::Library).unwrap();
//! let samples = adapter.generate(100_000).unwrap();
//!
//! let moments = SampleMoments::from_samples(&samples);
//! assert!(moments.is_standard_normal(0.05, 0.1));
//! ```

pub mod adapter;
pub mod engine;
pub mod error;
pub mod moments;
pub mod transform;

pub use adapter::{draw, Adapter, AdapterKind, GenerationRequest, SampleVector};
pub use error::GenerationError;
pub use moments::SampleMoments;
