//! # Random Engines
//!
//! Pseudo-random bit generators that sit underneath the normal transforms.
//!
//! ## Module Structure
//!
//! - [`mt19937`]: 32-bit Mersenne Twister shared by the library and
//!   standard adapters
//! - [`host`]: the host environment's statistical RNG and its seed step
//!
//! Every engine is exclusively owned by one adapter and is never shared
//! across adapters or threads. All engines are `Send`.

mod host;
mod mt19937;

pub use host::{HostRng, HostSeed, DEFAULT_HOST_SEED};
pub use mt19937::{Mt19937, MT19937_DEFAULT_SEED};
