//! Sample command implementation
//!
//! Prints the normal variates one adapter produces, one per line.

use std::io::Write;

use normal_core::{draw, AdapterKind, GenerationRequest};
use tracing::info;

use super::count_arg;
use crate::Result;

/// Run the sample command
pub fn run(kind: AdapterKind, count: i64, seed: Option<u64>) -> Result<()> {
    let count = count_arg("count", count, 0)?;
    let seed = seed.unwrap_or_else(|| kind.default_seed());

    info!(adapter = %kind, count, seed, "Sampling");
    let samples = draw(kind, &GenerationRequest::new(count, seed))?;

    let mut stdout = std::io::stdout().lock();
    for value in &samples {
        writeln!(stdout, "{}", value)?;
    }
    Ok(())
}
