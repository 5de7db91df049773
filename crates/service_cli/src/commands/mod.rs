//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod bench;
pub mod check;
pub mod sample;

use crate::{CliError, Result};

/// Converts a signed command line count into a `usize`, rejecting values
/// below `min`.
pub(crate) fn count_arg(name: &str, value: i64, min: i64) -> Result<usize> {
    if value < min {
        return Err(CliError::InvalidArgument(format!(
            "{} must be at least {}, got {}",
            name, min, value
        )));
    }
    usize::try_from(value)
        .map_err(|_| CliError::InvalidArgument(format!("{} is too large: {}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_arg() {
        assert_eq!(count_arg("length", 5, 1).unwrap(), 5);
        assert_eq!(count_arg("count", 0, 0).unwrap(), 0);
        assert!(matches!(
            count_arg("length", 0, 1),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            count_arg("replications", -3, 1),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
