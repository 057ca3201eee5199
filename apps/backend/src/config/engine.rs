use std::env;

use crate::errors::domain::{DomainError, ValidationKind};

/// Engine configuration read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the penalty-draw RNG. Unset means OS entropy; set it for
    /// deterministic replays.
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        let rng_seed = match env::var("SKULL_RNG_SEED") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|err| {
                DomainError::validation(
                    ValidationKind::Other("CONFIG".to_string()),
                    format!("SKULL_RNG_SEED must be a u64: {err}"),
                )
            })?),
            Err(_) => None,
        };
        Ok(Self { rng_seed })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            rng_seed: Some(0x5EED),
        }
    }
}
