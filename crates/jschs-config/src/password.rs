//! Password hashing configuration.
//!
//! # Environment Variables
//!
//! - `BCRYPT_COST`: bcrypt work factor (default: bcrypt's `DEFAULT_COST`).
//!   Values outside what bcrypt accepts are clamped into `4..=31`.

use crate::{env_lookup, parse_or};

pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST);
        Self {
            bcrypt_cost: cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost() {
        assert_eq!(
            PasswordConfig::from_lookup(|_| None).bcrypt_cost,
            bcrypt::DEFAULT_COST
        );
    }

    #[test]
    fn test_cost_is_clamped() {
        let low = PasswordConfig::from_lookup(|_| Some("1".to_string()));
        assert_eq!(low.bcrypt_cost, MIN_BCRYPT_COST);

        let high = PasswordConfig::from_lookup(|_| Some("99".to_string()));
        assert_eq!(high.bcrypt_cost, MAX_BCRYPT_COST);

        let ok = PasswordConfig::from_lookup(|_| Some("10".to_string()));
        assert_eq!(ok.bcrypt_cost, 10);
    }
}
