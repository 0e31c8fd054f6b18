// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Animation**: Step transition timing
//! - **Generation**: Backend selection and endpoints
//! - **Diagnostics**: Event buffer sizing

pub use crate::domain::ui::transition_bounds::{
    DEFAULT_MS as DEFAULT_TRANSITION_MS, MAX_MS as MAX_TRANSITION_MS,
    MIN_MS as MIN_TRANSITION_MS,
};

// ==========================================================================
// Generation Defaults
// ==========================================================================

pub use crate::infrastructure::generation::direct::{
    DEFAULT_BASE_URL as DEFAULT_GENERATION_BASE_URL, DEFAULT_MODEL as DEFAULT_GENERATION_MODEL,
};
pub use crate::infrastructure::generation::proxy::DEFAULT_ENDPOINT as DEFAULT_PROXY_ENDPOINT;
pub use crate::infrastructure::generation::DEFAULT_API_KEY_ENV;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub use crate::diagnostics::buffer_capacity_bounds::{
    DEFAULT as DEFAULT_DIAGNOSTICS_CAPACITY, MAX as MAX_DIAGNOSTICS_CAPACITY,
    MIN as MIN_DIAGNOSTICS_CAPACITY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_default_is_within_bounds() {
        assert!((MIN_TRANSITION_MS..=MAX_TRANSITION_MS).contains(&DEFAULT_TRANSITION_MS));
    }

    #[test]
    fn diagnostics_default_is_within_bounds() {
        assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
    }

    #[test]
    fn api_key_env_is_not_empty() {
        assert!(!DEFAULT_API_KEY_ENV.is_empty());
    }
}
