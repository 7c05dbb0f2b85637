// src/options/contract.rs
//! Contract parameters shared by every vanilla option variant
//!
//! # Boundary Regions
//!
//! A finite-difference grid for the Black-Scholes PDE lives on the rectangle
//! `[0, L] × [0, T]`. The solver needs the option value on three edges:
//! ```text
//! S = 0   lower asset boundary
//! S = L   upper (truncated) asset boundary
//! t = T   terminal boundary (maturity)
//! ```
//! Each variant answers all three through a single `payoff(S, t)` call.

use crate::error::{validation::*, PayoffResult};
use serde::{Deserialize, Serialize};

/// Immutable parameter set of an option contract
///
/// Construction performs no validation. Use [`ContractParams::validate`]
/// when the caller wants the stricter behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractParams {
    /// Strike price K
    k: f64,
    /// Maturity T
    t: f64,
    /// Truncation bound L of the asset-price axis
    l: f64,
    /// Risk-free rate r
    r: f64,
    /// Volatility, consumed by the solver rather than by the payoff
    sigma: f64,
}

impl ContractParams {
    pub fn new(k: f64, t: f64, l: f64, r: f64, sigma: f64) -> Self {
        ContractParams { k, t, l, r, sigma }
    }

    pub fn strike(&self) -> f64 {
        self.k
    }

    pub fn maturity(&self) -> f64 {
        self.t
    }

    pub fn truncation(&self) -> f64 {
        self.l
    }

    pub fn rate(&self) -> f64 {
        self.r
    }

    pub fn volatility(&self) -> f64 {
        self.sigma
    }

    /// Validate the contract parameters
    ///
    /// Checks `K ≥ 0`, `T ≥ 0`, `L > 0`, `sigma > 0` and a finite `r`.
    pub fn validate(&self) -> PayoffResult<()> {
        validate_non_negative("k", self.k)?;
        validate_non_negative("t", self.t)?;
        validate_positive("l", self.l)?;
        validate_finite("r", self.r)?;
        validate_positive("sigma", self.sigma)?;
        Ok(())
    }

    /// `K * exp(-r * tau)`
    #[inline]
    pub(crate) fn discounted_strike(&self, tau: f64) -> f64 {
        self.k * (-self.r * tau).exp()
    }
}

impl Default for ContractParams {
    fn default() -> Self {
        ContractParams {
            k: 100.0,
            t: 1.0,
            l: 300.0,
            r: 0.05,
            sigma: 0.2,
        }
    }
}

/// Boundary payoff of an option contract on a finite-difference grid
///
/// `payoff` is pure: it reads only the construction-time parameters and its
/// arguments, so implementors can be shared freely across threads.
pub trait BoundaryPayoff: Send + Sync {
    fn params(&self) -> &ContractParams;

    /// Value of the contract at asset price `s` and time `t`.
    ///
    /// Comparisons against `0`, `L` and `T` are exact, and the asset-price
    /// checks take precedence over the maturity check.
    fn payoff(&self, s: f64, t: f64) -> f64;
}
