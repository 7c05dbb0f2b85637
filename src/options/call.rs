// src/options/call.rs
use super::contract::{BoundaryPayoff, ContractParams};
use crate::error::PayoffResult;

/// European call boundary conditions
///
/// # Case Analysis
///
/// Evaluated in this order, first match wins:
/// ```text
/// S = 0  →  0                 worthless underlying
/// S = L  →  K e^(-r(t - T))   strike accrued from T to t
/// t = T  →  max(S - K, 0)     payoff at maturity
/// else   →  0
/// ```
///
/// The upper-boundary exponent is `t - T`, the mirror of the put's `T - t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Call {
    params: ContractParams,
}

impl Call {
    pub fn new(k: f64, t: f64, l: f64, r: f64, sigma: f64) -> Self {
        Call {
            params: ContractParams::new(k, t, l, r, sigma),
        }
    }

    /// Like [`Call::new`] but rejects out-of-range parameters.
    pub fn try_new(k: f64, t: f64, l: f64, r: f64, sigma: f64) -> PayoffResult<Self> {
        let call = Call::new(k, t, l, r, sigma);
        call.params.validate()?;
        Ok(call)
    }

    pub fn from_params(params: ContractParams) -> Self {
        Call { params }
    }
}

impl BoundaryPayoff for Call {
    fn params(&self) -> &ContractParams {
        &self.params
    }

    #[inline]
    fn payoff(&self, s: f64, t: f64) -> f64 {
        let p = &self.params;
        if s == 0.0 {
            0.0
        } else if s == p.truncation() {
            p.discounted_strike(t - p.maturity())
        } else if t == p.maturity() {
            (s - p.strike()).max(0.0)
        } else {
            0.0
        }
    }
}
