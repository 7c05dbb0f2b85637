// src/options/put.rs
use super::contract::{BoundaryPayoff, ContractParams};
use crate::error::PayoffResult;

/// European put boundary conditions
///
/// # Case Analysis
///
/// Evaluated in this order, first match wins:
/// ```text
/// S = 0  →  K e^(-r(T - t))   certain exercise, discounted strike
/// S = L  →  0                 deep out of the money
/// t = T  →  max(K - S, 0)     payoff at maturity
/// else   →  0
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Put {
    params: ContractParams,
}

impl Put {
    pub fn new(k: f64, t: f64, l: f64, r: f64, sigma: f64) -> Self {
        Put {
            params: ContractParams::new(k, t, l, r, sigma),
        }
    }

    /// Like [`Put::new`] but rejects out-of-range parameters.
    pub fn try_new(k: f64, t: f64, l: f64, r: f64, sigma: f64) -> PayoffResult<Self> {
        let put = Put::new(k, t, l, r, sigma);
        put.params.validate()?;
        Ok(put)
    }

    pub fn from_params(params: ContractParams) -> Self {
        Put { params }
    }
}

impl BoundaryPayoff for Put {
    fn params(&self) -> &ContractParams {
        &self.params
    }

    #[inline]
    fn payoff(&self, s: f64, t: f64) -> f64 {
        let p = &self.params;
        if s == 0.0 {
            p.discounted_strike(p.maturity() - t)
        } else if s == p.truncation() {
            0.0
        } else if t == p.maturity() {
            (p.strike() - s).max(0.0)
        } else {
            0.0
        }
    }
}
