// src/options/vanilla.rs
use super::call::Call;
use super::contract::{BoundaryPayoff, ContractParams};
use super::put::Put;
use crate::error::{PayoffError, PayoffResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Variant tag of a vanilla option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Put,
    Call,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Put => write!(f, "Put"),
            OptionKind::Call => write!(f, "Call"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "put" => Ok(OptionKind::Put),
            "call" => Ok(OptionKind::Call),
            _ => Err(PayoffError::UnknownOptionKind {
                input: s.to_string(),
            }),
        }
    }
}

/// Vanilla option selected by tag at runtime
///
/// Dispatches `payoff` to the [`Put`] or [`Call`] rules, so the solver setup
/// can hold either variant without boxing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VanillaOption {
    Put(Put),
    Call(Call),
}

impl VanillaOption {
    /// Build the variant named by `kind`. Never fails; no validation.
    pub fn make(kind: OptionKind, k: f64, t: f64, l: f64, r: f64, sigma: f64) -> Self {
        Self::from_params(kind, ContractParams::new(k, t, l, r, sigma))
    }

    pub fn from_params(kind: OptionKind, params: ContractParams) -> Self {
        debug!(
            %kind,
            k = params.strike(),
            t = params.maturity(),
            l = params.truncation(),
            r = params.rate(),
            sigma = params.volatility(),
            "creating vanilla option"
        );
        match kind {
            OptionKind::Put => VanillaOption::Put(Put::from_params(params)),
            OptionKind::Call => VanillaOption::Call(Call::from_params(params)),
        }
    }

    /// Like [`VanillaOption::make`] but rejects out-of-range parameters.
    pub fn try_make(
        kind: OptionKind,
        k: f64,
        t: f64,
        l: f64,
        r: f64,
        sigma: f64,
    ) -> PayoffResult<Self> {
        let params = ContractParams::new(k, t, l, r, sigma);
        if let Err(e) = params.validate() {
            warn!(%kind, error = %e, "rejecting option parameters");
            return Err(e);
        }
        Ok(Self::from_params(kind, params))
    }

    pub fn kind(&self) -> OptionKind {
        match self {
            VanillaOption::Put(_) => OptionKind::Put,
            VanillaOption::Call(_) => OptionKind::Call,
        }
    }
}

impl BoundaryPayoff for VanillaOption {
    fn params(&self) -> &ContractParams {
        match self {
            VanillaOption::Put(put) => put.params(),
            VanillaOption::Call(call) => call.params(),
        }
    }

    #[inline]
    fn payoff(&self, s: f64, t: f64) -> f64 {
        match self {
            VanillaOption::Put(put) => put.payoff(s, t),
            VanillaOption::Call(call) => call.payoff(s, t),
        }
    }
}

impl From<Put> for VanillaOption {
    fn from(put: Put) -> Self {
        VanillaOption::Put(put)
    }
}

impl From<Call> for VanillaOption {
    fn from(call: Call) -> Self {
        VanillaOption::Call(call)
    }
}
