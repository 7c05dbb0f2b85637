//! # fd-boundary: Boundary Conditions for Finite-Difference Option Pricing
//!
//! Supplies the boundary and terminal values a finite-difference solver for
//! the Black-Scholes PDE needs for European vanilla options.
//!
//! ## Key Features
//!
//! - **One Call Interface**: every variant exposes `payoff(S, t)`
//! - **Put and Call**: standalone structs plus a tagged [`VanillaOption`]
//! - **Bulk Evaluation**: whole grid edges as `ndarray` vectors, parallel via Rayon
//! - **Optional Validation**: strict constructors on top of the infallible ones
//!
//! ## Quick Start
//!
//! ```rust
//! use fd_boundary::options::{BoundaryPayoff, OptionKind, VanillaOption};
//!
//! // K = 100, T = 1, L = 300, r = 5%, sigma = 20%
//! let put = VanillaOption::make(OptionKind::Put, 100.0, 1.0, 300.0, 0.05, 0.2);
//!
//! assert_eq!(put.payoff(80.0, 1.0), 20.0);   // maturity
//! assert_eq!(put.payoff(300.0, 0.5), 0.0);   // upper boundary
//! assert!((put.payoff(0.0, 0.5) - 97.531).abs() < 1e-3); // lower boundary
//! ```
//!
//! ## Mathematical Foundation
//!
//! The asset axis is truncated at `L`, so the solver works on `[0, L] × [0, T]`
//! and marches backwards from the terminal payoff. Points strictly inside the
//! rectangle are unknowns of the scheme; `payoff` returns `0` there.

pub mod boundary;
pub mod error;
pub mod options;

// Re-export commonly used types for convenience
pub use boundary::BoundaryConditions;
pub use error::{PayoffError, PayoffResult};
pub use options::{BoundaryPayoff, Call, ContractParams, OptionKind, Put, VanillaOption};
