pub mod call;
pub mod contract;
pub mod put;
pub mod vanilla;

pub use call::Call;
pub use contract::{BoundaryPayoff, ContractParams};
pub use put::Put;
pub use vanilla::{OptionKind, VanillaOption};
