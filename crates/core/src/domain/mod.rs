pub mod contract;
pub mod maturity;
pub mod savings;
