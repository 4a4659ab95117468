//! BloomWatch series math utilities.

pub mod series;
pub mod smooth;

pub use series::*;
pub use smooth::*;
