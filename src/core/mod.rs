pub mod costs;
pub mod emissions;
pub mod energy;
pub mod household;
pub mod recommendation;
pub(crate) mod reference;
pub mod units;
