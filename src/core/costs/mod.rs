pub mod opex;
pub mod upfront;
