pub mod multicall;
pub mod word;
