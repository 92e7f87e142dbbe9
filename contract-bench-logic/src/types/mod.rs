pub mod abi;
pub mod benchmarks;
pub mod contracts;
