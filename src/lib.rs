pub mod chunk;
pub mod constants;
pub mod dimension;
pub mod navigation;
pub mod rng;
pub mod scan;
pub mod slime;
pub mod types;
