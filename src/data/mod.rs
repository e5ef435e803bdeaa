pub mod conversion;
pub mod region;
