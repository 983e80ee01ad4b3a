pub mod locode;
pub mod shared;
