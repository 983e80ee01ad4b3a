pub mod health;
pub mod locode;
pub mod random;
