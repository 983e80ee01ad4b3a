pub mod lookup_locode;
pub mod random_locodes;
