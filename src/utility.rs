pub mod histogram;
pub mod random;
pub mod search;
pub mod stats;
pub mod website;
