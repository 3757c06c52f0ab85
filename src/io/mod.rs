//! Report serialization.

pub mod export;
