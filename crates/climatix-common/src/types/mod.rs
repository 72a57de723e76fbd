//! Core data types for Climatix

pub mod bounds;
pub mod score;
