//! Core geometry types.

pub mod point;
