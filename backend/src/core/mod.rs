//! Core clock primitives

pub mod time;
