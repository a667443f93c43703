//! # CLI Command Implementations
//!
//! Each command lives in its own file with an `Args` struct derived using
//! `clap` and an `execute` function that calls into the `helmizer` library.

pub mod generate;
