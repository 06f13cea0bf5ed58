//! # Algorithms
//!
//! Maximum flows, and the elimination checks built on top of them.
pub mod elimination;
pub mod max_flow;
