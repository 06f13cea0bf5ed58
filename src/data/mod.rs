//! # Storing of divisions in memory
//!
//! This module provides the data structures used to represent divisions and flow networks in
//! memory. Algorithms may introduce their specific data structures in `algorithm::my_algorithm`.

pub mod league;
pub mod network;
