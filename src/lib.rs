//! # Elimination certificates for sports divisions
//!
//! Decides for every team in a division whether it can still finish in first place, given the
//! current standings and the games left. Eliminated teams come with a certificate: a set of teams
//! that, between them, are guaranteed to win too many games.
//!
//! Non-trivial eliminations are found by reducing the problem to a maximum flow problem, as first
//! described by Benjamin L. Schwartz in "Possible Winners in Partially Completed Tournaments" (SIAM
//! Review, 1966). All arithmetic is exact.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
