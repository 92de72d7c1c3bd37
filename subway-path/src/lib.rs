//! Subway shortest-path finder.
//!
//! Models a subway network as lines made of chained track sections and
//! answers: "what is the shortest way from this station to that one,
//! across every line?"

pub mod config;
pub mod domain;
pub mod network;
pub mod path;
