//! Command-line front end for the `wgraph` binary.

pub mod commands;
