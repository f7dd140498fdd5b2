//! Integration tests for the graphstep binary, grouped by command

mod config;
mod errors;
mod graph;
mod path;
mod support;
mod traverse;
