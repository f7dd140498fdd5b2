//! Graphstep Core Library
//!
//! Traversal engine for the graphstep visualizer: parses adjacency-list
//! text into a [`graph::GraphModel`], runs BFS, DFS and shortest-path
//! search as ordered streams of [`event::VisitationEvent`]s, and defines
//! the playback contract consumers use to render them one step at a time.

pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod graph;
pub mod logging;
pub mod playback;
pub mod traversal;
