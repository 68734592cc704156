//! Waypath Core Library
//!
//! Step-animated shortest paths over small directed graphs, and the
//! meet-in-the-middle search for the cheapest common waypoint of two
//! sources on their way to one destination.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod present;
pub mod session;
pub mod waypoint;
