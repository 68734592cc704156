//! CLI commands for waypath

pub mod dispatch;
pub mod distances;
pub mod graph;
pub mod printer;
pub mod run;
