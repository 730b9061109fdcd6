pub mod baseline;
pub mod colony;
pub mod config;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod export;
pub mod tour;
// cmd and reports are binary modules, declared in main.rs.
