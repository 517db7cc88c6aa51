pub mod catalog;
pub mod config;
pub mod logging;
pub mod output;
pub mod placement;
pub mod ranking;
pub mod roster;
pub mod scoring;
pub mod summary;
