pub mod cli;
pub mod conf;
pub mod display;
pub mod error;
pub mod logging;
pub mod monitor;
pub mod stats;
