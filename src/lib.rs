pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod suggest;
pub mod widgets;
