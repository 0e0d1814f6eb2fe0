// Utilities shared by the front end

pub mod config;

pub use config::DemoConfig;
