pub mod app;
pub mod config;
pub mod shared;
pub mod wizard;
