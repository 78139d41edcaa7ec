pub mod config;
pub mod poles;
pub mod rooms;
