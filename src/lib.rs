// Library root for the hello-api service

pub mod api;
pub mod config;
pub mod core;
pub mod utils;
