pub mod environment;
pub mod state;
