pub mod config;
pub mod errors;
pub mod nutrition;
pub mod profiles;
pub mod state;
