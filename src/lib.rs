pub mod cli;
pub mod display;
pub mod input;
pub mod models;
