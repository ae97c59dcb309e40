//! State records consumed and produced by the launch engine

pub mod config;
pub mod launch;
pub mod position;

pub use config::*;
pub use launch::*;
pub use position::*;
