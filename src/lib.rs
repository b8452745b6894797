#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod services;
pub mod tools;
pub mod types;
pub mod widget;

#[cfg(test)]
mod test_support;

pub use error::*;
pub use services::*;
pub use types::*;
