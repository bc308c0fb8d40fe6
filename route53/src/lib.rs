pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod op;
pub mod output;
pub mod resource;
pub mod util;
pub mod zones;

#[cfg(test)]
mod fake;

pub use client::{Route53Api, Route53Client};
pub use error::Route53Error;
