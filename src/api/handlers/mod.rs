//! HTTP handlers, one module per collection.

mod courses;
mod education;
mod errors;
mod projects;
mod skills;
mod system;

#[cfg(test)]
mod errors_test;

pub use courses::*;
pub use education::*;
pub use errors::*;
pub use projects::*;
pub use skills::*;
pub use system::*;
