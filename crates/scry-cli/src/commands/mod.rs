//! Command implementations for the scry CLI.
//!
//! - [`analyze`] - Codebase summary, dependencies, complexity and patterns
//! - [`ddd`] - DDD building block report
//! - [`review`] - Java code review
//! - [`init`] - Config file scaffolding
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod analyze;
pub mod ddd;
pub mod init;
pub mod review;
pub(crate) mod utils;

pub use analyze::execute as analyze_execute;
pub use ddd::execute as ddd_execute;
pub use init::execute as init_execute;
pub use review::execute as review_execute;
