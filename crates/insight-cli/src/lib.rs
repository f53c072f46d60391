//! CLI library components for automatic insight discovery.

#![allow(missing_docs)]

pub mod logging;
pub mod run;
