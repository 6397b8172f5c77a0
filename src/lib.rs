//! asmdoc: extract documentation from assembler listings.
//!
//! Pipeline: exported label paths + listing lines → namespace hierarchy →
//! comment association → HTML rendering. The hierarchy preserves export
//! declaration order end to end; that order is user-visible in the output.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod exports;
pub mod listing;
pub mod render;
pub mod util;
