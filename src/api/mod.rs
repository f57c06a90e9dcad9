//! Lambda request boundary: event parsing, response envelopes and error mapping.

pub mod handler;
pub mod helpers;
pub mod parsing;

pub use handler::{ApiHandler, function_handler, respond};
