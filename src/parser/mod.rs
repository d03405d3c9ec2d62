mod api;
pub mod ast;
#[cfg(test)]
mod unit_tests;

pub use api::{parse_call, parse_signature, Rule, SigParser};
