//! The SPICES notation front end.
//!
//! Parsing one part body is a fixed pipeline: [`tokenizer`] classifies the
//! text into tokens, [`validator`] checks the stream against the grammar,
//! [`expander`] rewrites repeat shorthand into explicit tokens, and
//! [`builder`] indexes particles and derives connectivity. Multi-part
//! `<...>` assemblies are split above this layer, in the composer.

pub(crate) mod builder;
mod error;
pub(crate) mod expander;
pub(crate) mod tokenizer;
pub(crate) mod validator;
pub(crate) mod writer;

pub use error::SpicesError;
pub use tokenizer::{Token, TokenKind};

use std::collections::HashSet;

use crate::unit::ParsedUnit;

/// Parses one SPICES part body (no `<...>` assembly syntax) into a
/// [`ParsedUnit`].
pub fn parse_part(input: &str) -> Result<ParsedUnit, SpicesError> {
    parse_part_impl(input, None)
}

/// Like [`parse_part`], but rejects particle names outside `available`.
pub fn parse_part_with(
    input: &str,
    available: &HashSet<String>,
) -> Result<ParsedUnit, SpicesError> {
    parse_part_impl(input, Some(available))
}

fn parse_part_impl(
    input: &str,
    available: Option<&HashSet<String>>,
) -> Result<ParsedUnit, SpicesError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SpicesError::EmptyInput);
    }
    let tokens = tokenizer::tokenize(trimmed)?;
    validator::validate(&tokens, false, available)?;
    let expanded = expander::expand(&tokens)?;
    builder::build_unit(trimmed, expanded)
}
