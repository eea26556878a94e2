use crate::notation::error::SpicesError;
use crate::notation::tokenizer::{Token, TokenKind};

/// Rewrites repeat shorthand into a fully explicit token stream.
///
/// `3A` becomes `A-A-A`; `2{…}` emits the curly span twice (span copies are
/// bonded tail-to-head by the connectivity builder, not by connection
/// tokens). Repeats compose: a numeric repeat inside a repeated span
/// multiplies out. Expects a validated stream; a number followed by
/// anything else is reported as the corresponding illegal pair.
pub fn expand(tokens: &[Token]) -> Result<Vec<Token>, SpicesError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Number { value, pos } => {
                let count = *value as usize;
                match tokens.get(i + 1) {
                    Some(unit @ Token::Particle { .. }) | Some(unit @ Token::Monomer { .. }) => {
                        for k in 0..count {
                            if k > 0 {
                                out.push(Token::Connection(unit.pos()));
                            }
                            out.push(unit.clone());
                        }
                        i += 2;
                    }
                    Some(Token::OpenCurly(_)) => {
                        let close = matching_curly(tokens, i + 1)
                            .ok_or(SpicesError::MissingCloseCurly { pos: *pos })?;
                        let inner = expand(&tokens[i + 2..close])?;
                        for _ in 0..count {
                            out.push(tokens[i + 1].clone());
                            out.extend(inner.iter().cloned());
                            out.push(tokens[close].clone());
                        }
                        i = close + 1;
                    }
                    other => {
                        return Err(SpicesError::IllegalTokenPair {
                            pos: *pos,
                            left: TokenKind::Number,
                            right: other.map(Token::kind).unwrap_or(TokenKind::Number),
                        })
                    }
                }
            }
            token => {
                out.push(token.clone());
                i += 1;
            }
        }
    }

    Ok(out)
}

fn matching_curly(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::OpenCurly(_) => depth += 1,
            Token::CloseCurly(_) => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
