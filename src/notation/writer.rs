use std::fmt::Write;

use crate::notation::tokenizer::Token;

/// Renders a token stream back to notation text.
///
/// On an expanded stream this yields the fully explicit form of the input:
/// `3A` comes back as `A-A-A`, repeated monomer spans as one span per copy.
pub fn write_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Particle { name, .. } => out.push_str(name),
            Token::Monomer { name, .. } => {
                out.push('#');
                out.push_str(name);
            }
            Token::Number { value, .. } => {
                let _ = write!(out, "{}", value);
            }
            Token::Connection(_) => out.push('-'),
            Token::OpenParen(_) => out.push('('),
            Token::CloseParen(_) => out.push(')'),
            Token::OpenCurly(_) => out.push('{'),
            Token::CloseCurly(_) => out.push('}'),
            Token::OpenAngle(_) => out.push('<'),
            Token::CloseAngle(_) => out.push('>'),
            Token::RingClosure { tag, .. } => {
                let _ = write!(out, "[{}]", tag);
            }
            Token::Head(_) => out.push_str("[HEAD]"),
            Token::Tail(_) => out.push_str("[TAIL]"),
            Token::Start(_) => out.push_str("[START]"),
            Token::End(_) => out.push_str("[END]"),
            Token::BackboneIndex { index, .. } => {
                let _ = write!(out, "'{}'", index);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::expander::expand;
    use crate::notation::tokenizer::tokenize;

    fn rendered(input: &str) -> String {
        write_tokens(&expand(&tokenize(input).unwrap()).unwrap())
    }

    #[test]
    fn explicit_input_round_trips() {
        assert_eq!(rendered("A(B)C[1]-D[1]"), "A(B)C[1]-D[1]");
    }

    #[test]
    fn numeric_repeat_written_out() {
        assert_eq!(rendered("3A"), "A-A-A");
    }

    #[test]
    fn span_repeat_written_out() {
        assert_eq!(rendered("2{A[HEAD]B[TAIL]}"), "{A[HEAD]B[TAIL]}{A[HEAD]B[TAIL]}");
    }

    #[test]
    fn tags_and_backbone_preserved() {
        assert_eq!(rendered("A'1'[START]-B[END]"), "A'1'[START]-B[END]");
    }
}
