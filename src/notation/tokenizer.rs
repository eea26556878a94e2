use std::fmt;

use crate::notation::error::SpicesError;

/// One classified SPICES lexeme.
///
/// `pos` fields are character offsets into the source string the token came
/// from, kept for error reporting. Expansion clones tokens, so a position
/// may occur on several tokens of an expanded stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Particle { name: String, pos: usize },
    Monomer { name: String, pos: usize },
    Number { value: u32, pos: usize },
    Connection(usize),
    OpenParen(usize),
    CloseParen(usize),
    OpenCurly(usize),
    CloseCurly(usize),
    RingClosure { tag: u32, pos: usize },
    OpenAngle(usize),
    CloseAngle(usize),
    Head(usize),
    Tail(usize),
    Start(usize),
    End(usize),
    BackboneIndex { index: u32, pos: usize },
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Particle { .. } => TokenKind::Particle,
            Self::Monomer { .. } => TokenKind::Monomer,
            Self::Number { .. } => TokenKind::Number,
            Self::Connection(_) => TokenKind::Connection,
            Self::OpenParen(_) => TokenKind::OpenParen,
            Self::CloseParen(_) => TokenKind::CloseParen,
            Self::OpenCurly(_) => TokenKind::OpenCurly,
            Self::CloseCurly(_) => TokenKind::CloseCurly,
            Self::RingClosure { .. } => TokenKind::RingClosure,
            Self::OpenAngle(_) => TokenKind::OpenAngle,
            Self::CloseAngle(_) => TokenKind::CloseAngle,
            Self::Head(_) => TokenKind::Head,
            Self::Tail(_) => TokenKind::Tail,
            Self::Start(_) => TokenKind::Start,
            Self::End(_) => TokenKind::End,
            Self::BackboneIndex { .. } => TokenKind::BackboneIndex,
        }
    }

    pub fn pos(&self) -> usize {
        match self {
            Self::Particle { pos, .. }
            | Self::Monomer { pos, .. }
            | Self::Number { pos, .. }
            | Self::RingClosure { pos, .. }
            | Self::BackboneIndex { pos, .. } => *pos,
            Self::Connection(pos)
            | Self::OpenParen(pos)
            | Self::CloseParen(pos)
            | Self::OpenCurly(pos)
            | Self::CloseCurly(pos)
            | Self::OpenAngle(pos)
            | Self::CloseAngle(pos)
            | Self::Head(pos)
            | Self::Tail(pos)
            | Self::Start(pos)
            | Self::End(pos) => *pos,
        }
    }
}

/// Fieldless token classification, used by the pair-adjacency table and in
/// error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Particle,
    Monomer,
    Number,
    Connection,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    RingClosure,
    OpenAngle,
    CloseAngle,
    Head,
    Tail,
    Start,
    End,
    BackboneIndex,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Particle => "a particle",
            Self::Monomer => "a monomer",
            Self::Number => "a repeat count",
            Self::Connection => "a connection '-'",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::OpenCurly => "'{'",
            Self::CloseCurly => "'}'",
            Self::RingClosure => "a ring closure",
            Self::OpenAngle => "'<'",
            Self::CloseAngle => "'>'",
            Self::Head => "[HEAD]",
            Self::Tail => "[TAIL]",
            Self::Start => "[START]",
            Self::End => "[END]",
            Self::BackboneIndex => "a backbone index",
        };
        f.write_str(text)
    }
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch.is_whitespace()
        || matches!(ch, '{' | '}' | '#' | '(' | ')' | '[' | ']' | '<' | '>' | '\'' | '-')
}

pub const MAX_NAME_LEN: usize = 10;

pub fn tokenize(input: &str) -> Result<Vec<Token>, SpicesError> {
    let chars: Vec<char> = input.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if !is_allowed(ch) {
            return Err(SpicesError::InvalidCharacter { pos: i, ch });
        }
    }

    // Whitespace is insignificant except where stripping it would merge two
    // alphanumeric runs into one token.
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_whitespace() {
            let before = chars[..i].iter().rev().find(|c| !c.is_whitespace());
            let after = chars[i..].iter().find(|c| !c.is_whitespace());
            if let (Some(b), Some(a)) = (before, after) {
                if b.is_ascii_alphanumeric() && a.is_ascii_alphanumeric() {
                    return Err(SpicesError::WhitespaceInToken { pos: i });
                }
            }
        }
    }

    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            _ if ch.is_whitespace() => {
                i += 1;
            }
            'A'..='Z' => {
                let (name, next) = read_name(&chars, i);
                if name.len() > MAX_NAME_LEN {
                    return Err(SpicesError::InvalidParticleName { pos: i, name });
                }
                tokens.push(Token::Particle { name, pos: i });
                i = next;
            }
            'a'..='z' => {
                let (name, _) = read_name(&chars, i);
                return Err(SpicesError::InvalidParticleName { pos: i, name });
            }
            '0'..='9' => {
                let (value, next) = read_number(&chars, i)?;
                tokens.push(Token::Number { value, pos: i });
                i = next;
            }
            '#' => {
                match chars.get(i + 1) {
                    Some(c) if c.is_ascii_uppercase() => {}
                    _ => return Err(SpicesError::InvalidMonomerName { pos: i }),
                }
                let (name, next) = read_name(&chars, i + 1);
                if name.len() > MAX_NAME_LEN {
                    return Err(SpicesError::InvalidParticleName { pos: i + 1, name });
                }
                tokens.push(Token::Monomer { name, pos: i });
                i = next;
            }
            '-' => {
                tokens.push(Token::Connection(i));
                i += 1;
            }
            '(' => {
                tokens.push(Token::OpenParen(i));
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen(i));
                i += 1;
            }
            '{' => {
                tokens.push(Token::OpenCurly(i));
                i += 1;
            }
            '}' => {
                tokens.push(Token::CloseCurly(i));
                i += 1;
            }
            '<' => {
                tokens.push(Token::OpenAngle(i));
                i += 1;
            }
            '>' => {
                tokens.push(Token::CloseAngle(i));
                i += 1;
            }
            '[' => {
                let (tok, next) = read_square(&chars, i)?;
                tokens.push(tok);
                i = next;
            }
            ']' => {
                return Err(SpicesError::MissingOpenSquare { pos: i });
            }
            '\'' => {
                let (tok, next) = read_backbone(&chars, i)?;
                tokens.push(tok);
                i = next;
            }
            _ => return Err(SpicesError::InvalidCharacter { pos: i, ch }),
        }
    }

    Ok(tokens)
}

/// Reads a name starting at `start`. The first character begins the name;
/// lowercase letters and digits continue it. A fresh uppercase letter starts
/// the next token instead, so `AB` is two one-letter particles.
fn read_name(chars: &[char], start: usize) -> (String, usize) {
    let mut name = String::new();
    name.push(chars[start]);
    let mut i = start + 1;
    while i < chars.len() && (chars[i].is_ascii_lowercase() || chars[i].is_ascii_digit()) {
        name.push(chars[i]);
        i += 1;
    }
    (name, i)
}

fn read_number(chars: &[char], start: usize) -> Result<(u32, usize), SpicesError> {
    let mut i = start;
    let mut value: u32 = 0;
    while i < chars.len() && chars[i].is_ascii_digit() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(chars[i] as u32 - '0' as u32))
            .ok_or(SpicesError::NumberOverflow { pos: start })?;
        i += 1;
    }
    Ok((value, i))
}

/// Reads a `[...]` group: digits become a ring closure, the four structural
/// keywords become tag tokens, anything else is an error.
fn read_square(chars: &[char], start: usize) -> Result<(Token, usize), SpicesError> {
    let mut i = start + 1;
    let mut text = String::new();
    loop {
        match chars.get(i) {
            None | Some('[') => return Err(SpicesError::MissingCloseSquare { pos: start }),
            Some(']') => break,
            Some(&c) => {
                text.push(c);
                i += 1;
            }
        }
    }
    let next = i + 1;

    if text.is_empty() {
        return Err(SpicesError::EmptySquareBrackets { pos: start });
    }
    let tok = match text.as_str() {
        "HEAD" => Token::Head(start),
        "TAIL" => Token::Tail(start),
        "START" => Token::Start(start),
        "END" => Token::End(start),
        _ if text.chars().all(|c| c.is_ascii_digit()) => {
            let tag = text
                .parse::<u32>()
                .map_err(|_| SpicesError::NumberOverflow { pos: start })?;
            Token::RingClosure { tag, pos: start }
        }
        _ => return Err(SpicesError::InvalidTagContent { pos: start, text }),
    };
    Ok((tok, next))
}

fn read_backbone(chars: &[char], start: usize) -> Result<(Token, usize), SpicesError> {
    let mut i = start + 1;
    let mut text = String::new();
    loop {
        match chars.get(i) {
            None => return Err(SpicesError::UnpairedBackboneQuote { pos: start }),
            Some('\'') => break,
            Some(&c) => {
                text.push(c);
                i += 1;
            }
        }
    }
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(SpicesError::InvalidBackboneIndex { pos: start });
    }
    let index = text
        .parse::<u32>()
        .map_err(|_| SpicesError::NumberOverflow { pos: start })?;
    Ok((Token::BackboneIndex { index, pos: start }, i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_particle() {
        let tokens = tokenize("A").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0],
            Token::Particle {
                name: "A".into(),
                pos: 0
            }
        );
    }

    #[test]
    fn multi_letter_name() {
        let tokens = tokenize("Me2-Ph").unwrap();
        assert_eq!(tokens.len(), 3);
        match &tokens[0] {
            Token::Particle { name, .. } => assert_eq!(name, "Me2"),
            t => panic!("expected particle, got {:?}", t),
        }
        match &tokens[2] {
            Token::Particle { name, .. } => assert_eq!(name, "Ph"),
            t => panic!("expected particle, got {:?}", t),
        }
    }

    #[test]
    fn chain_with_connections() {
        let tokens = tokenize("A-B-C").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].kind(), TokenKind::Connection);
        assert_eq!(tokens[3].kind(), TokenKind::Connection);
    }

    #[test]
    fn uppercase_starts_new_token() {
        let tokens = tokenize("AB").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Particle);
        assert_eq!(tokens[1].kind(), TokenKind::Particle);
    }

    #[test]
    fn repeat_count() {
        let tokens = tokenize("3A").unwrap();
        assert_eq!(
            tokens[0],
            Token::Number { value: 3, pos: 0 }
        );
        assert_eq!(tokens[1].kind(), TokenKind::Particle);
    }

    #[test]
    fn monomer_reference() {
        let tokens = tokenize("#Mon").unwrap();
        assert_eq!(
            tokens[0],
            Token::Monomer {
                name: "Mon".into(),
                pos: 0
            }
        );
    }

    #[test]
    fn monomer_without_name() {
        assert!(matches!(
            tokenize("#-A"),
            Err(SpicesError::InvalidMonomerName { pos: 0 })
        ));
    }

    #[test]
    fn ring_closure_and_tags() {
        let tokens = tokenize("A[1]B[START]C[END]").unwrap();
        assert_eq!(tokens[1], Token::RingClosure { tag: 1, pos: 1 });
        assert_eq!(tokens[3].kind(), TokenKind::Start);
        assert_eq!(tokens[5].kind(), TokenKind::End);
    }

    #[test]
    fn head_tail_tags() {
        let tokens = tokenize("{A[HEAD]-B[TAIL]}").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::OpenCurly);
        assert_eq!(tokens[2].kind(), TokenKind::Head);
        assert_eq!(tokens[5].kind(), TokenKind::Tail);
        assert_eq!(tokens[6].kind(), TokenKind::CloseCurly);
    }

    #[test]
    fn backbone_index() {
        let tokens = tokenize("A'1'-B'2'").unwrap();
        assert_eq!(tokens[1], Token::BackboneIndex { index: 1, pos: 1 });
        assert_eq!(tokens[4], Token::BackboneIndex { index: 2, pos: 6 });
    }

    #[test]
    fn whitespace_skipped() {
        let tokens = tokenize("A - B").unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn whitespace_inside_name_rejected() {
        assert!(matches!(
            tokenize("A B"),
            Err(SpicesError::WhitespaceInToken { .. })
        ));
        assert!(matches!(
            tokenize("3 A"),
            Err(SpicesError::WhitespaceInToken { .. })
        ));
    }

    #[test]
    fn invalid_character() {
        assert!(matches!(
            tokenize("A+B"),
            Err(SpicesError::InvalidCharacter { pos: 1, ch: '+' })
        ));
    }

    #[test]
    fn lowercase_start_rejected() {
        assert!(matches!(
            tokenize("abc"),
            Err(SpicesError::InvalidParticleName { .. })
        ));
    }

    #[test]
    fn name_too_long() {
        assert!(matches!(
            tokenize("Abcdefghijk"),
            Err(SpicesError::InvalidParticleName { .. })
        ));
        assert!(tokenize("Abcdefghij").is_ok());
    }

    #[test]
    fn unclosed_square() {
        assert!(matches!(
            tokenize("A[1B"),
            Err(SpicesError::MissingCloseSquare { pos: 1 })
        ));
    }

    #[test]
    fn stray_close_square() {
        assert!(matches!(
            tokenize("A]"),
            Err(SpicesError::MissingOpenSquare { pos: 1 })
        ));
    }

    #[test]
    fn empty_square() {
        assert!(matches!(
            tokenize("A[]B"),
            Err(SpicesError::EmptySquareBrackets { pos: 1 })
        ));
    }

    #[test]
    fn bad_tag_text() {
        assert!(matches!(
            tokenize("A[HEAD1]"),
            Err(SpicesError::InvalidTagContent { .. })
        ));
    }

    #[test]
    fn unterminated_backbone_quote() {
        assert!(matches!(
            tokenize("A'1"),
            Err(SpicesError::UnpairedBackboneQuote { pos: 1 })
        ));
    }

    #[test]
    fn empty_backbone_quotes() {
        assert!(matches!(
            tokenize("A''"),
            Err(SpicesError::InvalidBackboneIndex { pos: 1 })
        ));
    }

    #[test]
    fn nondigit_backbone() {
        assert!(matches!(
            tokenize("A'x'"),
            Err(SpicesError::InvalidBackboneIndex { pos: 1 })
        ));
    }

    #[test]
    fn angle_tokens() {
        let tokens = tokenize("<A>").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::OpenAngle);
        assert_eq!(tokens[2].kind(), TokenKind::CloseAngle);
    }

    #[test]
    fn empty_input_gives_no_tokens() {
        assert_eq!(tokenize("").unwrap().len(), 0);
        assert_eq!(tokenize("   ").unwrap().len(), 0);
    }
}
