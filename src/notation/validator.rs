use std::collections::{HashMap, HashSet};

use crate::notation::error::SpicesError;
use crate::notation::tokenizer::{Token, TokenKind};

/// Checks a token stream against the SPICES grammar.
///
/// Rules run in a fixed order and the first violation wins, so a given
/// invalid input always yields the same error. `is_monomer` switches the
/// structural-tag rules: monomer bodies need exactly one `[HEAD]` and one
/// `[TAIL]`, ordinary structures allow one optional `[START]`/`[END]` pair.
/// `available` optionally restricts particle names to a caller-supplied set.
pub fn validate(
    tokens: &[Token],
    is_monomer: bool,
    available: Option<&HashSet<String>>,
) -> Result<(), SpicesError> {
    if tokens.is_empty() {
        return Err(SpicesError::EmptyInput);
    }
    check_bracket_balance(tokens, is_monomer)?;
    check_backbone_indices(tokens)?;
    check_ring_closures(tokens)?;
    check_tag_cardinality(tokens, is_monomer)?;
    check_token_pairs(tokens)?;
    check_first_and_last(tokens)?;
    check_available(tokens, available)?;
    check_region_connectivity(tokens)?;
    Ok(())
}

/// Rule 1: every bracket family balanced in nesting order, no empty pairs,
/// and curly spans (monomer definitions) never nested.
fn check_bracket_balance(tokens: &[Token], is_monomer: bool) -> Result<(), SpicesError> {
    let mut parens: Vec<usize> = Vec::new();
    let mut angles: Vec<usize> = Vec::new();
    let mut curly: Option<usize> = None;

    for (i, token) in tokens.iter().enumerate() {
        let pos = token.pos();
        match token.kind() {
            TokenKind::OpenParen => {
                if next_kind(tokens, i) == Some(TokenKind::CloseParen) {
                    return Err(SpicesError::EmptyParentheses { pos });
                }
                parens.push(pos);
            }
            TokenKind::CloseParen => {
                if parens.pop().is_none() {
                    return Err(SpicesError::MissingOpenParen { pos });
                }
            }
            TokenKind::OpenCurly => {
                if is_monomer || curly.is_some() {
                    return Err(SpicesError::NestedMonomer { pos });
                }
                if next_kind(tokens, i) == Some(TokenKind::CloseCurly) {
                    return Err(SpicesError::EmptyCurlyBraces { pos });
                }
                curly = Some(pos);
            }
            TokenKind::CloseCurly => {
                if curly.take().is_none() {
                    return Err(SpicesError::MissingOpenCurly { pos });
                }
            }
            TokenKind::Monomer => {
                if is_monomer || curly.is_some() {
                    return Err(SpicesError::NestedMonomer { pos });
                }
            }
            TokenKind::OpenAngle => {
                if next_kind(tokens, i) == Some(TokenKind::CloseAngle) {
                    return Err(SpicesError::EmptyAngleBrackets { pos });
                }
                angles.push(pos);
            }
            TokenKind::CloseAngle => {
                if angles.pop().is_none() {
                    return Err(SpicesError::MissingOpenAngle { pos });
                }
            }
            _ => {}
        }
    }

    if let Some(pos) = parens.pop() {
        return Err(SpicesError::MissingCloseParen { pos });
    }
    if let Some(pos) = curly {
        return Err(SpicesError::MissingCloseCurly { pos });
    }
    if let Some(pos) = angles.pop() {
        return Err(SpicesError::MissingCloseAngle { pos });
    }
    Ok(())
}

fn next_kind(tokens: &[Token], i: usize) -> Option<TokenKind> {
    tokens.get(i + 1).map(|t| t.kind())
}

/// Rule 2: backbone indices are nonzero and unique within the substructure.
/// Quote pairing and digit-only contents are already lexical errors.
fn check_backbone_indices(tokens: &[Token]) -> Result<(), SpicesError> {
    let mut seen: HashSet<u32> = HashSet::new();
    for token in tokens {
        if let Token::BackboneIndex { index, pos } = token {
            if *index == 0 {
                return Err(SpicesError::ZeroBackboneIndex { pos: *pos });
            }
            if !seen.insert(*index) {
                return Err(SpicesError::DuplicateBackboneIndex { index: *index });
            }
        }
    }
    Ok(())
}

/// Rule 3: every ring-closure tag value occurs exactly twice.
fn check_ring_closures(tokens: &[Token]) -> Result<(), SpicesError> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for token in tokens {
        if let Token::RingClosure { tag, .. } = token {
            *counts.entry(*tag).or_insert(0) += 1;
        }
    }
    for token in tokens {
        if let Token::RingClosure { tag, .. } = token {
            match counts[tag] {
                2 => {}
                1 => return Err(SpicesError::MissingRingClosure { tag: *tag }),
                _ => return Err(SpicesError::TooManyRingClosures { tag: *tag }),
            }
        }
    }
    Ok(())
}

/// Rule 4: structural-tag cardinality. A monomer body (the whole stream
/// when `is_monomer`) needs exactly one HEAD and one TAIL. Inline curly
/// spans may carry at most one of each; a span without them splices at its
/// first and last particle. Ordinary structures allow at most one START
/// and one END, each requiring the other; a tag in the wrong context is
/// misplaced.
fn check_tag_cardinality(tokens: &[Token], is_monomer: bool) -> Result<(), SpicesError> {
    let mut start_count = 0usize;
    let mut end_count = 0usize;
    // (open position, head count, tail count) of the current curly span;
    // also used as the whole-stream counter when `is_monomer`.
    let mut span: Option<(usize, usize, usize)> = if is_monomer { Some((0, 0, 0)) } else { None };

    for token in tokens {
        let pos = token.pos();
        match token.kind() {
            TokenKind::OpenCurly => {
                span = Some((pos, 0, 0));
            }
            TokenKind::CloseCurly => {
                span = None;
            }
            TokenKind::Head => match &mut span {
                Some((_, heads, _)) => {
                    *heads += 1;
                    if *heads > 1 {
                        return Err(SpicesError::MultipleHeadTags { pos });
                    }
                }
                None => {
                    return Err(SpicesError::MisplacedTag {
                        pos,
                        kind: TokenKind::Head,
                    })
                }
            },
            TokenKind::Tail => match &mut span {
                Some((_, _, tails)) => {
                    *tails += 1;
                    if *tails > 1 {
                        return Err(SpicesError::MultipleTailTags { pos });
                    }
                }
                None => {
                    return Err(SpicesError::MisplacedTag {
                        pos,
                        kind: TokenKind::Tail,
                    })
                }
            },
            TokenKind::Start => {
                if is_monomer || span.is_some() {
                    return Err(SpicesError::MisplacedTag {
                        pos,
                        kind: TokenKind::Start,
                    });
                }
                start_count += 1;
                if start_count > 1 {
                    return Err(SpicesError::MultipleStartTags { pos });
                }
            }
            TokenKind::End => {
                if is_monomer || span.is_some() {
                    return Err(SpicesError::MisplacedTag {
                        pos,
                        kind: TokenKind::End,
                    });
                }
                end_count += 1;
                if end_count > 1 {
                    return Err(SpicesError::MultipleEndTags { pos });
                }
            }
            _ => {}
        }
    }

    if is_monomer {
        if let Some((open_pos, heads, tails)) = span {
            if heads == 0 {
                return Err(SpicesError::MissingHeadTag { pos: open_pos });
            }
            if tails == 0 {
                return Err(SpicesError::MissingTailTag { pos: open_pos });
            }
        }
    }
    if start_count == 1 && end_count == 0 {
        return Err(SpicesError::StartWithoutEnd);
    }
    if end_count == 1 && start_count == 0 {
        return Err(SpicesError::EndWithoutStart);
    }
    Ok(())
}

/// Rule 5: pairwise token-adjacency legality, plus the zero-repeat check.
fn check_token_pairs(tokens: &[Token]) -> Result<(), SpicesError> {
    for token in tokens {
        if let Token::Number { value: 0, pos } = token {
            return Err(SpicesError::ZeroRepeatCount { pos: *pos });
        }
    }
    for pair in tokens.windows(2) {
        let (left, right) = (pair[0].kind(), pair[1].kind());
        if !pair_is_legal(left, right) {
            return Err(SpicesError::IllegalTokenPair {
                pos: pair[1].pos(),
                left,
                right,
            });
        }
    }
    Ok(())
}

/// The token-adjacency machine: which right-token kinds may follow a given
/// left-token kind. Encoded as one exhaustive match so every kind×kind
/// decision is auditable in one place.
pub(crate) fn pair_is_legal(left: TokenKind, right: TokenKind) -> bool {
    use TokenKind::*;
    match (left, right) {
        // Part delimiters never touch body tokens; the composer strips them
        // before a part body is validated.
        (OpenAngle | CloseAngle, _) | (_, OpenAngle | CloseAngle) => false,
        (Particle | Monomer, r) => matches!(
            r,
            Particle
                | Monomer
                | Connection
                | OpenParen
                | CloseParen
                | OpenCurly
                | CloseCurly
                | RingClosure
                | Head
                | Tail
                | Start
                | End
                | BackboneIndex
        ),
        (Number, r) => matches!(r, Particle | Monomer | OpenCurly),
        (Connection, r) => matches!(r, Particle | Monomer | Number | OpenParen | OpenCurly),
        (OpenParen, r) => matches!(r, Particle | Monomer | Number | OpenCurly),
        (CloseParen, r) => matches!(
            r,
            Particle
                | Monomer
                | Number
                | Connection
                | OpenParen
                | CloseParen
                | OpenCurly
                | CloseCurly
                | RingClosure
                | Head
                | Tail
                | Start
                | End
                | BackboneIndex
        ),
        (OpenCurly, r) => matches!(r, Particle | Number | OpenParen),
        (CloseCurly, r) => matches!(
            r,
            Particle
                | Monomer
                | Number
                | Connection
                | OpenParen
                | CloseParen
                | OpenCurly
                | RingClosure
                | Start
                | End
                | BackboneIndex
        ),
        (RingClosure, r) => matches!(
            r,
            Particle
                | Monomer
                | Connection
                | OpenParen
                | CloseParen
                | CloseCurly
                | RingClosure
                | Head
                | Tail
                | Start
                | End
                | BackboneIndex
        ),
        (Head, r) => matches!(
            r,
            Particle
                | Monomer
                | Connection
                | OpenParen
                | CloseParen
                | CloseCurly
                | RingClosure
                | Tail
                | BackboneIndex
        ),
        (Tail, r) => matches!(
            r,
            Particle
                | Monomer
                | Connection
                | OpenParen
                | CloseParen
                | CloseCurly
                | RingClosure
                | Head
                | BackboneIndex
        ),
        (Start | End, r) => matches!(
            r,
            Particle | Monomer | Connection | OpenParen | CloseParen | RingClosure | BackboneIndex
        ),
        (BackboneIndex, r) => matches!(
            r,
            Particle
                | Monomer
                | Connection
                | OpenParen
                | CloseParen
                | CloseCurly
                | RingClosure
                | Head
                | Tail
                | Start
                | End
        ),
    }
}

/// Rule 6: restrictions on the first and last token of a substructure.
fn check_first_and_last(tokens: &[Token]) -> Result<(), SpicesError> {
    let first = &tokens[0];
    if !matches!(
        first.kind(),
        TokenKind::Particle
            | TokenKind::Monomer
            | TokenKind::Number
            | TokenKind::OpenParen
            | TokenKind::OpenCurly
    ) {
        return Err(SpicesError::InvalidFirstToken {
            pos: first.pos(),
            kind: first.kind(),
        });
    }
    let last = &tokens[tokens.len() - 1];
    if matches!(
        last.kind(),
        TokenKind::Number
            | TokenKind::Connection
            | TokenKind::OpenParen
            | TokenKind::OpenCurly
            | TokenKind::OpenAngle
    ) {
        return Err(SpicesError::InvalidLastToken {
            pos: last.pos(),
            kind: last.kind(),
        });
    }
    Ok(())
}

fn check_available(
    tokens: &[Token],
    available: Option<&HashSet<String>>,
) -> Result<(), SpicesError> {
    let set = match available {
        Some(s) => s,
        None => return Ok(()),
    };
    for token in tokens {
        if let Token::Particle { name, .. } = token {
            if !set.contains(name) {
                return Err(SpicesError::UndefinedParticle { name: name.clone() });
            }
        }
    }
    Ok(())
}

/// Rule 7: a substructure written as top-level parenthesized regions must
/// resolve into one connected piece. Every region needs at least one ring
/// closure, and regions sharing a tag value are merged; more than one
/// surviving component means disconnected parts.
fn check_region_connectivity(tokens: &[Token]) -> Result<(), SpicesError> {
    if tokens[0].kind() != TokenKind::OpenParen {
        return Ok(());
    }

    let mut regions: Vec<Vec<u32>> = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<Vec<u32>> = None;
    for token in tokens {
        match token {
            Token::OpenParen(_) => {
                if depth == 0 {
                    current = Some(Vec::new());
                }
                depth += 1;
            }
            Token::CloseParen(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(tags) = current.take() {
                        regions.push(tags);
                    }
                }
            }
            Token::RingClosure { tag, .. } => {
                if let Some(tags) = current.as_mut() {
                    tags.push(*tag);
                }
            }
            _ => {}
        }
    }

    if regions.len() < 2 && regions.iter().all(|r| !r.is_empty()) {
        return Ok(());
    }
    if regions.iter().any(|r| r.is_empty()) {
        return Err(SpicesError::DisconnectedStructure);
    }

    // Union-find over region indices keyed by shared tag values.
    let mut parent: Vec<usize> = (0..regions.len()).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }
    let mut by_tag: HashMap<u32, usize> = HashMap::new();
    for (i, tags) in regions.iter().enumerate() {
        for tag in tags {
            match by_tag.get(tag) {
                Some(&j) => {
                    let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
                    parent[ri] = rj;
                }
                None => {
                    by_tag.insert(*tag, i);
                }
            }
        }
    }
    let roots: HashSet<usize> = (0..regions.len()).map(|i| find(&mut parent, i)).collect();
    if roots.len() > 1 {
        return Err(SpicesError::DisconnectedStructure);
    }
    Ok(())
}
