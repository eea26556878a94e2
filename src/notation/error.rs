use std::fmt;

use crate::notation::tokenizer::TokenKind;

/// Errors produced when parsing a SPICES string.
///
/// Every syntactically invalid input maps to exactly one of these codes;
/// parsing never partially succeeds. Callers that need user-facing text in
/// another language can match on the variant — the `Display` impl is the
/// engine's own English rendering, not a localization surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpicesError {
    /// The input string was empty or contained only whitespace.
    EmptyInput,
    /// A character outside the allowed SPICES set was encountered.
    InvalidCharacter { pos: usize, ch: char },
    /// Whitespace splits what would otherwise be one name or number.
    WhitespaceInToken { pos: usize },
    /// A particle name is malformed (lowercase start or longer than 10
    /// characters).
    InvalidParticleName { pos: usize, name: String },
    /// A `#` monomer marker was not followed by an uppercase letter.
    InvalidMonomerName { pos: usize },
    /// A repeat count or tag number does not fit in 32 bits.
    NumberOverflow { pos: usize },
    /// A repeat count of zero.
    ZeroRepeatCount { pos: usize },
    /// A `(` was never closed.
    MissingCloseParen { pos: usize },
    /// A `)` without a matching `(`.
    MissingOpenParen { pos: usize },
    /// An empty `()` pair.
    EmptyParentheses { pos: usize },
    /// A `{` was never closed.
    MissingCloseCurly { pos: usize },
    /// A `}` without a matching `{`.
    MissingOpenCurly { pos: usize },
    /// An empty `{}` pair.
    EmptyCurlyBraces { pos: usize },
    /// A `[` was never closed.
    MissingCloseSquare { pos: usize },
    /// A `]` without a matching `[`.
    MissingOpenSquare { pos: usize },
    /// An empty `[]` pair.
    EmptySquareBrackets { pos: usize },
    /// A `<` was never closed.
    MissingCloseAngle { pos: usize },
    /// A `>` without a matching `<`.
    MissingOpenAngle { pos: usize },
    /// An empty `<>` pair.
    EmptyAngleBrackets { pos: usize },
    /// Square-bracket contents that are neither digits nor one of the
    /// HEAD/TAIL/START/END keywords.
    InvalidTagContent { pos: usize, text: String },
    /// An odd number of backbone-index quotes, or an unterminated `'`.
    UnpairedBackboneQuote { pos: usize },
    /// Backbone-index quotes enclosing anything but one or more digits.
    InvalidBackboneIndex { pos: usize },
    /// A backbone index of zero.
    ZeroBackboneIndex { pos: usize },
    /// The same backbone index appears on two particles of one substructure.
    DuplicateBackboneIndex { index: u32 },
    /// A ring-closure tag value that occurs exactly once.
    MissingRingClosure { tag: u32 },
    /// A ring-closure tag value that occurs more than twice.
    TooManyRingClosures { tag: u32 },
    /// More than one `[START]` tag.
    MultipleStartTags { pos: usize },
    /// More than one `[END]` tag.
    MultipleEndTags { pos: usize },
    /// A `[START]` tag without a matching `[END]`.
    StartWithoutEnd,
    /// An `[END]` tag without a matching `[START]`.
    EndWithoutStart,
    /// A monomer span without a `[HEAD]` tag.
    MissingHeadTag { pos: usize },
    /// A monomer span without a `[TAIL]` tag.
    MissingTailTag { pos: usize },
    /// A monomer span with more than one `[HEAD]` tag.
    MultipleHeadTags { pos: usize },
    /// A monomer span with more than one `[TAIL]` tag.
    MultipleTailTags { pos: usize },
    /// A structural tag in a context where it is not allowed (HEAD/TAIL
    /// outside a monomer, START/END inside one).
    MisplacedTag { pos: usize, kind: TokenKind },
    /// A monomer definition nested inside another monomer.
    NestedMonomer { pos: usize },
    /// Two consecutive tokens whose kinds may not be adjacent.
    IllegalTokenPair {
        pos: usize,
        left: TokenKind,
        right: TokenKind,
    },
    /// The structure starts with a token kind that cannot open a structure.
    InvalidFirstToken { pos: usize, kind: TokenKind },
    /// The structure ends with a token kind that cannot close a structure.
    InvalidLastToken { pos: usize, kind: TokenKind },
    /// A particle name that is not in the caller-supplied set of available
    /// particles.
    UndefinedParticle { name: String },
    /// The structure resolves into two or more disconnected pieces.
    DisconnectedStructure,
    /// Text between `<...>` part blocks that is neither a repeat count nor
    /// whitespace.
    TextOutsidePart { pos: usize },
}

impl fmt::Display for SpicesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty SPICES string"),
            Self::InvalidCharacter { pos, ch } => {
                write!(f, "invalid character '{}' at position {}", ch, pos)
            }
            Self::WhitespaceInToken { pos } => {
                write!(f, "whitespace inside a name or number at position {}", pos)
            }
            Self::InvalidParticleName { pos, name } => {
                write!(f, "invalid particle name '{}' at position {}", name, pos)
            }
            Self::InvalidMonomerName { pos } => {
                write!(f, "'#' not followed by a monomer name at position {}", pos)
            }
            Self::NumberOverflow { pos } => write!(f, "number overflow at position {}", pos),
            Self::ZeroRepeatCount { pos } => {
                write!(f, "repeat count of zero at position {}", pos)
            }
            Self::MissingCloseParen { pos } => {
                write!(f, "missing closing normal bracket for '(' at position {}", pos)
            }
            Self::MissingOpenParen { pos } => {
                write!(f, "missing opening normal bracket for ')' at position {}", pos)
            }
            Self::EmptyParentheses { pos } => {
                write!(f, "empty normal brackets at position {}", pos)
            }
            Self::MissingCloseCurly { pos } => {
                write!(f, "missing closing curly bracket for '{{' at position {}", pos)
            }
            Self::MissingOpenCurly { pos } => {
                write!(f, "missing opening curly bracket for '}}' at position {}", pos)
            }
            Self::EmptyCurlyBraces { pos } => {
                write!(f, "empty curly brackets at position {}", pos)
            }
            Self::MissingCloseSquare { pos } => {
                write!(f, "missing closing square bracket for '[' at position {}", pos)
            }
            Self::MissingOpenSquare { pos } => {
                write!(f, "missing opening square bracket for ']' at position {}", pos)
            }
            Self::EmptySquareBrackets { pos } => {
                write!(f, "empty square brackets at position {}", pos)
            }
            Self::MissingCloseAngle { pos } => {
                write!(f, "missing closing angle bracket for '<' at position {}", pos)
            }
            Self::MissingOpenAngle { pos } => {
                write!(f, "missing opening angle bracket for '>' at position {}", pos)
            }
            Self::EmptyAngleBrackets { pos } => {
                write!(f, "empty angle brackets at position {}", pos)
            }
            Self::InvalidTagContent { pos, text } => {
                write!(f, "invalid tag '[{}]' at position {}", text, pos)
            }
            Self::UnpairedBackboneQuote { pos } => {
                write!(f, "unpaired backbone-index quote at position {}", pos)
            }
            Self::InvalidBackboneIndex { pos } => {
                write!(f, "malformed backbone index at position {}", pos)
            }
            Self::ZeroBackboneIndex { pos } => {
                write!(f, "backbone index of zero at position {}", pos)
            }
            Self::DuplicateBackboneIndex { index } => {
                write!(f, "duplicate backbone index {}", index)
            }
            Self::MissingRingClosure { tag } => {
                write!(f, "missing ring closure for tag {}", tag)
            }
            Self::TooManyRingClosures { tag } => {
                write!(f, "ring-closure tag {} occurs more than twice", tag)
            }
            Self::MultipleStartTags { pos } => {
                write!(f, "more than one [START] tag (position {})", pos)
            }
            Self::MultipleEndTags { pos } => {
                write!(f, "more than one [END] tag (position {})", pos)
            }
            Self::StartWithoutEnd => write!(f, "[START] tag without [END]"),
            Self::EndWithoutStart => write!(f, "[END] tag without [START]"),
            Self::MissingHeadTag { pos } => {
                write!(f, "monomer at position {} has no [HEAD] tag", pos)
            }
            Self::MissingTailTag { pos } => {
                write!(f, "monomer at position {} has no [TAIL] tag", pos)
            }
            Self::MultipleHeadTags { pos } => {
                write!(f, "monomer has more than one [HEAD] tag (position {})", pos)
            }
            Self::MultipleTailTags { pos } => {
                write!(f, "monomer has more than one [TAIL] tag (position {})", pos)
            }
            Self::MisplacedTag { pos, kind } => {
                write!(f, "{} tag not allowed at position {}", kind, pos)
            }
            Self::NestedMonomer { pos } => {
                write!(f, "monomer nested inside a monomer at position {}", pos)
            }
            Self::IllegalTokenPair { pos, left, right } => {
                write!(f, "{} may not follow {} at position {}", right, left, pos)
            }
            Self::InvalidFirstToken { pos, kind } => {
                write!(f, "structure may not start with {} (position {})", kind, pos)
            }
            Self::InvalidLastToken { pos, kind } => {
                write!(f, "structure may not end with {} (position {})", kind, pos)
            }
            Self::UndefinedParticle { name } => {
                write!(f, "particle '{}' is not an available particle", name)
            }
            Self::DisconnectedStructure => write!(f, "structure has disconnected parts"),
            Self::TextOutsidePart { pos } => {
                write!(f, "unexpected text outside <...> parts at position {}", pos)
            }
        }
    }
}

impl std::error::Error for SpicesError {}
