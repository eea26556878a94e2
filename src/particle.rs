/// Node weight of the particle graph.
///
/// `Particle` stores what the notation says about one particle occurrence —
/// the things you can read straight off the input string. It deliberately
/// omits derived properties like degree or terminal status; those live on
/// [`ParsedUnit`](crate::ParsedUnit), which computes them once from the
/// finished graph.
///
/// # Examples
///
/// ```
/// use spices::Particle;
///
/// let p = Particle {
///     name: "MeOH".into(),
///     backbone_index: 0,
///     is_monomer: false,
/// };
/// assert_eq!(p.name, "MeOH");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Particle {
    /// Particle name as written: uppercase first letter, at most 10
    /// alphanumeric characters.
    pub name: String,
    /// Backbone position tag (`'n'` in the notation). `0` means untagged.
    pub backbone_index: u32,
    /// Whether this node came from a `#Name` monomer reference rather than
    /// a plain particle token.
    pub is_monomer: bool,
}

impl Particle {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            backbone_index: 0,
            is_monomer: false,
        }
    }
}
