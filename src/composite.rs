//! Multi-part assemblies and the particle matrix.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::coords;
use crate::notation::{parse_part, parse_part_with, SpicesError};
use crate::unit::ParsedUnit;

/// A parser for whole SPICES strings, including `<...>` assemblies.
///
/// Parsed part bodies are cached per parser instance, so an assembly that
/// repeats a body (`<A-B>` appearing twice, or many strings sharing parts)
/// resolves each distinct body once and shares the [`ParsedUnit`] behind an
/// `Arc`. The cache is instance-local; two parsers never observe each
/// other's results.
pub struct SpicesParser {
    available: Option<HashSet<String>>,
    cache: RwLock<HashMap<String, Arc<ParsedUnit>>>,
}

impl SpicesParser {
    pub fn new() -> Self {
        Self {
            available: None,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// A parser that rejects particle names outside `names`.
    pub fn with_available_particles<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            available: Some(names.into_iter().collect()),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn parse(&self, input: &str) -> Result<Spices, SpicesError> {
        let mut parts = Vec::new();
        for (count, body) in split_parts(input)? {
            parts.push((count, self.part(&body)?));
        }
        Ok(Spices::from_parts(parts))
    }

    fn part(&self, body: &str) -> Result<Arc<ParsedUnit>, SpicesError> {
        if let Ok(cache) = self.cache.read() {
            if let Some(unit) = cache.get(body) {
                return Ok(Arc::clone(unit));
            }
        }
        let unit = Arc::new(match &self.available {
            Some(set) => parse_part_with(body, set)?,
            None => parse_part(body)?,
        });
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(body.to_string(), Arc::clone(&unit));
        }
        Ok(unit)
    }
}

impl Default for SpicesParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a whole SPICES string with a throwaway parser.
pub fn parse_spices(input: &str) -> Result<Spices, SpicesError> {
    SpicesParser::new().parse(input)
}

/// Splits a SPICES string into repeat-counted part bodies.
///
/// A string without angle brackets is one part. Otherwise the string is a
/// sequence of `<body>` blocks, each optionally prefixed by a repeat count,
/// with nothing but whitespace in between.
fn split_parts(input: &str) -> Result<Vec<(usize, String)>, SpicesError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SpicesError::EmptyInput);
    }
    if !trimmed.contains('<') && !trimmed.contains('>') {
        return Ok(vec![(1, trimmed.to_string())]);
    }

    let chars: Vec<char> = input.chars().collect();
    let mut parts = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch.is_whitespace() {
            i += 1;
        } else if ch.is_ascii_digit() {
            let start = i;
            let mut count: usize = 0;
            while i < chars.len() && chars[i].is_ascii_digit() {
                count = count
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(chars[i] as usize - '0' as usize))
                    .ok_or(SpicesError::NumberOverflow { pos: start })?;
                i += 1;
            }
            if count == 0 {
                return Err(SpicesError::ZeroRepeatCount { pos: start });
            }
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            if chars.get(i) != Some(&'<') {
                return Err(SpicesError::TextOutsidePart { pos: start });
            }
            let (body, next) = read_part(&chars, i)?;
            parts.push((count, body));
            i = next;
        } else if ch == '<' {
            let (body, next) = read_part(&chars, i)?;
            parts.push((1, body));
            i = next;
        } else if ch == '>' {
            return Err(SpicesError::MissingOpenAngle { pos: i });
        } else {
            return Err(SpicesError::TextOutsidePart { pos: i });
        }
    }
    Ok(parts)
}

fn read_part(chars: &[char], open: usize) -> Result<(String, usize), SpicesError> {
    let mut i = open + 1;
    let mut body = String::new();
    loop {
        match chars.get(i) {
            None | Some('<') => return Err(SpicesError::MissingCloseAngle { pos: open }),
            Some('>') => break,
            Some(&c) => {
                body.push(c);
                i += 1;
            }
        }
    }
    if body.trim().is_empty() {
        return Err(SpicesError::EmptyAngleBrackets { pos: open });
    }
    Ok((body, i + 1))
}

/// A fully parsed SPICES string: the sequence of parts with their repeat
/// counts, plus assembly-level aggregates.
#[derive(Debug, Clone)]
pub struct Spices {
    parts: Vec<(usize, Arc<ParsedUnit>)>,
    frequencies: BTreeMap<String, usize>,
    monomer_names: Vec<String>,
    particle_count: usize,
    max_degree: usize,
}

impl Spices {
    fn from_parts(parts: Vec<(usize, Arc<ParsedUnit>)>) -> Self {
        let mut frequencies = BTreeMap::new();
        let mut monomer_names: Vec<String> = Vec::new();
        let mut particle_count = 0;
        let mut max_degree = 0;
        for (count, unit) in &parts {
            particle_count += count * unit.particle_count();
            for i in 0..unit.particle_count() {
                *frequencies.entry(unit.name(i).to_string()).or_insert(0) += count;
                max_degree = max_degree.max(unit.degree(i));
            }
            for name in unit.monomer_names() {
                if !monomer_names.contains(name) {
                    monomer_names.push(name.clone());
                }
            }
        }
        Self {
            parts,
            frequencies,
            monomer_names,
            particle_count,
            max_degree,
        }
    }

    /// The distinct parts in order, each with its repeat count.
    pub fn parts(&self) -> impl Iterator<Item = (usize, &ParsedUnit)> + '_ {
        self.parts.iter().map(|(count, unit)| (*count, &**unit))
    }

    /// Total number of part instances, repeats included.
    pub fn part_count(&self) -> usize {
        self.parts.iter().map(|(count, _)| count).sum()
    }

    /// How often each particle name occurs across all part instances. A
    /// part repeated N times contributes N times its particle multiset.
    pub fn frequencies(&self) -> &BTreeMap<String, usize> {
        &self.frequencies
    }

    /// Monomer names referenced anywhere in the assembly, in order of
    /// first appearance.
    pub fn monomer_names(&self) -> &[String] {
        &self.monomer_names
    }

    /// Total particles across all part instances.
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// The largest particle degree anywhere in the assembly.
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// The particle matrix with default options.
    pub fn matrix(&self) -> Vec<Vec<String>> {
        self.matrix_with(&MatrixOptions::default())
    }

    /// One row per particle instance: running number, name, backbone index,
    /// x, y, z, then the neighbor offsets (neighbor number minus own
    /// number, ascending). Coordinate cells are empty unless
    /// [`MatrixOptions::coordinates`] is set.
    pub fn matrix_with(&self, options: &MatrixOptions) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.particle_count);
        let total = self.particle_count as f64;
        let mut number = options.start_number;
        let mut consumed = 0usize;

        for (count, unit) in &self.parts {
            for _ in 0..*count {
                let placed = options.coordinates.as_ref().map(|spec| {
                    let lo = consumed as f64 / total;
                    let hi = (consumed + unit.particle_count()) as f64 / total;
                    coords::assign(
                        unit,
                        lerp(spec.first, spec.last, lo),
                        lerp(spec.first, spec.last, hi),
                        spec.bond_length,
                    )
                });
                for i in 0..unit.particle_count() {
                    let mut row = vec![
                        (number + i).to_string(),
                        unit.name(i).to_string(),
                        unit.backbone_index(i).to_string(),
                    ];
                    match &placed {
                        Some(c) => {
                            row.push(format!("{:.3}", c[i][0]));
                            row.push(format!("{:.3}", c[i][1]));
                            row.push(format!("{:.3}", c[i][2]));
                        }
                        None => row.extend([String::new(), String::new(), String::new()]),
                    }
                    for &nb in unit.neighbors(i) {
                        row.push((nb as isize - i as isize).to_string());
                    }
                    rows.push(row);
                }
                number += unit.particle_count();
                consumed += unit.particle_count();
            }
        }
        rows
    }
}

/// Options for [`Spices::matrix_with`].
#[derive(Debug, Clone)]
pub struct MatrixOptions {
    /// Number assigned to the first particle row.
    pub start_number: usize,
    /// When set, fill the x/y/z columns via [`coords::assign`], splitting
    /// the `first`..`last` stretch between parts by particle share.
    pub coordinates: Option<CoordinateSpec>,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            start_number: 1,
            coordinates: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CoordinateSpec {
    pub first: [f64; 3],
    pub last: [f64; 3],
    pub bond_length: f64,
}

fn lerp(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
