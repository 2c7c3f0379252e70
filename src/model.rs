use std::fmt;

/// Selects which of the three shapes an extractor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Spec,
    Descr,
    Images,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Spec => "spec",
            Mode::Descr => "descr",
            Mode::Images => "images",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specification table of a product: parameters aligned positionally with values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecRecord {
    pub parameters: Vec<String>,
    pub values: Vec<String>,
}

/// How an extracted collection should be treated by the save steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// Data present and usable
    Some(usize),
    /// Nothing matched on the page
    Empty,
    /// Parameters and values do not line up
    Mismatched { parameters: usize, values: usize },
}

impl SpecRecord {
    pub fn new(parameters: Vec<String>, values: Vec<String>) -> Self {
        Self { parameters, values }
    }

    pub fn push(&mut self, parameter: impl Into<String>, value: impl Into<String>) {
        self.parameters.push(parameter.into());
        self.values.push(value.into());
    }

    /// Number of rows when paired, otherwise the shorter side.
    pub fn len(&self) -> usize {
        self.parameters.len().min(self.values.len())
    }

    /// True when either side is empty; such a record is never written.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() || self.values.is_empty()
    }

    pub fn is_paired(&self) -> bool {
        self.parameters.len() == self.values.len()
    }

    pub fn status(&self) -> Found {
        if self.is_empty() {
            Found::Empty
        } else if !self.is_paired() {
            Found::Mismatched {
                parameters: self.parameters.len(),
                values: self.values.len(),
            }
        } else {
            Found::Some(self.len())
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .zip(self.values.iter())
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

/// Status of a plain sequence (descriptions or image references).
pub fn found<T>(items: &[T]) -> Found {
    if items.is_empty() {
        Found::Empty
    } else {
        Found::Some(items.len())
    }
}

/// One of the three normalized shapes returned by an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Spec(SpecRecord),
    Descr(Vec<String>),
    Images(Vec<String>),
}

impl Extraction {
    pub fn mode(&self) -> Mode {
        match self {
            Extraction::Spec(_) => Mode::Spec,
            Extraction::Descr(_) => Mode::Descr,
            Extraction::Images(_) => Mode::Images,
        }
    }

    pub fn status(&self) -> Found {
        match self {
            Extraction::Spec(spec) => spec.status(),
            Extraction::Descr(items) | Extraction::Images(items) => found(items),
        }
    }
}
