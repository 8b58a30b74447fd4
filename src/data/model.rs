use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Category – one family of exclusion limits
// ---------------------------------------------------------------------------

/// The analysis family a limit curve belongs to.
///
/// The source files key these as `gr` / `hGD` / `exo`; an enum keeps the
/// renderer and the style table honest at compile time instead of via
/// string lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// HAHM 2µ scouting search, five disjoint excluded regions.
    HahmScouting,
    /// Dark SUSY 4µ search. Its source file stores log10(ε²) and is the
    /// only category rescaled before plotting; drawn as a band bounded
    /// above by the top of the y-domain.
    DarkSusy,
    /// HAHM 2µ search (EXO-21-006), one excluded region.
    Hahm,
}

impl Category {
    /// Fixed iteration order, matching the legend order of the source plot.
    pub const ALL: [Category; 3] = [Category::Hahm, Category::DarkSusy, Category::HahmScouting];

    /// Whether this category's y-values are stored as log10(ε²) and need
    /// rescaling to ε before plotting.
    pub fn is_log_eps_squared(self) -> bool {
        matches!(self, Category::DarkSusy)
    }

    /// Whether this category is drawn as a band filled up to the top of
    /// the y-domain rather than as a closed polygon.
    pub fn is_band(self) -> bool {
        matches!(self, Category::DarkSusy)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HahmScouting => "HAHM (scouting)",
            Category::DarkSusy => "Dark SUSY",
            Category::Hahm => "HAHM",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Region – one excluded-parameter-space boundary within a category
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("region identifier {0} outside valid range 1..=5")]
pub struct InvalidRegion(pub u8);

/// Validated region identifier, `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region(u8);

impl Region {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(n: u8) -> Result<Self, InvalidRegion> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Region(n))
        } else {
            Err(InvalidRegion(n))
        }
    }

    /// Compile-time constructor for manifest literals; panics at compile
    /// time (when used in a `const`) on an out-of-range identifier.
    pub const fn literal(n: u8) -> Self {
        assert!(n >= Self::MIN && n <= Self::MAX);
        Region(n)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Dataset – one loaded limit curve
// ---------------------------------------------------------------------------

/// A single (mass, ε) sample of a limit curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An ordered limit curve read from one input file. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    pub fn new(points: Vec<Point>) -> Self {
        Dataset { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(f64, f64)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().map(|(x, y)| Point { x, y }).collect())
    }
}

// ---------------------------------------------------------------------------
// Collection – all curves of one run
// ---------------------------------------------------------------------------

/// All loaded curves, keyed by category and region. Built once by the
/// loader; the transform stage produces a fresh one instead of mutating.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    categories: BTreeMap<Category, BTreeMap<Region, Dataset>>,
}

impl Collection {
    pub fn new() -> Self {
        Collection::default()
    }

    pub fn insert(&mut self, category: Category, region: Region, dataset: Dataset) {
        self.categories
            .entry(category)
            .or_default()
            .insert(region, dataset);
    }

    pub fn get(&self, category: Category, region: Region) -> Option<&Dataset> {
        self.categories.get(&category)?.get(&region)
    }

    /// Iterate every curve as `(category, region, dataset)`.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Region, &Dataset)> {
        self.categories
            .iter()
            .flat_map(|(cat, regions)| regions.iter().map(move |(region, ds)| (*cat, *region, ds)))
    }

    /// Iterate the curves of one category.
    pub fn category(&self, category: Category) -> impl Iterator<Item = (Region, &Dataset)> {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|regions| regions.iter().map(|(region, ds)| (*region, ds)))
    }

    /// Total number of curves across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
