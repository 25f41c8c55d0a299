use std::fmt;
use std::io::{self, Write};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Category – magnitude severity buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Light,
    Moderate,
    Major,
    Strong,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::Light,
        Category::Moderate,
        Category::Major,
        Category::Strong,
    ];

    /// Lowercase key, e.g. `"light"`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Light => "light",
            Category::Moderate => "moderate",
            Category::Major => "major",
            Category::Strong => "strong",
        }
    }

    /// Capitalised label used in reports and chart axes.
    pub fn label(self) -> &'static str {
        match self {
            Category::Light => "Light",
            Category::Moderate => "Moderate",
            Category::Major => "Major",
            Category::Strong => "Strong",
        }
    }

    /// Bucket for a magnitude, if any.
    ///
    /// Ranges are inclusive at both ends. Magnitudes below 4.5, those
    /// falling between two ranges (4.95, 5.95, ...) and NaN have no bucket.
    pub fn of(magnitude: f64) -> Option<Category> {
        if (4.5..=4.9).contains(&magnitude) {
            Some(Category::Light)
        } else if (5.0..=5.9).contains(&magnitude) {
            Some(Category::Moderate)
        } else if (6.0..=6.9).contains(&magnitude) {
            Some(Category::Major)
        } else if magnitude >= 7.0 {
            Some(Category::Strong)
        } else {
            None
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// CategoryCounts – frequency of each bucket
// ---------------------------------------------------------------------------

/// Number of values in each [`Category`]. Every category is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [u64; 4],
}

impl CategoryCounts {
    pub fn from_counts(light: u64, moderate: u64, major: u64, strong: u64) -> Self {
        CategoryCounts {
            counts: [light, moderate, major, strong],
        }
    }

    pub fn get(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    /// `(category, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Sum over all buckets. Excluded values are not part of it.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Signed change per category going from `self` to `later`.
    pub fn difference(&self, later: &CategoryCounts) -> Vec<(Category, i64)> {
        self.iter()
            .map(|(c, before)| (c, later.get(c) as i64 - before as i64))
            .collect()
    }

    /// Write the fixed-width frequency table, one line per category.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    fn increment(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, count) in self.iter() {
            writeln!(f, "{:<9} : {:>4}", category.label(), count)?;
        }
        Ok(())
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.key(), &count)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Count `magnitudes` per category, printing the report to stdout when
/// `emit_report` is set.
pub fn categorize(magnitudes: &[f64], emit_report: bool) -> CategoryCounts {
    let counts = count_categories(magnitudes);
    if emit_report {
        print!("{counts}");
    }
    counts
}

/// Pure counting pass behind [`categorize`].
pub fn count_categories(magnitudes: &[f64]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for &mag in magnitudes {
        if let Some(category) = Category::of(mag) {
            counts.increment(category);
        }
    }
    counts
}
