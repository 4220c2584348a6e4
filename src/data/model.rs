use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DataError;
use super::filter::{CategoryFilter, FilterCriteria, FilteredView, Range, apply};

/// Column order of the input file and of every export.
pub const COLUMNS: [&str; 5] = ["food", "la_cal", "cal", "percent", "category"];

// ---------------------------------------------------------------------------
// Category – "High LA" / "Low LA"
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "High LA")]
    HighLa,
    #[serde(rename = "Low LA")]
    LowLa,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::HighLa, Category::LowLa];

    pub fn label(self) -> &'static str {
        match self {
            Category::HighLa => "High LA",
            Category::LowLa => "Low LA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// FoodRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single food (one row of the source CSV).
///
/// Cells that are empty or cannot be parsed are kept as `None` so that one
/// bad value never sinks the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(default)]
    pub food: Option<String>,
    /// Calories from linoleic acid per 100 g.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub la_cal: Option<f64>,
    /// Total calories per 100 g.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub cal: Option<f64>,
    /// Share of calories from linoleic acid, 0–100.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub percent: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub category: Option<Category>,
}

impl FoodRecord {
    /// The name is stored trimmed; a blank name is stored as absent, the same
    /// way the loader reads it back.
    pub fn new(food: &str, la_cal: f64, cal: f64, percent: f64, category: Category) -> Self {
        Self {
            food: clean_name(food),
            la_cal: Some(la_cal),
            cal: Some(cal),
            percent: Some(percent),
            category: Some(category),
        }
    }

    /// Value of a numeric column, if well-formed.
    pub fn value(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::LaCal => self.la_cal,
            NumericField::Cal => self.cal,
            NumericField::Percent => self.percent,
        }
    }

    /// Whether all three numeric columns hold finite values.
    pub fn has_valid_numbers(&self) -> bool {
        NumericField::ALL
            .iter()
            .all(|&f| self.value(f).is_some_and(f64::is_finite))
    }

    /// Bring a record into the shape the CSV reader produces: trimmed food
    /// name (blank → absent) and no non-finite numbers (`NaN`, `inf`).
    pub(crate) fn normalize(&mut self) {
        self.food = self.food.as_deref().and_then(clean_name);
        for slot in [&mut self.la_cal, &mut self.cal, &mut self.percent] {
            if slot.is_some_and(|v| !v.is_finite()) {
                *slot = None;
            }
        }
    }
}

fn clean_name(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

// ---------------------------------------------------------------------------
// NumericField – the three range-filterable columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    LaCal,
    Cal,
    Percent,
}

impl NumericField {
    pub const ALL: [NumericField; 3] = [NumericField::LaCal, NumericField::Cal, NumericField::Percent];

    pub fn column(self) -> &'static str {
        match self {
            NumericField::LaCal => "la_cal",
            NumericField::Cal => "cal",
            NumericField::Percent => "percent",
        }
    }

    /// Human-readable name used by the slider labels.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::LaCal => "LA Calories",
            NumericField::Cal => "Total Calories",
            NumericField::Percent => "Percent LA",
        }
    }
}

// ---------------------------------------------------------------------------
// Range defaults and load report
// ---------------------------------------------------------------------------

/// Dataset-wide min/max of each numeric column; bounds of the range controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeDefaults {
    pub la_cal: Range,
    pub cal: Range,
    pub percent: Range,
}

impl RangeDefaults {
    /// Exact min/max over rows whose numeric columns are all well-formed.
    pub fn derive(records: &[FoodRecord]) -> Result<Self, DataError> {
        let mut valid = records.iter().filter(|r| r.has_valid_numbers());
        let first = valid.next().ok_or(DataError::NoData)?;

        let point = |r: &FoodRecord, f| {
            let v = r.value(f).unwrap_or_default();
            Range::new(v, v)
        };
        let mut bounds = RangeDefaults {
            la_cal: point(first, NumericField::LaCal),
            cal: point(first, NumericField::Cal),
            percent: point(first, NumericField::Percent),
        };

        for record in valid {
            for field in NumericField::ALL {
                let v = record.value(field).unwrap_or_default();
                let range = bounds.get_mut(field);
                range.min = range.min.min(v);
                range.max = range.max.max(v);
            }
        }
        Ok(bounds)
    }

    pub fn get(&self, field: NumericField) -> Range {
        match field {
            NumericField::LaCal => self.la_cal,
            NumericField::Cal => self.cal,
            NumericField::Percent => self.percent,
        }
    }

    fn get_mut(&mut self, field: NumericField) -> &mut Range {
        match field {
            NumericField::LaCal => &mut self.la_cal,
            NumericField::Cal => &mut self.cal,
            NumericField::Percent => &mut self.percent,
        }
    }
}

/// Data-quality counters gathered at load time. Never fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
    /// Rows with at least one missing or unparsable numeric cell.
    pub malformed_numeric: usize,
    /// Rows whose category is missing or not a known label.
    pub unknown_category: usize,
    pub missing_food: usize,
}

impl LoadReport {
    pub fn from_records(records: &[FoodRecord]) -> Self {
        let mut report = LoadReport {
            rows: records.len(),
            ..Default::default()
        };
        for r in records {
            if !r.has_valid_numbers() {
                report.malformed_numeric += 1;
            }
            if r.category.is_none() {
                report.unknown_category += 1;
            }
            if r.food.is_none() {
                report.missing_food += 1;
            }
        }
        report
    }

    pub fn has_issues(&self) -> bool {
        self.malformed_numeric + self.unknown_category + self.missing_food > 0
    }
}

// ---------------------------------------------------------------------------
// Dataset – the loaded, immutable table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once built; filtering only ever
/// produces views over it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<FoodRecord>,
    bounds: RangeDefaults,
    report: LoadReport,
}

impl Dataset {
    /// Build the dataset and derive its range defaults.
    ///
    /// Fails with [`DataError::NoData`] if there is no row to derive bounds
    /// from. Records are normalized first, so a later export loads back to
    /// the same rows.
    pub fn from_records(mut records: Vec<FoodRecord>) -> Result<Self, DataError> {
        records.iter_mut().for_each(FoodRecord::normalize);
        let bounds = RangeDefaults::derive(&records)?;
        let report = LoadReport::from_records(&records);
        Ok(Dataset {
            records,
            bounds,
            report,
        })
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn bounds(&self) -> &RangeDefaults {
        &self.bounds
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Criteria the UI starts from: every category, full ranges, no query.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: CategoryFilter::All,
            la_cal: self.bounds.la_cal,
            cal: self.bounds.cal,
            percent: self.bounds.percent,
            query: String::new(),
        }
    }

    /// Run the whole predicate chain over every record.
    pub fn evaluate(&self, criteria: &FilterCriteria) -> FilteredView<'_> {
        apply(&self.records, criteria)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
