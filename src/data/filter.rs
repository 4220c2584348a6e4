use super::model::{Category, FoodRecord, NumericField};

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// Inclusive `[min, max]` bound on one numeric column.
///
/// A range with `min > max` is valid and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// A missing value never matches.
    pub fn contains(&self, value: Option<f64>) -> bool {
        matches!(value, Some(v) if v >= self.min && v <= self.max)
    }
}

/// Category selector: "All" is a filter-only value, never a record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const OPTIONS: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::HighLa),
        CategoryFilter::Only(Category::LowLa),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, category: Option<Category>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted),
        }
    }
}

/// Everything the user has dialled in, rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub la_cal: Range,
    pub cal: Range,
    pub percent: Range,
    /// Case-insensitive substring of the food name. Blank means no text filter.
    pub query: String,
}

impl Default for FilterCriteria {
    /// Matches every record with well-formed numbers.
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            la_cal: Range::unbounded(),
            cal: Range::unbounded(),
            percent: Range::unbounded(),
            query: String::new(),
        }
    }
}

impl FilterCriteria {
    pub fn range(&self, field: NumericField) -> Range {
        match field {
            NumericField::LaCal => self.la_cal,
            NumericField::Cal => self.cal,
            NumericField::Percent => self.percent,
        }
    }

    pub fn range_mut(&mut self, field: NumericField) -> &mut Range {
        match field {
            NumericField::LaCal => &mut self.la_cal,
            NumericField::Cal => &mut self.cal,
            NumericField::Percent => &mut self.percent,
        }
    }

    /// Whether a single record passes every active predicate.
    pub fn matches(&self, record: &FoodRecord) -> bool {
        TextQuery::new(&self.query).matches(record.food.as_deref()) && self.matches_fields(record)
    }

    fn matches_fields(&self, record: &FoodRecord) -> bool {
        self.category.matches(record.category)
            && NumericField::ALL
                .iter()
                .all(|&f| self.range(f).contains(record.value(f)))
    }
}

/// Lower-cased needle, computed once per filter pass.
struct TextQuery {
    needle: Option<String>,
}

impl TextQuery {
    fn new(query: &str) -> Self {
        let needle = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        Self { needle }
    }

    fn matches(&self, food: Option<&str>) -> bool {
        match (&self.needle, food) {
            (None, _) => true,
            (Some(needle), Some(food)) => food.to_lowercase().contains(needle.as_str()),
            (Some(_), None) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter pass
// ---------------------------------------------------------------------------

/// Ordered result of one filter pass. Borrows from the source records.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a FoodRecord>,
}

impl<'a> FilteredView<'a> {
    /// View over `records` at the given indices, in index order.
    pub fn from_indices(records: &'a [FoodRecord], indices: &[usize]) -> Self {
        Self {
            rows: indices.iter().filter_map(|&i| records.get(i)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a FoodRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn rows(&self) -> &[&'a FoodRecord] {
        &self.rows
    }

    pub fn to_records(&self) -> Vec<FoodRecord> {
        self.rows.iter().map(|&r| r.clone()).collect()
    }
}

/// Keep the records passing every predicate, preserving input order.
///
/// Accepts any sequence of record references, so a view can be narrowed
/// again with `apply(view.iter(), ..)`.
pub fn apply<'a, I>(records: I, criteria: &FilterCriteria) -> FilteredView<'a>
where
    I: IntoIterator<Item = &'a FoodRecord>,
{
    let query = TextQuery::new(&criteria.query);
    FilteredView {
        rows: records
            .into_iter()
            .filter(|r| criteria.matches_fields(r) && query.matches(r.food.as_deref()))
            .collect(),
    }
}

/// Return indices of records that pass all active filters.
pub fn filtered_indices(records: &[FoodRecord], criteria: &FilterCriteria) -> Vec<usize> {
    let query = TextQuery::new(&criteria.query);
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches_fields(r) && query.matches(r.food.as_deref()))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oils() -> Vec<FoodRecord> {
        vec![
            FoodRecord::new("Corn Oil", 60.0, 90.0, 66.7, Category::HighLa),
            FoodRecord::new("Olive Oil", 8.0, 90.0, 8.9, Category::LowLa),
        ]
    }

    fn foods(view: &FilteredView<'_>) -> Vec<String> {
        view.iter().filter_map(|r| r.food.clone()).collect()
    }

    #[test]
    fn category_selects_exact_label() {
        let d = oils();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::LowLa),
            ..Default::default()
        };
        let view = apply(&d, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(foods(&view), ["Olive Oil"]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let d = oils();
        let criteria = FilterCriteria {
            query: "oil".into(),
            ..Default::default()
        };
        assert_eq!(apply(&d, &criteria).len(), 2);

        let criteria = FilterCriteria {
            query: "CORN".into(),
            ..Default::default()
        };
        assert_eq!(foods(&apply(&d, &criteria)), ["Corn Oil"]);
    }

    #[test]
    fn query_is_literal_not_a_pattern() {
        let d = vec![FoodRecord::new("Nuts (mixed)", 30.0, 600.0, 5.0, Category::LowLa)];
        let criteria = FilterCriteria {
            query: "(MIXED".into(),
            ..Default::default()
        };
        assert_eq!(apply(&d, &criteria).len(), 1);
        let criteria = FilterCriteria {
            query: "n.ts".into(),
            ..Default::default()
        };
        assert!(apply(&d, &criteria).is_empty());
    }

    #[test]
    fn blank_query_is_no_text_filter() {
        let d = oils();
        for q in ["", "   ", "\t"] {
            let criteria = FilterCriteria {
                query: q.into(),
                ..Default::default()
            };
            assert_eq!(apply(&d, &criteria).len(), 2, "query {q:?}");
        }
    }

    #[test]
    fn missing_food_never_matches_query() {
        let mut d = oils();
        d[0].food = None;
        let criteria = FilterCriteria {
            query: "oil".into(),
            ..Default::default()
        };
        assert_eq!(foods(&apply(&d, &criteria)), ["Olive Oil"]);
        // ...but passes when no query is set
        assert_eq!(apply(&d, &FilterCriteria::default()).len(), 2);
    }

    #[test]
    fn ranges_are_inclusive() {
        let d = oils();
        let criteria = FilterCriteria {
            la_cal: Range::new(0.0, 10.0),
            ..Default::default()
        };
        assert_eq!(foods(&apply(&d, &criteria)), ["Olive Oil"]);

        let criteria = FilterCriteria {
            la_cal: Range::new(8.0, 60.0),
            percent: Range::new(8.9, 66.7),
            ..Default::default()
        };
        assert_eq!(apply(&d, &criteria).len(), 2);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let d = oils();
        let criteria = FilterCriteria {
            la_cal: Range::new(10.0, 0.0),
            ..Default::default()
        };
        assert!(apply(&d, &criteria).is_empty());
    }

    #[test]
    fn malformed_numbers_fail_every_range() {
        let mut d = oils();
        d[1].cal = None;
        let view = apply(&d, &FilterCriteria::default());
        assert_eq!(foods(&view), ["Corn Oil"]);
    }

    #[test]
    fn unknown_category_only_passes_all() {
        let mut d = oils();
        d[0].category = None;
        assert_eq!(apply(&d, &FilterCriteria::default()).len(), 2);
        for c in Category::ALL {
            let criteria = FilterCriteria {
                category: CategoryFilter::Only(c),
                ..Default::default()
            };
            assert!(apply(&d, &criteria).iter().all(|r| r.category == Some(c)));
        }
    }

    #[test]
    fn indices_agree_with_view() {
        let d = oils();
        let criteria = FilterCriteria {
            percent: Range::new(50.0, 100.0),
            ..Default::default()
        };
        let idx = filtered_indices(&d, &criteria);
        assert_eq!(idx, vec![0]);
        assert_eq!(FilteredView::from_indices(&d, &idx), apply(&d, &criteria));
    }

    #[test]
    fn matches_agrees_with_apply() {
        let d = oils();
        let criteria = FilterCriteria {
            query: "olive".into(),
            ..Default::default()
        };
        assert!(!criteria.matches(&d[0]));
        assert!(criteria.matches(&d[1]));
    }
}
