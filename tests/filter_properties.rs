// tests/filter_properties.rs
//
// Filter-pass properties over a small hand-built table, no UI involved.
use la_search::data::export::to_csv_text;
use la_search::data::filter::{CategoryFilter, FilterCriteria, Range, apply};
use la_search::data::loader::{load_reader, parse_text};
use la_search::data::model::{Category, Dataset, FoodRecord};

fn oils() -> Vec<FoodRecord> {
    vec![
        FoodRecord::new("Corn Oil", 60.0, 90.0, 66.7, Category::HighLa),
        FoodRecord::new("Olive Oil", 8.0, 90.0, 8.9, Category::LowLa),
    ]
}

fn pantry() -> Vec<FoodRecord> {
    vec![
        FoodRecord::new("Safflower Oil", 659.5, 884.0, 74.6, Category::HighLa),
        FoodRecord::new("Butter, salted", 20.1, 717.0, 2.8, Category::LowLa),
        FoodRecord::new("Walnuts, english", 342.7, 654.0, 52.4, Category::HighLa),
        FoodRecord::new("Macadamia Nuts", 12.9, 718.0, 1.8, Category::LowLa),
        FoodRecord::new("Tofu, firm", 34.1, 144.0, 23.7, Category::HighLa),
        FoodRecord::new("Coconut Oil", 15.2, 892.0, 1.7, Category::LowLa),
        FoodRecord::new("Pecans", 185.9, 691.0, 26.9, Category::HighLa),
    ]
}

fn criteria_grid() -> Vec<FilterCriteria> {
    let mut grid = vec![FilterCriteria::default()];
    for category in CategoryFilter::OPTIONS {
        for query in ["", "oil", "NUT", "zzz"] {
            grid.push(FilterCriteria {
                category,
                query: query.into(),
                cal: Range::new(100.0, 800.0),
                ..Default::default()
            });
        }
    }
    grid.push(FilterCriteria {
        percent: Range::new(20.0, 60.0),
        la_cal: Range::new(30.0, 400.0),
        ..Default::default()
    });
    grid
}

#[test]
fn corn_and_olive_oil_examples() {
    let d = oils();

    let low = FilterCriteria {
        category: CategoryFilter::Only(Category::LowLa),
        ..Default::default()
    };
    let view = apply(&d, &low);
    assert_eq!(view.len(), 1);
    assert_eq!(view.rows()[0].food.as_deref(), Some("Olive Oil"));

    let oil = FilterCriteria {
        query: "oil".into(),
        ..Default::default()
    };
    assert_eq!(apply(&d, &oil).len(), 2);

    let lo_la = FilterCriteria {
        la_cal: Range::new(0.0, 10.0),
        ..Default::default()
    };
    let view = apply(&d, &lo_la);
    assert_eq!(view.len(), 1);
    assert_eq!(view.rows()[0].food.as_deref(), Some("Olive Oil"));

    let inverted = FilterCriteria {
        la_cal: Range::new(10.0, 0.0),
        ..Default::default()
    };
    assert_eq!(apply(&d, &inverted).len(), 0);
}

#[test]
fn unbounded_criteria_return_everything_in_order() {
    let d = pantry();
    let view = apply(&d, &FilterCriteria::default());
    assert_eq!(view.to_records(), d);
}

#[test]
fn result_is_an_ordered_subsequence() {
    let d = pantry();
    for criteria in criteria_grid() {
        let view = apply(&d, &criteria);
        let positions: Vec<usize> = view
            .iter()
            .map(|r| d.iter().position(|x| std::ptr::eq(x, r)).unwrap())
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "reordered under {criteria:?}"
        );
    }
}

#[test]
fn refiltering_a_view_changes_nothing() {
    let d = pantry();
    for criteria in criteria_grid() {
        let once = apply(&d, &criteria);
        let twice = apply(once.iter(), &criteria);
        assert_eq!(once, twice, "not idempotent under {criteria:?}");
    }
}

#[test]
fn export_round_trips_through_the_loader() {
    let d = pantry();
    for criteria in criteria_grid() {
        let view = apply(&d, &criteria);
        let text = to_csv_text(&view).unwrap();
        let reparsed = parse_text(&text).unwrap();
        let again = apply(&reparsed, &criteria);
        assert_eq!(again.len(), view.len());
        assert_eq!(again.to_records(), view.to_records());
    }
}

#[test]
fn export_round_trips_padded_and_blank_names() {
    let mut padded = FoodRecord::new("x", 60.0, 90.0, 66.7, Category::HighLa);
    padded.food = Some("  Corn Oil ".to_string());
    let mut blank = FoodRecord::new("x", 8.0, 90.0, 8.9, Category::LowLa);
    blank.food = Some(String::new());
    let records = vec![
        padded,
        blank,
        FoodRecord::new(" Olive Oil", 8.0, 90.0, 8.9, Category::LowLa),
        FoodRecord::new("", 1.0, 2.0, 3.0, Category::LowLa),
    ];
    let ds = Dataset::from_records(records).unwrap();

    for query in ["", " corn", "corn", "OIL"] {
        let criteria = FilterCriteria {
            query: query.into(),
            ..Default::default()
        };
        let view = ds.evaluate(&criteria);
        let reparsed = parse_text(&to_csv_text(&view).unwrap()).unwrap();
        let again = apply(&reparsed, &criteria);
        assert_eq!(again.len(), view.len(), "query {query:?}");
        assert_eq!(again.to_records(), view.to_records(), "query {query:?}");
    }
}

#[test]
fn dataset_bounds_drive_the_default_view() {
    let text = "\
food,la_cal,cal,percent,category
Corn Oil,60,90,66.7,High LA
Olive Oil,8,90,8.9,Low LA
Ghost,,,,
";
    let ds = load_reader(text.as_bytes()).unwrap();
    assert_eq!(ds.bounds().la_cal, Range::new(8.0, 60.0));
    assert_eq!(ds.bounds().percent, Range::new(8.9, 66.7));

    let view = ds.evaluate(&ds.default_criteria());
    assert_eq!(view.len(), 2);
    assert_eq!(ds.report().malformed_numeric, 1);
}

#[test]
fn empty_dataset_fails_fast() {
    let err = Dataset::from_records(Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "no data available");
}
