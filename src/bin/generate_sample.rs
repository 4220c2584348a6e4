use std::path::PathBuf;

use anyhow::{Context, Result};

use la_search::data::model::{COLUMNS, Category, FoodRecord};

/// Foods with typical total kcal/100 g and linoleic acid share of calories (%).
const FOODS: &[(&str, f64, f64)] = &[
    ("Safflower Oil", 884.0, 74.6),
    ("Sunflower Oil", 884.0, 65.7),
    ("Corn Oil", 900.0, 53.2),
    ("Soybean Oil", 884.0, 50.4),
    ("Canola Oil", 884.0, 18.6),
    ("Olive Oil", 884.0, 9.8),
    ("Coconut Oil", 892.0, 1.7),
    ("Butter, salted", 717.0, 2.8),
    ("Walnuts, english", 654.0, 52.4),
    ("Pecans", 691.0, 26.9),
    ("Almonds", 579.0, 19.0),
    ("Macadamia Nuts", 718.0, 1.8),
    ("Sunflower Seeds, dried", 584.0, 35.5),
    ("Chicken, thigh, with skin", 229.0, 11.9),
    ("Beef, ground, 85% lean", 215.0, 1.6),
    ("Salmon, Atlantic, farmed", 208.0, 4.4),
    ("Egg, whole, raw", 143.0, 9.9),
    ("Avocado", 160.0, 9.2),
    ("Oats, rolled", 379.0, 8.9),
    ("Tofu, firm", 144.0, 23.7),
];

/// Share of calories from LA at or above which a food counts as "High LA".
const HIGH_LA_THRESHOLD: f64 = 10.0;

/// Deterministic multiplicative noise around 1.0, driven by splitmix64 so
/// the same seed always writes the same file.
struct Jitter {
    seed: u64,
    spread: f64,
}

impl Jitter {
    fn new(seed: u64, spread: f64) -> Self {
        Self { seed, spread }
    }

    /// Next factor in `[1 - spread, 1 + spread]`.
    fn factor(&mut self) -> f64 {
        self.seed = self.seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.seed;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        let unit = (z >> 11) as f64 / (1u64 << 53) as f64;
        1.0 + self.spread * (2.0 * unit - 1.0)
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn generate(variants: usize, cal_noise: &mut Jitter, la_noise: &mut Jitter) -> Vec<FoodRecord> {
    let mut records = Vec::with_capacity(FOODS.len() * variants);
    for &(food, cal, percent) in FOODS {
        for v in 0..variants {
            let name = if v == 0 {
                food.to_string()
            } else {
                format!("{food} (sample {v})")
            };
            let cal = round1(cal * cal_noise.factor());
            let percent = round1((percent * la_noise.factor()).clamp(0.0, 100.0));
            let la_cal = round1(cal * percent / 100.0);
            let category = if percent >= HIGH_LA_THRESHOLD {
                Category::HighLa
            } else {
                Category::LowLa
            };
            records.push(FoodRecord::new(&name, la_cal, cal, percent, category));
        }
    }
    records
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = PathBuf::from(
        args.next()
            .unwrap_or_else(|| "linoleic_acid_data_combined.csv".to_string()),
    );
    let variants: usize = match args.next() {
        Some(v) => v.parse().with_context(|| format!("invalid variant count '{v}'"))?,
        None => 3,
    };

    let mut cal_noise = Jitter::new(42, 0.05);
    let mut la_noise = Jitter::new(7, 0.15);
    let records = generate(variants.max(1), &mut cal_noise, &mut la_noise);

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(COLUMNS)?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    println!("Wrote {} foods to {}", records.len(), output_path.display());
    Ok(())
}
