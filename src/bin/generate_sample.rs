//! Writes synthetic `earthquakes-2020.csv` and `earthquakes-2021.csv` in the
//! USGS catalogue layout so the comparison can be run offline.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

const COLUMNS: [&str; 22] = [
    "time",
    "latitude",
    "longitude",
    "depth",
    "mag",
    "magType",
    "nst",
    "gap",
    "dmin",
    "rms",
    "net",
    "id",
    "updated",
    "place",
    "type",
    "horizontalError",
    "depthError",
    "magError",
    "magNst",
    "status",
    "locationSource",
    "magSource",
];

const REGIONS: [&str; 6] = [
    "Papua New Guinea",
    "Tonga",
    "Fiji region",
    "Kuril Islands",
    "Puerto Rico region",
    "southern Alaska",
];

const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `(0, 1]`.
    fn next_f64(&mut self) -> f64 {
        ((self.next_u64() >> 11) + 1) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Gutenberg–Richter magnitude above the 4.5 catalogue threshold (b = 1).
fn magnitude(rng: &mut SimpleRng) -> f64 {
    let m = 4.5 - rng.next_f64().log10();
    (m * 10.0).round() / 10.0
}

/// Mostly shallow events, a share pinned at the 10 km default depth.
fn depth(rng: &mut SimpleRng) -> f64 {
    if rng.next_f64() < 0.3 {
        10.0
    } else {
        (-60.0 * rng.next_f64().ln()).min(700.0)
    }
}

/// ISO-8601 timestamp for second `offset` of `year`.
fn timestamp(year: i32, offset: u64) -> String {
    let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
    let month_days = [31, if leap { 29 } else { 28 }, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut day = offset / 86_400;
    let secs = offset % 86_400;
    let mut month = 1;
    for &len in &month_days {
        if day < len {
            break;
        }
        day -= len;
        month += 1;
    }
    format!(
        "{year}-{month:02}-{:02}T{:02}:{:02}:{:02}.000Z",
        day + 1,
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

fn write_catalogue(path: &Path, year: i32, rows: u64, seed: u64) -> Result<()> {
    let mut rng = SimpleRng::new(seed);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(COLUMNS)?;

    let year_secs = 365 * 86_400;
    for i in 0..rows {
        let time = timestamp(year, i * year_secs / rows);
        let mag = magnitude(&mut rng);
        let place = format!(
            "{} km {} of {}",
            rng.range(5.0, 250.0) as u32,
            rng.pick(&DIRECTIONS),
            rng.pick(&REGIONS)
        );
        let id = format!("us{year}{i:06}");

        writer.write_record([
            time.clone(),
            format!("{:.4}", rng.range(-60.0, 60.0)),
            format!("{:.4}", rng.range(-180.0, 180.0)),
            format!("{:.2}", depth(&mut rng)),
            format!("{mag:.1}"),
            if mag >= 5.5 { "mww" } else { "mb" }.to_string(),
            String::new(),
            format!("{}", rng.range(10.0, 200.0) as u32),
            format!("{:.3}", rng.range(0.1, 10.0)),
            format!("{:.2}", rng.range(0.3, 1.4)),
            "us".to_string(),
            id,
            time,
            place,
            "earthquake".to_string(),
            format!("{:.1}", rng.range(3.0, 12.0)),
            format!("{:.1}", rng.range(1.5, 9.0)),
            format!("{:.3}", rng.range(0.02, 0.15)),
            format!("{}", rng.range(10.0, 200.0) as u32),
            "reviewed".to_string(),
            "us".to_string(),
            "us".to_string(),
        ])?;
    }

    writer.flush()?;
    info!("wrote {rows} events to {}", path.display());
    println!("Wrote {rows} events to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    write_catalogue(Path::new("earthquakes-2020.csv"), 2020, 6500, 42)?;
    write_catalogue(Path::new("earthquakes-2021.csv"), 2021, 6700, 2021)?;
    Ok(())
}
