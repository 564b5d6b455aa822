use anyhow::{Context, Result};

/// Minimal deterministic PRNG (64-bit LCG), enough to jitter sample figures.
struct SampleRng(u64);

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng(seed.wrapping_mul(2862933555777941757).wrapping_add(3037000493))
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng::new(42);

    let lanes = [
        ("LAGOS", "ABUJA", 720.0),
        ("LAGOS", "KANO", 980.0),
        ("PH", "ABUJA", 620.0),
        ("KANO", "KADUNA", 210.0),
        ("LAGOS", "PH", 610.0),
    ];
    let fleets = ["DAF XF", "MACK GRANITE", "HOWO SINOTRUK"];
    let months = ["JULY", "AUGUST", "SEPTEMBER", "OCTOBER"];

    let output_path = "sample_routes.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "ORIGIN",
        "DESTINATION",
        "Fleet",
        "Month",
        "TRIP RATE",
        "DISPATCH",
        "PROFIT",
        "COMMISSION",
        "COST/LITRE",
    ])?;

    let mut rows = 0usize;
    for month in &months {
        for (origin, destination, km) in &lanes {
            for fleet in &fleets {
                let trips = 1 + (rng.next_f64() * 3.0) as usize;
                for _ in 0..trips {
                    // Rate scales with lane distance; dispatch and profit are
                    // noisy fractions of it.
                    let trip_rate = km * rng.range(650.0, 900.0);
                    let dispatch = trip_rate * rng.range(0.18, 0.28);
                    let profit = trip_rate * rng.range(0.12, 0.30);
                    let commission = trip_rate * 0.01;
                    let cost_per_litre = rng.range(0.95, 1.35);

                    writer.write_record([
                        origin.to_string(),
                        destination.to_string(),
                        fleet.to_string(),
                        month.to_string(),
                        format!("{trip_rate:.0}"),
                        format!("{dispatch:.0}"),
                        format!("{profit:.0}"),
                        format!("{commission:.0}"),
                        format!("{cost_per_litre:.2}"),
                    ])?;
                    rows += 1;
                }
            }
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} route records to {output_path}");
    Ok(())
}
