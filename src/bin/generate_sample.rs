use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const N_STEPS: usize = 500;

/// Logistic map `x ← r·x·(1 − x)`; chaotic for r ≈ 3.9.
fn logistic_map(r: f64, x0: f64, n: usize) -> Vec<f64> {
    let mut x = x0;
    (0..n)
        .map(|_| {
            let current = x;
            x = r * x * (1.0 - x);
            current
        })
        .collect()
}

fn ramp(step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * step).collect()
}

fn noisy_sine(period: f64, noise_level: f64, n: usize, rng: &mut SimpleRng) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * i as f64 / period;
            phase.sin() + rng.gauss(0.0, noise_level)
        })
        .collect()
}

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_csv(path: &str, columns: &[(&str, Vec<f64>)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record(columns.iter().map(|(name, _)| *name))?;
    for row in 0..N_STEPS {
        writer.write_record(columns.iter().map(|(_, values)| values[row].to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &str, columns: &[(&str, Vec<f64>)]) -> Result<()> {
    let schema = Arc::new(Schema::new(
        columns
            .iter()
            .map(|(name, _)| Field::new(*name, DataType::Float64, false))
            .collect::<Vec<_>>(),
    ));
    let arrays: Vec<ArrayRef> = columns
        .iter()
        .map(|(_, values)| Arc::new(Float64Array::from(values.clone())) as ArrayRef)
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let columns = vec![
        ("logistic", logistic_map(3.9, 0.2, N_STEPS)),
        ("ramp", ramp(1e-8, N_STEPS)),
        ("noisy_sine", noisy_sine(50.0, 0.05, N_STEPS, &mut rng)),
    ];

    write_csv("sample_data.csv", &columns)?;
    write_parquet("sample_data.parquet", &columns)?;

    println!(
        "Wrote {} series ({N_STEPS} steps each) to sample_data.csv and sample_data.parquet",
        columns.len()
    );
    Ok(())
}
