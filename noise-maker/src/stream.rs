use crate::generator::{generate_access_row, generate_malformed_row};
use csv::WriterBuilder;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::Write;

pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Writes `rows` CSV rows; roughly `malformed_ratio` of them are broken.
pub fn write_log<W: Write, R: Rng + ?Sized>(
    out: W,
    rng: &mut R,
    rows: usize,
    malformed_ratio: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(out);
    for _ in 0..rows {
        let row = if rng.random_bool(malformed_ratio) {
            generate_malformed_row(rng)
        } else {
            generate_access_row(rng)
        };
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
