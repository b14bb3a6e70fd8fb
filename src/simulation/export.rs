use crate::error::SimResult;
use crate::reel::Outcome;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SpinRecord {
    spin: usize,
    outcome: Outcome,
}

/// Writes one `spin,outcome` row per result, numbered from 1.
pub fn write_spins<W: Write>(writer: W, results: &[Outcome]) -> SimResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, &outcome) in results.iter().enumerate() {
        wtr.serialize(SpinRecord {
            spin: i + 1,
            outcome,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_spins<P: AsRef<Path>>(path: P, results: &[Outcome]) -> SimResult<()> {
    let file = std::fs::File::create(path)?;
    write_spins(file, results)
}
