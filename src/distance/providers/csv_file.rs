use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::distance::matrix::DistanceMatrix;
use crate::error::{Error, Result};

/// Reads a distance matrix from a CSV file, one matrix row per record.
pub fn read_matrix_csv(path: impl AsRef<Path>) -> Result<DistanceMatrix> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let matrix = read_matrix(file)?;
    info!(
        "Loaded {}x{} distance matrix from {}",
        matrix.size(),
        matrix.size(),
        path.display()
    );
    Ok(matrix)
}

/// No header row. Empty cells and `inf` mark an unavailable edge.
pub fn read_matrix<R: Read>(reader: R) -> Result<DistanceMatrix> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(column, raw)| parse_cost(raw, row_idx, column))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    debug!("Parsed {} matrix rows from CSV", rows.len());
    DistanceMatrix::from_rows(rows)
}

fn parse_cost(raw: &str, row: usize, column: usize) -> Result<f64> {
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("inf") || value.eq_ignore_ascii_case("infinity")
    {
        return Ok(f64::INFINITY);
    }

    value.parse::<f64>().map_err(|_| Error::InvalidCost {
        row,
        column,
        value: value.to_string(),
    })
}
