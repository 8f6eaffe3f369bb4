//! Parsing of key matrices given on the command line.

use anyhow::{Context, Result, bail};
use hill_crypto::ring::Matrix;
use log::debug;

/// Parses `[[3,2],[5,7]]` (JSON) or `3,2;5,7` (rows split by `;`, entries by `,`).
///
/// Only the syntax is checked here; shape and invertibility are the cipher's business.
pub fn parse_matrix(input: &str) -> Result<Matrix> {
    let input = input.trim();
    if input.is_empty() {
        bail!("key matrix is empty");
    }

    let matrix: Matrix = if input.starts_with('[') {
        serde_json::from_str(input)
            .with_context(|| format!("invalid JSON key matrix '{}'", input))?
    } else {
        parse_rows(input)?
    };

    debug!("parsed key matrix with {} row(s)", matrix.len());
    Ok(matrix)
}

fn parse_rows(input: &str) -> Result<Matrix> {
    input
        .split(';')
        .enumerate()
        .map(|(i, row)| {
            row.split(',')
                .map(|entry| {
                    entry.trim().parse::<i64>().with_context(|| {
                        format!("row {}: '{}' is not an integer", i + 1, entry.trim())
                    })
                })
                .collect::<Result<Vec<i64>>>()
        })
        .collect()
}
