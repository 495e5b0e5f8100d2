use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::errors::*;

/// A non-empty row of a tab-separated table and its (1-based) line number.
pub type Row = (usize, Vec<String>);

pub fn read<P: AsRef<Path> + Debug>(path: &P) -> Result<Vec<Row>> {
    let file = File::open(path).chain_err(|| format!("failed to open table {:?}", path))?;

    parse(BufReader::new(file))
}

pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Row>> {
    let mut table: Vec<Row> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.chain_err(|| "error reading line from table")?;
        let line = line.trim_end_matches('\r');

        if !line.trim().is_empty() {
            table.push((idx + 1, line.split('\t').map(|v| v.to_string()).collect()));
        }
    }

    Ok(table)
}
