use std::io::Write;

use crate::args::InfoArgs;
use crate::commands::{load_database, lookup, open_output, write_enzyme, ENZYME_HEADER};
use crate::errors::*;

pub fn main(args: &InfoArgs) -> Result<()> {
    let database = load_database(&args.table)?;

    // Look up every enzyme before writing anything, so that typos fail early
    let enzymes = args
        .names
        .iter()
        .map(|name| lookup(&database, name))
        .collect::<Result<Vec<_>>>()?;

    let mut out = open_output(None)?;
    writeln!(out, "{}", ENZYME_HEADER).chain_err(|| "failed to write output header")?;
    for enzyme in enzymes {
        write_enzyme(&mut out, enzyme)?;
    }

    Ok(())
}
