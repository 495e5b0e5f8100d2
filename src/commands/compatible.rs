use std::io::Write;

use crate::args::CompatibleArgs;
use crate::commands::{load_database, lookup, open_output};
use crate::enzyme::{are_ends_compatible, Enzyme};
use crate::errors::*;

fn describe(enzyme: &Enzyme) -> String {
    if enzyme.is_blunt() {
        format!("{} (blunt)", enzyme.name)
    } else {
        format!(
            "{} ({} overhang of {} nt)",
            enzyme.name, enzyme.overhang, enzyme.overhang_length
        )
    }
}

pub fn main(args: &CompatibleArgs) -> Result<()> {
    let database = load_database(&args.table)?;
    let first = lookup(&database, &args.first)?;
    let second = lookup(&database, &args.second)?;

    let verdict = if are_ends_compatible(first, second) {
        "compatible"
    } else {
        "incompatible"
    };

    let mut out = open_output(None)?;
    writeln!(out, "{}\t{}\t{}", verdict, describe(first), describe(second))
        .chain_err(|| "failed to write output row")
}
