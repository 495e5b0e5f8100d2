use std::io::Write;

use tracing::debug;

use crate::args::ListArgs;
use crate::commands::{load_database, open_output, write_enzyme, ENZYME_HEADER};
use crate::enzyme::Enzyme;
use crate::errors::*;

fn is_selected(args: &ListArgs, enzyme: &Enzyme) -> bool {
    args.overhang.map_or(true, |overhang| enzyme.overhang == overhang)
        && args.length.map_or(true, |length| enzyme.site_len() == length)
        && args
            .supplier
            .as_ref()
            .map_or(true, |code| enzyme.has_supplier(code))
}

pub fn main(args: &ListArgs) -> Result<()> {
    let database = load_database(&args.table)?;
    let enzymes = database.filter(|enzyme| is_selected(args, enzyme));
    debug!("selected {} of {} enzymes", enzymes.len(), database.len());

    let mut out = open_output(None)?;
    writeln!(out, "{}", ENZYME_HEADER).chain_err(|| "failed to write output header")?;
    for enzyme in enzymes {
        write_enzyme(&mut out, enzyme)?;
    }

    Ok(())
}
