use std::io::Write;

use bio::io::fasta;
use rayon::prelude::*;
use tracing::info;

use crate::args::FindArgs;
use crate::commands::{load_database, lookup, open_output};
use crate::database::Database;
use crate::enzyme::Enzyme;
use crate::errors::*;
use crate::locate::{find_cut_sites_for, CutSite};
use crate::progress;

fn select_enzymes<'a>(database: &'a Database, names: &[String]) -> Result<Vec<&'a Enzyme>> {
    if names.is_empty() {
        Ok(database.iter().collect())
    } else {
        names.iter().map(|name| lookup(database, name)).collect()
    }
}

fn read_sequences(filename: &str) -> Result<Vec<fasta::Record>> {
    info!("Reading sequences from {:?}", filename);
    let reader = fasta::Reader::from_file(filename)
        .chain_err(|| format!("failed to open FASTA file {:?}", filename))?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.chain_err(|| "failed to read FASTA sequence")?;
        record.check().map_err(|v| ErrorKind::Msg(v.into()))?;

        records.push(record);
    }

    info!("  read {} sequences", records.len());

    Ok(records)
}

fn write_sites(out: &mut dyn Write, contig: &str, sites: &[CutSite]) -> Result<()> {
    for site in sites {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            contig,
            site.enzyme.name,
            site.position,
            site.strand.strand_symbol(),
            site.forward_cut,
            site.reverse_cut,
        )
        .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}

pub fn main(args: &FindArgs) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    let database = load_database(&args.table)?;
    let enzymes = select_enzymes(&database, &args.enzymes)?;
    let records = read_sequences(&args.fasta)?;

    info!("Finding cut-sites for {} enzymes", enzymes.len());
    let progress = progress::sequences(records.len());
    let results: Vec<Vec<CutSite>> = records
        .par_iter()
        .map(|record| {
            let sites = find_cut_sites_for(record.seq(), enzymes.iter().copied());

            progress.inc(1);
            sites
        })
        .collect();

    progress.finish();

    let mut out = open_output(args.output.as_deref())?;
    writeln!(out, "Contig\tEnzyme\tPosition\tStrand\tForwardCut\tReverseCut")
        .chain_err(|| "failed to write output header")?;

    let mut total = 0;
    for (record, sites) in records.iter().zip(&results) {
        write_sites(&mut out, record.id(), sites)?;
        total += sites.len();
    }

    out.flush().chain_err(|| "failed to flush output")?;
    info!("  found {} cut-sites", total);

    Ok(())
}
