pub mod compatible;
pub mod find;
pub mod info;
pub mod list;

use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::io::Write;

use tracing::info;

use crate::database::Database;
use crate::enzyme::Enzyme;
use crate::errors::*;

pub const ENZYME_HEADER: &str =
    "Name\tSite\tForwardCut\tReverseCut\tOverhang\tOverhangLength\tSuppliers";

/// Loads the user-supplied enzyme table, falling back to the built-in table.
pub fn load_database(table: &Option<String>) -> Result<Cow<'static, Database>> {
    match table {
        Some(path) => {
            info!("Reading enzymes from {:?}", path);
            let database = Database::open(path)
                .chain_err(|| format!("failed to read enzyme table {:?}", path))?;
            info!("  {}", database.summarize());

            Ok(Cow::Owned(database))
        }
        None => Ok(Cow::Borrowed(Database::builtin())),
    }
}

pub fn lookup<'a>(database: &'a Database, name: &str) -> Result<&'a Enzyme> {
    match database.get(name) {
        Some(enzyme) => Ok(enzyme),
        None => Err(ErrorKind::UnknownEnzyme(name.into()).into()),
    }
}

pub fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let handle = File::create(path)
                .chain_err(|| format!("could not create output file {:?}", path))?;

            Ok(Box::new(io::BufWriter::new(handle)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_enzyme(out: &mut dyn Write, enzyme: &Enzyme) -> Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        enzyme.name,
        enzyme.site,
        enzyme.forward_cut,
        enzyme.reverse_cut,
        enzyme.overhang,
        enzyme.overhang_length,
        enzyme.suppliers.join(","),
    )
    .chain_err(|| "failed to write output row")
}
