use std::collections::BTreeSet;
use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;
use std::slice;

use tracing::debug;

use crate::data;
use crate::enzyme::{Enzyme, Overhang};
use crate::errors::*;
use crate::table;

const TABLE_COLUMNS: usize = 7;

lazy_static! {
    static ref BUILTIN: Database = Database::new(data::ENZYMES.iter().map(from_record).collect());
}

fn from_record(record: &data::Record) -> Enzyme {
    let &(name, site, forward_cut, reverse_cut, overhang_length, overhang, suppliers) = record;

    Enzyme {
        name: name.into(),
        site: site.into(),
        forward_cut,
        reverse_cut,
        overhang_length,
        overhang,
        suppliers: suppliers.chars().map(String::from).collect(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Database {
    enzymes: Vec<Enzyme>,
}

impl Database {
    pub fn new(enzymes: Vec<Enzyme>) -> Database {
        Database { enzymes }
    }

    pub fn builtin() -> &'static Database {
        &BUILTIN
    }

    pub fn open<P: AsRef<Path> + Debug>(path: &P) -> Result<Database> {
        let is_json = path
            .as_ref()
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Database::from_json_file(path)
        } else {
            Database::from_table_file(path)
        }
    }

    pub fn from_json_file<P: AsRef<Path> + Debug>(path: &P) -> Result<Database> {
        let file = File::open(path).chain_err(|| format!("failed to open {:?}", path))?;
        let enzymes: Vec<Enzyme> = serde_json::from_reader(BufReader::new(file))
            .chain_err(|| format!("failed to parse enzymes in {:?}", path))?;

        debug!("read {} enzymes from {:?}", enzymes.len(), path);
        Ok(Database::new(enzymes))
    }

    pub fn from_json_str(json: &str) -> Result<Database> {
        let enzymes: Vec<Enzyme> = serde_json::from_str(json)?;

        Ok(Database::new(enzymes))
    }

    pub fn from_table_file<P: AsRef<Path> + Debug>(path: &P) -> Result<Database> {
        let database = Database::from_rows(table::read(path)?)
            .chain_err(|| format!("failed to read enzymes from {:?}", path))?;

        debug!("read {} enzymes from {:?}", database.len(), path);
        Ok(database)
    }

    /// Columns: name, site, forward cut, reverse cut, overhang length, overhang, suppliers
    pub fn from_table_reader<R: BufRead>(reader: R) -> Result<Database> {
        Database::from_rows(table::parse(reader)?)
    }

    fn from_rows(rows: Vec<table::Row>) -> Result<Database> {
        let mut enzymes = Vec::with_capacity(rows.len());
        for (idx, (line, row)) in rows.iter().enumerate() {
            if idx == 0 && row[0].trim().eq_ignore_ascii_case("name") {
                continue;
            }

            enzymes.push(parse_row(*line, row)?);
        }

        Ok(Database::new(enzymes))
    }

    pub fn enzymes(&self) -> &[Enzyme] {
        &self.enzymes
    }

    pub fn iter(&self) -> slice::Iter<Enzyme> {
        self.enzymes.iter()
    }

    pub fn len(&self) -> usize {
        self.enzymes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enzymes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Enzyme> {
        self.iter().find(|enzyme| enzyme.name.eq_ignore_ascii_case(name))
    }

    pub fn by_overhang(&self, overhang: Overhang) -> Vec<&Enzyme> {
        self.filter(|enzyme| enzyme.overhang == overhang)
    }

    pub fn by_supplier(&self, code: &str) -> Vec<&Enzyme> {
        self.filter(|enzyme| enzyme.has_supplier(code))
    }

    pub fn by_site_length(&self, length: usize) -> Vec<&Enzyme> {
        self.filter(|enzyme| enzyme.site_len() == length)
    }

    pub fn filter<F: Fn(&Enzyme) -> bool>(&self, predicate: F) -> Vec<&Enzyme> {
        self.iter().filter(|enzyme| predicate(enzyme)).collect()
    }

    pub fn suppliers(&self) -> Vec<&str> {
        let suppliers: BTreeSet<&str> = self
            .iter()
            .flat_map(|enzyme| enzyme.suppliers.iter().map(String::as_str))
            .collect();

        suppliers.into_iter().collect()
    }

    pub fn summarize(&self) -> String {
        let count = |overhang| self.by_overhang(overhang).len();

        format!(
            "{} enzymes ({} 5', {} 3', {} blunt) from {} suppliers",
            self.len(),
            count(Overhang::FivePrime),
            count(Overhang::ThreePrime),
            count(Overhang::Blunt),
            self.suppliers().len(),
        )
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a Enzyme;
    type IntoIter = slice::Iter<'a, Enzyme>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_row(line: usize, row: &[String]) -> Result<Enzyme> {
    // The supplier column may be dropped entirely for enzymes without suppliers
    if row.len() != TABLE_COLUMNS && row.len() != TABLE_COLUMNS - 1 {
        return Err(ErrorKind::InvalidRow(
            line,
            format!("expected {} columns, found {}", TABLE_COLUMNS, row.len()),
        )
        .into());
    }

    let invalid = |message: String| -> Error { ErrorKind::InvalidRow(line, message).into() };
    let number = |idx: usize, label: &str| -> Result<isize> {
        row[idx]
            .trim()
            .parse::<isize>()
            .map_err(|err| invalid(format!("invalid {} {:?}: {}", label, row[idx], err)))
    };

    let overhang_length = number(4, "overhang length")?;
    if overhang_length < 0 {
        return Err(invalid(format!("negative overhang length {}", overhang_length)));
    }

    let overhang: Overhang = row[5]
        .parse()
        .map_err(|err: Error| invalid(err.to_string()))?;

    let suppliers = match row.get(6) {
        Some(suppliers) => suppliers
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(String::from)
            .collect(),
        None => Vec::new(),
    };

    Ok(Enzyme {
        name: row[0].trim().into(),
        site: row[1].trim().into(),
        forward_cut: number(2, "forward cut")?,
        reverse_cut: number(3, "reverse cut")?,
        overhang_length: overhang_length as usize,
        overhang,
        suppliers,
    })
}

pub fn get_enzyme(name: &str) -> Option<&'static Enzyme> {
    Database::builtin().get(name)
}

pub fn get_enzymes_by_overhang(overhang: Overhang) -> Vec<&'static Enzyme> {
    Database::builtin().by_overhang(overhang)
}

pub fn get_enzymes_by_supplier(code: &str) -> Vec<&'static Enzyme> {
    Database::builtin().by_supplier(code)
}

pub fn get_enzymes_by_site_length(length: usize) -> Vec<&'static Enzyme> {
    Database::builtin().by_site_length(length)
}
