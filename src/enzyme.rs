use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::database;
use crate::errors::*;
use crate::iupac;
use crate::site::Site;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overhang {
    #[serde(rename = "5'")]
    FivePrime,
    #[serde(rename = "3'")]
    ThreePrime,
    #[serde(rename = "blunt")]
    Blunt,
}

impl Overhang {
    pub const ALL: [Overhang; 3] = [Overhang::FivePrime, Overhang::ThreePrime, Overhang::Blunt];

    pub fn as_str(self) -> &'static str {
        match self {
            Overhang::FivePrime => "5'",
            Overhang::ThreePrime => "3'",
            Overhang::Blunt => "blunt",
        }
    }
}

impl fmt::Display for Overhang {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overhang {
    type Err = Error;

    fn from_str(value: &str) -> Result<Overhang> {
        // The prime is optional, since it is awkward to type on the command-line
        match value.trim().to_ascii_lowercase().as_ref() {
            "5'" | "5" => Ok(Overhang::FivePrime),
            "3'" | "3" => Ok(Overhang::ThreePrime),
            "blunt" => Ok(Overhang::Blunt),
            _ => Err(ErrorKind::InvalidOverhang(value.into()).into()),
        }
    }
}

/// Top strand is cut at `forward_cut`, bottom strand at `site.len() + reverse_cut`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enzyme {
    pub name: String,
    pub site: String,

    pub forward_cut: isize,
    pub reverse_cut: isize,

    pub overhang_length: usize,
    #[serde(rename = "overhangType")]
    pub overhang: Overhang,

    #[serde(default)]
    pub suppliers: Vec<String>,
}

impl Enzyme {
    pub fn get(name: &str) -> Option<&'static Enzyme> {
        database::get_enzyme(name)
    }

    pub fn site_len(&self) -> usize {
        self.site.len()
    }

    pub fn compile(&self) -> Site {
        Site::compile(&self.site)
    }

    pub fn is_palindromic(&self) -> bool {
        iupac::is_palindromic(&self.site)
    }

    pub fn is_blunt(&self) -> bool {
        self.overhang == Overhang::Blunt
    }

    pub fn has_supplier(&self, code: &str) -> bool {
        self.suppliers.iter().any(|supplier| supplier == code)
    }

    pub fn is_compatible_with(&self, other: &Enzyme) -> bool {
        are_ends_compatible(self, other)
    }
}

/// Overhang sequences are not compared, only their type and length.
pub fn are_ends_compatible(a: &Enzyme, b: &Enzyme) -> bool {
    if a.is_blunt() && b.is_blunt() {
        true
    } else {
        a.overhang == b.overhang && a.overhang_length == b.overhang_length
    }
}
