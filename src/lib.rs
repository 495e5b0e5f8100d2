// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod args;
pub mod commands;
pub mod data;
pub mod database;
pub mod enzyme;
pub mod errors;
pub mod iupac;
pub mod locate;
pub mod progress;
pub mod site;
pub mod table;

pub use crate::database::{
    get_enzyme, get_enzymes_by_overhang, get_enzymes_by_site_length, get_enzymes_by_supplier,
    Database,
};
pub use crate::enzyme::{are_ends_compatible, Enzyme, Overhang};
pub use crate::locate::{find_all_cut_sites, find_cut_sites, CutSite};
