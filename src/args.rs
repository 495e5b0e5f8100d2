use clap::{App, Arg, ArgMatches, SubCommand};

use crate::enzyme::Overhang;
use crate::errors::*;

#[derive(Debug)]
pub struct InfoArgs {
    pub table: Option<String>,
    pub names: Vec<String>,
}

#[derive(Debug)]
pub struct ListArgs {
    pub table: Option<String>,
    pub overhang: Option<Overhang>,
    pub supplier: Option<String>,
    pub length: Option<usize>,
}

#[derive(Debug)]
pub struct FindArgs {
    pub table: Option<String>,
    pub fasta: String,
    pub enzymes: Vec<String>,
    pub output: Option<String>,
    pub threads: usize,
}

#[derive(Debug)]
pub struct CompatibleArgs {
    pub table: Option<String>,
    pub first: String,
    pub second: String,
}

pub enum Command {
    Info(InfoArgs),
    List(ListArgs),
    Find(FindArgs),
    Compatible(CompatibleArgs),
    None,
}

pub struct Args {
    pub verbose: bool,
    pub command: Command,
}

fn table_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("table")
        .long("table")
        .takes_value(true)
        .help("Enzyme table (JSON or tab-separated) used instead of the built-in table.")
}

fn info_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("info")
        .about("Print recognition site, cut offsets, and suppliers of enzymes")
        .arg(
            Arg::with_name("names")
                .help("Enzyme names (case-insensitive).")
                .required(true)
                .multiple(true),
        )
        .arg(table_arg())
}

fn list_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("list")
        .about("List enzymes, optionally filtered by overhang, supplier, or site length")
        .arg(
            Arg::with_name("overhang")
                .long("overhang")
                .takes_value(true)
                .help("Only list enzymes leaving this overhang; either 5', 3', or blunt."),
        )
        .arg(
            Arg::with_name("supplier")
                .long("supplier")
                .takes_value(true)
                .help("Only list enzymes sold by this supplier (case-sensitive code)."),
        )
        .arg(
            Arg::with_name("length")
                .long("length")
                .takes_value(true)
                .help("Only list enzymes with recognition sites of this length."),
        )
        .arg(table_arg())
}

fn find_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("find")
        .about("Find restriction sites in FASTA sequence(s)")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing one or more sequences.")
                .required(true),
        )
        .arg(
            Arg::with_name("enzyme")
                .long("enzyme")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Enzyme to search for; may be repeated (default: all enzymes)."),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .takes_value(true)
                .help("Write table of cut-sites to this file instead of STDOUT."),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        )
        .arg(table_arg())
}

fn compatible_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("compatible")
        .about("Check if two enzymes leave ligatable ends")
        .arg(Arg::with_name("first").help("First enzyme.").required(true))
        .arg(Arg::with_name("second").help("Second enzyme.").required(true))
        .arg(table_arg())
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn get_strings(matches: &ArgMatches, key: &str) -> Vec<String> {
    match matches.values_of(key) {
        Some(values) => values.map(|v| v.to_string()).collect(),
        None => Vec::new(),
    }
}

fn get_optional_string(matches: &ArgMatches, key: &str) -> Option<String> {
    matches.value_of(key).map(|s| s.to_string())
}

fn parse_usize(matches: &ArgMatches, key: &str) -> Result<Option<usize>> {
    match matches.value_of(key) {
        Some(s) => match s.parse::<usize>() {
            Ok(v) => Ok(Some(v)),
            Err(err) => Err(format!("Invalid --{} ({:?}) value: {}", key, s, err).into()),
        },
        None => Ok(None),
    }
}

fn parse_overhang(matches: &ArgMatches) -> Result<Option<Overhang>> {
    match matches.value_of("overhang") {
        Some(s) => s
            .parse::<Overhang>()
            .map(Some)
            .chain_err(|| "Invalid --overhang value"),
        None => Ok(None),
    }
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("restrictr")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Mikkel Schubert")
        .about("Look up restriction enzymes and find their cut-sites")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Print debug messages."),
        )
        .subcommand(info_command())
        .subcommand(list_command())
        .subcommand(find_command())
        .subcommand(compatible_command())
        .get_matches();

    let verbose = matches.is_present("verbose");
    let command = if let Some(matches) = matches.subcommand_matches("info") {
        Command::Info(InfoArgs {
            table: get_optional_string(matches, "table"),
            names: get_strings(matches, "names"),
        })
    } else if let Some(matches) = matches.subcommand_matches("list") {
        Command::List(ListArgs {
            table: get_optional_string(matches, "table"),
            overhang: parse_overhang(matches)?,
            supplier: get_optional_string(matches, "supplier"),
            length: parse_usize(matches, "length")?,
        })
    } else if let Some(matches) = matches.subcommand_matches("find") {
        Command::Find(FindArgs {
            table: get_optional_string(matches, "table"),
            fasta: get_string(matches, "fasta")?,
            enzymes: get_strings(matches, "enzyme"),
            output: get_optional_string(matches, "output"),
            threads: parse_usize(matches, "threads")?.unwrap_or(0),
        })
    } else if let Some(matches) = matches.subcommand_matches("compatible") {
        Command::Compatible(CompatibleArgs {
            table: get_optional_string(matches, "table"),
            first: get_string(matches, "first")?,
            second: get_string(matches, "second")?,
        })
    } else {
        eprintln!("{}", matches.usage());

        Command::None
    };

    Ok(Args { verbose, command })
}
