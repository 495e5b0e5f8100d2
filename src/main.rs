use tracing_subscriber::EnvFilter;

use restrictr::args::{self, Command};
use restrictr::commands;
use restrictr::errors;

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError;
    use std::io::Write; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("restrictr=debug")
    } else {
        EnvFilter::new("restrictr=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(::std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn inner_main() -> errors::Result<()> {
    let args = args::parse_args()?;
    init_logging(args.verbose);

    match args.command {
        Command::Info(args) => commands::info::main(&args),
        Command::List(args) => commands::list::main(&args),
        Command::Find(args) => commands::find::main(&args),
        Command::Compatible(args) => commands::compatible::main(&args),
        Command::None => Ok(()),
    }
}

fn main() {
    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}
