use clap::Parser;
use lancalc::cli::{self, Cli};
use lancalc::{logging, PrefixDetector};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Cli::parse();
    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Error initializing logging: {e}");
    }
    if args.no_color {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    let detector = PrefixDetector::current();
    let code = cli::run(&args, &detector, &mut io::stdout(), &mut io::stderr());
    ExitCode::from(code)
}
