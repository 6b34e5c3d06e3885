//! CLI entry point for overview

use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use overview::{OutputConfig, OverviewWalker, StreamingFormatter, WalkerConfig};

/// Takes no options: the listing always starts at the current directory.
#[derive(Parser, Debug)]
#[command(name = "overview")]
#[command(about = "Annotated listing of the current directory with a guess for every file")]
#[command(version)]
struct Args {
    /// Extra arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

fn run() -> io::Result<()> {
    // Relative root, so labels only ever see paths inside the project
    let root = Path::new(".");

    // Stdout is line buffered, so each entry is visible as soon as it is
    // written and a failed walk leaves the partial listing behind.
    let stdout = io::stdout();
    let mut formatter = StreamingFormatter::new(OutputConfig::default(), stdout.lock());
    formatter.write_header()?;

    let walker = OverviewWalker::new(WalkerConfig::default());
    let (dirs, files) = walker.walk_streaming(root, &mut formatter)?;
    log::debug!("listed {} directories, {} files", dirs, files);

    formatter.into_inner().flush()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if !args.rest.is_empty() {
        log::debug!("ignoring arguments: {:?}", args.rest);
    }

    if let Err(e) = run() {
        eprintln!("overview: {}", e);
        process::exit(1);
    }
}
