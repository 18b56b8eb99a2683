use std::fs;
use std::io::{self, Read};
use std::process;

use clap::Parser;
use tracing::{debug, Level};

use voxdom::core::{
    describe_element, print_error_message, print_info_message, walk_document, Verbosity, VoxError,
    VoxOptions,
};
use voxdom::env::{self, EnvVar};
use voxdom::parsers::html::dom::html_to_dom;

#[derive(Parser, Debug)]
#[command(
    name = "voxdom",
    version,
    about = "Read an HTML document the way a screen reader would"
)]
struct Cli {
    /// HTML file to read, or - for stdin
    #[arg(required_unless_present = "env_help")]
    input: Option<String>,

    /// Describe only the element with this id
    #[arg(short, long)]
    id: Option<String>,

    /// Walk the document backwards
    #[arg(short, long)]
    reverse: bool,

    /// Use brief role names
    #[arg(short, long)]
    brief: bool,

    /// Absolute URL of the document
    #[arg(short = 'u', long = "url")]
    url: Option<String>,

    /// URLs to treat as visited
    #[arg(long, num_args = 1..)]
    visited: Vec<String>,

    /// Include hidden nodes
    #[arg(short = 'H', long)]
    allow_hidden: bool,

    /// Charset of the input document
    #[arg(short, long)]
    encoding: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the supported environment variables
    #[arg(long)]
    env_help: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => env::core::LogLevel::get_or_default("warn".to_string())
            .parse::<Level>()
            .unwrap_or(Level::WARN),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(!env::core::NoColor::get_or_default(false))
        .init();
}

fn read_input(input: &str) -> Result<Vec<u8>, VoxError> {
    if input == "-" {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        Ok(fs::read(input)?)
    }
}

fn build_options(cli: &Cli) -> Result<VoxOptions, VoxError> {
    let mut options = VoxOptions::from_env()?;
    if cli.brief {
        options.verbosity = Verbosity::Brief;
    }
    if cli.url.is_some() {
        options.document_url = cli.url.clone();
    }
    if cli.allow_hidden {
        options.allow_hidden = true;
    }
    options.visited_urls.extend(cli.visited.iter().cloned());
    Ok(options)
}

fn run(cli: &Cli) -> Result<(), VoxError> {
    let Some(input) = cli.input.as_deref() else {
        return Ok(());
    };
    let options = build_options(cli)?;
    let data = read_input(input)?;
    debug!(bytes = data.len(), input, "read document");
    let dom = html_to_dom(&data, cli.encoding.as_deref())?;

    match &cli.id {
        Some(id) => print_info_message(&describe_element(&dom, id, &options)?.to_string()),
        None => {
            for description in walk_document(&dom, &options, cli.reverse) {
                print_info_message(&description.to_string());
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.env_help {
        env::print_env_help();
        return;
    }

    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        print_error_message(&format!("Error: {err}"));
        process::exit(1);
    }
}
