//! Command-line front end: parse flags, render one deck, write the
//! document to stdout or a file.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use proxydeck::{Deck, DeckOptions};

#[derive(Parser, Debug)]
#[command(
    name = "proxydeck",
    about = "Generate printable proxy cards in HTML from a spreadsheet."
)]
struct Cli {
    /// Spreadsheet (.ods/.xlsx/.csv) to source card data from
    spreadsheet: PathBuf,

    /// Copyright owner to show in each card footer
    #[arg(short = 'c', long)]
    copyright: Option<String>,

    /// Additional CSS file to link from the document
    #[arg(long)]
    css: Option<String>,

    /// Don't embed the default stylesheet
    #[arg(long)]
    no_default_css: bool,

    /// Don't procedurally color-code traits
    #[arg(long)]
    no_trait_colors: bool,

    /// Print only cards whose Version matches this tag
    #[arg(short = 'v', long = "version")]
    version: Option<String>,

    /// Write the document here instead of to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), proxydeck::Error> {
    let mut options = DeckOptions::new()
        .with_default_css(!cli.no_default_css)
        .with_colorize(!cli.no_trait_colors);
    if let Some(owner) = cli.copyright {
        options = options.with_copyright(owner);
    }
    if let Some(css) = cli.css {
        options = options.with_css_file(css);
    }
    if let Some(version) = cli.version {
        options = options.with_version_filter(version);
    }

    let deck = Deck::from_path(&cli.spreadsheet, options)?;
    let html = deck.render_html();

    match cli.output {
        Some(path) => fs::write(path, html)?,
        None => println!("{html}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
