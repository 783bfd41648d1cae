use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use linediff::areas::options::{ColorChoice, DEFAULT_CONTEXT_LINES, DiffOptions};
use linediff::areas::session::Session;
use linediff::artifacts::core::{PagerWriter, should_page};
use linediff::artifacts::diff::algorithm::Algorithm;
use linediff::artifacts::diff::context::ContextWindow;
use minus::Pager;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Line-by-line diff of two text files",
    long_about = "Compares two text files line by line and prints every unchanged, \
    added and deleted line with its line numbers on both sides. \
    Unchanged lines far from any change are left out unless unlimited context is requested.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The previous version of the file")]
    previous: PathBuf,
    #[arg(index = 2, help = "The current version of the file")]
    current: PathBuf,
    #[arg(
        short = 'U',
        long = "unified",
        default_value_t = DEFAULT_CONTEXT_LINES,
        allow_negative_numbers = true,
        help = "Lines of context around each change (negative for unlimited)"
    )]
    unified: isize,
    #[arg(
        short,
        long,
        default_value = "myers",
        help = "The diff algorithm to use"
    )]
    algorithm: String,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to color the output")]
    color: ColorChoice,
    #[arg(long, help = "Print straight to stdout instead of paging")]
    no_pager: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let algorithm = Algorithm::try_parse(&cli.algorithm).map_err(|e| {
        anyhow::anyhow!("{e}, expected one of: {}", Algorithm::names().join(", "))
    })?;
    let options = DiffOptions::new(
        algorithm,
        ContextWindow::from(cli.unified),
        cli.color,
        should_page(cli.no_pager),
    );
    colored::control::set_override(options.color.enabled(std::io::stdout().is_terminal()));

    let previous = std::fs::read_to_string(&cli.previous)
        .with_context(|| format!("failed to read {}", cli.previous.display()))?;
    let current = std::fs::read_to_string(&cli.current)
        .with_context(|| format!("failed to read {}", cli.current.display()))?;

    if options.paging {
        let pager = Pager::new();
        let session = Session::new(options, Box::new(PagerWriter::new(pager.clone())));
        session.diff(&previous, &current)?;
        minus::page_all(pager)?;
    } else {
        let session = Session::new(options, Box::new(std::io::stdout()));
        session.diff(&previous, &current)?;
    }

    Ok(())
}
