use std::{path::PathBuf, process::exit};

use clap::Parser;

mod geometry;
mod split;

use crate::geometry::Layout;

/// Splits a grid-aligned sprite sheet into individual cell images, one PNG
/// file per cell.
#[derive(Parser, Debug)]
#[command(name = "sprites-splitter", version, about)]
struct Cli {
    /// path to the input sprites file
    #[arg(short, long)]
    sprites: PathBuf,

    /// path to an output directory (must already exist)
    #[arg(short, long)]
    out: PathBuf,

    /// width of each sub image within the sprites
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// height of each sub image within the sprites
    #[arg(long, alias = "he", value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// margin between each sub image
    #[arg(short, long, default_value_t = 1)]
    margin: u32,
}

fn main() {
    log_init(log::LevelFilter::Info);

    let cli = Cli::parse_from(rewrite_height_flag(std::env::args()));
    if let Err(e) = run(&cli) {
        log::error!("{:#}", e);
        exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let layout = Layout {
        cell_width: cli.width,
        cell_height: cli.height,
        margin: cli.margin,
    };
    let written = split::split(&cli.sprites, &cli.out, layout)?;
    log::info!("wrote {} cell images to {}", written, cli.out.display());
    Ok(())
}

/// The historical `-he` spelling of the height flag is not a legal clap
/// short option (shorts are single characters), so rewrite it to the long
/// form before parsing. Everything after a `--` terminator is positional
/// and passes through untouched.
fn rewrite_height_flag(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut past_terminator = false;
    args.into_iter()
        .map(|arg| {
            if past_terminator {
                return arg;
            }
            if arg == "--" {
                past_terminator = true;
                return arg;
            }
            match arg.strip_prefix("-he") {
                Some("") => "--height".to_owned(),
                Some(rest) if rest.starts_with('=') => format!("--height{}", rest),
                _ => arg,
            }
        })
        .collect()
}

fn log_init(filter: log::LevelFilter) {
    use simplelog::*;
    TermLogger::init(
        filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("logger must only be initialized once");
}
