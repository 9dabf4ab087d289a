//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;
use tabsort::HeaderClick;

#[derive(Parser, Debug)]
#[command(name = "tabsort")]
#[command(version, about = "Replay header clicks against a table and print the sorted rows")]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep empty cells at the bottom in both directions
    #[arg(long)]
    pub sort_empty_last: bool,

    /// Leave out the children of collapsed rows
    #[arg(long)]
    pub visible: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<LevelFilter>,

    /// Table file with `columns` and `rows`
    pub table: PathBuf,

    /// Header clicks in order: `name`, `+name` (multi-select), `!name` (resize handle)
    #[arg(value_parser = parse_click)]
    pub clicks: Vec<HeaderClick>,
}

/// Parse one click argument.
pub fn parse_click(arg: &str) -> Result<HeaderClick, String> {
    let (click, column) = if let Some(column) = arg.strip_prefix('+') {
        (HeaderClick::new(column).multi(), column)
    } else if let Some(column) = arg.strip_prefix('!') {
        (HeaderClick::resize_handle(column), column)
    } else {
        (HeaderClick::new(arg), arg)
    };

    if column.is_empty() {
        return Err(format!("missing column name in click `{arg}`"));
    }
    Ok(click)
}
