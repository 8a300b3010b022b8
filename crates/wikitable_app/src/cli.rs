use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use wikitable_core::{parse_ordinals, CellOptions, ExclusionPolicy, TableFilter, TableOptions};
use wikitable_engine::{ExportConfig, FetchSettings, DEFAULT_TABLE_SELECTOR, DEFAULT_USER_AGENT};

#[derive(Parser, Debug)]
#[command(name = "wikitable2csv")]
#[command(version)]
#[command(about = "Export the tables of a MediaWiki page to CSV files", long_about = None)]
pub struct Cli {
    /// The Wiki page URL, e.g., https://en.wikipedia.org/wiki/Lists_of_earthquakes
    #[arg(long)]
    pub url: String,

    /// CSS selector for the tables to export
    #[arg(long, default_value = DEFAULT_TABLE_SELECTOR)]
    pub table_selector: String,

    /// CSS class name to exclude, can be multiple separated by comma
    #[arg(long, value_delimiter = ',', default_value = "reference")]
    pub exclude_css_class_name: Vec<String>,

    /// Table numbers to exclude, separated by comma
    #[arg(long, value_parser = parse_ordinals)]
    pub exclude_tables: Option<BTreeSet<usize>>,

    /// Table numbers to include, separated by comma; all tables when omitted
    #[arg(long, value_parser = parse_ordinals)]
    pub include_tables: Option<BTreeSet<usize>>,

    /// User agent string to send
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Disable trimming of cells
    #[arg(long)]
    pub no_trim_cells: bool,

    /// Disable inclusion of line breaks
    #[arg(long)]
    pub no_include_line_breaks: bool,

    /// Keep short rows short instead of padding them to the table width
    #[arg(long)]
    pub no_pad_rows: bool,

    /// Directory the CSV files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// No output to stdout, errors may still be printed to stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.silent {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn into_config(self) -> ExportConfig {
        let exclusion = ExclusionPolicy::new(
            self.exclude_css_class_name
                .iter()
                .map(|name| name.trim().to_string()),
        );
        ExportConfig {
            url: self.url,
            table_selector: self.table_selector,
            table_options: TableOptions {
                cells: CellOptions {
                    trim_cells: !self.no_trim_cells,
                    include_line_breaks: !self.no_include_line_breaks,
                    exclusion,
                },
                pad_rows: !self.no_pad_rows,
            },
            filter: TableFilter::new(
                self.include_tables.unwrap_or_default(),
                self.exclude_tables.unwrap_or_default(),
            ),
            output_dir: self.output_dir,
            fetch: FetchSettings {
                user_agent: self.user_agent,
                ..FetchSettings::default()
            },
        }
    }
}
