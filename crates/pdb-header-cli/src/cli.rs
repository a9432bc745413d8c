//! CLI argument definitions for `pdbhead`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pdb_header_cli::convert::HeaderFormat;

#[derive(Parser)]
#[command(
    name = "pdbhead",
    version,
    about = "Inspect and convert PDB file headers",
    long_about = "Inspect and convert the header block of PDB files.\n\n\
                  Reads the fixed-column HEADER, TITLE, EXPDTA, AUTHOR and REMARK\n\
                  records, and converts them to and from a compact binary form."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the header of a file.
    Show(ShowArgs),

    /// Convert a header between the text and binary forms.
    Convert(ConvertArgs),

    /// Write a new header stamped with the current user, host and date.
    Stamp(StampArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// File to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Read the binary form instead of PDB text.
    #[arg(long = "binary")]
    pub binary: bool,
}

#[derive(Parser)]
pub struct ConvertArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Form to write.
    #[arg(long = "to", value_enum)]
    pub to: FormatArg,

    /// Form to read (default: the opposite of --to).
    #[arg(long = "from", value_enum)]
    pub from: Option<FormatArg>,
}

impl ConvertArgs {
    /// Input and output forms, with `--from` defaulted.
    pub fn formats(&self) -> (HeaderFormat, HeaderFormat) {
        let to = HeaderFormat::from(self.to);
        let from = self.from.map_or_else(|| to.opposite(), HeaderFormat::from);
        (from, to)
    }
}

#[derive(Parser)]
pub struct StampArgs {
    /// File to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Form to write.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Molecule classification (40 columns).
    #[arg(long = "classification")]
    pub classification: Option<String>,

    /// Four-character PDB id.
    #[arg(long = "id", value_name = "ID")]
    pub pdb_id: Option<String>,

    #[arg(long = "title")]
    pub title: Option<String>,

    /// Author name; repeat for several authors.
    #[arg(long = "author", value_name = "NAME")]
    pub authors: Vec<String>,

    /// Experimental method as `NAME` or `NAME, COMMENT`; repeatable.
    #[arg(long = "method", value_name = "METHOD")]
    pub methods: Vec<String>,

    /// Resolution in Angstroms.
    #[arg(long = "resolution", value_name = "ANGSTROMS")]
    pub resolution: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Binary,
}

impl From<FormatArg> for HeaderFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Binary => Self::Binary,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
