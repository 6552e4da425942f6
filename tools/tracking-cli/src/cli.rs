//! Command-line surface

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

/// Tracking - fixed-layout binary record tool
#[derive(Parser, Debug)]
#[command(name = "tracking")]
#[command(about = "Convert, print and process 24-byte tracking records")]
#[command(version)]
pub struct Cli {
    /// Encode a whitespace-delimited text record into a binary record
    #[arg(
        long,
        num_args = 2,
        value_names = ["ASCII_FILE", "BINARY_FILE"],
        conflicts_with_all = ["print", "binary_file"]
    )]
    pub convert: Option<Vec<PathBuf>>,

    /// Decode a binary record and print it
    #[arg(long, value_name = "BINARY_FILE", conflicts_with = "binary_file")]
    pub print: Option<PathBuf>,

    /// Binary record to decode and hand to the process hook
    pub binary_file: Option<PathBuf>,

    /// Do not install floating-point exception traps
    #[arg(long)]
    pub no_fp_traps: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Convert { text: PathBuf, binary: PathBuf },
    Print(PathBuf),
    Process(PathBuf),
}

impl Cli {
    /// Selected mode, or `None` when the arguments match no mode
    pub fn mode(&self) -> Option<Mode> {
        match (&self.convert, &self.print, &self.binary_file) {
            (Some(paths), None, None) => match paths.as_slice() {
                [text, binary] => Some(Mode::Convert {
                    text: text.clone(),
                    binary: binary.clone(),
                }),
                _ => None,
            },
            (None, Some(binary), None) => Some(Mode::Print(binary.clone())),
            (None, None, Some(binary)) => Some(Mode::Process(binary.clone())),
            _ => None,
        }
    }
}

/// Outcome of argument parsing, decided before any config is read
#[derive(Debug)]
pub enum Invocation {
    /// A mode was selected; run it with these flags
    Run { cli: Cli, mode: Mode },
    /// No mode matches the arguments; print the usage line and exit 0
    Usage,
    /// `--help` or `--version`; let clap print and exit
    Clap(clap::Error),
}

/// Map raw arguments (program name first) to an [`Invocation`]
pub fn resolve<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.mode() {
            Some(mode) => Invocation::Run { cli, mode },
            None => Invocation::Usage,
        },
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Clap(e)
        }
        Err(_) => Invocation::Usage,
    }
}

/// Usage line shown for unrecognized argument shapes
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--convert <ascii_file> <binary_file>] | [--print <binary_file>] | [<binary_file>]"
    )
}
