use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docpatch",
    about = "Patch JSON documents with replace, delete, insert and insertOrReplace operations",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Patch the document on stdin and print it to stdout
    Apply(ApplyArgs),
    /// Patch a JSON file, writing only when something changed
    File(FileArgs),
    /// Run a TOML job file
    Job(JobArgs),
    /// Print the value at a path of the document on stdin
    Get(GetArgs),
}

#[derive(Args)]
pub struct OpsArgs {
    /// Operation records as a JSON array
    #[arg(long, conflicts_with = "ops_file", required_unless_present = "ops_file")]
    pub ops: Option<String>,
    /// File holding operation records (JSON array, or `[[ops]]` in .toml)
    #[arg(long)]
    pub ops_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct PatchFlags {
    /// Fail instead of overwriting when `insert` targets an existing path
    #[arg(long)]
    pub strict_insert: bool,
    /// Leave the document untouched unless every operation succeeds
    #[arg(long)]
    pub atomic: bool,
}

#[derive(Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub ops: OpsArgs,
    #[command(flatten)]
    pub flags: PatchFlags,
    /// Indentation of the output; compact when omitted
    #[arg(long)]
    pub indent: Option<usize>,
}

#[derive(Args)]
pub struct FileArgs {
    /// Source JSON file
    pub path: PathBuf,
    /// Output file (defaults to the source file)
    #[arg(long)]
    pub target: Option<PathBuf>,
    #[arg(long, default_value_t = 2)]
    pub indent: usize,
    /// Write even when no operation changed the document
    #[arg(long)]
    pub force: bool,
    /// Report whether the file would change without writing it
    #[arg(long)]
    pub check: bool,
    #[command(flatten)]
    pub ops: OpsArgs,
    #[command(flatten)]
    pub flags: PatchFlags,
}

#[derive(Args)]
pub struct JobArgs {
    /// Job file
    pub job: PathBuf,
    /// Report whether the file would change without writing it
    #[arg(long)]
    pub check: bool,
}

#[derive(Args)]
pub struct GetArgs {
    /// Slash-delimited path, e.g. /_source/defaultIndex
    pub path: String,
}
