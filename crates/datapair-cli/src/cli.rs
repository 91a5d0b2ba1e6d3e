use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "datapair",
    about = "Read, write and inspect key=value pair files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with codec settings (line_ending, quoted, empty_field_marker)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode a key and value as one line
    Encode(EncodeArgs),
    /// Decode one line into its key and value
    Decode(DecodeArgs),
    /// List every pair in a file
    List(FileArgs),
    /// Print the value stored for a key
    Get(GetArgs),
    /// Set a key in a file, creating the file if needed
    Set(SetArgs),
    /// Remove a key from a file
    Remove(GetArgs),
    /// Dump the bytes of a saved binary holder as text
    HolderText(HolderTextArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    pub key: String,
    pub value: String,
    #[arg(short, long)]
    pub quoted: bool,
}

#[derive(Args)]
pub struct DecodeArgs {
    pub line: String,
}

#[derive(Args)]
pub struct FileArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct GetArgs {
    pub file: PathBuf,
    pub key: String,
}

#[derive(Args)]
pub struct SetArgs {
    pub file: PathBuf,
    pub key: String,
    pub value: String,
}

#[derive(Args)]
pub struct HolderTextArgs {
    pub holder: PathBuf,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
