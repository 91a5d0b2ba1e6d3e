use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use datapair_codec::{DataPairCodec, PairFile, PairMap};
use datapair_holder::BinaryHolder;
use datapair_types::{CodecConfig, DataPair};
use serde_json::json;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let codec = DataPairCodec::new(config);
    let format = cli.format;

    match cli.command {
        Command::Encode(args) => cmd_encode(&codec, &format, args),
        Command::Decode(args) => cmd_decode(&codec, &format, args),
        Command::List(args) => cmd_list(&codec, &format, args),
        Command::Get(args) => cmd_get(&codec, &format, args),
        Command::Set(args) => cmd_set(&codec, args),
        Command::Remove(args) => cmd_remove(&codec, args),
        Command::HolderText(args) => cmd_holder_text(args),
    }
}

/// Codec settings from a TOML file, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<CodecConfig> {
    let Some(path) = path else {
        return Ok(CodecConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn cmd_encode(codec: &DataPairCodec, format: &OutputFormat, args: EncodeArgs) -> anyhow::Result<()> {
    let pair = DataPair::new(args.key, args.value);
    let line = if args.quoted {
        pair.to_line_with_quotations()
    } else {
        pair.to_line_with(codec.config())
    };
    match format {
        OutputFormat::Text => println!("{line}"),
        OutputFormat::Json => println!("{}", json!({ "line": line })),
    }
    Ok(())
}

fn cmd_decode(codec: &DataPairCodec, format: &OutputFormat, args: DecodeArgs) -> anyhow::Result<()> {
    let pair = DataPair::parse_with(&args.line, codec.config())
        .with_context(|| format!("cannot decode {:?}", args.line))?;
    match format {
        OutputFormat::Text => {
            println!("{} {}", "key:".bold(), pair.key());
            println!("{} {}", "value:".bold(), pair.value());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pair)?),
    }
    Ok(())
}

fn cmd_list(codec: &DataPairCodec, format: &OutputFormat, args: FileArgs) -> anyhow::Result<()> {
    let pairs = codec.read(&args.file)?;
    match format {
        OutputFormat::Text => {
            if pairs.is_empty() {
                println!("No pairs in {}.", args.file.display());
            }
            for pair in &pairs {
                println!("{} = {}", pair.key().yellow(), pair.value());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pairs)?),
    }
    Ok(())
}

fn cmd_get(codec: &DataPairCodec, format: &OutputFormat, args: GetArgs) -> anyhow::Result<()> {
    let map = codec.read_map(&args.file)?;
    let Some(value) = map.get(&args.key) else {
        bail!("key {:?} not found in {}", args.key, args.file.display());
    };
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => println!("{}", json!({ "key": args.key, "value": value })),
    }
    Ok(())
}

fn cmd_set(codec: &DataPairCodec, args: SetArgs) -> anyhow::Result<()> {
    let file = codec.file(&args.file);
    let previous = set_value(&file, &args.key, &args.value)?;
    let verb = if previous.is_some() { "Updated" } else { "Set" };
    println!("{} {} {} in {}", "✓".green().bold(), verb, args.key.yellow(), args.file.display());
    Ok(())
}

fn cmd_remove(codec: &DataPairCodec, args: GetArgs) -> anyhow::Result<()> {
    let file = codec.file(&args.file);
    if remove_value(&file, &args.key)?.is_none() {
        bail!("key {:?} not found in {}", args.key, args.file.display());
    }
    println!("{} Removed {} from {}", "✓".green().bold(), args.key.yellow(), args.file.display());
    Ok(())
}

fn cmd_holder_text(args: HolderTextArgs) -> anyhow::Result<()> {
    let holder = BinaryHolder::load(&args.holder)
        .with_context(|| format!("failed to load holder {}", args.holder.display()))?;
    match &args.output {
        Some(output) => {
            holder.save_as_text(output)?;
            println!(
                "{} Wrote {} bytes ({}) to {}",
                "✓".green().bold(),
                holder.len(),
                holder.type_name().cyan(),
                output.display()
            );
        }
        None => println!("{}", holder.to_text_lossy()),
    }
    Ok(())
}

/// Insert or replace `key`, returning the previous value.
pub fn set_value(file: &PairFile, key: &str, value: &str) -> anyhow::Result<Option<String>> {
    let mut map = if file.exists() { file.read_map()? } else { PairMap::new() };
    let previous = map.insert(key.to_string(), value.to_string());
    file.write_map(&map)?;
    Ok(previous)
}

/// Remove `key`, returning its value. The file is left untouched when the
/// key is absent.
pub fn remove_value(file: &PairFile, key: &str) -> anyhow::Result<Option<String>> {
    let mut map = file.read_map()?;
    let removed = map.shift_remove(key);
    if removed.is_some() {
        file.write_map(&map)?;
    }
    Ok(removed)
}
