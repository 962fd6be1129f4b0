//! ARF CLI - Command-line tool for ARF attack record files.
//!
//! This is the main entry point for the ARF command-line application.

use std::fs::{self, File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use arf::prelude::*;

/// ARF - attack record inspection and repair tool
#[derive(Parser)]
#[command(name = "arf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the fields and integrity state of an attack record
    Inspect {
        #[command(flatten)]
        target: Target,

        /// JSON key table used to resolve the primary key
        #[arg(short, long, env = "ARF_KEYS")]
        keys: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a new, empty attack record
    New {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Attack id
        #[arg(long)]
        id: Option<u16>,

        /// Attack name
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Recompute the checksum (and optionally the header) and save
    Repair {
        #[command(flatten)]
        target: Target,

        /// Also reset the header signature
        #[arg(long)]
        header: bool,
    },

    /// Change fields of an attack record and save
    Set {
        #[command(flatten)]
        target: Target,

        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// A record inside a file.
#[derive(Args)]
struct Target {
    /// Record file
    #[arg(short, long)]
    input: PathBuf,

    /// Byte offset of the record within the file
    #[arg(long, default_value_t = 0)]
    offset: u64,
}

#[derive(Args)]
struct FieldArgs {
    /// Attack id
    #[arg(long)]
    id: Option<u16>,

    /// Attack name
    #[arg(long)]
    name: Option<String>,

    /// Text shown when the attack is played
    #[arg(long)]
    text: Option<String>,

    /// Attack type (name or raw byte)
    #[arg(long = "type", value_parser = parse_attack_type)]
    attack_type: Option<u8>,

    /// Effect kind (name or raw byte)
    #[arg(long, value_parser = parse_effect_kind)]
    effect: Option<u8>,

    /// Effect chance, 1 in N (1 = always, 0 = never)
    #[arg(long)]
    chance: Option<u8>,

    /// Attack strength
    #[arg(long)]
    strength: Option<u8>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { target, keys, json } => {
            cmd_inspect(&target, keys.as_deref(), json)?;
        }
        Commands::New {
            output,
            id,
            name,
            force,
        } => {
            cmd_new(&output, id, name.as_deref(), force)?;
        }
        Commands::Repair { target, header } => {
            cmd_repair(&target, header)?;
        }
        Commands::Set { target, fields } => {
            cmd_set(&target, &fields)?;
        }
    }

    Ok(())
}

fn cmd_inspect(target: &Target, keys: Option<&Path>, json: bool) -> Result<()> {
    let mut file = File::open(&target.input).context("Failed to open record file")?;
    file.seek(SeekFrom::Start(target.offset))?;

    let record = match keys {
        Some(path) => {
            let table = load_keys(path)?;
            AttackRecord::from_store_with_lookup(&mut file, &table)
        }
        None => AttackRecord::from_store_with_lookup(&mut file, &NoLookup),
    }
    .context("Failed to read attack record")?;

    let summary = record.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }

    Ok(())
}

fn cmd_new(output: &Path, id: Option<u16>, name: Option<&str>, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", output.display());
    }

    let mut record = AttackRecord::new();
    if let Some(id) = id {
        record.set_id(id);
    }
    if let Some(name) = name {
        record.set_name(name).context("Invalid attack name")?;
    }

    let mut file = File::create(output).context("Failed to create record file")?;
    record.save(&mut file).context("Failed to write attack record")?;

    println!("Created {} (checksum {:#06x})", output.display(), record.stored_checksum());

    Ok(())
}

fn cmd_repair(target: &Target, header: bool) -> Result<()> {
    let (mut file, mut record) = open_for_update(target)?;

    let had_header = record.has_valid_header();
    let had_checksum = record.is_checksum_valid();

    if header {
        record.fix_header();
    } else if !had_header {
        tracing::warn!("header signature is invalid; pass --header to reset it");
    }

    record.save(&mut file).context("Failed to write attack record")?;

    println!(
        "Header: {}",
        match (had_header, header) {
            (true, _) => "ok",
            (false, true) => "repaired",
            (false, false) => "INVALID (left unchanged)",
        }
    );
    println!(
        "Checksum: {} ({:#06x})",
        if had_checksum { "ok" } else { "repaired" },
        record.stored_checksum()
    );

    Ok(())
}

fn cmd_set(target: &Target, fields: &FieldArgs) -> Result<()> {
    let (mut file, mut record) = open_for_update(target)?;

    if let Some(id) = fields.id {
        record.set_id(id);
    }
    if let Some(name) = &fields.name {
        record.set_name(name).context("Invalid attack name")?;
    }
    if let Some(text) = &fields.text {
        record.set_display_text(text).context("Invalid display text")?;
    }
    if let Some(attack_type) = fields.attack_type {
        record.set_attack_type_raw(attack_type);
    }
    if let Some(effect) = fields.effect {
        record.set_effect_kind_raw(effect);
    }
    if let Some(chance) = fields.chance {
        record.set_effect_chance(chance);
    }
    if let Some(strength) = fields.strength {
        record.set_strength(strength);
    }

    record.save(&mut file).context("Failed to write attack record")?;

    println!("{}", record.summary());

    Ok(())
}

/// Open a record file for reading and writing and load the target record.
fn open_for_update(target: &Target) -> Result<(File, AttackRecord)> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&target.input)
        .context("Failed to open record file")?;
    file.seek(SeekFrom::Start(target.offset))?;

    let record = AttackRecord::from_store(&mut file).context("Failed to read attack record")?;

    Ok((file, record))
}

fn load_keys(path: &Path) -> Result<KeyTable> {
    let data = fs::read_to_string(path).context("Failed to read key table")?;
    let table = KeyTable::from_json_str(&data).context("Failed to parse key table")?;
    tracing::debug!(rows = table.len(), "loaded key table");
    Ok(table)
}

fn parse_attack_type(value: &str) -> std::result::Result<u8, String> {
    parse_enum_byte(value, AttackType::all().iter().map(|t| (t.name(), t.raw())))
}

fn parse_effect_kind(value: &str) -> std::result::Result<u8, String> {
    parse_enum_byte(value, EffectKind::all().iter().map(|k| (k.name(), k.raw())))
}

/// Accept a known variant name (case-insensitive) or any raw byte.
fn parse_enum_byte<'a>(
    value: &str,
    mut known: impl Iterator<Item = (&'a str, u8)>,
) -> std::result::Result<u8, String> {
    if let Some((_, raw)) = known.find(|(name, _)| name.eq_ignore_ascii_case(value)) {
        return Ok(raw);
    }

    let parsed = match value.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|_| format!("unknown value {:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_attack_type("heal"), Ok(2));
        assert_eq!(parse_effect_kind("AttackAndDefenseUp"), Ok(7));
    }

    #[test]
    fn test_parse_raw_bytes() {
        assert_eq!(parse_attack_type("9"), Ok(9));
        assert_eq!(parse_effect_kind("0x2a"), Ok(0x2A));
        assert!(parse_effect_kind("sleep").is_err());
        assert!(parse_attack_type("256").is_err());
    }
}
