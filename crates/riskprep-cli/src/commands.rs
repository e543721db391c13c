//! Command bodies for the riskprep CLI.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::info;

use riskprep_encode::{LabelCodec, RangeCodec, column_kind};

use crate::cli::{DecodeArgs, EncodeArgs, MappingsArgs};
use crate::summary::{print_label_classes, print_range_mappings};

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let df = read_csv(&args.input)?;
    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| derived_path(&args.input, "encoded"));

    if args.label {
        let mut codec = LabelCodec::new();
        let columns = match &args.columns {
            Some(names) => names.clone(),
            None => textual_columns(&df),
        };
        let encoded = codec.fit_transform(&df, &columns)?;
        write_csv(&encoded, &out_path)?;
        print_label_classes(&codec);
    } else {
        let mut codec = RangeCodec::new(args.policy.into());
        if let Some(sentinel) = args.sentinel {
            codec = codec.with_sentinel(sentinel);
        }
        let encoded = codec.fit_transform(&df, args.columns.as_deref())?;
        write_csv(&encoded, &out_path)?;
        if let Some(path) = &args.mapping_out {
            save_mapping(&codec, path)?;
            info!("saved mapping to {}", path.display());
        }
        print_range_mappings(&codec);
    }
    info!("wrote {}", out_path.display());
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let df = read_csv(&args.input)?;
    let codec = load_mapping(&args.mapping)?;
    let decoded = codec.inverse_transform(&df)?;
    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| derived_path(&args.input, "decoded"));
    write_csv(&decoded, &out_path)?;
    info!("wrote {}", out_path.display());
    Ok(())
}

pub fn run_mappings(args: &MappingsArgs) -> Result<()> {
    let df = read_csv(&args.input)?;
    let mut codec = RangeCodec::new(args.policy.into());
    codec.fit_transform(&df, args.columns.as_deref())?;
    print_range_mappings(&codec);
    Ok(())
}

fn textual_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| column_kind(column.dtype()).is_encodable())
        .map(|column| column.name().to_string())
        .collect()
}

fn derived_path(input: &Path, suffix: &str) -> PathBuf {
    input.with_extension(format!("{suffix}.csv"))
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))
}

fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut df = df.clone();
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
    Ok(())
}

fn save_mapping(codec: &RangeCodec, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(codec).context("Failed to serialize mapping")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write mapping: {}", path.display()))
}

fn load_mapping(path: &Path) -> Result<RangeCodec> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read mapping: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse mapping: {}", path.display()))
}
