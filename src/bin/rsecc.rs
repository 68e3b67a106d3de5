//! rsecc - protect files with chunked Reed-Solomon ECC
//!
//! The protected file is the original bytes followed by the ECC blocks. The
//! same `--ecc` and `--chunk-size` must be given to every subcommand that
//! reads it back.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use log::info;
use rsecc::Codec;
use std::fs;
use std::path::{Path, PathBuf};

fn codec_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("ecc")
                .short('e')
                .long("ecc")
                .help("ECC bytes per chunk (corrects up to half as many errors)")
                .value_name("BYTES")
                .value_parser(value_parser!(usize))
                .default_value("32"),
        )
        .arg(
            Arg::new("chunk_size")
                .short('c')
                .long("chunk-size")
                .help("Data bytes per chunk")
                .value_name("BYTES")
                .value_parser(value_parser!(usize))
                .default_value("223"),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .index(1)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .help("Output file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .index(2)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = Command::new("rsecc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon error correction for files")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(codec_args(
            Command::new("encode")
                .visible_alias("e")
                .about("Append ECC blocks to a file")
                .arg(input_arg())
                .arg(output_arg()),
        ))
        .subcommand(codec_args(
            Command::new("decode")
                .visible_alias("d")
                .about("Correct a protected file and write the original bytes")
                .arg(input_arg())
                .arg(output_arg()),
        ))
        .subcommand(codec_args(
            Command::new("verify")
                .visible_alias("v")
                .about("Check a protected file for damage without correcting it")
                .arg(input_arg()),
        ))
        .subcommand(codec_args(
            Command::new("ecc")
                .about("Print the ECC blocks of a file as hex")
                .arg(input_arg()),
        ))
        .get_matches();

    match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some(("verify", sub_matches)) => handle_verify(sub_matches),
        Some(("ecc", sub_matches)) => handle_ecc(sub_matches),
        _ => unreachable!("subcommand is required"),
    }
}

fn codec_from(matches: &ArgMatches) -> Result<Codec> {
    let ecc_len = *matches.get_one::<usize>("ecc").expect("ecc has a default");
    let chunk_size = *matches
        .get_one::<usize>("chunk_size")
        .expect("chunk_size has a default");
    Codec::new(ecc_len, chunk_size).context("Invalid codec parameters")
}

fn path_arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a PathBuf {
    matches
        .get_one::<PathBuf>(name)
        .unwrap_or_else(|| panic!("{} is required", name))
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Message bytes followed by their ECC blocks
fn protect(codec: &Codec, message: &[u8]) -> Result<Vec<u8>> {
    anyhow::ensure!(!message.is_empty(), "Cannot protect an empty file");

    let mut buffer = message.to_vec();
    buffer.resize(codec.encoded_len(message.len()), 0);
    let (data, ecc) = buffer.split_at_mut(message.len());
    codec.encode(data, ecc);
    Ok(buffer)
}

fn handle_encode(matches: &ArgMatches) -> Result<()> {
    let codec = codec_from(matches)?;
    let input = path_arg(matches, "input");
    let output = path_arg(matches, "output");

    let message = read_input(input)?;
    let buffer = protect(&codec, &message)?;
    fs::write(output, &buffer).with_context(|| format!("Failed to write {}", output.display()))?;

    let layout = codec.layout(message.len());
    info!(
        "{} chunks of up to {} bytes, {} ECC bytes each",
        layout.chunk_count(),
        codec.chunk_size(),
        codec.ecc_len()
    );
    println!(
        "Encoded {} bytes -> {} bytes ({} ECC bytes)",
        message.len(),
        buffer.len(),
        layout.ecc_total_len()
    );
    Ok(())
}

fn handle_decode(matches: &ArgMatches) -> Result<()> {
    let codec = codec_from(matches)?;
    let input = path_arg(matches, "input");
    let output = path_arg(matches, "output");

    let mut buffer = read_input(input)?;
    let report = codec
        .decode(&mut buffer)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    fs::write(output, &buffer[..report.decoded_len])
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "{} of {} chunks needed correction",
        report.corrected_chunks, report.chunks
    );
    if report.is_clean() {
        println!("Decoded {} bytes, no errors found", report.decoded_len);
    } else {
        println!(
            "Decoded {} bytes, corrected {} bytes in {} chunks",
            report.decoded_len, report.corrected_symbols, report.corrected_chunks
        );
    }
    Ok(())
}

fn handle_verify(matches: &ArgMatches) -> Result<()> {
    let codec = codec_from(matches)?;
    let input = path_arg(matches, "input");

    let buffer = read_input(input)?;
    let report = codec
        .verify(&buffer)
        .with_context(|| format!("Failed to verify {}", input.display()))?;

    info!("{} bytes in {} chunks", report.message_len, report.chunks);
    if report.is_intact() {
        println!("All {} chunks are intact", report.chunks);
        Ok(())
    } else {
        println!(
            "{} of {} chunks are damaged",
            report.damaged_chunks, report.chunks
        );
        std::process::exit(1);
    }
}

fn handle_ecc(matches: &ArgMatches) -> Result<()> {
    let codec = codec_from(matches)?;
    let input = path_arg(matches, "input");

    let message = read_input(input)?;
    let buffer = protect(&codec, &message)?;

    for ecc in buffer[message.len()..].chunks(codec.ecc_len()) {
        println!("{}", hex::encode(ecc));
    }
    Ok(())
}
