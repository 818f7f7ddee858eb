use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use keybin::{layout, patch_file, read_header, Patch, PatchLength};

#[derive(Parser)]
#[command(name = "keybin")]
#[command(version, about = "Patcher for the key configuration of a macro pad EEPROM image.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    #[command(about = "Overwrite the leading bytes of a binary file in place.", long_about = None)]
    Patch {
        /// Number of leading bytes to replace: 6 for characters only, or 12
        /// for characters followed by modifiers.
        #[arg(long, env = "KEYBIN_PATCH_LENGTH", default_value = "6")]
        length: PatchLength,

        /// Validate the values and print the resulting bytes without writing
        /// them.
        #[arg(long)]
        dry_run: bool,

        /// Path to the binary file. It must exist and be at least as long as
        /// the patch.
        bin_file_path: Option<PathBuf>,

        /// One value per byte: either a single ASCII character, or "0x"
        /// followed by exactly two hex digits. A lone "-" is a value.
        values: Vec<String>,
    },

    #[command(about = "Print the leading bytes of a binary file.", long_about = None)]
    Show {
        #[arg(long, env = "KEYBIN_PATCH_LENGTH", default_value = "6")]
        length: PatchLength,

        /// Path to the binary file.
        bin_file_path: PathBuf,
    },
}

fn usage(length: PatchLength) -> String {
    let values = (1..=length.get())
        .map(|i| format!("<value_{i}>"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("Usage: keybin patch [--length <6|12>] [--dry-run] <bin_file_path> {values}")
}

fn patch(path: &Path, values: &[String], length: PatchLength, dry_run: bool) -> anyhow::Result<()> {
    let patch = Patch::from_tokens(values, length)
        .context("invalid patch values, file left unchanged")?;
    info!("patching {} bytes of {path:?}: {}", length, layout::hexdump(patch.content()));

    if dry_run {
        let current = read_header(path, length)
            .with_context(|| format!("failed to read {path:?}"))?;
        println!("current:");
        print!("{}", layout::render_table(&current));
        println!("after patching:");
        print!("{}", layout::render_table(&patch.apply(&current)?));
        println!("dry run, {path:?} was not modified");
        return Ok(());
    }

    patch_file(path, &patch)
        .with_context(|| format!("failed to patch {path:?}"))?;
    println!("{path:?} has been updated with {length} new values");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        CliCommand::Patch { length, dry_run, bin_file_path, values } => {
            let Some(path) = bin_file_path.filter(|_| values.len() == length.get()) else {
                println!("{}", usage(length));
                std::process::exit(1);
            };
            patch(&path, &values, length, dry_run)
        }
        CliCommand::Show { length, bin_file_path } => {
            let header = read_header(&bin_file_path, length)
                .with_context(|| format!("failed to read {bin_file_path:?}"))?;
            println!("{bin_file_path:?}: {}", layout::hexdump(&header));
            print!("{}", layout::render_table(&header));
            Ok(())
        }
    }
}
