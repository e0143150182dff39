// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod render;
mod source;

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rcblob_bridge::Resolver;
use rcblob_format::Table;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::source::SourceArgs;

const LOG_ENV: &str = "RCBLOB_LOG";

#[derive(Parser)]
#[command(name = "rcblob", version, about = "Inspect embedded resource lookup tables")]
struct Cli {
	/// Emit logs as JSON lines.
	#[arg(long, global = true)]
	log_json: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Decode a lookup table and list its records.
	Dump {
		/// Raw table bytes. Without it the table is read from the resource source.
		#[arg(long, value_name = "FILE")]
		file: Option<PathBuf>,

		#[command(flatten)]
		source: SourceArgs,

		/// Print the records as JSON.
		#[arg(long)]
		json: bool,
	},
	/// Resolve a name to its blob.
	Resolve {
		name: String,

		#[command(flatten)]
		source: SourceArgs,

		/// Write the blob here instead of reporting its size.
		#[arg(long, short, value_name = "FILE")]
		out: Option<PathBuf>,
	},
	/// Print the last identifier allocated by the producing tool.
	Counter {
		#[command(flatten)]
		source: SourceArgs,
	},
}

fn init_logging(json: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
	let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr);
	let _ = if json {
		builder.json().try_init()
	} else {
		builder.try_init()
	};
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.log_json);

	match cli.command {
		Command::Dump {
			file,
			source,
			json,
		} => {
			let table = match file {
				Some(path) => {
					let bytes = fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
					Table::deserialize(&bytes).with_context(|| format!("failed to decode {}", path.display()))?
				}
				None => Resolver::new(source.open()?).table()?,
			};
			print!("{}", render::table(&table, json)?);
		}
		Command::Resolve {
			name,
			source,
			out,
		} => {
			let resolver = Resolver::new(source.open()?);
			let Some(blob) = resolver.try_resolve(name.as_bytes())? else {
				bail!("no resource named {name:?}");
			};
			match out {
				Some(path) => {
					fs::write(&path, blob.as_bytes())
						.with_context(|| format!("failed to write {}", path.display()))?;
					info!(name = %name, bytes = blob.len(), path = %path.display(), "blob written");
				}
				None => println!("{name}: {} bytes", blob.len()),
			}
		}
		Command::Counter {
			source,
		} => match Resolver::new(source.open()?).last_allocated_id()? {
			Some(id) => println!("{id}"),
			None => bail!("no allocation counter recorded"),
		},
	}

	Ok(())
}
