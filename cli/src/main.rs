//! prashna - exam paper formatter
//!
//! Usage:
//!   prashna format paper.json [-o FILE|DIR]   Format a structured paper as DOCX
//!   prashna validate paper.json               List content that will print oddly
//!   prashna filename paper.json               Print the auto-generated filename
//!   prashna demo [-o DIR]                     Write the built-in demo paper

mod commands;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::RenderFlags;
use paper_model::ImageKey;
use settings::CliSettings;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prashna", version, about = "Format structured exam papers as print-ready DOCX")]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true, env = "PRASHNA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a paper JSON file as a DOCX question paper
    Format {
        /// Paper JSON (a surrounding ```json fence is allowed)
        paper: PathBuf,

        /// Output file, or an existing directory for the auto-generated name
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// School name shown in the header
        #[arg(long)]
        school: Option<String>,

        /// School logo image
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Spacious layout instead of compact
        #[arg(long)]
        normal: bool,

        /// Question diagram, repeatable
        #[arg(long = "image", value_name = "S_Q=PATH", value_parser = commands::parse_image_arg)]
        images: Vec<(ImageKey, PathBuf)>,
    },

    /// Check a paper JSON file and list issues
    Validate {
        paper: PathBuf,
    },

    /// Print the auto-generated output filename for a paper
    Filename {
        paper: PathBuf,
    },

    /// Write the built-in demo paper
    Demo {
        /// Output directory or file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spacious layout instead of compact
        #[arg(long)]
        normal: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = CliSettings::load(cli.config.as_deref());

    match cli.command {
        Commands::Format {
            paper,
            output,
            school,
            logo,
            normal,
            images,
        } => {
            let flags = RenderFlags {
                output,
                school,
                logo,
                normal,
                images,
            };
            let written = commands::format(&paper, &settings, &flags)?;
            println!("{}", written.display());
        }
        Commands::Validate { paper } => {
            commands::validate(&paper)?;
        }
        Commands::Filename { paper } => {
            println!("{}", commands::filename(&paper)?);
        }
        Commands::Demo { output, normal } => {
            let flags = RenderFlags {
                output,
                normal,
                ..RenderFlags::default()
            };
            let written = commands::demo(&settings, &flags)?;
            println!("{}", written.display());
        }
    }

    Ok(())
}
