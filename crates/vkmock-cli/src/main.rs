use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use vkmock_cli::{manifest, probe};

#[derive(Parser)]
#[command(name = "vkmock")]
#[command(about = "vkmock - mock Vulkan driver harness")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the loader ICD manifest for the mock driver
    Manifest {
        /// Driver library path recorded in the manifest
        #[arg(short, long)]
        library: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Advertised API version, e.g. 1.3.280
        #[arg(long)]
        api_version: Option<String>,
    },

    /// Load a built driver and run the loader handshake against it
    Probe {
        /// Path to the driver shared library
        #[arg(short, long)]
        library: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    vkmock_common::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Manifest {
            library,
            output,
            api_version,
        } => {
            let manifest = manifest::build_manifest(library, api_version.as_deref())?;
            manifest::write_manifest(&manifest, output.as_deref())?;
        }

        Commands::Probe { library, json } => {
            info!("probing {}", library.display());
            let report = probe::run_probe(&library)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print_pretty();
            }
        }
    }

    Ok(())
}
