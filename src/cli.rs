//! CLI argument definitions using clap derive macros.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use result_portal::{DEFAULT_GATEWAY, Exam};

/// Exam result portal: lookup endpoint and result download client.
///
/// `serve` runs the stateless lookup endpoint; `fetch` drives the full
/// client flow (submit, receive CID, download from the gateway).
#[derive(Parser, Debug)]
#[command(name = "result-portal")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the result lookup endpoint
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },

    /// Look up a result and download it from the gateway
    Fetch {
        /// Exam (e.g. NEET-UG, JEE-Main, CBSE-Class-10)
        #[arg(long)]
        exam: Exam,

        /// Roll number (at least 3 characters)
        #[arg(long)]
        roll_no: String,

        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,

        /// Directory to save the result file to
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Base URL of the lookup endpoint
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        api_base: String,

        /// Base URL of the IPFS gateway
        #[arg(long, default_value = DEFAULT_GATEWAY)]
        gateway: String,
    },
}
