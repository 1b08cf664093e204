//! CLI entry point for the result portal.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use result_portal::{
    ApiClient, AppState, FixedCidLookup, FormState, GatewayClient, build_router, result_filename,
};
use tracing::{debug, error, info};

mod cli;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    match args.command {
        Command::Serve { addr } => serve(addr).await,
        Command::Fetch {
            exam,
            roll_no,
            dob,
            output_dir,
            api_base,
            gateway,
        } => {
            fetch(
                &exam.to_string(),
                &roll_no,
                &dob,
                &output_dir,
                &api_base,
                &gateway,
            )
            .await
        }
    }
}

/// Runs the stateless lookup endpoint until interrupted.
async fn serve(addr: std::net::SocketAddr) -> Result<()> {
    let state = AppState::new(Arc::new(FixedCidLookup::placeholder()));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "result lookup endpoint listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Drives the full client flow through the form state machine:
/// validate, submit for a CID, then download the result file.
async fn fetch(
    exam: &str,
    roll_no: &str,
    dob: &str,
    output_dir: &std::path::Path,
    api_base: &str,
    gateway: &str,
) -> Result<()> {
    let mut form = FormState::new(exam, roll_no, dob);

    let submission = match form.begin_submit() {
        Ok(submission) => submission,
        Err(err) => bail!("{err}"),
    };

    let api = ApiClient::new(api_base)?;
    let cid = match api.fetch_cid(&submission).await {
        Ok(cid) => {
            form.submit_succeeded(cid.clone());
            cid
        }
        Err(err) => {
            form.submit_failed(err.to_string());
            bail!("{err}");
        }
    };
    info!(cid = %cid, "result is ready for download");

    let gateway_client = GatewayClient::new(gateway)?;
    let filename = result_filename(&submission.exam, &submission.roll_no);
    let cid = form.begin_download()?;
    match gateway_client
        .download_result(&cid, output_dir, &filename)
        .await
    {
        Ok(path) => {
            form.download_succeeded();
            info!(path = %path.display(), "result saved");
            println!("{}", path.display());
            Ok(())
        }
        Err(err) => {
            form.download_failed(err.to_string());
            // Lookup already succeeded; report the CID so the user can retry
            // the download without resubmitting.
            error!(cid = %cid, "download failed, CID is still valid for retry");
            bail!("{err}");
        }
    }
}
