//! Client for the public content-addressed storage gateway.
//!
//! The gateway is an external collaborator reached over plain HTTP GET at
//! `<gateway-base>/<cid>`. The response body is streamed to a `.part` file
//! which is renamed to the final name only on success; on any failure the
//! partial file is removed, so the output directory never accumulates
//! incomplete results.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};
use url::Url;

use super::build_http_client;
use super::error::ClientError;

/// Default public IPFS gateway base.
pub const DEFAULT_GATEWAY: &str = "https://w3s.link/ipfs";

/// Client for fetching result files by CID.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base: Url,
}

impl GatewayClient {
    /// Creates a client for the gateway at `gateway_base`
    /// (e.g. `https://w3s.link/ipfs`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the base URL does not parse.
    pub fn new(gateway_base: &str) -> Result<Self, ClientError> {
        let base = Url::parse(gateway_base.trim_end_matches('/'))
            .map_err(|_| ClientError::invalid_url(gateway_base))?;
        Ok(Self {
            client: build_http_client(),
            base,
        })
    }

    /// The URL a given CID resolves to on this gateway.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the CID produces an
    /// unparseable URL.
    pub fn file_url(&self, cid: &str) -> Result<Url, ClientError> {
        let joined = format!("{}/{cid}", self.base.as_str().trim_end_matches('/'));
        Url::parse(&joined).map_err(|_| ClientError::invalid_url(joined))
    }

    /// Fetches the content for `cid` and saves it as `filename` in
    /// `output_dir`, returning the final path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Gateway`] for non-success gateway statuses,
    /// [`ClientError::Io`] for file system failures, and transport variants
    /// for network failures. On error no partial file is left behind.
    #[instrument(skip(self), fields(cid = %cid))]
    pub async fn download_result(
        &self,
        cid: &str,
        output_dir: &Path,
        filename: &str,
    ) -> Result<PathBuf, ClientError> {
        let url = self.file_url(cid)?;
        debug!(url = %url, "fetching result from gateway");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClientError::transport(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::gateway(url.as_str(), status.as_u16()));
        }

        let final_path = output_dir.join(filename);
        let part_path = output_dir.join(format!("{filename}.part"));

        let file = File::create(&part_path)
            .await
            .map_err(|e| ClientError::io(part_path.clone(), e))?;
        let mut writer = BufWriter::new(file);

        let bytes_written = match stream_to_file(&mut writer, response, &url, &part_path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %part_path.display(), "removing partial file after error");
                drop(writer);
                let _ = tokio::fs::remove_file(&part_path).await;
                return Err(err);
            }
        };
        drop(writer);

        if let Err(e) = tokio::fs::rename(&part_path, &final_path).await {
            debug!(path = %part_path.display(), "removing partial file after failed rename");
            let _ = tokio::fs::remove_file(&part_path).await;
            return Err(ClientError::io(final_path.clone(), e));
        }

        info!(
            path = %final_path.display(),
            bytes = bytes_written,
            "result downloaded"
        );
        Ok(final_path)
    }
}

/// Streams the response body into the writer, returning the byte count.
async fn stream_to_file(
    writer: &mut BufWriter<File>,
    response: reqwest::Response,
    url: &Url,
    path: &Path,
) -> Result<u64, ClientError> {
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ClientError::transport(url.as_str(), e))?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| ClientError::io(path, e))?;
        bytes_written += chunk.len() as u64;
    }
    writer.flush().await.map_err(|e| ClientError::io(path, e))?;
    Ok(bytes_written)
}
