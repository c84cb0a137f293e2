/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/
use crate::constants::DOWNLOAD_CHUNK_SIZE;
use crate::error::AppError;
use reqwest::{Client, Url};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, error, info};

/// Extracts the percent-decoded file name from the last segment of a URL path
///
/// Query strings (e.g. presigned URL signatures) are ignored. Names that are
/// empty or would escape the target directory are rejected.
pub fn filename_from_url(target_url: &str) -> Result<String, AppError> {
    let url = Url::parse(target_url)
        .map_err(|e| AppError::InvalidInput(format!("invalid url {target_url}: {e}")))?;

    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();

    let filename = urlencoding::decode(segment)
        .map_err(|e| AppError::InvalidInput(format!("invalid file name in {target_url}: {e}")))?
        .into_owned();

    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\')
    {
        return Err(AppError::InvalidInput(format!(
            "no usable file name in {target_url}"
        )));
    }
    Ok(filename)
}

/// Downloads `target_url` into `target_directory`, streaming the body to disk
///
/// The file keeps the name of the last URL path segment. A partially written
/// file is removed when the transfer fails.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the saved file
/// * `Err(AppError::Http)` - The server answered with a non-2xx status
pub async fn download_file_from_url(
    client: &Client,
    target_url: &str,
    target_directory: &Path,
) -> Result<PathBuf, AppError> {
    let filename = filename_from_url(target_url)?;
    let save_path = target_directory.join(filename);

    debug!("Downloading {} to {}", target_url, save_path.display());

    let mut response = client.get(target_url).send().await.map_err(|e| {
        error!("download file from {} failed: {}", target_url, e);
        AppError::from(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("download file from {} failed with status {}", target_url, status);
        return Err(AppError::Http { status, body });
    }

    let file = File::create(&save_path).await?;
    let mut writer = BufWriter::with_capacity(DOWNLOAD_CHUNK_SIZE, file);

    let written = async {
        let mut total = 0u64;
        while let Some(chunk) = response.chunk().await? {
            if !chunk.is_empty() {
                writer.write_all(&chunk).await?;
                total += chunk.len() as u64;
            }
        }
        writer.flush().await?;
        Ok::<u64, AppError>(total)
    }
    .await;

    match written {
        Ok(total) => {
            info!("Saved {} bytes to {}", total, save_path.display());
            Ok(save_path)
        }
        Err(e) => {
            error!("download file from {} failed: {}", target_url, e);
            if let Err(remove_err) = tokio::fs::remove_file(&save_path).await {
                debug!("Could not remove partial file: {remove_err}");
            }
            Err(e)
        }
    }
}
