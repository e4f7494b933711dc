//! Cascade model bootstrap: explicit path, configured path, or a cached download.

use crate::config::ClassifierConfig;
use crate::{Error, Result};
use log::info;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DOWNLOAD_TIMEOUT_SECS: u64 = 120;

/// Resolve the cascade file to load.
///
/// An explicit path (from the command line) wins over `config.path`, which
/// wins over the cached copy of `config.url`. The URL is only fetched when
/// the cache does not already hold it.
///
/// # Errors
///
/// Returns `Model` if a given path does not exist or the URL has no file name,
/// and `Network`/`Io` if the download or the cache write fails.
pub fn resolve(explicit: Option<&Path>, config: &ClassifierConfig) -> Result<PathBuf> {
    if let Some(path) = explicit.or(config.path.as_deref()) {
        if !path.is_file() {
            return Err(Error::Model(format!("Classifier file not found: {}", path.display())));
        }
        return Ok(path.to_path_buf());
    }

    let cache_dir = config.resolved_cache_dir();
    let cached = cache_dir.join(cache_file_name(&config.url)?);
    if cached.is_file() {
        info!("Using cached classifier {}", cached.display());
        return Ok(cached);
    }

    fs::create_dir_all(&cache_dir)?;
    download(&config.url, &cached)?;
    Ok(cached)
}

/// File name the cascade at `url` is cached under: its last path segment.
///
/// # Errors
///
/// Returns `Model` when the URL ends without a file segment.
pub fn cache_file_name(url: &str) -> Result<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let without_scheme = path.split_once("://").map_or(path, |(_, rest)| rest);

    match without_scheme.split_once('/') {
        Some((_, rest)) => match rest.rsplit('/').next() {
            Some(name) if !name.is_empty() && name != "." && name != ".." => Ok(name.to_string()),
            _ => Err(Error::Model(format!("URL has no file name: {}", url))),
        },
        None => Err(Error::Model(format!("URL has no file name: {}", url))),
    }
}

/// Fetch `url` into `target`, writing a temporary sibling first.
fn download(url: &str, target: &Path) -> Result<()> {
    info!("Downloading classifier from {}", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .build()?;
    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(Error::Model(format!(
            "Failed to download classifier: HTTP {}",
            response.status()
        )));
    }

    let bytes = response.bytes()?;
    if bytes.is_empty() {
        return Err(Error::Model("Downloaded classifier is empty".to_string()));
    }

    write_via_temp(target, &bytes)?;

    info!("Classifier saved to {} ({} bytes)", target.display(), bytes.len());
    Ok(())
}

/// `face.xml` becomes `face.xml.part` in the same directory
fn temp_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    target.with_file_name(name)
}

/// Write `bytes` to the temporary sibling of `target`, then move it in place.
/// The temporary file never outlives a failure.
fn write_via_temp(target: &Path, bytes: &[u8]) -> Result<()> {
    let temp = temp_path(target);
    let written = fs::write(&temp, bytes).and_then(|()| fs::rename(&temp, target));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp);
        return Err(e.into());
    }
    Ok(())
}
