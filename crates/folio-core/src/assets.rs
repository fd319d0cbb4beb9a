//! Hero image loading: local files, or remote URLs from allowlisted hosts
//! backed by an on-disk cache with a minimum lifetime.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::{APP_DIR_NAME, DEFAULT_ALLOWED_IMAGE_HOST, DEFAULT_IMAGE_CACHE_TTL_SECS};
use crate::error::{FolioError, Result};

/// Largest remote image we are willing to download.
const MAX_REMOTE_IMAGE_BYTES: u64 = 16 * 1024 * 1024;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a. Cache file names must survive toolchain upgrades, so no `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Which remote hosts images may come from, and how long fetched copies are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePolicy {
    pub allowed_hosts: Vec<String>,
    pub min_cache_ttl_secs: u64,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            allowed_hosts: vec![DEFAULT_ALLOWED_IMAGE_HOST.into()],
            min_cache_ttl_secs: DEFAULT_IMAGE_CACHE_TTL_SECS,
        }
    }
}

impl ImagePolicy {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.min_cache_ttl_secs)
    }

    pub fn is_host_allowed(&self, host: &str) -> bool {
        self.allowed_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
    }

    /// Reject URLs that do not parse or whose host is not allowlisted.
    pub fn check_url(&self, url: &str) -> Result<()> {
        let parsed = ureq::get(url)
            .request_url()
            .map_err(|e| FolioError::Network(e.to_string()))?;
        let host = parsed.host();

        if self.is_host_allowed(host) {
            Ok(())
        } else {
            Err(FolioError::ImageHostNotAllowed(host.to_string()))
        }
    }
}

/// Where the hero image comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
}

impl ImageSource {
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Remote(value.to_string())
        } else {
            Self::Local(PathBuf::from(value))
        }
    }
}

/// Decoded RGBA8 image.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

/// Disk cache for fetched remote images.
#[derive(Clone, Debug)]
pub struct ImageCache {
    dir: PathBuf,
    ttl: Duration,
}

impl ImageCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// Cache under the platform cache directory.
    ///
    /// - macOS: ~/Library/Caches/folio/images
    /// - Linux: ~/.cache/folio/images
    /// - Windows: %LOCALAPPDATA%\folio\images
    pub fn default_dir() -> PathBuf {
        if let Some(cache_dir) = dirs::cache_dir() {
            cache_dir.join(APP_DIR_NAME).join("images")
        } else {
            PathBuf::from("cache/images")
        }
    }

    pub fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{:016x}.img", fnv1a(url.as_bytes())))
    }

    /// Cached bytes for `url`, if present and younger than the TTL.
    pub fn get_fresh(&self, url: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(url);
        let age = std::fs::metadata(&path).ok()?.modified().ok()?.elapsed().ok()?;
        if age >= self.ttl {
            debug!(url, ?age, "Cached image expired");
            return None;
        }
        std::fs::read(&path).ok()
    }

    pub fn store(&self, url: &str, bytes: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.entry_path(url), bytes)?;
        Ok(())
    }
}

/// Load the hero image, going through the policy and cache for remote sources.
pub fn load_image(
    source: &ImageSource,
    policy: &ImagePolicy,
    cache: &ImageCache,
) -> Result<DecodedImage> {
    match source {
        ImageSource::Local(path) => DecodedImage::decode(&std::fs::read(path)?),
        ImageSource::Remote(url) => {
            policy.check_url(url)?;

            if let Some(bytes) = cache.get_fresh(url) {
                debug!(url, "Image cache hit");
                return DecodedImage::decode(&bytes);
            }

            let bytes = fetch(url)?;
            let image = DecodedImage::decode(&bytes)?;
            if let Err(e) = cache.store(url, &bytes) {
                debug!(url, error = %e, "Failed to cache image");
            }
            Ok(image)
        }
    }
}

fn fetch(url: &str) -> Result<Vec<u8>> {
    info!(url, "Fetching image");
    let agent = ureq::agent();
    let resp = agent
        .get(url)
        .set("User-Agent", concat!("folio/", env!("CARGO_PKG_VERSION")))
        .call()
        .map_err(|e| FolioError::Network(e.to_string()))?;

    if let Some(len) = resp
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok())
    {
        if len > MAX_REMOTE_IMAGE_BYTES {
            return Err(too_large(len));
        }
    }

    read_capped(resp.into_reader(), MAX_REMOTE_IMAGE_BYTES)
}

fn too_large(len: u64) -> FolioError {
    FolioError::Network(format!(
        "image too large ({len} bytes, limit {MAX_REMOTE_IMAGE_BYTES})"
    ))
}

/// Read at most `limit` bytes, failing instead of truncating when the body is longer.
fn read_capped(reader: impl Read, limit: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.take(limit + 1).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > limit {
        return Err(FolioError::Network(format!(
            "image too large (over {limit} bytes)"
        )));
    }
    Ok(bytes)
}
