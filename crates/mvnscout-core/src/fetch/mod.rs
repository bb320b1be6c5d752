//! Archetype catalog retrieval.
//!
//! Resolves the catalog URL from the repository base, probes it with a HEAD
//! request for observability, downloads it with a GET, and hands the bytes
//! to the catalog decoder. A pre-downloaded local file can substitute for
//! the network path via `CatalogSource::File`; the fetch functions
//! themselves stay transport-only.

mod get;
mod head;

pub use get::fetch_bytes;
pub use head::{probe, ProbeResult};

use crate::catalog::{parse_catalog, ArchetypeCatalog, ParseError};
use crate::config::FetchOptions;
use crate::repo_layout::join_segments;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Catalog file advertised at the root of a Maven repository.
pub const CATALOG_FILENAME: &str = "archetype-catalog.xml";

/// Where the catalog bytes come from: the repository over HTTP, or a
/// pre-downloaded local file.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Repository(Url),
    File(PathBuf),
}

/// HTTP failure during probe or fetch.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    #[error("{method} returned HTTP {status}")]
    Status { method: &'static str, status: u32 },
}

/// Any failure while loading a catalog. Every variant is fatal; there is
/// no retry.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request for {url} failed")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error("could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode archetype catalog")]
    Parse(#[from] ParseError),
}

/// URL of the repository's archetype catalog: the base URL plus one
/// `archetype-catalog.xml` path segment.
pub fn catalog_url(repo: &Url) -> Url {
    join_segments(repo, [CATALOG_FILENAME])
}

/// Load and decode the catalog from `source`.
///
/// The repository path runs resolve, probe, fetch, then decode; a failure
/// at any stage aborts the load. The probe result is logged only, never
/// used for correctness.
pub fn load_catalog(
    source: &CatalogSource,
    opts: FetchOptions,
) -> Result<ArchetypeCatalog, CatalogError> {
    match source {
        CatalogSource::Repository(repo) => {
            let url = catalog_url(repo);
            tracing::info!(url = %url, "downloading archetype catalog");

            let head = probe(url.as_str(), opts).map_err(|source| CatalogError::Transport {
                url: url.to_string(),
                source,
            })?;
            match head.content_length {
                Some(bytes) => tracing::info!("{} is {} bytes", CATALOG_FILENAME, bytes),
                None => tracing::info!("remote did not report a size for {}", CATALOG_FILENAME),
            }

            let body =
                fetch_bytes(url.as_str(), opts).map_err(|source| CatalogError::Transport {
                    url: url.to_string(),
                    source,
                })?;
            Ok(parse_catalog(body.as_slice())?)
        }
        CatalogSource::File(path) => {
            tracing::info!(path = %path.display(), "reading archetype catalog from file");
            let file = File::open(path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(parse_catalog(BufReader::new(file))?)
        }
    }
}
