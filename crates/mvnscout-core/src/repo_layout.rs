//! Maven repository layout: URL derivation from archetype coordinates.
//!
//! A repository stores artifacts under
//! `<group path>/<artifactId>/<version>/<artifactId>-<version>.pom`, where
//! the group path is the dot-delimited groupId opened into nested
//! directories. Every derivation clones the base URL and returns a new
//! value; the input URL is never modified.

use crate::catalog::Archetype;
use url::Url;

/// Version-list metadata file published under the group directory.
pub const METADATA_FILENAME: &str = "maven-metadata.xml";

/// Returns `base` with `segments` appended to its path, one path segment
/// each. A trailing empty segment on `base` (trailing slash) is dropped
/// before appending. Segments are opaque strings: empty ones stay empty
/// segments. A cannot-be-a-base URL comes back unchanged.
pub fn join_segments<'a, I>(base: &Url, segments: I) -> Url
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// URL of the entry's group directory: the dot-delimited groupId opened
/// into one path segment per component.
pub fn group_url(entry: &Archetype, repo: &Url) -> Url {
    join_segments(repo, entry.group_id.split('.'))
}

/// URL of the artifact directory under the group.
pub fn artifact_url(entry: &Archetype, repo: &Url) -> Url {
    join_segments(&group_url(entry, repo), [entry.artifact_id.as_str()])
}

/// URL of the group-level `maven-metadata.xml` for the entry.
pub fn metadata_url(entry: &Archetype, repo: &Url) -> Url {
    join_segments(&group_url(entry, repo), [METADATA_FILENAME])
}

/// URL of the version directory under the artifact.
pub fn version_url(entry: &Archetype, repo: &Url) -> Url {
    join_segments(&artifact_url(entry, repo), [entry.version.as_str()])
}

/// URL of the POM descriptor for the entry's exact version.
pub fn pom_url(entry: &Archetype, repo: &Url) -> Url {
    let pom = format!("{}-{}.pom", entry.artifact_id, entry.version);
    join_segments(&version_url(entry, repo), [pom.as_str()])
}
