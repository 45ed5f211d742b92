use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Timestamp;
use super::release::Release;

/// Registries and forges a project can be tracked on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseSource {
    Github,
    Gitlab,
    Npm,
    Pypi,
    Docker,
    Crates,
    Maven,
}

impl ReleaseSource {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Npm => "npm",
            Self::Pypi => "pypi",
            Self::Docker => "docker",
            Self::Crates => "crates",
            Self::Maven => "maven",
        }
    }

    /// Human-readable label for the source.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Gitlab => "GitLab",
            Self::Npm => "npm",
            Self::Pypi => "PyPI",
            Self::Docker => "Docker Hub",
            Self::Crates => "Crates.io",
            Self::Maven => "Maven Central",
        }
    }

    /// Every source, in the order the UI offers them.
    #[must_use]
    pub fn all() -> &'static [ReleaseSource] {
        &[
            Self::Github,
            Self::Gitlab,
            Self::Npm,
            Self::Pypi,
            Self::Docker,
            Self::Crates,
            Self::Maven,
        ]
    }
}

impl fmt::Display for ReleaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseSource {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "github" => Ok(Self::Github),
            "gitlab" => Ok(Self::Gitlab),
            "npm" => Ok(Self::Npm),
            "pypi" => Ok(Self::Pypi),
            "docker" => Ok(Self::Docker),
            "crates" => Ok(Self::Crates),
            "maven" => Ok(Self::Maven),
            _ => Err("unknown release source"),
        }
    }
}

/// A tracked project as returned by `GET /projects`.
///
/// The list shape carries no subscription state; only the detail endpoint
/// joins that in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: i64,

    /// The project's display name.
    pub name: String,

    /// Where releases are fetched from.
    pub source: ReleaseSource,

    /// Upstream repository URL, when known.
    pub repo_url: Option<String>,

    /// Short description of the project.
    pub description: Option<String>,

    /// Avatar image URL, when the source provides one.
    pub avatar_url: Option<String>,

    /// Identifier of the project at its source, when known.
    #[serde(default)]
    pub external_id: Option<String>,

    /// When the source was last polled for releases.
    #[serde(default)]
    pub last_checked_at: Option<Timestamp>,

    /// When the project was added.
    pub created_at: Timestamp,
}

/// A single project as returned by `GET /projects/{id}`.
///
/// Extends the list shape with recent releases and the server-computed
/// `is_subscribed` flag the detail view seeds its toggle from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetail {
    /// The project itself.
    #[serde(flatten)]
    pub project: Project,

    /// Most recent releases, newest first.
    #[serde(default)]
    pub recent_releases: Vec<Release>,

    /// Whether the requesting user is subscribed to this project.
    #[serde(default)]
    pub is_subscribed: bool,
}

/// Request to start tracking a project via `POST /projects`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectCreate {
    /// The project's display name.
    pub name: String,

    /// Where releases should be fetched from.
    pub source: ReleaseSource,

    /// Upstream repository URL.
    pub repo_url: Option<String>,

    /// Short description of the project.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_source_roundtrip() {
        for source in ReleaseSource::all() {
            assert_eq!(ReleaseSource::from_str(source.as_str()).unwrap(), *source);
            assert_eq!(source.to_string(), source.as_str());
        }
    }

    #[test]
    fn release_source_invalid() {
        assert!(ReleaseSource::from_str("sourceforge").is_err());
    }

    #[test]
    fn release_source_labels() {
        assert_eq!(ReleaseSource::Github.label(), "GitHub");
        assert_eq!(ReleaseSource::Crates.label(), "Crates.io");
    }

    #[test]
    fn release_source_wire_form_is_snake_case() {
        let json = serde_json::to_string(&ReleaseSource::Pypi).unwrap();
        assert_eq!(json, "\"pypi\"");
    }

    #[test]
    fn project_deserialization() {
        let json = r#"{
            "id": 42,
            "name": "tokio",
            "source": "crates",
            "repo_url": "https://github.com/tokio-rs/tokio",
            "description": null,
            "avatar_url": null,
            "created_at": "2026-01-01T00:00:00"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 42);
        assert_eq!(project.source, ReleaseSource::Crates);
        assert!(project.external_id.is_none());
        assert!(project.last_checked_at.is_none());
    }

    #[test]
    fn project_detail_flattens_and_defaults() {
        let json = r#"{
            "id": 42,
            "name": "tokio",
            "source": "crates",
            "repo_url": null,
            "description": "An async runtime",
            "avatar_url": null,
            "created_at": "2026-01-01T00:00:00",
            "is_subscribed": true
        }"#;

        let detail: ProjectDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.project.name, "tokio");
        assert!(detail.is_subscribed);
        assert!(detail.recent_releases.is_empty());
    }

    #[test]
    fn project_create_serialization() {
        let request = ProjectCreate {
            name: "React".to_string(),
            source: ReleaseSource::Github,
            repo_url: Some("https://github.com/facebook/react".to_string()),
            description: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"source\":\"github\""));
        assert!(json.contains("\"name\":\"React\""));
    }
}
