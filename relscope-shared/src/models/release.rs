use serde::{Deserialize, Serialize};

use super::Timestamp;
use super::project::ReleaseSource;

/// Characters of changelog shown inline before the text is cut off.
const CHANGELOG_SNIPPET_CHARS: usize = 500;

/// A release of a tracked project, as returned by `GET /releases/project/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    /// Unique identifier for the release.
    pub id: i64,

    /// The project this release belongs to.
    pub project_id: i64,

    /// Version string, e.g. `1.2.3`.
    pub version: String,

    /// When the release was published at the source.
    pub release_date: Option<Timestamp>,

    /// Release notes, usually markdown.
    pub changelog: Option<String>,

    /// Link to the full release notes.
    #[serde(default)]
    pub changelog_url: Option<String>,

    /// Tag the release was cut from.
    pub tag_name: Option<String>,

    /// Whether the source marks this as a draft.
    #[serde(default)]
    pub draft: bool,

    /// Whether the source marks this as a pre-release.
    #[serde(default)]
    pub prerelease: bool,

    /// When the release was first seen by the tracker.
    pub created_at: Timestamp,
}

impl Release {
    /// The leading slice of the changelog shown inline, cut at a char
    /// boundary.
    #[must_use]
    pub fn changelog_snippet(&self) -> Option<String> {
        self.changelog.as_ref().map(|text| {
            if text.chars().count() <= CHANGELOG_SNIPPET_CHARS {
                text.clone()
            } else {
                let cut: String = text.chars().take(CHANGELOG_SNIPPET_CHARS).collect();
                format!("{cut}…")
            }
        })
    }
}

/// A feed entry from `GET /releases/feed`, denormalized with its project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseFeedItem {
    /// Unique identifier for the release.
    pub id: i64,

    /// Name of the project that published the release.
    pub project_name: String,

    /// Where the project is tracked.
    pub project_source: ReleaseSource,

    /// Avatar of the project, when the source provides one.
    #[serde(default)]
    pub project_avatar_url: Option<String>,

    /// Version string, e.g. `1.2.3`.
    pub version: String,

    /// When the release was published at the source.
    pub release_date: Option<Timestamp>,

    /// Release notes, usually markdown.
    pub changelog: Option<String>,

    /// Tag the release was cut from.
    pub tag_name: Option<String>,

    /// Whether the source marks this as a pre-release.
    #[serde(default)]
    pub prerelease: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_release(changelog: Option<String>) -> Release {
        Release {
            id: 7,
            project_id: 42,
            version: "2.0.0".to_string(),
            release_date: None,
            changelog,
            changelog_url: None,
            tag_name: Some("v2.0.0".to_string()),
            draft: false,
            prerelease: false,
            created_at: Timestamp(Utc::now()),
        }
    }

    #[test]
    fn short_changelog_passes_through() {
        let release = sample_release(Some("Bug fixes.".to_string()));
        assert_eq!(release.changelog_snippet().unwrap(), "Bug fixes.");
    }

    #[test]
    fn long_changelog_is_cut() {
        let release = sample_release(Some("x".repeat(1200)));
        let snippet = release.changelog_snippet().unwrap();
        assert_eq!(snippet.chars().count(), 501);
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn multibyte_changelog_cuts_on_char_boundary() {
        let release = sample_release(Some("é".repeat(600)));
        let snippet = release.changelog_snippet().unwrap();
        assert_eq!(snippet.chars().count(), 501);
    }

    #[test]
    fn missing_changelog_yields_none() {
        assert!(sample_release(None).changelog_snippet().is_none());
    }

    #[test]
    fn feed_item_deserialization() {
        let json = r#"{
            "id": 9,
            "project_name": "react",
            "project_source": "github",
            "version": "19.1.0",
            "release_date": "2026-02-01T12:00:00",
            "changelog": null,
            "tag_name": "v19.1.0",
            "prerelease": false
        }"#;

        let item: ReleaseFeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.project_name, "react");
        assert_eq!(item.project_source, ReleaseSource::Github);
        assert!(item.project_avatar_url.is_none());
        assert!(!item.prerelease);
    }

    #[test]
    fn release_deserialization_defaults_flags() {
        let json = r#"{
            "id": 7,
            "project_id": 42,
            "version": "2.0.0",
            "release_date": null,
            "changelog": null,
            "tag_name": null,
            "created_at": "2026-01-01T00:00:00"
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();
        assert!(!release.draft);
        assert!(!release.prerelease);
    }
}
