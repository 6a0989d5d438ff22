//! Update availability check against the published-versions repository.

use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::calendar_version::CalendarVersion;
use crate::error::{CoreError, Result};

const FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the latest published version string.
pub trait VersionFeed {
    fn latest_version(&self) -> Result<String>;
}

/// Feed that reads a plain-text version file over HTTP, the layout the
/// versions repository publishes: one file per application, containing only
/// the latest version string.
pub struct HttpVersionFeed {
    endpoint: Url,
    client: reqwest::blocking::Client,
}

impl HttpVersionFeed {
    pub fn new(endpoint: Url) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FEED_TIMEOUT)
            .build()?;
        Ok(Self { endpoint, client })
    }

    /// Feed for `app_name`'s version file on the main branch of the
    /// `owner/repo` versions repository.
    pub fn for_repository(owner: &str, repo: &str, app_name: &str) -> Result<Self> {
        let endpoint = Url::parse(&format!(
            "https://raw.githubusercontent.com/{owner}/{repo}/refs/heads/main/{app_name}"
        ))?;
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl VersionFeed for HttpVersionFeed {
    fn latest_version(&self) -> Result<String> {
        let response = self.client.get(self.endpoint.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::FeedStatus(status.as_u16()));
        }
        Ok(response.text()?.trim().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCheckResult {
    pub has_update: bool,
    pub current_version: String,
    pub latest_version: Option<String>,
}

/// Asks the feed for the latest published version and compares it against the
/// running version. Feed failures propagate; callers that want the original
/// silent-check behavior log the error and move on.
pub fn check_for_update(
    current_version: &str,
    feed: &dyn VersionFeed,
) -> Result<UpdateCheckResult> {
    tracing::info!("checking for updates; current version {current_version}");
    let latest_version = feed.latest_version()?;
    let has_update = update_available(current_version, &latest_version);
    tracing::info!("latest published version {latest_version}; update available: {has_update}");

    Ok(UpdateCheckResult {
        has_update,
        current_version: current_version.to_string(),
        latest_version: Some(latest_version),
    })
}

// Versions are compared numerically after parsing, so `2024.3.9.10` is newer
// than `2024.3.9.9`. A side that is not a calendar version reports no update.
fn update_available(current_raw: &str, latest_raw: &str) -> bool {
    let current = match CalendarVersion::from_str(current_raw) {
        Ok(version) => version,
        Err(_) => {
            tracing::warn!("running version '{current_raw}' is not a calendar version");
            return false;
        }
    };
    let latest = match CalendarVersion::from_str(latest_raw) {
        Ok(version) => version,
        Err(_) => {
            tracing::warn!("published version '{latest_raw}' is not a calendar version");
            return false;
        }
    };

    current < latest
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedFeed(&'static str);

    impl VersionFeed for FixedFeed {
        fn latest_version(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingFeed;

    impl VersionFeed for FailingFeed {
        fn latest_version(&self) -> Result<String> {
            Err(CoreError::FeedStatus(404))
        }
    }

    #[test]
    fn newer_published_version_reports_an_update() {
        let result = check_for_update("2024.3.9.0", &FixedFeed("2024.3.9.1")).expect("check");
        assert!(result.has_update);
        assert_eq!(result.latest_version.as_deref(), Some("2024.3.9.1"));
    }

    #[test]
    fn matching_versions_report_up_to_date() {
        let result = check_for_update("2024.3.9.1", &FixedFeed("2024.3.9.1")).expect("check");
        assert!(!result.has_update);
    }

    #[test]
    fn older_published_version_reports_up_to_date() {
        let result = check_for_update("2024.3.10.0", &FixedFeed("2024.3.9.5")).expect("check");
        assert!(!result.has_update);
    }

    #[test]
    fn comparison_is_numeric_where_lexical_ordering_breaks() {
        // Lexically "2024.3.9.10" < "2024.3.9.9"; numerically it is newer.
        let result = check_for_update("2024.3.9.9", &FixedFeed("2024.3.9.10")).expect("check");
        assert!(result.has_update);
    }

    #[test]
    fn unparseable_published_version_reports_no_update() {
        let result = check_for_update("2024.3.9.0", &FixedFeed("v1.2.3")).expect("check");
        assert!(!result.has_update);
        assert_eq!(result.latest_version.as_deref(), Some("v1.2.3"));
    }

    #[test]
    fn unparseable_running_version_reports_no_update() {
        let result = check_for_update("dev-build", &FixedFeed("2024.3.9.0")).expect("check");
        assert!(!result.has_update);
    }

    #[test]
    fn feed_failures_propagate_to_the_caller() {
        let error = check_for_update("2024.3.9.0", &FailingFeed).expect_err("should fail");
        assert!(matches!(error, CoreError::FeedStatus(404)));
    }

    #[test]
    fn repository_feed_points_at_the_raw_version_file() {
        let feed =
            HttpVersionFeed::for_repository("deskshell", "versions", "deskshell").expect("feed");
        assert_eq!(
            feed.endpoint().as_str(),
            "https://raw.githubusercontent.com/deskshell/versions/refs/heads/main/deskshell"
        );
    }

    #[test]
    fn check_result_serializes_with_camel_case_fields() {
        let result = UpdateCheckResult {
            has_update: true,
            current_version: "2024.3.9.0".to_string(),
            latest_version: Some("2024.3.9.1".to_string()),
        };
        let serialized = serde_json::to_string(&result).expect("serialize");
        assert_eq!(
            serialized,
            r#"{"hasUpdate":true,"currentVersion":"2024.3.9.0","latestVersion":"2024.3.9.1"}"#
        );
    }
}
