use reqwest::Client;

use crate::probe::{probe_url, ProbeOutcome};

/// Terminal outcome of one candidate probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The path redirects to a slash-suffixed location: a browsable prefix
    /// worth expanding.
    Directory,
    Status(u16),
}

impl Classification {
    /// Classify a probe outcome observed with redirects disabled. One
    /// outcome answers both "what do we report" and "is this a directory".
    pub fn of(outcome: &ProbeOutcome) -> Self {
        if is_directory_response(outcome) {
            Self::Directory
        } else {
            Self::Status(outcome.status)
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Directory => "directory".to_string(),
            Self::Status(code) => code.to_string(),
        }
    }

    /// ANSI palette: hits cyan, redirects green, dead paths red, everything
    /// else orange.
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Directory => "\x1b[38;5;45m",
            Self::Status(200) => "\x1b[38;5;45m",
            Self::Status(301) | Self::Status(302) => "\x1b[38;5;82m",
            Self::Status(404) => "\x1b[38;5;196m",
            Self::Status(_) => "\x1b[38;5;214m",
        }
    }
}

/// A response denotes a directory iff it is a 301/302 whose `Location`
/// header is present and ends with a path separator.
pub fn is_directory_response(outcome: &ProbeOutcome) -> bool {
    if outcome.status != 301 && outcome.status != 302 {
        return false;
    }
    match &outcome.location {
        Some(location) => location.ends_with('/'),
        None => false,
    }
}

/// Dedicated no-follow probe for callers whose own response cannot carry
/// the redirect (follow-redirects mode). Transport failures count as "not a
/// directory"; classification never aborts the caller.
pub async fn classify_directory(client: &Client, url: &str) -> bool {
    match probe_url(client, url).await {
        Ok(outcome) => is_directory_response(&outcome),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: u16, location: Option<&str>) -> ProbeOutcome {
        ProbeOutcome {
            status,
            location: location.map(str::to_string),
            redirected: false,
        }
    }

    #[test]
    fn moved_to_slash_location_is_a_directory() {
        assert!(is_directory_response(&outcome(301, Some("/admin/"))));
        assert!(is_directory_response(&outcome(302, Some("/admin/"))));
    }

    #[test]
    fn moved_without_trailing_slash_is_not() {
        assert!(!is_directory_response(&outcome(301, Some("/admin"))));
    }

    #[test]
    fn missing_location_is_not_a_directory() {
        assert!(!is_directory_response(&outcome(301, None)));
    }

    #[test]
    fn ok_response_is_not_a_directory() {
        assert!(!is_directory_response(&outcome(200, Some("/admin/"))));
    }

    #[test]
    fn classification_reports_directory_over_status() {
        assert_eq!(Classification::of(&outcome(301, Some("/admin/"))), Classification::Directory);
        assert_eq!(Classification::of(&outcome(301, Some("/admin"))), Classification::Status(301));
        assert_eq!(Classification::of(&outcome(404, None)), Classification::Status(404));
    }

    #[test]
    fn labels_match_reported_lines() {
        assert_eq!(Classification::Directory.label(), "directory");
        assert_eq!(Classification::Status(200).label(), "200");
    }
}
