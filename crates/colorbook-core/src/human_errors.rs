// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people making coloring pages.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity drives how the calling layer presents it and whether the
// caller may offer a retry (Colorbook itself never retries).

use crate::error::ColorbookError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Upstream hiccup or timeout; trying again may work.
    Transient,
    /// The user has to change something (settings, prompt, file).
    ActionRequired,
    /// Retrying with the same input cannot succeed.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the caller may offer a retry with unchanged input.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `ColorbookError` into a `HumanError`.
pub fn humanize_error(err: &ColorbookError) -> HumanError {
    match err {
        ColorbookError::Decode(_) => HumanError {
            message: "We couldn't read that picture.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try a PNG or JPEG.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        ColorbookError::InvalidConfig(detail) => HumanError {
            message: "Some of the settings aren't right.".into(),
            suggestion: format!("Check the advanced controls and try again. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ColorbookError::Encode(_) => HumanError {
            message: "We couldn't save the finished page.".into(),
            suggestion: "Something went wrong while writing the image. Please report this.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        ColorbookError::UpstreamUnavailable(detail) => humanize_upstream_error(detail),

        ColorbookError::Storage(_) => HumanError {
            message: "Your gallery couldn't be updated.".into(),
            suggestion: "The page was made but not saved. Try saving it again in a moment.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ColorbookError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file couldn't be found.".into(),
                suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "Colorbook doesn't have permission to use that file.".into(),
                suggestion: "Check the file permissions, or pick a different location.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading or writing a file.".into(),
                suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                retriable: true,
                severity: Severity::Transient,
            },
        },

        ColorbookError::Serialization(_) => HumanError {
            message: "A settings or data file couldn't be understood.".into(),
            suggestion: "Check the config file for typos, or delete it to go back to the defaults.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}

/// Map opaque provider failures to something actionable.
fn humanize_upstream_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("quota") || lower.contains("rate limit") {
        HumanError {
            message: "You've made a lot of pages recently.".into(),
            suggestion: "The picture service needs a break. Wait a little while and try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        }
    } else if lower.contains("content policy") || lower.contains("invalid prompt") {
        HumanError {
            message: "The picture service didn't accept that idea.".into(),
            suggestion: "Try describing your picture in a different way.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        }
    } else {
        HumanError {
            message: "The picture service isn't responding.".into(),
            suggestion: format!("Try again in a moment. (Detail: {detail})"),
            retriable: true,
            severity: Severity::Transient,
        }
    }
}
