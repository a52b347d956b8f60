//! Local validation for the upload form.
//!
//! Both checks run before any remote call; a submission that fails here
//! issues zero network requests.

/// Why a submission was rejected locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionIssue {
    /// No file selected. Checked first, matching the original form.
    MissingFile,
    /// Title is the empty string.
    MissingTitle,
}

/// Validate a (title, file) pair for upload.
///
/// Only the empty string counts as a missing title; anything the user
/// typed, whitespace included, is sent to the service verbatim.
pub fn validate_submission(title: &str, has_file: bool) -> Result<(), SubmissionIssue> {
    if !has_file {
        return Err(SubmissionIssue::MissingFile);
    }
    if title.is_empty() {
        return Err(SubmissionIssue::MissingTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_rejected_regardless_of_title() {
        assert_eq!(validate_submission("", false), Err(SubmissionIssue::MissingFile));
        assert_eq!(
            validate_submission("a perfectly good title", false),
            Err(SubmissionIssue::MissingFile)
        );
    }

    #[test]
    fn missing_title_rejected_with_file_present() {
        assert_eq!(validate_submission("", true), Err(SubmissionIssue::MissingTitle));
    }

    #[test]
    fn valid_pair_passes() {
        assert_eq!(validate_submission("Harbor at dusk", true), Ok(()));
    }

    #[test]
    fn whitespace_titles_pass_through_verbatim() {
        // Only the empty string is rejected; whitespace is the user's to
        // keep.
        assert_eq!(validate_submission("   ", true), Ok(()));
    }
}
