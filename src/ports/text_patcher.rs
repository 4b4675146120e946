use crate::domain::AppError;

/// Port for anchor-based edits of existing text files.
///
/// The three operations are independent so callers can combine an edit with
/// a follow-up `has_file_content_with` probe.
pub trait TextPatcher {
    /// Insert `code` directly after the first occurrence of `anchor`.
    ///
    /// No-op when the file already contains `code`. Fails when `anchor` is missing.
    fn insert_code_if_not_exist(&self, path: &str, anchor: &str, code: &str)
    -> Result<(), AppError>;

    /// Strip `marker` from the start of each line of the first occurrence of `target`.
    ///
    /// Fails when `target` is missing.
    fn uncomment_code(&self, path: &str, target: &str, marker: &str) -> Result<(), AppError>;

    /// Whether the file contains `text`.
    fn has_file_content_with(&self, path: &str, text: &str) -> Result<bool, AppError>;
}
