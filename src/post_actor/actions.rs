/// Custom actions for Post entities.
///
/// Counters only move up; there is no unlike or view rollback.
#[derive(Debug, Clone)]
pub enum PostAction {
    /// Count one more read.
    RecordView,
    Like,
    /// Append a comment whose author has already been checked.
    AddComment {
        content: String,
        author_id: String,
        author_name: String,
    },
}

/// Results from PostActions - variants match 1:1 with PostAction
#[derive(Debug, Clone)]
pub enum PostActionResult {
    RecordView(crate::domain::Post),
    Like(crate::domain::Post),
    AddComment(crate::domain::Comment),
}
