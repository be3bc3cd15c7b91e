#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    /// Marks the todo done and stamps `completed_at` with the current time.
    /// Repeating it keeps the todo done and stamps again.
    Complete,
}
