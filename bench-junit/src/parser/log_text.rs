const ELLIPSIS: &str = "...";

/// Default cap on how much benchmark log output is kept per failing case.
pub const DEFAULT_FAILURE_TEXT_LIMIT: usize = 1000;

/// Shortens `text` to at most `limit` characters. Truncated text ends in an
/// ellipsis unless the limit leaves no room for one.
pub(crate) fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    if limit > ELLIPSIS.len() {
        let mut shortened = text.chars().take(limit - ELLIPSIS.len()).collect::<String>();
        shortened.push_str(ELLIPSIS);
        return shortened;
    }
    text.chars().take(limit).collect()
}

/// Indented log output waiting to be attached to the most recent case.
#[derive(Debug, Default)]
pub(crate) struct LogText {
    buffer: String,
}

impl LogText {
    pub(crate) fn push(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Hands back everything collected so far, leaving the buffer empty.
    pub(crate) fn take(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.buffer))
    }
}
