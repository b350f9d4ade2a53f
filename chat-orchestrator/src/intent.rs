//! Intent classification for incoming chat messages.

/// What the user asked the backend to do with retrieval.
///
/// Determined once per request from the message prefix and immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// `/search` prefix: retrieval explicitly requested.
    Search,
    /// `/ask` prefix: answer directly, never consult retrieval.
    Direct,
    /// No prefix: retrieval is attempted opportunistically.
    Auto,
}

impl Intent {
    /// Classifies a message and splits off the actual query.
    ///
    /// The message is trimmed first; the prefix match is ASCII
    /// case-insensitive and applies to the prefix only. A prefix must be
    /// followed by whitespace or the end of the message, so `/searching`
    /// stays `Auto`. A prefix with nothing after it yields an empty query,
    /// which is forwarded as-is rather than rejected.
    pub fn classify(message: &str) -> (Intent, &str) {
        let message = message.trim();

        if let Some(rest) = strip_command(message, "/search") {
            return (Intent::Search, rest);
        }
        if let Some(rest) = strip_command(message, "/ask") {
            return (Intent::Direct, rest);
        }
        (Intent::Auto, message)
    }

    /// Whether this intent allows consulting the retrieval service.
    pub fn wants_retrieval(self) -> bool {
        matches!(self, Intent::Search | Intent::Auto)
    }
}

/// Case-insensitive command prefix strip. Returns the trimmed remainder
/// when `s` is `command` followed by whitespace or end of string.
fn strip_command<'a>(s: &'a str, command: &str) -> Option<&'a str> {
    // `get` keeps this safe on multibyte input near the prefix boundary.
    let head = s.get(..command.len())?;
    if !head.eq_ignore_ascii_case(command) {
        return None;
    }
    let rest = &s[command.len()..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}
