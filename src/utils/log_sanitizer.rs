//! Log sanitization for client-supplied text.
//!
//! Posted messages are echoed into the service's own log; they are flattened
//! to one line and truncated first so a client cannot forge log lines or
//! flood the output.

/// Maximum number of characters of a client message written to the log.
pub const MAX_LOGGED_CHARS: usize = 200;

/// Flatten line breaks and cap `text` at [`MAX_LOGGED_CHARS`] characters.
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate_for_log("a\nb"), "a\\nb");
/// ```
pub fn truncate_for_log(text: &str) -> String {
    let mut out = String::with_capacity(text.len().min(MAX_LOGGED_CHARS + 3));
    for (count, c) in text.chars().enumerate() {
        if count == MAX_LOGGED_CHARS {
            out.push_str("...");
            break;
        }
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
