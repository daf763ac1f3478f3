//! Splitting docstring-style text into short and long descriptions.

/// Splits documentation text into a short and a long description.
///
/// The short description runs up to and including the first sentence
/// terminator (`.`, `?` or `!`) that is followed by whitespace or the end of
/// the text. The long description is the trimmed remainder, with internal
/// line breaks (and the whitespace around them) collapsed to single spaces so
/// that wrapping stays the renderer's responsibility. Text without a sentence
/// terminator becomes the short description in full, with an empty long
/// description.
///
/// # Examples
///
/// ```rust
/// use tacit_config::help::split_summary;
///
/// let (short, long) = split_summary("Short Description. Long description with\nline break.");
/// assert_eq!(short, "Short Description.");
/// assert_eq!(long, "Long description with line break.");
/// ```
#[must_use]
pub fn split_summary(text: &str) -> (String, String) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (String::new(), String::new());
    }
    sentence_end(trimmed).map_or_else(
        || (trimmed.to_owned(), String::new()),
        |end| {
            let (short, rest) = trimmed.split_at(end);
            (short.trim().to_owned(), collapse_breaks(rest.trim()))
        },
    )
}

/// Byte offset just past the first sentence terminator followed by whitespace
/// or end-of-text, if any.
fn sentence_end(text: &str) -> Option<usize> {
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if matches!(ch, '.' | '?' | '!') {
            let next = chars.peek().map(|&(_, c)| c);
            if next.is_none_or(char::is_whitespace) {
                return Some(idx + ch.len_utf8());
            }
        }
    }
    None
}

/// Collapse every whitespace run containing a line break to a single space.
/// Other whitespace is preserved untouched.
fn collapse_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            run.push(ch);
        } else {
            flush_run(&mut out, &mut run);
            out.push(ch);
        }
    }
    flush_run(&mut out, &mut run);
    out
}

fn flush_run(out: &mut String, run: &mut String) {
    if run.is_empty() {
        return;
    }
    if run.contains('\n') || run.contains('\r') {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}
