//! Free-text sanitization for user-submitted values
//!
//! Mirrors what the host platform does to single-line text fields: markup is stripped,
//! line breaks and tabs collapse into single spaces, control characters and
//! percent-encoded octets are removed, and the result is trimmed.

/// Sanitize a single-line text value
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = strip_tags(&strip_script_blocks(input));
    let without_octets = strip_octets(&stripped);

    let mut out = String::with_capacity(without_octets.len());
    let mut pending_space = false;
    for c in without_octets.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if c.is_control() {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

/// Drop `<script>` and `<style>` elements together with their content
fn strip_script_blocks(input: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        let next = ["script", "style"]
            .iter()
            .filter_map(|tag| lower[pos..].find(&format!("<{tag}")).map(|at| (pos + at, *tag)))
            .min_by_key(|(at, _)| *at);

        let Some((start, tag)) = next else { break };
        let closing = format!("</{tag}");
        let Some(close_at) = lower[start..].find(&closing).map(|at| start + at) else {
            break;
        };
        let end = lower[close_at..]
            .find('>')
            .map_or(input.len(), |at| close_at + at + 1);

        out.push_str(&input[pos..start]);
        pos = end;
    }
    out.push_str(&input[pos..]);
    out
}

/// Remove `<...>` tags; a `<` that cannot open a tag is escaped
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }

        let opens_tag = chars
            .peek()
            .is_some_and(|&(_, next)| next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?'));

        if !opens_tag {
            out.push_str("&lt;");
            continue;
        }

        match input[i..].find('>') {
            Some(end) => {
                let close = i + end;
                while chars.peek().is_some_and(|&(j, _)| j <= close) {
                    chars.next();
                }
            }
            // Unterminated tag swallows the rest
            None => break,
        }
    }
    out
}

/// Remove `%XX` hex octets
fn strip_octets(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    let mut last = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            out.push_str(&input[last..i]);
            i += 3;
            last = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&input[last..]);
    out
}
