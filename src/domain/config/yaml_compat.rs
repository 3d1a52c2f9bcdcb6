//! YAML 1.1 compatibility for emitted documents.
//!
//! serde_yaml writes YAML 1.2, where words such as `On` or `no` are plain
//! strings. The portal generator and `nginx_stage` read YAML 1.1 and resolve
//! those words to booleans, so they are single-quoted on output.

/// Plain scalars a YAML 1.1 resolver reads as a boolean or null.
///
/// Lowercase `true`, `false` and `null` are what serde_yaml emits for real
/// booleans and nulls and stay plain.
const YAML11_AMBIGUOUS: [&str; 22] = [
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "True", "TRUE", "False", "FALSE",
    "on", "On", "ON", "off", "Off", "OFF", "Null", "NULL",
];

enum Skip {
    /// Body of a `|` / `>` block scalar whose owner starts at this column.
    Block(usize),
    /// Continuation of a quoted scalar that wrapped onto the next line.
    Quoted(char),
}

/// Single-quote plain keys and values that YAML 1.1 would not read as strings.
///
/// Works on serde_yaml block output line by line. Block scalar bodies and
/// already-quoted scalars are left untouched.
pub fn quote_ambiguous_scalars(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len());
    let mut skip = None;

    for line in yaml.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };

        match skip {
            Some(Skip::Block(column)) => {
                let indent = body.len() - body.trim_start_matches(' ').len();
                if body.trim().is_empty() || indent > column {
                    out.push_str(line);
                    continue;
                }
                skip = None;
            }
            Some(Skip::Quoted(quote)) => {
                if closing_quote(body, quote).is_some() {
                    skip = None;
                }
                out.push_str(line);
                continue;
            }
            None => {}
        }

        let (prefix, rest) = split_sequence_prefix(body);
        let (key, value) = split_entry(rest);

        if value.starts_with(['|', '>']) {
            let column = match key {
                Some(_) => prefix.len(),
                None => prefix.len().saturating_sub(2),
            };
            skip = Some(Skip::Block(column));
        } else if let Some(quote) = value.chars().next().filter(|c| matches!(c, '\'' | '"')) {
            if closing_quote(&value[1..], quote).is_none() {
                skip = Some(Skip::Quoted(quote));
            }
        }

        out.push_str(prefix);
        if let Some(key) = key {
            out.push_str(&quote_if_ambiguous(key));
            out.push(':');
            if !value.is_empty() {
                out.push(' ');
            }
        }
        out.push_str(&quote_if_ambiguous(value));
        out.push_str(newline);
    }
    out
}

fn quote_if_ambiguous(scalar: &str) -> String {
    if YAML11_AMBIGUOUS.contains(&scalar) {
        format!("'{}'", scalar)
    } else {
        scalar.to_string()
    }
}

/// Split leading indentation and `- ` sequence markers from the content.
fn split_sequence_prefix(line: &str) -> (&str, &str) {
    let mut end = line.len() - line.trim_start_matches(' ').len();
    while line[end..].starts_with("- ") {
        end += 2;
    }
    line.split_at(end)
}

/// Split `key: value` content into its key and value. Content without a
/// mapping key is returned as the value.
fn split_entry(content: &str) -> (Option<&str>, &str) {
    if let Some(quote) = content.chars().next().filter(|c| matches!(c, '\'' | '"')) {
        return match closing_quote(&content[1..], quote) {
            Some(end) if content[end + 2..].starts_with(':') => {
                let value = &content[end + 3..];
                (Some(&content[..end + 2]), value.strip_prefix(' ').unwrap_or(value))
            }
            _ => (None, content),
        };
    }
    if let Some(pos) = content.find(": ") {
        return (Some(&content[..pos]), &content[pos + 2..]);
    }
    match content.strip_suffix(':') {
        Some(key) => (Some(key), ""),
        None => (None, content),
    }
}

/// Byte offset of the quote closing a scalar whose opening quote precedes `body`.
fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if quote == '"' && c == '\\' {
            chars.next();
        } else if c == quote {
            if quote == '\'' && chars.peek().is_some_and(|&(_, next)| next == '\'') {
                chars.next();
            } else {
                return Some(i);
            }
        }
    }
    None
}
