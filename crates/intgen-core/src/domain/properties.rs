//! Flat `key=value` configuration serialization.
//!
//! Property-file escaping rules: backslash, `=`, `:`, tab and line breaks
//! are escaped in both keys and values; spaces are escaped everywhere in
//! keys but only in leading position in values; a leading `#`/`!` in a key
//! is escaped so the entry is not mistaken for a comment on read-back.
//! [`parse`] reverses [`serialize`] so round trips can be verified.

use std::collections::BTreeMap;

/// Serialize a configuration map, one `key=value` entry per line.
///
/// Entries appear in the map's key order, which keeps repeated generation
/// runs byte-identical. An empty map yields the empty string; the generator
/// writes no file at all in that case.
pub fn serialize(map: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in map {
        out.push_str(&escape_key(key));
        out.push('=');
        out.push_str(&escape_value(value));
        out.push('\n');
    }
    out
}

/// Parse `key=value` lines back into a map, unescaping as it goes.
///
/// Blank lines and `#`/`!` comment lines are skipped. A line without an
/// unescaped separator is treated as a key with an empty value.
pub fn parse(text: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in text.lines() {
        if line.trim().is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        match split_at_separator(line) {
            Some((key, value)) => map.insert(unescape(key), unescape(value)),
            None => map.insert(unescape(line), String::new()),
        };
    }
    map
}

/// Escape a key: every separator, whitespace and backslash character, plus
/// a leading comment marker (`#`/`!`) so the line survives read-back.
pub fn escape_key(key: &str) -> String {
    match key.strip_prefix(['#', '!']) {
        Some(rest) => {
            let marker = &key[..1];
            format!("\\{marker}{}", escape(rest, true))
        }
        None => escape(key, true),
    }
}

/// Escape a value: separators and backslashes, plus any leading spaces.
pub fn escape_value(value: &str) -> String {
    let leading = value.len() - value.trim_start_matches(' ').len();
    let mut out = "\\ ".repeat(leading);
    out.push_str(&escape(&value[leading..], false));
    out
}

fn escape(s: &str, escape_spaces: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '=' => out.push_str("\\="),
            ':' => out.push_str("\\:"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' ' if escape_spaces => out.push_str("\\ "),
            _ => out.push(c),
        }
    }
    out
}

/// Find the first unescaped `=` or `:`, returning the halves around it.
fn split_at_separator(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return Some((&line[..idx], &line[idx + 1..])),
            _ => {}
        }
    }
    None
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
