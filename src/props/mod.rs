//! Parsing for the `.properties` file format
//!
//! The dialect is the usual one: `key=value` (or `key: value`, or `key value`) entries, one per
//! logical line, with `#` and `!` comment lines. A line ending in an odd number of backslashes is
//! continued on the next line, and both keys and values support the `\t`, `\n`, `\r`, `\f` and
//! `\uXXXX` escapes. Any other escaped character stands for itself
//!
//! Keys are stored exactly as written (after unescaping). There is no normalization, so `Font.Size`
//! and `font.size` are different keys

#[cfg(test)]
mod tests;

use std::{collections::HashMap, fmt, fs, path::Path};

use anyhow::Context;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyMap(HashMap<String, String>);

impl PropertyMap {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let bytes = fs::read(path).with_context(|| {
            format!("Failed to read configuration file at '{}'", path.display())
        })?;
        let text = decode(bytes);

        parse(&text)
            .with_context(|| format!("Malformed configuration file at '{}'", path.display()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropsError {
    MalformedUnicodeEscape { line: usize },
}

impl fmt::Display for PropsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedUnicodeEscape { line } => {
                write!(f, "Malformed \\uxxxx escape on line {line}")
            }
        }
    }
}

impl std::error::Error for PropsError {}

/// Files are expected to be UTF-8, but legacy files written in ISO-8859-1 still load
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(mut text) => {
            if text.starts_with('\u{feff}') {
                text.remove(0);
            }
            text
        }
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

pub fn parse(text: &str) -> Result<PropertyMap, PropsError> {
    let mut map = HashMap::new();
    for LogicalLine { line, text } in logical_lines(text) {
        let (raw_key, raw_value) = split_entry(&text);
        let key = unescape(raw_key, line)?;
        let value = unescape(raw_value, line)?;
        map.insert(key, value);
    }

    Ok(PropertyMap(map))
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

#[derive(Debug, PartialEq)]
struct LogicalLine {
    /// 1-based line number where the entry starts
    line: usize,
    text: String,
}

fn natural_lines(text: &str) -> impl Iterator<Item = &str> {
    // `\r\n`, `\r`, and `\n` all end a line
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(end) => {
                let after = if current[end..].starts_with("\r\n") {
                    end + 2
                } else {
                    end + 1
                };
                rest = Some(&current[after..]);
                Some(&current[..end])
            }
            None => {
                rest = None;
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

fn trailing_backslashes(s: &str) -> usize {
    s.chars().rev().take_while(|&c| c == '\\').count()
}

fn logical_lines(text: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();
    let mut natural = natural_lines(text).enumerate();

    while let Some((idx, raw)) = natural.next() {
        let trimmed = raw.trim_start_matches(is_whitespace);
        if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = String::from(trimmed);
        while trailing_backslashes(&logical) % 2 == 1 {
            logical.pop();
            match natural.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_whitespace)),
                None => break,
            }
        }

        lines.push(LogicalLine {
            line: idx + 1,
            text: logical,
        });
    }

    lines
}

/// Splits a logical line into its (still escaped) key and value
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;

    for (idx, c) in line.char_indices() {
        if !escaped && (c == '=' || c == ':') {
            key_end = idx;
            value_start = idx + c.len_utf8();
            has_separator = true;
            break;
        } else if !escaped && is_whitespace(c) {
            key_end = idx;
            value_start = idx + c.len_utf8();
            break;
        }
        escaped = c == '\\' && !escaped;
    }

    let mut value = &line[value_start..];
    loop {
        value = value.trim_start_matches(is_whitespace);
        match value.chars().next() {
            Some(c @ ('=' | ':')) if !has_separator => {
                has_separator = true;
                value = &value[c.len_utf8()..];
            }
            _ => break,
        }
    }

    (&line[..key_end], value)
}

/// Appends buffered `\uXXXX` code units, pairing up surrogates where possible
fn flush_utf16(out: &mut String, units: &mut Vec<u16>) {
    // Unpaired surrogates can't live in a `String`
    out.extend(
        char::decode_utf16(units.drain(..)).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

fn unescape(raw: &str, line: usize) -> Result<String, PropsError> {
    let mut out = String::with_capacity(raw.len());
    // Consecutive `\u` escapes are decoded together so surrogate pairs form one char
    let mut units = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_utf16(&mut out, &mut units);
            out.push(c);
            continue;
        }

        // A dangling backslash can only come from a continuation at the end of the file
        let Some(escaped) = chars.next() else {
            break;
        };
        if escaped == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            let unit = (hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()))
                .then(|| u16::from_str_radix(&hex, 16).ok())
                .flatten()
                .ok_or(PropsError::MalformedUnicodeEscape { line })?;
            units.push(unit);
            continue;
        }

        flush_utf16(&mut out, &mut units);
        match escaped {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\x0c'),
            other => out.push(other),
        }
    }
    flush_utf16(&mut out, &mut units);

    Ok(out)
}
