//! Java-style `.properties` files.

use std::{
    collections::{btree_map, BTreeMap},
    fs::read,
    io,
    path::Path,
};

/// An ordered string-to-string map of configuration properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses a properties file.
    ///
    /// The file is decoded as UTF-8 when valid, and as ISO-8859-1 otherwise,
    /// which is the encoding `java.util.Properties` reads.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = match String::from_utf8(read(path)?) {
            Ok(content) => content,
            Err(e) => e.as_bytes().iter().map(|&b| char::from(b)).collect(),
        };
        Ok(Self::parse(&content))
    }

    /// Parses the text content of a properties file.
    ///
    /// The syntax follows `java.util.Properties`: `#` and `!` start a comment
    /// line, the key is separated from the value by `=`, `:` or whitespace, a
    /// trailing backslash continues the line, and the usual escape sequences
    /// (including `\uXXXX`) are decoded. Malformed escapes are taken literally.
    pub fn parse(content: &str) -> Self {
        let mut props = Self::new();
        for line in logical_lines(content) {
            let (key, value) = split_key_value(&line);
            props.set(unescape(key), unescape(value));
        }
        props
    }

    /// Returns the value of a property.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value of a property, or `default` if it is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Copies every entry of `other` into this set. Entries of `other` win.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the properties in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Joins continued lines and drops blanks and comments.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for raw in content.lines() {
        let trimmed = raw.trim_start_matches([' ', '\t', '\x0c']);
        let line = match current.take() {
            Some(mut prefix) => {
                prefix.push_str(trimmed);
                prefix
            }
            None => {
                if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
                    continue;
                }
                trimmed.to_owned()
            }
        };

        let trailing_backslashes = line.bytes().rev().take_while(|b| *b == b'\\').count();
        if trailing_backslashes % 2 == 1 {
            current = Some(line[..line.len() - 1].to_owned());
        } else {
            lines.push(line);
        }
    }

    if let Some(line) = current {
        lines.push(line);
    }
    lines
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if matches!(c, '=' | ':' | ' ' | '\t' | '\x0c') {
            key_end = i;
            break;
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches([' ', '\t', '\x0c']);
    if let Some(r) = rest.strip_prefix(['=', ':']) {
        rest = r.trim_start_matches([' ', '\t', '\x0c']);
    }
    (key, rest)
}

fn unescape(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => res.push('\t'),
            Some('n') => res.push('\n'),
            Some('r') => res.push('\r'),
            Some('f') => res.push('\x0c'),
            Some('u') => match parse_hex4(chars.as_str()) {
                Some(unit) => {
                    chars.nth(3);
                    let mut units = vec![unit];
                    if (0xd800..0xdc00).contains(&unit) {
                        let low = chars
                            .as_str()
                            .strip_prefix("\\u")
                            .and_then(parse_hex4)
                            .filter(|u| (0xdc00..0xe000).contains(u));
                        if let Some(low) = low {
                            units.push(low);
                            chars.nth(5);
                        }
                    }
                    res.extend(
                        char::decode_utf16(units).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
                    );
                }
                None => res.push('u'),
            },
            Some(other) => res.push(other),
            None => {}
        }
    }
    res
}

/// Parses the four hex digits of a `\uXXXX` escape into a UTF-16 code unit.
fn parse_hex4(s: &str) -> Option<u16> {
    let hex = s.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}
