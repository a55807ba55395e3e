//! Emulator config document
//!
//! Ordered, case-sensitive `[section]` / `key = value` documents as read and
//! rewritten by DOSBox-X. Section and key order survive a parse/write cycle;
//! comments do not. No value interpolation is performed.

use std::fmt;
use thiserror::Error;

/// Parse failure with the 1-based line it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// A named section holding ordered, unique keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, replacing an existing value in place or appending a new key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }
}

/// Ordered mapping of section name to ordered key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse document text. Keys keep their case.
    ///
    /// A line indented deeper than the key that opened the current value
    /// continues that value. Blank lines inside a value are kept; trailing
    /// ones are dropped.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut doc = ConfigDocument::new();
        // Key of the last option line, open for continuation lines.
        let mut open_key: Option<String> = None;
        // Indent of the last section or option line.
        let mut indent_level = usize::MAX;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = raw.trim();

            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }
            if trimmed.is_empty() {
                if let Some(value) = doc.open_value(&open_key) {
                    value.push('\n');
                }
                continue;
            }

            let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
            if indent > indent_level {
                if let Some(value) = doc.open_value(&open_key) {
                    value.push('\n');
                    value.push_str(trimmed);
                    continue;
                }
            }
            indent_level = indent;

            if let Some(inner) = trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                if inner.is_empty() {
                    return Err(ParseError::new(line_no, "empty section name"));
                }
                if doc.has_section(inner) {
                    return Err(ParseError::new(
                        line_no,
                        format!("duplicate section '{}'", inner),
                    ));
                }
                doc.sections.push(Section::new(inner));
                open_key = None;
                continue;
            }

            let section = match doc.sections.last_mut() {
                Some(section) => section,
                None => {
                    return Err(ParseError::new(
                        line_no,
                        "option found before any section header",
                    ))
                }
            };

            let delimiter = trimmed.find(|c: char| c == '=' || c == ':').ok_or_else(|| {
                ParseError::new(line_no, format!("expected 'key = value', got '{}'", trimmed))
            })?;
            let key = trimmed[..delimiter].trim();
            let value = trimmed[delimiter + 1..].trim();

            if key.is_empty() {
                return Err(ParseError::new(line_no, "empty key"));
            }
            if section.contains(key) {
                return Err(ParseError::new(
                    line_no,
                    format!("duplicate key '{}' in section '{}'", key, section.name),
                ));
            }
            section.entries.push((key.to_string(), value.to_string()));
            open_key = Some(key.to_string());
        }

        for section in &mut doc.sections {
            for (_, value) in &mut section.entries {
                let end = value.trim_end().len();
                value.truncate(end);
            }
        }

        Ok(doc)
    }

    /// Value of `key` in the last section, if a value is open.
    fn open_value(&mut self, key: &Option<String>) -> Option<&mut String> {
        let key = key.as_deref()?;
        self.sections
            .last_mut()?
            .entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Return the named section, appending an empty one if absent.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for ConfigDocument {
    /// Each section is followed by a blank line; multi-line values continue
    /// on tab-indented lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(f, "{} = {}", key, value.replace('\n', "\n\t"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
