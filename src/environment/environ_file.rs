//! Loading of the sourced `environ.sh`.
//!
//! The router cannot `source` a shell file into its own process, so it reads
//! the plain assignments out of it and hands them to every delegated script.
//!
//! # Supported Lines
//!
//! - `KEY=value` and `export KEY=value`
//! - Double-quoted values with `${VAR}`, `${VAR:-default}` and `$VAR` expansion
//! - Single-quoted values, taken literally
//! - Adjacent quoted and unquoted segments, concatenated
//! - Blank lines, `#` comments and trailing ` # comments`
//!
//! Anything else (functions, conditionals, commands) is skipped.
//!
//! # Example
//!
//! ```
//! use upkeep::environment::EnvironFile;
//!
//! let base = vec![("BUILD_ROOT".to_string(), "/repo".to_string())];
//! let environ = EnvironFile::parse(
//!     r#"
//! export PANTS_HOME="${BUILD_ROOT}/.pants"
//! PLAIN='$BUILD_ROOT'
//! "#,
//!     &base,
//! );
//! assert_eq!(environ.get("PANTS_HOME"), Some("/repo/.pants"));
//! assert_eq!(environ.get("PLAIN"), Some("$BUILD_ROOT"));
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:export\s+)?([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("valid assignment regex")
});

/// Variables read from an environ file, in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironFile {
    vars: Vec<(String, String)>,
}

impl EnvironFile {
    /// Parse environ content.
    ///
    /// References resolve against variables assigned earlier in the file,
    /// then `base`, then the process environment. Unknown names expand to
    /// the empty string, as they would in the shell.
    pub fn parse(content: &str, base: &[(String, String)]) -> Self {
        let mut environ = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(caps) = ASSIGNMENT.captures(line) else {
                tracing::debug!("Skipping non-assignment environ line: {}", line);
                continue;
            };

            let key = caps[1].to_string();
            let value = environ.evaluate(caps[2].trim(), base);
            environ.set(key, value);
        }

        environ
    }

    /// Read and parse an environ file.
    pub fn load(path: &Path, base: &[(String, String)]) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content, base))
    }

    /// Read and parse an environ file, yielding nothing when it is missing.
    pub fn load_optional(path: &Path, base: &[(String, String)]) -> Result<Self> {
        if path.is_file() {
            Self::load(path, base)
        } else {
            tracing::debug!("Environ source {} does not exist", path.display());
            Ok(Self::default())
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn set(&mut self, key: String, value: String) {
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((key, value)),
        }
    }

    fn lookup(&self, name: &str, base: &[(String, String)]) -> Option<String> {
        self.get(name)
            .map(str::to_string)
            .or_else(|| {
                base.iter()
                    .find(|(k, _)| k == name)
                    .map(|(_, v)| v.clone())
            })
            .or_else(|| std::env::var(name).ok())
    }

    /// Evaluate the right-hand side of an assignment.
    ///
    /// Quoted and unquoted segments concatenate as in the shell. An unquoted
    /// `#` after whitespace starts a comment and ends the value.
    fn evaluate(&self, raw: &str, base: &[(String, String)]) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut pending = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' => {
                    out.push_str(&self.expand(&std::mem::take(&mut pending), base));
                    for c in chars.by_ref() {
                        if c == '\'' {
                            break;
                        }
                        out.push(c);
                    }
                }
                '"' => {
                    while let Some(c) = chars.next() {
                        match c {
                            '"' => break,
                            '\\' if chars.peek() == Some(&'"') => {
                                chars.next();
                                pending.push('"');
                            }
                            other => pending.push(other),
                        }
                    }
                }
                c if c.is_whitespace() => {
                    let mut gap = String::from(c);
                    while let Some(&c) = chars.peek() {
                        if !c.is_whitespace() {
                            break;
                        }
                        gap.push(c);
                        chars.next();
                    }
                    if matches!(chars.peek(), None | Some('#')) {
                        break;
                    }
                    pending.push_str(&gap);
                }
                other => pending.push(other),
            }
        }

        out.push_str(&self.expand(&pending, base));
        out
    }

    fn expand(&self, input: &str, base: &[(String, String)]) -> String {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&'$') => {
                    chars.next();
                    out.push('$');
                }
                '$' if chars.peek() == Some(&'{') => {
                    chars.next();
                    let mut body = String::new();
                    for c in chars.by_ref() {
                        if c == '}' {
                            break;
                        }
                        body.push(c);
                    }
                    let (name, default) = match body.split_once(":-") {
                        Some((name, default)) => (name, Some(default)),
                        None => (body.as_str(), None),
                    };
                    match self.lookup(name, base).filter(|v| !v.is_empty()) {
                        Some(value) => out.push_str(&value),
                        None => out.push_str(&self.expand(default.unwrap_or(""), base)),
                    }
                }
                '$' if chars
                    .peek()
                    .is_some_and(|c| c.is_ascii_alphabetic() || *c == '_') =>
                {
                    let mut name = String::new();
                    while let Some(&c) = chars.peek() {
                        if !(c.is_ascii_alphanumeric() || c == '_') {
                            break;
                        }
                        name.push(c);
                        chars.next();
                    }
                    out.push_str(&self.lookup(&name, base).unwrap_or_default());
                }
                other => out.push(other),
            }
        }

        out
    }
}
