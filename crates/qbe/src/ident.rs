//! Validated SQL identifiers for field names and table aliases.
//!
//! An [`Ident`] is a single identifier segment, either:
//!
//! - unquoted, matching `[A-Za-z_][A-Za-z0-9_$]*`
//! - quoted, `"..."` with any characters except NUL and `"` escaped as `""`
//!
//! Qualification (`alias.name`) is the job of [`Field`](crate::Field), so a dot
//! outside quotes is rejected here.
//!
//! # Example
//! ```ignore
//! use qbe::Ident;
//!
//! let id = Ident::parse("description")?;
//! let quoted = Ident::parse(r#""Order Date""#)?;
//! # Ok::<(), qbe::QbeError>(())
//! ```

use crate::error::{QbeError, QbeResult};
use std::fmt;

/// A single validated SQL identifier, stored in its SQL text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    sql: String,
    quoted: bool,
}

impl Ident {
    /// Parse an identifier, accepting the unquoted or the quoted form.
    pub fn parse(s: &str) -> QbeResult<Self> {
        if s.is_empty() {
            return Err(QbeError::invalid_identifier("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(QbeError::invalid_identifier(
                "Identifier cannot contain NUL character",
            ));
        }

        if let Some(body) = s.strip_prefix('"') {
            Self::check_quoted(body)?;
            return Ok(Self {
                sql: s.to_string(),
                quoted: true,
            });
        }

        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
            Some(c) => {
                return Err(QbeError::invalid_identifier(format!(
                    "Invalid identifier start character: '{c}'"
                )));
            }
            None => return Err(QbeError::invalid_identifier("Identifier cannot be empty")),
        }
        for c in chars {
            if c == '.' {
                return Err(QbeError::invalid_identifier(format!(
                    "Qualified identifier not allowed here: '{s}'"
                )));
            }
            if !(c == '_' || c == '$' || c.is_ascii_alphanumeric()) {
                return Err(QbeError::invalid_identifier(format!(
                    "Invalid character in identifier: '{c}'"
                )));
            }
        }

        Ok(Self {
            sql: s.to_string(),
            quoted: false,
        })
    }

    // `body` is everything after the opening quote.
    fn check_quoted(body: &str) -> QbeResult<()> {
        let mut chars = body.chars().peekable();
        let mut len = 0usize;
        loop {
            match chars.next() {
                Some('"') => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        len += 1;
                    } else {
                        break;
                    }
                }
                // `#{..}` and `${..}` would be read by the mapper as placeholders.
                Some(c @ ('{' | '}')) => {
                    return Err(QbeError::invalid_identifier(format!(
                        "Brace not allowed in quoted identifier: '{c}'"
                    )));
                }
                Some(_) => len += 1,
                None => return Err(QbeError::invalid_identifier("Unclosed quoted identifier")),
            }
        }
        if len == 0 {
            return Err(QbeError::invalid_identifier("Empty quoted identifier"));
        }
        if let Some(c) = chars.next() {
            return Err(QbeError::invalid_identifier(format!(
                "Unexpected character after quoted identifier: '{c}'"
            )));
        }
        Ok(())
    }

    /// The identifier as it is written into SQL.
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    /// Whether the identifier was written in quoted form.
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}

/// Convert an input into an [`Ident`].
///
/// This is mainly for ergonomics in builder APIs.
pub trait IntoIdent {
    fn into_ident(self) -> QbeResult<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> QbeResult<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> QbeResult<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> QbeResult<Ident> {
        Ident::parse(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> QbeResult<Ident> {
        Ident::parse(&self)
    }
}
