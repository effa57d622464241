//! Typed field descriptors.

use crate::error::{QbeError, QbeResult};
use crate::ident::{Ident, IntoIdent};
use crate::jdbc::JdbcType;
use std::fmt;
use std::marker::PhantomData;

/// A column that criteria compare against.
///
/// `T` is the Rust type of the values bound for this column; it only exists at
/// the type level. Fields are immutable: [`with_alias`](Self::with_alias) and
/// [`with_type_handler`](Self::with_type_handler) return a modified copy.
///
/// # Example
/// ```ignore
/// use qbe::{Field, JdbcType};
///
/// let id: Field<i32> = Field::of("id", JdbcType::Integer)?.with_alias("a")?;
/// assert_eq!(id.aliased_name(), "a.id");
/// # Ok::<(), qbe::QbeError>(())
/// ```
pub struct Field<T> {
    name: Ident,
    alias: Option<Ident>,
    type_handler: Option<String>,
    jdbc_type: JdbcType,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    /// Create a field from a column name and its JDBC type.
    pub fn of(name: impl IntoIdent, jdbc_type: JdbcType) -> QbeResult<Self> {
        Ok(Self {
            name: name.into_ident()?,
            alias: None,
            type_handler: None,
            jdbc_type,
            _marker: PhantomData,
        })
    }

    /// Return a copy qualified by a table alias.
    ///
    /// An empty alias returns an unqualified copy.
    pub fn with_alias(&self, alias: &str) -> QbeResult<Self> {
        let alias = if alias.is_empty() {
            None
        } else {
            Some(Ident::parse(alias)?)
        };
        Ok(Self {
            alias,
            ..self.clone()
        })
    }

    /// Return a copy that binds its values through the named type handler.
    pub fn with_type_handler(&self, type_handler: &str) -> QbeResult<Self> {
        validate_type_handler(type_handler)?;
        Ok(Self {
            type_handler: Some(type_handler.to_string()),
            ..self.clone()
        })
    }

    /// Unqualified column name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Table alias, if one is set.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_ref().map(Ident::as_str)
    }

    /// Type handler, if one is set.
    pub fn type_handler(&self) -> Option<&str> {
        self.type_handler.as_deref()
    }

    pub fn jdbc_type(&self) -> JdbcType {
        self.jdbc_type
    }

    /// `alias.name` when an alias is set, otherwise `name`.
    pub fn aliased_name(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{}.{}", alias, self.name),
            None => self.name.to_string(),
        }
    }
}

// Type handlers are written verbatim into `#{...}`; anything that would end the
// placeholder or split its options is rejected.
fn validate_type_handler(type_handler: &str) -> QbeResult<()> {
    if type_handler.is_empty() {
        return Err(QbeError::invalid_type_handler("Type handler cannot be empty"));
    }
    if let Some(c) = type_handler
        .chars()
        .find(|&c| matches!(c, ',' | '{' | '}' | '=') || c.is_whitespace() || c.is_control())
    {
        return Err(QbeError::invalid_type_handler(format!(
            "Invalid character in type handler '{type_handler}': {c:?}"
        )));
    }
    Ok(())
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            alias: self.alias.clone(),
            type_handler: self.type_handler.clone(),
            jdbc_type: self.jdbc_type,
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.alias == other.alias
            && self.type_handler == other.type_handler
            && self.jdbc_type == other.jdbc_type
    }
}

impl<T> Eq for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name.as_str())
            .field("alias", &self.alias())
            .field("type_handler", &self.type_handler)
            .field("jdbc_type", &self.jdbc_type)
            .finish()
    }
}
