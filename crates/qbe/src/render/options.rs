use crate::error::{QbeError, QbeResult};
use crate::ident::Ident;
use std::borrow::Cow;

/// Naming of the bind placeholders written into fragments.
///
/// The defaults produce `#{parameters.p1,...}`, `#{parameters.p2,...}`, ... and
/// parameter keys `p1`, `p2`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    parameter_object: Cow<'static, str>,
    key_prefix: Cow<'static, str>,
}

impl RenderOptions {
    /// `parameters` / `p`
    pub const DEFAULT: RenderOptions = RenderOptions {
        parameter_object: Cow::Borrowed("parameters"),
        key_prefix: Cow::Borrowed("p"),
    };

    /// Create options with a custom parameter object name and key prefix.
    ///
    /// Both must be plain unquoted identifiers. The key prefix must not end in
    /// a digit, so every key maps back to one prefix and sequence number.
    pub fn new(
        parameter_object: impl Into<Cow<'static, str>>,
        key_prefix: impl Into<Cow<'static, str>>,
    ) -> QbeResult<Self> {
        let parameter_object = parameter_object.into();
        let key_prefix = key_prefix.into();
        check_plain("parameter object", &parameter_object)?;
        check_plain("key prefix", &key_prefix)?;
        if key_prefix.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(QbeError::invalid_option(format!(
                "key prefix must not end in a digit, got '{key_prefix}'"
            )));
        }
        Ok(Self {
            parameter_object,
            key_prefix,
        })
    }

    /// Name of the object the placeholders dereference (`parameters`).
    pub fn parameter_object(&self) -> &str {
        &self.parameter_object
    }

    /// Prefix of every parameter key (`p`).
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Parameter key for sequence number `n`.
    pub fn key(&self, n: usize) -> String {
        format!("{}{}", self.key_prefix, n)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check_plain(what: &str, value: &str) -> QbeResult<()> {
    match Ident::parse(value) {
        Ok(ident) if !ident.is_quoted() => Ok(()),
        _ => Err(QbeError::invalid_option(format!(
            "{what} must be a plain identifier, got '{value}'"
        ))),
    }
}
