//! JDBC type tags.
//!
//! [`JdbcType`] names the SQL type a bind parameter is sent as. It is written into
//! every placeholder as `jdbcType=<KEYWORD>`.

use crate::error::QbeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! jdbc_types {
    ($($variant:ident => ($keyword:literal, $code:literal)),+ $(,)?) => {
        /// SQL type tag for a bind parameter.
        ///
        /// Serialized as its upper-case keyword (e.g. `"VARCHAR"`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum JdbcType {
            $($variant,)+
        }

        impl JdbcType {
            /// Every tag, in declaration order.
            pub const ALL: &'static [JdbcType] = &[$(JdbcType::$variant,)+];

            /// The upper-case keyword used in placeholders.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(JdbcType::$variant => $keyword,)+
                }
            }

            /// The `java.sql.Types` integer code for this tag.
            pub const fn vendor_code(self) -> i32 {
                match self {
                    $(JdbcType::$variant => $code,)+
                }
            }

            /// Look up a tag by its `java.sql.Types` integer code.
            pub fn from_vendor_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(JdbcType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

jdbc_types! {
    Bit => ("BIT", -7),
    Tinyint => ("TINYINT", -6),
    Smallint => ("SMALLINT", 5),
    Integer => ("INTEGER", 4),
    Bigint => ("BIGINT", -5),
    Float => ("FLOAT", 6),
    Real => ("REAL", 7),
    Double => ("DOUBLE", 8),
    Numeric => ("NUMERIC", 2),
    Decimal => ("DECIMAL", 3),
    Char => ("CHAR", 1),
    Varchar => ("VARCHAR", 12),
    Longvarchar => ("LONGVARCHAR", -1),
    Date => ("DATE", 91),
    Time => ("TIME", 92),
    Timestamp => ("TIMESTAMP", 93),
    Binary => ("BINARY", -2),
    Varbinary => ("VARBINARY", -3),
    Longvarbinary => ("LONGVARBINARY", -4),
    Null => ("NULL", 0),
    Other => ("OTHER", 1111),
    JavaObject => ("JAVA_OBJECT", 2000),
    Distinct => ("DISTINCT", 2001),
    Struct => ("STRUCT", 2002),
    Array => ("ARRAY", 2003),
    Blob => ("BLOB", 2004),
    Clob => ("CLOB", 2005),
    Ref => ("REF", 2006),
    Datalink => ("DATALINK", 70),
    Boolean => ("BOOLEAN", 16),
    Rowid => ("ROWID", -8),
    Nchar => ("NCHAR", -15),
    Nvarchar => ("NVARCHAR", -9),
    Longnvarchar => ("LONGNVARCHAR", -16),
    Nclob => ("NCLOB", 2011),
    Sqlxml => ("SQLXML", 2009),
    RefCursor => ("REF_CURSOR", 2012),
    TimeWithTimezone => ("TIME_WITH_TIMEZONE", 2013),
    TimestampWithTimezone => ("TIMESTAMP_WITH_TIMEZONE", 2014),
}

impl fmt::Display for JdbcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JdbcType {
    type Err = QbeError;

    /// Parse a keyword, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JdbcType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QbeError::UnknownJdbcType(s.to_string()))
    }
}
