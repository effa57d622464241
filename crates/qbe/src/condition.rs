//! Conditions: the comparison half of a criterion.
//!
//! A [`Condition`] supplies the operator text, the value(s) to bind, and how the
//! field is spelled in the fragment. Renderers only ever talk to this trait, so
//! new comparison semantics are added by implementing it (or wrapping a built-in
//! and overriding some hooks), never by touching the renderers.
//!
//! # Example
//! ```ignore
//! use qbe::condition::{Condition, IsLike, Operand};
//! use qbe::Field;
//!
//! /// `lower(field) like lower(value)`
//! struct IsLikeLower(IsLike<String>);
//!
//! impl Condition<String> for IsLikeLower {
//!     fn operator(&self) -> &str {
//!         self.0.operator()
//!     }
//!
//!     fn operand(&self) -> Operand<String> {
//!         self.0.operand().map(|v| v.to_lowercase())
//!     }
//!
//!     fn field_name(&self, field: &Field<String>) -> String {
//!         format!("lower({})", field.aliased_name())
//!     }
//!
//!     fn field_name_without_alias(&self, field: &Field<String>) -> String {
//!         format!("lower({})", field.name())
//!     }
//! }
//! ```

use crate::field::Field;
use std::marker::PhantomData;

/// The value(s) a condition binds, by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<T> {
    /// Nothing to bind: `field is null`
    None,
    /// One placeholder: `field = #{..}`
    Single(T),
    /// Two placeholders: `field between #{..} and #{..}`
    Pair(T, T),
    /// A parenthesized placeholder list: `field in (#{..},#{..})`
    List(Vec<T>),
}

impl<T> Operand<T> {
    /// Number of bind parameters this operand produces.
    pub fn len(&self) -> usize {
        match self {
            Operand::None => 0,
            Operand::Single(_) => 1,
            Operand::Pair(_, _) => 2,
            Operand::List(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transform every bound value, keeping the shape.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Operand<U> {
        match self {
            Operand::None => Operand::None,
            Operand::Single(v) => Operand::Single(f(v)),
            Operand::Pair(a, b) => Operand::Pair(f(a), f(b)),
            Operand::List(values) => Operand::List(values.into_iter().map(f).collect()),
        }
    }
}

/// Fragment-generation hooks for one comparison.
///
/// Only [`operator`](Self::operator) and [`operand`](Self::operand) are required.
/// The field-name hooks default to the field's qualified and bare names.
pub trait Condition<T> {
    /// Operator text placed between the field expression and the placeholders.
    fn operator(&self) -> &str;

    /// The value(s) to bind, already transformed if the condition transforms them.
    fn operand(&self) -> Operand<T>;

    /// Field expression used by the alias-aware renderer.
    fn field_name(&self, field: &Field<T>) -> String {
        field.aliased_name()
    }

    /// Field expression used by the renderer that ignores table aliases.
    fn field_name_without_alias(&self, field: &Field<T>) -> String {
        field.name().to_string()
    }
}

impl<T, C: Condition<T> + ?Sized> Condition<T> for &C {
    fn operator(&self) -> &str {
        (**self).operator()
    }

    fn operand(&self) -> Operand<T> {
        (**self).operand()
    }

    fn field_name(&self, field: &Field<T>) -> String {
        (**self).field_name(field)
    }

    fn field_name_without_alias(&self, field: &Field<T>) -> String {
        (**self).field_name_without_alias(field)
    }
}

impl<T, C: Condition<T> + ?Sized> Condition<T> for Box<C> {
    fn operator(&self) -> &str {
        (**self).operator()
    }

    fn operand(&self) -> Operand<T> {
        (**self).operand()
    }

    fn field_name(&self, field: &Field<T>) -> String {
        (**self).field_name(field)
    }

    fn field_name_without_alias(&self, field: &Field<T>) -> String {
        (**self).field_name_without_alias(field)
    }
}

macro_rules! single_value_condition {
    ($(#[$meta:meta])* $name:ident => $op:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<T> {
            value: T,
        }

        impl<T> $name<T> {
            pub fn of(value: T) -> Self {
                Self { value }
            }

            /// The stored operand, untransformed.
            pub fn value(&self) -> &T {
                &self.value
            }
        }

        impl<T: Clone> Condition<T> for $name<T> {
            fn operator(&self) -> &str {
                $op
            }

            fn operand(&self) -> Operand<T> {
                Operand::Single(self.value.clone())
            }
        }
    };
}

single_value_condition! {
    /// `field = value`
    IsEqualTo => "="
}

single_value_condition! {
    /// `field <> value`
    IsNotEqualTo => "<>"
}

single_value_condition! {
    /// `field > value`
    IsGreaterThan => ">"
}

single_value_condition! {
    /// `field >= value`
    IsGreaterThanOrEqualTo => ">="
}

single_value_condition! {
    /// `field < value`
    IsLessThan => "<"
}

single_value_condition! {
    /// `field <= value`
    IsLessThanOrEqualTo => "<="
}

single_value_condition! {
    /// `field like pattern`
    IsLike => "like"
}

single_value_condition! {
    /// `field not like pattern`
    IsNotLike => "not like"
}

/// `upper(field) like PATTERN`: the pattern is upper-cased before binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsLikeCaseInsensitive {
    inner: IsLike<String>,
}

impl IsLikeCaseInsensitive {
    pub fn of(value: impl Into<String>) -> Self {
        Self {
            inner: IsLike::of(value.into()),
        }
    }

    /// The value to bind: the pattern upper-cased.
    pub fn value(&self) -> String {
        self.inner.value().to_uppercase()
    }

    /// The pattern as given, before upper-casing.
    pub fn pattern(&self) -> &str {
        self.inner.value()
    }
}

impl Condition<String> for IsLikeCaseInsensitive {
    fn operator(&self) -> &str {
        self.inner.operator()
    }

    fn operand(&self) -> Operand<String> {
        Operand::Single(self.value())
    }

    fn field_name(&self, field: &Field<String>) -> String {
        format!("upper({})", field.aliased_name())
    }

    fn field_name_without_alias(&self, field: &Field<String>) -> String {
        format!("upper({})", field.name())
    }
}

/// `upper(field) not like PATTERN`: the pattern is upper-cased before binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsNotLikeCaseInsensitive {
    inner: IsNotLike<String>,
}

impl IsNotLikeCaseInsensitive {
    pub fn of(value: impl Into<String>) -> Self {
        Self {
            inner: IsNotLike::of(value.into()),
        }
    }

    pub fn value(&self) -> String {
        self.inner.value().to_uppercase()
    }

    pub fn pattern(&self) -> &str {
        self.inner.value()
    }
}

impl Condition<String> for IsNotLikeCaseInsensitive {
    fn operator(&self) -> &str {
        self.inner.operator()
    }

    fn operand(&self) -> Operand<String> {
        Operand::Single(self.value())
    }

    fn field_name(&self, field: &Field<String>) -> String {
        format!("upper({})", field.aliased_name())
    }

    fn field_name_without_alias(&self, field: &Field<String>) -> String {
        format!("upper({})", field.name())
    }
}

macro_rules! no_value_condition {
    ($(#[$meta:meta])* $name:ident => $op:literal) => {
        $(#[$meta])*
        pub struct $name<T> {
            _marker: PhantomData<fn() -> T>,
        }

        impl<T> $name<T> {
            pub fn of() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::of()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self::of()
            }
        }

        impl<T> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T> Condition<T> for $name<T> {
            fn operator(&self) -> &str {
                $op
            }

            fn operand(&self) -> Operand<T> {
                Operand::None
            }
        }
    };
}

no_value_condition! {
    /// `field is null`
    IsNull => "is null"
}

no_value_condition! {
    /// `field is not null`
    IsNotNull => "is not null"
}

macro_rules! range_condition {
    ($(#[$meta:meta])* $name:ident => $op:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<T> {
            from: T,
            to: T,
        }

        impl<T> $name<T> {
            pub fn of(from: T, to: T) -> Self {
                Self { from, to }
            }

            /// Lower bound.
            pub fn start(&self) -> &T {
                &self.from
            }

            /// Upper bound.
            pub fn end(&self) -> &T {
                &self.to
            }
        }

        impl<T: Clone> Condition<T> for $name<T> {
            fn operator(&self) -> &str {
                $op
            }

            fn operand(&self) -> Operand<T> {
                Operand::Pair(self.from.clone(), self.to.clone())
            }
        }
    };
}

range_condition! {
    /// `field between from and to`
    IsBetween => "between"
}

range_condition! {
    /// `field not between from and to`
    IsNotBetween => "not between"
}

macro_rules! list_condition {
    ($(#[$meta:meta])* $name:ident => $op:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<T> {
            values: Vec<T>,
        }

        impl<T> $name<T> {
            pub fn of(values: impl IntoIterator<Item = T>) -> Self {
                Self {
                    values: values.into_iter().collect(),
                }
            }

            pub fn values(&self) -> &[T] {
                &self.values
            }
        }

        impl<T: Clone> Condition<T> for $name<T> {
            fn operator(&self) -> &str {
                $op
            }

            fn operand(&self) -> Operand<T> {
                Operand::List(self.values.clone())
            }
        }
    };
}

list_condition! {
    /// `field in (v1, v2, ...)`
    ///
    /// An empty list renders `in ()`; callers that may hold empty lists should
    /// skip the criterion instead.
    IsIn => "in"
}

list_condition! {
    /// `field not in (v1, v2, ...)`
    IsNotIn => "not in"
}
