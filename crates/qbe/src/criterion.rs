//! A field paired with a condition, ready to render.

use crate::condition::Condition;
use crate::field::Field;

/// One `field <op> value` comparison awaiting rendering.
///
/// `C` is usually a concrete condition type; use `Box<dyn Condition<T>>` to keep
/// criteria with different conditions in one collection.
#[derive(Debug, Clone)]
pub struct Criterion<T, C> {
    field: Field<T>,
    condition: C,
}

impl<T, C: Condition<T>> Criterion<T, C> {
    pub fn of(field: Field<T>, condition: C) -> Self {
        Self { field, condition }
    }

    pub fn field(&self) -> &Field<T> {
        &self.field
    }

    pub fn condition(&self) -> &C {
        &self.condition
    }
}

impl<T: 'static> Criterion<T, Box<dyn Condition<T>>> {
    /// Build a criterion over a type-erased condition.
    pub fn boxed(field: Field<T>, condition: impl Condition<T> + 'static) -> Self {
        Self::of(field, Box::new(condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{IsEqualTo, IsNull, Operand};
    use crate::jdbc::JdbcType;

    #[test]
    fn pairs_field_and_condition() {
        let field: Field<i32> = Field::of("id", JdbcType::Integer).unwrap();
        let criterion = Criterion::of(field.clone(), IsEqualTo::of(3));
        assert_eq!(criterion.field(), &field);
        assert_eq!(criterion.condition().value(), &3);
    }

    #[test]
    fn boxed_criteria_share_a_type() {
        let field: Field<i32> = Field::of("id", JdbcType::Integer).unwrap();
        let criteria = vec![
            Criterion::boxed(field.clone(), IsEqualTo::of(3)),
            Criterion::boxed(field, IsNull::of()),
        ];
        assert_eq!(criteria[0].condition().operand(), Operand::Single(3));
        assert_eq!(criteria[1].condition().operator(), "is null");
    }
}
