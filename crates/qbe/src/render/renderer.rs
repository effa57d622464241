use super::options::RenderOptions;
use super::placeholder::write_placeholder;
use super::rendered::{FragmentParameters, RenderedCriterion};
use crate::condition::{Condition, Operand};
use crate::criterion::Criterion;
use crate::sequence::SequenceCounter;

/// How the field is spelled in the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldNaming {
    /// `alias.name` when the field carries an alias
    Aliased,
    /// `name`, even when the field carries an alias
    Unaliased,
}

impl FieldNaming {
    #[cfg(feature = "tracing")]
    fn as_str(self) -> &'static str {
        match self {
            FieldNaming::Aliased => "aliased",
            FieldNaming::Unaliased => "unaliased",
        }
    }
}

/// Renders a criterion using the field's alias-qualified name.
///
/// # Example
/// ```ignore
/// use qbe::{Criterion, CriterionRenderer, Field, JdbcType, SequenceCounter};
/// use qbe::condition::IsEqualTo;
///
/// let field: Field<i32> = Field::of("id", JdbcType::Integer)?.with_alias("a")?;
/// let criterion = Criterion::of(field, IsEqualTo::of(3));
/// let counter = SequenceCounter::default();
///
/// let rc = CriterionRenderer::of(&criterion, &counter).render();
/// assert_eq!(rc.where_clause_fragment(), " a.id = #{parameters.p1,jdbcType=INTEGER}");
/// assert_eq!(rc.fragment_parameters().get("p1"), Some(&3));
/// # Ok::<(), qbe::QbeError>(())
/// ```
#[derive(Debug)]
pub struct CriterionRenderer<'a, T, C> {
    criterion: &'a Criterion<T, C>,
    counter: &'a SequenceCounter,
    options: RenderOptions,
}

impl<'a, T, C: Condition<T>> CriterionRenderer<'a, T, C> {
    pub fn of(criterion: &'a Criterion<T, C>, counter: &'a SequenceCounter) -> Self {
        Self {
            criterion,
            counter,
            options: RenderOptions::DEFAULT,
        }
    }

    /// Override placeholder naming.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the fragment, drawing one sequence number per bound value.
    pub fn render(&self) -> RenderedCriterion<T> {
        render_criterion(
            self.criterion,
            self.counter,
            &self.options,
            FieldNaming::Aliased,
        )
    }
}

/// Renders a criterion using the bare field name, ignoring any alias.
///
/// Used where the statement has no table alias in scope, e.g. single-table
/// `UPDATE` and `DELETE`.
#[derive(Debug)]
pub struct CriterionRendererWithoutTableAlias<'a, T, C> {
    criterion: &'a Criterion<T, C>,
    counter: &'a SequenceCounter,
    options: RenderOptions,
}

impl<'a, T, C: Condition<T>> CriterionRendererWithoutTableAlias<'a, T, C> {
    pub fn of(criterion: &'a Criterion<T, C>, counter: &'a SequenceCounter) -> Self {
        Self {
            criterion,
            counter,
            options: RenderOptions::DEFAULT,
        }
    }

    /// Override placeholder naming.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the fragment, drawing one sequence number per bound value.
    pub fn render(&self) -> RenderedCriterion<T> {
        render_criterion(
            self.criterion,
            self.counter,
            &self.options,
            FieldNaming::Unaliased,
        )
    }
}

/// ` <field-expr> <operator>[ <placeholders>]`
///
/// - single: `#{..}`
/// - pair: `#{..} and #{..}`
/// - list: `(#{..},#{..},...)`
fn render_criterion<T, C: Condition<T>>(
    criterion: &Criterion<T, C>,
    counter: &SequenceCounter,
    options: &RenderOptions,
    naming: FieldNaming,
) -> RenderedCriterion<T> {
    let field = criterion.field();
    let condition = criterion.condition();

    let field_expr = match naming {
        FieldNaming::Aliased => condition.field_name(field),
        FieldNaming::Unaliased => condition.field_name_without_alias(field),
    };
    let operator = condition.operator();
    let operand = condition.operand();

    let capacity = field_expr.len() + operator.len() + 48 * operand.len();
    let mut fragment = String::with_capacity(capacity);
    let mut parameters = FragmentParameters::with_capacity(operand.len());

    fragment.push(' ');
    fragment.push_str(&field_expr);
    fragment.push(' ');
    fragment.push_str(operator);

    let mut bind = |fragment: &mut String, value: T| {
        let key = options.key(counter.next());
        write_placeholder(fragment, options, &key, field);
        parameters.push(key, value);
    };

    match operand {
        Operand::None => {}
        Operand::Single(value) => {
            fragment.push(' ');
            bind(&mut fragment, value);
        }
        Operand::Pair(from, to) => {
            fragment.push(' ');
            bind(&mut fragment, from);
            fragment.push_str(" and ");
            bind(&mut fragment, to);
        }
        Operand::List(values) => {
            fragment.push_str(" (");
            for (i, value) in values.into_iter().enumerate() {
                if i > 0 {
                    fragment.push(',');
                }
                bind(&mut fragment, value);
            }
            fragment.push(')');
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "qbe.render",
        renderer = naming.as_str(),
        fragment = %fragment,
        param_count = parameters.len(),
    );

    RenderedCriterion::new(fragment, parameters)
}
