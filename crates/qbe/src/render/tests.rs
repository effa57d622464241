use super::*;
use crate::condition::{
    Condition, IsBetween, IsEqualTo, IsIn, IsLikeCaseInsensitive, IsNotIn, IsNotNull, IsNull,
    Operand,
};
use crate::criterion::Criterion;
use crate::field::Field;
use crate::jdbc::JdbcType;
use crate::sequence::SequenceCounter;

fn id_field() -> Field<i32> {
    Field::of("id", JdbcType::Integer).unwrap()
}

#[test]
fn single_value_aliased() {
    let criterion = Criterion::of(id_field().with_alias("a").unwrap(), IsEqualTo::of(3));
    let counter = SequenceCounter::default();

    let rc = CriterionRenderer::of(&criterion, &counter).render();
    assert_eq!(
        rc.where_clause_fragment(),
        " a.id = #{parameters.p1,jdbcType=INTEGER}"
    );
    assert_eq!(rc.fragment_parameters().len(), 1);
    assert_eq!(rc.fragment_parameters().get("p1"), Some(&3));
    assert_eq!(counter.peek(), 2);
}

#[test]
fn single_value_without_alias_ignores_alias() {
    let criterion = Criterion::of(id_field().with_alias("a").unwrap(), IsEqualTo::of(3));
    let counter = SequenceCounter::default();

    let rc = CriterionRendererWithoutTableAlias::of(&criterion, &counter).render();
    assert_eq!(
        rc.where_clause_fragment(),
        " id = #{parameters.p1,jdbcType=INTEGER}"
    );
}

#[test]
fn null_check_binds_nothing_and_keeps_counter() {
    let criterion = Criterion::of(id_field().with_alias("a").unwrap(), IsNull::of());
    let counter = SequenceCounter::default();

    let rc = CriterionRenderer::of(&criterion, &counter).render();
    assert_eq!(rc.where_clause_fragment(), " a.id is null");
    assert!(rc.fragment_parameters().is_empty());
    assert_eq!(counter.peek(), 1);

    let not_null = Criterion::of(id_field(), IsNotNull::of());
    let rc = CriterionRendererWithoutTableAlias::of(&not_null, &counter).render();
    assert_eq!(rc.where_clause_fragment(), " id is not null");
}

#[test]
fn between_uses_two_sequence_numbers() {
    let criterion = Criterion::of(id_field(), IsBetween::of(1, 10));
    let counter = SequenceCounter::new(4);

    let rc = CriterionRenderer::of(&criterion, &counter).render();
    assert_eq!(
        rc.where_clause_fragment(),
        " id between #{parameters.p4,jdbcType=INTEGER} and #{parameters.p5,jdbcType=INTEGER}"
    );
    assert_eq!(rc.fragment_parameters().get("p4"), Some(&1));
    assert_eq!(rc.fragment_parameters().get("p5"), Some(&10));
    assert_eq!(counter.peek(), 6);
}

#[test]
fn in_list_renders_parenthesized_placeholders() {
    let field = id_field().with_type_handler("foo.Bar").unwrap();
    let criterion = Criterion::of(field, IsIn::of([7, 8, 9]));
    let counter = SequenceCounter::default();

    let rc = CriterionRenderer::of(&criterion, &counter).render();
    assert_eq!(
        rc.where_clause_fragment(),
        " id in (#{parameters.p1,jdbcType=INTEGER,typeHandler=foo.Bar},\
         #{parameters.p2,jdbcType=INTEGER,typeHandler=foo.Bar},\
         #{parameters.p3,jdbcType=INTEGER,typeHandler=foo.Bar})"
    );
    assert_eq!(
        rc.fragment_parameters().keys().collect::<Vec<_>>(),
        ["p1", "p2", "p3"]
    );
}

#[test]
fn empty_not_in_list() {
    let criterion = Criterion::of(id_field(), IsNotIn::of(Vec::<i32>::new()));
    let counter = SequenceCounter::default();

    let rc = CriterionRenderer::of(&criterion, &counter).render();
    assert_eq!(rc.where_clause_fragment(), " id not in ()");
    assert!(rc.fragment_parameters().is_empty());
}

#[test]
fn custom_options_rename_placeholders() {
    let criterion = Criterion::of(id_field(), IsEqualTo::of(3));
    let counter = SequenceCounter::default();
    let options = RenderOptions::new("record", "arg").unwrap();

    let rc = CriterionRenderer::of(&criterion, &counter)
        .with_options(options)
        .render();
    assert_eq!(
        rc.where_clause_fragment(),
        " id = #{record.arg1,jdbcType=INTEGER}"
    );
    assert_eq!(rc.fragment_parameters().get("arg1"), Some(&3));
}

#[test]
fn case_insensitive_like_without_alias() {
    let field: Field<String> = Field::of("description", JdbcType::Varchar)
        .unwrap()
        .with_alias("a")
        .unwrap();
    let criterion = Criterion::of(field, IsLikeCaseInsensitive::of("fr%"));
    let counter = SequenceCounter::default();

    let rc = CriterionRendererWithoutTableAlias::of(&criterion, &counter).render();
    assert_eq!(
        rc.where_clause_fragment(),
        " upper(description) like #{parameters.p1,jdbcType=VARCHAR}"
    );
    assert_eq!(
        rc.fragment_parameters().get("p1").map(String::as_str),
        Some("FR%")
    );
}

/// Overrides only the operand hook; field naming comes from the defaults.
struct IsEqualToDoubled(i32);

impl Condition<i32> for IsEqualToDoubled {
    fn operator(&self) -> &str {
        "="
    }

    fn operand(&self) -> Operand<i32> {
        Operand::Single(self.0 * 2)
    }
}

#[test]
fn partial_override_keeps_default_field_naming() {
    let criterion = Criterion::of(id_field().with_alias("t").unwrap(), IsEqualToDoubled(21));
    let counter = SequenceCounter::default();

    let rc = CriterionRenderer::of(&criterion, &counter).render();
    assert_eq!(
        rc.where_clause_fragment(),
        " t.id = #{parameters.p1,jdbcType=INTEGER}"
    );
    assert_eq!(rc.fragment_parameters().get("p1"), Some(&42));
}

#[test]
fn boxed_criteria_render_in_sequence() {
    let criteria = vec![
        Criterion::boxed(id_field(), IsEqualTo::of(1)),
        Criterion::boxed(id_field(), IsNull::of()),
        Criterion::boxed(id_field(), IsBetween::of(2, 3)),
    ];
    let counter = SequenceCounter::default();

    let mut params = FragmentParameters::new();
    let mut clause = String::new();
    for criterion in &criteria {
        let (fragment, p) = CriterionRenderer::of(criterion, &counter)
            .render()
            .into_parts();
        clause.push_str(&fragment);
        params.merge(p).unwrap();
    }

    assert_eq!(
        clause,
        " id = #{parameters.p1,jdbcType=INTEGER} id is null \
         id between #{parameters.p2,jdbcType=INTEGER} and #{parameters.p3,jdbcType=INTEGER}"
    );
    assert_eq!(params.values().copied().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn merging_fragments_from_separate_counters_fails() {
    let first = Criterion::of(id_field(), IsEqualTo::of(7));
    let second = Criterion::of(id_field(), IsEqualTo::of(8));

    let (_, mut params) = CriterionRenderer::of(&first, &SequenceCounter::default())
        .render()
        .into_parts();
    let (_, other) = CriterionRenderer::of(&second, &SequenceCounter::default())
        .render()
        .into_parts();

    let err = params.merge(other).unwrap_err();
    assert_eq!(err, crate::QbeError::DuplicateParameter("p1".to_string()));
    assert_eq!(params.get("p1"), Some(&7));
}

#[cfg(feature = "tracing")]
mod trace_events {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn render_emits_one_event() {
        let criterion = Criterion::of(id_field().with_alias("a").unwrap(), IsEqualTo::of(3));
        let counter = SequenceCounter::default();

        let output = capture(|| {
            CriterionRenderer::of(&criterion, &counter).render();
        });

        assert_eq!(output.lines().count(), 1, "{output}");
        assert!(output.contains("TRACE"), "{output}");
        assert!(output.contains("qbe.render"), "{output}");
        assert!(output.contains("\"aliased\""), "{output}");
        assert!(output.contains("a.id = #{parameters.p1,jdbcType=INTEGER}"), "{output}");
        assert!(output.contains("param_count=1"), "{output}");
    }

    #[test]
    fn unaliased_render_names_its_renderer() {
        let criterion = Criterion::of(id_field().with_alias("a").unwrap(), IsNull::of());
        let counter = SequenceCounter::default();

        let output = capture(|| {
            CriterionRendererWithoutTableAlias::of(&criterion, &counter).render();
        });

        assert!(output.contains("\"unaliased\""), "{output}");
        assert!(output.contains("param_count=0"), "{output}");
    }
}
