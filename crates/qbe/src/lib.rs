//! # qbe
//!
//! Query-by-example criterion rendering.
//!
//! A [`Criterion`] pairs a typed [`Field`] with a [`Condition`]. Rendering it
//! produces a WHERE-clause fragment with MyBatis-style named placeholders and
//! the values bound to them:
//!
//! ```ignore
//! use qbe::condition::IsEqualTo;
//! use qbe::{Criterion, CriterionRenderer, Field, JdbcType, SequenceCounter};
//!
//! let id: Field<i32> = Field::of("id", JdbcType::Integer)?.with_alias("a")?;
//! let counter = SequenceCounter::default();
//!
//! let rc = CriterionRenderer::of(&Criterion::of(id, IsEqualTo::of(3)), &counter).render();
//! assert_eq!(rc.where_clause_fragment(), " a.id = #{parameters.p1,jdbcType=INTEGER}");
//! assert_eq!(rc.fragment_parameters().get("p1"), Some(&3));
//! # Ok::<(), qbe::QbeError>(())
//! ```
//!
//! ## Features
//!
//! - **Alias-aware or not**: [`CriterionRenderer`] qualifies fields with their table
//!   alias, [`CriterionRendererWithoutTableAlias`] never does
//! - **Shared numbering**: one [`SequenceCounter`] per statement keeps `p1, p2, ...` unique
//! - **Pluggable conditions**: implement [`Condition`] to change the field expression,
//!   operator, or bound value without touching the renderers
//! - **Tracing**: enable the `tracing` feature to emit a `qbe.render` event per fragment

pub mod condition;
pub mod criterion;
pub mod error;
pub mod field;
pub mod ident;
pub mod jdbc;
pub mod prelude;
pub mod render;
pub mod sequence;

pub use condition::{Condition, Operand};
pub use criterion::Criterion;
pub use error::{QbeError, QbeResult};
pub use field::Field;
pub use ident::{Ident, IntoIdent};
pub use jdbc::JdbcType;
pub use render::{
    CriterionRenderer, CriterionRendererWithoutTableAlias, FragmentParameters, RenderOptions,
    RenderedCriterion,
};
pub use sequence::SequenceCounter;
