//! Criterion rendering.
//!
//! Turns a [`Criterion`](crate::Criterion) into a WHERE-clause fragment with
//! named placeholders plus the values bound to them:
//!
//! ```text
//! <space><field-expr><space><operator><space>#{parameters.p<N>,jdbcType=<TYPE>[,typeHandler=<HANDLER>]}
//! ```
//!
//! Two renderers share the same algorithm and differ only in how the field is
//! spelled: [`CriterionRenderer`] qualifies it with the table alias,
//! [`CriterionRendererWithoutTableAlias`] never does. Every fragment of one
//! statement should draw from the same [`SequenceCounter`](crate::SequenceCounter)
//! so that parameter keys stay unique when the fragments are combined.

mod options;
mod placeholder;
mod rendered;
mod renderer;

#[cfg(test)]
mod tests;

pub use options::RenderOptions;
pub use rendered::{FragmentParameters, RenderedCriterion};
pub use renderer::{CriterionRenderer, CriterionRendererWithoutTableAlias};
