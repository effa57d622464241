//! Prelude module for convenient imports.
//!
//! ```ignore
//! use qbe::prelude::*;
//! ```

pub use crate::condition::{
    Condition, IsBetween, IsEqualTo, IsGreaterThan, IsGreaterThanOrEqualTo, IsIn, IsLessThan,
    IsLessThanOrEqualTo, IsLike, IsLikeCaseInsensitive, IsNotBetween, IsNotEqualTo, IsNotIn,
    IsNotLike, IsNotLikeCaseInsensitive, IsNotNull, IsNull, Operand,
};
pub use crate::criterion::Criterion;
pub use crate::error::{QbeError, QbeResult};
pub use crate::field::Field;
pub use crate::jdbc::JdbcType;
pub use crate::render::{
    CriterionRenderer, CriterionRendererWithoutTableAlias, FragmentParameters, RenderOptions,
    RenderedCriterion,
};
pub use crate::sequence::SequenceCounter;
