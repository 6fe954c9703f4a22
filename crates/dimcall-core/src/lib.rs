//! Core machinery behind `dimcall`.
//!
//! Three layers, each depending only on the ones listed before it:
//! - [`classify`]: decides from an argument's type whether it is a scalar or
//!   a dimension (a finite sequence whose elements are fanned out).
//! - [`outcome`]: resolves the callable's result category (nothing, value or
//!   reference) from its return type and picks the matching collection.
//! - [`expand`]: walks every combination of dimension elements in row-major
//!   order and invokes the callable once per combination.
//!
//! [`args`] glues them together for argument tuples, and [`plan`] exposes
//! the static shape of an expansion for inspection.

pub mod args;
pub mod classify;
pub mod error;
pub mod expand;
pub mod outcome;
pub mod plan;
pub mod sequence;

pub use args::{ArgumentList, BindList, Callable, IntoBindings, MAX_ARITY};
pub use classify::{
    Argument, ArgumentKind, Bind, Dim, Flag, IntoBinding, No, Scalar, Yes,
    is_any_dimension_present, is_dimension,
};
pub use error::PlanError;
pub use expand::{Dispatch, Expanded, Odometer, PRESIZE_LIMIT, expand};
pub use outcome::{Collect, Outcome, ResultCategory};
pub use plan::{Axis, ExpansionPlan, invocation_count};
pub use sequence::{IndexSeq, Sequence, index_seq};
