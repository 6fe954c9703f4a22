//! Errors reported when inspecting an expansion.

use derive_more::{Display, Error};

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The product of all extents does not fit in `usize`.
    #[display("invocation count overflows usize at argument {position} (extent {extent})")]
    InvocationOverflow { position: usize, extent: usize },
}
