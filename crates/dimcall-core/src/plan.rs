//! Static shape of an expansion.
//!
//! An [`ExpansionPlan`] pairs the compile-time classification of each
//! argument position with the extent it contributes, and folds them into the
//! total number of invocations. Scalars always contribute an extent of one.

use std::fmt;

use smallvec::SmallVec;

use crate::classify::ArgumentKind;
use crate::error::{PlanError, PlanResult};

/// One argument position of a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    pub position: usize,
    pub kind: ArgumentKind,
    pub extent: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionPlan {
    axes: SmallVec<[Axis; 4]>,
    invocations: usize,
}

impl ExpansionPlan {
    /// Build a plan from per-position kinds and extents.
    pub fn new(kinds: &[ArgumentKind], extents: &[usize]) -> PlanResult<Self> {
        debug_assert_eq!(kinds.len(), extents.len());
        let invocations = invocation_count(extents)?;
        let axes = kinds
            .iter()
            .zip(extents)
            .enumerate()
            .map(|(position, (&kind, &extent))| Axis {
                position,
                kind,
                extent,
            })
            .collect();
        Ok(Self { axes, invocations })
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axes classified as dimensions, in argument order.
    pub fn dimensions(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter().filter(|axis| axis.kind.is_dimension())
    }

    pub fn has_dimensions(&self) -> bool {
        self.dimensions().next().is_some()
    }

    /// Number of times the callable will be invoked.
    pub fn invocations(&self) -> usize {
        self.invocations
    }
}

impl fmt::Display for ExpansionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.axes.is_empty() {
            f.write_str("()")?;
        }
        for (i, axis) in self.axes.iter().enumerate() {
            if i > 0 {
                f.write_str(" x ")?;
            }
            match axis.kind {
                ArgumentKind::Scalar => f.write_str("scalar")?,
                ArgumentKind::Dimension => write!(f, "dim[{}]", axis.extent)?,
            }
        }
        write!(f, " = {}", self.invocations)
    }
}

/// Product of `extents`, or zero as soon as any extent is zero.
pub fn invocation_count(extents: &[usize]) -> PlanResult<usize> {
    if extents.contains(&0) {
        return Ok(0);
    }
    extents
        .iter()
        .enumerate()
        .try_fold(1usize, |total, (position, &extent)| {
            total
                .checked_mul(extent)
                .ok_or(PlanError::InvocationOverflow { position, extent })
        })
}
