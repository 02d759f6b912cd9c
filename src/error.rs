//! The failures that geometric operations can report
//!
//! Most misuses (mixing two Spaces, adding two points, scaling a unit vector
//! in place...) are rejected by the compiler, because the corresponding trait
//! impls simply do not exist. What remains at runtime are the errors that
//! depend on values (arity of a literal list, a zero-length vector that should
//! be normalized, an out-of-range index), and every misuse that the
//! [`dynamic`][crate::dynamic] layer has to check on runtime tags. Each of
//! those has its own variant, so callers can tell "wrong Space" from "wrong
//! role" from "wrong dimensionality".

use thiserror::Error;

/// The operation that was attempted when two Spaces did not match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a += b`
    AddAssign,
    /// `a -= b`
    SubAssign,
    /// `a.dot(b)`
    Dot,
    /// `a.cross(b)`
    Cross,
    /// `a.cross_assign(b)`
    CrossAssign,
    /// `a == b`
    Compare,
    /// Recovering a statically tagged entity from a runtime-tagged one
    Downcast,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::AddAssign => "in-place addition",
            Operation::SubAssign => "in-place subtraction",
            Operation::Dot => "dot product",
            Operation::Cross => "cross product",
            Operation::CrossAssign => "in-place cross product",
            Operation::Compare => "comparison",
            Operation::Downcast => "downcast",
        })
    }
}

/// An operation that is invalid for the role, normalization or dimensionality
/// of its operands, whatever their Space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RoleViolation {
    #[error("two points cannot be added")]
    PointPlusPoint,
    #[error("a point cannot be added to a vector")]
    VectorPlusPoint,
    #[error("a point cannot be subtracted from a vector")]
    VectorMinusPoint,
    #[error("the difference of two points is a vector and cannot replace a point in place")]
    PointMinusPointInPlace,
    #[error("a point cannot be compared to a vector")]
    PointVectorEquality,
    #[error("a 2D entity cannot be compared to a 3D entity")]
    MixedDimensionEquality,
    #[error("a point cannot be scaled")]
    PointScale,
    #[error("a point has no dot product")]
    PointDot,
    #[error("a point has no cross product")]
    PointCross,
    #[error("a point has no magnitude")]
    PointMagnitude,
    #[error("a point cannot be normalized")]
    PointNormalize,
    #[error("a normalized vector cannot be scaled in place")]
    NormalizedInPlaceScale,
    #[error("a normalized vector cannot be added to in place")]
    NormalizedInPlaceAdd,
    #[error("a normalized vector cannot be subtracted from in place")]
    NormalizedInPlaceSub,
    #[error("a normalized vector cannot be crossed in place")]
    NormalizedInPlaceCross,
    #[error("the magnitude of a normalized vector is not exposed")]
    NormalizedMagnitude,
    #[error("a normalized vector is already normalized")]
    NormalizedNormalize,
    #[error("a 2D vector cannot be crossed in place, the result is 3D")]
    InPlaceCross2D,
    #[error("an in-place operation cannot change the dimensionality of its receiver")]
    InPlaceDimensionChange,
    #[error("this Space does not allow projection onto the XY plane")]
    XyProjectionUnsupported,
    #[error("the entity is already 2D")]
    AlreadyPlanar,
    #[error("the entity is already 3D")]
    AlreadySpatial,
    #[error("only 3D entities can be converted to another Space")]
    PlanarConversion,
    #[error("the runtime kind does not match the requested entity type")]
    KindMismatch,
}

/// Every error this crate reports
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A literal list did not have as many values as the entity has
    /// dimensions
    #[error("expected {expected} components, got {actual}")]
    ConstructionArity { expected: usize, actual: usize },

    /// A normalized vector was requested from a (nearly) zero vector
    #[error("cannot normalize a vector of magnitude {magnitude:e}")]
    DegenerateNormalization { magnitude: f64 },

    /// A component index was not in `0..dim`. The message is stable
    #[error("Index is out of range")]
    IndexOutOfRange { index: usize, dim: usize },

    /// The operands belong to different Spaces
    #[error("cross-space {op}: {lhs} and {rhs} are different Spaces")]
    CrossSpace {
        op: Operation,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// The operation makes no sense for the kind of its operands
    #[error(transparent)]
    InvalidRole(#[from] RoleViolation),

    /// Converting an entity to the Space it already belongs to
    #[error("cannot convert a {space} entity to {space}")]
    InvalidConversion { space: &'static str },
}

impl GeomError {
    /// Whether this error is about mismatching Spaces (as opposed to mismatching
    /// roles or values)
    pub fn is_cross_space(&self) -> bool {
        matches!(self, GeomError::CrossSpace { .. })
    }

    /// The role violation carried by this error, if any
    pub fn role_violation(&self) -> Option<RoleViolation> {
        match self {
            GeomError::InvalidRole(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_macros::*;

    simple_eqs! {
        index_message_is_stable:
            GeomError::IndexOutOfRange { index: 3, dim: 3 }.to_string() => "Index is out of range",
        arity_message:
            GeomError::ConstructionArity { expected: 3, actual: 2 }.to_string()
            => "expected 3 components, got 2",
        role_is_transparent:
            GeomError::from(RoleViolation::PointPlusPoint).to_string() => "two points cannot be added",
        cross_space_message:
            GeomError::CrossSpace { op: Operation::Dot, lhs: "View", rhs: "Patient" }.to_string()
            => "cross-space dot product: View and Patient are different Spaces",
        role_violation_extracted:
            GeomError::from(RoleViolation::PointScale).role_violation() => Some(RoleViolation::PointScale),
        cross_space_detected:
            GeomError::CrossSpace { op: Operation::Add, lhs: "A", rhs: "B" }.is_cross_space() => true
    }
}
