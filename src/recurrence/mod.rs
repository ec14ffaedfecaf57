//! Recurrence coefficient providers.
//!
//! Providers are stateless: every coefficient is a closed-form function of the
//! degree (and, for the triangle, the sub-index `r`). The standardization enums
//! are resolved once per tree into a statically dispatched provider.
//!
//! - [`triangle`]: `α, β, γ, δ, ε` for the triangle family
//! - [`hermite`]: `p_0, a, b, c` for the 1-D Hermite families

pub mod hermite;
pub mod triangle;

pub use hermite::{
    HermiteKind, HermiteScaling, HermiteStandardization, RecurrenceCoefficients, hermite,
};
pub use triangle::{
    NormalCoefficients, TriangleCoefficients, TriangleStandardization, UnitCoefficients,
};
