//! Unit Circle - the circle group x² + y² = 1 over small prime fields
//!
//! For an odd prime p the solutions of x² + y² ≡ 1 (mod p) form a cyclic
//! group under complex multiplication. This crate enumerates them, finds
//! the lexicographically smallest generator and lists its powers.
//!
//! # Features
//!
//! - `serde` - Serialize/Deserialize for points and reports
//!
//! # Components
//!
//! - `field` - Arithmetic modulo a prime, including Tonelli–Shanks square roots
//! - `circle` - Circle points and the group law
//! - `points` - Enumeration of all circle points
//! - `order` - Element orders and generator search
//! - `powers` - Power sequences of a generator
//! - `primality` - The primality check collaborator
//! - `pipeline` - One request end to end
//! - `error` - Failure taxonomy

pub mod circle;
pub mod error;
pub mod field;
pub mod order;
pub mod pipeline;
pub mod points;
pub mod powers;
pub mod primality;

// Re-exports for convenience
pub use circle::{CircleGroup, CirclePoint};
pub use error::CircleError;
pub use field::{FieldElement, PrimeField};
pub use order::{choose_generator, euler_phi, find_generators, generators_from, order_of};
pub use pipeline::{compute, CircleReport, Request};
pub use points::{expected_cardinality, PointSet};
pub use powers::{power_sequence, IndexedPoint, Powers};
pub use primality::{PrimalityCheck, TrialDivision};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::circle::{CircleGroup, CirclePoint};
    pub use crate::error::CircleError;
    pub use crate::field::PrimeField;
    pub use crate::pipeline::{compute, CircleReport, Request};
    pub use crate::primality::{PrimalityCheck, TrialDivision};
}
