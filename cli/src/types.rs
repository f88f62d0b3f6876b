//! Output types for the `points` and `order` commands

use std::fmt;

use serde::Serialize;
use unit_circle::CirclePoint;

/// The circle points mod p
#[derive(Debug, Clone, Serialize)]
pub struct PointsOutput {
    pub prime: u32,
    pub cardinality: u64,
    pub points: Vec<CirclePoint>,
}

impl fmt::Display for PointsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circle points mod {} ({} total)", self.prime, self.cardinality)?;
        for point in &self.points {
            writeln!(f, "   {}", point)?;
        }
        Ok(())
    }
}

/// The order of a single point
#[derive(Debug, Clone, Serialize)]
pub struct OrderOutput {
    pub prime: u32,
    pub point: CirclePoint,
    /// `None` if the orbit never reached the identity
    pub order: Option<u64>,
    pub cardinality: u64,
    pub is_generator: bool,
}

impl fmt::Display for OrderOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            Some(order) => writeln!(f, "Order of {} mod {}: {}", self.point, self.prime, order)?,
            None => writeln!(f, "{} mod {} has no well-defined order", self.point, self.prime)?,
        }
        if self.is_generator {
            writeln!(f, "   generates all {} points", self.cardinality)?;
        } else {
            writeln!(f, "   not a generator (group order {})", self.cardinality)?;
        }
        Ok(())
    }
}
