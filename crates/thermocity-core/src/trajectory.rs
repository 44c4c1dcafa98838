//! Projected temperature at the configured sample years.

use serde::{Deserialize, Serialize};

/// Projected warming at a single year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub year: i32,
    /// unit: °C above pre-industrial
    pub temperature: f64,
}

/// Temperature trajectory in ascending year order.
///
/// The points match the sample years of the parameters that produced them, one for one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub(crate) fn from_points(points: Vec<TrajectoryPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Temperature at the last sample year, if any.
    pub fn end_temperature(&self) -> Option<f64> {
        self.points.last().map(|p| p.temperature)
    }

    /// Temperature at an exact sample year.
    pub fn temperature_at(&self, year: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.temperature)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = TrajectoryPoint;
    type IntoIter = std::vec::IntoIter<TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
