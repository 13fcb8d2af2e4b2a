pub use super::value_objects::{Price, Timestamp};
use serde::{Deserialize, Serialize};

/// Domain entity - one backend-reported average price for a one-hour bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyPricePoint {
    pub hour: Timestamp,
    pub average_price: Price,
}

impl HourlyPricePoint {
    pub fn new(hour: Timestamp, average_price: Price) -> Self {
        Self { hour, average_price }
    }
}

/// Domain entity - an ordered run of hourly buckets for one chain.
///
/// Points are kept exactly as received; ascending order by hour is assumed
/// from the backend, never verified or enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<HourlyPricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<HourlyPricePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[HourlyPricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&HourlyPricePoint> {
        self.points.last()
    }

    /// Lowest and highest average price across the series.
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let first = self.points.first()?;

        let mut min = first.average_price;
        let mut max = first.average_price;
        for point in &self.points {
            if point.average_price.value() < min.value() {
                min = point.average_price;
            }
            if point.average_price.value() > max.value() {
                max = point.average_price;
            }
        }

        Some((min, max))
    }
}

impl From<Vec<HourlyPricePoint>> for PriceSeries {
    fn from(points: Vec<HourlyPricePoint>) -> Self {
        Self::new(points)
    }
}
