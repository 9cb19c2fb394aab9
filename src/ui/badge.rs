use serde::Serialize;

const METERS_PER_KILOMETER: f64 = 1000.0;

/// Distance label shown next to a place, e.g. `350 m` or `1.2 km`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceBadge {
    pub meters: f64,
    pub label: String,
}

impl DistanceBadge {
    pub fn from_meters(meters: f64) -> Self {
        let meters = if meters.is_finite() && meters > 0.0 {
            meters
        } else {
            0.0
        };

        let rounded = meters.round();
        let label = if rounded < METERS_PER_KILOMETER {
            format!("{} m", rounded as u64)
        } else {
            format!("{:.1} km", meters / METERS_PER_KILOMETER)
        };

        Self { meters, label }
    }
}
