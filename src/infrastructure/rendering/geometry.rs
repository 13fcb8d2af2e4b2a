//! Pure pixel-space math for the line renderer. No browser types in here.

/// Pixel rectangle the series is plotted into.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Pad the raw value range so the line never touches the plot edges. A flat
/// series gets a unit band around it instead of a zero-height scale.
pub fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let padding = span * 0.05;
    (min - padding, max + padding)
}

/// Evenly spaced x positions for `count` points across the plot width.
pub fn x_positions(count: usize, area: &PlotArea) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![area.left + area.width / 2.0],
        _ => (0..count)
            .map(|i| area.left + area.width * i as f64 / (count - 1) as f64)
            .collect(),
    }
}

/// Map a value into pixel y inside the area (y axis inverted).
pub fn value_to_y(value: f64, min: f64, max: f64, area: &PlotArea) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return area.top + area.height / 2.0;
    }
    area.top + area.height * (1.0 - (value - min) / range)
}

/// Project a value sequence into pixel points, order preserved.
pub fn project(values: &[f64], min: f64, max: f64, area: &PlotArea) -> Vec<(f64, f64)> {
    x_positions(values.len(), area)
        .into_iter()
        .zip(values.iter())
        .map(|(x, &value)| (x, value_to_y(value, min, max, area)))
        .collect()
}

/// One cubic segment of a smoothed polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSegment {
    pub c1: (f64, f64),
    pub c2: (f64, f64),
    pub end: (f64, f64),
}

/// Cardinal-spline control points between consecutive points. Tension 0.0
/// degenerates to straight segments; tangents at the ends collapse onto the
/// end points themselves.
pub fn smooth_segments(points: &[(f64, f64)], tension: f64) -> Vec<CurveSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let tangent = |i: usize| -> (f64, f64) {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(points.len() - 1)];
        (tension * (next.0 - prev.0) / 2.0, tension * (next.1 - prev.1) / 2.0)
    };

    (0..points.len() - 1)
        .map(|i| {
            let (mx0, my0) = tangent(i);
            let (mx1, my1) = tangent(i + 1);
            CurveSegment {
                c1: (points[i].0 + mx0 / 3.0, points[i].1 + my0 / 3.0),
                c2: (points[i + 1].0 - mx1 / 3.0, points[i + 1].1 - my1 / 3.0),
                end: points[i + 1],
            }
        })
        .collect()
}

/// Index step so at most `max_labels` x-axis labels are drawn.
pub fn label_step(count: usize, max_labels: usize) -> usize {
    if count == 0 || max_labels == 0 {
        return 1;
    }
    count.div_ceil(max_labels).max(1)
}

/// Evenly spaced tick values between `min` and `max`, inclusive.
pub fn tick_values(min: f64, max: f64, intervals: usize) -> Vec<f64> {
    if intervals == 0 {
        return vec![min];
    }
    (0..=intervals)
        .map(|i| min + (max - min) * i as f64 / intervals as f64)
        .collect()
}
