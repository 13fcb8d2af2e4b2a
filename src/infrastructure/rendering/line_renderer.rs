use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::{
    CurveSegment, PlotArea, label_step, padded_range, project, smooth_segments, tick_values,
    value_to_y, x_positions,
};
use crate::domain::chart::ChartSeries;
use crate::domain::errors::{RenderError, RenderResult};
use crate::domain::logging::{LogComponent, get_logger};

const BACKGROUND: &str = "#ffffff";
const GRID_COLOR: &str = "#e8e8e8";
const AXIS_TEXT_COLOR: &str = "#666666";
const TITLE_COLOR: &str = "#333333";

const PADDING: f64 = 16.0;
const HEADER_HEIGHT: f64 = 52.0; // legend row + title row
const AXIS_SPACE_LEFT: f64 = 56.0;
const AXIS_SPACE_BOTTOM: f64 = 28.0;
const GRID_INTERVALS: usize = 4;
const MAX_X_LABELS: usize = 8;
const LINE_WIDTH: f64 = 2.0;

/// Canvas 2D line-chart painter - Infrastructure implementation.
///
/// Draws one chain's formatted series: legend at top, title, smoothed line
/// with a translucent fill to the baseline, hour labels along the x axis and
/// price labels along the y axis.
pub struct LineChartRenderer {
    width: u32,
    height: u32,
}

impl LineChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn context(canvas: &HtmlCanvasElement) -> RenderResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(|_| RenderError::Canvas("failed to request 2d context".to_string()))?
            .ok_or_else(|| RenderError::Canvas("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::Canvas("failed to cast 2d context".to_string()))
    }

    /// Paint a full chart frame for one series.
    pub fn render(
        &self,
        canvas: &HtmlCanvasElement,
        series: &ChartSeries,
        title: &str,
    ) -> RenderResult<()> {
        canvas.set_width(self.width);
        canvas.set_height(self.height);
        let ctx = Self::context(canvas)?;

        let width = self.width as f64;
        let height = self.height as f64;

        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style(&JsValue::from_str(BACKGROUND));
        ctx.fill_rect(0.0, 0.0, width, height);

        self.draw_header(&ctx, series, title, width);

        let area = PlotArea {
            left: PADDING + AXIS_SPACE_LEFT,
            top: PADDING + HEADER_HEIGHT,
            width: width - PADDING * 2.0 - AXIS_SPACE_LEFT,
            height: height - PADDING * 2.0 - HEADER_HEIGHT - AXIS_SPACE_BOTTOM,
        };

        let Some((raw_min, raw_max)) = series.value_bounds() else {
            // Empty series: frame only, nothing to plot.
            get_logger().debug(
                LogComponent::Infrastructure("LineChart"),
                &format!("empty series for {}, skipping plot", series.style.chain),
            );
            return Ok(());
        };
        let (min, max) = padded_range(raw_min, raw_max);

        self.draw_grid(&ctx, &area, min, max);
        self.draw_x_labels(&ctx, &area, &series.labels);

        let points = project(&series.values, min, max, &area);
        if let [only] = points.as_slice() {
            self.draw_single_point(&ctx, series, *only);
            return Ok(());
        }

        let segments = smooth_segments(&points, series.style.tension);
        if series.style.fill {
            self.fill_under_curve(&ctx, series, &points, &segments, &area);
        }
        self.stroke_curve(&ctx, series, &points, &segments);

        get_logger().debug(
            LogComponent::Infrastructure("LineChart"),
            &format!("rendered {} points for {}", points.len(), series.style.chain),
        );

        Ok(())
    }

    fn draw_header(
        &self,
        ctx: &CanvasRenderingContext2d,
        series: &ChartSeries,
        title: &str,
        width: f64,
    ) {
        let center_x = width / 2.0;

        // Legend at top: color swatch plus label.
        let label = series.style.legend_label();
        let approx_text_width = label.len() as f64 * 6.5;
        ctx.set_fill_style(&JsValue::from_str(&series.style.color.to_css()));
        ctx.fill_rect(center_x - approx_text_width / 2.0 - 20.0, PADDING + 2.0, 12.0, 12.0);

        ctx.set_fill_style(&JsValue::from_str(TITLE_COLOR));
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(&label, center_x + 8.0, PADDING + 8.0);

        ctx.set_font("bold 16px sans-serif");
        let _ = ctx.fill_text(title, center_x, PADDING + 34.0);
    }

    fn draw_grid(&self, ctx: &CanvasRenderingContext2d, area: &PlotArea, min: f64, max: f64) {
        ctx.set_stroke_style(&JsValue::from_str(GRID_COLOR));
        ctx.set_line_width(1.0);
        ctx.set_fill_style(&JsValue::from_str(AXIS_TEXT_COLOR));
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");

        for tick in tick_values(min, max, GRID_INTERVALS) {
            let y = value_to_y(tick, min, max, area);
            ctx.begin_path();
            ctx.move_to(area.left, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
            let _ = ctx.fill_text(&format!("{tick:.2}"), area.left - 8.0, y);
        }
    }

    fn draw_x_labels(&self, ctx: &CanvasRenderingContext2d, area: &PlotArea, labels: &[String]) {
        let positions = x_positions(labels.len(), area);
        let step = label_step(labels.len(), MAX_X_LABELS);

        ctx.set_fill_style(&JsValue::from_str(AXIS_TEXT_COLOR));
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");

        for (label, x) in labels.iter().zip(positions).step_by(step) {
            let _ = ctx.fill_text(label, x, area.bottom() + 8.0);
        }
    }

    fn trace_curve(
        &self,
        ctx: &CanvasRenderingContext2d,
        start: (f64, f64),
        segments: &[CurveSegment],
    ) {
        ctx.move_to(start.0, start.1);
        for segment in segments {
            ctx.bezier_curve_to(
                segment.c1.0,
                segment.c1.1,
                segment.c2.0,
                segment.c2.1,
                segment.end.0,
                segment.end.1,
            );
        }
    }

    fn fill_under_curve(
        &self,
        ctx: &CanvasRenderingContext2d,
        series: &ChartSeries,
        points: &[(f64, f64)],
        segments: &[CurveSegment],
        area: &PlotArea,
    ) {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };

        ctx.begin_path();
        self.trace_curve(ctx, *first, segments);
        ctx.line_to(last.0, area.bottom());
        ctx.line_to(first.0, area.bottom());
        ctx.close_path();
        ctx.set_fill_style(&JsValue::from_str(&series.style.fill_color.to_css()));
        ctx.fill();
    }

    fn stroke_curve(
        &self,
        ctx: &CanvasRenderingContext2d,
        series: &ChartSeries,
        points: &[(f64, f64)],
        segments: &[CurveSegment],
    ) {
        let Some(first) = points.first() else {
            return;
        };

        ctx.begin_path();
        self.trace_curve(ctx, *first, segments);
        ctx.set_stroke_style(&JsValue::from_str(&series.style.color.to_css()));
        ctx.set_line_width(LINE_WIDTH);
        ctx.stroke();
    }

    fn draw_single_point(
        &self,
        ctx: &CanvasRenderingContext2d,
        series: &ChartSeries,
        point: (f64, f64),
    ) {
        ctx.begin_path();
        let _ = ctx.arc(point.0, point.1, 3.0, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style(&JsValue::from_str(&series.style.color.to_css()));
        ctx.fill();
    }
}
