use super::entities::ChartSeries;
use super::value_objects::SeriesStyle;
use crate::domain::market_data::{Chain, PriceSeries};
use crate::time_utils::format_time_label;

/// Domain service - turns a raw hourly price series into its display form.
pub struct SeriesFormatter;

impl SeriesFormatter {
    /// Pure, synchronous and total: an empty series yields an empty chart,
    /// prices pass through unchanged, order is preserved element-for-element.
    pub fn format(series: &PriceSeries, chain: Chain) -> ChartSeries {
        let labels =
            series.points().iter().map(|point| format_time_label(point.hour.value())).collect();
        let values = series.points().iter().map(|point| point.average_price.value()).collect();

        ChartSeries { labels, values, style: SeriesStyle::for_chain(chain) }
    }
}
