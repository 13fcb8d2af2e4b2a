use coin_watch_wasm::domain::chart::SeriesFormatter;
use coin_watch_wasm::domain::market_data::{
    Chain, HourlyPricePoint, Price, PriceSeries, Timestamp,
};

fn series(points: &[(u64, f64)]) -> PriceSeries {
    PriceSeries::new(
        points
            .iter()
            .map(|&(hour, price)| {
                HourlyPricePoint::new(Timestamp::from_millis(hour), Price::new(price))
            })
            .collect(),
    )
}

#[test]
fn empty_series_formats_to_empty_chart() {
    let chart = SeriesFormatter::format(&PriceSeries::default(), Chain::Ethereum);
    assert!(chart.is_empty());
    assert_eq!(chart.labels.len(), 0);
    assert_eq!(chart.values.len(), 0);
}

#[test]
fn labels_and_values_match_source_length() {
    let source = series(&[
        (1_704_103_200_000, 2200.5),
        (1_704_106_800_000, 2210.0),
        (1_704_110_400_000, 2195.25),
    ]);
    let chart = SeriesFormatter::format(&source, Chain::Polygon);
    assert_eq!(chart.labels.len(), source.len());
    assert_eq!(chart.values.len(), source.len());
}

#[test]
fn values_pass_through_unchanged_in_order() {
    let source = series(&[
        (1_704_103_200_000, 2200.5),
        (1_704_106_800_000, 2210.0),
        (1_704_110_400_000, 2195.25),
    ]);
    let chart = SeriesFormatter::format(&source, Chain::Ethereum);
    for (i, point) in source.points().iter().enumerate() {
        assert_eq!(chart.values[i], point.average_price.value());
    }
}

#[test]
fn labels_are_utc_hour_clock() {
    let source = series(&[(1_704_103_200_000, 1.0), (1_704_106_800_000, 2.0)]);
    let chart = SeriesFormatter::format(&source, Chain::Ethereum);
    assert_eq!(chart.labels, vec!["10:00".to_string(), "11:00".to_string()]);
}

#[test]
fn chain_styles_use_distinct_colors() {
    let source = series(&[(0, 1.0)]);
    let ethereum = SeriesFormatter::format(&source, Chain::Ethereum);
    let polygon = SeriesFormatter::format(&source, Chain::Polygon);
    assert_ne!(ethereum.style.color, polygon.style.color);
    assert_ne!(ethereum.style.fill_color, polygon.style.fill_color);
}

#[test]
fn style_is_deterministic_per_chain() {
    let source = series(&[(0, 1.0), (3_600_000, 2.0)]);
    let first = SeriesFormatter::format(&source, Chain::Polygon);
    let second = SeriesFormatter::format(&source, Chain::Polygon);
    assert_eq!(first, second);
    assert_eq!(first.style.chain, Chain::Polygon);
}

#[test]
fn style_carries_fixed_tension_and_fill() {
    let chart = SeriesFormatter::format(&PriceSeries::default(), Chain::Ethereum);
    assert_eq!(chart.style.tension, 0.4);
    assert!(chart.style.fill);
    assert_eq!(chart.style.fill_color.a, 0.2);
    assert_eq!(chart.style.color.a, 1.0);
}

#[test]
fn legend_labels_name_the_chain() {
    let source = series(&[(0, 1.0)]);
    let ethereum = SeriesFormatter::format(&source, Chain::Ethereum);
    let polygon = SeriesFormatter::format(&source, Chain::Polygon);
    assert_eq!(ethereum.style.legend_label(), "Ethereum Price (USD)");
    assert_eq!(polygon.style.legend_label(), "Polygon Price (USD)");
}
