use coin_watch_wasm::domain::market_data::{HourlyPricePoint, Price, PriceSeries, Timestamp};

fn point(hour: u64, price: f64) -> HourlyPricePoint {
    HourlyPricePoint::new(Timestamp::from_millis(hour), Price::new(price))
}

#[test]
fn empty_series_has_no_range_or_latest() {
    let series = PriceSeries::default();
    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert!(series.latest().is_none());
    assert!(series.price_range().is_none());
}

#[test]
fn latest_is_the_last_received_point() {
    let series = PriceSeries::new(vec![point(0, 10.0), point(3_600_000, 11.5)]);
    assert_eq!(series.latest().unwrap().average_price.value(), 11.5);
}

#[test]
fn price_range_spans_min_and_max() {
    let series =
        PriceSeries::new(vec![point(0, 10.0), point(1, 8.25), point(2, 12.5), point(3, 9.0)]);
    let (min, max) = series.price_range().unwrap();
    assert_eq!(min.value(), 8.25);
    assert_eq!(max.value(), 12.5);
}

#[test]
fn points_are_kept_exactly_as_received() {
    // Out-of-order input stays out of order: the client never sorts.
    let series = PriceSeries::new(vec![point(3_600_000, 2.0), point(0, 1.0)]);
    let hours: Vec<u64> = series.points().iter().map(|p| p.hour.value()).collect();
    assert_eq!(hours, vec![3_600_000, 0]);
}
