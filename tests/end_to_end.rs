use coin_watch_wasm::domain::chart::{ChartSeries, SeriesFormatter};
use coin_watch_wasm::domain::errors::FetchError;
use coin_watch_wasm::domain::market_data::{Chain, PriceSeries};
use coin_watch_wasm::domain::state::DashboardState;

const ETHEREUM_PAYLOAD: &str = r#"[
    {"hour":"2024-01-01T10:00:00Z","average_price":2200.5},
    {"hour":"2024-01-01T11:00:00Z","average_price":2210.0}
]"#;

const POLYGON_PAYLOAD: &str = r#"[
    {"hour":"2024-01-01T10:00:00Z","average_price":0.78},
    {"hour":"2024-01-01T11:00:00Z","average_price":0.79}
]"#;

fn formatted(payload: &str, chain: Chain) -> ChartSeries {
    let series: PriceSeries = serde_json::from_str(payload).unwrap();
    SeriesFormatter::format(&series, chain)
}

#[test]
fn both_responses_take_the_view_to_ready() {
    let mut dashboard = DashboardState::new();

    dashboard.apply(Chain::Ethereum, Ok(formatted(ETHEREUM_PAYLOAD, Chain::Ethereum)));
    assert!(!dashboard.is_ready());

    dashboard.apply(Chain::Polygon, Ok(formatted(POLYGON_PAYLOAD, Chain::Polygon)));
    assert!(dashboard.is_ready());

    let ethereum = dashboard.ethereum.loaded().unwrap();
    assert_eq!(ethereum.values, vec![2200.5, 2210.0]);
    assert_eq!(ethereum.labels, vec!["10:00".to_string(), "11:00".to_string()]);
}

#[test]
fn one_failed_chain_keeps_the_view_loading_forever() {
    let mut dashboard = DashboardState::new();

    dashboard.apply(Chain::Ethereum, Ok(formatted(ETHEREUM_PAYLOAD, Chain::Ethereum)));
    dashboard.apply(Chain::Polygon, Err(FetchError::Status(502)));

    assert!(!dashboard.is_ready());
    assert!(dashboard.polygon.is_failed());
    // The successful chain's data is intact, it just never gets shown.
    assert_eq!(dashboard.ethereum.loaded().unwrap().values, vec![2200.5, 2210.0]);
}
