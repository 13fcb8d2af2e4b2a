#![cfg(target_arch = "wasm32")]

use coin_watch_wasm::domain::chart::SeriesFormatter;
use coin_watch_wasm::domain::market_data::{
    Chain, HourlyPricePoint, Price, PriceSeries, Timestamp,
};
use coin_watch_wasm::infrastructure::rendering::LineChartRenderer;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn test_canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document.create_element("canvas").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas.dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn renders_a_small_series() {
    let series = PriceSeries::new(vec![
        HourlyPricePoint::new(Timestamp::from_millis(0), Price::new(10.0)),
        HourlyPricePoint::new(Timestamp::from_millis(3_600_000), Price::new(12.0)),
        HourlyPricePoint::new(Timestamp::from_millis(7_200_000), Price::new(11.0)),
    ]);
    let chart = SeriesFormatter::format(&series, Chain::Ethereum);

    let canvas = test_canvas();
    let renderer = LineChartRenderer::new(800, 400);
    renderer.render(&canvas, &chart, "Ethereum Price (Last 24 Hours)").unwrap();
    assert_eq!(canvas.width(), 800);
    assert_eq!(canvas.height(), 400);
}

#[wasm_bindgen_test]
fn renders_an_empty_series_without_error() {
    let chart = SeriesFormatter::format(&PriceSeries::default(), Chain::Polygon);
    let canvas = test_canvas();
    let renderer = LineChartRenderer::new(800, 400);
    renderer.render(&canvas, &chart, "Polygon (MATIC) Price (Last 24 Hours)").unwrap();
}
