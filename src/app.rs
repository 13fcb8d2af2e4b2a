use leptos::html::Canvas;
use leptos::*;

use crate::domain::chart::{ChartSeries, SeriesFormatter};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::Chain;
use crate::domain::state::DashboardState;
use crate::infrastructure::http::PriceApiClient;
use crate::infrastructure::rendering::LineChartRenderer;

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 400;

/// Root component of the Coin Watch dashboard.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .coin-watch-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                min-height: 100vh;
                padding: 20px;
                background: #f5f6fa;
                color: #2c3e50;
                text-align: center;
            }

            .coin-watch-app h1 {
                margin-bottom: 24px;
            }

            .charts-container {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 24px;
            }

            .chart-wrapper {
                width: 45%;
                min-width: 380px;
                background: #ffffff;
                border-radius: 10px;
                padding: 12px;
                box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
            }

            .chart-wrapper canvas {
                width: 100%;
                height: auto;
            }

            .loading {
                font-size: 18px;
                color: #555555;
            }
            "#}
        </style>
        <div class="coin-watch-app">
            <h1>"Coin Watch 🫅⏳"</h1>
            <ChartsSection />
        </div>
    }
}

/// The two price charts, gated on both chains having loaded.
#[component]
fn ChartsSection() -> impl IntoView {
    let dashboard = create_rw_signal(DashboardState::<ChartSeries>::new());
    let ethereum_canvas = create_node_ref::<Canvas>();
    let polygon_canvas = create_node_ref::<Canvas>();

    // Both fetches go out back-to-back on mount; completions may land in
    // either order and each resolves its own slot independently.
    let client = PriceApiClient::default();
    for chain in Chain::ALL {
        spawn_local(load_chain(client.clone(), chain, dashboard));
    }

    let ready = create_memo(move |_| dashboard.with(|state| state.is_ready()));

    // Repaint once both series are loaded and the canvases are mounted.
    create_effect(move |_| {
        let charts = dashboard.with(|state| {
            match (state.ethereum.loaded(), state.polygon.loaded()) {
                (Some(ethereum), Some(polygon)) => Some((ethereum.clone(), polygon.clone())),
                _ => None,
            }
        });
        let Some((ethereum, polygon)) = charts else {
            return;
        };
        let (Some(ethereum_el), Some(polygon_el)) = (ethereum_canvas.get(), polygon_canvas.get())
        else {
            return;
        };

        let renderer = LineChartRenderer::new(CHART_WIDTH, CHART_HEIGHT);
        for (chain, chart, canvas) in [
            (Chain::Ethereum, ethereum, ethereum_el),
            (Chain::Polygon, polygon, polygon_el),
        ] {
            let title = format!("{} Price (Last 24 Hours)", chain.title());
            if let Err(err) = renderer.render(&canvas, &chart, &title) {
                get_logger().error(
                    LogComponent::Presentation("ChartsSection"),
                    &format!("failed to draw {chain} chart: {err}"),
                );
            }
        }
    });

    view! {
        <div class="charts-container">
            <Show
                when=move || ready.get()
                fallback=|| view! { <p class="loading">"Loading data..."</p> }
            >
                <div class="chart-wrapper">
                    <canvas node_ref=ethereum_canvas width="800" height="400" />
                </div>
                <div class="chart-wrapper">
                    <canvas node_ref=polygon_canvas width="800" height="400" />
                </div>
            </Show>
        </div>
    }
}

/// Fetch one chain's series, format it and deliver the completion into the
/// shared sink. A failure is logged and swallowed; the slot goes `Failed`
/// and the view simply never leaves the loading placeholder. Completions
/// arriving after the owning view was disposed are dropped by `try_update`.
async fn load_chain(
    client: PriceApiClient,
    chain: Chain,
    dashboard: RwSignal<DashboardState<ChartSeries>>,
) {
    let outcome = match client.fetch_hourly_prices(chain).await {
        Ok(series) => Ok(SeriesFormatter::format(&series, chain)),
        Err(err) => {
            get_logger().error(
                LogComponent::Presentation("Dashboard"),
                &format!("Error fetching {chain} data from the backend: {err}"),
            );
            Err(err)
        }
    };

    if dashboard.try_update(|state| state.apply(chain, outcome)).is_none() {
        get_logger().debug(
            LogComponent::Presentation("Dashboard"),
            &format!("view disposed before the {chain} fetch completed"),
        );
    }
}
