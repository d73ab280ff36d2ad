use plotly::{Bar, Layout};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use common::{totals_series, InvestorSummary};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub investors: Vec<InvestorSummary>,
}

/// Bar chart of total commitments keyed by investor name, redrawn whenever
/// the summary snapshot changes.
#[function_component(TotalsChart)]
pub fn totals_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let investors = props.investors.clone();

    use_effect_with(
        (container_ref.clone(), investors),
        move |(container_ref, investors)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("chart-commitment-totals");

                let (names, totals) = totals_series(investors);

                let trace = Bar::new(names, totals)
                    .name("Total Commitments (GBP)")
                    .marker(plotly::common::Marker::new().color("rgba(75, 192, 192, 0.6)"));

                let layout = Layout::new()
                    .x_axis(
                        plotly::layout::Axis::new()
                            .title(plotly::common::Title::with_text("Investor")),
                    )
                    .y_axis(
                        plotly::layout::Axis::new()
                            .title(plotly::common::Title::with_text("Committed (GBP)")),
                    )
                    .height(400);

                // Serialize trace to JSON and parse as JS object
                let trace_json = serde_json::to_string(&trace).unwrap();
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();

                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot("chart-commitment-totals", data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
