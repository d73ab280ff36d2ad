use yew::prelude::*;

use common::InvestorSummary;

use super::chart::TotalsChart;
use super::table::InvestorTable;
use crate::api_client::investor::get_investors_with_totals;
use crate::components::common::fetch_hook::use_fetch;
use crate::components::common::fetch_render::FetchRender;

/// Investor summary view: one fetch on mount, then the full collection as a
/// table plus a bar chart. No pagination, sorting, or filtering here.
#[function_component(Investors)]
pub fn investors() -> Html {
    let fetch_state = use_fetch(get_investors_with_totals);

    let render = Callback::from(|investors: Vec<InvestorSummary>| {
        html! {
            <>
                <InvestorTable investors={investors.clone()} />
                <div class="card bg-base-100 shadow mt-6">
                    <div class="card-body">
                        <h3 class="card-title justify-center text-lg">
                            {"Total Commitments Breakdown"}
                        </h3>
                        <TotalsChart investors={investors} />
                    </div>
                </div>
            </>
        }
    });

    html! {
        <FetchRender<Vec<InvestorSummary>>
            state={(*fetch_state).clone()}
            render={render}
            loading_text="Loading investors..."
        />
    }
}
