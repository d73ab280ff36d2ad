use yew::prelude::*;
use yew_router::prelude::*;

use common::InvestorDetail;

use crate::api_client::investor::get_investor;
use crate::components::commitments::view::CommitmentBreakdown;
use crate::components::common::loading::Loading;
use crate::components::layout::layout::Layout;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i32,
}

/// Investor detail page. Fetches once per route id; a failed fetch is
/// logged and the placeholder stays up. Responses apply in arrival order
/// with no guard against a stale one landing last.
#[function_component(InvestorDetailPage)]
pub fn investor_detail_page(props: &Props) -> Html {
    let investor = use_state(|| None::<InvestorDetail>);

    {
        let investor = investor.clone();
        use_effect_with(props.id, move |&id| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_investor(id).await {
                    Ok(data) => investor.set(Some(data)),
                    Err(e) => log::error!("Error fetching investor details: {}", e),
                }
            });
            || ()
        });
    }

    html! {
        <Layout title="Investor Commitments">
            {match (*investor).clone() {
                None => html! { <Loading text="Loading investor details..." /> },
                Some(investor) => html! {
                    <>
                        <div class="flex justify-between items-center mb-4">
                            <h2 class="text-2xl font-bold">
                                {format!("{} - Commitments", investor.name)}
                            </h2>
                            <Link<Route> to={Route::Investors} classes="btn btn-primary btn-sm">
                                {"Back to Investors List"}
                            </Link<Route>>
                        </div>
                        <CommitmentBreakdown investor={investor} />
                    </>
                },
            }}
        </Layout>
    }
}
