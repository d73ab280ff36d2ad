use yew::prelude::*;

use common::{
    asset_class_options, filter_by_asset_class, format_gbp_millions, total_amount, InvestorDetail,
};

use super::filter::AssetClassFilter;
use super::table::CommitmentTable;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub investor: InvestorDetail,
}

/// Commitment breakdown for one investor: asset-class filter, running total
/// and filtered table, all derived synchronously from the fetched snapshot.
/// Changing the filter never issues a request.
#[function_component(CommitmentBreakdown)]
pub fn commitment_breakdown(props: &Props) -> Html {
    // None selects all asset classes.
    let asset_class_filter = use_state(|| None::<String>);

    let commitments = &props.investor.commitments;
    let filtered = filter_by_asset_class(commitments, asset_class_filter.as_deref());
    let total = total_amount(&filtered);
    let options = asset_class_options(commitments);

    let on_filter_change = {
        let asset_class_filter = asset_class_filter.clone();
        Callback::from(move |selection: Option<String>| {
            log::debug!("Asset class filter changed to: {:?}", selection);
            asset_class_filter.set(selection);
        })
    };

    let filter_label = asset_class_filter.as_deref().unwrap_or("All").to_string();

    html! {
        <>
            <h3 class="text-lg font-semibold text-primary mb-2">
                {format!(
                    "Total Commitments for {}: {}",
                    filter_label,
                    format_gbp_millions(total)
                )}
            </h3>

            <AssetClassFilter
                options={options}
                selected={(*asset_class_filter).clone()}
                on_change={on_filter_change}
            />

            <CommitmentTable commitments={filtered} />
        </>
    }
}
