use yew::prelude::*;
use yew_router::prelude::*;

use common::{format_gbp_auto, InvestorSummary};

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub investors: Vec<InvestorSummary>,
}

#[function_component(InvestorTable)]
pub fn investor_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Name"}</th>
                        <th>{"Type"}</th>
                        <th>{"Country"}</th>
                        <th>{"Date Added"}</th>
                        <th>{"Total Commitments"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.investors.iter().map(|investor| {
                        html! {
                            <tr class="hover">
                                <td>{investor.id}</td>
                                <td class="font-medium">
                                    <Link<Route>
                                        to={Route::InvestorDetail { id: investor.id }}
                                        classes="link link-hover"
                                    >
                                        {&investor.name}
                                    </Link<Route>>
                                </td>
                                <td>{&investor.investor_type}</td>
                                <td>{&investor.country}</td>
                                <td class="whitespace-nowrap">{investor.date_added.to_string()}</td>
                                <td>
                                    <span class="badge badge-primary">
                                        {format_gbp_auto(investor.total_commitments_gbp)}
                                    </span>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
