use yew::prelude::*;

use common::{format_gbp_millions, Commitment};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub commitments: Vec<Commitment>,
}

#[function_component(CommitmentTable)]
pub fn commitment_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Asset Class"}</th>
                        <th>{"Currency"}</th>
                        <th>{"Amount (GBP)"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.commitments.iter().map(|commitment| {
                        html! {
                            <tr class="hover">
                                <td>{commitment.id}</td>
                                <td>{&commitment.asset_class}</td>
                                <td>{&commitment.currency}</td>
                                <td class="font-mono">
                                    {format_gbp_millions(commitment.amount)}
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
