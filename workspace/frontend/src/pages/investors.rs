use yew::prelude::*;

use crate::components::investors::view::Investors;
use crate::components::layout::layout::Layout;

#[function_component(InvestorsPage)]
pub fn investors_page() -> Html {
    html! {
        <Layout title="Investors">
            <Investors />
        </Layout>
    }
}
