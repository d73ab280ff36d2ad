use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Distinct asset classes in first-seen order; "All" is prepended here.
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub on_change: Callback<Option<String>>,
}

#[function_component(AssetClassFilter)]
pub fn asset_class_filter(props: &Props) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                if value.is_empty() {
                    on_change.emit(None);
                } else {
                    on_change.emit(Some(value));
                }
            }
        })
    };

    html! {
        <div class="form-control w-full max-w-xs mb-4">
            <label class="label">
                <span class="label-text">{"Filter by Asset Class"}</span>
            </label>
            <select
                class="select select-bordered select-sm"
                onchange={on_change}
            >
                <option value="" selected={props.selected.is_none()}>{"All"}</option>
                {for props.options.iter().map(|asset_class| {
                    let is_selected = props.selected.as_deref() == Some(asset_class.as_str());
                    html! {
                        <option value={asset_class.clone()} selected={is_selected}>
                            {asset_class}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
