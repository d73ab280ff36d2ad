use std::future::Future;
use yew::prelude::*;

use crate::components::common::toast::ToastContext;
use crate::hooks::FetchState;

/// Drives a fetch future into a `FetchState` handle, issuing the request
/// once on mount. Failures flip the state to `Error` and raise a toast; a
/// new request only happens when the calling component remounts.
#[hook]
pub fn use_fetch<T, F, Fut>(fetch_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>().expect("ToastContext not found");

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_fn().await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        fetch_state.set(FetchState::Error(err.clone()));
                        toast_ctx.show_error(err);
                    }
                }
            });
            || ()
        });
    }

    fetch_state
}
