//! Login page: stores a pre-issued bearer credential.
//!
//! Token issuance happens outside this application; operators paste the
//! issued token here and the store keeps it under the fixed key.

use crate::app::{ApiCtx, Route};
use crate::components::guard::route_for;
use crate::core::guard::{Liveness, apply_if_live, evaluate_session};
use crate::services::api::resolve_identity;
use crate::services::storage::current_path;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let navigator = use_navigator().expect("navigator missing");
    let token = use_state(String::new);
    let error = use_state(|| None as Option<String>);

    // A visit with a still-valid session bounces straight to the dashboard.
    {
        let api = api.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |_| {
                let liveness = Liveness::new();
                let on_unmount = liveness.clone();
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    let resolved = resolve_identity(&client).await;
                    let decision = evaluate_session(resolved.as_ref(), &current_path());
                    if let Some(decision) = apply_if_live(&liveness, decision) {
                        if let Some(target) = decision.redirect {
                            navigator.push(&route_for(target));
                        }
                    }
                });
                move || on_unmount.revoke()
            },
            (),
        );
    }

    let on_input = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                token.set(input.value());
            }
        })
    };

    let on_submit = {
        let api = api.clone();
        let navigator = navigator.clone();
        let token = token.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = token.trim().to_string();
            if value.is_empty() {
                error.set(Some("Ingrese el token de acceso".to_string()));
                return;
            }
            api.client.store().set(&value);
            error.set(None);
            navigator.push(&Route::Dashboard);
        })
    };

    html! {
        <div class="login-screen">
            <form class="card" onsubmit={on_submit}>
                <header>
                    <h2>{"Cuadre"}</h2>
                    <p class="muted">{"Back-office contable"}</p>
                </header>
                <label class="stack">
                    <span>{"Token de acceso"}</span>
                    <input
                        type="password"
                        placeholder="Pegue aquí su token"
                        value={(*token).clone()}
                        oninput={on_input}
                    />
                </label>
                {if let Some(err) = &*error {
                    html! { <p class="error-text">{err}</p> }
                } else {
                    html! {}
                }}
                <div class="actions">
                    <button type="submit" class="solid">{"Ingresar"}</button>
                </div>
            </form>
        </div>
    }
}
