//! Admin profiles table.

use crate::app::ApiCtx;
use cuadre_api_models::ProfileRecord;
use yew::prelude::*;

#[function_component(ProfilesPage)]
pub(crate) fn profiles_page() -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let profiles = use_state(|| None as Option<Vec<ProfileRecord>>);
    let error = use_state(|| None as Option<String>);

    {
        let api = api.clone();
        let profiles = profiles.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_profiles().await {
                        Ok(rows) => profiles.set(Some(rows)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section class="card">
            <h2>{"Perfiles"}</h2>
            {if let Some(err) = &*error {
                html! { <p class="error-text">{err}</p> }
            } else if let Some(rows) = &*profiles {
                html! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Id"}</th>
                                <th>{"Nombre"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for rows.iter().map(|row| html! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{&row.name}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            } else {
                html! { <p class="muted">{"Cargando…"}</p> }
            }}
        </section>
    }
}
