//! Admin users table with a minimal invite form.

use crate::app::ApiCtx;
use cuadre_api_models::{NewUser, UserRecord};
use yew::prelude::*;

#[function_component(UsersPage)]
pub(crate) fn users_page() -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let users = use_state(|| None as Option<Vec<UserRecord>>);
    let error = use_state(|| None as Option<String>);
    let email = use_state(String::new);
    let profile_id = use_state(|| 1_i64);
    let busy = use_state(|| false);

    {
        let api = api.clone();
        let users = users.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_users().await {
                        Ok(rows) => users.set(Some(rows)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_profile = {
        let profile_id = profile_id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                if let Ok(value) = input.value().parse::<i64>() {
                    profile_id.set(value);
                }
            }
        })
    };

    let on_submit = {
        let api = api.clone();
        let users = users.clone();
        let error = error.clone();
        let email = email.clone();
        let profile_id = profile_id.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = email.trim().to_string();
            if address.is_empty() {
                error.set(Some("Ingrese el correo del usuario".to_string()));
                return;
            }
            let payload = NewUser {
                email: address,
                profile_id: *profile_id,
                client_id: None,
            };
            let client = api.client.clone();
            let users = users.clone();
            let error = error.clone();
            let email = email.clone();
            let busy = busy.clone();
            busy.set(true);
            yew::platform::spawn_local(async move {
                match client.create_user(&payload).await {
                    Ok(created) => {
                        let mut rows = (*users).clone().unwrap_or_default();
                        rows.push(created);
                        users.set(Some(rows));
                        email.set(String::new());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="users">
            <section class="card">
                <h2>{"Usuarios"}</h2>
                {if let Some(err) = &*error {
                    html! { <p class="error-text">{err}</p> }
                } else {
                    html! {}
                }}
                {if let Some(rows) = &*users {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Correo"}</th>
                                    <th>{"Perfil"}</th>
                                    <th>{"Cliente"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for rows.iter().map(|row| html! {
                                    <tr>
                                        <td>{&row.email}</td>
                                        <td>{row.profile_id}</td>
                                        <td>{row.client_id.map_or_else(|| "—".to_string(), |id| id.to_string())}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    }
                } else {
                    html! { <p class="muted">{"Cargando…"}</p> }
                }}
            </section>
            <section class="card">
                <h3>{"Invitar usuario"}</h3>
                <form class="stack" onsubmit={on_submit}>
                    <label class="stack">
                        <span>{"Correo"}</span>
                        <input type="email" value={(*email).clone()} oninput={on_email} />
                    </label>
                    <label class="stack">
                        <span>{"Perfil"}</span>
                        <input type="number" min="0" value={profile_id.to_string()} oninput={on_profile} />
                    </label>
                    <div class="actions">
                        <button type="submit" class="solid" disabled={*busy}>{"Crear"}</button>
                    </div>
                </form>
            </section>
        </div>
    }
}
