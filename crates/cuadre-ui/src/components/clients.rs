//! Admin clients table.

use crate::app::ApiCtx;
use cuadre_api_models::ClientRecord;
use yew::prelude::*;

#[function_component(ClientsPage)]
pub(crate) fn clients_page() -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let clients = use_state(|| None as Option<Vec<ClientRecord>>);
    let error = use_state(|| None as Option<String>);

    {
        let api = api.clone();
        let clients = clients.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_clients().await {
                        Ok(rows) => clients.set(Some(rows)),
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
            <h2>{"Clientes"}</h2>
            {if let Some(err) = &*error {
                html! { <p class="error-text">{err}</p> }
            } else if let Some(rows) = &*clients {
                if rows.is_empty() {
                    html! { <p class="muted">{"Sin clientes registrados"}</p> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Nombre"}</th>
                                    <th>{"NIT"}</th>
                                    <th>{"Estado"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for rows.iter().map(|row| html! {
                                    <tr>
                                        <td>{&row.name}</td>
                                        <td>{row.nit.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td>{if row.active { "Activo" } else { "Inactivo" }}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    }
                }
            } else {
                html! { <p class="muted">{"Cargando…"}</p> }
            }}
        </section>
    }
}
