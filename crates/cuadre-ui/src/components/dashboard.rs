//! Role-agnostic landing page: identity summary and granted permissions.

use crate::app::ApiCtx;
use crate::components::guard::SessionCtx;
use cuadre_api_models::PermissionList;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let session = use_context::<SessionCtx>().expect("session context missing");
    let permissions = use_state(|| None as Option<PermissionList>);
    let error = use_state(|| None as Option<String>);

    {
        let api = api.clone();
        let permissions = permissions.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_permissions().await {
                        Ok(list) => permissions.set(Some(list)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
                || ()
            },
            (),
        );
    }

    let identity = &session.identity;
    html! {
        <div class="dashboard">
            <section class="card">
                <h2>{"Bienvenido"}</h2>
                <p>{&identity.email}</p>
                {identity.client.as_ref().map_or_else(Html::default, |client| html! {
                    <p class="muted">{&client.name}</p>
                })}
            </section>
            <section class="card">
                <h3>{"Mis permisos"}</h3>
                {if let Some(err) = &*error {
                    html! { <p class="error-text">{err}</p> }
                } else if let Some(list) = &*permissions {
                    if list.permisos.is_empty() {
                        html! { <p class="muted">{"Sin permisos asignados"}</p> }
                    } else {
                        html! {
                            <ul class="permission-list">
                                {for list.permisos.iter().map(|code| html! { <li>{code}</li> })}
                            </ul>
                        }
                    }
                } else {
                    html! { <p class="muted">{"Cargando…"}</p> }
                }}
            </section>
        </div>
    }
}
