//! Application shell: navigation sidebar, identity header, logout.

use crate::app::{ApiCtx, Route};
use crate::components::guard::SessionCtx;
use crate::services::api::logout;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let session = use_context::<SessionCtx>().expect("session context missing");
    let active = use_route::<Route>().unwrap_or(Route::Dashboard);

    let on_logout = {
        let api = api.clone();
        Callback::from(move |_| {
            let client = api.client.clone();
            yew::platform::spawn_local(async move {
                logout(&client).await;
            });
        })
    };

    let identity = &session.identity;
    let client_badge = identity.client.as_ref().map_or_else(
        || html! { <span class="muted">{"Superadministración"}</span> },
        |client| {
            html! {
                <span class="client-badge">
                    {client.logo_url.as_ref().map_or_else(Html::default, |url| html! {
                        <img src={url.clone()} alt="" class="client-logo" />
                    })}
                    {&client.name}
                </span>
            }
        },
    );

    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="brand">
                    <strong>{"Cuadre"}</strong>
                </div>
                <nav>
                    {nav_item(Route::Dashboard, "Inicio", &active)}
                    {nav_item(Route::Invoices, "Conciliación Siigo", &active)}
                    {if identity.is_superadmin() {
                        html! {
                            <>
                                <span class="nav-section">{"Administración"}</span>
                                {nav_item(Route::AdminClients, "Clientes", &active)}
                                {nav_item(Route::AdminProfiles, "Perfiles", &active)}
                                {nav_item(Route::AdminUsers, "Usuarios", &active)}
                            </>
                        }
                    } else {
                        html! {}
                    }}
                </nav>
            </aside>
            <div class="content">
                <header class="topbar">
                    {client_badge}
                    <span class="user-email">{&identity.email}</span>
                    <button class="ghost" onclick={on_logout}>{"Cerrar sesión"}</button>
                </header>
                <main>{ for props.children.iter() }</main>
            </div>
        </div>
    }
}

fn nav_item(target: Route, label: &str, active: &Route) -> Html {
    let class = if *active == target {
        "nav-link active"
    } else {
        "nav-link"
    };
    html! { <Link<Route> to={target} classes={class}>{label}</Link<Route>> }
}
