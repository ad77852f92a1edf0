use crate::components::clients::ClientsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::guard::{RoleGate, SessionGuard};
use crate::components::invoices::InvoicesPage;
use crate::components::login::LoginPage;
use crate::components::profiles::ProfilesPage;
use crate::components::shell::AppShell;
use crate::components::users::UsersPage;
use crate::services::storage::{BrowserCredentialStore, api_base_url};
use cuadre_api_models::SUPERADMIN_PROFILE;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;

mod api;
mod routes;

#[function_component(CuadreApp)]
fn cuadre_app() -> Html {
    let api_ctx = use_memo(
        |_| ApiCtx::new(api_base_url(), Rc::new(BrowserCredentialStore)),
        (),
    );

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => guarded(html! { <DashboardPage /> }),
        Route::Invoices => guarded(html! { <InvoicesPage /> }),
        Route::AdminHome => html! { <Redirect<Route> to={Route::AdminClients} /> },
        Route::AdminClients => admin(html! { <ClientsPage /> }),
        Route::AdminProfiles => admin(html! { <ProfilesPage /> }),
        Route::AdminUsers => admin(html! { <UsersPage /> }),
        Route::NotFound => html! {
            <div class="placeholder">
                <h2>{"Página no encontrada"}</h2>
                <p class="muted">{"Use la navegación para volver a una vista disponible."}</p>
            </div>
        },
    }
}

/// Pages requiring an admitted session, rendered inside the shell.
fn guarded(page: Html) -> Html {
    html! {
        <SessionGuard>
            <AppShell>{page}</AppShell>
        </SessionGuard>
    }
}

/// Section-root gate for the superadmin area: session first, then role.
fn admin(page: Html) -> Html {
    html! {
        <SessionGuard>
            <AppShell>
                <RoleGate required_profile={SUPERADMIN_PROFILE}>{page}</RoleGate>
            </AppShell>
        </SessionGuard>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CuadreApp>::with_root(root).render();
    } else {
        yew::Renderer::<CuadreApp>::new().render();
    }
}
