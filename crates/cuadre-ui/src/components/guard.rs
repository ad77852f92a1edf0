//! Session guard and role gate components.
//!
//! # Design
//! - Both guards apply pure decisions from [`crate::core::guard`]; the
//!   components only own the async plumbing and the router push.
//! - A liveness flag revoked on cleanup discards resolutions racing an
//!   unmount or a route change.
//! - Guarded children never render before admission; role checks here are
//!   navigation hygiene, the backend enforces authorization on every call.

use crate::app::{ApiCtx, Route};
use crate::core::guard::{
    GuardStatus, Liveness, NavTarget, apply_if_live, evaluate_role, evaluate_session,
};
use crate::services::api::resolve_identity;
use crate::services::storage::current_path;
use cuadre_api_models::Identity;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Resolved identity provided to the guarded subtree.
#[derive(Clone, PartialEq)]
pub(crate) struct SessionCtx {
    /// Identity resolved by the enclosing [`SessionGuard`].
    pub identity: Rc<Identity>,
}

/// Router route for a guard navigation target.
pub(crate) fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Login => Route::Login,
        NavTarget::Dashboard => Route::Dashboard,
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SessionGuardProps {
    pub children: Children,
}

/// Admits, redirects, or blocks a subtree based on the resolved session.
///
/// Re-evaluates whenever the active route changes, not only on first mount.
#[function_component(SessionGuard)]
pub(crate) fn session_guard(props: &SessionGuardProps) -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let navigator = use_navigator().expect("navigator missing");
    let route = use_route::<Route>();
    let status = use_state(|| GuardStatus::Unresolved);
    let identity = use_state(|| None as Option<Rc<Identity>>);

    {
        let api = api.clone();
        let status = status.clone();
        let identity = identity.clone();
        use_effect_with_deps(
            move |_route| {
                status.set(GuardStatus::Unresolved);
                identity.set(None);
                let liveness = Liveness::new();
                let on_unmount = liveness.clone();
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    let resolved = resolve_identity(&client).await;
                    let decision = evaluate_session(resolved.as_ref(), &current_path());
                    let Some(decision) = apply_if_live(&liveness, decision) else {
                        return;
                    };
                    identity.set(resolved.map(Rc::new));
                    status.set(decision.status);
                    if let Some(target) = decision.redirect {
                        navigator.push(&route_for(target));
                    }
                });
                move || on_unmount.revoke()
            },
            route,
        );
    }

    match (*status, (*identity).clone()) {
        (GuardStatus::Admitted, Some(identity)) => html! {
            <ContextProvider<SessionCtx> context={SessionCtx { identity }}>
                { for props.children.iter() }
            </ContextProvider<SessionCtx>>
        },
        (GuardStatus::Unresolved, _) => html! { <GuardPending /> },
        _ => Html::default(),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RoleGateProps {
    /// Profile identifier the section requires (0 for superadmin).
    pub required_profile: i64,
    pub children: Children,
}

/// Section-root gate checking the session's profile against a required role.
///
/// A role mismatch keeps the session and lands on the dashboard; only a
/// missing session goes back to login.
#[function_component(RoleGate)]
pub(crate) fn role_gate(props: &RoleGateProps) -> Html {
    let api = use_context::<ApiCtx>().expect("ApiCtx context missing");
    let navigator = use_navigator().expect("navigator missing");
    let status = use_state(|| GuardStatus::Unresolved);

    {
        let api = api.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |required_profile: &i64| {
                let required_profile = *required_profile;
                status.set(GuardStatus::Unresolved);
                let liveness = Liveness::new();
                let on_unmount = liveness.clone();
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    let resolved = resolve_identity(&client).await;
                    let decision = evaluate_role(resolved.as_ref(), required_profile);
                    let Some(decision) = apply_if_live(&liveness, decision) else {
                        return;
                    };
                    status.set(decision.status);
                    if let Some(target) = decision.redirect {
                        navigator.push(&route_for(target));
                    }
                });
                move || on_unmount.revoke()
            },
            props.required_profile,
        );
    }

    match *status {
        GuardStatus::Admitted => html! { <>{ for props.children.iter() }</> },
        GuardStatus::Unresolved => html! { <GuardPending /> },
        GuardStatus::Denied => Html::default(),
    }
}

/// Neutral placeholder shown while a guard resolves.
#[function_component(GuardPending)]
fn guard_pending() -> Html {
    html! {
        <div class="guard-pending" role="status">
            <span class="spinner" aria-hidden="true"></span>
            <p class="muted">{"Verificando sesión…"}</p>
        </div>
    }
}
