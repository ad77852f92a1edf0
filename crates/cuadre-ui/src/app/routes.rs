//! Routing definitions for the Cuadre UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/invoices")]
    Invoices,
    #[at("/dashboard/admin")]
    AdminHome,
    #[at("/dashboard/admin/clients")]
    AdminClients,
    #[at("/dashboard/admin/profiles")]
    AdminProfiles,
    #[at("/dashboard/admin/users")]
    AdminUsers,
    #[not_found]
    #[at("/404")]
    NotFound,
}
