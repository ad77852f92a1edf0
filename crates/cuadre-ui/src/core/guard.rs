//! Pure admission decisions for the session guard and role gate.
//!
//! # Design
//! - Decisions are computed from a resolved identity and the current path;
//!   applying them (state update, navigation) is the mounting component's job.
//! - Every post-await application is gated on a [`Liveness`] flag so a stale
//!   resolution racing an unmount is discarded silently.

use cuadre_api_models::Identity;
use std::cell::Cell;
use std::rc::Rc;

/// Login route prefix (public).
pub const LOGIN_PATH: &str = "/login";
/// Role-agnostic authenticated landing route.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Admission state of one guard mount. Transitions at most once per mount,
/// from `Unresolved` to one of the terminal states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStatus {
    /// Identity resolution still in flight; render a neutral placeholder.
    Unresolved,
    /// No usable session, or wrong role for the section.
    Denied,
    /// Session resolved and, where a role check applies, the role matches.
    Admitted,
}

/// Navigation a guard must apply alongside its status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Public login route.
    Login,
    /// Role-agnostic dashboard root.
    Dashboard,
}

impl NavTarget {
    /// Absolute path for this target.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => DASHBOARD_PATH,
        }
    }
}

/// Result of evaluating a guard against a resolved identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardDecision {
    /// Terminal admission state for this mount.
    pub status: GuardStatus,
    /// Redirect to apply, when the current location is not acceptable.
    pub redirect: Option<NavTarget>,
}

/// Whether a path is under the login route.
#[must_use]
pub fn is_login_path(path: &str) -> bool {
    path.starts_with(LOGIN_PATH)
}

/// Session guard decision: admit identities, push the rest to login.
///
/// An admitted session sitting on the login route is bounced to the dashboard;
/// a denied one already on the login route stays put (no redirect loop).
#[must_use]
pub fn evaluate_session(identity: Option<&Identity>, current_path: &str) -> GuardDecision {
    match identity {
        None => GuardDecision {
            status: GuardStatus::Denied,
            redirect: (!is_login_path(current_path)).then_some(NavTarget::Login),
        },
        Some(_) => GuardDecision {
            status: GuardStatus::Admitted,
            redirect: is_login_path(current_path).then_some(NavTarget::Dashboard),
        },
    }
}

/// Role gate decision for a section requiring a specific profile.
///
/// A role mismatch is unauthorized, not unauthenticated: the user keeps the
/// session and lands on the dashboard, never back on login.
#[must_use]
pub fn evaluate_role(identity: Option<&Identity>, required_profile: i64) -> GuardDecision {
    match identity {
        None => GuardDecision {
            status: GuardStatus::Denied,
            redirect: Some(NavTarget::Login),
        },
        Some(identity) if identity.profile_id != required_profile => GuardDecision {
            status: GuardStatus::Denied,
            redirect: Some(NavTarget::Dashboard),
        },
        Some(_) => GuardDecision {
            status: GuardStatus::Admitted,
            redirect: None,
        },
    }
}

/// Cooperative liveness flag for one guard mount.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    /// A live flag for a fresh mount.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Mark the mount as gone; subsequent applications are suppressed.
    pub fn revoke(&self) {
        self.0.set(false);
    }

    /// Whether the mount is still live.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Pass a decision through only while the mount is live.
#[must_use]
pub fn apply_if_live(liveness: &Liveness, decision: GuardDecision) -> Option<GuardDecision> {
    liveness.is_live().then_some(decision)
}

#[cfg(test)]
mod tests {
    use super::{
        GuardDecision, GuardStatus, Liveness, NavTarget, apply_if_live, evaluate_role,
        evaluate_session, is_login_path,
    };
    use cuadre_api_models::Identity;

    fn identity(profile_id: i64) -> Identity {
        Identity {
            user_id: 1,
            client_id: (profile_id != 0).then_some(9),
            profile_id,
            email: "user@cuadre.co".to_string(),
            client: None,
        }
    }

    #[test]
    fn login_path_matches_prefix_only() {
        assert!(is_login_path("/login"));
        assert!(is_login_path("/login?next=/dashboard"));
        assert!(!is_login_path("/dashboard"));
        assert!(!is_login_path("/"));
    }

    #[test]
    fn missing_identity_on_protected_path_redirects_to_login() {
        let decision = evaluate_session(None, "/dashboard/invoices");
        assert_eq!(decision.status, GuardStatus::Denied);
        assert_eq!(decision.redirect, Some(NavTarget::Login));
    }

    #[test]
    fn missing_identity_on_login_stays_put() {
        let decision = evaluate_session(None, "/login");
        assert_eq!(decision.status, GuardStatus::Denied);
        assert_eq!(decision.redirect, None);
    }

    #[test]
    fn resolved_identity_on_login_bounces_to_dashboard() {
        let id = identity(2);
        let decision = evaluate_session(Some(&id), "/login");
        assert_eq!(decision.status, GuardStatus::Admitted);
        assert_eq!(decision.redirect, Some(NavTarget::Dashboard));
    }

    #[test]
    fn resolved_identity_on_protected_path_admits_in_place() {
        let id = identity(2);
        let decision = evaluate_session(Some(&id), "/dashboard");
        assert_eq!(decision.status, GuardStatus::Admitted);
        assert_eq!(decision.redirect, None);
    }

    #[test]
    fn role_gate_admits_matching_profile() {
        let admin = identity(0);
        let decision = evaluate_role(Some(&admin), 0);
        assert_eq!(decision.status, GuardStatus::Admitted);
        assert_eq!(decision.redirect, None);
    }

    #[test]
    fn role_gate_sends_wrong_profile_to_dashboard_not_login() {
        let scoped = identity(1);
        let decision = evaluate_role(Some(&scoped), 0);
        assert_eq!(decision.status, GuardStatus::Denied);
        assert_eq!(decision.redirect, Some(NavTarget::Dashboard));
    }

    #[test]
    fn role_gate_without_identity_goes_to_login() {
        let decision = evaluate_role(None, 0);
        assert_eq!(decision.status, GuardStatus::Denied);
        assert_eq!(decision.redirect, Some(NavTarget::Login));
    }

    #[test]
    fn revoked_liveness_suppresses_application() {
        let decision = GuardDecision {
            status: GuardStatus::Admitted,
            redirect: Some(NavTarget::Dashboard),
        };
        let liveness = Liveness::new();
        assert_eq!(apply_if_live(&liveness, decision), Some(decision));
        liveness.revoke();
        assert_eq!(apply_if_live(&liveness, decision), None);
    }
}
