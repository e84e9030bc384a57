//! Navigation gating.
//!
//! [`guard`] is a pure function of the required role set and the current
//! session. [`RouteAuthorization`] resolves the required set for a path from
//! a static prefix table and then applies it.
//!
//! # Example
//!
//! ```ignore
//! use fournil_auth::{GuardDecision, RouteAuthorization, SessionStore};
//!
//! let routes = RouteAuthorization::default();
//! let store = SessionStore::new();
//!
//! assert_eq!(
//!     routes.authorize("/boulanger/commandes", &store.current()),
//!     GuardDecision::RedirectToLogin,
//! );
//! ```

use fournil_core::{LOGIN_PATH, Role};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToRoleHome(&'static str),
}

impl GuardDecision {
    /// Where the navigation is sent instead, if anywhere.
    pub fn location(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectToRoleHome(path) => Some(*path),
        }
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            GuardDecision::Allow => "allow",
            GuardDecision::RedirectToLogin => "redirect_to_login",
            GuardDecision::RedirectToRoleHome(_) => "redirect_to_role_home",
        }
    }
}

/// Decides a navigation. An empty `required` set admits any signed-in user.
pub fn guard(required: &[Role], session: &Session) -> GuardDecision {
    let Some(role) = session.role() else {
        return GuardDecision::RedirectToLogin;
    };

    if required.is_empty() {
        return GuardDecision::Allow;
    }

    match role.known() {
        Some(known) if required.contains(&known) => GuardDecision::Allow,
        _ => GuardDecision::RedirectToRoleHome(role.home_path()),
    }
}

/// A path prefix and the roles admitted under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub prefix: &'static str,
    pub roles: &'static [Role],
}

impl RouteRule {
    pub const fn new(prefix: &'static str, roles: &'static [Role]) -> Self {
        Self { prefix, roles }
    }

    /// Prefix match on whole segments: `/boulanger` covers
    /// `/boulanger/commandes` but not `/boulangerie`.
    fn matches(&self, path: &str) -> bool {
        let prefix = self.prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return true;
        }
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

const ROLE_RULES: [RouteRule; 5] = [
    RouteRule::new("/boulanger", &[Role::Boulanger]),
    RouteRule::new("/commercial", &[Role::Commercial]),
    RouteRule::new("/approvisionnement", &[Role::Approvisionnement]),
    RouteRule::new("/preparation", &[Role::Preparation]),
    RouteRule::new("/maintenance", &[Role::Maintenance]),
];

/// Static prefix table. Paths no rule matches are public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteAuthorization {
    rules: Vec<RouteRule>,
}

impl Default for RouteAuthorization {
    /// One rule per role segment, plus the generic pages open to any
    /// signed-in user.
    fn default() -> Self {
        let mut rules = ROLE_RULES.to_vec();
        rules.push(RouteRule::new("/dashboard", &[]));
        rules.push(RouteRule::new("/profile", &[]));
        Self::new(rules)
    }
}

impl RouteAuthorization {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// The most specific rule covering `path`.
    pub fn rule_for(&self, path: &str) -> Option<&RouteRule> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(path))
            .max_by_key(|rule| rule.prefix.trim_end_matches('/').len())
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.rule_for(path).is_some()
    }

    pub fn authorize(&self, path: &str, session: &Session) -> GuardDecision {
        match self.rule_for(path) {
            Some(rule) => guard(rule.roles, session),
            None => GuardDecision::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{LoginData, User};
    use fournil_core::HOME_PATH;

    fn session_as(role: &str) -> Session {
        Session::signed_in(User::from_login(LoginData {
            email: Some("a@b.fr".to_string()),
            role: Some(role.to_string()),
            ..LoginData::default()
        }))
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let anonymous = Session::anonymous();
        assert_eq!(guard(&[], &anonymous), GuardDecision::RedirectToLogin);
        assert_eq!(
            guard(&[Role::Boulanger], &anonymous),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_empty_required_set_admits_any_user() {
        assert_eq!(guard(&[], &session_as("maintenance")), GuardDecision::Allow);
        assert_eq!(guard(&[], &session_as("meunier")), GuardDecision::Allow);
    }

    #[test]
    fn test_member_role_is_allowed() {
        let session = session_as("commercial");
        assert_eq!(
            guard(&[Role::Boulanger, Role::Commercial], &session),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_non_member_is_sent_home() {
        let decision = guard(&[Role::Boulanger], &session_as("commercial"));
        assert_eq!(
            decision,
            GuardDecision::RedirectToRoleHome("/commercial/dashboard")
        );
        assert_eq!(decision.location(), Some("/commercial/dashboard"));
    }

    #[test]
    fn test_unrecognized_role_is_sent_to_home_route() {
        let decision = guard(&[Role::Maintenance], &session_as("meunier"));
        assert_eq!(decision, GuardDecision::RedirectToRoleHome(HOME_PATH));
    }

    #[test]
    fn test_restricted_path_never_redirects_to_itself() {
        let routes = RouteAuthorization::default();
        for role in Role::ALL {
            let session = session_as(role.segment());
            for other in Role::ALL.into_iter().filter(|r| *r != role) {
                let path = format!("/{}/commandes", other.segment());
                let decision = routes.authorize(&path, &session);
                assert_eq!(decision, GuardDecision::RedirectToRoleHome(role.home_path()));
                assert_ne!(decision.location(), Some(path.as_str()));
            }
        }
    }

    #[test]
    fn test_protected_paths_require_login() {
        let routes = RouteAuthorization::default();
        let anonymous = Session::anonymous();
        for path in [
            "/boulanger/dashboard",
            "/commercial/clients",
            "/approvisionnement",
            "/preparation/expeditions",
            "/maintenance/interventions",
            "/dashboard",
            "/profile",
        ] {
            assert_eq!(
                routes.authorize(path, &anonymous),
                GuardDecision::RedirectToLogin,
                "{path}"
            );
        }
    }

    #[test]
    fn test_public_paths_are_allowed() {
        let routes = RouteAuthorization::default();
        let anonymous = Session::anonymous();
        assert_eq!(routes.authorize("/", &anonymous), GuardDecision::Allow);
        assert_eq!(routes.authorize("/login", &anonymous), GuardDecision::Allow);
        assert!(!routes.is_protected("/boulangerie"));
    }

    #[test]
    fn test_longest_prefix_wins() {
        let routes = RouteAuthorization::new(vec![
            RouteRule::new("/commercial", &[Role::Commercial]),
            RouteRule::new("/commercial/catalogue", &[Role::Commercial, Role::Boulanger]),
        ]);
        let baker = session_as("boulanger");
        assert_eq!(
            routes.authorize("/commercial/catalogue/farines", &baker),
            GuardDecision::Allow
        );
        assert_eq!(
            routes.authorize("/commercial/clients", &baker),
            GuardDecision::RedirectToRoleHome("/boulanger/dashboard")
        );
    }
}
