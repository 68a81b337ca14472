//! Session presence state and navigation visibility.

use schoolhub_core::identity::AuthUser;

use crate::routes::Route;

/// Live reflection of session presence for dependent UI.
#[derive(Debug)]
pub struct NavState {
    /// Current user projection; `None` means signed out.
    pub user: Option<AuthUser>,
    /// True until the initial session fetch resolves. While set, the header
    /// renders a neutral loading affordance instead of assuming signed out.
    pub loading: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
}

const PUBLIC_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        route: Route::Home,
    },
    NavEntry {
        label: "View Schools",
        route: Route::Schools,
    },
];

const PROTECTED_ENTRIES: &[NavEntry] = &[NavEntry {
    label: "Add School",
    route: Route::AddSchool,
}];

/// Entries shown for the given session presence.
///
/// Pure function of the current user, recomputed on every change; nothing is
/// cached.
pub fn visible_entries(user: Option<&AuthUser>) -> Vec<NavEntry> {
    let mut entries = PUBLIC_ENTRIES.to_vec();
    if user.is_some() {
        entries.extend_from_slice(PROTECTED_ENTRIES);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_sees_only_public_entries() {
        let entries = visible_entries(None);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.route != Route::AddSchool));
    }

    #[test]
    fn test_signed_in_sees_protected_entries() {
        let user = AuthUser::new("admin@school.com");
        let entries = visible_entries(Some(&user));
        assert!(entries.iter().any(|e| e.route == Route::AddSchool));
    }

    #[test]
    fn test_observer_starts_loading_not_signed_out() {
        let nav = NavState::default();
        assert!(nav.loading);
        assert!(nav.user.is_none());
    }
}
