//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` mounts these routes with `leptos_router`; this module keeps the same
//! table in plain data so the guard and the tutorial engine can resolve a
//! pathname to a route name without a reactive runtime.
//!
//! DESIGN
//! ======
//! Paths are matched in declared order and the first match wins. The guard is
//! the only cross-cutting rule: everything except the login route requires a
//! session. Role checks live on the backend.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::BTreeMap;

use crate::state::auth::Session;

/// Unique name for every navigable route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    CourseDetail,
    CourseEditor,
    UserDashboard,
    TeacherDashboard,
    AdminDashboard,
    Profile,
    ProfileView,
    LoginRegister,
}

/// Declared route table, in matching order.
pub const ROUTES: [RouteName; 9] = [
    RouteName::Home,
    RouteName::CourseDetail,
    RouteName::CourseEditor,
    RouteName::UserDashboard,
    RouteName::TeacherDashboard,
    RouteName::AdminDashboard,
    RouteName::Profile,
    RouteName::ProfileView,
    RouteName::LoginRegister,
];

impl RouteName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::Home => "Home",
            RouteName::CourseDetail => "CourseDetail",
            RouteName::CourseEditor => "CourseEditor",
            RouteName::UserDashboard => "UserDashboard",
            RouteName::TeacherDashboard => "TeacherDashboard",
            RouteName::AdminDashboard => "AdminDashboard",
            RouteName::Profile => "Profile",
            RouteName::ProfileView => "ProfileView",
            RouteName::LoginRegister => "LoginRegister",
        }
    }

    /// Path pattern; `:name` segments capture a parameter.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            RouteName::Home => "/",
            RouteName::CourseDetail => "/course/:courseId",
            RouteName::CourseEditor => "/editor",
            RouteName::UserDashboard => "/dashboard/user",
            RouteName::TeacherDashboard => "/dashboard/teacher",
            RouteName::AdminDashboard => "/dashboard/admin",
            RouteName::Profile => "/profile",
            RouteName::ProfileView => "/profile/:userId",
            RouteName::LoginRegister => "/login",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ROUTES.into_iter().find(|r| r.as_str() == name)
    }

    /// Whether navigation to this route needs a session.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        self != RouteName::LoginRegister
    }
}

/// A resolved pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: RouteName,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn match_pattern(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
    let pattern: Vec<&str> = segments(pattern).collect();
    let actual: Vec<&str> = segments(path).collect();
    if pattern.len() != actual.len() {
        return None;
    }
    let mut params = BTreeMap::new();
    for (expected, got) in pattern.iter().zip(&actual) {
        if let Some(key) = expected.strip_prefix(':') {
            params.insert(key.to_owned(), (*got).to_owned());
        } else if expected != got {
            return None;
        }
    }
    Some(params)
}

/// Resolve a pathname (query and fragment ignored) against [`ROUTES`].
#[must_use]
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    ROUTES.into_iter().find_map(|name| {
        match_pattern(name.path(), path).map(|params| RouteMatch { name, params })
    })
}

/// Fill a route's path pattern with `params`. Missing params are left as-is.
#[must_use]
pub fn href(name: RouteName, params: &[(&str, &str)]) -> String {
    let filled: Vec<String> = segments(name.path())
        .map(|seg| {
            seg.strip_prefix(':')
                .and_then(|key| params.iter().find(|(k, _)| *k == key))
                .map_or_else(|| seg.to_owned(), |(_, v)| (*v).to_owned())
        })
        .collect();
    format!("/{}", filled.join("/"))
}

/// Outcome of the navigation guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether navigation to `target` may proceed.
///
/// `None` is an unmatched path; it is guarded like any other route so the
/// not-found page is never shown to signed-out visitors.
#[must_use]
pub fn guard(target: Option<RouteName>, session: Option<&Session>) -> Navigation {
    let needs_auth = target.map_or(true, RouteName::requires_auth);
    if needs_auth && session.is_none() {
        Navigation::Redirect(RouteName::LoginRegister.path())
    } else {
        Navigation::Proceed
    }
}
