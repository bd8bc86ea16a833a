//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::tutorial_overlay::TutorialOverlay;
use crate::config::ClientConfig;
use crate::pages::course_detail::CourseDetailPage;
use crate::pages::course_editor::CourseEditorPage;
use crate::pages::dashboard::{AdminDashboardPage, TeacherDashboardPage, UserDashboardPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::routes::{self, Navigation, RouteName};
use crate::state::auth::AuthState;
use crate::state::course_editor::CourseEditorState;
use crate::state::tutorial::TutorialState;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let editor = RwSignal::new(CourseEditorState::default());
    let tutorial = RwSignal::new(TutorialState::default());

    provide_context(ClientConfig::from_env());
    provide_context(auth);
    provide_context(editor);
    provide_context(tutorial);

    // Effects only run in the browser, so the stored session is restored
    // after hydration and SSR output never depends on localStorage.
    Effect::new(move || {
        auth.update(|a| a.load_stored_auth(&BrowserStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lernplattform.css"/>
        <Title text="Lernplattform"/>

        <Router>
            <NavigationGuard/>
            <SiteHeader/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("course"), ParamSegment("courseId")) view=CourseDetailPage/>
                    <Route path=StaticSegment("editor") view=CourseEditorPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("user")) view=UserDashboardPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("teacher")) view=TeacherDashboardPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("admin")) view=AdminDashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("profile"), ParamSegment("userId")) view=ProfilePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
            <SiteFooter/>
            <TutorialOverlay/>
        </Router>
    }
}

/// Applies the auth guard and feeds route changes to the tutorial engine.
///
/// Must be mounted inside `<Router>`.
#[component]
fn NavigationGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tutorial = expect_context::<RwSignal<TutorialState>>();
    let location = use_location();
    let navigate = use_navigate();

    let current_route = move || routes::match_path(&location.pathname.get()).map(|m| m.name);

    // Tracks the pathname only, so signing in does not rewind the tutorial.
    Effect::new(move || {
        let name = current_route().map_or("", RouteName::as_str);
        tutorial.update(|t| t.set_route(name));
    });

    Effect::new(move || {
        let route = current_route();
        let state = auth.get();
        if state.loading {
            return;
        }
        if let Navigation::Redirect(target) = routes::guard(route, state.session.as_ref()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
