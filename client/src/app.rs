//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    dark_mode_toggle::DarkModeToggle, language_switcher::LanguageSwitcher,
    notification_stack::NotificationStack,
};
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, inbox::InboxPage, register::RegisterPage};
use crate::state::{notifications::NotificationsState, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="sr">
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
/// Provides the shared UI and notification contexts, applies the stored
/// theme once mounted, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(ui);
    provide_context(notifications);

    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/epausa.css"/>
        <Title text="ePauša"/>

        <header class="flex justify-end items-center gap-2 p-4">
            <LanguageSwitcher/>
            <DarkModeToggle/>
        </header>
        <NotificationStack/>

        <Router>
            <Routes fallback=|| "Stranica nije pronađena.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("inbox") view=InboxPage/>
                <Route path=StaticSegment("admin-panel") view=AdminPage/>
            </Routes>
        </Router>
    }
}
