mod blogs;
mod health;
mod home;
mod not_found;
mod verification;

pub(crate) use blogs::BlogsPage;
pub(crate) use health::HealthPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use verification::VerificationPage;

use crate::features::session::RequireSession;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const BLOGS: &str = "/blogs";
    pub const VERIFY: &str = "/verify";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/health") view=HealthPage />
            <Route
                path=path!("/blogs")
                view=|| view! { <RequireSession><BlogsPage /></RequireSession> }
            />
            <Route
                path=path!("/verify")
                view=|| view! { <RequireSession><VerificationPage /></RequireSession> }
            />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
