//! Fallback page for unmatched routes in either route tree.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2 class="not-found-page__title">"Page Not Found."</h2>
            <h4 class="not-found-page__subtitle">
                "The page you're looking for does not exist or has moved."
            </h4>
            <a class="link" href="/">
                "Go back home \u{2192}"
            </a>
        </div>
    }
}
