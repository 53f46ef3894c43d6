//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-5xl font-bold">"404"</h1>
                    <p class="py-4">"Page not found."</p>
                    <a href="/" class="btn btn-primary">"Back to overview"</a>
                </div>
            </div>
        </div>
    }
}
