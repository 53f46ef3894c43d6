//! Authenticated page frame: redirect guard, header, and content slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route wraps its body in this frame so the login redirect
//! and loading fallback behave identically everywhere.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::i18n::{Text, t};

#[component]
pub fn DashboardFrame(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || { let a = auth.get(); !a.loading && a.user.is_some() }
            fallback=move || {
                view! {
                    <div class="flex min-h-screen items-center justify-center">
                        <span class="loading loading-spinner"></span>
                        <span class="ml-2">{move || t(ui.get().locale, Text::Loading)}</span>
                    </div>
                }
            }
        >
            <div class="min-h-screen bg-base-200">
                <Header/>
                <main class="container mx-auto p-4">{children()}</main>
            </div>
        </Show>
    }
}
