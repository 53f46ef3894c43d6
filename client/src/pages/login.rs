//! Login page for the single configured dashboard account.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::i18n::{Text, t};

pub const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trim the username and require both fields.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS`] when either field is blank.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the dashboard.
    Effect::new(move || {
        if auth.get().user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (name, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&name, &pass).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.email);
                    auth.update(|a| a.resolve(Some(user)));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name, pass);
    };

    let locale = move || ui.get().locale;

    view! {
        <div class="flex min-h-screen items-center justify-center bg-base-200">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    <h1 class="card-title text-2xl">"🚚 Fleet Dashboard"</h1>
                    <label class="form-control">
                        <span class="label-text">{move || t(locale(), Text::Username)}</span>
                        <input
                            class="input input-bordered"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{move || t(locale(), Text::Password)}</span>
                        <input
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>
                    <button class="btn btn-primary mt-2" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { t(locale(), Text::Loading) } else { t(locale(), Text::SignIn) }}
                    </button>
                </form>
            </div>
        </div>
    }
}
