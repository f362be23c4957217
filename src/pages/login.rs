//! Login page: email + password exchanged for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::session::SessionState;
use crate::util::auth::sign_in;

pub(crate) const ACCOUNT_CREATED_NOTICE: &str = "Account created! Log in now.";

/// Trim and check the login form before sending it.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn login_failed_message(error: Option<&str>) -> String {
    match error {
        Some(error) if !error.trim().is_empty() => error.to_owned(),
        _ => "Login failed.".to_owned(),
    }
}

/// Notice shown after a redirect from the create-account page.
pub(crate) fn account_created_notice(flag: Option<&str>) -> Option<&'static str> {
    matches!(flag, Some("1" | "true")).then_some(ACCOUNT_CREATED_NOTICE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let notice = move || account_created_notice(query.read().get("created").as_deref());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(output) => match output.token.filter(|_| output.ok) {
                    Some(token) => sign_in(session, token),
                    None => info.set(login_failed_message(output.error.as_deref())),
                },
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    info.set(login_failed_message(None));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Nuber Eats"</h1>
                <p class="login-card__subtitle">"Welcome back"</p>
                <Show when=move || notice().is_some()>
                    <p class="login-message login-message--notice">{move || notice().unwrap_or_default()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { "Log in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "New to Nuber? "
                    <a class="link" href="/create-account">
                        "Create an Account"
                    </a>
                </p>
            </div>
        </div>
    }
}
