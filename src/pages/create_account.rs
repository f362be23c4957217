//! Account registration page.

#[cfg(test)]
#[path = "create_account_test.rs"]
mod create_account_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserRole;

/// Login route with the "account created" notice enabled.
pub(crate) const LOGIN_AFTER_CREATE_PATH: &str = "/?created=1";

/// Trim and check the registration form before sending it.
pub(crate) fn validate_create_account_input(
    email: &str,
    password: &str,
    role: &str,
) -> Result<(String, String, UserRole), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    let Some(role) = UserRole::from_wire(role) else {
        return Err("Choose a role.");
    };
    Ok((email.to_owned(), password.to_owned(), role))
}

pub(crate) fn create_account_failed_message(error: Option<&str>) -> String {
    match error {
        Some(error) if !error.trim().is_empty() => error.to_owned(),
        _ => "Could not create account.".to_owned(),
    }
}

#[component]
pub fn CreateAccountPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::Client.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value, role_value) =
            match validate_create_account_input(&email.get(), &password.get(), &role.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::create_account(&email_value, &password_value, role_value).await {
                Ok(output) if output.ok => {
                    leptos::logging::log!("account created for {email_value} as {role_value}");
                    navigate(LOGIN_AFTER_CREATE_PATH, NavigateOptions::default());
                }
                Ok(output) => info.set(create_account_failed_message(output.error.as_deref())),
                Err(e) => {
                    leptos::logging::warn!("createAccount failed: {e}");
                    info.set(create_account_failed_message(None));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Nuber Eats"</h1>
                <p class="login-card__subtitle">"Let's get started"</p>
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
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {UserRole::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                            .collect_view()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a class="link" href="/">
                        "Log in now"
                    </a>
                </p>
            </div>
        </div>
    }
}
