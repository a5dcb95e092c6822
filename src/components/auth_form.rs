use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dialog;
use crate::gateway::auth::SignUpOutcome;
use crate::gateway::Gateway;

/// Sign-in / sign-up form shown while no session exists. A rejected attempt
/// is surfaced as a blocking dialog and leaves the fields populated for
/// retry; success flips the UI only via the session observer's listener.
#[component]
pub fn AuthForm() -> impl IntoView {
    let gateway = expect_context::<Gateway>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let sign_in = {
        let gateway = gateway.clone();
        move |_| {
            let gateway = gateway.clone();
            let email = email.get();
            let password = password.get();
            set_is_loading.set(true);
            spawn_local(async move {
                if let Err(e) = gateway.sign_in(&email, &password).await {
                    dialog::alert(&String::from(e));
                }
                set_is_loading.set(false);
            });
        }
    };

    let sign_up = {
        let gateway = gateway.clone();
        move |_| {
            let gateway = gateway.clone();
            let email = email.get();
            let password = password.get();
            set_is_loading.set(true);
            spawn_local(async move {
                match gateway.sign_up(&email, &password).await {
                    Ok(SignUpOutcome::ConfirmationSent) => {
                        dialog::alert("Signed up! Check your email to confirm your account.");
                    }
                    Ok(SignUpOutcome::SignedIn) => {}
                    Err(e) => dialog::alert(&String::from(e)),
                }
                set_is_loading.set(false);
            });
        }
    };

    view! {
        <div class="auth-form">
            <style>{include_str!("auth_form.css")}</style>

            <h2>"Game Tracker"</h2>
            <p class="auth-subtitle">"Sign in or sign up"</p>

            <div class="form-group">
                <input
                    type="email"
                    class="input"
                    placeholder="Email address"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                <input
                    type="password"
                    class="input"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                <button class="btn btn-primary" on:click=sign_in disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Working..." } else { "Sign In" }}
                </button>
                <button class="btn btn-secondary" on:click=sign_up disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Working..." } else { "Sign Up" }}
                </button>
            </div>
        </div>
    }
}
