use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::config::GatewayConfig;
use crate::gateway::auth::Session;
use crate::gateway::Gateway;
use crate::pages::records::RecordsPage;

#[component]
pub fn App(config: GatewayConfig) -> impl IntoView {
    let gateway = Gateway::new(config);
    let (session, set_session) = signal::<Option<Session>>(None);
    provide_context(gateway.clone());

    // Session observer: pick up any restored session on mount, then track
    // auth-state changes until unmount. The listener is the only path that
    // switches between the two views.
    Effect::new(move |_| {
        set_session.set(gateway.current_session());
        let subscription = gateway.on_auth_state_change(move |s| set_session.set(s));
        on_cleanup(move || subscription.unsubscribe());
    });

    view! {
        <div class="container">
            {move || match session.get() {
                Some(s) => view! { <RecordsPage session=s /> }.into_any(),
                None => view! { <AuthForm /> }.into_any(),
            }}
        </div>
    }
}
