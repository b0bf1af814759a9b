use super::login::{CredentialsForm, EMPTY_FIELDS_MESSAGE};
use crate::api::use_api;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_shared::Credentials;
use tracing::info;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = Callback::new(move |credentials: Credentials| {
        if !credentials.is_complete() {
            set_error_msg.set(Some(EMPTY_FIELDS_MESSAGE.to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.register(credentials).await {
                Ok(user) => {
                    info!(username = %user.username, "registered");
                    router.navigate("/login");
                }
                Err(e) => {
                    let _ = set_error_msg.try_set(Some(format!("Registration failed: {}", e)));
                }
            }
            let _ = set_is_submitting.try_set(false);
        });
    });

    view! {
        <div class="flex justify-center">
            <div class="card shrink-0 w-full max-w-md shadow-2xl bg-base-100">
                <h1 class="text-2xl font-bold text-center pt-6">"Register"</h1>
                <CredentialsForm
                    submit_label="Register"
                    busy_label="Registering..."
                    is_submitting=is_submitting
                    error_msg=error_msg
                    on_submit=on_submit
                />
                <p class="text-center pb-6 text-sm">
                    "Already have an account? "
                    <Link href="/login" class="link link-primary">"Login"</Link>
                </p>
            </div>
        </div>
    }
}
