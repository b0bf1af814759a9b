use crate::api::use_api;
use crate::auth::use_auth;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront::StoreResult;
use storefront_shared::{Credentials, Token};

pub(crate) const EMPTY_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// 登录表单内联显示的错误
///
/// 只显示接口失败；令牌无法解码时会话保持原状，错误已由会话记录日志。
fn login_error(
    issued: StoreResult<Token>,
    apply: impl FnOnce(&str) -> StoreResult<()>,
) -> Option<String> {
    match issued {
        Ok(token) => {
            let _ = apply(&token.access_token);
            None
        }
        Err(e) => Some(format!("Login failed: {}", e)),
    }
}

/// 用户名/密码表单，登录与注册页共用
#[component]
pub(crate) fn CredentialsForm(
    /// 提交按钮文字
    submit_label: &'static str,
    /// 提交中按钮文字
    busy_label: &'static str,
    is_submitting: ReadSignal<bool>,
    error_msg: ReadSignal<Option<String>>,
    on_submit: Callback<Credentials>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Credentials::new(username.get_untracked(), password.get_untracked()));
    };

    view! {
        <form class="card-body" on:submit=submit>
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="form-control">
                <label class="label" for="username">
                    <span class="label-text">"Username"</span>
                </label>
                <input
                    id="username"
                    type="text"
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    prop:value=username
                    class="input input-bordered"
                />
            </div>
            <div class="form-control">
                <label class="label" for="password">
                    <span class="label-text">"Password"</span>
                </label>
                <input
                    id="password"
                    type="password"
                    placeholder="••••••••"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=password
                    class="input input-bordered"
                />
            </div>
            <div class="form-control mt-6">
                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() {
                        view! { <span class="loading loading-spinner"></span> {busy_label} }.into_any()
                    } else {
                        submit_label.into_any()
                    }}
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();

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
            let issued = api.login(credentials).await;
            // 成功后由路由服务监听认证状态跳回首页
            if let Some(msg) = login_error(issued, |token| auth.login(token)) {
                let _ = set_error_msg.try_set(Some(msg));
            }
            let _ = set_is_submitting.try_set(false);
        });
    });

    view! {
        <div class="flex justify-center">
            <div class="card shrink-0 w-full max-w-md shadow-2xl bg-base-100">
                <h1 class="text-2xl font-bold text-center pt-6">"Login"</h1>
                <CredentialsForm
                    submit_label="Login"
                    busy_label="Logging in..."
                    is_submitting=is_submitting
                    error_msg=error_msg
                    on_submit=on_submit
                />
                <p class="text-center pb-6 text-sm">
                    "No account yet? "
                    <Link href="/register" class="link link-primary">"Register"</Link>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront::StoreError;

    fn token(access_token: &str) -> Token {
        Token {
            access_token: access_token.to_string(),
            token_type: "bearer".to_string(),
        }
    }

    #[test]
    fn test_api_failure_is_shown() {
        let msg = login_error(Err(StoreError::http(401)), |_| Ok(()));
        assert_eq!(msg.as_deref(), Some("Login failed: HTTP error! status: 401"));
    }

    #[test]
    fn test_undecodable_token_is_not_shown() {
        let mut applied = None;
        let msg = login_error(Ok(token("garbage")), |t| {
            applied = Some(t.to_string());
            Err(StoreError::InvalidToken("bad".to_string()))
        });
        assert_eq!(msg, None);
        assert_eq!(applied.as_deref(), Some("garbage"));
    }

    #[test]
    fn test_success_has_no_message() {
        assert_eq!(login_error(Ok(token("t")), |_| Ok(())), None);
    }
}
