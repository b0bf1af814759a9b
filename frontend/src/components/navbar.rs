use crate::auth::use_auth;
use crate::web::router::Link;
use leptos::prelude::*;

/// 顶部导航栏
///
/// 登录后显示用户名与注销按钮，否则显示登录/注册入口。
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    // 受保护页面上的跳转由路由服务监听认证状态完成
    let on_logout = move |_: leptos::ev::MouseEvent| auth.logout();

    view! {
        <nav class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-1">
                <Link href="/" class="btn btn-ghost text-xl">
                    "E-Commerce"
                </Link>
            </div>
            <div class="flex-none flex items-center gap-2">
                {move || match auth.username() {
                    Some(username) => view! {
                        <span class="text-sm">"Welcome, " {username}</span>
                        <Link href="/orders" class="btn btn-ghost btn-sm">
                            "Orders"
                        </Link>
                        <button class="btn btn-ghost btn-sm" on:click=on_logout>
                            "Logout"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <Link href="/login" class="btn btn-ghost btn-sm">
                            "Login"
                        </Link>
                        <Link href="/register" class="btn btn-ghost btn-sm">
                            "Register"
                        </Link>
                    }
                    .into_any(),
                }}
                <Link href="/cart" class="btn btn-primary btn-sm">
                    "Cart"
                </Link>
            </div>
        </nav>
    }
}
