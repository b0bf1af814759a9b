//! 路由服务
//!
//! 所有对 window.history 的读写都在这里。
//! 点击链接、后退/前进、登录状态变化都走同一个入口 `settle`，
//! 先过 `AppRoute::guard`，再决定是否改写地址栏。

use leptos::prelude::*;
use tracing::info;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 地址栏与目标路由的关系
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    /// 新的一次导航，需要 pushState
    New,
    /// 地址栏已经显示请求的路由（首次加载、popstate、认证变化），
    /// 只有被守卫改写时才 replaceState
    Current,
}

fn write_history(path: &str, entry: Entry) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = match entry {
        Entry::New => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        Entry::Current => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
    };
}

/// 路由器服务
///
/// 认证状态以信号注入，路由本身不依赖认证模块。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        let router = Self {
            current_route,
            set_route,
            is_authenticated,
        };
        router.settle(AppRoute::from_path(&current_path()), Entry::Current);
        router
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.settle(AppRoute::from_path(path), Entry::New);
    }

    /// 守卫 -> 地址栏 -> 路由信号
    fn settle(&self, requested: AppRoute, entry: Entry) {
        let route = requested.clone().guard(self.is_authenticated.get_untracked());
        let redirected = route != requested;
        if redirected {
            info!(from = %requested, to = %route, "route guard redirect");
        }

        match entry {
            // NotFound 不改地址栏，保留用户输入
            Entry::New if route != AppRoute::NotFound => write_history(&route.to_path(), entry),
            Entry::Current if redirected => write_history(&route.to_path(), entry),
            _ => {}
        }

        if self.current_route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    fn listen_popstate(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.settle(AppRoute::from_path(&current_path()), Entry::Current);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
        // 监听器与页面同生命周期
        closure.forget();
    }

    /// 登录/注销后对当前页面重新执行守卫
    fn follow_auth(&self) {
        let router = *self;
        Effect::new(move |_| {
            router.is_authenticated.track();
            router.settle(router.current_route.get_untracked(), Entry::Current);
        });
    }
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，提供 `RouterService` 上下文
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    let router = RouterService::new(is_authenticated);
    router.listen_popstate();
    router.follow_auth();
    provide_context(router);

    children()
}

/// 根据当前路由渲染页面
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}

/// 站内链接：拦截点击，走路由服务而不是整页跳转
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = href.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
