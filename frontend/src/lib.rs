//! Storefront 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `api`: 注入到 Context 的后端客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod cart;
    pub mod catalog;
    pub mod login;
    pub mod navbar;
    pub mod orders;
    pub mod product_detail;
    pub mod register;
}

use crate::api::provide_api;
use crate::auth::AuthContext;
use crate::components::cart::CartPage;
use crate::components::catalog::CatalogPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::orders::OrdersPage;
use crate::components::product_detail::ProductDetailPage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;
use storefront::ClientConfig;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod dialog;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use dialog::alert;
    pub use http::FetchClient;
    pub use storage::LocalTokenStore;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <CatalogPage /> }.into_any(),
        AppRoute::Product(id) => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();

    // 1. 创建认证上下文（从 LocalStorage 恢复令牌）
    let auth_ctx = AuthContext::new(&config);
    provide_context(auth_ctx);

    // 2. 注入 API 客户端
    provide_api(config);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <Navbar />
            <main class="container mx-auto p-4">
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
