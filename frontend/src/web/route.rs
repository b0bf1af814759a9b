//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 商品列表 (默认路由)
    #[default]
    Home,
    /// 商品详情
    Product(i64),
    /// 购物车（未登录时页面自己提示）
    Cart,
    Login,
    Register,
    /// 订单列表 (需要认证)
    Orders,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/cart" => Self::Cart,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/orders" => Self::Orders,
            _ => match trimmed.strip_prefix("/products/") {
                Some(id) => id.parse().map(Self::Product).unwrap_or(Self::NotFound),
                None => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Product(id) => format!("/products/{}", id),
            Self::Cart => "/cart".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Orders => "/orders".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Orders)
    }

    /// 定义已认证用户是否应该离开此路由（登录、注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 守卫：给定认证状态，返回实际应显示的路由
    ///
    /// 未登录访问受保护页面去登录页；已登录访问登录/注册页回首页。
    pub fn guard(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            Self::Login
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Self::Home
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/cart"), AppRoute::Cart);
        assert_eq!(AppRoute::from_path("/cart/"), AppRoute::Cart);
        assert_eq!(AppRoute::from_path("/orders"), AppRoute::Orders);
        assert_eq!(AppRoute::from_path("/products/42"), AppRoute::Product(42));
    }

    #[test]
    fn test_bad_product_id_is_not_found() {
        assert_eq!(AppRoute::from_path("/products/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/products/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Product(7),
            AppRoute::Cart,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Orders,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_guards() {
        assert!(AppRoute::Orders.requires_auth());
        assert!(!AppRoute::Cart.requires_auth());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
    }

    #[test]
    fn test_guard_sends_anonymous_users_to_login() {
        assert_eq!(AppRoute::Orders.guard(false), AppRoute::Login);
        assert_eq!(AppRoute::Orders.guard(true), AppRoute::Orders);
        assert_eq!(AppRoute::Cart.guard(false), AppRoute::Cart);
    }

    #[test]
    fn test_guard_sends_signed_in_users_home() {
        // 登录后按后退键回到 /login 也要被送回首页
        assert_eq!(AppRoute::from_path("/login").guard(true), AppRoute::Home);
        assert_eq!(AppRoute::Register.guard(true), AppRoute::Home);
        assert_eq!(AppRoute::Login.guard(false), AppRoute::Login);
    }

    #[test]
    fn test_guard_leaves_public_routes_alone() {
        for is_auth in [false, true] {
            assert_eq!(AppRoute::Home.guard(is_auth), AppRoute::Home);
            assert_eq!(AppRoute::Product(3).guard(is_auth), AppRoute::Product(3));
            assert_eq!(AppRoute::NotFound.guard(is_auth), AppRoute::NotFound);
        }
    }
}
