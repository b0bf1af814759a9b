//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::web::LocalTokenStore;
use leptos::prelude::*;
use storefront::{ClientConfig, Session, StoreError, StoreResult};

/// 认证上下文
///
/// 包装核心库的 `Session`，通过 Context 在组件间共享。
/// 页面加载时创建一次，从 LocalStorage 恢复令牌。
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session<LocalTokenStore>>,
}

impl AuthContext {
    pub fn new(config: &ClientConfig) -> Self {
        let store = LocalTokenStore::new(config.token_key.clone());
        Self {
            session: RwSignal::new(Session::restore(store)),
        }
    }

    /// 当前令牌，不建立依赖（用于事件处理函数）
    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_string))
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.username().map(str::to_string))
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_authenticated()))
    }

    /// 保存新令牌并更新会话
    ///
    /// 导航由路由服务监听认证状态变化后自动处理。
    pub fn login(&self, token: &str) -> StoreResult<()> {
        self.session
            .try_update(|s| s.login(token))
            .unwrap_or_else(|| Err(StoreError::Storage("auth context disposed".to_string())))
    }

    /// 注销并清除令牌
    pub fn logout(&self) {
        self.session.update(|s| s.logout());
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth must be used within an AuthContext provider")
}
