use crate::web::FetchClient;
use leptos::prelude::*;
use storefront::{ClientConfig, StorefrontApi};

/// 浏览器中使用的 API 客户端
pub type Api = StorefrontApi<FetchClient>;

pub fn provide_api(config: ClientConfig) -> Api {
    let api = StorefrontApi::new(config, FetchClient);
    provide_context(api.clone());
    api
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("Api should be provided")
}
