//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`。

use storefront::{HttpClient, HttpRequest, HttpResponse, StoreError, StoreResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// HTTP 错误类型
#[derive(Debug)]
pub enum HttpError {
    /// 请求构建失败
    RequestBuildFailed(String),
    /// 网络请求失败
    NetworkError(String),
    /// 响应解析失败
    ResponseParseFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "failed to build request: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "{}", msg),
            HttpError::ResponseParseFailed(msg) => write!(f, "failed to read response: {}", msg),
        }
    }
}

impl From<HttpError> for StoreError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::ResponseParseFailed(_) => StoreError::Decode(e.to_string()),
            _ => StoreError::Network(e.to_string()),
        }
    }
}

/// 读取响应体文本
async fn read_text(response: &Response) -> Result<String, HttpError> {
    let promise = response
        .text()
        .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

    let text = JsFuture::from(promise)
        .await
        .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

    text.as_string()
        .ok_or_else(|| HttpError::ResponseParseFailed("body is not a string".to_string()))
}

/// 发送请求
async fn fetch(req: &HttpRequest) -> Result<HttpResponse, HttpError> {
    let headers = Headers::new()
        .map_err(|e| HttpError::RequestBuildFailed(format!("Headers: {:?}", e)))?;

    for (key, value) in &req.headers {
        headers
            .set(key, value)
            .map_err(|e| HttpError::RequestBuildFailed(format!("header {}: {:?}", key, e)))?;
    }

    let opts = RequestInit::new();
    opts.set_method(req.method.as_str());
    opts.set_headers(&headers.into());

    if let Some(body) = &req.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&req.url, &opts)
        .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;

    let window = web_sys::window()
        .ok_or_else(|| HttpError::NetworkError("window is not available".to_string()))?;

    // fetch 只有在网络失败时才 reject，非 2xx 由调用方判断
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| HttpError::NetworkError(format!("Failed to fetch: {:?}", e)))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|e| HttpError::ResponseParseFailed(format!("not a Response: {:?}", e)))?;

    let status = response.status();
    let body = read_text(&response).await?;

    Ok(HttpResponse { status, body })
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> StoreResult<HttpResponse> {
        fetch(&req).await.map_err(StoreError::from)
    }
}
