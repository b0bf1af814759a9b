//! 浏览器原生对话框

/// 阻塞式提示框 (`window.alert`)
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(message, "no window, alert dropped");
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!(error = ?e, "alert failed");
    }
}
