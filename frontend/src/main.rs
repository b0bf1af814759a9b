use leptos::prelude::*;
use storefront_frontend::App;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();
    // tracing 的 log 特性把事件转发给 log，再由 console_log 输出到浏览器控制台
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
