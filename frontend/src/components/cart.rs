use crate::api::use_api;
use crate::auth::use_auth;
use crate::web::alert;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront::cart::{CartMutation, CartState, CartSync, LOGIN_TO_VIEW_CART_MESSAGE};
use storefront_shared::{CartItem, format_price};
use tracing::debug;

/// 非列表状态下显示的文字
fn status_message(state: &CartState) -> String {
    match state {
        CartState::Loading => "Loading cart...".to_string(),
        CartState::Unauthenticated => format!("Error: {}", LOGIN_TO_VIEW_CART_MESSAGE),
        CartState::LoadError(msg) => format!("Error: {}", msg),
        CartState::Empty | CartState::Populated(_) => "Your cart is empty.".to_string(),
    }
}

/// 购物车页
///
/// 每次修改都走"先修改、再同步"：成功后用服务端返回的整车数据替换本地状态，
/// 失败时保留旧数据，不显示错误。
#[component]
pub fn CartPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let (state, set_state) = signal(CartState::Loading);
    let populated = Memo::new(move |_| state.with(|s| matches!(s, CartState::Populated(_))));

    {
        let api = api.clone();
        let token = auth.token_untracked();
        spawn_local(async move {
            let loaded = CartSync::new(&api, token.as_deref()).load().await;
            let _ = set_state.try_set(loaded);
        });
    }

    let apply = Callback::new({
        let api = api.clone();
        move |mutation: CartMutation| {
            let api = api.clone();
            let token = auth.token_untracked();
            spawn_local(async move {
                match CartSync::new(&api, token.as_deref()).apply(mutation).await {
                    Ok(next) => {
                        let _ = set_state.try_set(next);
                    }
                    Err(e) => debug!(error = %e, "cart left unchanged"),
                }
            });
        }
    });

    let checkout = Callback::new(move |_: ()| {
        let api = api.clone();
        let token = auth.token_untracked();
        spawn_local(async move {
            let outcome = CartSync::new(&api, token.as_deref()).checkout().await;
            if let Some(msg) = outcome.alert_message() {
                alert(&msg);
            }
            if let Some(path) = outcome.redirect() {
                router.navigate(path);
            }
        });
    });

    view! {
        <Show
            when=move || populated.get()
            fallback=move || view! { <div>{move || state.with(status_message)}</div> }
        >
            <h1 class="text-3xl font-bold mb-6">"Shopping Cart"</h1>
            <div class="space-y-4">
                // 数量变化时整行重建，输入框随之刷新
                <For
                    each=move || state.with(|s| s.items().to_vec())
                    key=|item| (item.id, item.quantity)
                    children=move |item| view! { <CartRow item=item apply=apply /> }
                />
            </div>
            <div class="mt-6 flex justify-end items-center">
                <h2 class="text-2xl font-bold mr-4">
                    "Total: " {move || state.with(CartState::formatted_total)}
                </h2>
                <button class="btn btn-success" on:click=move |_| checkout.run(())>
                    "Checkout"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn CartRow(item: CartItem, apply: Callback<CartMutation>) -> impl IntoView {
    let item_id = item.id;
    let current = item.quantity;
    let decrement = CartMutation::decrement(&item);
    let increment = CartMutation::increment(&item);

    // 受控输入框：被拒绝的输入会被重置为当前数量
    let (shown, set_shown) = signal(current);
    let row = item.clone();
    let on_input = move |ev: leptos::ev::Event| {
        match CartMutation::from_input(&row, &event_target_value(&ev)) {
            Some(mutation) => apply.run(mutation),
            None => set_shown.set(current),
        }
    };

    view! {
        <div class="flex items-center border-b pb-4">
            {item.product.image_url.clone().map(|src| view! {
                <img src=src alt=item.product.name.clone() class="w-20 h-20 object-cover rounded-md mr-4" />
            })}
            <div class="flex-grow">
                <h2 class="text-lg font-semibold">{item.product.name.clone()}</h2>
                <p>"Price: " {format_price(item.product.price)}</p>
                <div class="flex items-center mt-2">
                    <button class="btn btn-sm" on:click=move |_| apply.run(decrement)>"-"</button>
                    <input
                        type="number"
                        class="input input-sm input-bordered w-16 text-center"
                        prop:value=move || shown.get().to_string()
                        on:change=on_input
                    />
                    <button class="btn btn-sm" on:click=move |_| apply.run(increment)>"+"</button>
                    <button
                        class="btn btn-ghost btn-sm text-error ml-4"
                        on:click=move |_| apply.run(CartMutation::Remove { item_id })
                    >
                        "Remove"
                    </button>
                </div>
            </div>
            <p class="text-lg font-semibold">{format_price(item.line_total())}</p>
        </div>
    }
}
