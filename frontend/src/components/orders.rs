use crate::api::use_api;
use crate::auth::use_auth;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront::orders::{OrdersState, load_orders};
use storefront_shared::{Order, format_price};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let (state, set_state) = signal(OrdersState::Loading);

    let token = auth.token_untracked();
    spawn_local(async move {
        let loaded = load_orders(&api, token.as_deref()).await;
        let _ = set_state.try_set(loaded);
    });

    view! {
        <h1 class="text-3xl font-bold mb-6">"Your Orders"</h1>
        {move || match state.get() {
            OrdersState::Loading => view! { <div>"Loading orders..."</div> }.into_any(),
            OrdersState::Unauthenticated => view! { <div>"Please log in to view your orders."</div> }.into_any(),
            OrdersState::LoadError(msg) => view! { <div>"Error: " {msg}</div> }.into_any(),
            OrdersState::Empty => view! { <div>"You have no orders yet."</div> }.into_any(),
            OrdersState::Loaded(orders) => view! {
                <div class="space-y-4">
                    {orders.into_iter().map(|order| view! { <OrderCard order=order /> }).collect_view()}
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let placed_at = order.order_date.format("%Y-%m-%d %H:%M").to_string();

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <div class="flex justify-between">
                    <h2 class="card-title">"Order #" {order.id}</h2>
                    <span class="text-sm opacity-70">{placed_at}</span>
                </div>
                <ul class="text-sm">
                    {order
                        .order_items
                        .into_iter()
                        .map(|item| {
                            let line = format_price(item.line_total());
                            view! {
                                <li class="flex justify-between">
                                    <span>{item.product.name} " × " {item.quantity}</span>
                                    <span>{line}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="text-right font-semibold">"Total: " {format_price(order.total_amount)}</p>
            </div>
        </div>
    }
}
