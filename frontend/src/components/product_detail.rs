use crate::api::use_api;
use crate::auth::use_auth;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront::catalog::{DEFAULT_QUANTITY, ProductState, add_to_cart, load_product, parse_quantity};
use storefront_shared::{Product, format_price};

/// 商品详情页
#[component]
pub fn ProductDetailPage(id: i64) -> impl IntoView {
    let api = use_api();
    let (state, set_state) = signal(ProductState::Loading);

    spawn_local(async move {
        let loaded = load_product(&api, id).await;
        let _ = set_state.try_set(loaded);
    });

    move || match state.get() {
        ProductState::Loading => view! { <div>"Loading product..."</div> }.into_any(),
        ProductState::Error(msg) => view! { <div>"Error: " {msg}</div> }.into_any(),
        ProductState::NotFound => view! { <div>"Product not found."</div> }.into_any(),
        ProductState::Loaded(product) => view! { <ProductDetail product=product /> }.into_any(),
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();

    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY);
    let (message, set_message) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let product_id = product.id;

    let on_quantity = move |ev: leptos::ev::Event| {
        let next = parse_quantity(&event_target_value(&ev), quantity.get_untracked());
        set_quantity.set(next);
    };

    let on_add = move |_: leptos::ev::MouseEvent| {
        let api = api.clone();
        let token = auth.token_untracked();
        let qty = quantity.get_untracked();

        set_is_submitting.set(true);
        spawn_local(async move {
            let outcome = add_to_cart(&api, token.as_deref(), product_id, qty).await;
            let _ = set_message.try_set(Some(outcome.message()));
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="flex flex-col md:flex-row gap-8">
            <div class="md:w-1/2">
                {product.image_url.clone().map(|src| view! {
                    <img src=src alt=product.name.clone() class="w-full h-auto rounded-lg shadow-md" />
                })}
            </div>
            <div class="md:w-1/2">
                <h1 class="text-3xl font-bold mb-4">{product.name.clone()}</h1>
                <p class="text-2xl mb-4">{format_price(product.price)}</p>
                <div class="flex items-center mb-4">
                    <label for="quantity" class="mr-2">"Quantity:"</label>
                    <input
                        id="quantity"
                        type="number"
                        min="1"
                        class="input input-bordered w-20"
                        prop:value=move || quantity.get().to_string()
                        on:change=on_quantity
                    />
                </div>
                <button class="btn btn-primary" on:click=on_add disabled=move || is_submitting.get()>
                    "Add to Cart"
                </button>
                {move || message.get().map(|msg| view! { <p class="mt-4 text-sm">{msg}</p> })}
            </div>
        </div>
    }
}
