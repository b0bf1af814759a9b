use crate::api::use_api;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront::catalog::load_catalog;
use storefront_shared::{Product, format_price};

/// 商品列表页
///
/// 加载失败时只记录日志，页面显示为空列表。
#[component]
pub fn CatalogPage() -> impl IntoView {
    let api = use_api();
    let (products, set_products) = signal(Vec::<Product>::new());

    spawn_local(async move {
        let list = load_catalog(&api).await;
        // 页面已卸载时丢弃结果
        let _ = set_products.try_set(list);
    });

    view! {
        <h1 class="text-2xl font-bold mb-4">"Products"</h1>
        <div class="grid gap-4 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}", product.id);
    let image = product.image_url.clone();

    view! {
        <div class="card bg-base-100 shadow-sm">
            {image.map(|src| view! {
                <figure>
                    <img src=src alt=product.name.clone() class="h-48 w-full object-cover" />
                </figure>
            })}
            <div class="card-body">
                <h2 class="card-title">{product.name.clone()}</h2>
                <p>{format_price(product.price)}</p>
                <div class="card-actions justify-end">
                    <Link href=href class="btn btn-outline btn-sm">
                        "View Details"
                    </Link>
                </div>
            </div>
        </div>
    }
}
