//! Server-rendered markup for the listing page.
//!
//! The sort selector is a GET form: choosing an option resubmits the page
//! with `?sort=<option>`, and the handler derives a freshly sorted copy of
//! the catalog for that request.

use maud::{html, Markup, DOCTYPE};
use plp_core::{Product, SortOption};

const PAGE_TITLE: &str = "Product Listing Page";

const SIGN_IN_PROMPT: &str = "Sign in or Create an account to see pricing";

const PAGE_STYLE: &str = "\
.grid{display:grid;grid-template-columns:repeat(2,minmax(0,1fr));gap:1.5rem}\
@media(min-width:640px){.grid{grid-template-columns:repeat(3,minmax(0,1fr))}}\
@media(min-width:768px){.grid{grid-template-columns:repeat(4,minmax(0,1fr))}}\
.card-image{position:relative;height:10rem;width:100%}\
.card-image img{position:absolute;inset:0;width:100%;height:100%;object-fit:contain}\
.card-title{display:-webkit-box;-webkit-line-clamp:2;-webkit-box-orient:vertical;overflow:hidden}\
.sign-in{color:#2563eb;text-decoration:underline;cursor:pointer}";

fn layout(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                style { (PAGE_STYLE) }
            }
            body {
                main class="min-h-screen p-4 bg-white" { (body) }
            }
        }
    }
}

/// Full listing page for an already sorted product sequence.
pub fn listing_page(products: &[Product], selected: SortOption) -> Markup {
    layout(html! {
        h1 class="text-center text-3xl font-bold mb-6" { "Discover Our Products" }
        (sort_form(selected))
        div class="grid" {
            @for product in products {
                (product_card(product))
            }
        }
    })
}

fn sort_form(current: SortOption) -> Markup {
    html! {
        form class="flex justify-end mb-4" method="get" action="/" {
            select name="sort" class="border p-2 rounded" aria-label="Sort products" onchange="this.form.submit()" {
                @for choice in SortOption::ALL {
                    option value=(choice.as_str()) selected[choice == current] { (choice.label()) }
                }
            }
            noscript { button type="submit" { "Sort" } }
        }
    }
}

fn product_card(product: &Product) -> Markup {
    html! {
        div class="card border rounded-lg p-4 shadow-sm" data-product-id=(product.id) {
            div class="card-image" {
                img src=(product.image) alt=(product.title) loading="lazy";
            }
            h2 class="card-title text-sm mt-2 font-medium" title=(product.title) { (product.title) }
            p class="price text-gray-600 font-semibold" { (product.display_price()) }
            // Call-to-action only; there is no sign-in flow behind it.
            span class="sign-in text-sm" role="link" aria-disabled="true" { (SIGN_IN_PROMPT) }
        }
    }
}

/// Page shown when the catalog could not be loaded.
pub fn error_page(kind: &str) -> Markup {
    layout(html! {
        h1 class="text-center text-3xl font-bold mb-6" { "Discover Our Products" }
        p class="error" data-error-kind=(kind) {
            "Products are unavailable right now. Please try again later."
        }
    })
}
