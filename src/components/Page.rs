use crate::components::Footer::*;
use leptos::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! { <main class="bg-white text-gray-900 p-6 space-y-12">{children()} <Footer/></main> }
}
