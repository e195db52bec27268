use leptos::*;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-gray-200 bg-white text-gray-900 shadow-sm">
            {children()}
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="p-4 space-y-2">{children()}</div> }
}
