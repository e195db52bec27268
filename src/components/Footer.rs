use crate::components::RevealOnMount::*;
use crate::content::FOOTER_STATEMENT;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center pt-12">
            <RevealOnMount>
                <p class="text-lg">{FOOTER_STATEMENT}</p>
            </RevealOnMount>
        </footer>
    }
}
