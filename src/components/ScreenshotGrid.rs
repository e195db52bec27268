use crate::assets::{Screenshot, SCREENSHOTS};
use crate::content::SCREENSHOTS_HEADING;
use leptos::*;

#[component]
pub fn ScreenshotGrid() -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-bold">{SCREENSHOTS_HEADING}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {SCREENSHOTS
                    .iter()
                    .map(|shot| view! { <ScreenshotImage shot=*shot/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ScreenshotImage(shot: Screenshot) -> impl IntoView {
    view! { <img src=shot.path alt=shot.alt class="rounded-xl shadow"/> }
}
