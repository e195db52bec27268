/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::reveal::{Reveal, RevealState};
use leptos::*;

/// Fades `children` in from below once, right after mount.
///
/// The server always renders the hidden frame. On the client the state
/// advances two animation frames after mount, so the hidden frame has been
/// painted and the CSS transition has something to interpolate from.
#[island]
pub fn RevealOnMount(children: Children) -> impl IntoView {
    let reveal = Reveal::fade_up();
    let (state, set_state) = create_signal(RevealState::Hidden);

    create_effect(move |_| {
        request_animation_frame(move || {
            request_animation_frame(move || set_state.update(|s| *s = s.advance()));
        });
    });

    view! { <div style=move || reveal.style(state())>{children()}</div> }
}

#[cfg(all(test, target_arch = "wasm32", feature = "csr"))]
mod tests {
    use super::*;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const HIDDEN: &str = "opacity: 0; transform: translateY(40px);";
    const VISIBLE: &str = "opacity: 1; transform: translateY(0px);";

    async fn next_frame() {
        let frame = js_sys::Promise::new(&mut |resolve, _reject| {
            request_animation_frame(move || {
                _ = resolve.call0(&JsValue::NULL);
            });
        });
        _ = JsFuture::from(frame).await;
    }

    fn mount_reveal() -> web_sys::HtmlElement {
        let container = document()
            .create_element("div")
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap();
        document().body().unwrap().append_child(&container).unwrap();
        mount_to(container.clone(), || {
            view! {
                <RevealOnMount>
                    <p>"footer"</p>
                </RevealOnMount>
            }
        });
        container
    }

    fn reveal_style(container: &web_sys::HtmlElement) -> String {
        container
            .query_selector("div[style]")
            .unwrap()
            .expect("reveal wrapper")
            .get_attribute("style")
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn starts_hidden_and_survives_first_frame() {
        let container = mount_reveal();
        assert!(reveal_style(&container).starts_with(HIDDEN));
        assert!(container.text_content().unwrap_or_default().contains("footer"));

        next_frame().await;
        assert!(reveal_style(&container).starts_with(HIDDEN));
    }

    #[wasm_bindgen_test]
    async fn becomes_visible_after_mount_and_stays() {
        let container = mount_reveal();
        for _ in 0..4 {
            next_frame().await;
        }
        let style = reveal_style(&container);
        assert!(style.starts_with(VISIBLE), "{style}");
        assert!(style.contains("transition: opacity 600ms linear, transform 600ms linear;"));

        for _ in 0..10 {
            next_frame().await;
            assert!(reveal_style(&container).starts_with(VISIBLE));
        }
    }
}
