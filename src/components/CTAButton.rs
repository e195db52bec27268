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

use leptos::*;

/// `target` for links that open in a new browsing context.
pub const NEW_TAB_TARGET: &str = "_blank";
/// `rel` that keeps the new context from reaching back through `window.opener`
/// or learning the referring page.
pub const NEW_TAB_REL: &str = "noopener noreferrer";

/// A large button-styled link that opens `href` in a new browsing context.
#[component]
pub fn CTAButton(children: Children, href: &'static str) -> impl IntoView {
    let class = "inline-flex items-center justify-center h-11 px-8 rounded-md text-base font-medium bg-gray-900 text-white hover:bg-gray-700 transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-400";

    view! {
        <a href=href class=class target=NEW_TAB_TARGET rel=NEW_TAB_REL>
            {children()}
        </a>
    }
}
