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

use crate::components::CTAButton::*;
use crate::content::HERO;
use crate::icons::GithubIcon;
use leptos::*;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <section class="text-center space-y-2">
            <h1 class="text-4xl font-bold">{HERO.title}</h1>
            <p class="text-lg text-gray-600">{HERO.subtitle}</p>
            <CTAButton href=HERO.link_url>
                <GithubIcon class="mr-2"/>
                {HERO.link_label}
            </CTAButton>
        </section>
    }
}
