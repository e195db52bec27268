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

use crate::content::{AUTHOR, HERO, SUMMARY};
use crate::error_template::ErrorTemplate;
use crate::errors::PortfolioError;
use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Open Graph `(property, content)` pairs. There is no `og:url`: the page has
/// no fixed public address of its own.
pub const OPEN_GRAPH: [(&str, &str); 3] = [
    ("og:type", "website"),
    ("og:title", HERO.title),
    ("og:description", HERO.subtitle),
];

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - HPC Portfolio");
    provide_meta_context();

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/hpc_portfolio.css"/>
        <Title formatter/>
        <Meta name="description" content=SUMMARY.body/>
        <Meta name="author" content=AUTHOR/>
        <Meta name="keywords" content="hpc, openmp, neural network, parallel computing, c++"/>

        {OPEN_GRAPH
            .iter()
            .map(|(property, content)| view! { <Meta property=*property content=*content/> })
            .collect::<Vec<_>>()}

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(PortfolioError::NotFound);
            view! { <ErrorTemplate outside_errors/> }.into_view()
        }>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_graph_describes_the_hero() {
        assert_eq!(OPEN_GRAPH[1], ("og:title", "Speeding Up Intelligence"));
        assert_eq!(
            OPEN_GRAPH[2],
            ("og:description", "An HPC Exploration by Anshika Gaur")
        );
    }

    #[test]
    fn open_graph_has_no_foreign_url() {
        assert!(OPEN_GRAPH.iter().all(|(property, _)| *property != "og:url"));
        assert!(OPEN_GRAPH
            .iter()
            .all(|(_, content)| !content.contains("github.com")));
    }
}
