use crate::components::*;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <Portfolio/>
    }
}

/// Every section of the page, top to bottom.
#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <Page>
            <HeroHeader/>
            <SummaryCards/>
            <ScreenshotGrid/>
        </Page>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::REPOSITORY_URL;
    use leptos::leptos_dom::HydrationCtx;

    fn render() -> String {
        let runtime = create_runtime();
        HydrationCtx::reset_id();
        let html = view! { <Portfolio/> }
            .into_view()
            .render_to_string()
            .to_string();
        runtime.dispose();
        html
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in rendered page"))
    }

    #[test]
    fn sections_render_in_order() {
        let html = render();
        let hero = position(&html, "Speeding Up Intelligence");
        let summary = position(&html, "Project Summary");
        let results = position(&html, "Speedup Results");
        let screenshots = position(&html, "Screenshots");
        let footer = position(&html, "Proudly created by Anshika Gaur");
        assert!(hero < summary);
        assert!(summary < results);
        assert!(results < screenshots);
        assert!(screenshots < footer);
    }

    #[test]
    fn hero_link_opens_repository_in_new_context() {
        let html = render();
        assert!(html.contains(&format!(r#"href="{REPOSITORY_URL}""#)));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("View on GitHub"));
    }

    #[test]
    fn hero_link_is_the_only_interactive_element() {
        let html = render();
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(!html.contains("<button"));
        assert!(!html.contains("<input"));
    }

    #[test]
    fn screenshots_render_in_grid_order() {
        let html = render();
        let positions: Vec<usize> = [
            r#"alt="OpenMP Snippet""#,
            r#"alt="Parallel Output""#,
            r#"alt="Serial Output""#,
            r#"alt="GitHub Push""#,
        ]
        .iter()
        .map(|alt| position(&html, alt))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<img ").count(), 4);
        assert!(html.contains(r#"src="/omp_snippet.png""#));
    }

    #[test]
    fn results_list_has_three_items() {
        let html = render();
        assert_eq!(html.matches("<li").count(), 3);
        assert!(html.contains("Without OpenMP: 402 ms"));
        assert!(html.contains("With OpenMP: 147 ms"));
        assert!(html.contains("Speedup: ~2.73×"));
    }

    #[test]
    fn footer_is_rendered_hidden() {
        let html = render();
        assert!(html.contains("opacity: 0; transform: translateY(40px);"));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render(), render());
    }
}
