use crate::components::Card::*;
use crate::content::{BenchmarkResult, RESULTS_HEADING, SUMMARY, TRAINING_BENCHMARK};
use leptos::*;

#[component]
pub fn SummaryCards() -> impl IntoView {
    view! {
        <section class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <Card>
                <CardContent>
                    <h2 class="text-2xl font-semibold">{SUMMARY.heading}</h2>
                    <p>{SUMMARY.body}</p>
                </CardContent>
            </Card>

            <Card>
                <CardContent>
                    <h2 class="text-2xl font-semibold">{RESULTS_HEADING}</h2>
                    <ResultsList results=TRAINING_BENCHMARK.results()/>
                </CardContent>
            </Card>
        </section>
    }
}

#[component]
fn ResultsList(results: [BenchmarkResult; 3]) -> impl IntoView {
    view! {
        <ul class="list-disc list-inside">
            {results
                .into_iter()
                .map(|result| view! { <li>{result.to_string()}</li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}
