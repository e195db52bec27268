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

use crate::errors::PortfolioError;
use leptos::*;
#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

// Renders errors collected by an error boundary or handed in from the server.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(e), _) => create_rw_signal(e),
        (None, Some(e)) => e,
        (None, None) => create_rw_signal(Errors::default()),
    };

    // Get Errors from Signal
    // Downcast lets us take a type that implements `std::error::Error`
    let errors: Vec<PortfolioError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<PortfolioError>().cloned())
        .collect();

    // Only the status of the first error reaches the response
    #[cfg(feature = "ssr")]
    {
        let response = use_context::<ResponseOptions>();
        if let (Some(response), Some(first)) = (response, errors.first()) {
            response.set_status(first.status_code());
        }
    }

    let title = if errors.len() > 1 { "Errors" } else { "Error" };

    view! {
        <main class="bg-white text-gray-900 p-6 space-y-6 text-center">
            <h1 class="text-4xl font-bold">{title}</h1>
            <For
                each=move || { errors.clone().into_iter().enumerate() }
                key=|(index, _error)| *index
                children=move |(_, error)| {
                    let error_string = error.to_string();
                    let error_code = error.status_code();
                    view! {
                        <h2 class="text-2xl font-semibold">{error_code.to_string()}</h2>
                        <p class="text-lg text-gray-600">"Error: " {error_string}</p>
                    }
                }
            />
            <a href="/" class="underline">"Back to the portfolio"</a>
        </main>
    }
}
