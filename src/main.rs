use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(feature = "ssr")] {
        use leptos::*;
        use axum::{
            routing::post,
            Router,
        };
        use hpc_portfolio::app::*;
        use hpc_portfolio::assets::verify_manifest;
        use hpc_portfolio::fallback::file_and_error_handler;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use tower_http::compression::CompressionLayer;

        #[tokio::main]
        async fn main() {
            if let Err(e) = simple_logger::init_with_level(log::Level::Info) {
                eprintln!("couldn't initialize logging: {e}");
            }

            let conf = match get_configuration(None).await {
                Ok(conf) => conf,
                Err(e) => {
                    log::error!("failed to read leptos configuration: {e}");
                    std::process::exit(1);
                }
            };
            let leptos_options = conf.leptos_options;
            let addr = leptos_options.site_addr;
            let routes = generate_route_list(App);

            // Missing screenshots still render as alt text, so only warn.
            if let Err(missing) = verify_manifest(&leptos_options.site_root) {
                for err in missing {
                    log::warn!("{err}");
                }
            }

            let app = Router::new()
                .route("/api/*fn_name", post(leptos_axum::handle_server_fns))
                .leptos_routes(&leptos_options, routes, App)
                .fallback(file_and_error_handler)
                .with_state(leptos_options)
                .layer(CompressionLayer::new());

            log::info!("listening on http://{}", &addr);
            if let Err(e) = axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await
            {
                log::error!("server error: {e}");
                std::process::exit(1);
            }
        }
    } else if #[cfg(feature = "csr")] {
        use hpc_portfolio::app::App;

        pub fn main() {
            _ = console_log::init_with_level(log::Level::Debug);
            console_error_panic_hook::set_once();
            leptos::mount_to_body(App);
        }
    } else {
        // the hydrate bundle is driven from `hydrate()` in lib.rs
        pub fn main() {}
    }
}
