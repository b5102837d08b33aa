use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    dev::{fn_service, ServiceRequest, ServiceResponse},
    middleware::{self, Condition},
    web, App, Error, HttpServer,
};
use clap::Parser;
use std::io;
use store::store::store::Store;

use crate::routes::unknown_endpoint;

mod error;
mod routes;

/// 📞 Phonebook REST server, exposes person records over a JSON API and serves
/// the frontend build as static assets
#[derive(Parser, Debug)]
struct Cli {
    /// Port the server will listen on, also read from the PORT environment variable
    #[clap(short, long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Address the server will listen on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Directory the static frontend assets are served from
    #[clap(long, default_value = "dist")]
    static_dir: std::path::PathBuf,

    /// Log every HTTP request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let person_store = Store::new().run();

    // Set up Ctrl-C handler
    let shutdown_store = person_store.clone();

    ctrlc::set_handler(move || {
        let shutdown_response = shutdown_store
            .send_shutdown_request()
            .expect("store should acknowledge the shutdown request");

        log::info!("Shutting down server: {}", shutdown_response);
    })
    .expect("Error setting Ctrl-C handler");

    log::info!("starting HTTP server on port {}.", args.port);

    // Start HTTP server. Static assets are registered after the API routes so
    // /api and /info always win, anything neither matches ends up at the
    // unknown endpoint handler.
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(person_store.clone()))
            .configure(routes::configure)
            .service(
                Files::new("/", args.static_dir.clone())
                    .index_file("index.html")
                    .default_handler(fn_service(|req: ServiceRequest| async {
                        let (req, _) = req.into_parts();
                        let response = unknown_endpoint().await;

                        Ok::<_, Error>(ServiceResponse::new(req, response))
                    })),
            )
            .default_service(web::to(unknown_endpoint))
            .wrap(Cors::permissive())
            .wrap(Condition::new(args.log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
