use std::env;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_planner_api::routes;
use trip_planner_api::services::trip_service::TripPlanner;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    // One planner per process: the server instance is the planning session.
    let planner = web::Data::new(Mutex::new(TripPlanner::new()));

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(planner.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/activities",
                        web::get().to(routes::activity::get_activities),
                    )
                    .service(
                        web::scope("/trip")
                            .route("/summary", web::get().to(routes::trip::get_summary))
                            .route("/activities", web::post().to(routes::trip::add_activity))
                            .route(
                                "/activities/{name}",
                                web::delete().to(routes::trip::remove_activity),
                            )
                            .route("/duration", web::put().to(routes::trip::update_duration))
                            .route(
                                "/employees/count",
                                web::put().to(routes::trip::update_employee_count),
                            )
                            .route(
                                "/employees/category",
                                web::put().to(routes::trip::update_employee_category),
                            ),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
