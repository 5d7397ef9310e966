use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Mutex;

use trip_planner_api::routes;
use trip_planner_api::services::trip_service::TripPlanner;

pub struct TestApp {
    pub planner: web::Data<Mutex<TripPlanner>>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            planner: web::Data::new(Mutex::new(TripPlanner::new())),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(self.planner.clone())
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
    }
}

#[allow(dead_code)]
pub fn activity_json(name: &str, duration_hours: f32, base_cost: u32) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "duration_hours": duration_hours,
        "base_cost": base_cost,
    })
}
