use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Mutex;

use crate::models::activity::Activity;
use crate::services::trip_service::{TripError, TripPlanner, TripSummary};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub message: String,
    pub summary: TripSummary,
}

#[derive(Debug, Serialize)]
pub struct RemovalResponse {
    pub message: String,
    pub removed: Option<Activity>,
    pub summary: TripSummary,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDurationRequest {
    pub hours: f32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeCountRequest {
    #[serde(
        deserialize_with = "deserialize_lenient_count",
        default = "default_employee_count"
    )]
    pub count: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeCategoryRequest {
    pub category: String,
}

fn default_employee_count() -> i64 {
    1
}

// Custom deserializer for the headcount field: the input box can send a
// number, a numeric string, or garbage. Anything unusable falls back to 1.
fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f as i64)
            } else {
                Ok(1)
            }
        }
        serde_json::Value::String(s) => Ok(s.trim().parse().unwrap_or(1)),
        _ => Ok(1),
    }
}

fn rejection_response(err: &TripError) -> HttpResponse {
    let message = err.to_string();
    match err {
        TripError::DuplicateActivity(_) => HttpResponse::Conflict().json(ErrorResponse {
            error: "duplicate_activity".to_string(),
            message,
        }),
        TripError::DurationExceeded { .. } => HttpResponse::Conflict().json(ErrorResponse {
            error: "duration_exceeded".to_string(),
            message,
        }),
        TripError::UnknownCategory(_) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "unknown_category".to_string(),
            message,
        }),
    }
}

/*
    /api/trip/summary
*/
pub async fn get_summary(data: web::Data<Mutex<TripPlanner>>) -> impl Responder {
    let planner = match data.lock() {
        Ok(planner) => planner,
        Err(err) => {
            eprintln!("Trip state lock poisoned: {:?}", err);
            return HttpResponse::InternalServerError().body("Trip state unavailable.");
        }
    };

    HttpResponse::Ok().json(planner.summary())
}

/*
    POST /api/trip/activities
*/
pub async fn add_activity(
    data: web::Data<Mutex<TripPlanner>>,
    input: web::Json<Activity>,
) -> impl Responder {
    let mut planner = match data.lock() {
        Ok(planner) => planner,
        Err(err) => {
            eprintln!("Trip state lock poisoned: {:?}", err);
            return HttpResponse::InternalServerError().body("Trip state unavailable.");
        }
    };

    let activity = input.into_inner();
    let name = activity.name.clone();

    match planner.add_activity(activity) {
        Ok(summary) => HttpResponse::Ok().json(TripResponse {
            message: format!("{} added to your trip!", name),
            summary,
        }),
        Err(err) => rejection_response(&err),
    }
}

/*
    DELETE /api/trip/activities/{name}
*/
pub async fn remove_activity(
    data: web::Data<Mutex<TripPlanner>>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();

    let mut planner = match data.lock() {
        Ok(planner) => planner,
        Err(err) => {
            eprintln!("Trip state lock poisoned: {:?}", err);
            return HttpResponse::InternalServerError().body("Trip state unavailable.");
        }
    };

    let (removed, summary) = planner.remove_activity(&name);
    let message = match &removed {
        Some(activity) => format!("{} removed from your trip!", activity.name),
        None => format!("{} was not in your trip.", name),
    };

    HttpResponse::Ok().json(RemovalResponse {
        message,
        removed,
        summary,
    })
}

/*
    PUT /api/trip/duration
*/
pub async fn update_duration(
    data: web::Data<Mutex<TripPlanner>>,
    input: web::Json<UpdateDurationRequest>,
) -> impl Responder {
    let mut planner = match data.lock() {
        Ok(planner) => planner,
        Err(err) => {
            eprintln!("Trip state lock poisoned: {:?}", err);
            return HttpResponse::InternalServerError().body("Trip state unavailable.");
        }
    };

    let summary = planner.set_duration_cap(input.hours);
    let cap_hours = planner.config().duration_cap_hours;
    let message = if cap_hours == 0.0 {
        "Trip duration set to unlimited.".to_string()
    } else {
        format!("Trip duration set to {} hours.", cap_hours)
    };

    // over_capacity on the summary tells the front-end to show its warning;
    // already-selected activities are intentionally left alone.
    HttpResponse::Ok().json(TripResponse { message, summary })
}

/*
    PUT /api/trip/employees/count
*/
pub async fn update_employee_count(
    data: web::Data<Mutex<TripPlanner>>,
    input: web::Json<UpdateEmployeeCountRequest>,
) -> impl Responder {
    let mut planner = match data.lock() {
        Ok(planner) => planner,
        Err(err) => {
            eprintln!("Trip state lock poisoned: {:?}", err);
            return HttpResponse::InternalServerError().body("Trip state unavailable.");
        }
    };

    let summary = planner.set_employee_count(input.count);
    let message = format!(
        "Employee count set to {}.",
        planner.config().employee_count
    );

    HttpResponse::Ok().json(TripResponse { message, summary })
}

/*
    PUT /api/trip/employees/category
*/
pub async fn update_employee_category(
    data: web::Data<Mutex<TripPlanner>>,
    input: web::Json<UpdateEmployeeCategoryRequest>,
) -> impl Responder {
    let mut planner = match data.lock() {
        Ok(planner) => planner,
        Err(err) => {
            eprintln!("Trip state lock poisoned: {:?}", err);
            return HttpResponse::InternalServerError().body("Trip state unavailable.");
        }
    };

    match planner.set_employee_category(&input.category) {
        Ok(summary) => HttpResponse::Ok().json(TripResponse {
            message: format!("{} pricing applied.", input.category),
            summary,
        }),
        Err(err) => rejection_response(&err),
    }
}
