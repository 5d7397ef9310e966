use actix_web::{HttpResponse, Responder};

use crate::services::catalog_service::CatalogService;

/*
    /api/activities
*/
pub async fn get_activities() -> impl Responder {
    HttpResponse::Ok().json(CatalogService::activities())
}
