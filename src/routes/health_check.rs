use actix_web::HttpResponse;

/// `GET /health_check`
///
/// 200, empty body. Never touches the form provider.
pub async fn health_check() -> HttpResponse { HttpResponse::Ok().finish() }
