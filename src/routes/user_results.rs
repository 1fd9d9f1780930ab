use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::user_result_handler;
use crate::middleware::session::SessionClaims;

/// Results of the caller's own votes (requires a session)
pub async fn get_user_results(
    pool: web::Data<PgPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    user_result_handler::get_user_results(pool, claims).await
}

/// Results of every user's votes
#[get("/user-results/all")]
async fn get_all_user_results(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    user_result_handler::get_all_user_results(pool).await
}
