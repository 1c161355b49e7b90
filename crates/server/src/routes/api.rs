use actix_web::{post, web, HttpResponse};
use bookinfo_llm::RequestContext;
use std::sync::Arc;

use crate::state::AppState;
use crate::types::{LookupRequest, LookupResponse};

/// POST /api/lookup - Book information as JSON
///
/// Empty titles answer 400, an unreachable model server 503, other model failures 502.
#[post("/api/lookup")]
pub async fn lookup(
    req: web::Json<LookupRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let ctx = RequestContext::new(req.into_inner().title);
    let info = state.lookup.fetch(&ctx).await?;

    Ok(HttpResponse::Ok().json(LookupResponse::new(&ctx, info)))
}
