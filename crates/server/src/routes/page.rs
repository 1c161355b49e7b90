use actix_web::{get, post, web, HttpResponse};
use bookinfo_llm::RequestContext;
use std::sync::Arc;

use crate::page::render_page;
use crate::state::AppState;
use crate::types::LookupForm;

/// GET / - Empty search page
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("", None))
}

/// POST /lookup - Form submission, rendered back into the page
#[post("/lookup")]
pub async fn lookup(
    form: web::Form<LookupForm>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    let ctx = RequestContext::new(form.into_inner().book_title);
    let outcome = state.lookup.submit(&ctx).await;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&ctx.title, Some(&outcome)))
}
