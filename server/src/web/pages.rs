// server/src/web/pages.rs

//! HTML pages. The markup is compiled into the binary; the pages call the
//! JSON API from the browser through `/static/script.js`.

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const ADD_PRODUCT_HTML: &str = include_str!("../../templates/add_product.html");
const STATS_HTML: &str = include_str!("../../templates/stats.html");
const SCRIPT_JS: &str = include_str!("../../static/script.js");

fn html(body: &'static str) -> HttpResponse {
  HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

pub async fn index_page() -> HttpResponse {
  html(INDEX_HTML)
}

pub async fn add_product_page() -> HttpResponse {
  html(ADD_PRODUCT_HTML)
}

pub async fn stats_page() -> HttpResponse {
  html(STATS_HTML)
}

pub async fn script_asset() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("application/javascript; charset=utf-8")
    .body(SCRIPT_JS)
}
