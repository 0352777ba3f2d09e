pub mod views;

use crate::application::engine::PayoutQueryEngine;
use crate::domain::payout::{Currency, MinorUnits, NewPayout};
use crate::domain::query::PayoutQuery;
use crate::error::PayoutError;
use actix_web::http::{Method, StatusCode};
use actix_web::web::{self, Data, Json, Path, Query};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use views::{ApiResponse, BalanceView, CreatePayoutBody, ErrorBody, PayoutListView, PayoutView};

/// Registers every route plus the error handlers that keep deserialization
/// failures in the same response envelope as handler errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::resource("/balance")
                .route(web::get().to(get_balance))
                .default_service(web::route().to(fallback)),
        )
        .service(
            web::resource("/payouts")
                .route(web::get().to(list_payouts))
                .route(web::post().to(create_payout))
                .default_service(web::route().to(fallback)),
        )
        .service(
            web::resource("/payouts/{id}")
                .route(web::get().to(get_payout))
                .default_service(web::route().to(fallback)),
        )
        .default_service(web::route().to(fallback));
}

async fn get_balance(engine: Data<PayoutQueryEngine>) -> Result<HttpResponse, PayoutError> {
    let balance = engine.balance().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(BalanceView::from(&balance))))
}

async fn list_payouts(
    engine: Data<PayoutQueryEngine>,
    query: Query<PayoutQuery>,
) -> Result<HttpResponse, PayoutError> {
    let page = engine.list_payouts(&query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(PayoutListView::from(&page))))
}

async fn create_payout(
    engine: Data<PayoutQueryEngine>,
    body: Option<Json<CreatePayoutBody>>,
) -> Result<HttpResponse, PayoutError> {
    let Some(body) = body else {
        return Err(PayoutError::Validation(
            "Request body is required".to_string(),
        ));
    };
    let body = body.into_inner();

    let (amount, currency) = match (body.amount, body.currency) {
        (Some(amount), Some(currency)) if amount != 0 => (amount, currency),
        _ => {
            return Err(PayoutError::Validation(
                "Amount and currency are required".to_string(),
            ));
        }
    };

    let new = NewPayout {
        amount: MinorUnits::new(amount)?,
        currency: Currency::new(currency),
        method: body.method.unwrap_or_default(),
        description: body.description,
        statement_descriptor: body.statement_descriptor,
    };
    let payout = engine.create_payout(new).await?;
    log::info!(
        "created payout {} for {}",
        payout.id,
        crate::domain::display::format_currency(payout.amount, &payout.currency)
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        PayoutView::from(&payout),
        "Payout created successfully",
    )))
}

async fn get_payout(
    engine: Data<PayoutQueryEngine>,
    id: Path<String>,
) -> Result<HttpResponse, PayoutError> {
    match engine.get_payout(&id).await? {
        Some(payout) => Ok(HttpResponse::Ok().json(ApiResponse::ok(PayoutView::from(&payout)))),
        None => Err(PayoutError::NotFound("Payout not found".to_string())),
    }
}

/// Unrouted requests: bare OPTIONS answers 200 (preflight), everything else
/// gets the 404 body the dashboard expects.
async fn fallback(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        HttpResponse::Ok().json(serde_json::json!({ "success": true }))
    } else {
        HttpResponse::NotFound().json(ErrorBody::new("Route not found"))
    }
}

fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let body = ErrorBody::new(err.to_string());
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}

impl ResponseError for PayoutError {
    fn status_code(&self) -> StatusCode {
        match self {
            PayoutError::Validation(_) => StatusCode::BAD_REQUEST,
            PayoutError::NotFound(_) => StatusCode::NOT_FOUND,
            PayoutError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            PayoutError::Validation(msg) | PayoutError::NotFound(msg) => ErrorBody::new(msg.clone()),
            PayoutError::Upstream(_) => {
                // The cause stays in the logs; callers get a generic message.
                log::error!("request failed: {self}");
                ErrorBody::new("Internal server error")
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
