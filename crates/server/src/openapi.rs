use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc { pub error: bool, pub message: String }

/// Any JSON object; `email` is expected and becomes the token's email claim.
#[derive(ToSchema)]
pub struct TokenRequest { pub email: String }

#[derive(ToSchema)]
pub struct TokenResponseDoc { pub token: String }

#[derive(ToSchema)]
pub struct ServiceSummaryDoc {
    pub title: String,
    pub price: String,
    pub service_id: String,
    pub img: String,
}

/// Bookings accept arbitrary extra keys; these are the ones the client app sends.
#[derive(ToSchema)]
pub struct BookingDoc {
    pub email: String,
    pub status: Option<String>,
    pub customer_name: Option<String>,
    pub service: Option<String>,
    pub service_id: Option<String>,
    pub date: Option<String>,
    pub price: Option<String>,
    pub img: Option<String>,
}

#[derive(ToSchema)]
pub struct StatusUpdateDoc { pub status: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct InsertAckDoc { pub acknowledged: bool, pub insertedId: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct DeleteAckDoc { pub acknowledged: bool, pub deletedCount: u64 }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct UpdateAckDoc {
    pub acknowledged: bool,
    pub matchedCount: u64,
    pub modifiedCount: u64,
    pub upsertedId: Option<String>,
    pub upsertedCount: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::jwt::issue,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::bookings::list,
        crate::routes::bookings::create,
        crate::routes::bookings::delete,
        crate::routes::bookings::update,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            TokenRequest,
            TokenResponseDoc,
            ServiceSummaryDoc,
            BookingDoc,
            StatusUpdateDoc,
            InsertAckDoc,
            DeleteAckDoc,
            UpdateAckDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "services"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;
