use crate::helpers::MessageResponse;
use actix_web::{get, Responder};

#[get("/")]
pub async fn index() -> impl Responder {
    MessageResponse::ok("Marketing Content Generator API is running!")
}
