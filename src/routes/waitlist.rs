//! src/routes/waitlist.rs
use crate::store::WaitlistStore;
use crate::submission::{self, Acceptance, Outcome, Rejection};
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct WaitlistForm {
    pub email: String,
}

/// Transient notification rendered by the landing page.
#[derive(serde::Serialize)]
struct Notification {
    status: &'static str,
    message: &'static str,
}

impl Notification {
    fn new(status: &'static str, message: &'static str) -> Self {
        Self { status, message }
    }
}

#[tracing::instrument(
    name = "Joining the waitlist",
    skip(form, store),
    fields(
        request_id = %Uuid::new_v4(),
        email = %form.email
    )
)]
pub async fn join(
    form: web::Form<WaitlistForm>,
    store: web::Data<dyn WaitlistStore>,
) -> HttpResponse {
    match submission::submit(store.get_ref(), &form.email).await {
        Outcome::Rejected(Rejection::Empty) => HttpResponse::BadRequest().json(
            Notification::new("warning", "Please enter your email address"),
        ),
        Outcome::Rejected(Rejection::InvalidSyntax) => HttpResponse::BadRequest().json(
            Notification::new("warning", "Please enter a valid email address"),
        ),
        Outcome::Accepted(Acceptance::New) => HttpResponse::Ok().json(Notification::new(
            "success",
            "You're on the list! We'll notify you when we launch.",
        )),
        Outcome::Accepted(Acceptance::Duplicate) => HttpResponse::Ok().json(Notification::new(
            "info",
            "You're already on the waitlist!",
        )),
        Outcome::Failed(_) => HttpResponse::InternalServerError().json(Notification::new(
            "error",
            "Something went wrong. Please try again.",
        )),
    }
}
