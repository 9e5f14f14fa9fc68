use crate::auth::password::verify_password;
use crate::model::user::User;
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

#[derive(Deserialize)]
pub struct LoginRequest {
    // Absent fields fall back to "" and fail the check like any other
    // wrong credential, instead of rejecting the body outright.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /login — single admin credential check, no session or token.
#[instrument(name = "login", skip(pool, body), fields(username = %body.username))]
pub async fn login(body: web::Json<LoginRequest>, pool: web::Data<SqlitePool>) -> impl Responder {
    debug!("Fetching user from database");

    let db_user = match sqlx::query_as::<_, User>(
        "SELECT id, username, password FROM users WHERE username = ?",
    )
    .bind(&body.username)
    .fetch_optional(pool.get_ref())
    .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!("Invalid credentials: user not found");
            return HttpResponse::Unauthorized().json(json!({
                "message": "Invalid credentials"
            }));
        }
        Err(e) => {
            error!(error = %e, "Database error while fetching user");
            return HttpResponse::InternalServerError().body("Internal Server Error");
        }
    };

    if verify_password(&body.password, &db_user.password).is_err() {
        info!("Invalid credentials: password mismatch");
        return HttpResponse::Unauthorized().json(json!({
            "message": "Invalid credentials"
        }));
    }

    info!("Login successful");

    HttpResponse::Ok().json(json!({
        "message": "Login success"
    }))
}
