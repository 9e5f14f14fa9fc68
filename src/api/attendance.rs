use crate::{
    model::attendance::Attendance,
    utils::db_utils::{build_update_sql, execute_update},
};
use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::error;

/// Create body: every field optional, absent ones stored as "".
#[derive(Deserialize)]
pub struct CreateAttendance {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time_in: String,
    #[serde(default)]
    pub time_out: String,
    #[serde(default)]
    pub status: String,
}

/// Update body: only supplied fields are written.
#[derive(Deserialize)]
pub struct UpdateAttendance {
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub date: Option<String>,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub status: Option<String>,
}

/// POST /absensi
pub async fn create_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAttendance>,
) -> actix_web::Result<impl Responder> {
    let result = sqlx::query(
        r#"
        INSERT INTO absensi (student_id, student_name, date, time_in, time_out, status)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.student_id)
    .bind(&payload.student_name)
    .bind(&payload.date)
    .bind(&payload.time_in)
    .bind(&payload.time_out)
    .bind(&payload.status)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to create attendance record");
        ErrorInternalServerError("Internal Server Error")
    })?;

    let payload = payload.into_inner();
    let record = Attendance {
        id: result.last_insert_rowid(),
        student_id: payload.student_id,
        student_name: payload.student_name,
        date: payload.date,
        time_in: payload.time_in,
        time_out: payload.time_out,
        status: payload.status,
    };

    Ok(HttpResponse::Created().json(record))
}

/// GET /absensi
pub async fn list_attendance(pool: web::Data<SqlitePool>) -> actix_web::Result<impl Responder> {
    let records = sqlx::query_as::<_, Attendance>("SELECT * FROM absensi ORDER BY id")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch attendance records");
            ErrorInternalServerError("Internal Server Error")
        })?;

    Ok(HttpResponse::Ok().json(records))
}

/// GET /absensi/{id}
pub async fn get_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    match fetch_by_id(pool.get_ref(), id).await? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound().body("Not Found")),
    }
}

/// PUT /absensi/{id} — partial update, unsupplied fields stay untouched.
/// An empty patch writes nothing and returns the record as-is.
pub async fn update_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<UpdateAttendance>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let fields = [
        ("student_id", payload.student_id.as_deref()),
        ("student_name", payload.student_name.as_deref()),
        ("date", payload.date.as_deref()),
        ("time_in", payload.time_in.as_deref()),
        ("time_out", payload.time_out.as_deref()),
        ("status", payload.status.as_deref()),
    ];

    if let Some(update) = build_update_sql("absensi", &fields) {
        let affected = execute_update(pool.get_ref(), update, id).await.map_err(|e| {
            error!(error = %e, id, "Failed to update attendance record");
            ErrorInternalServerError("Internal Server Error")
        })?;

        if affected == 0 {
            return Ok(HttpResponse::NotFound().body("Not Found"));
        }
    }

    match fetch_by_id(pool.get_ref(), id).await? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound().body("Not Found")),
    }
}

/// DELETE /absensi/{id}
pub async fn delete_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM absensi WHERE id = ?")
        .bind(id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, id, "Failed to delete attendance record");
            ErrorInternalServerError("Internal Server Error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().body("Not Found"));
    }

    Ok(HttpResponse::Ok().body("Deleted"))
}

async fn fetch_by_id(pool: &SqlitePool, id: i64) -> actix_web::Result<Option<Attendance>> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM absensi WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            error!(error = %e, id, "Failed to fetch attendance record");
            ErrorInternalServerError("Internal Server Error")
        })
}
