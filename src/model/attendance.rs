use serde::{Deserialize, Serialize};

/// One check-in/out entry. Every field besides `id` is a free-form string;
/// the store does not validate dates or times.
#[derive(Debug, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub student_id: String,
    pub student_name: String,
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    pub status: String,
}
