use sqlx::SqlitePool;

/// A partial-update statement: SET clause over the supplied columns only,
/// keyed by integer id bound last. Column names come from the caller's
/// fixed field list, never from client input.
#[derive(Debug)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<String>,
}

/// Build `UPDATE <table> SET col = ?, ... WHERE id = ?` from the fields
/// present in a patch. Returns None when the patch supplies nothing.
pub fn build_update_sql(table: &str, fields: &[(&str, Option<&str>)]) -> Option<SqlUpdate> {
    let supplied: Vec<(&str, &str)> = fields
        .iter()
        .filter_map(|(col, val)| val.map(|v| (*col, v)))
        .collect();

    if supplied.is_empty() {
        return None;
    }

    let set_clause = supplied
        .iter()
        .map(|(col, _)| format!("{} = ?", col))
        .collect::<Vec<_>>()
        .join(", ");

    Some(SqlUpdate {
        sql: format!("UPDATE {} SET {} WHERE id = ?", table, set_clause),
        values: supplied.iter().map(|(_, v)| v.to_string()).collect(),
    })
}

/// Execute the update, returning the number of rows affected.
pub async fn execute_update(
    pool: &SqlitePool,
    update: SqlUpdate,
    id: i64,
) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = query.bind(value);
    }
    query = query.bind(id);

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_set_clause_for_supplied_fields_only() {
        let update = build_update_sql(
            "absensi",
            &[
                ("status", Some("late")),
                ("time_out", None),
                ("date", Some("2024-01-01")),
            ],
        )
        .unwrap();

        assert_eq!(
            update.sql,
            "UPDATE absensi SET status = ?, date = ? WHERE id = ?"
        );
        assert_eq!(update.values, vec!["late", "2024-01-01"]);
    }

    #[test]
    fn empty_patch_builds_nothing() {
        assert!(build_update_sql("absensi", &[("status", None)]).is_none());
        assert!(build_update_sql("absensi", &[]).is_none());
    }
}
