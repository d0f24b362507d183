use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, Eq, TS, EnumString, Display)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub class_name: Option<String>, // Class label (kelas); only meaningful for students
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub class_name: Option<String>,
}

impl CreateUser {
    pub fn student(name: impl Into<String>, email: impl Into<String>, class_name: Option<&str>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: UserRole::Student,
            class_name: class_name.map(str::to_string),
        }
    }
}

impl User {
    pub async fn create(pool: &SqlitePool, data: &CreateUser) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (id, name, email, role, class_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, role, class_name, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.role.clone())
        .bind(&data.class_name)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_role(pool: &SqlitePool, role: UserRole) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, role, class_name, created_at, updated_at
            FROM users
            WHERE role = $1
            ORDER BY name ASC"#,
        )
        .bind(role)
        .fetch_all(pool)
        .await
    }

    /// Distinct, non-null class labels of all students. Order is unspecified.
    pub async fn find_distinct_student_classes(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"SELECT DISTINCT class_name
               FROM users
               WHERE role = $1
                 AND class_name IS NOT NULL"#,
        )
        .bind(UserRole::Student)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(|(class_name,)| class_name).collect())
    }
}
