//! Subject Repository Implementation
//!
//! PostgreSQL implementation of the SubjectRepository trait. Subjects are
//! loaded in one query and their questions in a second one.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Question, Subject, SubjectRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct SubjectRow {
    id: i64,
    name: String,
}

#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    subject_id: i64,
    tutor_id: i64,
    content: String,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            id: self.id,
            subject_id: self.subject_id,
            tutor_id: self.tutor_id,
            content: self.content,
            tutor_name: None,
        }
    }
}

/// Load subjects with their questions, either the whole catalog (`None`) or
/// only the subjects a user is enrolled in.
pub(crate) async fn load_subjects(
    pool: &PgPool,
    user_id: Option<i64>,
) -> Result<Vec<Subject>, AppError> {
    let subjects = match user_id {
        Some(user_id) => {
            sqlx::query_as::<_, SubjectRow>(
                r#"
                SELECT s.id, s.name
                FROM subjects s
                JOIN user_subjects us ON us.subject_id = s.id
                WHERE us.user_id = $1
                ORDER BY s.id
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, SubjectRow>(r#"SELECT id, name FROM subjects ORDER BY id"#)
                .fetch_all(pool)
                .await?
        }
    };

    if subjects.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = subjects.iter().map(|s| s.id).collect();
    let questions = sqlx::query_as::<_, QuestionRow>(
        r#"
        SELECT id, subject_id, tutor_id, content
        FROM questions
        WHERE subject_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    Ok(assemble(subjects, questions))
}

fn assemble(subjects: Vec<SubjectRow>, questions: Vec<QuestionRow>) -> Vec<Subject> {
    let mut by_subject: HashMap<i64, Vec<Question>> = HashMap::new();
    for row in questions {
        by_subject
            .entry(row.subject_id)
            .or_default()
            .push(row.into_question());
    }

    subjects
        .into_iter()
        .map(|s| Subject {
            questions: by_subject.remove(&s.id).unwrap_or_default(),
            id: s.id,
            name: s.name,
        })
        .collect()
}

/// PostgreSQL subject repository implementation.
#[derive(Clone)]
pub struct PgSubjectRepository {
    pool: PgPool,
}

impl PgSubjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectRepository for PgSubjectRepository {
    async fn find_all(&self) -> Result<Vec<Subject>, AppError> {
        load_subjects(&self.pool, None).await
    }
}
