use crate::domain::errors::DomainError;

const CNT_NEWS_SLUG: &str = "news_items_slug_key";
const CNT_TAG_SLUG: &str = "tags_slug_key";
const CNT_AUTHOR_NAME: &str = "author_refs_original_name_key";
const CNT_NEWS_HOLDER: &str = "news_items_holder_id_fkey";
const CNT_NEWS_AUTHOR: &str = "news_items_author_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_NEWS_SLUG => DomainError::Conflict("news slug already exists".into()),
                    CNT_TAG_SLUG => DomainError::Conflict("tag slug already exists".into()),
                    CNT_AUTHOR_NAME => {
                        DomainError::Conflict("author reference already exists".into())
                    }
                    CNT_NEWS_HOLDER => DomainError::NotFound("holder page not found".into()),
                    CNT_NEWS_AUTHOR => DomainError::NotFound("author reference not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
