use sqlx::{Row, SqlitePool};

use common::Error;

/// Keyword explanations taught by users through !addis.
#[derive(Clone)]
pub struct Glossary {
    pool: SqlitePool,
}

impl Glossary {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// what the keyword was taught to mean, if anything
    pub async fn explain(&self, keyword: &str) -> Result<Option<String>, Error> {
        let row = sqlx::query("SELECT `meaning` FROM `glossary` WHERE `keyword` = ?")
            .bind(keyword.to_lowercase())
            .fetch_optional(&self.pool)
            .await?;
        Ok(match row {
            Some(row) => Some(row.try_get("meaning")?),
            None => None,
        })
    }

    /// stores a meaning, replacing any previous one
    pub async fn teach(&self, keyword: &str, meaning: &str) -> Result<(), Error> {
        sqlx::query(
            r#"
			INSERT INTO `glossary` (`keyword`, `meaning`)
			VALUES (?, ?)
			ON CONFLICT (`keyword`) DO UPDATE SET `meaning` = excluded.`meaning`
			"#,
        )
        .bind(keyword.to_lowercase())
        .bind(meaning)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// returns false if the keyword was never known
    pub async fn forget(&self, keyword: &str) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM `glossary` WHERE `keyword` = ?")
            .bind(keyword.to_lowercase())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_pool;

    #[tokio::test]
    async fn teach_explain_forget() {
        let glossary = Glossary::new(memory_pool().await.unwrap());

        assert_eq!(glossary.explain("kvk").await.unwrap(), None);

        glossary.teach("KvK", "kingdom versus kingdom").await.unwrap();
        assert_eq!(
            glossary.explain("kvk").await.unwrap().as_deref(),
            Some("kingdom versus kingdom")
        );

        glossary.teach("kvk", "the weekly war").await.unwrap();
        assert_eq!(
            glossary.explain("KVK").await.unwrap().as_deref(),
            Some("the weekly war")
        );

        assert!(glossary.forget("kvk").await.unwrap());
        assert!(!glossary.forget("kvk").await.unwrap());
        assert_eq!(glossary.explain("kvk").await.unwrap(), None);
    }
}
