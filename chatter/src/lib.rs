//! A small chat bot that learns from the conversations it reads.
//!
//! Every message seen in a channel is stored as a reply to the message before
//! it in that channel. When asked something, the bot finds the known prompt
//! closest to the question and answers with what people most often said
//! after it.

use chrono::Utc;
use sqlx::{Row, SqliteConnection, SqlitePool};

use common::Error;

pub mod clean;
pub mod math;
mod similarity;

pub use clean::clean_message;

/// said when the bot knows nothing at all yet
pub const DEFAULT_RESPONSE: &str = "I have no idea what to say to that :sweat_smile:";

/// matches less similar than this aren't worth answering from
const MIN_SIMILARITY: f64 = 0.3;

/// how many of the most recent prompts a question is compared against
const MAX_PROMPTS: u32 = 5000;

#[derive(Clone)]
pub struct ChatBot {
    pool: SqlitePool,
}

impl ChatBot {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn last_statement(
        conn: &mut SqliteConnection,
        conversation: &str,
    ) -> Result<Option<String>, Error> {
        let row = sqlx::query(
            "SELECT `text` FROM `statements` WHERE `conversation` = ? ORDER BY `id` DESC LIMIT 1",
        )
        .bind(conversation)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(match row {
            Some(row) => Some(row.try_get("text")?),
            None => None,
        })
    }

    async fn store(
        conn: &mut SqliteConnection,
        conversation: &str,
        text: &str,
        in_response_to: Option<&str>,
    ) -> Result<(), Error> {
        sqlx::query(
            r#"
			INSERT INTO `statements` (`text`, `in_response_to`, `conversation`, `created_at`)
			VALUES (?, ?, ?, ?)
			"#,
        )
        .bind(text)
        .bind(in_response_to)
        .bind(conversation)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    async fn learn_on(
        conn: &mut SqliteConnection,
        conversation: &str,
        text: &str,
    ) -> Result<(), Error> {
        let previous = Self::last_statement(conn, conversation).await?;
        Self::store(conn, conversation, text, previous.as_deref()).await
    }

    /// remembers a message as the reply to whatever was last said in the conversation
    pub async fn learn(&self, conversation: &str, text: &str) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;
        Self::learn_on(&mut tx, conversation, text).await?;
        tx.commit().await?;
        Ok(())
    }

    /// distinct prompts, most recently answered first
    pub(crate) async fn recent_prompts(&self, limit: u32) -> Result<Vec<String>, Error> {
        let rows = sqlx::query(
            r#"
			SELECT `in_response_to` FROM `statements`
			WHERE `in_response_to` IS NOT NULL
			GROUP BY `in_response_to`
			ORDER BY MAX(`id`) DESC
			LIMIT ?
			"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        let mut prompts = vec![];
        for row in rows {
            prompts.push(row.try_get("in_response_to")?);
        }
        Ok(prompts)
    }

    /// the known prompt most similar to the text, with its similarity
    async fn best_match(&self, text: &str) -> Result<Option<(String, f64)>, Error> {
        let mut best: Option<(String, f64)> = None;
        for prompt in self.recent_prompts(MAX_PROMPTS).await? {
            let score = similarity::similarity(text, &prompt);
            if best.as_ref().map_or(true, |(_, s)| score > *s) {
                best = Some((prompt, score));
            }
        }
        Ok(best)
    }

    /// the reply people gave most often to the prompt
    pub(crate) async fn most_common_reply(&self, prompt: &str) -> Result<Option<String>, Error> {
        let row = sqlx::query(
            r#"
			SELECT `text`, COUNT(*) AS `uses` FROM `statements`
			WHERE `in_response_to` = ?
			GROUP BY `text`
			ORDER BY `uses` DESC, MAX(`id`) DESC
			LIMIT 1
			"#,
        )
        .bind(prompt)
        .fetch_optional(&self.pool)
        .await?;
        Ok(match row {
            Some(row) => Some(row.try_get("text")?),
            None => None,
        })
    }

    async fn random_statement(&self) -> Result<Option<String>, Error> {
        let row = sqlx::query("SELECT `text` FROM `statements` ORDER BY RANDOM() LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(match row {
            Some(row) => Some(row.try_get("text")?),
            None => None,
        })
    }

    async fn choose_reply(&self, text: &str) -> Result<String, Error> {
        if let Some(answer) = math::evaluate(text) {
            return Ok(answer);
        }
        if let Some((prompt, score)) = self.best_match(text).await? {
            if score >= MIN_SIMILARITY {
                if let Some(reply) = self.most_common_reply(&prompt).await? {
                    log::debug!("matched {prompt:?} ({score:.2})");
                    return Ok(reply);
                }
            }
        }
        Ok(self
            .random_statement()
            .await?
            .unwrap_or_else(|| DEFAULT_RESPONSE.to_owned()))
    }

    /// Answers the text, learning both the question and the answer.
    pub async fn respond(&self, conversation: &str, text: &str) -> Result<String, Error> {
        let reply = self.choose_reply(text).await?;
        let mut tx = self.pool.begin().await?;
        Self::learn_on(&mut tx, conversation, text).await?;
        Self::store(&mut tx, conversation, &reply, Some(text)).await?;
        tx.commit().await?;
        Ok(reply)
    }
}
