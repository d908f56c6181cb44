use sqlx::{Row, SqlitePool};

use common::Error;

/// Users who asked to be DM'd when an in-game store refreshes.
#[derive(Clone)]
pub struct Subscriptions {
    pool: SqlitePool,
}

impl Subscriptions {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// flips the user's subscription, returns true if they are now subscribed
    pub async fn toggle(&self, event: &str, uid: u64) -> Result<bool, Error> {
        let mut tx = self.pool.begin().await?;
        let removed =
            sqlx::query("DELETE FROM `store_subscriptions` WHERE `event` = ? AND `uid` = ?")
                .bind(event)
                .bind(uid.to_string())
                .execute(&mut *tx)
                .await?
                .rows_affected();
        if removed == 0 {
            sqlx::query("INSERT INTO `store_subscriptions` (`event`, `uid`) VALUES (?, ?)")
                .bind(event)
                .bind(uid.to_string())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(removed == 0)
    }

    pub async fn subscribers(&self, event: &str) -> Result<Vec<u64>, Error> {
        let rows = sqlx::query("SELECT `uid` FROM `store_subscriptions` WHERE `event` = ?")
            .bind(event)
            .fetch_all(&self.pool)
            .await?;
        let mut uids = vec![];
        for row in rows {
            let uid: String = row.try_get("uid")?;
            uids.push(uid.parse()?);
        }
        Ok(uids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_pool;

    #[tokio::test]
    async fn toggling_subscribes_and_unsubscribes() {
        let subs = Subscriptions::new(memory_pool().await.unwrap());

        assert!(subs.toggle("emblem", 1).await.unwrap());
        assert!(subs.toggle("emblem", 2).await.unwrap());
        assert!(subs.toggle("mystical", 1).await.unwrap());

        let mut emblem = subs.subscribers("emblem").await.unwrap();
        emblem.sort();
        assert_eq!(emblem, vec![1, 2]);

        assert!(!subs.toggle("emblem", 1).await.unwrap());
        assert_eq!(subs.subscribers("emblem").await.unwrap(), vec![2]);
        assert_eq!(subs.subscribers("mystical").await.unwrap(), vec![1]);
        assert!(subs.subscribers("arena").await.unwrap().is_empty());
    }
}
