//! Single-writer actor serializing every database write.
//!
//! SQLite allows one writer at a time. Routing writes through one task that
//! owns one connection avoids `SQLITE_BUSY` between pooled connections.

use std::any::Any;

use diesel::SqliteConnection;
use log::error;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use salti_core::errors::{DatabaseError, Error, Result};

type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type AnyBox = Box<dyn Any + Send + 'static>;
type Envelope = (Job<AnyBox>, oneshot::Sender<Result<AnyBox>>);

const QUEUE_CAPACITY: usize = 1024;

fn writer_gone() -> Error {
    Error::Database(DatabaseError::ConnectionFailed(
        "database writer is not running".to_string(),
    ))
}

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Runs `job` inside an immediate transaction on the writer's connection.
    ///
    /// The transaction rolls back if the job returns an error.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        let erased: Job<AnyBox> = Box::new(move |conn| job(conn).map(|v| Box::new(v) as AnyBox));
        self.tx
            .send((erased, ret_tx))
            .await
            .map_err(|_| writer_gone())?;

        let boxed = ret_rx.await.map_err(|_| writer_gone())??;
        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("writer returned an unexpected result type".to_string()))
    }
}

/// Spawns the writer task. It holds one pooled connection for its lifetime and
/// stops once every [`WriteHandle`] is dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Writer actor could not acquire a connection: {}", e);
                let message = e.to_string();
                while let Some((_, reply_tx)) = rx.recv().await {
                    let _ = reply_tx.send(Err(Error::Database(
                        DatabaseError::ConnectionFailed(message.clone()),
                    )));
                }
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<AnyBox> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The caller may have gone away (cancelled request); nothing to do then.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, get_connection, run_migrations};
    use diesel::prelude::*;
    use diesel::sql_types::BigInt;
    use salti_core::errors::ValidationError;
    use tempfile::tempdir;

    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = BigInt)]
        n: i64,
    }

    fn count_saves(pool: &DbPool) -> i64 {
        let mut conn = get_connection(pool).unwrap();
        diesel::sql_query("SELECT COUNT(*) AS n FROM save_events")
            .get_result::<Count>(&mut conn)
            .unwrap()
            .n
    }

    #[tokio::test]
    async fn test_failed_job_rolls_back() {
        let temp_dir = tempdir().unwrap();
        let pool = create_pool(&temp_dir.path().join("test.db").to_string_lossy()).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer((*pool).clone());

        let result: Result<()> = writer
            .exec(|conn| {
                diesel::sql_query(
                    "INSERT INTO save_events (id, user_id, amount, saved_on) \
                     VALUES ('evt-1', 'user-1', '5', '2026-10-16')",
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Err(ValidationError::InvalidInput("abort".to_string()).into())
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(count_saves(&pool), 0);
    }

    #[tokio::test]
    async fn test_successful_job_returns_value() {
        let temp_dir = tempdir().unwrap();
        let pool = create_pool(&temp_dir.path().join("test.db").to_string_lossy()).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer((*pool).clone());

        let inserted = writer
            .exec(|conn| {
                Ok(diesel::sql_query(
                    "INSERT INTO save_events (id, user_id, amount, saved_on) \
                     VALUES ('evt-1', 'user-1', '5', '2026-10-16')",
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
            .unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(count_saves(&pool), 1);
    }
}
