//! Single-writer actor for SQLite mutations.
//!
//! SQLite allows one writer at a time; funneling every mutation through one
//! dedicated connection avoids `SQLITE_BUSY` under concurrent callers. Reads
//! keep using the pool directly.

use std::any::Any;
use std::sync::Arc;

use diesel::connection::Connection;
use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use coinjar_core::errors::{Error, Result};

use super::DbPool;
use crate::errors::StorageError;

// A write job: runs against the actor's connection, inside a transaction.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

// Transaction error carrier. Keeps a job's own core error intact instead of
// flattening it through `StorageError`, so callers still see e.g. `NotFound`.
enum TxError {
    Rollback(StorageError),
    Job(Error),
}

impl From<diesel::result::Error> for TxError {
    fn from(e: diesel::result::Error) -> Self {
        TxError::Rollback(StorageError::QueryFailed(e))
    }
}

impl From<TxError> for Error {
    fn from(e: TxError) -> Self {
        match e {
            TxError::Rollback(storage) => storage.into(),
            TxError::Job(core) => core,
        }
    }
}

/// Handle for sending write jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a write job on the writer actor's dedicated connection and
    /// awaits its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |conn| job(conn).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                reply_tx,
            ))
            .await
            .expect("writer actor stopped: receiving channel closed");

        reply_rx
            .await
            .expect("writer actor dropped the reply sender")
            .map(|boxed| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor result had an unexpected type"))
            })
    }
}

/// Spawns the writer actor.
///
/// The actor owns one pooled connection for its lifetime and processes jobs
/// serially, each inside an immediate transaction. It terminates when every
/// `WriteHandle` has been dropped.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to get a connection for the writer actor");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, TxError, _>(|c| job(c).map_err(TxError::Job))
                .map_err(Error::from);

            // Receiver may have gone away (caller cancelled); nothing to do.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
