//! Unit of Work
//!
//! Every mutation that touches more than one table goes through
//! [`PgUnitOfWork::execute`]: the statements run in the given order inside a
//! single transaction and either all of them commit or none of them do.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

use crate::shared::error::{classify, AppError};

/// A parameterized statement ready to run inside a unit of work.
pub type Statement<'q> = Query<'q, Postgres, PgArguments>;

/// One step of a unit of work: what the statement touches (used in error
/// messages) and the statement itself.
pub struct Step<'q> {
    pub what: String,
    pub statement: Statement<'q>,
}

impl<'q> Step<'q> {
    pub fn new(what: impl Into<String>, statement: Statement<'q>) -> Self {
        Self {
            what: what.into(),
            statement,
        }
    }
}

/// PostgreSQL unit of work over the shared pool.
#[derive(Clone)]
pub struct PgUnitOfWork {
    pool: PgPool,
}

impl PgUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run `steps` in order within one transaction.
    ///
    /// Returns the number of rows each step affected. The first failing step
    /// rolls the whole transaction back and is reported with its
    /// classification (`AlreadyExists`, `NotFound` or `Unexpected`).
    pub async fn execute(&self, op: &str, steps: Vec<Step<'_>>) -> Result<Vec<u64>, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::unexpected(op, e))?;

        let mut affected = Vec::with_capacity(steps.len());
        for (index, step) in steps.into_iter().enumerate() {
            match step.statement.execute(&mut *tx).await {
                Ok(result) => affected.push(result.rows_affected()),
                Err(e) => {
                    tracing::debug!(
                        op,
                        step = index,
                        what = %step.what,
                        error = %e,
                        "Unit of work step failed, rolling back"
                    );
                    if let Err(rollback_err) = tx.rollback().await {
                        tracing::warn!(op, error = %rollback_err, "Rollback failed");
                    }
                    return Err(classify(op, step.what, e));
                }
            }
        }

        tx.commit().await.map_err(|e| AppError::unexpected(op, e))?;

        Ok(affected)
    }
}
