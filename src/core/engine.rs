use crate::core::{BatchEntry, BatchReport, ConfigProvider, ErrorPolicy, Operation, Outcome, Result};
use crate::domain::ops;
use chrono::Utc;

pub struct OpsEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> OpsEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn evaluate(&self, operation: &Operation) -> Result<Outcome> {
        let outcome = match operation {
            Operation::Greet { name } => Outcome::Text(ops::greet(name)),
            Operation::Subtract { a, b } => Outcome::Number(ops::subtract(*a, *b)),
            Operation::Divide { x, y } if self.config.strict_division() => {
                Outcome::Number(ops::checked_divide(*x, *y)?)
            }
            Operation::Divide { x, y } => Outcome::Number(ops::divide(*x, *y)),
        };

        tracing::debug!(op = operation.name(), %outcome, "evaluated operation");
        Ok(outcome)
    }

    pub fn run_batch(&self, operations: &[Operation]) -> Result<BatchReport> {
        tracing::info!(
            "Running batch of {} operations (strict_division={}, on_error={:?})",
            operations.len(),
            self.config.strict_division(),
            self.config.on_error()
        );

        let mut entries = Vec::with_capacity(operations.len());
        let mut failed = 0;

        for (index, operation) in operations.iter().enumerate() {
            match self.evaluate(operation) {
                Ok(outcome) => entries.push(BatchEntry {
                    index,
                    operation: operation.clone(),
                    outcome: Some(outcome),
                    error: None,
                }),
                Err(e) => {
                    if self.config.on_error() == ErrorPolicy::Abort {
                        tracing::error!("❌ Operation #{} ({}) failed, aborting: {}", index, operation.name(), e);
                        return Err(e);
                    }
                    tracing::warn!("⚠️ Operation #{} ({}) failed: {}", index, operation.name(), e);
                    failed += 1;
                    entries.push(BatchEntry {
                        index,
                        operation: operation.clone(),
                        outcome: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        tracing::info!("✅ Batch finished: {} evaluated, {} failed", entries.len(), failed);

        Ok(BatchReport {
            generated_at: Utc::now(),
            evaluated: entries.len(),
            failed,
            entries,
        })
    }
}
