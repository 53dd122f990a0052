use std::sync::{Arc, Mutex};

use crate::errors::AppError;
use crate::models::{LeadSubmission, NEW_LEAD_EVENT};

/// Destination for captured leads.
///
/// Implementations are shared across concurrent requests and must only append.
pub trait LeadSink: Send + Sync {
    /// Records one lead. Called exactly once per accepted submission.
    fn record(&self, lead: &LeadSubmission) -> Result<(), AppError>;
}

/// Production sink: one structured `tracing` event per lead, picked up by the
/// hosting platform's log aggregator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LeadSink for TracingSink {
    fn record(&self, lead: &LeadSubmission) -> Result<(), AppError> {
        let payload = serde_json::to_string(lead)
            .map_err(|e| AppError::Sink(format!("Failed to serialize lead: {}", e)))?;

        tracing::info!(
            event = NEW_LEAD_EVENT,
            lead_name = lead.name(),
            whatsapp = lead.contact_number(),
            goal = lead.goal(),
            goal_category = ?lead.goal_category(),
            created_at = %lead.submitted_at_iso(),
            ua = lead.user_agent(),
            ip = lead.source_address(),
            payload = %payload,
            "{}",
            NEW_LEAD_EVENT
        );

        Ok(())
    }
}

/// In-memory collector, mainly for tests and local inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LeadSubmission>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in arrival order.
    pub fn records(&self) -> Vec<LeadSubmission> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LeadSink for MemorySink {
    fn record(&self, lead: &LeadSubmission) -> Result<(), AppError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| AppError::Sink("Memory sink lock poisoned".to_string()))?;
        records.push(lead.clone());
        Ok(())
    }
}
