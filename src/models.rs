use axum::extract::Multipart;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use url::form_urlencoded;

use crate::errors::AppError;

/// Event identifier attached to every lead record so log processors can filter on it.
pub const NEW_LEAD_EVENT: &str = "NEW_LEAD";

/// Where the browser is sent after a submission.
pub const LEAD_SUCCESS_LOCATION: &str = "/?ok=1";

// ============================================================================
// Goal categories
// ============================================================================

/// What the prospect wants help with, as offered by the form's `<select>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LeadGoal {
    #[default]
    Leads,
    Vendas,
    AgendaCheia,
    EscalarCampanhas,
    ReposicionarOferta,
}

impl LeadGoal {
    pub const ALL: [LeadGoal; 5] = [
        LeadGoal::Leads,
        LeadGoal::Vendas,
        LeadGoal::AgendaCheia,
        LeadGoal::EscalarCampanhas,
        LeadGoal::ReposicionarOferta,
    ];

    /// Label shown in the form and submitted by browsers.
    pub fn label(&self) -> &'static str {
        match self {
            LeadGoal::Leads => "Leads",
            LeadGoal::Vendas => "Vendas",
            LeadGoal::AgendaCheia => "Agenda cheia",
            LeadGoal::EscalarCampanhas => "Escalar campanhas",
            LeadGoal::ReposicionarOferta => "Reposicionar oferta",
        }
    }

    /// Resolves a submitted label to a category.
    ///
    /// Matching ignores case and whitespace, so both `"Agenda cheia"` and
    /// `"AgendaCheia"` resolve. Empty or unknown text falls back to `Leads`.
    pub fn from_label(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "vendas" => LeadGoal::Vendas,
            "agendacheia" => LeadGoal::AgendaCheia,
            "escalarcampanhas" => LeadGoal::EscalarCampanhas,
            "reposicionaroferta" => LeadGoal::ReposicionarOferta,
            _ => LeadGoal::Leads,
        }
    }
}

// ============================================================================
// Form input
// ============================================================================

/// Raw fields of the contact form after decoding.
///
/// Every field is always present: anything missing from the body is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub whatsapp: String,
    pub goal: String,
}

impl LeadForm {
    /// Decodes an `application/x-www-form-urlencoded` body.
    ///
    /// Never fails: invalid UTF-8 is replaced lossily, unknown keys are ignored and
    /// for repeated keys the first occurrence wins.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut fields = FormFields::default();
        for (key, value) in form_urlencoded::parse(body) {
            if let Some(slot) = fields.vacant_slot(&key) {
                *slot = Some(value.into_owned());
            }
        }
        fields.finish()
    }

    /// Reads a `multipart/form-data` body with the same rules as
    /// [`LeadForm::from_urlencoded`]. File parts are read as text.
    ///
    /// Fails only when the stream itself breaks.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut fields = FormFields::default();
        while let Some(field) = multipart.next_field().await? {
            let key = field.name().unwrap_or_default().to_owned();
            if let Some(slot) = fields.vacant_slot(&key) {
                let bytes = field.bytes().await?;
                *slot = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
        }
        Ok(fields.finish())
    }
}

/// First-wins collector for the three known form keys.
#[derive(Default)]
struct FormFields {
    name: Option<String>,
    whatsapp: Option<String>,
    goal: Option<String>,
}

impl FormFields {
    /// Slot for `key` if it is a known field that has not been filled yet.
    fn vacant_slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        let slot = match key {
            "name" => &mut self.name,
            "whatsapp" => &mut self.whatsapp,
            "goal" => &mut self.goal,
            _ => return None,
        };
        slot.is_none().then_some(slot)
    }

    fn finish(self) -> LeadForm {
        LeadForm {
            name: self.name.unwrap_or_default(),
            whatsapp: self.whatsapp.unwrap_or_default(),
            goal: self.goal.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Lead record
// ============================================================================

/// One captured lead, as emitted to the observability sink.
///
/// Built once per request and never mutated afterwards; fields are only exposed
/// through getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    name: String,
    #[serde(rename = "whatsapp")]
    contact_number: String,
    goal: String,
    #[serde(rename = "created_at", serialize_with = "serialize_iso_millis")]
    submitted_at: DateTime<Utc>,
    #[serde(rename = "ua")]
    user_agent: String,
    #[serde(rename = "ip")]
    source_address: String,
}

impl LeadSubmission {
    pub fn new(
        form: LeadForm,
        user_agent: String,
        source_address: String,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: form.name,
            contact_number: form.whatsapp,
            goal: form.goal,
            submitted_at,
            user_agent,
            source_address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Category derived from the submitted goal text.
    pub fn goal_category(&self) -> LeadGoal {
        LeadGoal::from_label(&self.goal)
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// `submitted_at` as ISO-8601 with millisecond precision and a `Z` suffix.
    pub fn submitted_at_iso(&self) -> String {
        self.submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn source_address(&self) -> &str {
        &self.source_address
    }
}

fn serialize_iso_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
