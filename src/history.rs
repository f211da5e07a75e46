//! Call history records and how a row presents them.
//!
//! Records come from outside the session (mock data or the config file) and
//! are never mutated. Direction and outcome are closed enums with an `Other`
//! arm that keeps whatever unknown value the source sent, so bad data
//! degrades to a generic row instead of failing to load.

use chrono::{DateTime, Duration as ChronoDuration, Local, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CallType {
    Incoming,
    Outgoing,
    Missed,
    Other(String),
}

impl From<String> for CallType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "incoming" => CallType::Incoming,
            "outgoing" => CallType::Outgoing,
            "missed" => CallType::Missed,
            _ => CallType::Other(value),
        }
    }
}

impl From<CallType> for String {
    fn from(value: CallType) -> Self {
        match value {
            CallType::Incoming => "incoming".to_string(),
            CallType::Outgoing => "outgoing".to_string(),
            CallType::Missed => "missed".to_string(),
            CallType::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordStatus {
    Completed,
    Missed,
    Busy,
    NoAnswer,
    Other(String),
}

impl From<String> for RecordStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => RecordStatus::Completed,
            "missed" => RecordStatus::Missed,
            "busy" => RecordStatus::Busy,
            "no-answer" => RecordStatus::NoAnswer,
            _ => RecordStatus::Other(value),
        }
    }
}

impl From<RecordStatus> for String {
    fn from(value: RecordStatus) -> Self {
        match value {
            RecordStatus::Completed => "completed".to_string(),
            RecordStatus::Missed => "missed".to_string(),
            RecordStatus::Busy => "busy".to_string(),
            RecordStatus::NoAnswer => "no-answer".to_string(),
            RecordStatus::Other(raw) => raw,
        }
    }
}

impl RecordStatus {
    pub fn label(&self) -> &str {
        match self {
            RecordStatus::Completed => "Completada",
            RecordStatus::Missed => "Perdida",
            RecordStatus::Busy => "Ocupado",
            RecordStatus::NoAnswer => "Sin respuesta",
            RecordStatus::Other(raw) => raw,
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            RecordStatus::Completed => BadgeVariant::Default,
            RecordStatus::Missed => BadgeVariant::Destructive,
            RecordStatus::Busy => BadgeVariant::Secondary,
            RecordStatus::NoAnswer | RecordStatus::Other(_) => BadgeVariant::Outline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Destructive,
    Secondary,
    Outline,
    Success,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Destructive => "badge badge-destructive",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
            BadgeVariant::Success => "badge badge-success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallIcon {
    Missed,
    Incoming,
    Outgoing,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: String,
    pub number: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub call_type: CallType,
    /// Seconds
    #[serde(default)]
    pub duration: u64,
    pub timestamp: DateTime<Utc>,
    pub status: RecordStatus,
}

impl CallRecord {
    /// A missed outcome wins over the call direction.
    pub fn icon(&self) -> CallIcon {
        if self.call_type == CallType::Missed || self.status == RecordStatus::Missed {
            return CallIcon::Missed;
        }
        match self.call_type {
            CallType::Incoming => CallIcon::Incoming,
            CallType::Outgoing => CallIcon::Outgoing,
            CallType::Missed | CallType::Other(_) => CallIcon::Generic,
        }
    }

    pub fn title(&self) -> &str {
        self.name.as_deref().filter(|name| !name.is_empty()).unwrap_or(&self.number)
    }

    /// `None` for calls that never connected.
    pub fn duration_text(&self) -> Option<String> {
        (self.duration > 0).then(|| format_record_duration(self.duration))
    }

    pub fn time_text(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

pub fn format_record_duration(secs: u64) -> String {
    if secs == 0 {
        return "0s".to_string();
    }
    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Sample history shown when no records are configured.
pub fn mock_call_history(now: DateTime<Utc>) -> Vec<CallRecord> {
    vec![
        CallRecord {
            id: "1".to_string(),
            number: "+34612345678".to_string(),
            name: Some("Cliente ABC".to_string()),
            call_type: CallType::Incoming,
            duration: 180,
            timestamp: now - ChronoDuration::minutes(30),
            status: RecordStatus::Completed,
        },
        CallRecord {
            id: "2".to_string(),
            number: "+34698765432".to_string(),
            name: Some("Proveedor XYZ".to_string()),
            call_type: CallType::Outgoing,
            duration: 120,
            timestamp: now - ChronoDuration::minutes(60),
            status: RecordStatus::Completed,
        },
        CallRecord {
            id: "3".to_string(),
            number: "+34611223344".to_string(),
            name: None,
            call_type: CallType::Missed,
            duration: 0,
            timestamp: now - ChronoDuration::minutes(120),
            status: RecordStatus::Missed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(call_type: CallType, status: RecordStatus) -> CallRecord {
        CallRecord {
            id: "x".to_string(),
            number: "+34600000000".to_string(),
            name: None,
            call_type,
            duration: 0,
            timestamp: Utc::now(),
            status,
        }
    }

    #[test]
    fn missed_takes_priority_over_direction() {
        let row = record(CallType::Missed, RecordStatus::Missed);
        assert_eq!(row.icon(), CallIcon::Missed);
        assert_eq!(row.status.label(), "Perdida");

        assert_eq!(record(CallType::Incoming, RecordStatus::Missed).icon(), CallIcon::Missed);
        assert_eq!(record(CallType::Missed, RecordStatus::Completed).icon(), CallIcon::Missed);
    }

    #[test]
    fn incoming_completed_row() {
        let row = record(CallType::Incoming, RecordStatus::Completed);
        assert_eq!(row.icon(), CallIcon::Incoming);
        assert_eq!(row.status.label(), "Completada");
        assert_eq!(row.status.badge(), BadgeVariant::Default);
    }

    #[test]
    fn labels_and_badges() {
        assert_eq!(RecordStatus::Busy.label(), "Ocupado");
        assert_eq!(RecordStatus::Busy.badge(), BadgeVariant::Secondary);
        assert_eq!(RecordStatus::NoAnswer.label(), "Sin respuesta");
        assert_eq!(RecordStatus::NoAnswer.badge(), BadgeVariant::Outline);
        assert_eq!(RecordStatus::Missed.badge(), BadgeVariant::Destructive);
    }

    #[test]
    fn unknown_values_fall_back() {
        let row = record(CallType::Other("forwarded".into()), RecordStatus::Other("voicemail".into()));
        assert_eq!(row.icon(), CallIcon::Generic);
        assert_eq!(row.status.label(), "voicemail");
        assert_eq!(row.status.badge(), BadgeVariant::Outline);
        assert_eq!(record(CallType::Outgoing, RecordStatus::Busy).icon(), CallIcon::Outgoing);
    }

    #[test]
    fn deserializes_unknown_strings_into_other() {
        #[derive(Deserialize)]
        struct Doc {
            history: Vec<CallRecord>,
        }

        let doc: Doc = toml::from_str(
            r#"
            [[history]]
            id = "7"
            number = "+34911111111"
            type = "forwarded"
            timestamp = "2024-05-01T10:00:00Z"
            status = "no-answer"

            [[history]]
            id = "8"
            number = "+34922222222"
            name = "Soporte"
            type = "outgoing"
            duration = 61
            timestamp = "2024-05-01T11:00:00Z"
            status = "voicemail"
            "#,
        )
        .unwrap();

        assert_eq!(doc.history[0].call_type, CallType::Other("forwarded".to_string()));
        assert_eq!(doc.history[0].status, RecordStatus::NoAnswer);
        assert_eq!(doc.history[0].duration, 0);
        assert_eq!(doc.history[1].status, RecordStatus::Other("voicemail".to_string()));
        assert_eq!(doc.history[1].title(), "Soporte");
        assert_eq!(doc.history[1].duration_text().as_deref(), Some("1m 1s"));
    }

    #[test]
    fn row_text() {
        let mut row = record(CallType::Incoming, RecordStatus::Completed);
        assert_eq!(row.title(), "+34600000000");
        assert_eq!(row.duration_text(), None);
        assert_eq!(row.time_text().len(), 5);

        row.duration = 180;
        assert_eq!(row.duration_text().as_deref(), Some("3m 0s"));
        assert_eq!(format_record_duration(45), "45s");
        assert_eq!(format_record_duration(0), "0s");
    }

    #[test]
    fn mock_history_is_newest_first() {
        let now = Utc::now();
        let history = mock_call_history(now);
        assert_eq!(history.len(), 3);
        assert!(history.windows(2).all(|pair| pair[0].timestamp > pair[1].timestamp));
        assert_eq!(history[2].icon(), CallIcon::Missed);
    }
}
