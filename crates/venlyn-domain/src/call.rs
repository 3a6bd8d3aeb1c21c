//! Call module - the call record and its classification enums

use crate::window::TimestampMs;
use std::fmt;

/// Unique identifier for a call based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for temporal queries
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallId(u128);

impl CallId {
    /// Generate a new UUIDv7-based CallId
    ///
    /// # Examples
    ///
    /// ```
    /// use venlyn_domain::CallId;
    ///
    /// let id = CallId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a CallId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization and tests.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a CallId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl serde::Serialize for CallId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CallId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Outcome classification of a call
///
/// Dispositions are mutually exclusive; a call without a determined outcome
/// carries no disposition at all (`Option::None` on the record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// The call was answered by the agent
    Answered,

    /// The caller hung up or was never connected
    Missed,

    /// The call resulted in a booked job
    Booked,

    /// The call was classified as spam
    Spam,

    /// The caller requested a callback
    Callback,
}

impl Disposition {
    /// Get the disposition name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Answered => "answered",
            Disposition::Missed => "missed",
            Disposition::Booked => "booked",
            Disposition::Spam => "spam",
            Disposition::Callback => "callback",
        }
    }

    /// Parse a disposition from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "answered" => Some(Disposition::Answered),
            "missed" => Some(Disposition::Missed),
            "booked" => Some(Disposition::Booked),
            "spam" => Some(Disposition::Spam),
            "callback" => Some(Disposition::Callback),
            _ => None,
        }
    }
}

impl std::str::FromStr for Disposition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid disposition: {}", s))
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The AI's classification of the caller's purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Urgent problem requiring immediate dispatch
    Emergency,

    /// Routine service request
    Routine,

    /// Price or estimate inquiry
    Quote,

    /// General question answerable from the knowledge base
    Faq,

    /// Billing or invoice question
    Billing,

    /// Unwanted solicitation
    Spam,
}

impl Intent {
    /// Get the intent name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Emergency => "emergency",
            Intent::Routine => "routine",
            Intent::Quote => "quote",
            Intent::Faq => "faq",
            Intent::Billing => "billing",
            Intent::Spam => "spam",
        }
    }

    /// Parse an intent from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "emergency" => Some(Intent::Emergency),
            "routine" => Some(Intent::Routine),
            "quote" => Some(Intent::Quote),
            "faq" => Some(Intent::Faq),
            "billing" => Some(Intent::Billing),
            "spam" => Some(Intent::Spam),
            _ => None,
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid intent: {}", s))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inbound call as materialized by the persistence layer
///
/// Records are immutable inputs to the engines. Fields the AI could not
/// determine are simply absent; absence is never an error, it contributes
/// the neutral value in every aggregate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallRecord {
    /// Unique identifier
    pub id: CallId,

    /// When the call started (epoch milliseconds)
    pub started_at: TimestampMs,

    /// When the call ended, if it has
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<TimestampMs>,

    /// Call duration in seconds, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,

    /// Outcome classification, absent while undetermined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,

    /// The AI's intent classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,

    /// Estimated job value in integer cents
    ///
    /// Absent for spam and undetermined calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_est_cents: Option<u64>,

    /// Emergency likelihood score, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_score: Option<u8>,

    /// Spam likelihood score, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spam_score: Option<u8>,
}

impl CallRecord {
    /// Create a record with only the required fields set
    ///
    /// Classification fields start absent, matching a call that has been
    /// received but not yet processed.
    pub fn new(id: CallId, started_at: TimestampMs) -> Self {
        Self {
            id,
            started_at,
            ended_at: None,
            duration_secs: None,
            disposition: None,
            intent: None,
            value_est_cents: None,
            emergency_score: None,
            spam_score: None,
        }
    }

    /// Check the record against its stated invariants
    ///
    /// Scores must stay on the 0-100 scale and a call cannot end before it
    /// starts. Negative durations and values are unrepresentable here by
    /// construction, so only the representable violations are checked.
    pub fn check_invariants(&self) -> Result<(), String> {
        if let Some(score) = self.emergency_score {
            if score > 100 {
                return Err(format!("call {}: emergency_score {} exceeds 100", self.id, score));
            }
        }
        if let Some(score) = self.spam_score {
            if score > 100 {
                return Err(format!("call {}: spam_score {} exceeds 100", self.id, score));
            }
        }
        if let Some(ended_at) = self.ended_at {
            if ended_at < self.started_at {
                return Err(format!("call {}: ended_at precedes started_at", self.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_id_ordering() {
        let id1 = CallId::from_value(1000);
        let id2 = CallId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_call_id_chronological() {
        // UUIDv7s generated in sequence should be chronologically ordered
        let id1 = CallId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = CallId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should be less than later UUIDv7");
        assert!(id1.timestamp() <= id2.timestamp(), "Timestamps should be ordered");
    }

    #[test]
    fn test_call_id_display_and_parse() {
        let id = CallId::new();
        let id_str = id.to_string();

        assert_eq!(id_str.len(), 36);

        let parsed = CallId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_disposition_round_trip() {
        for d in [
            Disposition::Answered,
            Disposition::Missed,
            Disposition::Booked,
            Disposition::Spam,
            Disposition::Callback,
        ] {
            assert_eq!(Disposition::parse(d.as_str()), Some(d));
        }
        assert!(Disposition::parse("escalated").is_none());
    }

    #[test]
    fn test_intent_round_trip() {
        for i in [
            Intent::Emergency,
            Intent::Routine,
            Intent::Quote,
            Intent::Faq,
            Intent::Billing,
            Intent::Spam,
        ] {
            assert_eq!(Intent::parse(i.as_str()), Some(i));
        }
        assert!(Intent::parse("sales").is_none());
    }

    #[test]
    fn test_record_invariants() {
        let mut record = CallRecord::new(CallId::from_value(1), 10_000);
        assert!(record.check_invariants().is_ok());

        record.spam_score = Some(101);
        assert!(record.check_invariants().is_err());

        record.spam_score = Some(100);
        record.ended_at = Some(5_000);
        assert!(record.check_invariants().is_err());

        record.ended_at = Some(20_000);
        assert!(record.check_invariants().is_ok());
    }

    #[test]
    fn test_record_json_shape() {
        let record = CallRecord {
            id: CallId::from_value(42),
            started_at: 1_000,
            ended_at: None,
            duration_secs: Some(90),
            disposition: Some(Disposition::Booked),
            intent: Some(Intent::Quote),
            value_est_cents: Some(12_500),
            emergency_score: None,
            spam_score: Some(3),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["disposition"], "booked");
        assert_eq!(json["intent"], "quote");
        assert_eq!(json["value_est_cents"], 12_500);
        // Absent optionals are omitted, not serialized as null
        assert!(json.get("ended_at").is_none());

        let back: CallRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
