// src/models/scan_result.rs

use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// A scan result as returned by the API.
///
/// The same shape is used before persistence (`id` filled in with the store
/// or a synthetic id) and on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ScanResult {
    /// Store-assigned id rendered as a string. Mock leaderboard rows have none.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    /// Client-computed verdict, e.g. "NICE" or "NAUGHTY". Stored as-is.
    pub verdict: String,

    pub message: String,

    /// Always within [0, 100].
    pub score: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Server-assigned submission time.
    pub timestamp: DateTime<Utc>,
}

/// A leaderboard row is a persisted `ScanResult`.
pub type LeaderboardEntry = ScanResult;

/// DTO for submitting a scan result.
///
/// Every field is optional at the type level so that a missing field can be
/// reported by name instead of as a generic deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubmitScanRequest {
    pub name: Option<String>,
    pub verdict: Option<String>,
    pub message: Option<String>,
    /// Any JSON number; fractional and out-of-range values are clamped.
    pub score: Option<f64>,
    pub country: Option<String>,
}

impl SubmitScanRequest {
    /// Validates required fields (in the order name, verdict, message, score),
    /// clamps the score and stamps the record with `timestamp`.
    pub fn into_scan(self, timestamp: DateTime<Utc>) -> Result<ScanResult, AppError> {
        let name = self.name.ok_or_else(|| AppError::missing_field("name"))?;
        let verdict = self.verdict.ok_or_else(|| AppError::missing_field("verdict"))?;
        let message = self.message.ok_or_else(|| AppError::missing_field("message"))?;
        let score = self.score.ok_or_else(|| AppError::missing_field("score"))?;

        Ok(ScanResult {
            id: None,
            name,
            verdict,
            message,
            score: clamp_score(score),
            country: self.country,
            timestamp,
        })
    }
}

/// Clamps `score` into [0, 100] and rounds it to the nearest integer.
pub fn clamp_score(score: f64) -> i64 {
    if score.is_nan() {
        return MIN_SCORE;
    }
    score.clamp(MIN_SCORE as f64, MAX_SCORE as f64).round() as i64
}

/// Reads a stored score written as any BSON number (int32, int64 or double).
fn deserialize_stored_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredScore {
        Int(i64),
        Float(f64),
    }

    Ok(match StoredScore::deserialize(deserializer)? {
        StoredScore::Int(score) => score.clamp(MIN_SCORE, MAX_SCORE),
        StoredScore::Float(score) => clamp_score(score),
    })
}

/// Represents a document in the `scanResults` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub verdict: String,
    pub message: String,
    #[serde(deserialize_with = "deserialize_stored_score")]
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl From<&ScanResult> for ScanDocument {
    fn from(scan: &ScanResult) -> Self {
        Self {
            id: None,
            name: scan.name.clone(),
            verdict: scan.verdict.clone(),
            message: scan.message.clone(),
            score: scan.score,
            country: scan.country.clone(),
            timestamp: scan.timestamp,
        }
    }
}

impl From<ScanDocument> for ScanResult {
    fn from(doc: ScanDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()),
            name: doc.name,
            verdict: doc.verdict,
            message: doc.message,
            score: doc.score,
            country: doc.country,
            timestamp: doc.timestamp,
        }
    }
}

/// Renders an inserted id the way the API exposes it.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> SubmitScanRequest {
        SubmitScanRequest {
            name: Some("Rudolph".to_string()),
            verdict: Some("NICE".to_string()),
            message: Some("Guides the sleigh".to_string()),
            score: Some(88.0),
            country: Some("FI".to_string()),
        }
    }

    fn bad_request_message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn clamps_out_of_range_scores() {
        assert_eq!(clamp_score(-20.0), 0);
        assert_eq!(clamp_score(0.0), 0);
        assert_eq!(clamp_score(57.0), 57);
        assert_eq!(clamp_score(100.0), 100);
        assert_eq!(clamp_score(1e3), 100);
        assert_eq!(clamp_score(1e20), 100);
        assert_eq!(clamp_score(-1e20), 0);
        assert_eq!(clamp_score(42.6), 43);
        assert_eq!(clamp_score(150.5), 100);
    }

    #[test]
    fn reports_first_missing_field_in_fixed_order() {
        let err = SubmitScanRequest::default().into_scan(Utc::now()).unwrap_err();
        assert_eq!(bad_request_message(err), "Missing name field");

        let req = SubmitScanRequest {
            verdict: None,
            score: None,
            ..full_request()
        };
        let err = req.into_scan(Utc::now()).unwrap_err();
        assert_eq!(bad_request_message(err), "Missing verdict field");

        let req = SubmitScanRequest {
            score: None,
            ..full_request()
        };
        let err = req.into_scan(Utc::now()).unwrap_err();
        assert_eq!(bad_request_message(err), "Missing score field");
    }

    #[test]
    fn builds_clamped_record_with_timestamp() {
        let now = Utc::now();
        let req = SubmitScanRequest {
            score: Some(250.0),
            ..full_request()
        };
        let scan = req.into_scan(now).unwrap();

        assert_eq!(scan.score, 100);
        assert_eq!(scan.timestamp, now);
        assert_eq!(scan.id, None);
        assert_eq!(scan.country.as_deref(), Some("FI"));
    }

    #[test]
    fn document_id_is_rendered_as_hex() {
        let oid = ObjectId::new();
        let scan = full_request().into_scan(Utc::now()).unwrap();
        let mut doc = ScanDocument::from(&scan);
        doc.id = Some(oid);

        let back = ScanResult::from(doc);
        assert_eq!(back.id, Some(oid.to_hex()));
        assert_eq!(id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
    }

    #[test]
    fn serializes_with_underscore_id_and_omits_empty_country() {
        let scan = ScanResult {
            id: Some("abc".to_string()),
            country: None,
            ..full_request().into_scan(Utc::now()).unwrap()
        };
        let json = serde_json::to_value(&scan).unwrap();

        assert_eq!(json["_id"], "abc");
        assert!(json.get("country").is_none());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn document_stores_timestamp_as_bson_datetime() {
        let scan = full_request().into_scan(Utc::now()).unwrap();
        let stored = mongodb::bson::to_document(&ScanDocument::from(&scan)).unwrap();

        let at = stored.get_datetime("timestamp").unwrap();
        assert_eq!(at.timestamp_millis(), scan.timestamp.timestamp_millis());
        assert!(stored.get("_id").is_none());
    }

    #[test]
    fn document_accepts_any_numeric_score() {
        let stored = |score: Bson| {
            let raw = mongodb::bson::doc! {
                "_id": ObjectId::new(),
                "name": "Comet",
                "verdict": "NICE",
                "message": "m",
                "score": score,
                "timestamp": mongodb::bson::DateTime::now(),
            };
            mongodb::bson::from_document::<ScanDocument>(raw).unwrap().score
        };

        assert_eq!(stored(Bson::Int32(64)), 64);
        assert_eq!(stored(Bson::Int64(72)), 72);
        assert_eq!(stored(Bson::Double(87.5)), 88);
        assert_eq!(stored(Bson::Double(1e20)), 100);
        assert_eq!(stored(Bson::Int64(-5)), 0);
    }
}
