//! API View Models
//!
//! Shapes deserialized from the activities API. Nothing here is persisted.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Aggregate numbers for the dashboard
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub total_activities: u32,
    pub total_participants: u32,
    #[serde(default)]
    pub activity_stats: Vec<ActivityStat>,
}

/// Per-activity participation as reported by the server
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ActivityStat {
    pub name: String,
    pub participants: u32,
    /// Taken verbatim from the server, never recomputed
    pub spots_left: i64,
}

impl ActivityStat {
    pub fn summary_line(&self) -> String {
        format!(
            "{} participants, {} spots left",
            self.participants, self.spots_left
        )
    }
}

/// Activity details keyed by name in the catalog
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Activity {
    /// Capacity minus current enrollment; negative if the server over-filled
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Participant {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

/// The full activity catalog, in the order the server sent it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityCatalog(pub Vec<(String, Activity)>);

impl ActivityCatalog {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(ActivityCatalog(entries))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Student profile with enrolled activities
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub activities: Vec<EnrolledActivity>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct EnrolledActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub activity_id: i64,
    pub date: String,
    pub present: bool,
}

impl AttendanceRecord {
    pub fn summary_line(&self) -> String {
        format!(
            "Activity ID: {}, Date: {}, Present: {}",
            self.activity_id,
            self.date,
            if self.present { "Yes" } else { "No" }
        )
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Notification {
    pub message: String,
    #[serde(default)]
    pub sent: bool,
}

impl Notification {
    pub fn summary_line(&self) -> String {
        format!(
            "{} ({})",
            self.message,
            if self.sent { "Sent" } else { "Not sent" }
        )
    }
}

/// A student queued for a full activity
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WaitlistEntry {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

/// Success body of every mutating endpoint
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Success body of `POST /students`
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SavedProfileResponse {
    pub message: String,
    pub profile: SavedProfile,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SavedProfile {
    pub email: String,
    pub name: String,
    pub grade: String,
}

/// Parse the attendance form's present field: only the literal "true" counts
pub fn parse_present_flag(value: &str) -> bool {
    value == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_left_from_catalog() {
        let json = r#"{ "Chess": {"description":"d", "schedule":"s", "max_participants":2,
                        "participants":[{"email":"a@x.com"}]} }"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        let (name, chess) = &catalog.0[0];
        assert_eq!(name, "Chess");
        assert_eq!(chess.spots_left(), 1);
        assert_eq!(chess.availability(), "1 spots left");
        assert_eq!(chess.participants[0].name, None);
    }

    #[test]
    fn test_catalog_keeps_server_order() {
        let json = r#"{
            "Soccer Team": {"description":"a","schedule":"b","max_participants":22,"participants":[]},
            "Art Club": {"description":"a","schedule":"b","max_participants":15,"participants":[]},
            "Math Club": {"description":"a","schedule":"b","max_participants":10,"participants":[]}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Soccer Team", "Art Club", "Math Club"]);
    }

    #[test]
    fn test_dashboard_spots_left_verbatim() {
        let json = r#"{"total_activities":1,"total_participants":3,
            "activity_stats":[{"name":"Chess Club","participants":3,"spots_left":40}]}"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.activity_stats[0].spots_left, 40);
        assert_eq!(summary.activity_stats[0].summary_line(), "3 participants, 40 spots left");
    }

    #[test]
    fn test_participant_with_null_fields() {
        let json = r#"{"email":"a@x.com","name":null,"grade":"10"}"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, None);
        assert_eq!(p.grade.as_deref(), Some("10"));
    }

    #[test]
    fn test_attendance_and_notification_lines() {
        let record = AttendanceRecord { activity_id: 3, date: "2024-09-01".into(), present: false };
        assert_eq!(record.summary_line(), "Activity ID: 3, Date: 2024-09-01, Present: No");

        let note = Notification { message: "Practice moved".into(), sent: true };
        assert_eq!(note.summary_line(), "Practice moved (Sent)");
        let note = Notification { message: "Bring forms".into(), sent: false };
        assert_eq!(note.summary_line(), "Bring forms (Not sent)");
    }

    #[test]
    fn test_present_flag_literal() {
        assert!(parse_present_flag("true"));
        assert!(!parse_present_flag("false"));
        assert!(!parse_present_flag("True"));
        assert!(!parse_present_flag("yes"));
        assert!(!parse_present_flag(""));
    }

    #[test]
    fn test_saved_profile_response() {
        let json = r#"{"message":"Student profile saved",
            "profile":{"email":"a@x.com","name":"Ana","grade":"9"}}"#;
        let saved: SavedProfileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(saved.profile.name, "Ana");
    }
}
