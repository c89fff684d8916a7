//! Patient roster payloads for the caretaker overview.

use serde::Deserialize;

/// One patient as served by `GET /api/patients`, scoped server-side to
/// the signed-in caretaker.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PatientSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub safe_radius_m: Option<f64>,
}

impl PatientSummary {
    pub fn name_label(&self) -> &str {
        if self.name.is_empty() {
            "Unknown"
        } else {
            &self.name
        }
    }

    /// Safe-zone radius in metres, or `Not set`.
    pub fn safe_radius_label(&self) -> String {
        match self.safe_radius_m {
            Some(radius) => format!("{radius:.0} m"),
            None => "Not set".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_roster_entry() {
        let patient: PatientSummary = serde_json::from_str(
            r#"{"id":"6512f0a2","name":"Alma","caretaker_id":"abc","safe_center_lat":52.5,"safe_center_lng":13.4,"safe_radius_m":150.0}"#,
        )
        .unwrap();
        assert_eq!(patient.id, "6512f0a2");
        assert_eq!(patient.name_label(), "Alma");
        assert_eq!(patient.safe_radius_label(), "150 m");
    }

    #[test]
    fn labels_fall_back_on_sparse_entries() {
        let patient: PatientSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(patient.name_label(), "Unknown");
        assert_eq!(patient.safe_radius_label(), "Not set");
    }
}
