use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event category. Wire labels are the canonical uppercase strings; anything
/// else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    Conference,
    Seminar,
    Congress,
    Course,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conference => "CONFERENCE",
            Self::Seminar => "SEMINAR",
            Self::Congress => "CONGRESS",
            Self::Course => "COURSE",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFERENCE" => Ok(Self::Conference),
            "SEMINAR" => Ok(Self::Seminar),
            "CONGRESS" => Ok(Self::Congress),
            "COURSE" => Ok(Self::Course),
            other => Err(format!("unknown event category: {}", other)),
        }
    }
}

/// Whether the event is held on-site or online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    InPerson,
    Virtual,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InPerson => "IN_PERSON",
            Self::Virtual => "VIRTUAL",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PERSON" => Ok(Self::InPerson),
            "VIRTUAL" => Ok(Self::Virtual),
            other => Err(format!("unknown modality: {}", other)),
        }
    }
}

/// A stored event. Field names on the wire are the Spanish contract labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: EventCategory,
    #[serde(rename = "lugar")]
    pub venue: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "fechaInicio")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "fechaFin")]
    pub end_time: DateTime<Utc>,
    #[serde(rename = "forma")]
    pub modality: Modality,
    #[serde(rename = "usuario_email")]
    pub owner_email: String,
}

/// Fields for a new event; the owner comes from the authenticated caller,
/// never from client input.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub category: EventCategory,
    pub venue: String,
    pub address: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub modality: Modality,
    pub owner_email: String,
}

/// Merge patch for an event: only populated fields overwrite. The id and the
/// owner are not representable here and therefore never change.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub category: Option<EventCategory>,
    pub venue: Option<String>,
    pub address: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub modality: Option<Modality>,
}

impl Event {
    /// Apply a merge patch in place.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(venue) = patch.venue {
            self.venue = venue;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(modality) = patch.modality {
            self.modality = modality;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        Event {
            id: 7,
            name: "RustConf".to_string(),
            category: EventCategory::Conference,
            venue: "Centro de Convenciones".to_string(),
            address: "Av. Reforma 123".to_string(),
            start_time: "2030-05-01T09:00:00Z".parse().unwrap(),
            end_time: "2030-05-01T18:00:00Z".parse().unwrap(),
            modality: Modality::InPerson,
            owner_email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn category_labels_round_trip() {
        for label in ["CONFERENCE", "SEMINAR", "CONGRESS", "COURSE"] {
            let parsed: EventCategory = label.parse().unwrap();
            assert_eq!(parsed.as_str(), label);
        }
        assert!("CONFERENCIA".parse::<EventCategory>().is_err());
        assert!("conference".parse::<EventCategory>().is_err());
    }

    #[test]
    fn modality_labels_round_trip() {
        for label in ["IN_PERSON", "VIRTUAL"] {
            let parsed: Modality = label.parse().unwrap();
            assert_eq!(parsed.as_str(), label);
        }
        assert!("PRESENCIAL".parse::<Modality>().is_err());
    }

    #[test]
    fn event_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["nombre"], "RustConf");
        assert_eq!(json["categoria"], "CONFERENCE");
        assert_eq!(json["lugar"], "Centro de Convenciones");
        assert_eq!(json["direccion"], "Av. Reforma 123");
        assert_eq!(json["fechaInicio"], "2030-05-01T09:00:00Z");
        assert_eq!(json["fechaFin"], "2030-05-01T18:00:00Z");
        assert_eq!(json["forma"], "IN_PERSON");
        assert_eq!(json["usuario_email"], "a@x.com");
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut event = sample();
        event.apply(EventPatch::default());
        assert_eq!(event, sample());
    }

    #[test]
    fn partial_patch_changes_only_supplied_fields() {
        let mut event = sample();
        event.apply(EventPatch {
            venue: Some("Auditorio Norte".to_string()),
            ..Default::default()
        });
        let expected = Event {
            venue: "Auditorio Norte".to_string(),
            ..sample()
        };
        assert_eq!(event, expected);
    }
}
