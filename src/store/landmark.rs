//! # Landmark Record
//!
//! The single domain record type and the seed data the store boots with.

use serde::{Deserialize, Serialize};

/// A landmark record
///
/// `id` is system-assigned and unique; `image_url` may be absent, in which
/// case it is omitted from the serialized JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Client-supplied landmark fields, before an id is assigned
///
/// Produced by the HTTP boundary after validation; the store never sees an
/// unvalidated body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkDraft {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// The five records the store is seeded with on startup
pub fn seed_landmarks() -> Vec<Landmark> {
    fn landmark(id: &str, name: &str, description: &str, image_url: &str) -> Landmark {
        Landmark {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image_url: Some(image_url.to_string()),
        }
    }

    vec![
        landmark(
            "1",
            "Eiffel Tower",
            "Iconic iron lattice tower on the Champ de Mars in Paris, France.",
            "https://picsum.photos/seed/eiffel/500",
        ),
        landmark(
            "2",
            "Statue of Liberty",
            "Colossal neoclassical sculpture on Liberty Island in New York Harbor.",
            "https://picsum.photos/seed/liberty/500",
        ),
        landmark(
            "3",
            "Great Wall of China",
            "Series of fortifications made of stone, brick, and other materials along the northern borders of China.",
            "https://picsum.photos/seed/greatwall/500",
        ),
        landmark(
            "4",
            "Colosseum",
            "Oval amphitheatre in the centre of Rome, Italy. The largest ancient amphitheatre ever built.",
            "https://picsum.photos/seed/colosseum/500",
        ),
        landmark(
            "5",
            "Machu Picchu",
            "15th-century Inca citadel situated on a mountain ridge in the Eastern Cordillera of Peru.",
            "https://picsum.photos/seed/machupicchu/200",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_one_through_five() {
        let seeds = seed_landmarks();
        let ids: Vec<&str> = seeds.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let landmark = Landmark {
            id: "1".to_string(),
            name: "Test".to_string(),
            description: "A test landmark".to_string(),
            image_url: Some("https://example.com/img".to_string()),
        };

        let json = serde_json::to_value(&landmark).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/img");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_absent_image_url_is_omitted() {
        let landmark = Landmark {
            id: "6".to_string(),
            name: "X".to_string(),
            description: "Y".to_string(),
            image_url: None,
        };

        let json = serde_json::to_value(&landmark).unwrap();
        assert!(json.get("imageUrl").is_none());
    }
}
