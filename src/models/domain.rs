use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Real-estate listing from the static dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    #[serde(rename = "ProjectName")]
    pub project_name: String,
    #[serde(rename = "Developer")]
    pub developer: String,
    #[serde(rename = "PropertyType")]
    pub property_type: String,
    #[serde(rename = "AssetType")]
    pub asset_type: String,
    #[serde(rename = "SizeRange")]
    pub size_range: String,
    #[serde(rename = "StartingPrice")]
    pub starting_price: String,
    #[serde(rename = "Micromarket")]
    pub micromarket: String,
    #[serde(rename = "Majormarket")]
    pub majormarket: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "PlantationType")]
    pub plantation_type: String,
    #[serde(rename = "RERAID")]
    pub rera_id: String,
    #[serde(rename = "TotalUnits")]
    pub total_units: String,
    #[serde(rename = "WebsiteLink")]
    pub website_link: String,
    #[serde(rename = "vibeDescriptors", default)]
    pub vibe_descriptors: Vec<String>,
    #[serde(rename = "vibeSummary", default)]
    pub vibe_summary: String,
}

/// A single match reported by the model
///
/// The score is kept exactly as the model wrote it so clients see the
/// same number that was used for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibeMatch {
    pub id: String,
    #[serde(rename = "relevanceScore", default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<Number>,
    #[serde(rename = "matchReasons", default)]
    pub match_reasons: Vec<String>,
}

impl VibeMatch {
    pub fn new(id: impl Into<String>, relevance_score: i64, match_reasons: Vec<String>) -> Self {
        Self {
            id: id.into(),
            relevance_score: Some(Number::from(relevance_score)),
            match_reasons,
        }
    }

    /// Read one entry of the model's `matches` array.
    ///
    /// Only the id is mandatory. Ids and scores may arrive as strings or
    /// numbers; an unreadable score or reason list is treated as absent.
    pub fn from_json(item: &Value) -> Option<Self> {
        let id = match item.get("id")? {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        let relevance_score = match item.get("relevanceScore") {
            Some(Value::Number(n)) => Some(n.clone()),
            Some(Value::String(s)) => parse_number(s),
            _ => None,
        };

        let match_reasons = item
            .get("matchReasons")
            .and_then(Value::as_array)
            .map(|reasons| {
                reasons
                    .iter()
                    .filter_map(|r| r.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            id,
            relevance_score,
            match_reasons,
        })
    }

    /// Relevance score as a float, 0 when the model omitted it
    pub fn score(&self) -> f64 {
        self.relevance_score
            .as_ref()
            .and_then(Number::as_f64)
            .unwrap_or(0.0)
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(n) => Some(Number::from(n)),
        Err(_) => text.parse::<f64>().ok().and_then(Number::from_f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_id_is_normalized() {
        let m = VibeMatch::from_json(&json!({
            "id": 7,
            "relevanceScore": 6,
            "matchReasons": ["quiet"]
        }))
        .unwrap();

        assert_eq!(m.id, "7");
        assert_eq!(m.score(), 6.0);
    }

    #[test]
    fn test_string_score_and_reasons() {
        let m = VibeMatch::from_json(&json!({
            "id": "p1",
            "relevanceScore": " 8 ",
            "matchReasons": "coastal"
        }))
        .unwrap();

        assert_eq!(m.relevance_score, Some(Number::from(8)));
        assert!(m.match_reasons.is_empty());

        let m = VibeMatch::from_json(&json!({ "id": "p1", "relevanceScore": "high" })).unwrap();
        assert_eq!(m.score(), 0.0);
    }

    #[test]
    fn test_unusable_id() {
        assert!(VibeMatch::from_json(&json!({ "id": null, "relevanceScore": 9 })).is_none());
        assert!(VibeMatch::from_json(&json!({ "relevanceScore": 9 })).is_none());
        assert!(VibeMatch::from_json(&json!({ "id": ["p1"] })).is_none());
        assert!(VibeMatch::from_json(&json!("p1")).is_none());
    }

    #[test]
    fn test_missing_score_and_reasons() {
        let m = VibeMatch::from_json(&json!({ "id": "p9" })).unwrap();

        assert_eq!(m.score(), 0.0);
        assert!(m.match_reasons.is_empty());
        assert_eq!(serde_json::to_value(&m).unwrap(), json!({ "id": "p9", "matchReasons": [] }));
    }

    #[test]
    fn test_score_echoed_unchanged() {
        let m = VibeMatch::new("p1", 8, vec!["coastal".to_string()]);
        let value = serde_json::to_value(&m).unwrap();

        assert_eq!(value["relevanceScore"], json!(8));
    }

    #[test]
    fn test_property_wire_names() {
        let value = json!({
            "id": "p1",
            "ProjectName": "Sea Breeze",
            "Developer": "Coastline Homes",
            "PropertyType": "Villa",
            "AssetType": "Residential",
            "SizeRange": "2400-3100 sq ft",
            "StartingPrice": "2.4 Cr",
            "Micromarket": "Anjuna",
            "Majormarket": "North Goa",
            "Status": "Ready to move",
            "PlantationType": "Coconut",
            "RERAID": "PRGO01231234",
            "TotalUnits": "24",
            "WebsiteLink": "https://example.com/sea-breeze",
            "vibeDescriptors": ["beachfront", "lively"],
            "vibeSummary": "Party-ready villas by the sea"
        });

        let property: Property = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(property.rera_id, "PRGO01231234");
        assert_eq!(serde_json::to_value(&property).unwrap(), value);
    }
}
