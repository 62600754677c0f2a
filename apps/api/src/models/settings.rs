use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Brand the assistant speaks for. Known fields are typed; anything else the
/// dashboard sends (reply speed, daily caps, toggles) is kept in `extra` so a
/// stored document round-trips unchanged.
///
/// An explicit `null` on a typed field reads as absent and is not written
/// back, so `{"brandName": null}` counts as empty settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BrandSettings {
    pub fn is_empty(&self) -> bool {
        self.brand_name.is_none()
            && self.industry.is_none()
            && self.keywords.is_none()
            && self.default_tone.is_none()
            && self.extra.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_field_round_trips_exactly() {
        let input = json!({"brandName": "Acme"});
        let settings: BrandSettings = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(settings.brand_name.as_deref(), Some("Acme"));
        assert_eq!(serde_json::to_value(&settings).unwrap(), input);
    }

    #[test]
    fn test_unknown_fields_kept_in_extra() {
        let input = json!({
            "brandName": "Acme",
            "industry": "Retail",
            "keywords": ["shipping", "refund"],
            "defaultTone": "Professional",
            "replySpeed": "Fast",
            "maxDailyReplies": 50,
            "autoReplyEnabled": false
        });
        let settings: BrandSettings = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(settings.keywords(), ["shipping", "refund"]);
        assert_eq!(settings.extra.len(), 3);
        assert_eq!(settings.extra["maxDailyReplies"], json!(50));
        assert_eq!(serde_json::to_value(&settings).unwrap(), input);
    }

    #[test]
    fn test_null_typed_field_reads_as_absent() {
        let settings: BrandSettings =
            serde_json::from_value(json!({"brandName": null})).unwrap();
        assert!(settings.is_empty());
        assert_eq!(serde_json::to_value(&settings).unwrap(), json!({}));

        let settings: BrandSettings =
            serde_json::from_value(json!({"brandName": null, "industry": "Retail"})).unwrap();
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"industry": "Retail"})
        );
    }

    #[test]
    fn test_empty_object_is_empty() {
        let settings: BrandSettings = serde_json::from_value(json!({})).unwrap();
        assert!(settings.is_empty());
        assert!(settings.keywords().is_empty());
    }
}
