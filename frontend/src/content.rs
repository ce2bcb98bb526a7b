//! Marketing copy for the landing page.
//!
//! The copy is kept in `content/landing.json`, compiled into the binary and
//! parsed once on first use.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::animation::counter::CounterTargets;

const LANDING_JSON: &str = include_str!("../content/landing.json");

static LANDING: Lazy<Result<LandingContent, ContentError>> = Lazy::new(|| parse(LANDING_JSON));

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse landing content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid landing content: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LandingContent {
    pub nav: NavContent,
    pub hero: HeroContent,
    pub features: FeaturesContent,
    pub stats: StatsContent,
    pub pricing: PricingContent,
    pub faq: FaqContent,
    pub cta: CtaContent,
    pub footer: FooterContent,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavContent {
    pub logo_src: String,
    pub logo_alt: String,
    pub features_label: String,
    pub pricing_label: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroContent {
    pub headline: Vec<String>,
    pub subtitle: String,
    pub primary_label: String,
    pub primary_href: String,
    pub secondary_label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeaturesContent {
    pub heading: SectionHeading,
    pub items: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatsContent {
    pub user_count_label: String,
    pub total_blocks_label: String,
    pub focus_hours_label: String,
    pub rating_label: String,
    #[serde(default)]
    pub targets: CounterTargets,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub button_label: String,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PricingContent {
    pub heading: SectionHeading,
    pub tiers: Vec<PricingTier>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqContent {
    pub heading: SectionHeading,
    pub entries: Vec<FaqEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CtaContent {
    pub title: String,
    pub subtitle: String,
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterContent {
    pub links: Vec<FooterLink>,
    pub copyright: String,
}

/// The embedded landing content, parsed on first access.
pub fn landing() -> Result<&'static LandingContent, &'static ContentError> {
    LANDING.as_ref()
}

pub fn parse(json: &str) -> Result<LandingContent, ContentError> {
    let content: LandingContent = serde_json::from_str(json)?;
    content.validate()?;
    Ok(content)
}

impl LandingContent {
    fn validate(&self) -> Result<(), ContentError> {
        if self.faq.entries.is_empty() {
            return Err(ContentError::Invalid("FAQ has no entries".to_string()));
        }
        for (index, entry) in self.faq.entries.iter().enumerate() {
            if entry.question.trim().is_empty() || entry.answer.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "FAQ entry {} needs both a question and an answer",
                    index
                )));
            }
        }
        if let Some(index) = self.features.items.iter().position(|f| f.title.trim().is_empty()) {
            return Err(ContentError::Invalid(format!("feature {} has no title", index)));
        }
        for tier in &self.pricing.tiers {
            if tier.name.trim().is_empty() {
                return Err(ContentError::Invalid("pricing tier without a name".to_string()));
            }
            if tier.features.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "pricing tier {} lists no features",
                    tier.name
                )));
            }
        }
        let rating = self.stats.targets.rating_score;
        if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
            return Err(ContentError::Invalid(format!(
                "rating target {} is outside 0..=5",
                rating
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> serde_json::Value {
        serde_json::from_str(LANDING_JSON).unwrap()
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = landing().unwrap();
        assert_eq!(content.faq.entries.len(), 6);
        assert_eq!(content.features.items.len(), 6);
        assert_eq!(content.pricing.tiers.len(), 2);
        assert_eq!(content.stats.targets, CounterTargets::default());
        assert!(content.pricing.tiers[1].highlighted);
        assert!(!content.pricing.tiers[0].highlighted);
    }

    #[test]
    fn test_nav_labels_come_from_content() {
        let content = landing().unwrap();
        assert_eq!(content.nav.features_label, "Features");
        assert_eq!(content.nav.pricing_label, "Pricing");

        let mut json = embedded();
        json["nav"].as_object_mut().unwrap().remove("pricing_label");
        assert!(matches!(parse(&json.to_string()), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_missing_targets_fall_back_to_defaults() {
        let mut json = embedded();
        json["stats"].as_object_mut().unwrap().remove("targets");
        let content = parse(&json.to_string()).unwrap();
        assert_eq!(content.stats.targets, CounterTargets::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse("{\"nav\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_empty_faq_rejected() {
        let mut json = embedded();
        json["faq"]["entries"] = serde_json::json!([]);
        let err = parse(&json.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn test_blank_answer_rejected() {
        let mut json = embedded();
        json["faq"]["entries"][2]["answer"] = serde_json::json!("  ");
        let err = parse(&json.to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid landing content: FAQ entry 2 needs both a question and an answer"
        );
    }

    #[test]
    fn test_tier_without_features_rejected() {
        let mut json = embedded();
        json["pricing"]["tiers"][0]["features"] = serde_json::json!([]);
        assert!(matches!(parse(&json.to_string()), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_rating_above_five_rejected() {
        let mut json = embedded();
        json["stats"]["targets"]["rating_score"] = serde_json::json!(7.5);
        assert!(matches!(parse(&json.to_string()), Err(ContentError::Invalid(_))));
    }
}
