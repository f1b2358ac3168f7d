//! Quick recommendations: a fixed list driven only by the `industry_standard` flag.

use crate::assessment::models::{FrameworkInfo, FrameworkRecommendation};

fn recommendation(
    name: &str,
    framework_description: &str,
    priority: &str,
    description: &str,
) -> FrameworkRecommendation {
    FrameworkRecommendation {
        framework: FrameworkInfo {
            id: None,
            name: name.to_string(),
            description: framework_description.to_string(),
        },
        priority: priority.to_string(),
        description: description.to_string(),
    }
}

/// GDPR always; ISO 27001 then SOC 2 when `industry_standard` is set.
pub fn quick_recommendations(industry_standard: bool) -> Vec<FrameworkRecommendation> {
    let mut recommendations = vec![recommendation(
        "GDPR (General Data Protection Regulation)",
        "EU data protection regulation",
        "high",
        "Essential for businesses handling personal data of EU residents",
    )];

    if industry_standard {
        recommendations.push(recommendation(
            "ISO 27001",
            "Information security management standard",
            "medium",
            "Industry standard for information security management",
        ));
        recommendations.push(recommendation(
            "SOC 2",
            "Security and availability controls",
            "medium",
            "Important for service organizations handling customer data",
        ));
    }

    recommendations
}
