//! Static recommendation text keyed by elevated risks

use crate::risk::{Condition, RiskAssessment};

/// Guidance lines for every condition whose risk is elevated
pub fn recommendations_for(risks: &RiskAssessment) -> Vec<String> {
    let mut recommendations = Vec::new();

    for condition in Condition::ALL {
        if risks.is_elevated(condition) {
            recommendations.extend(
                condition_guidance(condition)
                    .iter()
                    .map(|line| line.to_string()),
            );
        }
    }

    recommendations
}

fn condition_guidance(condition: Condition) -> &'static [&'static str] {
    match condition {
        Condition::Cardiovascular => &[
            "Increase intake of heart-healthy foods like leafy greens and nuts",
            "Consider stress reduction techniques",
            "Aim for regular cardiovascular exercise",
        ],
        Condition::Diabetes => &[
            "Focus on low glycemic index vegetarian foods",
            "Incorporate more fiber-rich foods",
            "Monitor portion sizes carefully",
        ],
        Condition::MetabolicSyndrome => &[
            "Prioritize whole grains and plant-based proteins",
            "Reduce processed food intake",
            "Increase physical activity",
        ],
    }
}
