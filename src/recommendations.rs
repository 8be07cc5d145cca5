//! Rule-based recommendation generation.
//!
//! The rules are data: an ordered table of predicate/template pairs walked
//! in a single deterministic pass. Output preserves table order, several
//! rules may fire for one snapshot, and none firing yields an empty list.
//! Adding or removing a rule is a table edit, not new control flow.

use crate::core::{BusinessMetrics, Priority, Recommendation, RecommendationCategory};
use im::Vector;

struct Rule {
    applies: fn(&BusinessMetrics) -> bool,
    category: RecommendationCategory,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    impact: Priority,
    timeframe: &'static str,
    action: &'static str,
}

impl Rule {
    fn instantiate(&self) -> Recommendation {
        Recommendation {
            category: self.category,
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            impact: self.impact,
            timeframe: self.timeframe.to_string(),
            action: self.action.to_string(),
        }
    }
}

static RULES: &[Rule] = &[
    Rule {
        applies: |m| m.cash_flow < 0.0,
        category: RecommendationCategory::Financial,
        title: "Improve Cash Flow Management",
        description: "Your business is experiencing negative cash flow. Consider implementing better cash flow forecasting and expense management.",
        priority: Priority::High,
        impact: Priority::High,
        timeframe: "1-3 months",
        action: "Implement cash flow forecasting tools and review all non-essential expenses",
    },
    Rule {
        // No recorded assets counts as an infinite ratio, so the rule fires.
        applies: |m| {
            if m.assets > 0.0 {
                m.debt / m.assets > 0.7
            } else {
                true
            }
        },
        category: RecommendationCategory::Financial,
        title: "Reduce Debt-to-Asset Ratio",
        description: "Your debt-to-asset ratio is high, which increases financial risk.",
        priority: Priority::High,
        impact: Priority::High,
        timeframe: "6-12 months",
        action: "Create a debt reduction plan and consider asset optimization",
    },
    Rule {
        applies: |m| m.years_in_business < 3.0,
        category: RecommendationCategory::BusinessDevelopment,
        title: "Strengthen Business Foundation",
        description: "As a relatively new business, focus on building stable processes and customer relationships.",
        priority: Priority::Medium,
        impact: Priority::Medium,
        timeframe: "3-6 months",
        action: "Develop standard operating procedures and customer retention strategies",
    },
    Rule {
        applies: |m| m.digital_presence < 7.0,
        category: RecommendationCategory::DigitalTransformation,
        title: "Enhance Digital Presence",
        description: "Improving your digital presence can help reach more customers and increase revenue.",
        priority: Priority::Medium,
        impact: Priority::Medium,
        timeframe: "3-6 months",
        action: "Invest in website optimization, social media presence, and online marketing",
    },
    Rule {
        applies: |m| m.competition_level > 7.0,
        category: RecommendationCategory::MarketStrategy,
        title: "Differentiate from Competition",
        description: "High competition requires strong differentiation strategies.",
        priority: Priority::Medium,
        impact: Priority::High,
        timeframe: "3-6 months",
        action: "Develop unique value propositions and focus on customer service excellence",
    },
    Rule {
        applies: |m| m.customer_retention < 70.0,
        category: RecommendationCategory::CustomerRetention,
        title: "Improve Customer Retention",
        description: "Low customer retention rate is affecting business stability.",
        priority: Priority::High,
        impact: Priority::High,
        timeframe: "1-3 months",
        action: "Implement customer feedback systems and loyalty programs",
    },
];

/// Evaluates every rule against the snapshot and returns the firing ones in
/// declaration order.
pub fn generate_recommendations(metrics: &BusinessMetrics) -> Vector<Recommendation> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(metrics))
        .map(Rule::instantiate)
        .collect()
}
