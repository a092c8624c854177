//! Display categories for task types.
//!
//! One shared, immutable mapping owned here: classification and the
//! per-category color token both live on [`Category`], so the transform
//! output and any rendered legend cannot diverge.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of display categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Development,
    Design,
    #[serde(rename = "QA")]
    Qa,
    Testing,
    Documentation,
    Research,
    Support,
    DevOps,
    Database,
    #[serde(rename = "API Design")]
    ApiDesign,
    #[serde(rename = "Project Management")]
    ProjectManagement,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Development,
        Category::Design,
        Category::Qa,
        Category::Testing,
        Category::Documentation,
        Category::Research,
        Category::Support,
        Category::DevOps,
        Category::Database,
        Category::ApiDesign,
        Category::ProjectManagement,
    ];

    /// Map a free-form task-type label to a category.
    ///
    /// Exact case-sensitive table first (canonical category names plus the
    /// raw labels the service actually emits), then a lower-cased substring
    /// search in a fixed priority order. The priority order is inherited
    /// from the original lookup and is the tie-break for labels matching
    /// several buckets ("test-driven-development" resolves to Development
    /// because the development check runs before the test check).
    pub fn classify(type_label: &str) -> Category {
        if let Some(category) = Self::exact(type_label) {
            return category;
        }

        let lower = type_label.to_lowercase();
        if lower.contains("development") || lower.contains("code") {
            Category::Development
        } else if lower.contains("design") || lower.contains("ui") {
            Category::Design
        } else if lower.contains("test") || lower.contains("qa") {
            Category::Testing
        } else if lower.contains("doc") {
            Category::Documentation
        } else if lower.contains("support") || lower.contains("inquiry") {
            Category::Support
        } else {
            Category::Development
        }
    }

    fn exact(type_label: &str) -> Option<Category> {
        let category = match type_label {
            "Development" => Category::Development,
            "Design" => Category::Design,
            "QA" => Category::Qa,
            "Testing" => Category::Testing,
            "Documentation" => Category::Documentation,
            "Research" => Category::Research,
            "DevOps" => Category::DevOps,
            "Database" => Category::Database,
            "API Design" => Category::ApiDesign,
            "Project Management" => Category::ProjectManagement,
            "product_inquiry" | "technical_support" => Category::Support,
            "code_review" | "backend" | "frontend" | "mobile" => Category::Development,
            "ui_ux" => Category::Design,
            _ => return None,
        };
        Some(category)
    }

    /// Human-readable label, identical to the wire/legend spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Qa => "QA",
            Category::Testing => "Testing",
            Category::Documentation => "Documentation",
            Category::Research => "Research",
            Category::Support => "Support",
            Category::DevOps => "DevOps",
            Category::Database => "Database",
            Category::ApiDesign => "API Design",
            Category::ProjectManagement => "Project Management",
        }
    }

    /// Presentation color token. Pure function of the category; any
    /// renderer (grid cell, legend) resolves colors through this one table.
    pub fn color_token(&self) -> &'static str {
        match self {
            Category::Development => "blue",
            Category::Design => "purple",
            Category::Qa => "green",
            Category::Testing => "emerald",
            Category::Documentation => "amber",
            Category::Research => "pink",
            Category::Support => "cyan",
            Category::DevOps => "indigo",
            Category::Database => "orange",
            Category::ApiDesign => "teal",
            Category::ProjectManagement => "rose",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn service_labels_hit_the_exact_table() {
        // product_inquiry is an exact-table hit, not the substring fallback
        assert_eq!(Category::classify("product_inquiry"), Category::Support);
        assert_eq!(Category::classify("technical_support"), Category::Support);
        assert_eq!(Category::classify("code_review"), Category::Development);
        assert_eq!(Category::classify("ui_ux"), Category::Design);
    }

    #[test]
    fn canonical_names_map_to_themselves() {
        assert_eq!(Category::classify("QA"), Category::Qa);
        assert_eq!(Category::classify("API Design"), Category::ApiDesign);
        assert_eq!(
            Category::classify("Project Management"),
            Category::ProjectManagement
        );
    }

    #[rstest]
    #[case::development("game_code_cleanup", Category::Development)]
    #[case::design("ui_polish_pass", Category::Design)]
    #[case::testing("integration_testing", Category::Testing)]
    #[case::qa("qa_sweep", Category::Testing)]
    #[case::documentation("api_docs", Category::Documentation)]
    #[case::support("customer_support_shift", Category::Support)]
    fn substring_fallback(#[case] label: &str, #[case] expected: Category) {
        assert_eq!(Category::classify(label), expected);
    }

    #[test]
    fn inquiry_labels_off_the_exact_table_hit_the_ui_bucket() {
        // "inquiry" contains "ui", and the design check runs before the
        // support check. This is why product_inquiry must stay in the exact
        // table; any other inquiry label lands in Design.
        assert_eq!(Category::classify("billing_inquiry"), Category::Design);
    }

    #[test]
    fn unknown_label_defaults_to_development() {
        assert_eq!(Category::classify("blorgon_ops"), Category::Development);
    }

    #[test]
    fn substring_priority_is_a_fixed_tie_break() {
        // Contains both "test" and "development"; the development bucket is
        // checked first, so table order wins over lexical proximity.
        assert_eq!(
            Category::classify("test-driven-development"),
            Category::Development
        );
    }

    #[test]
    fn color_tokens_are_distinct_per_category() {
        let tokens: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.color_token()).collect();
        assert_eq!(tokens.len(), Category::ALL.len());
    }

    #[test]
    fn label_roundtrips_through_serde() {
        let json = serde_json::to_string(&Category::ApiDesign).expect("serialize");
        assert_eq!(json, "\"API Design\"");
        let back: Category = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Category::ApiDesign);
    }
}
