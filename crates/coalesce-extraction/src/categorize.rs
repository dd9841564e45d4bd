//! Ordered keyword ruleset mapping symbol text to a functional category.

use coalesce_core::FunctionalCategory;

/// Evaluated top to bottom; the first group with any keyword match wins.
pub const CATEGORY_RULES: &[(FunctionalCategory, &[&str])] = &[
    (
        FunctionalCategory::DatabaseOperations,
        &["database", "db", "sql", "query", "connection"],
    ),
    (
        FunctionalCategory::WebInterface,
        &["flask", "web", "api", "request", "response", "html"],
    ),
    (
        FunctionalCategory::OptimizationEngine,
        &["optimize", "enhance", "improve", "performance", "efficiency"],
    ),
    (
        FunctionalCategory::DataAnalysis,
        &["analyze", "process", "parse", "extract", "transform"],
    ),
    (
        FunctionalCategory::MonitoringSystem,
        &["monitor", "track", "log", "watch", "observe"],
    ),
];

/// Categorize lowercased tokens by substring match over their space-joined text.
pub fn categorize<S: AsRef<str>>(tokens: &[S]) -> FunctionalCategory {
    let text = tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(FunctionalCategory::GeneralUtility)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tokens_are_general_utility() {
        let none: [&str; 0] = [];
        assert_eq!(categorize(&none), FunctionalCategory::GeneralUtility);
    }

    #[test]
    fn first_matching_group_wins() {
        // "query" (database) and "request" (web) both match; database is first.
        assert_eq!(
            categorize(&["handle_request", "run_query"]),
            FunctionalCategory::DatabaseOperations
        );
    }

    #[test]
    fn substring_matches_count() {
        assert_eq!(
            categorize(&["performancetuner"]),
            FunctionalCategory::OptimizationEngine
        );
        assert_eq!(categorize(&["watchdog"]), FunctionalCategory::MonitoringSystem);
        assert_eq!(categorize(&["parse_rows"]), FunctionalCategory::DataAnalysis);
    }

    #[test]
    fn unmatched_tokens_fall_through() {
        assert_eq!(categorize(&["helper", "utils"]), FunctionalCategory::GeneralUtility);
    }
}
