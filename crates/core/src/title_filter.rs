use crate::Outline;

/// Outlines whose title contains `query`, ignoring case. An empty query keeps
/// everything. Input order is preserved.
pub fn filter_by_title<'a>(outlines: &'a [Outline], query: &str) -> Vec<&'a Outline> {
    if query.is_empty() {
        return outlines.iter().collect();
    }
    let needle = query.to_lowercase();
    outlines.iter().filter(|o| o.title.to_lowercase().contains(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutlineContent, UserId};
    use chrono::Utc;

    fn outline(id: &str, title: &str) -> Outline {
        Outline {
            id: id.to_owned(),
            user_id: UserId::new("u1"),
            title: title.to_owned(),
            content: OutlineContent::default(),
            created_at: Utc::now(),
        }
    }

    fn ids(found: &[&Outline]) -> Vec<String> {
        found.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        let all = vec![outline("1", "Trade policy"), outline("2", "Climate")];
        assert_eq!(ids(&filter_by_title(&all, "")), vec!["1", "2"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let all = vec![
            outline("1", "Is NATO still relevant?"),
            outline("2", "Climate finance"),
            outline("3", "nato expansion and Russia"),
        ];
        assert_eq!(ids(&filter_by_title(&all, "NaTo")), vec!["1", "3"]);
        assert_eq!(ids(&filter_by_title(&all, "finance")), vec!["2"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let all = vec![outline("1", "Trade policy")];
        assert!(filter_by_title(&all, "tariff").is_empty());
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let all = vec![outline("1", "Trade policy"), outline("2", "Climate")];
        assert_eq!(ids(&filter_by_title(&all, " ")), vec!["1"]);
    }
}
