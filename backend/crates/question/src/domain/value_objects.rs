//! Question Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Platform
// ============================================================================

/// Judge / practice site a question comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LeetCode,
    #[serde(rename = "GFG")]
    Gfg,
    Codeforces,
    CodeChef,
    HackerRank,
    InterviewBit,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::LeetCode,
        Platform::Gfg,
        Platform::Codeforces,
        Platform::CodeChef,
        Platform::HackerRank,
        Platform::InterviewBit,
        Platform::Other,
    ];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::LeetCode => "LeetCode",
            Platform::Gfg => "GFG",
            Platform::Codeforces => "Codeforces",
            Platform::CodeChef => "CodeChef",
            Platform::HackerRank => "HackerRank",
            Platform::InterviewBit => "InterviewBit",
            Platform::Other => "Other",
        }
    }
}

impl FromStr for Platform {
    type Err = ();

    /// Exact, case-sensitive match on the display label
    fn from_str(s: &str) -> Result<Self, ()> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Difficulty
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Pagination
// ============================================================================

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// 1-based page window over a newest-first listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    /// Build from raw query-string values
    ///
    /// Non-numeric or missing values fall back to the defaults; page and
    /// limit are raised to at least 1. The limit is otherwise taken as given.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE)
            .max(1);
        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_LIMIT)
            .max(1);

        Self { page, limit }
    }

    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`
    #[inline]
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total - 1) / self.limit + 1
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Listing filters; all present filters must match (AND)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Case-insensitive substring over title, platform, number, category, company (OR)
    pub search: Option<String>,
    /// Exact platform label
    pub platform: Option<String>,
    /// Exact difficulty label
    pub difficulty: Option<String>,
    /// Case-insensitive substring of category
    pub category: Option<String>,
    /// Case-insensitive substring of company
    pub company: Option<String>,
}

impl QuestionFilter {
    /// Drop empty values so `?platform=` means "no platform filter"
    pub fn normalized(self) -> Self {
        fn keep(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }

        Self {
            search: keep(self.search),
            platform: keep(self.platform),
            difficulty: keep(self.difficulty),
            category: keep(self.category),
            company: keep(self.company),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_labels() {
        for p in Platform::ALL {
            assert_eq!(p.as_str().parse::<Platform>(), Ok(p));
        }
        assert_eq!("GFG".parse::<Platform>(), Ok(Platform::Gfg));
        assert!("leetcode".parse::<Platform>().is_err());
        assert!("Gfg".parse::<Platform>().is_err());
        assert_eq!(serde_json::to_string(&Platform::Gfg).unwrap(), "\"GFG\"");
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("medium".parse::<Difficulty>().is_err());
        assert!("Extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination::from_raw(None, None);
        assert_eq!((p.page(), p.limit(), p.offset()), (1, 10, 0));

        let p = Pagination::from_raw(Some("abc"), Some("x"));
        assert_eq!((p.page(), p.limit()), (1, 10));
    }

    #[test]
    fn test_pagination_clamps() {
        let p = Pagination::from_raw(Some("0"), Some("0"));
        assert_eq!((p.page(), p.limit()), (1, 1));

        let p = Pagination::from_raw(Some("-3"), Some("-1000"));
        assert_eq!((p.page(), p.limit()), (1, 1));

        let p = Pagination::from_raw(Some("3"), Some("20"));
        assert_eq!(p.offset(), 40);
    }

    #[test]
    fn test_large_limit_is_honoured() {
        let p = Pagination::from_raw(Some("1"), Some("250"));
        assert_eq!(p.limit(), 250);
        assert_eq!(p.total_pages(500), 2);
        assert_eq!(p.total_pages(501), 3);

        let p = Pagination::new(2, i64::MAX);
        assert_eq!(p.total_pages(7), 1);
        assert_eq!(p.offset(), i64::MAX);
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(1, 10);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
    }

    #[test]
    fn test_filter_normalized() {
        let filter = QuestionFilter {
            search: Some("  ".to_string()),
            platform: Some("LeetCode".to_string()),
            company: Some(" Google ".to_string()),
            ..Default::default()
        }
        .normalized();

        assert_eq!(filter.search, None);
        assert_eq!(filter.platform.as_deref(), Some("LeetCode"));
        assert_eq!(filter.company.as_deref(), Some("Google"));
    }
}
