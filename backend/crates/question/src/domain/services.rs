//! Domain Services
//!
//! Pure domain logic: field validation and search-pattern helpers.

use kernel::error::field::{FieldError, FieldErrors};

use crate::domain::entities::{NewQuestion, QuestionPatch};
use crate::domain::value_objects::{Difficulty, Platform};

/// Unvalidated question fields as received; `None` means "not sent"
#[derive(Debug, Clone, Default)]
pub struct QuestionDraft {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub question_number: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub example: Option<String>,
    pub solution: Option<String>,
    pub company: Option<String>,
}

/// Required text fields, in report order, with their "missing" message
const TITLE: (&str, &str) = ("title", "Question title is required");
const QUESTION_NUMBER: (&str, &str) = ("questionNumber", "Question number is required");
const CATEGORY: (&str, &str) = ("category", "Category is required");
const DESCRIPTION: (&str, &str) = ("description", "Question description is required");
const EXAMPLE: (&str, &str) = ("example", "At least one example is required");
const SOLUTION: (&str, &str) = ("solution", "Java solution is required");

/// Trimmed value of a required text field, or record why not
fn required_text(
    errors: &mut FieldErrors,
    (field, missing): (&'static str, &'static str),
    value: Option<String>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            errors.push(field, missing);
            None
        }
    }
}

fn required_platform(errors: &mut FieldErrors, value: Option<String>) -> Option<Platform> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        errors.push("platform", "Platform is required");
        return None;
    }
    value
        .parse()
        .map_err(|_| errors.push("platform", "Invalid platform"))
        .ok()
}

fn required_difficulty(errors: &mut FieldErrors, value: Option<String>) -> Option<Difficulty> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        errors.push("difficulty", "Difficulty is required");
        return None;
    }
    value
        .parse()
        .map_err(|_| errors.push("difficulty", "Difficulty must be Easy, Medium, or Hard"))
        .ok()
}

/// Validate a full question for creation
///
/// Every failing field is reported, one message per field, in field order.
pub fn validate_new(draft: QuestionDraft) -> Result<NewQuestion, Vec<FieldError>> {
    let mut errors = FieldErrors::new();

    let title = required_text(&mut errors, TITLE, draft.title);
    let platform = required_platform(&mut errors, draft.platform);
    let question_number = required_text(&mut errors, QUESTION_NUMBER, draft.question_number);
    let difficulty = required_difficulty(&mut errors, draft.difficulty);
    let category = required_text(&mut errors, CATEGORY, draft.category);
    let description = required_text(&mut errors, DESCRIPTION, draft.description);
    let example = required_text(&mut errors, EXAMPLE, draft.example);
    let solution = required_text(&mut errors, SOLUTION, draft.solution);
    let company = draft
        .company
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    match (
        title,
        platform,
        question_number,
        difficulty,
        category,
        description,
        example,
        solution,
    ) {
        (
            Some(title),
            Some(platform),
            Some(question_number),
            Some(difficulty),
            Some(category),
            Some(description),
            Some(example),
            Some(solution),
        ) => Ok(NewQuestion {
            title,
            platform,
            question_number,
            difficulty,
            category,
            description,
            example,
            solution,
            company,
        }),
        _ => Err(errors.into_vec()),
    }
}

/// Validate only the fields present in a partial update
///
/// A present field obeys the same rules as on create.
pub fn validate_patch(draft: QuestionDraft) -> Result<QuestionPatch, Vec<FieldError>> {
    let mut errors = FieldErrors::new();

    let title = draft
        .title
        .and_then(|v| required_text(&mut errors, TITLE, Some(v)));
    let platform = draft
        .platform
        .and_then(|v| required_platform(&mut errors, Some(v)));
    let question_number = draft
        .question_number
        .and_then(|v| required_text(&mut errors, QUESTION_NUMBER, Some(v)));
    let difficulty = draft
        .difficulty
        .and_then(|v| required_difficulty(&mut errors, Some(v)));
    let category = draft
        .category
        .and_then(|v| required_text(&mut errors, CATEGORY, Some(v)));
    let description = draft
        .description
        .and_then(|v| required_text(&mut errors, DESCRIPTION, Some(v)));
    let example = draft
        .example
        .and_then(|v| required_text(&mut errors, EXAMPLE, Some(v)));
    let solution = draft
        .solution
        .and_then(|v| required_text(&mut errors, SOLUTION, Some(v)));

    let patch = QuestionPatch {
        title,
        platform,
        question_number,
        difficulty,
        category,
        description,
        example,
        solution,
        company: draft.company.map(|c| c.trim().to_string()),
    };

    errors.finish(patch)
}

/// Escape `%`, `_` and `\` so user text matches literally inside `LIKE`
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Case-insensitive literal substring test (in-memory twin of `ILIKE '%x%'`)
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> QuestionDraft {
        QuestionDraft {
            title: Some("  Two Sum ".to_string()),
            platform: Some("LeetCode".to_string()),
            question_number: Some("1".to_string()),
            difficulty: Some("Easy".to_string()),
            category: Some("Array".to_string()),
            description: Some("Find indices".to_string()),
            example: Some("[2,7] 9 -> [0,1]".to_string()),
            solution: Some("class Solution {}".to_string()),
            company: None,
        }
    }

    #[test]
    fn test_validate_new_trims_and_defaults_company() {
        let q = validate_new(full_draft()).unwrap();
        assert_eq!(q.title, "Two Sum");
        assert_eq!(q.platform, Platform::LeetCode);
        assert_eq!(q.company, "");
    }

    #[test]
    fn test_validate_new_reports_every_field() {
        let errors = validate_new(QuestionDraft::default()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_ref()).collect();
        assert_eq!(
            fields,
            [
                "title",
                "platform",
                "questionNumber",
                "difficulty",
                "category",
                "description",
                "example",
                "solution"
            ]
        );
        assert_eq!(errors[0].message, "Question title is required");
        assert_eq!(errors[1].message, "Platform is required");
    }

    #[test]
    fn test_validate_new_enum_messages() {
        let draft = QuestionDraft {
            platform: Some("TopCoder".to_string()),
            difficulty: Some("easy".to_string()),
            ..full_draft()
        };
        let errors = validate_new(draft).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Invalid platform");
        assert_eq!(
            errors[1].message,
            "Difficulty must be Easy, Medium, or Hard"
        );
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let draft = QuestionDraft {
            category: Some("   ".to_string()),
            ..full_draft()
        };
        let errors = validate_new(draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "category");
    }

    #[test]
    fn test_validate_patch_only_checks_present() {
        let patch = validate_patch(QuestionDraft {
            difficulty: Some("Hard".to_string()),
            company: Some(" Amazon ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.difficulty, Some(Difficulty::Hard));
        assert_eq!(patch.company.as_deref(), Some("Amazon"));
        assert_eq!(patch.title, None);

        let errors = validate_patch(QuestionDraft {
            title: Some("".to_string()),
            platform: Some("Nope".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "title");
        assert_eq!(errors[1].message, "Invalid platform");
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Dynamic Programming", "program"));
        assert!(contains_ci("GFG", "gf"));
        assert!(!contains_ci("Array", "tree"));
        // No pattern semantics
        assert!(!contains_ci("Array", "A.r"));
    }
}
