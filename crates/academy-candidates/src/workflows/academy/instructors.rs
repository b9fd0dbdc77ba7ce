//! Instructor discovery: first candidate of a role matching a fixed rule.

use super::domain::Candidate;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstructorLookupError {
    #[error("candidate '{name}' has no name token at position {index}")]
    MissingNameToken { name: String, index: usize },
}

/// A named, independently testable rule over a single candidate.
pub trait CandidatePredicate {
    fn label(&self) -> &str;

    fn matches(&self, candidate: &Candidate) -> Result<bool, InstructorLookupError>;
}

impl<F> CandidatePredicate for F
where
    F: Fn(&Candidate) -> Result<bool, InstructorLookupError>,
{
    fn label(&self) -> &str {
        "ad-hoc predicate"
    }

    fn matches(&self, candidate: &Candidate) -> Result<bool, InstructorLookupError> {
        self(candidate)
    }
}

/// QA instructor: from SC, aged 25, first name a palindrome.
#[derive(Debug, Clone, Copy, Default)]
pub struct QaInstructorRule;

pub const QA_INSTRUCTOR: QaInstructorRule = QaInstructorRule;

impl CandidatePredicate for QaInstructorRule {
    fn label(&self) -> &str {
        "QA instructor"
    }

    fn matches(&self, candidate: &Candidate) -> Result<bool, InstructorLookupError> {
        if candidate.state != "SC" || candidate.age != 25 {
            return Ok(false);
        }
        Ok(is_palindrome(first_token(candidate)?))
    }
}

/// Mobile instructor: from PI, even age strictly between 30 and 40, last name starting with 'C'.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileInstructorRule;

pub const MOBILE_INSTRUCTOR: MobileInstructorRule = MobileInstructorRule;

impl CandidatePredicate for MobileInstructorRule {
    fn label(&self) -> &str {
        "Mobile instructor"
    }

    fn matches(&self, candidate: &Candidate) -> Result<bool, InstructorLookupError> {
        if candidate.state != "PI" {
            return Ok(false);
        }
        let age = candidate.age;
        if !(age > 30 && age < 40 && age % 2 == 0) {
            return Ok(false);
        }
        Ok(second_token(candidate)?.starts_with('C'))
    }
}

/// First candidate, in iteration order, accepted by `predicate`.
pub fn find_first<'a, P>(
    candidates: &'a [Candidate],
    predicate: &P,
) -> Result<Option<&'a Candidate>, InstructorLookupError>
where
    P: CandidatePredicate + ?Sized,
{
    for candidate in candidates {
        if predicate.matches(candidate)? {
            debug!(rule = predicate.label(), candidate = %candidate.name, "rule matched");
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

pub fn is_palindrome(value: &str) -> bool {
    let lowered = value.to_lowercase();
    lowered.chars().eq(lowered.chars().rev())
}

pub fn first_token(candidate: &Candidate) -> Result<&str, InstructorLookupError> {
    token(candidate, 0)
}

pub fn second_token(candidate: &Candidate) -> Result<&str, InstructorLookupError> {
    token(candidate, 1)
}

fn token(candidate: &Candidate, index: usize) -> Result<&str, InstructorLookupError> {
    candidate
        .name_token(index)
        .ok_or_else(|| InstructorLookupError::MissingNameToken {
            name: candidate.name.clone(),
            index,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindrome_ignores_case() {
        assert!(is_palindrome("Ana"));
        assert!(is_palindrome("Otto"));
        assert!(!is_palindrome("Carlos"));
        assert!(is_palindrome(""));
    }

    #[test]
    fn qa_rule_requires_state_age_and_palindrome() {
        assert!(QA_INSTRUCTOR
            .matches(&Candidate::new("Ana Souza", 25, "QA", "SC"))
            .expect("evaluates"));
        assert!(!QA_INSTRUCTOR
            .matches(&Candidate::new("Ana Souza", 26, "QA", "SC"))
            .expect("evaluates"));
        assert!(!QA_INSTRUCTOR
            .matches(&Candidate::new("Ana Souza", 25, "QA", "SP"))
            .expect("evaluates"));
        assert!(!QA_INSTRUCTOR
            .matches(&Candidate::new("Bruna Souza", 25, "QA", "SC"))
            .expect("evaluates"));
    }

    #[test]
    fn mobile_rule_bounds_are_exclusive_and_even() {
        let rule = MOBILE_INSTRUCTOR;
        for (age, expected) in [(30, false), (32, true), (33, false), (38, true), (40, false)] {
            let candidate = Candidate::new("Rita Costa", age, "Mobile", "PI");
            assert_eq!(rule.matches(&candidate), Ok(expected), "age {age}");
        }
        assert_eq!(
            rule.matches(&Candidate::new("Rita Lima", 32, "Mobile", "PI")),
            Ok(false)
        );
        assert_eq!(
            rule.matches(&Candidate::new("Rita Costa", 32, "Mobile", "CE")),
            Ok(false)
        );
    }

    #[test]
    fn missing_token_is_reported_once_other_clauses_hold() {
        let single_name = Candidate::new("Rita", 32, "Mobile", "PI");
        assert_eq!(
            MOBILE_INSTRUCTOR.matches(&single_name),
            Err(InstructorLookupError::MissingNameToken {
                name: "Rita".to_string(),
                index: 1,
            })
        );

        let elsewhere = Candidate::new("Rita", 32, "Mobile", "SP");
        assert_eq!(MOBILE_INSTRUCTOR.matches(&elsewhere), Ok(false));
    }

    #[test]
    fn qa_rule_reports_blank_name_after_state_and_age_match() {
        let blank = Candidate::new("   ", 25, "QA", "SC");
        assert_eq!(
            QA_INSTRUCTOR.matches(&blank),
            Err(InstructorLookupError::MissingNameToken {
                name: "   ".to_string(),
                index: 0,
            })
        );
        assert_eq!(
            find_first(std::slice::from_ref(&blank), &QA_INSTRUCTOR),
            Err(InstructorLookupError::MissingNameToken {
                name: "   ".to_string(),
                index: 0,
            })
        );

        let older = Candidate::new("", 26, "QA", "SC");
        assert_eq!(QA_INSTRUCTOR.matches(&older), Ok(false));
    }

    #[test]
    fn find_first_returns_earliest_match_or_none() {
        let candidates = vec![
            Candidate::new("Bruno Costa", 25, "QA", "SC"),
            Candidate::new("Ana Silva", 25, "QA", "SC"),
            Candidate::new("Ava Lima", 25, "QA", "SC"),
        ];
        let found = find_first(&candidates, &QA_INSTRUCTOR).expect("search succeeds");
        assert_eq!(found.map(|c| c.name.as_str()), Some("Ana Silva"));

        let none = find_first(&candidates[..1], &QA_INSTRUCTOR).expect("search succeeds");
        assert!(none.is_none());

        let empty = find_first(&[], &QA_INSTRUCTOR).expect("search succeeds");
        assert!(empty.is_none());
    }

    #[test]
    fn closures_act_as_predicates() {
        let candidates = vec![
            Candidate::new("Ana Silva", 25, "QA", "SC"),
            Candidate::new("Bob Costa", 41, "QA", "SP"),
        ];
        let senior = |candidate: &Candidate| Ok::<_, InstructorLookupError>(candidate.age > 40);
        let found = find_first(&candidates, &senior).expect("search succeeds");
        assert_eq!(found.map(|c| c.name.as_str()), Some("Bob Costa"));
    }
}
