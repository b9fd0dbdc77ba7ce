use serde::Serialize;
use std::collections::HashMap;

/// One applicant row from the academy export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    pub name: String,
    pub age: i32,
    pub role: String,
    pub state: String,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        role: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            role: role.into(),
            state: state.into(),
        }
    }

    /// Whitespace separated token of the name at `index`, if present.
    pub fn name_token(&self, index: usize) -> Option<&str> {
        self.name.split_whitespace().nth(index)
    }
}

/// Candidates partitioned by role.
///
/// Roles iterate in the order they were first seen; members keep input order.
#[derive(Debug, Default, Clone)]
pub struct RoleGroups {
    order: Vec<String>,
    members: HashMap<String, Vec<Candidate>>,
}

impl RoleGroups {
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut groups = Self::default();
        for candidate in candidates {
            groups.push(candidate);
        }
        groups
    }

    fn push(&mut self, candidate: Candidate) {
        match self.members.get_mut(&candidate.role) {
            Some(members) => members.push(candidate),
            None => {
                self.order.push(candidate.role.clone());
                self.members.insert(candidate.role.clone(), vec![candidate]);
            }
        }
    }

    pub fn roles(&self) -> &[String] {
        &self.order
    }

    /// Members of `role`; an unknown role has no members.
    pub fn members(&self, role: &str) -> &[Candidate] {
        self.members.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_role(&self, role: &str) -> bool {
        self.members.contains_key(role)
    }

    /// Total number of candidates across every role.
    pub fn len(&self) -> usize {
        self.members.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Candidate])> + '_ {
        self.order
            .iter()
            .map(move |role| (role.as_str(), self.members(role)))
    }

    /// Every candidate, role by role in first-seen order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.iter().flat_map(|(_, members)| members.iter())
    }
}

/// Age extremes and totals for a single role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeStats {
    pub min_age: i32,
    pub max_age: i32,
    /// Rounded to two decimals.
    pub average_age: f64,
    pub total_age: i64,
}

/// Share of the considered candidates that applied for a role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RolePercentage(pub f64);

impl RolePercentage {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for RolePercentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", round_two(self.0))
    }
}

/// Rounds half away from zero at two decimals, so `3.125` becomes `3.13`.
pub(crate) fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_keeps_first_seen_role_order_and_member_order() {
        let groups = RoleGroups::from_candidates(vec![
            Candidate::new("Bia Lima", 22, "Web", "SP"),
            Candidate::new("Ana Silva", 25, "QA", "SC"),
            Candidate::new("Caio Reis", 31, "Web", "RS"),
        ]);

        assert_eq!(groups.roles(), ["Web".to_string(), "QA".to_string()]);
        let web: Vec<_> = groups.members("Web").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(web, ["Bia Lima", "Caio Reis"]);
        assert_eq!(groups.len(), 3);

        let flattened: Vec<_> = groups.candidates().map(|c| c.name.as_str()).collect();
        assert_eq!(flattened, ["Bia Lima", "Caio Reis", "Ana Silva"]);
    }

    #[test]
    fn unknown_role_has_no_members() {
        let groups = RoleGroups::from_candidates(vec![Candidate::new("Ana", 25, "QA", "SC")]);
        assert!(groups.members("Mobile").is_empty());
        assert!(!groups.contains_role("Mobile"));
    }

    #[test]
    fn name_tokens_skip_repeated_whitespace() {
        let candidate = Candidate::new("Otto   Carvalho", 32, "Mobile", "PI");
        assert_eq!(candidate.name_token(0), Some("Otto"));
        assert_eq!(candidate.name_token(1), Some("Carvalho"));
        assert_eq!(candidate.name_token(2), None);
    }

    #[test]
    fn percentage_renders_two_decimals_and_sign() {
        assert_eq!(RolePercentage(100.0 / 3.0).to_string(), "33.33%");
        assert_eq!(RolePercentage(50.0).to_string(), "50.00%");
    }

    #[test]
    fn percentage_ties_round_up() {
        assert_eq!(RolePercentage(1.0 / 32.0 * 100.0).to_string(), "3.13%");
        assert_eq!(RolePercentage(31.0 / 32.0 * 100.0).to_string(), "96.88%");
    }
}
