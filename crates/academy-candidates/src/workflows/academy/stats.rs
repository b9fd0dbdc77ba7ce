use super::domain::{round_two, AgeStats, Candidate, RoleGroups, RolePercentage};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("role '{0}' has no candidates")]
    EmptyRole(String),
    #[error("no candidates in the requested roles; percentages would divide by zero")]
    NoCandidates,
}

/// Share of candidates per role, relative to the candidates of the listed roles only.
pub fn role_percentages<S: AsRef<str>>(
    groups: &RoleGroups,
    roles: &[S],
) -> Result<Vec<(String, RolePercentage)>, StatsError> {
    let total: usize = roles
        .iter()
        .map(|role| groups.members(role.as_ref()).len())
        .sum();
    if total == 0 {
        return Err(StatsError::NoCandidates);
    }

    Ok(roles
        .iter()
        .map(|role| {
            let role = role.as_ref();
            let count = groups.members(role).len();
            let share = count as f64 / total as f64 * 100.0;
            (role.to_string(), RolePercentage(share))
        })
        .collect())
}

pub fn age_stats<S: AsRef<str>>(
    groups: &RoleGroups,
    roles: &[S],
) -> Result<Vec<(String, AgeStats)>, StatsError> {
    roles
        .iter()
        .map(|role| {
            let role = role.as_ref();
            age_stats_for(groups, role).map(|stats| (role.to_string(), stats))
        })
        .collect()
}

pub fn age_stats_for(groups: &RoleGroups, role: &str) -> Result<AgeStats, StatsError> {
    summarize_ages(groups.members(role)).ok_or_else(|| StatsError::EmptyRole(role.to_string()))
}

fn summarize_ages(candidates: &[Candidate]) -> Option<AgeStats> {
    let first = candidates.first()?.age;
    let mut min_age = first;
    let mut max_age = first;
    let mut total_age: i64 = 0;

    for candidate in candidates {
        min_age = min_age.min(candidate.age);
        max_age = max_age.max(candidate.age);
        total_age += i64::from(candidate.age);
    }

    let average = total_age as f64 / candidates.len() as f64;
    Some(AgeStats {
        min_age,
        max_age,
        average_age: round_two(average),
        total_age,
    })
}

/// Number of distinct states among the candidates of the listed roles.
pub fn distinct_locations<S: AsRef<str>>(groups: &RoleGroups, roles: &[S]) -> usize {
    roles
        .iter()
        .flat_map(|role| groups.members(role.as_ref()))
        .map(|candidate| candidate.state.as_str())
        .collect::<HashSet<_>>()
        .len()
}
