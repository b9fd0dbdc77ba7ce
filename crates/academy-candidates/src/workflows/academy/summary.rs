use super::domain::{AgeStats, RoleGroups};
use super::instructors::{self, InstructorLookupError, MOBILE_INSTRUCTOR, QA_INSTRUCTOR};
use super::stats::{self, StatsError};
use crate::config::FocusRoles;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Instructor(#[from] InstructorLookupError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleShareEntry {
    pub role: String,
    pub percentage: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleAgeEntry {
    pub role: String,
    #[serde(flatten)]
    pub stats: AgeStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleFigure<T> {
    pub role: String,
    pub value: T,
}

/// Every figure a report run prints, computed up front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcademySummary {
    pub total_candidates: usize,
    pub roles: Vec<String>,
    pub percentages: Vec<RoleShareEntry>,
    pub ages: Vec<RoleAgeEntry>,
    pub average_age: RoleFigure<f64>,
    pub oldest: RoleFigure<i32>,
    pub youngest: RoleFigure<i32>,
    pub total_age: RoleFigure<i64>,
    pub distinct_states: usize,
    pub qa_instructor: RoleFigure<Option<String>>,
    pub mobile_instructor: RoleFigure<Option<String>>,
}

impl AcademySummary {
    /// Builds the summary over `roles`; focus roles are looked up across the whole grouping.
    pub fn build<S: AsRef<str>>(
        groups: &RoleGroups,
        roles: &[S],
        focus: &FocusRoles,
    ) -> Result<Self, SummaryError> {
        if groups.is_empty() {
            return Err(StatsError::NoCandidates.into());
        }

        let percentages = stats::role_percentages(groups, roles)?
            .into_iter()
            .map(|(role, share)| RoleShareEntry {
                role,
                percentage: share.to_string(),
                value: share.value(),
            })
            .collect();

        let ages = stats::age_stats(groups, roles)?
            .into_iter()
            .map(|(role, stats)| RoleAgeEntry { role, stats })
            .collect();

        let average_age = figure(groups, &focus.average_age, |stats| stats.average_age)?;
        let oldest = figure(groups, &focus.oldest, |stats| stats.max_age)?;
        let youngest = figure(groups, &focus.youngest, |stats| stats.min_age)?;
        let total_age = figure(groups, &focus.total_age, |stats| stats.total_age)?;

        let qa_instructor = RoleFigure {
            role: focus.qa_instructor.clone(),
            value: instructors::find_first(groups.members(&focus.qa_instructor), &QA_INSTRUCTOR)?
                .map(|candidate| candidate.name.clone()),
        };
        let mobile_instructor = RoleFigure {
            role: focus.mobile_instructor.clone(),
            value: instructors::find_first(
                groups.members(&focus.mobile_instructor),
                &MOBILE_INSTRUCTOR,
            )?
            .map(|candidate| candidate.name.clone()),
        };

        Ok(Self {
            total_candidates: groups.len(),
            roles: roles.iter().map(|role| role.as_ref().to_string()).collect(),
            percentages,
            ages,
            average_age,
            oldest,
            youngest,
            total_age,
            distinct_states: stats::distinct_locations(groups, roles),
            qa_instructor,
            mobile_instructor,
        })
    }
}

fn figure<T>(
    groups: &RoleGroups,
    role: &str,
    select: impl FnOnce(&AgeStats) -> T,
) -> Result<RoleFigure<T>, StatsError> {
    let stats = stats::age_stats_for(groups, role)?;
    Ok(RoleFigure {
        role: role.to_string(),
        value: select(&stats),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::academy::Candidate;

    fn groups() -> RoleGroups {
        RoleGroups::from_candidates(vec![
            Candidate::new("Ana Silva", 25, "QA", "SC"),
            Candidate::new("Bruno Dias", 29, "QA", "SP"),
            Candidate::new("Otto Carvalho", 32, "Mobile", "PI"),
            Candidate::new("Lia Reis", 19, "Web", "RS"),
        ])
    }

    #[test]
    fn builds_every_figure_with_default_focus() {
        let groups = groups();
        let summary =
            AcademySummary::build(&groups, groups.roles(), &FocusRoles::default()).expect("summary");

        assert_eq!(summary.total_candidates, 4);
        assert_eq!(summary.roles, ["QA", "Mobile", "Web"]);
        assert_eq!(summary.percentages[0].percentage, "50.00%");
        assert_eq!(summary.average_age.value, 27.0);
        assert_eq!(summary.oldest.value, 32);
        assert_eq!(summary.youngest.value, 19);
        assert_eq!(summary.total_age.value, 54);
        assert_eq!(summary.distinct_states, 4);
        assert_eq!(summary.qa_instructor.value.as_deref(), Some("Ana Silva"));
        assert_eq!(summary.mobile_instructor.value.as_deref(), Some("Otto Carvalho"));
    }

    #[test]
    fn absent_focus_role_fails_the_summary() {
        let groups = RoleGroups::from_candidates(vec![Candidate::new("Ana Silva", 25, "QA", "SC")]);
        let error = AcademySummary::build(&groups, groups.roles(), &FocusRoles::default())
            .expect_err("mobile is absent");
        assert!(matches!(
            error,
            SummaryError::Stats(StatsError::EmptyRole(ref role)) if role == "Mobile"
        ));
    }

    #[test]
    fn empty_grouping_has_no_candidates() {
        let error = AcademySummary::build(&RoleGroups::default(), &["QA"], &FocusRoles::default())
            .expect_err("nothing to summarize");
        assert!(matches!(error, SummaryError::Stats(StatsError::NoCandidates)));
    }

    #[test]
    fn serializes_flattened_age_stats() {
        let groups = groups();
        let summary =
            AcademySummary::build(&groups, groups.roles(), &FocusRoles::default()).expect("summary");
        let json = serde_json::to_value(&summary).expect("serializes");

        assert_eq!(json["ages"][0]["role"], "QA");
        assert_eq!(json["ages"][0]["total_age"], 54);
        assert_eq!(json["qa_instructor"]["value"], "Ana Silva");
    }
}
