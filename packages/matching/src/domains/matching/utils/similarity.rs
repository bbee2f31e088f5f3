//! Skill-set similarity scoring.
//!
//! Scoring is total on its input domain: every method returns a value in
//! [0.0, 1.0] and an empty set on either side scores 0. The batch matcher
//! uses `SetSimilarity::Jaccard`; the ratio methods exist for callers that
//! want asymmetric scoring (e.g. "how much of the intern's profile does this
//! supervisor cover").

use crate::domains::matching::models::SkillSet;

/// Strategy seam for similarity scoring.
///
/// `SetSimilarity` is the shipped implementation; an embedding-based scorer
/// can plug in here later without touching the matcher.
pub trait SimilarityScorer {
    /// Score a (intern, supervisor) skill pair. Must return a value in
    /// [0.0, 1.0] and never fail.
    fn score(&self, intern_skills: &SkillSet, supervisor_skills: &SkillSet) -> f64;
}

/// Set-overlap similarity methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetSimilarity {
    /// |A ∩ B| / |A ∪ B|. Symmetric.
    #[default]
    Jaccard,
    /// |A ∩ B| / |A| - fraction of the intern's skills the supervisor covers.
    InternRatio,
    /// |A ∩ B| / |B| - fraction of the supervisor's skills the intern has.
    SupervisorRatio,
}

impl SimilarityScorer for SetSimilarity {
    fn score(&self, intern_skills: &SkillSet, supervisor_skills: &SkillSet) -> f64 {
        if intern_skills.is_empty() || supervisor_skills.is_empty() {
            return 0.0;
        }

        let overlap = intern_skills.intersection_len(supervisor_skills) as f64;

        match self {
            SetSimilarity::Jaccard => {
                overlap / intern_skills.union_len(supervisor_skills) as f64
            }
            SetSimilarity::InternRatio => overlap / intern_skills.len() as f64,
            SetSimilarity::SupervisorRatio => overlap / supervisor_skills.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> SkillSet {
        SkillSet::from_names(names.iter().copied())
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // |{python,sql} ∩ {python,sql,docker}| / |union| = 2/3
        let intern = skills(&["python", "sql"]);
        let supervisor = skills(&["python", "sql", "docker"]);
        let score = SetSimilarity::Jaccard.score(&intern, &supervisor);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_no_overlap() {
        let intern = skills(&["python", "sql"]);
        let supervisor = skills(&["excel"]);
        assert_eq!(SetSimilarity::Jaccard.score(&intern, &supervisor), 0.0);
    }

    #[test]
    fn test_jaccard_identical_sets() {
        let a = skills(&["python", "sql"]);
        assert_eq!(SetSimilarity::Jaccard.score(&a, &a.clone()), 1.0);
    }

    #[test]
    fn test_jaccard_is_symmetric() {
        let a = skills(&["python", "sql", "git"]);
        let b = skills(&["sql", "docker"]);
        assert_eq!(
            SetSimilarity::Jaccard.score(&a, &b),
            SetSimilarity::Jaccard.score(&b, &a)
        );
    }

    #[test]
    fn test_empty_sets_score_zero_under_all_methods() {
        let empty = SkillSet::new();
        let some = skills(&["python"]);
        for method in [
            SetSimilarity::Jaccard,
            SetSimilarity::InternRatio,
            SetSimilarity::SupervisorRatio,
        ] {
            assert_eq!(method.score(&empty, &some), 0.0);
            assert_eq!(method.score(&some, &empty), 0.0);
            assert_eq!(method.score(&empty, &empty.clone()), 0.0);
        }
    }

    #[test]
    fn test_ratio_methods_are_asymmetric() {
        let intern = skills(&["python", "sql"]);
        let supervisor = skills(&["python", "sql", "docker", "k8s"]);
        // Intern fully covered: 2/2. Supervisor half covered: 2/4.
        assert_eq!(SetSimilarity::InternRatio.score(&intern, &supervisor), 1.0);
        assert_eq!(
            SetSimilarity::SupervisorRatio.score(&intern, &supervisor),
            0.5
        );
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let cases = [
            (skills(&[]), skills(&[])),
            (skills(&["a"]), skills(&["a"])),
            (skills(&["a", "b", "c"]), skills(&["c", "d"])),
            (skills(&["a"]), skills(&["b", "c", "d", "e"])),
        ];
        for (a, b) in &cases {
            for method in [
                SetSimilarity::Jaccard,
                SetSimilarity::InternRatio,
                SetSimilarity::SupervisorRatio,
            ] {
                let score = method.score(a, b);
                assert!((0.0..=1.0).contains(&score), "{method:?} scored {score}");
            }
        }
    }

    #[test]
    fn test_default_method_is_jaccard() {
        assert_eq!(SetSimilarity::default(), SetSimilarity::Jaccard);
    }
}
