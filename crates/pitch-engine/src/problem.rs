//! Keyword heuristics for the customer problem implied by the alternatives
//!
//! Two rule sets are in use and they disagree:
//!
//! - [`ProblemMatcher::GATEWAY_FALLBACK`] stands in for the model when
//!   enhancement is unavailable. It lower-cases the space-joined
//!   alternatives and looks for substrings, knows about hiring, and returns
//!   a full "struggle with ..." clause.
//! - [`ProblemMatcher::ELEVATOR_PITCH`] feeds the 2-minute pitch. It compares
//!   whole entries case-sensitively, has no hiring rule, and returns the
//!   clause without the "struggle with" lead-in because the pitch template
//!   supplies it.
//!
//! `["Google Sheets"]` shows the difference: the fallback reports manual,
//! error-prone processes while the pitch falls through to the default.

/// How keywords are compared against the alternatives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-folded substring search over all alternatives joined by spaces
    FoldedSubstring,
    /// Case-sensitive equality against individual alternatives
    ExactEntry,
}

/// One ordered rule: any keyword hit yields the clause
#[derive(Debug, Clone, Copy)]
pub struct ProblemRule {
    pub keywords: &'static [&'static str],
    pub clause: &'static str,
}

/// Ordered, first-match-wins keyword matcher
#[derive(Debug, Clone, Copy)]
pub struct ProblemMatcher {
    pub mode: MatchMode,
    pub rules: &'static [ProblemRule],
    /// Text placed before every clause, including the default one
    pub prefix: &'static str,
}

const MANUAL_PROCESSES: &str = "manual, error-prone processes";
const SCATTERED_COMMUNICATION: &str = "scattered, unorganized communication";
const NO_SOLUTION: &str = "this problem without any solution";
const HIGH_COSTS: &str = "high costs and slow turnaround times";

const GATEWAY_RULES: &[ProblemRule] = &[
    ProblemRule {
        keywords: &["spreadsheet", "excel", "google sheets"],
        clause: MANUAL_PROCESSES,
    },
    ProblemRule {
        keywords: &["email", "slack"],
        clause: SCATTERED_COMMUNICATION,
    },
    ProblemRule {
        keywords: &["nothing", "doing it manually"],
        clause: NO_SOLUTION,
    },
    ProblemRule {
        keywords: &["hire", "hiring"],
        clause: HIGH_COSTS,
    },
];

const PITCH_RULES: &[ProblemRule] = &[
    ProblemRule {
        keywords: &["spreadsheets", "Excel"],
        clause: MANUAL_PROCESSES,
    },
    ProblemRule {
        keywords: &["email", "Slack"],
        clause: SCATTERED_COMMUNICATION,
    },
    ProblemRule {
        keywords: &["nothing"],
        clause: NO_SOLUTION,
    },
];

impl ProblemMatcher {
    /// Rule set used when the enhancement gateway cannot answer
    pub const GATEWAY_FALLBACK: ProblemMatcher = ProblemMatcher {
        mode: MatchMode::FoldedSubstring,
        rules: GATEWAY_RULES,
        prefix: "struggle with ",
    };

    /// Rule set used inside the 2-minute elevator pitch
    pub const ELEVATOR_PITCH: ProblemMatcher = ProblemMatcher {
        mode: MatchMode::ExactEntry,
        rules: PITCH_RULES,
        prefix: "",
    };

    /// Infer the problem clause for `alternatives`
    ///
    /// Total over any list; an empty list takes the default branch with an
    /// empty alternative name.
    pub fn infer(&self, alternatives: &[String]) -> String {
        let clause = match self.mode {
            MatchMode::FoldedSubstring => {
                let text = alternatives.join(" ").to_lowercase();
                self.first_match(|keyword| text.contains(keyword))
            }
            MatchMode::ExactEntry => {
                self.first_match(|keyword| alternatives.iter().any(|alt| alt == keyword))
            }
        };

        match clause {
            Some(clause) => format!("{}{}", self.prefix, clause),
            None => format!(
                "{}inefficient workflows using {}",
                self.prefix,
                alternatives.first().map(String::as_str).unwrap_or("")
            ),
        }
    }

    fn first_match(&self, hit: impl Fn(&str) -> bool) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| hit(*keyword)))
            .map(|rule| rule.clause)
    }
}

/// Infer a "struggle with ..." problem statement using the fallback rules
pub fn infer_problem(alternatives: &[String]) -> String {
    ProblemMatcher::GATEWAY_FALLBACK.infer(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fallback_spreadsheets() {
        assert_eq!(
            infer_problem(&alts(&["Excel", "Google Sheets"])),
            "struggle with manual, error-prone processes"
        );
        assert_eq!(
            infer_problem(&alts(&["shared Spreadsheets"])),
            "struggle with manual, error-prone processes"
        );
    }

    #[test]
    fn test_fallback_communication() {
        assert_eq!(
            infer_problem(&alts(&["Slack threads"])),
            "struggle with scattered, unorganized communication"
        );
    }

    #[test]
    fn test_fallback_nothing() {
        assert_eq!(
            infer_problem(&alts(&["nothing"])),
            "struggle with this problem without any solution"
        );
        assert_eq!(
            infer_problem(&alts(&["Doing it manually"])),
            "struggle with this problem without any solution"
        );
    }

    #[test]
    fn test_fallback_hiring() {
        assert_eq!(
            infer_problem(&alts(&["a recruiter", "hiring an assistant"])),
            "struggle with high costs and slow turnaround times"
        );
    }

    #[test]
    fn test_fallback_default_uses_first_alternative() {
        assert_eq!(
            infer_problem(&alts(&["Notion"])),
            "struggle with inefficient workflows using Notion"
        );
        assert_eq!(
            infer_problem(&alts(&["Notion", "Jira"])),
            "struggle with inefficient workflows using Notion"
        );
    }

    #[test]
    fn test_fallback_first_rule_wins() {
        // "excel" and "hire" both present; spreadsheet rule is checked first
        assert_eq!(
            infer_problem(&alts(&["hire a consultant", "Excel"])),
            "struggle with manual, error-prone processes"
        );
    }

    #[test]
    fn test_empty_alternatives() {
        assert_eq!(
            infer_problem(&[]),
            "struggle with inefficient workflows using "
        );
        assert_eq!(
            ProblemMatcher::ELEVATOR_PITCH.infer(&[]),
            "inefficient workflows using "
        );
    }

    #[test]
    fn test_pitch_rules_exact_entries() {
        let pitch = ProblemMatcher::ELEVATOR_PITCH;
        assert_eq!(pitch.infer(&alts(&["Excel"])), "manual, error-prone processes");
        assert_eq!(
            pitch.infer(&alts(&["spreadsheets"])),
            "manual, error-prone processes"
        );
        assert_eq!(
            pitch.infer(&alts(&["Notion", "Slack"])),
            "scattered, unorganized communication"
        );
        assert_eq!(
            pitch.infer(&alts(&["nothing"])),
            "this problem without any solution"
        );
    }

    #[test]
    fn test_pitch_rules_are_case_sensitive() {
        let pitch = ProblemMatcher::ELEVATOR_PITCH;
        assert_eq!(pitch.infer(&alts(&["excel"])), "inefficient workflows using excel");
        assert_eq!(pitch.infer(&alts(&["slack"])), "inefficient workflows using slack");
    }

    #[test]
    fn test_rule_sets_diverge() {
        let sheets = alts(&["Google Sheets"]);
        assert_eq!(
            ProblemMatcher::GATEWAY_FALLBACK.infer(&sheets),
            "struggle with manual, error-prone processes"
        );
        assert_eq!(
            ProblemMatcher::ELEVATOR_PITCH.infer(&sheets),
            "inefficient workflows using Google Sheets"
        );

        let hiring = alts(&["hiring an assistant"]);
        assert_eq!(
            ProblemMatcher::GATEWAY_FALLBACK.infer(&hiring),
            "struggle with high costs and slow turnaround times"
        );
        assert_eq!(
            ProblemMatcher::ELEVATOR_PITCH.infer(&hiring),
            "inefficient workflows using hiring an assistant"
        );
    }
}
