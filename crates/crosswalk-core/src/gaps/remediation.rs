//! Remediation text generation for missing-control gaps.

/// Remediation sentences keyed by control topic, in matching order. A key
/// matches a missing keyword when it is contained in the keyword.
pub const REMEDIATIONS: &[(&str, &str)] = &[
    (
        "encryption",
        "Implement encryption controls (e.g. TLS, data encryption at rest)",
    ),
    (
        "authentication",
        "Implement authentication mechanisms (e.g. MFA, SSO)",
    ),
    (
        "authorization",
        "Implement authorization controls (e.g. RBAC, least privilege)",
    ),
    (
        "access control",
        "Implement access controls and access management",
    ),
    ("audit", "Set up audit logging and review processes"),
    ("logging", "Implement a comprehensive log management solution"),
    ("monitoring", "Set up continuous monitoring and alerting"),
    ("backup", "Implement backup and recovery procedures"),
    ("incident", "Establish incident response processes"),
    ("vulnerability", "Set up vulnerability management and patching"),
    (
        "network",
        "Implement network security controls (firewall, segmentation)",
    ),
    ("risk", "Run risk assessments and implement risk treatment"),
];

/// Header line of every generated recommendation.
const HEADER: &str = "The following measures are recommended:";

/// Fallback lines when no missing keyword matches a remediation topic.
const GENERIC_MEASURES: &[&str] = &[
    "- Run a detailed analysis of the missing concepts",
    "- Clarify the requirements with subject matter experts",
    "- Create an implementation plan for the missing controls",
];

/// Build the recommended-action text for a list of missing keywords.
///
/// For each keyword, in order, the sentence of the first matching topic is
/// appended once. Keywords without a topic contribute nothing; when no
/// keyword matched at all, the generic measures are appended instead. The
/// result always starts with the header line.
pub fn recommended_action<S: AsRef<str>>(missing_keywords: &[S]) -> String {
    let mut lines = vec![HEADER.to_string()];
    let mut added: Vec<&str> = Vec::new();

    for keyword in missing_keywords {
        for &(key, remediation) in REMEDIATIONS {
            if keyword.as_ref().contains(key) && !added.contains(&remediation) {
                lines.push(format!("- {remediation}"));
                added.push(remediation);
                break;
            }
        }
    }

    if lines.len() == 1 {
        lines.extend(GENERIC_MEASURES.iter().map(|line| line.to_string()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_lists_matching_measures_in_keyword_order() {
        let action = recommended_action(&["backup", "encryption"]);
        let lines: Vec<&str> = action.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "- Implement backup and recovery procedures");
        assert_eq!(
            lines[2],
            "- Implement encryption controls (e.g. TLS, data encryption at rest)"
        );
        assert_eq!(lines.len(), 3);
        println!("[PASS] test_action_lists_matching_measures_in_keyword_order");
    }

    #[test]
    fn test_action_deduplicates_repeated_topics() {
        // Both keywords resolve to the audit topic.
        let action = recommended_action(&["audit", "audit"]);
        let count = action
            .lines()
            .filter(|line| line.contains("audit logging"))
            .count();
        assert_eq!(count, 1);
        println!("[PASS] test_action_deduplicates_repeated_topics");
    }

    #[test]
    fn test_action_matches_topic_inside_keyword() {
        // "risk" sits inside the keyword, not equal to it.
        let action = recommended_action(&["risk assessment"]);
        assert!(action.contains("Run risk assessments"));
        println!("[PASS] test_action_matches_topic_inside_keyword");
    }

    #[test]
    fn test_action_falls_back_to_generic_measures() {
        let action = recommended_action(&["privacy", "classification"]);
        let lines: Vec<&str> = action.lines().collect();
        assert_eq!(lines.len(), 1 + GENERIC_MEASURES.len());
        assert_eq!(lines[1], GENERIC_MEASURES[0]);
        println!("[PASS] test_action_falls_back_to_generic_measures");
    }

    #[test]
    fn test_empty_missing_list_gets_generic_measures() {
        let action = recommended_action::<&str>(&[]);
        assert!(action.starts_with(HEADER));
        assert!(action.contains("implementation plan"));
        println!("[PASS] test_empty_missing_list_gets_generic_measures");
    }
}
