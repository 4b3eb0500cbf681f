//! Resume bullet suggestions for a target role.

/// Generic achievement bullets offered for every role.
const GENERIC_BULLETS: &[&str] = &[
    "Improved process efficiency through data analysis and clear metrics reporting.",
    "Built concise status updates and dashboards to support decision making.",
    "Partnered with stakeholders to clarify requirements and reduce cycle time.",
];

const MAX_BULLETS: usize = 4;

/// Up to four suggested resume bullets. When any matched skills exist, a
/// lead bullet naming the top three and the role/company verbatim is
/// prepended before truncation.
pub fn build_bullets(job_title: &str, job_company: &str, matched: &[String]) -> Vec<String> {
    let mut bullets: Vec<String> = GENERIC_BULLETS.iter().map(|b| b.to_string()).collect();

    let top: Vec<&str> = matched.iter().take(3).map(String::as_str).collect();
    if !top.is_empty() {
        bullets.insert(
            0,
            format!(
                "Applied {} to tasks relevant to the {} role at {}.",
                top.join(", "),
                job_title,
                job_company
            ),
        );
    }

    bullets.truncate(MAX_BULLETS);
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_matches_gives_three_generic_bullets() {
        let bullets = build_bullets("Data Analyst", "BluePeak", &[]);
        assert_eq!(bullets.len(), 3);
        assert_eq!(bullets, GENERIC_BULLETS);
    }

    #[test]
    fn test_skill_bullet_prepended() {
        let bullets = build_bullets("Data Analyst", "BluePeak", &matched(&["SQL", "Python"]));
        assert_eq!(bullets.len(), 4);
        assert_eq!(
            bullets[0],
            "Applied SQL, Python to tasks relevant to the Data Analyst role at BluePeak."
        );
    }

    #[test]
    fn test_lead_bullet_names_at_most_three_skills() {
        let bullets = build_bullets(
            "Analyst",
            "Acme",
            &matched(&["SQL", "Python", "Tableau", "Airflow"]),
        );
        assert!(bullets[0].contains("SQL, Python, Tableau"));
        assert!(!bullets[0].contains("Airflow"));
    }

    #[test]
    fn test_never_more_than_four_bullets() {
        let bullets = build_bullets("Analyst", "Acme", &matched(&["a", "b", "c", "d", "e"]));
        assert_eq!(bullets.len(), MAX_BULLETS);
    }

    #[test]
    fn test_role_and_company_appear_verbatim() {
        let bullets = build_bullets("Staff ML Engineer", "Näutilus GmbH", &matched(&["ml"]));
        assert!(bullets[0].contains("Staff ML Engineer"));
        assert!(bullets[0].contains("Näutilus GmbH"));
    }
}
