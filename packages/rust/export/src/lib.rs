//! Tabular and CSV export of search results.
//!
//! A candidate list renders to one row per candidate; missing LinkedIn
//! profiles are exported as "Not found" to keep the column dense.

use std::io::Write;

use talentscout_shared::{Candidate, Result, TalentScoutError};

/// Column headers, in export order.
pub const HEADERS: [&str; 7] = [
    "name",
    "location",
    "contact",
    "linkedin",
    "experience_years",
    "confidence_score",
    "explanation",
];

/// Project candidates into display rows (header row not included).
pub fn candidate_rows(candidates: &[Candidate]) -> Vec<Vec<String>> {
    candidates
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.location.clone(),
                c.contact_url.clone(),
                c.linkedin.clone().unwrap_or_else(|| "Not found".into()),
                c.experience_years.to_string(),
                c.confidence_score.to_string(),
                c.explanation.clone(),
            ]
        })
        .collect()
}

/// Write candidates as CSV (header first) to any writer.
pub fn write_csv<W: Write>(candidates: &[Candidate], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADERS)
        .map_err(|e| TalentScoutError::Export(format!("csv write failed: {e}")))?;

    for row in candidate_rows(candidates) {
        csv_writer
            .write_record(&row)
            .map_err(|e| TalentScoutError::Export(format!("csv write failed: {e}")))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TalentScoutError::Export(format!("csv flush failed: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(username: &str, confidence: u32) -> Candidate {
        Candidate {
            username: username.into(),
            name: format!("{username} surname"),
            contact_url: format!("https://github.com/{username}"),
            linkedin: None,
            location: "Berlin".into(),
            experience_years: 11,
            confidence_score: confidence,
            explanation: "11 years on GitHub, 4 public repos, 1 keyword matches".into(),
        }
    }

    #[test]
    fn rows_match_candidate_order() {
        let candidates = vec![candidate("alice", 90), candidate("bob", 80)];
        let rows = candidate_rows(&candidates);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "alice surname");
        assert_eq!(rows[1][0], "bob surname");
        assert_eq!(rows[0][5], "90");
    }

    #[test]
    fn missing_linkedin_exports_as_not_found() {
        let mut with_link = candidate("alice", 90);
        with_link.linkedin = Some("https://www.linkedin.com/in/alice".into());

        let rows = candidate_rows(&[with_link, candidate("bob", 80)]);
        assert_eq!(rows[0][3], "https://www.linkedin.com/in/alice");
        assert_eq!(rows[1][3], "Not found");
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let candidates = vec![candidate("alice", 90)];
        let mut buf = Vec::new();
        write_csv(&candidates, &mut buf).expect("write csv");

        let text = String::from_utf8(buf).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("name,location,contact,linkedin,experience_years,confidence_score,explanation")
        );
        let row = lines.next().expect("data row");
        assert!(row.starts_with("alice surname,Berlin,https://github.com/alice,Not found,11,90,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn empty_candidate_list_writes_header_only() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).expect("write csv");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(text.lines().count(), 1);
    }
}
