use std::io::Write;

use super::presentation::CandidateCard;

pub const CSV_HEADERS: [&str; 12] = [
    "id",
    "display_name",
    "match_score",
    "program",
    "intent",
    "status",
    "activity",
    "location",
    "skills",
    "email",
    "phone",
    "favorite",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv output: {0}")]
    Io(#[from] std::io::Error),
}

/// Write gated cards as CSV. Blind rows carry empty contact columns because the
/// card never held them.
pub fn write_csv<W: Write>(writer: W, cards: &[CandidateCard]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADERS)?;

    for card in cards {
        let score = card.match_score.to_string();
        let skills = card.skills.join("; ");
        let status = card
            .status
            .as_ref()
            .map(|badge| badge.value.as_str())
            .unwrap_or_default();
        csv.write_record([
            card.id.as_str(),
            card.display_name.as_str(),
            score.as_str(),
            card.program.as_str(),
            card.intent.value.as_str(),
            status,
            card.activity.as_str(),
            card.location.as_deref().unwrap_or_default(),
            skills.as_str(),
            card.email.as_deref().unwrap_or_default(),
            card.phone.as_deref().unwrap_or_default(),
            if card.favorite { "true" } else { "false" },
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export into an in-memory string, as served by the HTTP export route.
pub fn csv_string(cards: &[CandidateCard]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, cards)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::domain::{CandidateRecord, CandidateStatus, Intent};

    #[test]
    fn blind_rows_never_leak_contact_details() {
        let mut blind = CandidateRecord::new("b-1", "CAND-1", 80, "AI/ML", Intent::High);
        blind.email = Some("hidden@example.com".to_string());
        blind.skills = vec!["Python".to_string(), "SQL".to_string()];

        let mut revealed = CandidateRecord::new("r-1", "CAND-2", 70, "Data Science", Intent::Low);
        revealed.is_revealed = true;
        revealed.name = Some("Ada Park".to_string());
        revealed.email = Some("ada@example.com".to_string());
        revealed.status = Some(CandidateStatus::Contacted);

        let cards = vec![
            CandidateCard::from_record(&blind),
            CandidateCard::from_record(&revealed),
        ];
        let output = csv_string(&cards).expect("csv renders");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], CSV_HEADERS.join(","));
        assert_eq!(lines[1], "b-1,CAND-1,80,AI/ML,high,,,,Python; SQL,,,false");
        assert_eq!(
            lines[2],
            "r-1,Ada Park,70,Data Science,low,contacted,,,,ada@example.com,,false"
        );
        assert!(!output.contains("hidden@example.com"));
    }

    #[test]
    fn empty_export_still_has_headers() {
        let output = csv_string(&[]).expect("csv renders");
        assert_eq!(output.trim_end(), CSV_HEADERS.join(","));
    }
}
