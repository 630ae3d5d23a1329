#![allow(dead_code)]

use chrono::NaiveDate;
use lexreport_pdf::{Analysis, Document, TextRun};

/// Fixed date so renders are reproducible across test runs.
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

/// A representative analysis touching every category.
pub fn sample_analysis() -> Analysis {
    serde_json::from_str(
        r#"{
            "keyClauses": [
                "Net-30 payment terms with 1.5% monthly late fee",
                "Exclusive license to deliverables upon full payment"
            ],
            "risksRedFlags": [
                "Unlimited liability for consequential damages",
                "No cap on indemnification obligations"
            ],
            "missingTerms": ["No dispute resolution clause"],
            "obligations": {
                "client": ["Provide timely feedback within 5 business days"],
                "contractor": ["Deliver milestones per the attached schedule"]
            },
            "terminationConditions": ["Either party may terminate with 30 days written notice"],
            "liabilityDamages": ["Damages limited to fees paid in the prior 12 months"]
        }"#,
    )
    .expect("sample analysis parses")
}

pub fn only_key_clauses() -> Analysis {
    serde_json::from_str(r#"{"keyClauses": ["A"]}"#).expect("minimal analysis parses")
}

/// An explanation of at least `words` words, flowed as one paragraph.
pub fn long_explanation(words: usize) -> String {
    std::iter::repeat_n("obligations", words)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn all_runs(doc: &Document) -> Vec<&TextRun> {
    doc.pages.iter().flat_map(|p| p.runs.iter()).collect()
}

/// Every run's text joined with newlines, for containment assertions.
pub fn full_text(doc: &Document) -> String {
    all_runs(doc)
        .iter()
        .map(|r| r.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
