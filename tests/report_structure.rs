mod common;

use lexreport_pdf::{Analysis, FontCatalog, FontRole, layout_report};

const SECTION_LABELS: [&str; 7] = [
    "KEY CLAUSES IDENTIFIED",
    "RISKS & RED FLAGS",
    "MISSING STANDARD TERMS",
    "CLIENT OBLIGATIONS",
    "CONTRACTOR OBLIGATIONS",
    "TERMINATION CONDITIONS",
    "LIABILITY & DAMAGES",
];

#[test]
fn empty_sections_emit_no_header() {
    let fonts = FontCatalog::standard();
    let doc = layout_report(&common::only_key_clauses(), "", common::fixed_date(), &fonts);
    let text = common::full_text(&doc);

    assert!(text.contains("KEY CLAUSES IDENTIFIED:"));
    for label in &SECTION_LABELS[1..] {
        assert!(!text.contains(label), "unexpected header {label:?}");
    }
}

#[test]
fn all_sections_render_in_order() {
    let fonts = FontCatalog::standard();
    let doc = layout_report(&common::sample_analysis(), "", common::fixed_date(), &fonts);
    let text = common::full_text(&doc);

    let mut last = 0;
    for label in SECTION_LABELS {
        let pos = text.find(label).unwrap_or_else(|| panic!("missing header {label:?}"));
        assert!(pos > last, "header {label:?} out of order");
        last = pos;
    }
}

#[test]
fn warning_items_are_styled_and_prefixed() {
    let fonts = FontCatalog::standard();
    let doc = layout_report(&common::sample_analysis(), "", common::fixed_date(), &fonts);

    let runs = common::all_runs(&doc);
    let warning = runs
        .iter()
        .find(|r| r.content.starts_with("(Warning) "))
        .expect("warning item present");
    assert_eq!(warning.style.color, [0.7, 0.1, 0.1]);
    assert_eq!(warning.style.role, FontRole::Body);
    assert!(warning.style.indent > 0.0);

    let bullet = runs
        .iter()
        .find(|r| r.content.starts_with("\u{2022} "))
        .expect("bulleted item present");
    assert_eq!(bullet.style.color, [0.0, 0.0, 0.0]);
}

#[test]
fn section_headers_keep_their_first_item() {
    let fonts = FontCatalog::standard();
    // Lots of body text pushes section boundaries near page bottoms.
    let mut analysis = common::sample_analysis();
    for i in 0..40 {
        analysis
            .key_clauses
            .push(format!("Clause {i} requires written notice before any assignment"));
    }
    let doc = layout_report(&analysis, "", common::fixed_date(), &fonts);

    for page in &doc.pages {
        if let Some(last) = page.runs.last() {
            let is_section_header = last.content.ends_with(':')
                && SECTION_LABELS.iter().any(|l| last.content.starts_with(l));
            assert!(!is_section_header, "orphaned header {:?}", last.content);
        }
    }
}

#[test]
fn empty_input_renders_a_single_notice_page() {
    let fonts = FontCatalog::standard();
    let doc = layout_report(&Analysis::default(), "   \n ", common::fixed_date(), &fonts);
    let text = common::full_text(&doc);

    assert_eq!(doc.pages.len(), 1);
    assert!(text.contains("No analysis available for this document."));
    assert!(text.contains("This analysis is provided by AI"));
    assert!(!text.contains("=== LEGAL ANALYSIS ==="));
}

#[test]
fn title_block_leads_the_document() {
    let fonts = FontCatalog::standard();
    let doc = layout_report(&common::sample_analysis(), "", common::fixed_date(), &fonts);

    let first = &doc.pages[0].runs[0];
    assert_eq!(first.content, "LEGAL DOCUMENT ANALYSIS REPORT");
    assert_eq!(first.style.role, FontRole::Title);
    let second = &doc.pages[0].runs[1];
    assert_eq!(second.content, "Generated on 2026-03-14");
}

#[test]
fn rendering_is_deterministic() {
    let fonts = FontCatalog::standard();
    let analysis = common::sample_analysis();
    let explanation = "## Summary\n\n* keep copies of every invoice\n**Act quickly on notices**";

    let a = layout_report(&analysis, explanation, common::fixed_date(), &fonts);
    let b = layout_report(&analysis, explanation, common::fixed_date(), &fonts);
    assert_eq!(a, b);
}

#[test]
fn absent_json_fields_default_to_empty() {
    let analysis = lexreport_pdf::parse_analysis(r#"{"keyClauses": ["A"]}"#).unwrap();
    assert_eq!(analysis.key_clauses, vec!["A".to_string()]);
    assert!(analysis.risks_red_flags.is_empty());
    assert!(analysis.obligations.client.is_empty());

    assert!(lexreport_pdf::parse_analysis("not json").is_err());
}
