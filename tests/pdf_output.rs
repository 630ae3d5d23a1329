mod common;

use lexreport_pdf::{FontCatalog, encode, layout_report, render_report};

#[test]
fn output_is_a_pdf() {
    let bytes = render_report(&common::sample_analysis(), "## Summary\n\nAll good.");
    assert!(bytes.starts_with(b"%PDF-"), "missing PDF header");
    assert!(bytes.len() > 1000, "PDF suspiciously small");
}

#[test]
fn encoding_is_deterministic() {
    let fonts = FontCatalog::standard();
    let doc = layout_report(
        &common::sample_analysis(),
        &common::long_explanation(520),
        common::fixed_date(),
        &fonts,
    );

    let a = encode(&doc, &fonts);
    let b = encode(&doc, &fonts);
    assert_eq!(a, b);
}

#[test]
fn empty_report_still_encodes() {
    let fonts = FontCatalog::standard();
    let doc = layout_report(
        &lexreport_pdf::Analysis::default(),
        "",
        common::fixed_date(),
        &fonts,
    );
    let bytes = encode(&doc, &fonts);
    assert!(bytes.starts_with(b"%PDF-"));
}
