//! End-to-end extraction tests over generated DOCX fixtures.

use std::io::{Cursor, Write};
use termsheet_backend::Extractor;
use termsheet_core::{PARTY_A_KEY, PARTY_B_KEY};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn docx_bytes(document_xml: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(document_xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn paragraph(text: &str) -> String {
    format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
}

fn two_cell_row(left: &str, right: &str) -> String {
    format!(
        "<w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr>",
        paragraph(left),
        paragraph(right)
    )
}

fn term_sheet_docx() -> Vec<u8> {
    let body = format!(
        "{}{}<w:tbl>{}{}{}{}{}{}</w:tbl>{}",
        paragraph("Equity-Linked Note"),
        paragraph("Indicative Terms and Conditions"),
        two_cell_row("Party A", "GLOBAL BANK SE"),
        two_cell_row("Party B", "ACME INVESTMENTS LTD"),
        two_cell_row("Notional Amount", "was agreed at EUR 10,000,000"),
        two_cell_row("Underlying", "Tesla Inc, ISIN US88160R1014"),
        two_cell_row("Coupon", "5.25% per annum"),
        two_cell_row("Barrier", "60% of initial level"),
        paragraph("Maturity: 12 March 2030"),
    );
    docx_bytes(&format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    ))
}

fn entity<'a>(
    extraction: &'a termsheet_core::Extraction,
    key: &str,
) -> Option<&'a str> {
    extraction.entities.get(key).and_then(|v| v.as_deref())
}

#[test]
fn full_term_sheet_resolves_expected_entities() {
    let extraction = Extractor::new().extract_bytes(&term_sheet_docx()).unwrap();

    assert_eq!(entity(&extraction, "Counterparty"), Some("GLOBAL BANK SE"));
    assert_eq!(entity(&extraction, "Notional"), Some("EUR 10,000,000"));
    assert_eq!(
        entity(&extraction, "Underlying"),
        Some("Tesla Inc, ISIN US88160R1014")
    );
    assert_eq!(entity(&extraction, "Coupon"), Some("5.25% per annum"));
    assert_eq!(entity(&extraction, "Barrier"), Some("60% of initial level"));
    assert_eq!(entity(&extraction, "Maturity"), Some("12 March 2030"));
    assert_eq!(entity(&extraction, PARTY_A_KEY), Some("GLOBAL BANK SE"));
    assert_eq!(entity(&extraction, PARTY_B_KEY), Some("ACME INVESTMENTS LTD"));

    // nothing in the sheet mentions these
    assert_eq!(entity(&extraction, "Valuation Date"), None);
    assert_eq!(entity(&extraction, "Initial Valuation Date"), None);
    assert_eq!(entity(&extraction, "Calendar"), None);
}

#[test]
fn lines_keep_document_order() {
    let extraction = Extractor::new().extract_bytes(&term_sheet_docx()).unwrap();

    let texts: Vec<String> = extraction
        .lines
        .iter()
        .map(|l| l.as_text().into_owned())
        .collect();

    // paragraphs first, then table rows, then the trailing paragraph
    assert_eq!(texts[0], "Equity-Linked Note");
    assert_eq!(texts[2], "Party A\tGLOBAL BANK SE");
    assert_eq!(texts.last().unwrap(), "Maturity: 12 March 2030");
    assert!(texts.iter().all(|t| !t.trim().is_empty()));
}

#[test]
fn extraction_is_idempotent() {
    let data = term_sheet_docx();
    let extractor = Extractor::new();
    let first = extractor.extract_bytes(&data).unwrap();
    let second = extractor.extract_bytes(&data).unwrap();
    assert_eq!(first.lines, second.lines);
    assert_eq!(first.entities, second.entities);
}

#[test]
fn serializes_to_response_body_shape() {
    let extraction = Extractor::new().extract_bytes(&term_sheet_docx()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&extraction).unwrap()).unwrap();

    assert!(json["lines"].is_array());
    let entities = json["entities"].as_object().unwrap();
    assert_eq!(entities["Counterparty"], "GLOBAL BANK SE");
    assert!(entities["Calendar"].is_null());
    assert_eq!(entities[PARTY_A_KEY], "GLOBAL BANK SE");
}

#[test]
fn empty_document_extracts_all_absent() {
    let data = docx_bytes(
        "<?xml version=\"1.0\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body></w:body></w:document>",
    );
    let extraction = Extractor::new().extract_bytes(&data).unwrap();
    assert!(extraction.lines.is_empty());
    assert!(extraction.entities.values().all(Option::is_none));
    assert!(!extraction.entities.contains_key(PARTY_A_KEY));
}
