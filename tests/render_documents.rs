//! End-to-end rendering tests: render each document kind, parse the bytes
//! back with lopdf, and assert on the extracted text and metadata.

use chrono::{NaiveDate, NaiveDateTime};
use findoc::{DocumentKind, DocumentRequest, render};
use lopdf::Document;

fn parse(bytes: &[u8]) -> Document {
    assert!(bytes.starts_with(b"%PDF-"), "output is not a PDF");
    Document::load_mem(bytes).expect("generated PDF should parse")
}

fn all_text(doc: &Document) -> String {
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages).expect("text extraction")
}

fn page_text(doc: &Document, page: u32) -> String {
    doc.extract_text(&[page]).expect("text extraction")
}

fn info_title(doc: &Document) -> String {
    let info = doc
        .trailer
        .get(b"Info")
        .and_then(|object| object.as_reference())
        .expect("trailer Info reference");
    let dict = doc
        .get_object(info)
        .and_then(|object| object.as_dict())
        .expect("Info dictionary");
    match dict.get(b"Title").expect("Title entry") {
        // Stored as PDFDocEncoding, which is Latin-1 for these bytes.
        lopdf::Object::String(bytes, _) => bytes.iter().map(|&b| b as char).collect(),
        other => panic!("unexpected Title object: {other:?}"),
    }
}

fn issued_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 23)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

/// Rows shaped to the kind's column count.
fn statement_rows(kind: DocumentKind, count: usize) -> Vec<Vec<String>> {
    (1..=count)
        .map(|n| {
            let date = format!("2025-05-{:02}", (n % 28) + 1);
            let description = format!("Movimento {n}");
            match kind {
                DocumentKind::LoanStatement => vec![
                    date,
                    "2025-05-30".to_string(),
                    description,
                    "80.00".to_string(),
                    "5.00".to_string(),
                    "Paga".to_string(),
                ],
                _ => vec![
                    date,
                    description,
                    "".to_string(),
                    "25.00".to_string(),
                    format!("{n}25.00"),
                ],
            }
        })
        .collect()
}

#[test]
fn every_kind_renders_a_parseable_pdf() {
    for kind in DocumentKind::ALL {
        let mut request = DocumentRequest::new(kind);
        request.issued_at = Some(issued_at());
        if kind.is_statement() {
            request.rows = statement_rows(kind, 3);
        }
        let document = render(&request).expect("render should succeed");
        let doc = parse(&document.bytes);
        let text = all_text(&doc);
        assert!(!text.trim().is_empty(), "{kind}: empty text");
        assert!(!document.title.is_empty(), "{kind}: empty title");
        if kind.is_statement() {
            assert!(text.contains("Movimento 3"), "{kind}: table rows missing");
        }
    }
}

#[test]
fn payment_receipt_dumps_fields_in_payload_order() {
    let mut request = DocumentRequest::new(DocumentKind::PaymentReceipt);
    request.issued_at = Some(issued_at());
    request.fields.insert("Recibo Nº", "Q202505-001");
    request.fields.insert("Sócio", "Nome Exemplo");
    request.fields.insert("Valor Pago", "100.00 EUR");

    let document = render(&request).unwrap();
    let doc = parse(&document.bytes);
    let text = all_text(&doc);

    assert_eq!(document.title, "Recibo Quota Q202505-001");
    assert!(info_title(&doc).contains("Q202505-001"));
    assert!(text.contains("Q202505-001"));
    assert!(text.contains("Valor Pago: 100.00 EUR"));
    // Payload order survives into the body.
    let receipt_pos = text.find("Q202505-001").unwrap();
    let amount_pos = text.find("100.00 EUR").unwrap();
    assert!(receipt_pos < amount_pos);
}

#[test]
fn missing_fields_render_as_na() {
    let mut request = DocumentRequest::new(DocumentKind::ApprovalProof);
    request.issued_at = Some(issued_at());
    request.fields.insert("cliente_nome", "Maria Santos");
    request.fields.insert("loan_id", "L005");

    let text = all_text(&parse(&render(&request).unwrap().bytes));
    assert!(text.contains("Maria Santos"));
    assert!(text.contains("L005"));
    // cliente_morada and data_aprovacao were not supplied.
    assert!(text.contains("N/A"));
}

#[test]
fn malformed_table_rows_are_skipped_not_fatal() {
    let mut request = DocumentRequest::new(DocumentKind::MemberStatement);
    request.issued_at = Some(issued_at());
    request.fields.insert("member_name", "Nome Exemplo");
    request.rows = vec![
        vec!["2025-05-01".into(), "Quota Maio".into(), "".into(), "25.00".into(), "125.00".into()],
        vec!["BADROW".into(), "too short".into()],
        vec!["2025-05-15".into(), "Quota Extra".into(), "".into(), "10.00".into(), "135.00".into()],
    ];

    let text = all_text(&parse(&render(&request).unwrap().bytes));
    assert!(!text.contains("BADROW"));
    assert!(text.contains("Quota Maio"));
    assert!(text.contains("Quota Extra"));
}

#[test]
fn member_statement_summary_repeats_final_balance() {
    let mut request = DocumentRequest::new(DocumentKind::MemberStatement);
    request.issued_at = Some(issued_at());
    request.rows = vec![
        vec!["2025-05-01".into(), "Quota".into(), "".into(), "25.00".into(), "100.00".into()],
        vec!["2025-05-20".into(), "Quota".into(), "".into(), "25.00".into(), "1.250,00".into()],
    ];

    let text = all_text(&parse(&render(&request).unwrap().bytes));
    assert!(text.contains("Saldo Final:"));
    assert!(text.matches("1.250,00").count() >= 2);
}

#[test]
fn accented_titles_survive_into_the_info_dictionary() {
    let mut request = DocumentRequest::new(DocumentKind::MemberStatement);
    request.issued_at = Some(issued_at());
    request.fields.insert("member_name", "José");
    request.fields.insert("period_start", "2025-05-01");
    request.fields.insert("period_end", "2025-05-31");
    request.rows = statement_rows(DocumentKind::MemberStatement, 2);

    let document = render(&request).unwrap();
    assert_eq!(document.title, "Extrato Sócio José 2025-05-01-2025-05-31");
    let doc = parse(&document.bytes);
    assert_eq!(info_title(&doc), "Extrato Sócio José 2025-05-01-2025-05-31");
}

#[test]
fn long_statement_paginates_and_repeats_the_header() {
    let mut request = DocumentRequest::new(DocumentKind::MemberStatement);
    request.issued_at = Some(issued_at());
    request.fields.insert("member_name", "Nome Exemplo");
    request.rows = statement_rows(DocumentKind::MemberStatement, 80);

    let doc = parse(&render(&request).unwrap().bytes);
    let pages = doc.get_pages().len();
    assert!(pages >= 2, "80 rows should not fit one page, got {pages}");

    let second = page_text(&doc, 2);
    // Heading, intro, and table header repeat on the continuation page.
    assert!(second.contains("Extrato de Conta Corrente"));
    assert!(second.contains("Nome Exemplo"));
    assert!(second.contains("Saldo"));
    assert!(second.contains("Movimento 79") || all_text(&doc).contains("Movimento 79"));
}

#[test]
fn statement_footer_carries_the_emission_timestamp() {
    let mut request = DocumentRequest::new(DocumentKind::LoanStatement);
    request.issued_at = Some(issued_at());
    request.fields.insert("loan_id", "L005");
    request.rows = vec![vec![
        "2025-06-01".into(),
        "2025-05-30".into(),
        "Prestação 1".into(),
        "80.00".into(),
        "5.00".into(),
        "Paga".into(),
    ]];

    let text = all_text(&parse(&render(&request).unwrap().bytes));
    assert!(text.contains("Emitido em: 2025-05-23 14:30:00"));
    assert!(text.contains("Fininvest"));
}

#[test]
fn contract_renders_continuation_lines_and_signature_placeholders() {
    let mut request = DocumentRequest::new(DocumentKind::LoanContract);
    request.issued_at = Some(issued_at());
    request.fields.insert("mutuario_nome", "Carlos Mendes");
    request.fields.insert("mutuante_nif", "999888777");
    request.fields.insert("valor_aprovado", "2000.00");
    request.fields.insert("prazo_meses", "24");

    let doc = parse(&render(&request).unwrap().bytes);
    let text = all_text(&doc);
    assert!(text.contains("Carlos Mendes"));
    assert!(text.contains("NIF: 999888777"));
    assert!(text.contains("O Mutuante:"));
    // No data_assinatura field, so the blank date line is used.
    assert!(text.contains("____/____/______"));
    // Dense contract body spills onto a second page before the signatures.
    assert!(doc.get_pages().len() >= 2);
}

#[test]
fn guarantees_section_appears_only_when_supplied() {
    let mut request = DocumentRequest::new(DocumentKind::LoanContract);
    request.issued_at = Some(issued_at());

    let without = all_text(&parse(&render(&request).unwrap().bytes));
    assert!(!without.contains("Garantias"));

    request.fields.insert("garantias", "Fiador: Ana Lopes");
    let with = all_text(&parse(&render(&request).unwrap().bytes));
    assert!(with.contains("Garantias"));
    assert!(with.contains("Fiador: Ana Lopes"));
}

#[test]
fn pinned_timestamp_makes_rendering_reproducible() {
    let mut request = DocumentRequest::new(DocumentKind::TransferProof);
    request.issued_at = Some(issued_at());
    request.fields.insert("ID Transferência", "T-0042");
    request.fields.insert("Montante", "50.00 EUR");

    let first = render(&request).unwrap();
    let second = render(&request).unwrap();
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn rendered_file_round_trips_through_disk() {
    let mut request = DocumentRequest::new(DocumentKind::MembershipAgreement);
    request.issued_at = Some(issued_at());
    request.fields.insert("nome_completo", "Rita Alves");

    let document = render(&request).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("termo_adesao.pdf");
    std::fs::write(&path, &document.bytes).unwrap();

    let doc = Document::load(&path).expect("saved PDF should load");
    let text = all_text(&doc);
    assert!(text.contains("Rita Alves"));
    assert!(text.contains("O Novo S"));
}
