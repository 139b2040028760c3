//! The per-kind template values.
//!
//! One static [`DocumentTemplate`] per document kind; the engine renders
//! whatever these declare, so document wording and layout live here and
//! nowhere else.

use crate::kind::DocumentKind;
use crate::spec::{
    Column, DocumentTemplate, FieldListStyle, FooterSpec, IntroLine, LayoutMetrics, SectionItem,
    SectionSpec, SignatureSpec, SummarySpec, TableSpec,
};
use findoc_types::TextAlign;

pub fn template(kind: DocumentKind) -> &'static DocumentTemplate {
    match kind {
        DocumentKind::ApprovalProof => &APPROVAL_PROOF,
        DocumentKind::LoanContract => &LOAN_CONTRACT,
        DocumentKind::PaymentReceipt => &PAYMENT_RECEIPT,
        DocumentKind::LoanPaymentReceipt => &LOAN_PAYMENT_RECEIPT,
        DocumentKind::LoanStatement => &LOAN_STATEMENT,
        DocumentKind::MemberStatement => &MEMBER_STATEMENT,
        DocumentKind::MembershipAgreement => &MEMBERSHIP_AGREEMENT,
        DocumentKind::TransferProof => &TRANSFER_PROOF,
    }
}

const ENTITY: &str = "Fininvest - Gestão de Microcrédito";

const FOOTER_PLAIN: FooterSpec = FooterSpec {
    entity: ENTITY,
    timestamp: false,
};

const FOOTER_TIMESTAMPED: FooterSpec = FooterSpec {
    entity: ENTITY,
    timestamp: true,
};

/// Dense metrics for contract-like documents.
const CONTRACT_METRICS: LayoutMetrics = LayoutMetrics {
    line_height: 5.0,
    body_size: 10.0,
    key_width: 50.0,
    title_height: 8.0,
    title_gap: 2.0,
    heading_gap: 10.0,
};

const PROOF_METRICS: LayoutMetrics = LayoutMetrics {
    line_height: 6.0,
    body_size: 11.0,
    key_width: 60.0,
    title_height: 8.0,
    title_gap: 2.0,
    heading_gap: 10.0,
};

const RECEIPT_METRICS: LayoutMetrics = LayoutMetrics {
    line_height: 7.0,
    body_size: 11.0,
    key_width: 50.0,
    title_height: 6.0,
    title_gap: 4.0,
    heading_gap: 10.0,
};

const STATEMENT_METRICS: LayoutMetrics = LayoutMetrics {
    line_height: 7.0,
    body_size: 11.0,
    key_width: 50.0,
    title_height: 6.0,
    title_gap: 4.0,
    heading_gap: 5.0,
};

const fn kv(label: &'static str, value: &'static str) -> SectionItem {
    SectionItem::KeyValue { label, value }
}

const fn para(text: &'static str) -> SectionItem {
    SectionItem::Paragraph {
        text,
        align: TextAlign::Justify,
        indent: 0.0,
    }
}

const fn para_left(text: &'static str) -> SectionItem {
    SectionItem::Paragraph {
        text,
        align: TextAlign::Left,
        indent: 0.0,
    }
}

const fn clause(text: &'static str) -> SectionItem {
    SectionItem::Paragraph {
        text,
        align: TextAlign::Justify,
        indent: 10.0,
    }
}

const fn gap(height: f32) -> SectionItem {
    SectionItem::Gap(height)
}

const fn col(label: &'static str, width: f32, align: TextAlign) -> Column {
    Column {
        label,
        width,
        align,
    }
}

const fn section(
    title: &'static str,
    items: &'static [SectionItem],
    gap_after: f32,
) -> SectionSpec {
    SectionSpec {
        title: Some(title),
        present_if: None,
        items,
        gap_after,
    }
}

const SIGNATURE_DATE_LINE: &str = "Data: {data_assinatura|____/____/______}";

// --- Comprovativo de Aprovação de Crédito ---

static APPROVAL_PROOF: DocumentTemplate = DocumentTemplate {
    heading: "Comprovativo de Aprovação de Crédito",
    heading_size: 16.0,
    title: "Comprovativo Aprovação Crédito {loan_id|}",
    metrics: PROOF_METRICS,
    footer: FOOTER_PLAIN,
    intro: &[],
    sections: &[
        SectionSpec {
            title: None,
            present_if: None,
            items: &[
                SectionItem::Line {
                    text: "Data de Emissão: {data_emissao|@date}",
                    align: TextAlign::Right,
                    size: Some(10.0),
                },
                gap(5.0),
            ],
            gap_after: 0.0,
        },
        section(
            "Destinatário",
            &[
                kv("Nome", "{cliente_nome}"),
                kv("NIF/Doc. ID", "{cliente_doc}"),
                kv("Morada", "{cliente_morada}"),
            ],
            5.0,
        ),
        section(
            "Detalhes da Aprovação do Empréstimo",
            &[
                para_left(
                    "Exmo(a). Sr(a). {cliente_nome|}, temos o prazer de informar que o seu \
                     pedido de empréstimo foi aprovado pelo Fundo Fininvest, nas seguintes \
                     condições:",
                ),
                gap(3.0),
                kv("ID do Empréstimo", "{loan_id}"),
                kv("Montante Aprovado", "{valor_aprovado|0.00} EUR"),
                kv("Taxa de Juro Anual Nominal (TAN)", "{taxa_juro|0.00} %"),
                kv("Prazo de Reembolso", "{prazo_meses|0} meses"),
                kv("Valor Estimado da Prestação Mensal", "{valor_prestacao} EUR"),
                kv("Data de Aprovação", "{data_aprovacao}"),
            ],
            5.0,
        ),
        section(
            "Próximos Passos",
            &[para_left(
                "Para formalização do empréstimo, será contactado em breve para assinatura do \
                 respetivo contrato. O desembolso do montante aprovado ocorrerá após a \
                 assinatura do contrato e cumprimento de eventuais condições adicionais.",
            )],
            10.0,
        ),
        section(
            "Com os melhores cumprimentos,",
            &[
                gap(15.0),
                SectionItem::Line {
                    text: "_____________________________",
                    align: TextAlign::Left,
                    size: None,
                },
                SectionItem::Line {
                    text: "A Gerência - Fininvest",
                    align: TextAlign::Left,
                    size: None,
                },
            ],
            0.0,
        ),
    ],
    table: None,
    signature: None,
};

// --- Contrato de Mútuo ---

static LOAN_CONTRACT: DocumentTemplate = DocumentTemplate {
    heading: "Contrato de Mútuo (Empréstimo)",
    heading_size: 16.0,
    title: "Contrato Empréstimo {loan_id|}",
    metrics: CONTRACT_METRICS,
    footer: FOOTER_PLAIN,
    intro: &[],
    sections: &[
        section(
            "Partes Contratantes",
            &[
                kv("Mutuante (Credor)", "{mutuante_nome|Fininvest (Representada)}"),
                kv("", "NIF: {mutuante_nif}"),
                kv("", "Sede: {mutuante_sede}"),
                gap(5.0),
                kv("Mutuário (Devedor)", "{mutuario_nome}"),
                kv("", "NIF/Doc. ID: {mutuario_doc}"),
                kv("", "Morada: {mutuario_morada}"),
                kv("", "Email: {mutuario_email}"),
            ],
            5.0,
        ),
        section(
            "Objeto do Contrato",
            &[
                para(
                    "Pelo presente contrato, o Mutuante concede ao Mutuário, a título de mútuo \
                     (empréstimo), a quantia infra indicada, nos termos e condições seguintes:",
                ),
                kv("Montante do Empréstimo", "{valor_aprovado|0.00} EUR"),
                kv("Taxa de Juro Anual Nominal (TAN)", "{taxa_juro|0.00} %"),
                kv("Prazo de Reembolso", "{prazo_meses|0} meses"),
                kv("Finalidade Declarada", "{finalidade}"),
                kv("Data de Aprovação", "{data_aprovacao}"),
                kv("Data Prev. Desembolso", "{data_desembolso}"),
            ],
            5.0,
        ),
        section(
            "Condições de Reembolso",
            &[
                para(
                    "O reembolso do capital e juros será efetuado em {prazo_meses|0} prestações \
                     mensais, constantes e sucessivas, no valor de {valor_prestacao} EUR cada, \
                     vencendo-se a primeira em {data_primeira_prestacao} e as seguintes em igual \
                     dia dos meses subsequentes.",
                ),
                para(
                    "O pagamento será efetuado por [Método de Pagamento - e.g., Débito Direto na \
                     conta com IBAN X, Transferência para IBAN Y] até ao dia de vencimento de \
                     cada prestação.",
                ),
                para(
                    "Em caso de mora no pagamento de qualquer prestação, serão devidos juros de \
                     mora à taxa legal em vigor sobre o montante em dívida, sem prejuízo do \
                     direito do Mutuante de exigir o cumprimento integral do contrato ou a sua \
                     resolução.",
                ),
            ],
            5.0,
        ),
        SectionSpec {
            title: Some("Garantias"),
            present_if: Some("garantias"),
            items: &[para(
                "Para garantia do bom cumprimento das obrigações assumidas, o Mutuário \
                 apresenta as seguintes garantias: {garantias}",
            )],
            gap_after: 5.0,
        },
        section(
            "Outras Cláusulas",
            &[
                para(
                    "1. Comunicações: Todas as comunicações relativas a este contrato deverão \
                     ser feitas por escrito para os contactos indicados.",
                ),
                para(
                    "2. Lei Aplicável e Foro: O presente contrato rege-se pela lei portuguesa. \
                     Para a resolução de quaisquer litígios emergentes, é competente o foro da \
                     comarca de [Localidade], com expressa renúncia a qualquer outro.",
                ),
                para(
                    "3. Proteção de Dados: Os dados pessoais recolhidos serão tratados pela \
                     Fininvest para gestão do contrato, nos termos da legislação aplicável.",
                ),
            ],
            10.0,
        ),
    ],
    table: None,
    signature: Some(SignatureSpec {
        title: "Assinaturas",
        lead: 15.0,
        left: "O Mutuante:",
        right: "O Mutuário:",
        date_line: SIGNATURE_DATE_LINE,
    }),
};

// --- Recibo de Pagamento de Quota ---

static PAYMENT_RECEIPT: DocumentTemplate = DocumentTemplate {
    heading: "Recibo de Pagamento de Quota",
    heading_size: 15.0,
    title: "Recibo Quota {Recibo Nº|}",
    metrics: RECEIPT_METRICS,
    footer: FOOTER_PLAIN,
    intro: &[],
    sections: &[section(
        "Detalhes do Pagamento",
        &[SectionItem::AllFields(FieldListStyle::Inline)],
        0.0,
    )],
    table: None,
    signature: None,
};

// --- Recibo de Pagamento de Prestação ---

static LOAN_PAYMENT_RECEIPT: DocumentTemplate = DocumentTemplate {
    heading: "Recibo de Pagamento de Prestação",
    heading_size: 15.0,
    title: "Recibo Prestação {Nº Prestação|}",
    metrics: RECEIPT_METRICS,
    footer: FOOTER_PLAIN,
    intro: &[],
    sections: &[section(
        "Detalhes do Pagamento da Prestação",
        &[SectionItem::AllFields(FieldListStyle::KeyCell(50.0))],
        0.0,
    )],
    table: None,
    signature: None,
};

// --- Justificativo de Transferência Interna ---

static TRANSFER_PROOF: DocumentTemplate = DocumentTemplate {
    heading: "Justificativo de Transferência Interna",
    heading_size: 15.0,
    title: "Justificativo Transferência {ID Transferência|}",
    metrics: RECEIPT_METRICS,
    footer: FOOTER_PLAIN,
    intro: &[],
    sections: &[section(
        "Detalhes da Transferência",
        &[SectionItem::AllFields(FieldListStyle::KeyCell(40.0))],
        0.0,
    )],
    table: None,
    signature: None,
};

// --- Extrato de Empréstimo ---

static LOAN_STATEMENT: DocumentTemplate = DocumentTemplate {
    heading: "Extrato de Empréstimo",
    heading_size: 15.0,
    title: "Extrato Empréstimo {loan_id|} {period_start|}-{period_end|}",
    metrics: STATEMENT_METRICS,
    footer: FOOTER_TIMESTAMPED,
    intro: &[
        IntroLine::Text {
            text: "Cliente: {client_name|}",
            size: 11.0,
            bold: false,
            height: 6.0,
            wrap: false,
        },
        IntroLine::Text {
            text: "Empréstimo ID: {loan_id|}",
            size: 11.0,
            bold: false,
            height: 6.0,
            wrap: false,
        },
        IntroLine::Text {
            text: "Período do Extrato: {period_start|} a {period_end|}",
            size: 11.0,
            bold: false,
            height: 6.0,
            wrap: false,
        },
        IntroLine::Gap(5.0),
        IntroLine::Text {
            text: "Resumo do Empréstimo:",
            size: 10.0,
            bold: true,
            height: 6.0,
            wrap: false,
        },
        IntroLine::Text {
            text: "Valor Aprovado: {amount_approved} EUR | Taxa Juro: {interest_rate} % | \
                   Prazo: {repayment_term_months} meses",
            size: 10.0,
            bold: false,
            height: 5.0,
            wrap: true,
        },
        IntroLine::Gap(10.0),
    ],
    sections: &[],
    table: Some(TableSpec {
        columns: &[
            col("Vencimento", 25.0, TextAlign::Center),
            col("Data Pag.", 35.0, TextAlign::Center),
            col("Descrição", 60.0, TextAlign::Left),
            col("Capital", 25.0, TextAlign::Right),
            col("Juros", 25.0, TextAlign::Right),
            col("Estado", 20.0, TextAlign::Center),
        ],
        header_size: 9.0,
        body_size: 8.0,
        row_height: 7.0,
        // Totals intentionally absent; see DESIGN.md on the statement
        // totals extension point.
        summary: None,
    }),
    signature: None,
};

// --- Extrato de Conta Corrente - Sócio ---

static MEMBER_STATEMENT: DocumentTemplate = DocumentTemplate {
    heading: "Extrato de Conta Corrente - Sócio",
    heading_size: 15.0,
    title: "Extrato Sócio {member_name|} {period_start|}-{period_end|}",
    metrics: STATEMENT_METRICS,
    footer: FOOTER_TIMESTAMPED,
    intro: &[
        IntroLine::Text {
            text: "Sócio: {member_name|}",
            size: 11.0,
            bold: false,
            height: 6.0,
            wrap: false,
        },
        IntroLine::Text {
            text: "Período: {period_start|} a {period_end|}",
            size: 11.0,
            bold: false,
            height: 6.0,
            wrap: false,
        },
        IntroLine::Gap(10.0),
    ],
    sections: &[],
    table: Some(TableSpec {
        columns: &[
            col("Data", 25.0, TextAlign::Left),
            col("Descrição", 85.0, TextAlign::Left),
            col("Débito", 25.0, TextAlign::Right),
            col("Crédito", 25.0, TextAlign::Right),
            col("Saldo", 30.0, TextAlign::Right),
        ],
        header_size: 10.0,
        body_size: 9.0,
        row_height: 7.0,
        summary: Some(SummarySpec {
            label: "Saldo Final:",
            font_size: 11.0,
        }),
    }),
    signature: None,
};

// --- Termo de Adesão ao Fundo ---

static MEMBERSHIP_AGREEMENT: DocumentTemplate = DocumentTemplate {
    heading: "Termo de Adesão ao Fundo",
    heading_size: 16.0,
    title: "Termo Adesão {nome_completo|}",
    metrics: CONTRACT_METRICS,
    footer: FOOTER_PLAIN,
    intro: &[],
    sections: &[
        section(
            "Dados do Novo Sócio",
            &[
                kv("Nome Completo", "{nome_completo}"),
                kv("NIF/Doc. ID", "{nif}"),
                kv("Morada", "{morada}"),
                kv("Email", "{email}"),
                kv("Telefone", "{telefone}"),
                kv("Data de Adesão", "{data_adesao}"),
            ],
            5.0,
        ),
        section(
            "Declaração e Compromisso",
            &[
                para(
                    "Eu, {nome_completo|[Nome do Sócio]}, acima identificado, declaro por minha \
                     honra que tomei conhecimento dos Estatutos e Regulamento Interno do Fundo \
                     Fininvest (doravante designado Fundo), os quais aceito integralmente e me \
                     comprometo a cumprir.",
                ),
                para(
                    "Declaro ainda que adiro voluntariamente ao Fundo na qualidade de Sócio, \
                     comprometendo-me a:",
                ),
                clause(
                    "a) Realizar uma contribuição inicial no valor de \
                     {contribuicao_inicial|[Valor]} EUR.",
                ),
                clause(
                    "b) Pagar pontualmente a quota mensal estabelecida, no valor atual de \
                     {quota_mensal|[Valor]} EUR, ou outro que venha a ser fixado nos termos \
                     regulamentares.",
                ),
                clause(
                    "c) Participar ativamente nas atividades e deliberações do Fundo, sempre \
                     que possível.",
                ),
                clause(
                    "d) Informar o Fundo sobre quaisquer alterações aos meus dados de contacto.",
                ),
                gap(5.0),
                para(
                    "Tenho conhecimento que a qualidade de sócio confere direitos e deveres, \
                     incluindo o acesso a potenciais benefícios como empréstimos em condições \
                     favoráveis e participação nos resultados do Fundo, mas também implica \
                     responsabilidade solidária nos termos definidos nos Estatutos.",
                ),
            ],
            10.0,
        ),
    ],
    table: None,
    signature: Some(SignatureSpec {
        title: "Assinaturas",
        lead: 15.0,
        left: "O Novo Sócio:",
        right: "Pela Direção do Fundo:",
        date_line: SIGNATURE_DATE_LINE,
    }),
};
