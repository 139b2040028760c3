//! # findoc
//!
//! Renders the Fininvest platform's financial documents to PDF: approval
//! proofs, loan contracts, payment receipts, loan and member statements,
//! membership agreements, and transfer proofs.
//!
//! One engine walks a declarative per-kind template ([`findoc_templates`])
//! and draws through a paginated canvas ([`findoc_canvas`]); documents
//! differ only in template data, never in rendering code.
//!
//! ```no_run
//! use findoc::{DocumentKind, DocumentRequest, render};
//!
//! let mut request = DocumentRequest::new(DocumentKind::PaymentReceipt);
//! request.fields.insert("Recibo Nº", "Q202505-001");
//! request.fields.insert("Valor Pago", "100.00 EUR");
//! let document = render(&request)?;
//! std::fs::write("recibo.pdf", &document.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engine;
pub mod error;
pub mod request;

// Re-export foundation crates
pub use findoc_canvas as canvas;
pub use findoc_templates as templates;
pub use findoc_types as types;

pub use engine::{RenderedDocument, render};
pub use error::RenderError;
pub use request::{DocumentRequest, FieldMap};
pub use templates::DocumentKind;
