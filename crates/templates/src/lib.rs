//! Declarative document templates.
//!
//! Each [`DocumentKind`] maps to exactly one static [`DocumentTemplate`]
//! describing its page heading, footer, sections, optional table, and
//! optional signature block. The renderer engine walks these values; this
//! crate holds no drawing logic.
//!
//! Template strings carry `{key}` or `{key|default}` placeholders resolved
//! against the request's fields at render time; a placeholder without a
//! default renders the literal `N/A` when the field is absent.

mod catalog;
mod interpolate;
mod kind;
mod spec;

pub use catalog::template;
pub use interpolate::{FieldSource, interpolate};
pub use kind::{DocumentKind, UnknownKind};
pub use spec::{
    Column, DocumentTemplate, FieldListStyle, FooterSpec, IntroLine, LayoutMetrics, SectionItem,
    SectionSpec, SignatureSpec, SummarySpec, TableSpec,
};
