//! Command-line front end: parse arguments, assemble a [`DocumentRequest`],
//! render, and write the PDF to disk.

use clap::Parser;
use findoc::{DocumentKind, DocumentRequest, FieldMap, RenderError, render};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "findoc",
    version,
    about = "Render Fininvest financial documents to PDF"
)]
pub struct Cli {
    /// Document kind, e.g. loan-contract, payment-receipt, member-statement.
    pub kind: DocumentKind,

    /// Output PDF path; missing parent directories are created.
    pub output: PathBuf,

    /// A field as KEY=VALUE. Repeatable; overrides entries from --data.
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// JSON file with a flat string-to-string object of fields.
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// JSON file with an array of string arrays, the table rows of a
    /// statement kind.
    #[arg(long, value_name = "FILE")]
    pub rows: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("invalid --field value '{0}': expected KEY=VALUE")]
    BadField(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Payload {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let mut request = DocumentRequest::new(cli.kind);

    if let Some(path) = &cli.data {
        request.fields = read_json::<FieldMap>(path)?;
    }
    for pair in &cli.fields {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::BadField(pair.clone()))?;
        request.fields.insert(key, value);
    }
    if let Some(path) = &cli.rows {
        request.rows = read_json::<Vec<Vec<String>>>(path)?;
    }

    let document = render(&request)?;

    if let Some(parent) = cli.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| CliError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&cli.output, &document.bytes).map_err(|source| CliError::Write {
        path: cli.output.clone(),
        source,
    })?;

    println!(
        "PDF document generated successfully at: {}",
        cli.output.display()
    );
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Payload {
        path: path.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_fields_and_kind() {
        let cli = Cli::parse_from([
            "findoc",
            "payment-receipt",
            "out.pdf",
            "--field",
            "Sócio=Nome Exemplo",
            "--field",
            "Valor Pago=100.00 EUR",
        ]);
        assert_eq!(cli.kind, DocumentKind::PaymentReceipt);
        assert_eq!(cli.fields.len(), 2);
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["findoc", "invoice", "out.pdf"]).is_err());
    }

    #[test]
    fn bad_field_syntax_is_an_error() {
        let mut cli = Cli::parse_from(["findoc", "transfer-proof", "out.pdf"]);
        cli.fields.push("no-equals-sign".to_string());
        let err = run(cli).unwrap_err();
        assert!(matches!(err, CliError::BadField(_)));
    }
}
