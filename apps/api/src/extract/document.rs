//! Document text extraction: turns an uploaded CV file into plain text.
//!
//! Dispatch is by file extension — pdf via `pdf-extract`, docx via a
//! `docx-rs` paragraph walk, txt as UTF-8 passthrough. Anything else is an
//! `InvalidInput`, not a guess.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Extracts plain text from an uploaded document, selecting the extractor by
/// the file name's extension.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .ok_or_else(|| {
            AppError::InvalidInput(format!("File '{file_name}' has no extension"))
        })?;

    match extension.as_str() {
        "pdf" => extract_pdf(bytes),
        "docx" => extract_docx(bytes),
        "txt" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        other => Err(AppError::InvalidInput(format!(
            "Unsupported file type '.{other}': expected pdf, docx, or txt"
        ))),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("PDF text extraction failed: {e}")))
}

/// Walks the DOCX body and joins paragraph run text with newlines. Tables
/// and headers are skipped — CV bodies live in paragraphs.
fn extract_docx(bytes: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| AppError::Extraction(format!("DOCX parse failed: {e}")))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for para_child in &paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            line.push_str(&t.text);
                        }
                    }
                }
            }
            if !line.trim().is_empty() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(line.trim());
            }
        }
    }

    Ok(text)
}
