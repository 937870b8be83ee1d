//! Résumé document intake: PDF bytes → plain text.
//!
//! Extraction failures never propagate. Any parser error (or panic) is logged and
//! yields an empty string, which the analysis pipeline reports as empty input.

use bytes::Bytes;
use tracing::{debug, warn};

/// Extracts text from an uploaded PDF on the blocking pool.
pub async fn extract_resume_text(pdf: Bytes) -> String {
    if pdf.is_empty() {
        return String::new();
    }

    match tokio::task::spawn_blocking(move || extract_pdf_text(&pdf)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF extraction task aborted: {e}");
            String::new()
        }
    }
}

/// Synchronous extraction. Returns "" when the document cannot be parsed.
pub fn extract_pdf_text(pdf: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(pdf) {
        Ok(text) => {
            let text = text.trim().to_string();
            debug!("Extracted {} characters from PDF", text.len());
            text
        }
        Err(e) => {
            warn!("An error occurred while reading the PDF: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Builds a one-page PDF that draws each line in Helvetica, one below the other.
    /// Offsets in the xref table are computed, so the file is well-formed.
    pub(crate) fn text_pdf(lines: &[&str]) -> Vec<u8> {
        let mut content = String::from("BT /F1 12 Tf 72 720 Td");
        for line in lines {
            content.push_str(&format!(" ({line}) Tj 0 -14 Td"));
        }
        content.push_str(" ET");

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_offset = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.extend_from_slice(xref.as_bytes());
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }
}
