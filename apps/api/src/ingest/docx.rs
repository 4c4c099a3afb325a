//! Raw text extraction from Word (.docx) documents.
//!
//! Only run text is kept: formatting and images are dropped. Every paragraph,
//! table cells included, is followed by a blank line.

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use crate::errors::AppError;
use crate::ingest::FileKind;

pub fn extract_raw_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(bytes).map_err(|e| AppError::DocumentRead {
        kind: FileKind::Docx,
        detail: format!("docx-rs parse error: {e}"),
    })?;

    let mut out = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => push_paragraph(&mut out, para),
            DocumentChild::Table(table) => push_table(&mut out, table),
            _ => {}
        }
    }
    Ok(out.trim().to_string())
}

fn push_paragraph(out: &mut String, para: &Paragraph) {
    for child in &para.children {
        push_paragraph_child(out, child);
    }
    out.push_str("\n\n");
}

fn push_paragraph_child(out: &mut String, child: &ParagraphChild) {
    match child {
        ParagraphChild::Run(run) => push_run(out, run),
        ParagraphChild::Hyperlink(link) => {
            for child in &link.children {
                push_paragraph_child(out, child);
            }
        }
        _ => {}
    }
}

fn push_run(out: &mut String, run: &Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

fn push_table(out: &mut String, table: &Table) {
    let cells = table
        .rows
        .iter()
        .flat_map(|TableChild::TableRow(row)| row.cells.iter())
        .map(|TableRowChild::TableCell(cell)| cell);
    for cell in cells {
        for content in &cell.children {
            match content {
                TableCellContent::Paragraph(para) => push_paragraph(out, para),
                TableCellContent::Table(inner) => push_table(out, inner),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Cursor;

    use docx_rs::{Docx, Paragraph, Run};

    pub fn pack(docx: Docx) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    /// A document with one single-run paragraph per entry.
    pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
        });
        pack(docx)
    }
}
