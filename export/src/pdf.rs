//! Local PDF rendering of assembled sections.
//!
//! Produces plain typeset pages with the base-14 Helvetica fonts - the
//! branded template look is out of scope. Rendering is deterministic: the
//! same section sequence yields byte-identical output.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pitchkit_types::{CaseStudyContent, SectionDescriptor};

use crate::ExportError;

const PAGE_WIDTH: i64 = 842; // A4 landscape
const PAGE_HEIGHT: i64 = 595;
const MARGIN: i64 = 50;

const TITLE_SIZE: i64 = 24;
const HEADING_SIZE: i64 = 14;
const BODY_SIZE: i64 = 10;
const BADGE_SIZE: i64 = 8;

/// Word-wrap column for body text at `BODY_SIZE`.
const WRAP_COLS: usize = 105;

/// One typeset line, produced by [`compose`] and consumed by the paginator.
#[derive(Debug, Clone)]
enum Line {
    /// Start a new page before the next text line.
    Break,
    Blank,
    Text { text: String, bold: bool, size: i64 },
}

/// Render the assembled sections into a complete PDF document.
pub fn render(sections: &[SectionDescriptor]) -> Result<Vec<u8>, ExportError> {
    let lines = compose(sections);
    let pages = paginate(&lines);
    tracing::debug!(sections = sections.len(), pages = pages.len(), "rendering pdf");
    build_document(pages)
}

/// Flatten sections into typeset lines. Each section starts on a fresh page.
fn compose(sections: &[SectionDescriptor]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut narrative_pages = 0usize;

    for section in sections {
        lines.push(Line::Break);
        match section {
            SectionDescriptor::Cover { client_name } => {
                push_title(&mut lines, "Learning & Development Proposal");
                push_body(&mut lines, "Customized Learning & Development Proposal");
                if !client_name.is_empty() {
                    lines.push(Line::Blank);
                    push_body(&mut lines, &format!("Prepared for: {client_name}"));
                }
            }
            SectionDescriptor::Narrative { text } => {
                let heading = if narrative_pages == 0 {
                    "Executive Summary".to_string()
                } else {
                    "Executive Summary (continued)".to_string()
                };
                narrative_pages += 1;
                push_heading(&mut lines, &heading);
                push_paragraphs(&mut lines, text);
            }
            SectionDescriptor::ConfigSummary(summary) => {
                push_heading(&mut lines, "Configuration Details");
                push_labeled(&mut lines, "Client Name", non_empty(&summary.client_name));
                push_labeled(&mut lines, "Stage", summary.stage.as_deref());
                if let Some(description) = summary.stage_description.as_deref() {
                    push_body(&mut lines, description);
                }
                push_labeled(&mut lines, "Strategic Ambition", summary.ambition.as_deref());
                push_labeled(&mut lines, "Learning Path Type", summary.path.as_deref());
                push_labeled(&mut lines, "Facilitation Model", Some(&summary.facilitation));
                push_labeled(&mut lines, "Delivery Modality", Some(&summary.modality));
                push_labeled(&mut lines, "Pricing", Some(&summary.pricing));
                lines.push(Line::Blank);
                push_bold(&mut lines, &format!(
                    "Training Recipes ({})",
                    summary.module_names.len()
                ));
                for name in &summary.module_names {
                    push_bullet(&mut lines, name);
                }
                if !summary.case_study_titles.is_empty() {
                    lines.push(Line::Blank);
                    push_bold(&mut lines, &format!(
                        "Case Studies ({})",
                        summary.case_study_titles.len()
                    ));
                    for title in &summary.case_study_titles {
                        push_bullet(&mut lines, title);
                    }
                }
                if !summary.notes.is_empty() {
                    lines.push(Line::Blank);
                    push_bold(&mut lines, "Notes");
                    push_paragraphs(&mut lines, &summary.notes);
                }
                lines.push(Line::Blank);
                push_body(&mut lines, &summary.call_to_action);
            }
            SectionDescriptor::ModuleDetail {
                name,
                short_description,
                content,
                ..
            } => {
                push_badge(&mut lines, "TRAINING RECIPE");
                push_heading(&mut lines, name);
                push_body(&mut lines, short_description);
                lines.push(Line::Blank);
                if let Some(full) = content {
                    push_paragraphs(&mut lines, full);
                }
            }
            SectionDescriptor::CaseStudyCover => {
                push_title(&mut lines, "Case Studies");
                push_body(&mut lines, "Proven results from comparable engagements");
            }
            SectionDescriptor::CaseStudyDetail {
                title,
                metric,
                content,
                ..
            } => match content {
                Some(full) => push_case_study(&mut lines, full),
                None => {
                    // Tile-only fallback page.
                    push_badge(&mut lines, "CASE STUDY");
                    push_heading(&mut lines, title);
                    lines.push(Line::Blank);
                    push_bold(&mut lines, metric);
                }
            },
        }
    }
    lines
}

fn push_case_study(lines: &mut Vec<Line>, content: &CaseStudyContent) {
    push_badge(lines, "CASE STUDY");
    push_heading(lines, &content.title);
    push_body(lines, &content.subtitle);
    lines.push(Line::Blank);

    push_bold(lines, "Context");
    push_paragraphs(lines, &content.context);
    lines.push(Line::Blank);

    push_bold(lines, "Challenges");
    for challenge in &content.challenges {
        push_bullet(lines, challenge);
    }
    lines.push(Line::Blank);

    push_bold(lines, "Solution");
    push_paragraphs(lines, &content.solution.description);
    push_bold(lines, "Key Components:");
    for component in &content.solution.components {
        push_bullet(lines, component);
    }
    lines.push(Line::Blank);

    push_bold(lines, "Results");
    for block in &content.results {
        push_bold(lines, &block.timeframe);
        for metric in &block.metrics {
            push_bullet(lines, metric);
        }
    }
    lines.push(Line::Blank);
    push_paragraphs(lines, &content.summary);
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn push_title(lines: &mut Vec<Line>, text: &str) {
    lines.push(Line::Text {
        text: text.to_string(),
        bold: true,
        size: TITLE_SIZE,
    });
    lines.push(Line::Blank);
}

fn push_heading(lines: &mut Vec<Line>, text: &str) {
    lines.push(Line::Text {
        text: text.to_string(),
        bold: true,
        size: HEADING_SIZE,
    });
    lines.push(Line::Blank);
}

fn push_badge(lines: &mut Vec<Line>, text: &str) {
    lines.push(Line::Text {
        text: text.to_string(),
        bold: true,
        size: BADGE_SIZE,
    });
}

fn push_bold(lines: &mut Vec<Line>, text: &str) {
    for wrapped in wrap(text, WRAP_COLS) {
        lines.push(Line::Text {
            text: wrapped,
            bold: true,
            size: BODY_SIZE,
        });
    }
}

fn push_body(lines: &mut Vec<Line>, text: &str) {
    for wrapped in wrap(text, WRAP_COLS) {
        lines.push(Line::Text {
            text: wrapped,
            bold: false,
            size: BODY_SIZE,
        });
    }
}

fn push_bullet(lines: &mut Vec<Line>, text: &str) {
    let mut first = true;
    for wrapped in wrap(text, WRAP_COLS - 4) {
        let text = if first {
            format!("- {wrapped}")
        } else {
            format!("  {wrapped}")
        };
        first = false;
        lines.push(Line::Text {
            text,
            bold: false,
            size: BODY_SIZE,
        });
    }
}

fn push_labeled(lines: &mut Vec<Line>, label: &str, value: Option<&str>) {
    let value = value.unwrap_or("Not selected");
    push_body(lines, &format!("{label}: {value}"));
}

/// Paragraph-aware body text: blank lines between paragraphs, single
/// newlines kept as separate lines (bullet lists in module content).
fn push_paragraphs(lines: &mut Vec<Line>, text: &str) {
    let mut first = true;
    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        if !first {
            lines.push(Line::Blank);
        }
        first = false;
        for row in paragraph.lines() {
            push_body(lines, row.trim_end());
        }
    }
}

/// Word-wrap at `cols` characters; words longer than the budget are cut.
fn wrap(text: &str, cols: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !current.is_empty() && current.chars().count() + 1 + word_len > cols {
            rows.push(std::mem::take(&mut current));
        }
        if word_len > cols {
            // Hard-cut an unbreakable run.
            let mut rest: &str = word;
            while rest.chars().count() > cols {
                let cut = rest
                    .char_indices()
                    .nth(cols)
                    .map_or(rest.len(), |(offset, _)| offset);
                let (head, tail) = rest.split_at(cut);
                rows.push(head.to_string());
                rest = tail;
            }
            current = rest.to_string();
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Split lines into pages of drawing operations.
fn paginate(lines: &[Line]) -> Vec<Vec<Operation>> {
    let mut pages: Vec<Vec<Operation>> = Vec::new();
    let mut ops: Vec<Operation> = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in lines {
        match line {
            Line::Break => {
                if !ops.is_empty() {
                    pages.push(std::mem::take(&mut ops));
                }
                y = PAGE_HEIGHT - MARGIN;
            }
            Line::Blank => {
                y -= BODY_SIZE + 4;
            }
            Line::Text { text, bold, size } => {
                let height = size + 4;
                if y - height < MARGIN {
                    pages.push(std::mem::take(&mut ops));
                    y = PAGE_HEIGHT - MARGIN;
                }
                y -= height;
                let font = if *bold { "F2" } else { "F1" };
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new("Tf", vec![font.into(), (*size).into()]));
                ops.push(Operation::new("Td", vec![MARGIN.into(), y.into()]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(to_win_ansi(text))],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
        }
    }
    if !ops.is_empty() {
        pages.push(ops);
    }
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

/// Map text onto the WinAnsi repertoire of the base-14 fonts.
fn to_win_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2022}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{2192}' => out.push_str("->"),
            c if (c as u32) < 256 => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn build_document(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    let page_count = pages.len();
    for operations in pages {
        let content = Content { operations };
        let stream_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => stream_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(lopdf::Error::from)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchkit_types::{CaseStudyId, ConfigSummary, ModuleId};

    fn sample_sections() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::Cover {
                client_name: "Acme Corp".to_string(),
            },
            SectionDescriptor::Narrative {
                text: "First paragraph.\n\nSecond paragraph.".to_string(),
            },
            SectionDescriptor::ConfigSummary(ConfigSummary {
                client_name: "Acme Corp".to_string(),
                stage: Some("Stabilize".to_string()),
                facilitation: "Mixed".to_string(),
                modality: "Hybrid".to_string(),
                pricing: "Not specified".to_string(),
                module_names: vec!["Critical Thinking".to_string()],
                ..ConfigSummary::default()
            }),
            SectionDescriptor::ModuleDetail {
                module_id: ModuleId::new("critical-thinking"),
                name: "Critical Thinking".to_string(),
                short_description: "Structured decision-making".to_string(),
                content: None,
            },
            SectionDescriptor::CaseStudyCover,
            SectionDescriptor::CaseStudyDetail {
                case_study_id: CaseStudyId::new("storytelling"),
                title: "Storytelling".to_string(),
                metric: "Rework down 32%".to_string(),
                content: None,
            },
        ]
    }

    #[test]
    fn renders_valid_pdf_header() {
        let bytes = render(&sample_sections()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn rendering_is_deterministic() {
        let sections = sample_sections();
        let first = render(&sections).unwrap();
        let second = render(&sections).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn each_section_gets_its_own_page() {
        let doc = Document::load_mem(&render(&sample_sections()).unwrap()).unwrap();
        assert_eq!(doc.get_pages().len(), sample_sections().len());
    }

    #[test]
    fn empty_section_list_still_yields_a_document() {
        let bytes = render(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn long_narrative_flows_onto_additional_pages() {
        let paragraph = "A sentence of filler text that wraps. ".repeat(120);
        let sections = vec![SectionDescriptor::Narrative { text: paragraph }];
        let doc = Document::load_mem(&render(&sections).unwrap()).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn win_ansi_mapping_replaces_typographic_marks() {
        assert_eq!(to_win_ansi("\u{2022} bullet"), "- bullet");
        assert_eq!(to_win_ansi("it\u{2019}s \u{201c}quoted\u{201d}"), "it's \"quoted\"");
        assert_eq!(to_win_ansi("a \u{2192} b"), "a -> b");
        assert_eq!(to_win_ansi("caf\u{e9}"), "caf\u{e9}");
        assert_eq!(to_win_ansi("\u{4e2d}"), "?");
    }

    #[test]
    fn wrap_respects_column_budget() {
        let rows = wrap(&"word ".repeat(60), 40);
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|row| row.chars().count() <= 40));
    }
}
