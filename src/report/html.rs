// file: src/report/html.rs
// description: assembles the static HTML report from ranked words and their occurrences
// reference: https://docs.rs/chrono for the generation timestamp

use crate::analysis::{FrequencyEntry, Occurrence, OccurrenceMap};
use crate::report::escape::escape_html;
use crate::report::template::{TABLE_HEAD, TAIL, head};
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Local>,
    pub input_dir: String,
    pub files: Vec<String>,
    pub failed_files: Vec<String>,
}

impl ReportMetadata {
    pub fn new(input_dir: String, files: Vec<String>, failed_files: Vec<String>) -> Self {
        Self {
            generated_at: Local::now(),
            input_dir,
            files,
            failed_files,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportRenderer {
    title: String,
}

impl ReportRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Rows follow `ranked`; filenames and sentences are deduplicated per row.
    pub fn render(
        &self,
        ranked: &[FrequencyEntry],
        occurrences: &OccurrenceMap,
        metadata: Option<&ReportMetadata>,
    ) -> String {
        let mut html = head(&escape_html(&self.title));

        if let Some(metadata) = metadata {
            html.push_str(&render_metadata(metadata));
        }

        html.push_str(&render_word_list(ranked));
        html.push_str(TABLE_HEAD);

        for entry in ranked {
            html.push_str(&render_row(entry, occurrences.get(&entry.word)));
        }

        html.push_str(TAIL);
        html
    }
}

fn render_metadata(metadata: &ReportMetadata) -> String {
    let mut out = String::from("        <div class=\"metadata\">\n");

    let _ = writeln!(
        out,
        "            <p>Generated {}</p>",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S %Z")
    );
    let _ = writeln!(
        out,
        "            <p>Directory: {}</p>",
        escape_html(&metadata.input_dir)
    );
    let _ = writeln!(
        out,
        "            <p>Files ({}): {}</p>",
        metadata.files.len(),
        escape_html(&metadata.files.join(", "))
    );

    if !metadata.failed_files.is_empty() {
        let _ = writeln!(
            out,
            "            <p class=\"failed\">Unreadable ({}): {}</p>",
            metadata.failed_files.len(),
            escape_html(&metadata.failed_files.join(", "))
        );
    }

    out.push_str("        </div>\n");
    out
}

fn render_word_list(ranked: &[FrequencyEntry]) -> String {
    let mut out = String::from("        <ol class=\"words\">\n");

    for entry in ranked {
        let _ = writeln!(
            out,
            "            <li><a href=\"#{}\">{}</a></li>",
            anchor(&entry.word),
            escape_html(&capitalize(&entry.word))
        );
    }

    out.push_str("        </ol>\n");
    out
}

fn render_row(entry: &FrequencyEntry, occurrences: &[Occurrence]) -> String {
    let (files, sentences) = distinct_locations(occurrences);
    let mut row = String::new();

    let _ = write!(
        row,
        "                <tr id=\"{}\"><td>{} ({})<br><a class=\"top\" href=\"#top\">back to top</a></td>",
        anchor(&entry.word),
        escape_html(&capitalize(&entry.word)),
        entry.count
    );

    row.push_str("<td>");
    for file in files {
        let _ = write!(row, "<p>{}</p>", escape_html(file));
    }
    row.push_str("</td><td>");

    // Sentences were escaped and marked up by the locator.
    for sentence in sentences {
        let _ = write!(row, "<p>{}</p>", sentence);
    }
    row.push_str("</td></tr>\n");

    row
}

/// First-seen order; a sentence repeated verbatim across files is kept once.
fn distinct_locations(occurrences: &[Occurrence]) -> (Vec<&str>, Vec<&str>) {
    let mut seen_files = HashSet::new();
    let mut seen_sentences = HashSet::new();
    let mut files = Vec::new();
    let mut sentences = Vec::new();

    for occurrence in occurrences {
        if seen_files.insert(occurrence.file_name.as_str()) {
            files.push(occurrence.file_name.as_str());
        }
        if seen_sentences.insert(occurrence.sentence.as_str()) {
            sentences.push(occurrence.sentence.as_str());
        }
    }

    (files, sentences)
}

fn anchor(word: &str) -> String {
    format!("word-{}", escape_html(word))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn occurrence(word: &str, file: &str, sentence: &str) -> Occurrence {
        Occurrence {
            word: word.to_string(),
            file_name: file.to_string(),
            sentence: sentence.to_string(),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fox"), "Fox");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_duplicate_sentences_collapse() {
        let mut occurrences = OccurrenceMap::new();
        occurrences.push(occurrence("fox", "a.txt", "The <b>fox</b> sleeps."));
        occurrences.push(occurrence("fox", "b.txt", "The <b>fox</b> sleeps."));
        occurrences.push(occurrence("fox", "b.txt", "A <b>fox</b> hides."));

        let (files, sentences) = distinct_locations(occurrences.get("fox"));

        assert_eq!(files, vec!["a.txt", "b.txt"]);
        assert_eq!(
            sentences,
            vec!["The <b>fox</b> sleeps.", "A <b>fox</b> hides."]
        );
    }

    #[test]
    fn test_render_structure() {
        let ranked = vec![FrequencyEntry::new("fox", 2), FrequencyEntry::new("owl", 1)];
        let mut occurrences = OccurrenceMap::new();
        occurrences.push(occurrence("fox", "a.txt", "The <b>fox</b> sleeps."));
        occurrences.push(occurrence("fox", "b.txt", "The <b>fox</b> sleeps."));

        let html = ReportRenderer::new("Words").render(&ranked, &occurrences, None);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<a href=\"#word-fox\">Fox</a>"));
        assert!(html.contains("<tr id=\"word-fox\"><td>Fox (2)"));
        assert!(html.contains("<p>a.txt</p><p>b.txt</p>"));
        assert_eq!(html.matches("<p>The <b>fox</b> sleeps.</p>").count(), 1);
        assert!(html.contains("<tr id=\"word-owl\"><td>Owl (1)"));
        assert!(html.find("word-fox\"><td>").unwrap() < html.find("word-owl\"><td>").unwrap());
        assert!(!html.contains("class=\"metadata\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_metadata() {
        let metadata = ReportMetadata::new(
            "corpus".to_string(),
            vec!["a.txt".to_string(), "b.txt".to_string()],
            vec!["broken.txt".to_string()],
        );

        let html = ReportRenderer::new("Words").render(&[], &OccurrenceMap::new(), Some(&metadata));

        assert!(html.contains("Directory: corpus"));
        assert!(html.contains("Files (2): a.txt, b.txt"));
        assert!(html.contains("Unreadable (1): broken.txt"));
    }
}
