//! # Rendering
//!
//! Turns command results into console text. Every function returns a `String`
//! so the shell decides where it goes and tests can inspect it.
//!
//! Column layout is computed on plain text with `unicode-width` (names are
//! often CJK, two cells per character) and styles are applied afterwards, so
//! escape codes never skew the alignment.

use super::styles::ROSTER_THEME;
use console::Style;
use roster::api::CmdMessage;
use roster::error::RosterError;
use roster::model::Student;
use unicode_width::UnicodeWidthStr;

pub const MENU_TITLE: &str = "=== Student Management System ===";

pub const MENU_ITEMS: [(&str, &str); 6] = [
    ("1", "Add student"),
    ("2", "Query student"),
    ("3", "Update student"),
    ("4", "Delete student"),
    ("5", "List all students"),
    ("6", "Exit"),
];

const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 4] = ["Name", "ID", "Age", "Major"];

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        style
            .clone()
            .force_styling(self.use_color)
            .apply_to(text)
            .to_string()
    }

    pub fn menu(&self) -> String {
        let theme = &*ROSTER_THEME;
        let mut out = format!("{}\n", self.paint(&theme.title, MENU_TITLE));
        for (key, label) in MENU_ITEMS {
            out.push_str(&format!("{}. {}\n", self.paint(&theme.menu_key, key), label));
        }
        out
    }

    /// A prompt is printed without a trailing newline; input follows on the
    /// same line.
    pub fn prompt(&self, text: &str) -> String {
        format!("{}: ", self.paint(&ROSTER_THEME.prompt, text))
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        messages
            .iter()
            .map(|m| {
                let style = ROSTER_THEME.for_level(m.level);
                format!("{}\n", self.paint(style, &m.content))
            })
            .collect()
    }

    pub fn error(&self, err: &RosterError) -> String {
        self.messages(&[CmdMessage::error(err.to_string())])
    }

    pub fn student(&self, heading: &str, student: &Student) -> String {
        let label = &ROSTER_THEME.label;
        let mut out = format!("{}\n", self.paint(&ROSTER_THEME.header, heading));
        let age = student.age.to_string();
        let fields = [
            ("Name", student.name.as_str()),
            ("ID", student.id.as_str()),
            ("Age", age.as_str()),
            ("Major", student.major.as_str()),
        ];
        for (name, value) in fields {
            out.push_str(&format!(
                "  {} {}\n",
                self.paint(label, &pad_to_width(&format!("{}:", name), 6)),
                value
            ));
        }
        out
    }

    pub fn student_list(&self, students: &[Student]) -> String {
        if students.is_empty() {
            return String::new();
        }

        let rows: Vec<[String; 4]> = students
            .iter()
            .map(|s| {
                [
                    s.name.clone(),
                    s.id.clone(),
                    s.age.to_string(),
                    s.major.clone(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.width());
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        let mut out = format!(
            "{}\n",
            self.paint(&ROSTER_THEME.header, &format!("All students ({}):", rows.len()))
        );
        let header_cells = HEADERS.map(String::from);
        let header_line = layout_row(&header_cells, &widths);
        out.push_str(&format!("{}\n", self.paint(&ROSTER_THEME.label, &header_line)));
        for row in &rows {
            out.push_str(&layout_row(row, &widths));
            out.push('\n');
        }
        out
    }
}

fn layout_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let last = cells.len() - 1;
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            if i == last {
                cell.clone()
            } else {
                pad_to_width(cell, w)
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}
