//! Subcommand execution. Each command opens a document, runs one editor
//! operation and (for mutating commands) writes the result back.

use crate::cli::{Command, RangeArgs};
use anyhow::{Context, Result};
use core_actions::{Editor, StyledClipboard};
use core_config::Config;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a command printed and whether it succeeded.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub success: bool,
}

impl Outcome {
    fn ok(lines: Vec<String>) -> Self {
        Self {
            lines,
            success: true,
        }
    }

    fn miss(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            success: false,
        }
    }
}

fn open_editor(path: &Path) -> Result<Editor> {
    let mut editor = Editor::new();
    editor
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok(editor)
}

fn select_range(editor: &mut Editor, range: RangeArgs) -> Result<()> {
    let len = editor.document().len();
    let start = range.start.unwrap_or(0);
    let end = range.end.unwrap_or(len);
    editor
        .select(start, end)
        .with_context(|| format!("selecting {start}..{end}"))?;
    Ok(())
}

fn write_back(editor: &mut Editor, output: Option<&PathBuf>) -> Result<String> {
    let written = match output {
        Some(path) => editor.save_as(path)?,
        None => editor.save()?,
    };
    Ok(format!("wrote {}", written.display()))
}

pub fn execute(command: &Command, cfg: &Config, clipboard: &mut StyledClipboard) -> Result<Outcome> {
    match command {
        Command::Stats { file, range } => {
            let mut editor = open_editor(file)?;
            if range.start.is_some() || range.end.is_some() {
                select_range(&mut editor, *range)?;
            }
            let counts = editor.status_counts();
            Ok(Outcome::ok(vec![counts.word_label(), counts.char_label()]))
        }
        Command::Find {
            file,
            needle,
            case,
            last,
        } => {
            let mut editor = open_editor(file)?;
            let case_sensitive = case.case_sensitive(cfg.file.search.match_case);
            if editor.find_text(needle, case_sensitive, *last)? {
                let sel = editor.selection();
                Ok(Outcome::ok(vec![format!("{}..{}", sel.start(), sel.end())]))
            } else {
                Ok(Outcome::miss("not found"))
            }
        }
        Command::Replace {
            file,
            from,
            to,
            case,
            all,
            output,
        } => {
            let mut editor = open_editor(file)?;
            let case_sensitive = case.case_sensitive(cfg.file.search.match_case);
            let replace_all = *all || cfg.file.search.replace_all;
            if !editor.replace_text(from, to, case_sensitive, replace_all)? {
                return Ok(Outcome::miss("not found"));
            }
            let sel = editor.selection();
            info!(target: "runtime", replace_all, case_sensitive, "replace_applied");
            Ok(Outcome::ok(vec![
                format!("last replacement at {}..{}", sel.start(), sel.end()),
                write_back(&mut editor, output.as_ref())?,
            ]))
        }
        Command::Upper {
            file,
            range,
            output,
        }
        | Command::Lower {
            file,
            range,
            output,
        } => {
            let mut editor = open_editor(file)?;
            select_range(&mut editor, *range)?;
            if matches!(command, Command::Upper { .. }) {
                editor.selection_to_upper_case()?;
            } else {
                editor.selection_to_lower_case()?;
            }
            Ok(Outcome::ok(vec![write_back(&mut editor, output.as_ref())?]))
        }
        Command::Style {
            file,
            range,
            bold,
            italic,
            underline,
            font,
            size,
            output,
        } => {
            let mut editor = open_editor(file)?;
            select_range(&mut editor, *range)?;
            if let Some(family) = font {
                // With a font, --bold/--italic describe the font's style.
                let family = if family.is_empty() {
                    cfg.font_family()
                } else {
                    family.as_str()
                };
                let size = (*size).unwrap_or_else(|| cfg.font_size());
                editor.set_selection_font(family, size, *bold, *italic)?;
            } else {
                if *bold {
                    editor.toggle_bold()?;
                }
                if *italic {
                    editor.toggle_italic()?;
                }
            }
            if *underline {
                editor.toggle_underline()?;
            }
            Ok(Outcome::ok(vec![write_back(&mut editor, output.as_ref())?]))
        }
        Command::Move {
            file,
            start,
            end,
            to,
            output,
        } => {
            let mut editor = open_editor(file)?;
            editor.select(*start, *end)?;
            editor.cut(clipboard)?;
            editor
                .select(*to, *to)
                .with_context(|| format!("paste position {to} after cut"))?;
            let inserted = editor.paste(clipboard)?;
            Ok(Outcome::ok(vec![
                format!("moved {inserted} characters"),
                write_back(&mut editor, output.as_ref())?,
            ]))
        }
        Command::Import { input, output } => {
            let mut editor = Editor::new();
            editor
                .import_plain(input)
                .with_context(|| format!("reading {}", input.display()))?;
            Ok(Outcome::ok(vec![write_back(&mut editor, Some(output))?]))
        }
        Command::Export { input, output } => {
            let editor = open_editor(input)?;
            editor.export_plain(output)?;
            Ok(Outcome::ok(vec![format!("wrote {}", output.display())]))
        }
        Command::Dump { file } => {
            let editor = open_editor(file)?;
            let mut lines = Vec::new();
            for span in editor.document().spans() {
                let attrs = serde_json::to_string(&span.attrs)?;
                lines.push(format!("{}..{} {}", span.range.start, span.range.end, attrs));
            }
            Ok(Outcome::ok(lines))
        }
    }
}
