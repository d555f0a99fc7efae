use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use string_toggle::cli::CliArgs;
use string_toggle::config::ToggleConfig;
use string_toggle::messages::{DocumentMsg, EditorMsg, Msg};
use string_toggle::model::{AppModel, Document, DocumentId, Position};
use string_toggle::runtime::{MemoryHost, Runtime};

/// Machine-readable outcome of a run (1-indexed positions)
#[derive(Debug, Serialize)]
struct Report {
    text: String,
    cursor: Option<CursorReport>,
    tracked_strings: usize,
    messages: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CursorReport {
    line: usize,
    column: usize,
}

impl From<Position> for CursorReport {
    fn from(pos: Position) -> Self {
        Self {
            line: pos.line + 1,
            column: pos.column + 1,
        }
    }
}

fn main() -> Result<()> {
    string_toggle::tracing::init();

    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;
    let config = ToggleConfig::load();

    let document_id = DocumentId(1);
    let mut document = Document::from_file(document_id, run.file.clone())
        .with_context(|| format!("Failed to read {}", run.file.display()))?;
    if let Some(language) = run.language {
        document = document.with_language(language);
    }
    tracing::info!(
        "Loaded {} as {} ({} lines)",
        run.file.display(),
        document.language,
        document.line_count()
    );

    let mut host = MemoryHost::new();
    let document = host.open(document);
    let mut runtime = Runtime::new(AppModel::new(config), host);

    runtime.dispatch(Msg::Document(DocumentMsg::Opened(document)));
    runtime.dispatch(Msg::Editor(EditorMsg::ActiveEditorChanged {
        document_id,
        cursor: Position::default(),
    }));

    for position in &run.positions {
        runtime.dispatch(Msg::Editor(EditorMsg::SetCursor(*position)));
        runtime.dispatch(Msg::toggle());
    }
    if run.save {
        runtime.dispatch(Msg::will_save(document_id));
    }

    let text = runtime
        .host()
        .text(document_id)
        .context("Document is no longer open")?;

    if run.write {
        std::fs::write(&run.file, &text)
            .with_context(|| format!("Failed to write {}", run.file.display()))?;
        for message in runtime.host().messages() {
            eprintln!("{}", message);
        }
    } else if run.json {
        let report = Report {
            text,
            cursor: runtime.model().editor.map(|e| CursorReport::from(e.cursor)),
            tracked_strings: runtime.model().registry.tracked_count(document_id),
            messages: runtime.host().messages().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for message in runtime.host().messages() {
            eprintln!("{}", message);
        }
        print!("{}", text);
    }

    Ok(())
}
