//! Status command implementation

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use geochat_core::catalog::INDEX_CATALOG;
use geochat_core::session::SessionStore;

use crate::cli::StatusArgs;
use crate::config::Settings;
use crate::output::OutputWriter;

#[derive(Debug, Serialize)]
struct StatusOutput {
    server: String,
    artifacts_dir: String,
    current_file: Option<String>,
    columns: Vec<String>,
}

#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "#")]
    index: usize,
    column: String,
}

pub fn execute(args: StatusArgs, output: &OutputWriter, settings: &Settings) -> Result<()> {
    // One-shot invocations start a fresh session; the store only fills up
    // inside a chat session, where /status shares this printout.
    let store = SessionStore::new();

    if output.is_json() {
        let columns = store.columns().unwrap_or_default().unwrap_or_default();
        output.result(StatusOutput {
            server: settings.base_url.clone(),
            artifacts_dir: settings.artifacts_dir.display().to_string(),
            current_file: store.current_file().map(String::from),
            columns,
        })?;
        return Ok(());
    }

    print_session(output, settings, &store);

    if args.verbose {
        output.section("Index Catalog");
        for spec in INDEX_CATALOG {
            output.kv(spec.key, spec.label);
        }
    }

    Ok(())
}

/// Shared session printout, also used by the in-session `/status` command.
pub fn print_session(output: &OutputWriter, settings: &Settings, store: &SessionStore) {
    output.section("Session");
    output.kv("Server", &settings.base_url);
    output.kv("Artifacts", settings.artifacts_dir.display());

    output.section("Current Asset");
    match store.current_file() {
        Some(path) => output.kv("File", path),
        None => output.info("No asset uploaded yet"),
    }

    match store.columns() {
        Ok(Some(columns)) => {
            let rows: Vec<ColumnRow> = columns
                .into_iter()
                .enumerate()
                .map(|(i, column)| ColumnRow {
                    index: i + 1,
                    column,
                })
                .collect();
            output.table(rows);
        }
        Ok(None) => {}
        Err(error) => output.error(error),
    }
}
