// src/table/loader.rs

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use tracing::debug;

use crate::table::model::{PrecedenceMap, TableFile, build_precedence_map};
use crate::table::validate::validate_table;

/// Header cell naming the task-identifier column.
static ELEMENT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(element|task|id)$").expect("static regex"));

/// Header cell naming the predecessor-list column.
static PRECEDED_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(preceded[_ ]?by|predecessors?|after)$").expect("static regex"));

/// Load a precedence table from a given path and return the normalized map.
///
/// The format is chosen from the file extension: `.toml` is parsed as a
/// [`TableFile`], anything else as a delimited table (tab-separated for
/// `.tsv`, comma-separated otherwise). This only performs parsing and token
/// normalization; it does **not** run semantic validation (closed
/// references, acyclicity). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<PrecedenceMap> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading precedence table at {:?}", path))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        let table: TableFile = toml::from_str(&contents)
            .with_context(|| format!("parsing TOML table from {:?}", path))?;
        Ok(table.to_precedence_map())
    } else {
        let delimiter = if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"))
        {
            '\t'
        } else {
            ','
        };
        parse_delimited(&contents, delimiter)
            .with_context(|| format!("parsing delimited table from {:?}", path))
    }
}

/// Load a precedence table from path and run validation.
///
/// This is the entry point the rest of the tool uses:
///
/// - Reads TOML or CSV/TSV.
/// - Normalizes identifier tokens (numeric tokens become integers).
/// - Fills blank predecessor cells with the empty list.
/// - Rejects open references, self-loops and cycles before the layout core
///   ever sees the map.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PrecedenceMap> {
    let map = load_from_path(&path)?;
    validate_table(&map)?;
    Ok(map)
}

/// Parse a delimited table: a header row naming an element column and a
/// preceded-by column, then one row per task. The predecessor cell is itself
/// a delimited list (`,` or `;` between tokens), so in CSV sources it is
/// usually quoted.
fn parse_delimited(contents: &str, delimiter: char) -> Result<PrecedenceMap> {
    let mut lines = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| anyhow!("table is empty (no header row)"))?;
    let header_cells = split_record(header, delimiter);

    let element_col = find_column(&header_cells, &ELEMENT_HEADER).ok_or_else(|| {
        anyhow!("missing element column in header (expected one of: element, task, id)")
    })?;
    let preceded_col = find_column(&header_cells, &PRECEDED_HEADER).ok_or_else(|| {
        anyhow!("missing predecessor column in header (expected one of: preceded_by, predecessors, after)")
    })?;

    debug!(element_col, preceded_col, "resolved table columns");

    let mut rows: Vec<(String, Vec<String>)> = Vec::new();
    for (idx, line) in lines {
        let cells = split_record(line, delimiter);

        let element = cells
            .get(element_col)
            .map(|cell| cell.trim())
            .unwrap_or_default();
        if element.is_empty() {
            return Err(anyhow!("row {} has an empty element cell", idx + 1));
        }

        // A short row or a blank cell both mean "no predecessors".
        let preceded = cells
            .get(preceded_col)
            .map(|cell| cell.as_str())
            .unwrap_or_default();
        let predecessors: Vec<String> = preceded
            .split([',', ';'])
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();

        rows.push((element.to_string(), predecessors));
    }

    Ok(build_precedence_map(rows.iter().map(|(element, preds)| {
        (element.as_str(), preds.iter().map(String::as_str))
    })))
}

fn find_column(cells: &[String], pattern: &Regex) -> Option<usize> {
    cells.iter().position(|cell| pattern.is_match(cell.trim()))
}

/// Split one record into cells, honouring double quotes.
///
/// Quoted cells may contain the field delimiter (that is how a CSV row
/// carries a comma-separated predecessor list) and `""` escapes a literal
/// quote, as spreadsheet exports produce.
fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            cells.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    cells.push(current);
    cells
}
