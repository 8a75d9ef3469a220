// src/core/html.rs
// Extraction for the two page shapes we read: the NPC index and an NPC page.
// Structure only; cell text normalization lives in npc::Cell.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::consts::{INDEX_HEADING, PREFERENCES_TABLE_CLASS};
use crate::core::sanitize::{normalize_ws, strip_invisible};
use crate::error::NpcError;
use crate::npc::{Cell, Column, LikingLevel, PreferenceRow, PreferenceTable};

fn selector(cell: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("static selector"))
}

fn sel_title() -> &'static Selector {
    static S: OnceLock<Selector> = OnceLock::new();
    selector(&S, ".title")
}
fn sel_entry() -> &'static Selector {
    static S: OnceLock<Selector> = OnceLock::new();
    selector(&S, ".i")
}
fn sel_link() -> &'static Selector {
    static S: OnceLock<Selector> = OnceLock::new();
    selector(&S, "a[href]")
}
fn sel_first_heading() -> &'static Selector {
    static S: OnceLock<Selector> = OnceLock::new();
    selector(&S, "h1#firstHeading")
}
fn sel_h1() -> &'static Selector {
    static S: OnceLock<Selector> = OnceLock::new();
    selector(&S, "h1")
}
fn sel_table() -> &'static Selector {
    static S: OnceLock<Selector> = OnceLock::new();
    selector(&S, &format!("table.{PREFERENCES_TABLE_CLASS}"))
}
fn sel_tr() -> &'static Selector {
    static S: OnceLock<Selector> = OnceLock::new();
    selector(&S, "tr")
}

/// Visible text of an element: text nodes joined in order, invisible
/// characters dropped, whitespace collapsed.
pub fn text_of(el: &ElementRef) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&strip_invisible(&raw))
}

/// One NPC entry on the index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NpcLink {
    pub name: String,
    pub href: String,
}

/// NPC links under the "NPCs" heading, in page order.
/// None when the page has no such section.
pub fn parse_index(doc: &str) -> Option<Vec<NpcLink>> {
    let html = Html::parse_document(doc);

    let heading = html
        .select(sel_title())
        .find(|el| text_of(el) == INDEX_HEADING)?;
    let container = heading.parent().and_then(ElementRef::wrap)?;

    let links = container
        .select(sel_entry())
        .filter_map(|entry| {
            let Some(a) = entry.select(sel_link()).next() else {
                debug!("index entry without a link: {:?}", text_of(&entry));
                return None;
            };
            let href = a.value().attr("href")?.trim().to_string();
            let name = a
                .value()
                .attr("title")
                .map(|t| normalize_ws(&strip_invisible(t)))
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| text_of(&a));
            (!href.is_empty()).then_some(NpcLink { name, href })
        })
        .collect();

    Some(links)
}

/// A parsed NPC page.
pub struct NpcPage {
    html: Html,
}

impl NpcPage {
    pub fn parse(doc: &str) -> Self {
        Self { html: Html::parse_document(doc) }
    }

    /// Page title heading (the NPC's name).
    pub fn heading(&self) -> Option<String> {
        self.html
            .select(sel_first_heading())
            .chain(self.html.select(sel_h1()))
            .map(|h| text_of(&h))
            .find(|t| !t.is_empty())
    }

    /// The living preferences table. First row is the header; its first
    /// cell (row labels) is unnamed and ignored. Short rows read as `N/A`.
    pub fn preferences(&self) -> Result<PreferenceTable, NpcError> {
        let table = self.html.select(sel_table()).next().ok_or(NpcError::MissingTable)?;

        let mut rows = table
            .select(sel_tr())
            .map(|tr| row_cells(&tr))
            .filter(|cells| !cells.is_empty());

        let header = rows.next().ok_or(NpcError::EmptyTable)?;
        let biome_ix = column_index(&header, Column::Biome)?;
        let neighbor_ix = column_index(&header, Column::Neighbor)?;

        let parsed = rows
            .map(|cells| {
                let level = LikingLevel::new(text_of(&cells[0]));
                let cell = |ix: usize| {
                    cells
                        .get(ix)
                        .map(|c| Cell::from_scraped(&text_of(c)))
                        .unwrap_or(Cell::NotAvailable)
                };
                PreferenceRow::new(level, cell(biome_ix), cell(neighbor_ix))
            })
            .collect();

        PreferenceTable::new(parsed)
    }
}

fn row_cells<'a>(tr: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "th" | "td"))
        .collect()
}

fn column_index(header: &[ElementRef], column: Column) -> Result<usize, NpcError> {
    header
        .iter()
        .skip(1)
        .position(|h| text_of(h).eq_ignore_ascii_case(column.header()))
        .map(|i| i + 1)
        .ok_or(NpcError::MissingColumn(column.header()))
}
