// src/cli/report.rs
// Plain-text output for the scrape results.

use std::io::{self, Write};

use super::SortOrder;
use crate::{
    npc::{Column, NpcRecord},
    stats::{FrequencyMap, Stats},
};

const LEVEL_W: usize = 12;
const CELL_W: usize = 30;
const LABEL_W: usize = 30;

/// Every NPC's table, in scrape order.
pub fn write_tables<W: Write>(out: &mut W, records: &[NpcRecord]) -> io::Result<()> {
    for npc in records {
        writeln!(out, "{}", npc.name())?;
        match npc.preferences() {
            None => writeln!(out, "No living preferences.")?,
            Some(table) => {
                write!(out, "{:LEVEL_W$}", "")?;
                for col in Column::ALL {
                    write!(out, "{:CELL_W$}", col.header())?;
                }
                writeln!(out)?;
                for row in table.rows() {
                    write!(out, "{:LEVEL_W$}", row.level)?;
                    for col in Column::ALL {
                        write!(out, "{:CELL_W$}", row.cell(col))?;
                    }
                    writeln!(out)?;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &Stats, sort: SortOrder) -> io::Result<()> {
    for (title, map) in stats.categories() {
        writeln!(out, "{title}")?;
        writeln!(out, "{}", "-".repeat(title.len()))?;
        write_counts(out, map, sort)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, map: &FrequencyMap, sort: SortOrder) -> io::Result<()> {
    let rows = match sort {
        SortOrder::Seen => map.iter().collect::<Vec<_>>(),
        SortOrder::Count => map.by_count(),
    };
    for (label, n) in rows {
        writeln!(out, "{label:LABEL_W$}{n:>3}")?;
    }
    Ok(())
}
