//! Plain-text rendering of the roadmap list and the timetable grid.
//!
//! Output is deterministic: columns follow the canonical hour order and
//! rows follow `Day::ALL`.

use crate::model::day::Day;
use crate::model::hours;
use crate::model::roadmap::RoadmapEntry;
use crate::model::timetable::TimetableGrid;
use crate::render::{ExportError, TimetableExporter};

const CORNER_HEADER: &str = "Day/Time";
const COLUMN_SEPARATOR: &str = " | ";

/// Renders planner data into aligned text tables and lists.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders the grid as one header row plus one row per day.
    ///
    /// Every column is padded to the widest value it contains, so the
    /// output lines up in a monospace view.
    pub fn render_timetable(&self, grid: &TimetableGrid) -> String {
        let slots = hours::ordered_slots();

        let mut widths = Vec::with_capacity(slots.len() + 1);
        widths.push(
            Day::ALL
                .iter()
                .map(|day| day.as_str().len())
                .chain([CORNER_HEADER.len()])
                .max()
                .unwrap_or(0),
        );
        for slot in slots {
            let cell_width = Day::ALL
                .iter()
                .map(|&day| grid.read_cell(day, &slot.key).len())
                .max()
                .unwrap_or(0);
            widths.push(slot.label.len().max(cell_width));
        }

        let mut lines = Vec::with_capacity(Day::ALL.len() + 1);

        let header = std::iter::once(CORNER_HEADER.to_string())
            .chain(slots.iter().map(|slot| slot.label.clone()))
            .collect::<Vec<_>>();
        lines.push(render_row(&header, &widths));

        for day in Day::ALL {
            let row = std::iter::once(day.as_str().to_string())
                .chain(
                    slots
                        .iter()
                        .map(|slot| grid.read_cell(day, &slot.key).to_string()),
                )
                .collect::<Vec<_>>();
            lines.push(render_row(&row, &widths));
        }

        lines.join("\n")
    }

    /// Renders the roadmap as a numbered list, one entry per goal.
    pub fn render_roadmap(&self, entries: &[RoadmapEntry]) -> String {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                format!(
                    "{}. {} - {}\n   {}",
                    index + 1,
                    entry.title,
                    entry.date,
                    entry.desc
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
        .trim_end()
        .to_string()
}

/// Exporter producing the UTF-8 bytes of the text rendering.
#[derive(Debug, Default)]
pub struct TextExporter {
    renderer: TextRenderer,
}

impl TextExporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimetableExporter for TextExporter {
    fn export(&self, grid: &TimetableGrid) -> Result<Vec<u8>, ExportError> {
        let rendered = self.renderer.render_timetable(grid);
        if rendered.is_empty() {
            return Err(ExportError::new("renderer produced no output"));
        }
        Ok(rendered.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::TextRenderer;
    use crate::model::day::Day;
    use crate::model::roadmap::RoadmapEntry;
    use crate::model::timetable::TimetableGrid;

    #[test]
    fn timetable_render_has_header_and_seven_day_rows() {
        let renderer = TextRenderer::new();
        let rendered = renderer.render_timetable(&TimetableGrid::new());
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Day/Time"));
        assert!(lines[0].contains("9:00 AM"));
        assert!(lines[0].trim_end().ends_with("12:00 PM"));
        assert!(lines[1].starts_with("Monday"));
        assert!(lines[7].starts_with("Sunday"));
    }

    #[test]
    fn timetable_render_places_subjects_under_their_day() {
        let mut grid = TimetableGrid::new();
        grid.set_cell(Day::Wednesday, "14:00", "Physics").unwrap();

        let renderer = TextRenderer::new();
        let rendered = renderer.render_timetable(&grid);
        let wednesday = rendered
            .lines()
            .find(|line| line.starts_with("Wednesday"))
            .unwrap();
        assert!(wednesday.contains("Physics"));
    }

    #[test]
    fn roadmap_render_numbers_entries_in_insertion_order() {
        let renderer = TextRenderer::new();
        let entries = vec![
            RoadmapEntry::new("Learn Rust", "Read the book", "2026-01-15"),
            RoadmapEntry::new("Ship project", "First release", "2026-03-01"),
        ];

        let rendered = renderer.render_roadmap(&entries);
        assert!(rendered.starts_with("1. Learn Rust - 2026-01-15"));
        assert!(rendered.contains("2. Ship project - 2026-03-01"));
        assert!(rendered.contains("   Read the book"));
    }
}
