use std::io::{self, Write};

use silica_bridge::{AreaStatistics, RingStatistics, Slab, Species};

use crate::commands::RingFailure;
use crate::util::text::clip;

const INDENT: &str = "    ";
const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 44;
const BAR_WIDTH: usize = 12;

const MAX_FAILURE_ROWS: usize = 12;

/// A titled list of `label │ value` rows.
struct Section {
    title: &'static str,
    rows: Vec<(String, String)>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    fn row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((label.into(), value.into()));
        self
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let rule = "─".repeat(LABEL_WIDTH + VALUE_WIDTH + 3);
        writeln!(out, "{INDENT}\x1b[1m{}\x1b[0m", self.title)?;
        writeln!(out, "{INDENT}{rule}")?;
        for (label, value) in &self.rows {
            writeln!(
                out,
                "{INDENT}{:<LABEL_WIDTH$} │ {:<VALUE_WIDTH$}",
                clip(label, LABEL_WIDTH),
                clip(value, VALUE_WIDTH)
            )?;
        }
        writeln!(out, "{INDENT}{rule}")?;
        writeln!(out)
    }

    fn print(&self) {
        let _ = self.render(&mut io::stderr().lock());
    }
}

pub fn print_structure_info(slab: &Slab, detected: usize, corrections: usize) {
    structure_section(slab, detected, corrections).print();
}

pub fn print_ring_statistics(stats: &RingStatistics, areas: &AreaStatistics) {
    ring_section(stats, areas).print();
}

pub fn print_ring_failures(failures: &[RingFailure]) {
    if !failures.is_empty() {
        failure_section(failures).print();
    }
}

fn structure_section(slab: &Slab, detected: usize, corrections: usize) -> Section {
    let mut section = Section::new("Slab")
        .row("atoms", slab.atom_count().to_string())
        .row(
            "Si / O",
            format!("{} / {}", slab.count_of(Species::Si), slab.count_of(Species::O)),
        )
        .row("Si–O bonds", detected.to_string());
    if corrections > 0 {
        section = section.row("corrections", corrections.to_string());
    }
    if !slab.title.is_empty() {
        section = section.row("title", slab.title.clone());
    }
    section
}

fn ring_section(stats: &RingStatistics, areas: &AreaStatistics) -> Section {
    let mut section = Section::new("Rings");
    for (&size, &count) in &stats.histogram {
        let fraction = stats.fraction(size);
        section = section.row(
            format!("{size}-rings"),
            format!(
                "{count:>5} {} {:>5.1}%  ⟨A⟩ {:.3}",
                bar(fraction),
                fraction * 100.0,
                areas.mean_area(size)
            ),
        );
    }
    section
        .row("rings", stats.ring_count.to_string())
        .row("mean size", format!("{:.3}", stats.mean_size))
        .row("μ₂", format!("{:.4}", stats.second_moment))
        .row("total area", format!("{:.3} Å²", areas.total_area))
}

fn failure_section(failures: &[RingFailure]) -> Section {
    let mut section = Section::new("Unresolved rings");
    for failure in failures.iter().take(MAX_FAILURE_ROWS) {
        section = section.row(
            format!("ring #{}", failure.ring_number),
            failure.error.to_string(),
        );
    }
    if failures.len() > MAX_FAILURE_ROWS {
        section = section.row("…", format!("{} more", failures.len() - MAX_FAILURE_ROWS));
    }
    section
}

fn bar(fraction: f64) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "▇".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use silica_bridge::{ConnectError, Ring};

    fn rendered(section: &Section) -> String {
        let mut out = Vec::new();
        section.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bar_scales_with_fraction() {
        assert_eq!(bar(0.0), "·".repeat(BAR_WIDTH));
        assert_eq!(bar(1.0), "▇".repeat(BAR_WIDTH));
        assert_eq!(bar(0.5).chars().filter(|&c| c == '▇').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn ring_section_lists_sizes_and_moments() {
        let rings = vec![
            Ring::new(vec![0, 1, 2, 3, 4, 5]).unwrap(),
            Ring::new(vec![6, 7, 8, 9, 10, 11]).unwrap(),
        ];
        let stats = RingStatistics::from_rings(&rings);
        let text = rendered(&ring_section(&stats, &AreaStatistics::default()));

        assert!(text.contains("6-rings"));
        assert!(text.contains("100.0%"));
        assert!(text.contains("6.000"));
    }

    #[test]
    fn failure_section_is_capped() {
        let failures: Vec<_> = (1..=MAX_FAILURE_ROWS + 3)
            .map(|ring_number| RingFailure {
                ring_number,
                error: ConnectError::NoBridge {
                    position: 0,
                    a: 1,
                    b: 2,
                },
            })
            .collect();
        let section = failure_section(&failures);

        assert_eq!(section.rows.len(), MAX_FAILURE_ROWS + 1);
        assert!(rendered(&section).contains("3 more"));
    }
}
