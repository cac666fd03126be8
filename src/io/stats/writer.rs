use crate::connect::{AreaStatistics, RingStatistics};
use crate::io::error::Error;
use std::io::Write;

/// Writes μ₂ on the first line, then one `size count` line per ring size.
pub fn write_ring_histogram<W: Write>(mut writer: W, stats: &RingStatistics) -> Result<(), Error> {
    writeln!(writer, "{:.6}", stats.second_moment)?;
    for (size, count) in &stats.histogram {
        writeln!(writer, "{size} {count}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the total ring area on the first line, then one `size mean_area`
/// line per ring size.
pub fn write_area_histogram<W: Write>(mut writer: W, stats: &AreaStatistics) -> Result<(), Error> {
    writeln!(writer, "{:.6}", stats.total_area)?;
    for (size, area) in &stats.by_size {
        writeln!(writer, "{} {:.6}", size, area.mean())?;
    }
    writer.flush()?;
    Ok(())
}
