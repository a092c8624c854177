//! Grid layout engine: per-cell placement inside a visible hour window.
//!
//! # 学習ポイント
//! - Visibility と clipping は view の都合であり、データは変更しない
//!   （window 外の block は「この render pass から除外」されるだけ）
//! - Continuous（fractional 配置）が唯一の正仕様。Hour は旧グリッドの
//!   互換モードで、1 時間バケットに丸めて 1 block/バケットしか描かない

use serde::Serialize;

use crate::domain::ScheduleBlock;

/// Placement granularity.
///
/// `Continuous` is the default and the single source of truth. `Hour`
/// reproduces the legacy grid: integer-hour buckets, ceil'd durations and
/// at most one rendered block per starting hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    Hour,
    #[default]
    Continuous,
}

/// Visible window and geometry units for one grid.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Inclusive start of the visible window, in hours (default 08:00).
    pub window_start: f64,
    /// Exclusive end of the visible window, in hours (default 18:00).
    pub window_end: f64,
    /// Rendered height of one hour.
    pub unit_height: f64,
    /// Floor for rendered extents so near-zero blocks stay clickable.
    pub min_extent: f64,
    pub granularity: Granularity,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            window_start: 8.0,
            window_end: 18.0,
            unit_height: 32.0,
            min_extent: 12.0,
            granularity: Granularity::Continuous,
        }
    }
}

/// One block with its computed geometry inside a cell.
///
/// `offset`/`extent` are measured in the config's per-hour unit, clipped to
/// the window. The engine does not resolve visual overlap: concurrent
/// blocks in a cell may render stacked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedBlock<'a> {
    pub block: &'a ScheduleBlock,
    pub offset: f64,
    pub extent: f64,
}

/// Place the blocks of one `(employee, day)` cell.
///
/// A block renders iff `start_hour < window_end && start_hour +
/// duration_hours > window_start`; everything else is excluded from this
/// pass (the underlying data is untouched). Output is ordered by ascending
/// start hour.
pub fn layout<'a>(
    blocks: &'a [ScheduleBlock],
    employee_id: &str,
    day: u8,
    config: &LayoutConfig,
) -> Vec<PositionedBlock<'a>> {
    match config.granularity {
        Granularity::Continuous => layout_continuous(blocks, employee_id, day, config),
        Granularity::Hour => layout_hourly(blocks, employee_id, day, config),
    }
}

fn cell_blocks<'a>(
    blocks: &'a [ScheduleBlock],
    employee_id: &str,
    day: u8,
) -> impl Iterator<Item = &'a ScheduleBlock> {
    blocks
        .iter()
        .filter(move |b| b.employee_id == employee_id && b.day == day)
}

fn layout_continuous<'a>(
    blocks: &'a [ScheduleBlock],
    employee_id: &str,
    day: u8,
    config: &LayoutConfig,
) -> Vec<PositionedBlock<'a>> {
    let mut cell: Vec<&ScheduleBlock> = cell_blocks(blocks, employee_id, day)
        .filter(|b| {
            b.start_hour < config.window_end
                && b.start_hour + b.duration_hours > config.window_start
        })
        .collect();
    cell.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));

    cell.into_iter()
        .map(|block| PositionedBlock {
            block,
            offset: (block.start_hour - config.window_start).max(0.0) * config.unit_height,
            extent: (block.duration_hours * config.unit_height).max(config.min_extent),
        })
        .collect()
}

/// Legacy hour-bucket placement: floor the start, ceil the duration, and
/// render only the first (input-order) visible block per starting hour.
fn layout_hourly<'a>(
    blocks: &'a [ScheduleBlock],
    employee_id: &str,
    day: u8,
    config: &LayoutConfig,
) -> Vec<PositionedBlock<'a>> {
    let mut occupied = std::collections::HashSet::new();
    let mut placed = Vec::new();

    for block in cell_blocks(blocks, employee_id, day) {
        let start = block.start_hour.floor();
        let duration = block.duration_hours.ceil();
        if !(start < config.window_end && start + duration > config.window_start) {
            continue;
        }
        if !occupied.insert(start as i64) {
            continue;
        }
        placed.push(PositionedBlock {
            block,
            offset: (start - config.window_start).max(0.0) * config.unit_height,
            extent: (duration * config.unit_height).max(config.min_extent),
        });
    }

    placed.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssignmentSource, Category};

    fn block(id: &str, employee_id: &str, day: u8, start: f64, duration: f64) -> ScheduleBlock {
        ScheduleBlock {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            employee_name: "Employee 1".to_string(),
            task_name: "Code Review".to_string(),
            day,
            start_hour: start,
            duration_hours: duration,
            category: Category::Development,
            color_token: Category::Development.color_token(),
            assignment_source: AssignmentSource::Synthesized,
        }
    }

    fn ids<'a>(placed: &'a [PositionedBlock<'a>]) -> Vec<&'a str> {
        placed.iter().map(|p| p.block.id.as_str()).collect()
    }

    #[test]
    fn in_window_block_gets_proportional_geometry() {
        let blocks = vec![block("t-1", "emp-1", 0, 9.0, 1.5)];
        let placed = layout(&blocks, "emp-1", 0, &LayoutConfig::default());

        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].offset, 32.0); // (9 - 8) * 32
        assert_eq!(placed[0].extent, 48.0); // 1.5 * 32
    }

    #[test]
    fn block_spilling_into_the_window_is_clipped_to_offset_zero() {
        // starts at 7, ends at 9: visible (ends after window start) but
        // the part before 08:00 is cut off
        let blocks = vec![block("t-1", "emp-1", 0, 7.0, 2.0)];
        let placed = layout(&blocks, "emp-1", 0, &LayoutConfig::default());

        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].offset, 0.0);
    }

    #[test]
    fn block_after_window_end_is_excluded() {
        let blocks = vec![block("t-1", "emp-1", 0, 19.0, 1.0)];
        assert!(layout(&blocks, "emp-1", 0, &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn block_ending_before_window_start_is_excluded() {
        let blocks = vec![block("t-1", "emp-1", 0, 5.0, 3.0)]; // ends exactly at 8
        assert!(layout(&blocks, "emp-1", 0, &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn block_starting_exactly_at_window_end_is_excluded() {
        let blocks = vec![block("t-1", "emp-1", 0, 18.0, 1.0)];
        assert!(layout(&blocks, "emp-1", 0, &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn only_the_requested_cell_is_laid_out() {
        let blocks = vec![
            block("t-1", "emp-1", 0, 9.0, 1.0),
            block("t-2", "emp-2", 0, 9.0, 1.0),
            block("t-3", "emp-1", 1, 9.0, 1.0),
        ];
        let placed = layout(&blocks, "emp-1", 0, &LayoutConfig::default());
        assert_eq!(ids(&placed), ["t-1"]);
    }

    #[test]
    fn cell_is_ordered_by_ascending_start() {
        let blocks = vec![
            block("late", "emp-1", 0, 15.0, 1.0),
            block("early", "emp-1", 0, 8.5, 1.0),
            block("mid", "emp-1", 0, 11.0, 1.0),
        ];
        let placed = layout(&blocks, "emp-1", 0, &LayoutConfig::default());
        assert_eq!(ids(&placed), ["early", "mid", "late"]);
    }

    #[test]
    fn overlapping_blocks_all_render() {
        // concurrent blocks are permitted; the engine does not resolve
        // visual overlap
        let blocks = vec![
            block("t-1", "emp-1", 0, 9.0, 2.0),
            block("t-2", "emp-1", 0, 9.5, 1.0),
        ];
        let placed = layout(&blocks, "emp-1", 0, &LayoutConfig::default());
        assert_eq!(placed.len(), 2);
    }

    #[test]
    fn tiny_blocks_keep_a_clickable_extent() {
        let blocks = vec![block("t-1", "emp-1", 0, 9.0, 0.1)];
        let placed = layout(&blocks, "emp-1", 0, &LayoutConfig::default());
        assert_eq!(placed[0].extent, 12.0); // min_extent floor, not 3.2
    }

    fn hourly() -> LayoutConfig {
        LayoutConfig {
            granularity: Granularity::Hour,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn hourly_mode_floors_starts_and_ceils_durations() {
        let blocks = vec![block("t-1", "emp-1", 0, 9.5, 1.25)];
        let placed = layout(&blocks, "emp-1", 0, &hourly());

        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].offset, 32.0); // bucketed to 9
        assert_eq!(placed[0].extent, 64.0); // ceil(1.25) = 2 hours
    }

    #[test]
    fn hourly_mode_hides_later_blocks_in_the_same_hour() {
        let blocks = vec![
            block("first", "emp-1", 0, 9.0, 1.0),
            block("hidden", "emp-1", 0, 9.5, 1.0),
            block("next", "emp-1", 0, 10.0, 1.0),
        ];
        let placed = layout(&blocks, "emp-1", 0, &hourly());
        assert_eq!(ids(&placed), ["first", "next"]);
    }

    #[test]
    fn hourly_mode_still_applies_the_visibility_window() {
        let blocks = vec![
            block("t-1", "emp-1", 0, 19.0, 1.0),
            block("t-2", "emp-1", 0, 7.9, 1.0), // buckets to 7..8, ends at window start
        ];
        assert!(layout(&blocks, "emp-1", 0, &hourly()).is_empty());
    }

    #[test]
    fn custom_windows_shift_the_geometry() {
        let config = LayoutConfig {
            window_start: 0.0,
            window_end: 24.0,
            unit_height: 10.0,
            ..LayoutConfig::default()
        };
        let blocks = vec![block("t-1", "emp-1", 6, 22.0, 2.0)];
        let placed = layout(&blocks, "emp-1", 6, &config);

        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].offset, 220.0);
        assert_eq!(placed[0].extent, 20.0);
    }
}
