//! Property-based invariant tests for the plot renderers.
//!
//! 1. Renderers never write outside their area, whatever the samples.
//! 2. Columns past the data stay blank.
//! 3. A single in-range series draws `|delta| - 1` verticals and two corners
//!    per level change.
//! 4. Bars fill exactly `rows - level + 1` cells.
//! 5. Legend text stays above the bottom row.

use cellchart::level::LevelMapper;
use cellchart::{BarPlot, LinePlot, PercentChart, SampleBuffer, ValueRange, Widget};
use cellchart_core::geometry::Rect;
use cellchart_render::buffer::Buffer;
use proptest::prelude::*;

const BUF_W: u16 = 40;
const BUF_H: u16 = 24;

fn sample_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -50.0f64..150.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
        1 => Just(1e300),
    ]
}

fn area_strategy() -> impl Strategy<Value = Rect> {
    (0u16..BUF_W, 0u16..BUF_H, 0u16..=BUF_W, 0u16..=BUF_H)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn assert_confined(buf: &Buffer, area: Rect) -> Result<(), TestCaseError> {
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            if buf.get(x, y).is_some_and(|c| !c.is_empty()) {
                prop_assert!(area.contains(x, y), "write at ({x}, {y}) outside {area:?}");
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn line_plot_stays_in_area(
        samples in prop::collection::vec(sample_strategy(), 0..80),
        series in 1usize..6,
        area in area_strategy(),
    ) {
        let mut buf = Buffer::new(BUF_W, BUF_H);
        let legend = [Some("gpu"), None, Some("memory"), Some("x")];
        let plot = LinePlot::new(SampleBuffer::new(&samples, series).unwrap(), ValueRange::PERCENT)
            .legend(&legend);
        Widget::render(&plot, area, &mut buf);
        assert_confined(&buf, area)?;
    }

    #[test]
    fn bar_plot_stays_in_area(
        samples in prop::collection::vec(sample_strategy(), 0..80),
        area in area_strategy(),
    ) {
        let mut buf = Buffer::new(BUF_W, BUF_H);
        Widget::render(&BarPlot::new(&samples, ValueRange::PERCENT), area, &mut buf);
        assert_confined(&buf, area)?;
    }

    #[test]
    fn percent_chart_stays_in_area(
        samples in prop::collection::vec(sample_strategy(), 0..80),
        area in area_strategy(),
    ) {
        let mut buf = Buffer::new(BUF_W, BUF_H);
        let chart = PercentChart::new(SampleBuffer::new(&samples, 2).unwrap());
        Widget::render(&chart, area, &mut buf);
        assert_confined(&buf, area)?;
    }

    #[test]
    fn columns_past_data_stay_blank(
        samples in prop::collection::vec(0.0f64..=100.0, 1..20),
        series in 1usize..4,
    ) {
        let mut buf = Buffer::new(BUF_W, BUF_H);
        let plot = LinePlot::new(SampleBuffer::new(&samples, series).unwrap(), ValueRange::PERCENT);
        plot.render(&mut buf);
        for x in samples.len() as u16..BUF_W {
            for y in 0..BUF_H {
                prop_assert!(buf.get(x, y).is_some_and(|c| c.is_empty()));
            }
        }
    }

    #[test]
    fn single_series_glyph_counts_follow_level_deltas(
        samples in prop::collection::vec(-20.0f64..=20.0, 1..=30),
        rows in 1u16..20,
    ) {
        let range = ValueRange::new(-20.0, 20.0).unwrap();
        let mut buf = Buffer::new(30, rows + 1);
        LinePlot::new(SampleBuffer::single(&samples), range).render(&mut buf);

        let mapper = LevelMapper::new(range, rows);
        let levels: Vec<i32> = samples.iter().map(|&v| mapper.level(v)).collect();
        let deltas: Vec<u32> = levels.windows(2).map(|w| w[0].abs_diff(w[1])).collect();
        let verticals: u32 = deltas.iter().map(|d| d.saturating_sub(1)).sum();
        let changes = deltas.iter().filter(|&&d| d > 0).count();

        prop_assert_eq!(buf.count_glyph('│'), verticals as usize);
        prop_assert_eq!(
            ['┌', '┐', '└', '┘'].iter().map(|&g| buf.count_glyph(g)).sum::<usize>(),
            2 * changes
        );
        prop_assert_eq!(buf.count_glyph('─'), samples.len() - changes);
    }

    #[test]
    fn bar_fill_matches_level(
        samples in prop::collection::vec(0.0f64..=100.0, 1..=20),
        rows in 1u16..20,
    ) {
        let mut buf = Buffer::new(20, rows + 1);
        BarPlot::new(&samples, ValueRange::PERCENT).render(&mut buf);

        let mapper = LevelMapper::new(ValueRange::PERCENT, rows);
        for (x, &value) in samples.iter().enumerate() {
            let expected = i32::from(rows) - mapper.level(value).max(0) + 1;
            let filled = (0..=rows)
                .filter(|&y| buf.get(x as u16, y).is_some_and(|c| !c.is_empty()))
                .count();
            prop_assert_eq!(filled as i32, expected);
        }
    }

    #[test]
    fn legend_never_reaches_bottom_row(
        height in 1u16..6,
        series in 1usize..8,
    ) {
        let samples = vec![0.0; series];
        let labels: Vec<Option<&str>> = (0..series).map(|_| Some("L")).collect();
        let mut buf = Buffer::new(4, height);
        LinePlot::new(SampleBuffer::new(&samples, series).unwrap(), ValueRange::PERCENT)
            .legend(&labels)
            .render(&mut buf);
        prop_assert_eq!(buf.count_glyph('L'), series.min(usize::from(height - 1)));
        let bottom = buf.row_cells(height - 1);
        prop_assert!(bottom.iter().all(|c| c.content.as_char() != Some('L')));
    }
}
