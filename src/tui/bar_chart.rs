//! Plotters-powered horizontal bar chart widget for Ratatui.
//!
//! One bar per comparison row, highest rate on top. The category axis is a
//! segmented integer range so each institution gets a full band with its
//! name as the tick label.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
// `ratatui::style::Color` shadows the prelude's trait; `filled()` needs it.
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::app::pipeline::DashboardView;
use crate::tui::theme::{self, Rgb};

/// One bar, top to bottom in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub rate: f64,
    pub fill: Rgb,
}

/// Build bars for a view, in ranked order.
pub fn chart_bars(view: &DashboardView) -> Vec<Bar> {
    view.comparison
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| Bar {
            label: row.institution.clone(),
            rate: row.rate,
            fill: theme::bar_fill(i, row.is_reference()),
        })
        .collect()
}

/// A lightweight, render-only chart description.
///
/// All bars and bounds are computed outside the render call, which keeps
/// `render()` focused on drawing.
pub struct RateBarChart<'a> {
    pub bars: &'a [Bar],
    /// Rate axis bounds (percent).
    pub x_bounds: [f64; 2],
    pub x_label: &'a str,
}

impl<'a> RateBarChart<'a> {
    /// Segment index (from the bottom) of the bar at display position `i`.
    fn segment_of(&self, i: usize) -> i32 {
        (self.bars.len() - 1 - i) as i32
    }

    fn label_for_segment(&self, seg: i32) -> String {
        let n = self.bars.len() as i32;
        if seg < 0 || seg >= n {
            return String::new();
        }
        let i = (n - 1 - seg) as usize;
        self.bars[i].label.clone()
    }
}

impl<'a> Widget for RateBarChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 30 || area.height < 8 {
            buf.set_stringn(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                area.width as usize,
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        if self.bars.is_empty() || !(x0.is_finite() && x1.is_finite()) || x1 <= x0 {
            return;
        }

        let n = self.bars.len() as i32;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res; the left area must fit bank names.
                .set_label_area_size(LabelAreaPosition::Left, 16)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, (0..n).into_segmented())?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .x_labels(6)
                .y_labels(self.bars.len())
                .x_label_formatter(&|v| format!("{v:.1}%"))
                .y_label_formatter(&|v| match v {
                    SegmentValue::CenterOf(seg) => self.label_for_segment(*seg),
                    _ => String::new(),
                })
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            chart.draw_series(self.bars.iter().enumerate().map(|(i, bar)| {
                let seg = self.segment_of(i);
                let fill = theme::plot_color(bar.fill);
                Rectangle::new(
                    [(x0, SegmentValue::Exact(seg)), (bar.rate, SegmentValue::Exact(seg + 1))],
                    fill.filled(),
                )
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
