//! EDA view: dataset overview, cleaning log and charts.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row,
        Table, Tabs, Wrap,
    },
    Frame,
};

use crate::application::eda::{
    box_plot, count_plot, histogram, regression, EdaReport, Histogram, Overview, TARGET_COLUMN,
};
use crate::tui::styles::WellbeingTheme;

/// EDA sub-views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdaTab {
    #[default]
    Overview,
    Cleaning,
    Distributions,
    FeatureVsTarget,
    Correlation,
}

impl EdaTab {
    pub const ALL: [EdaTab; 5] = [
        EdaTab::Overview,
        EdaTab::Cleaning,
        EdaTab::Distributions,
        EdaTab::FeatureVsTarget,
        EdaTab::Correlation,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Cleaning => "Cleaning",
            Self::Distributions => "Distributions",
            Self::FeatureVsTarget => "Feature vs Target",
            Self::Correlation => "Correlation",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// EDA page state.
#[derive(Default)]
pub struct EdaViewState {
    pub report: Option<EdaReport>,
    pub error: Option<String>,
    /// Where the data comes from
    pub source: String,
    pub tab: EdaTab,
    /// Index into the report's numeric feature columns
    pub feature: usize,
    /// Index into the report's categorical columns
    pub category: usize,
}

impl EdaViewState {
    /// Whether a load has been attempted.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.report.is_some() || self.error.is_some()
    }

    pub fn next_feature(&mut self) {
        let n = self.report.as_ref().map_or(0, |r| r.feature_columns().len());
        if n > 0 {
            self.feature = (self.feature + 1) % n;
        }
    }

    pub fn prev_feature(&mut self) {
        let n = self.report.as_ref().map_or(0, |r| r.feature_columns().len());
        if n > 0 {
            self.feature = (self.feature + n - 1) % n;
        }
    }

    pub fn next_category(&mut self) {
        let n = self
            .report
            .as_ref()
            .map_or(0, |r| r.categorical_columns().len());
        if n > 0 {
            self.category = (self.category + 1) % n;
        }
    }

    fn selected_feature<'a>(&self, report: &'a EdaReport) -> Option<&'a str> {
        report.feature_columns().get(self.feature).copied()
    }

    fn selected_category<'a>(&self, report: &'a EdaReport) -> Option<&'a str> {
        report.categorical_columns().get(self.category).copied()
    }
}

/// Render the EDA view
pub fn render_eda(f: &mut Frame, area: Rect, state: &EdaViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_eda_header(f, chunks[0], state);
    render_eda_tabs(f, chunks[1], state.tab);

    match (&state.report, &state.error) {
        (_, Some(err)) => render_eda_error(f, chunks[2], err),
        (Some(report), None) => match state.tab {
            EdaTab::Overview => render_overview(f, chunks[2], report),
            EdaTab::Cleaning => render_cleaning(f, chunks[2], report),
            EdaTab::Distributions => render_distributions(f, chunks[2], state, report),
            EdaTab::FeatureVsTarget => render_feature_vs_target(f, chunks[2], state, report),
            EdaTab::Correlation => render_correlation(f, chunks[2], report),
        },
        (None, None) => {
            let p = Paragraph::new(Span::styled("Loading dataset...", WellbeingTheme::info()))
                .alignment(Alignment::Center);
            f.render_widget(p, chunks[2]);
        }
    }

    render_eda_footer(f, chunks[3]);
}

fn render_eda_header(f: &mut Frame, area: Rect, state: &EdaViewState) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", WellbeingTheme::text()),
        Span::styled("Exploratory Data Analysis", WellbeingTheme::title()),
        Span::styled(format!(" │ {}", state.source), WellbeingTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(WellbeingTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_eda_tabs(f: &mut Frame, area: Rect, tab: EdaTab) {
    let tabs = Tabs::new(EdaTab::ALL.iter().map(|t| t.title()))
        .select(tab.index())
        .style(WellbeingTheme::text_secondary())
        .highlight_style(WellbeingTheme::selected())
        .divider("│");

    f.render_widget(tabs, area);
}

fn titled(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {title} "), WellbeingTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(WellbeingTheme::border())
}

fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

/// Columns as rows: name, dtype, then the first values.
fn render_overview(f: &mut Frame, area: Rect, report: &EdaReport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let (rows, cols) = report.raw.shape;
    let (clean_rows, clean_cols) = report.cleaned.shape();
    let shape = Paragraph::new(Line::from(vec![
        Span::styled(" Raw shape: ", WellbeingTheme::text_secondary()),
        Span::styled(format!("{rows} rows × {cols} columns"), WellbeingTheme::title()),
        Span::styled("   Cleaned shape: ", WellbeingTheme::text_secondary()),
        Span::styled(
            format!("{clean_rows} rows × {clean_cols} columns"),
            WellbeingTheme::title(),
        ),
    ]));
    f.render_widget(shape, chunks[0]);

    let sides = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_head_table(f, sides[0], &report.raw, "Raw data");
    render_head_table(f, sides[1], &Overview::of(&report.cleaned), "Cleaned data");
}

fn render_head_table(f: &mut Frame, area: Rect, overview: &Overview, title: &str) {
    let head = &overview.head;
    let preview = head.len();

    let rows: Vec<Row> = overview
        .dtypes
        .iter()
        .enumerate()
        .map(|(c, (name, dtype))| {
            let mut cells = vec![name.clone(), dtype.to_string()];
            cells.extend(head.iter().map(|row| row.get(c).cloned().unwrap_or_default()));
            Row::new(cells)
        })
        .collect();

    let mut header = vec!["column".to_string(), "dtype".to_string()];
    header.extend((0..preview).map(|i| i.to_string()));

    let mut widths = vec![Constraint::Length(22), Constraint::Length(7)];
    widths.extend((0..preview).map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(WellbeingTheme::focused()))
        .block(titled(title.to_string()));

    f.render_widget(table, area);
}

fn render_cleaning(f: &mut Frame, area: Rect, report: &EdaReport) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let c = &report.cleaning;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Rows before: ", WellbeingTheme::text_secondary()),
            Span::styled(c.rows_before.to_string(), WellbeingTheme::text()),
        ]),
        Line::from(Span::styled(
            if c.timestamp_dropped {
                "Dropped the Timestamp column"
            } else {
                "No Timestamp column"
            },
            WellbeingTheme::text(),
        )),
        Line::from(vec![
            Span::styled("Missing values: ", WellbeingTheme::text_secondary()),
            Span::styled(
                format!("{} cells, {} rows removed", c.missing_cells, c.missing_rows_removed),
                WellbeingTheme::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Duplicates removed: ", WellbeingTheme::text_secondary()),
            Span::styled(c.duplicates_removed.to_string(), WellbeingTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("Outliers removed: ", WellbeingTheme::text_secondary()),
            Span::styled(c.total_outliers().to_string(), WellbeingTheme::text()),
        ]),
    ];
    lines.extend(c.outliers.iter().filter(|o| o.removed > 0).map(|o| {
        Line::from(Span::styled(
            format!("  {}: {}", o.column, o.removed),
            WellbeingTheme::text_muted(),
        ))
    }));
    lines.push(Line::from(""));
    let (rows, cols) = report.cleaned.shape();
    lines.push(Line::from(vec![
        Span::styled("Cleaned shape: ", WellbeingTheme::text_secondary()),
        Span::styled(format!("{rows} × {cols}"), WellbeingTheme::success()),
    ]));

    let log = Paragraph::new(lines)
        .block(titled("Data cleaning".into()))
        .wrap(Wrap { trim: false });
    f.render_widget(log, chunks[0]);

    let rows: Vec<Row> = report
        .summaries
        .iter()
        .map(|s| {
            Row::new(vec![
                s.column.clone(),
                s.count.to_string(),
                fmt_num(s.mean),
                s.std.map_or_else(|| "NaN".to_string(), fmt_num),
                fmt_num(s.min),
                fmt_num(s.q1),
                fmt_num(s.median),
                fmt_num(s.q3),
                fmt_num(s.max),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(26),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(["column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"])
                .style(WellbeingTheme::focused()),
        )
        .block(titled("Descriptive statistics".into()));
    f.render_widget(table, chunks[1]);
}

fn render_histogram(f: &mut Frame, area: Rect, hist: &Histogram) {
    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.count as u64)
                .label(Line::from(fmt_num(b.start)))
                .style(WellbeingTheme::bar())
                .value_style(WellbeingTheme::selected())
        })
        .collect();

    let n = bars.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / n).saturating_sub(1).max(1);

    let chart = BarChart::default()
        .block(titled(format!("Distribution of {}", hist.column)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_distributions(f: &mut Frame, area: Rect, state: &EdaViewState, report: &EdaReport) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_histogram(f, rows[0], &report.target_histogram);

    match state
        .selected_feature(report)
        .and_then(|col| histogram(&report.cleaned, col))
    {
        Some(hist) => render_histogram(f, bottom[0], &hist),
        None => render_placeholder(f, bottom[0], "No numeric features"),
    }

    match state
        .selected_category(report)
        .and_then(|col| count_plot(&report.cleaned, col))
    {
        Some(plot) => {
            let bars: Vec<Bar> = plot
                .counts
                .iter()
                .map(|(label, count)| {
                    Bar::default()
                        .value(*count as u64)
                        .label(Line::from(label.clone()))
                        .style(WellbeingTheme::bar())
                        .value_style(WellbeingTheme::selected())
                })
                .collect();
            let chart = BarChart::default()
                .block(titled(format!("Count plot of {}", plot.column)))
                .direction(Direction::Horizontal)
                .data(BarGroup::default().bars(&bars))
                .bar_width(1)
                .bar_gap(0);
            f.render_widget(chart, bottom[1]);
        }
        None => render_placeholder(f, bottom[1], "No categorical columns"),
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        [0.0, 1.0]
    } else if lo == hi {
        [lo - 1.0, hi + 1.0]
    } else {
        [lo, hi]
    }
}

fn render_feature_vs_target(
    f: &mut Frame,
    area: Rect,
    state: &EdaViewState,
    report: &EdaReport,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    match state
        .selected_feature(report)
        .and_then(|col| regression(&report.cleaned, col))
    {
        Some(plot) => {
            let x_bounds = bounds(plot.points.iter().map(|p| p.0));
            let y_bounds = bounds(plot.points.iter().map(|p| p.1));
            let fit: Vec<(f64, f64)> = plot
                .line
                .map(|(slope, intercept)| {
                    x_bounds
                        .iter()
                        .map(|x| (*x, slope * x + intercept))
                        .collect()
                })
                .unwrap_or_default();

            let mut datasets = vec![Dataset::default()
                .name(plot.x.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(WellbeingTheme::bar())
                .data(&plot.points)];
            if !fit.is_empty() {
                datasets.push(
                    Dataset::default()
                        .name("OLS fit")
                        .marker(symbols::Marker::Braille)
                        .graph_type(GraphType::Line)
                        .style(WellbeingTheme::info())
                        .data(&fit),
                );
            }

            let chart = Chart::new(datasets)
                .block(titled(format!("{} vs {}", plot.x, plot.y)))
                .x_axis(
                    Axis::default()
                        .title(plot.x.clone())
                        .style(WellbeingTheme::text_muted())
                        .bounds(x_bounds)
                        .labels([fmt_num(x_bounds[0]), fmt_num(x_bounds[1])]),
                )
                .y_axis(
                    Axis::default()
                        .title(plot.y.clone())
                        .style(WellbeingTheme::text_muted())
                        .bounds(y_bounds)
                        .labels([fmt_num(y_bounds[0]), fmt_num(y_bounds[1])]),
                );
            f.render_widget(chart, chunks[0]);
        }
        None => render_placeholder(f, chunks[0], "No numeric features"),
    }

    match state
        .selected_category(report)
        .and_then(|col| box_plot(&report.cleaned, col))
    {
        Some(plot) => {
            let rows: Vec<Row> = plot
                .groups
                .iter()
                .map(|g| {
                    Row::new(vec![
                        g.label.clone(),
                        g.count.to_string(),
                        fmt_num(g.whisker_low),
                        fmt_num(g.q1),
                        fmt_num(g.median),
                        fmt_num(g.q3),
                        fmt_num(g.whisker_high),
                        g.outliers.len().to_string(),
                    ])
                })
                .collect();
            let widths = [
                Constraint::Min(10),
                Constraint::Length(6),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(5),
            ];
            let table = Table::new(rows, widths)
                .header(
                    Row::new(["group", "n", "low", "q1", "median", "q3", "high", "out"])
                        .style(WellbeingTheme::focused()),
                )
                .block(titled(format!("{} by {}", plot.target, plot.category)));
            f.render_widget(table, chunks[1]);
        }
        None => render_placeholder(f, chunks[1], "No categorical columns"),
    }
}

fn render_correlation(f: &mut Frame, area: Rect, report: &EdaReport) {
    const BAR_WIDTH: f64 = 30.0;

    let rows: Vec<Row> = report
        .correlations
        .iter()
        .map(|(column, r)| match r {
            Some(r) => {
                let len = (r.abs() * BAR_WIDTH).round() as usize;
                let sign = if *r < 0.0 { "-" } else { "+" };
                Row::new(vec![
                    column.clone(),
                    format!("{r:+.3}"),
                    format!("{sign}{}", "█".repeat(len)),
                ])
                .style(WellbeingTheme::correlation(*r))
            }
            None => Row::new(vec![column.clone(), "n/a".to_string(), String::new()])
                .style(WellbeingTheme::text_muted()),
        })
        .collect();

    let widths = [
        Constraint::Length(26),
        Constraint::Length(8),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(Row::new(["column", "r", ""]).style(WellbeingTheme::focused()))
        .block(titled(format!("Correlation with {TARGET_COLUMN}")));

    f.render_widget(table, area);
}

fn render_placeholder(f: &mut Frame, area: Rect, message: &str) {
    let p = Paragraph::new(Span::styled(message.to_string(), WellbeingTheme::text_muted()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(WellbeingTheme::border()),
        );
    f.render_widget(p, area);
}

fn render_eda_error(f: &mut Frame, area: Rect, error: &str) {
    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Could not load the dataset",
            WellbeingTheme::danger().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(error.to_string(), WellbeingTheme::text())]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[R] ", WellbeingTheme::key_hint()),
            Span::styled("Retry", WellbeingTheme::key_desc()),
        ]),
    ];

    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(WellbeingTheme::danger()),
        );

    f.render_widget(p, area);
}

fn render_eda_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[←→] ", WellbeingTheme::key_hint()),
        Span::styled("Tab ", WellbeingTheme::key_desc()),
        Span::styled("[↑↓] ", WellbeingTheme::key_hint()),
        Span::styled("Feature ", WellbeingTheme::key_desc()),
        Span::styled("[C] ", WellbeingTheme::key_hint()),
        Span::styled("Category ", WellbeingTheme::key_desc()),
        Span::styled("[R] ", WellbeingTheme::key_hint()),
        Span::styled("Reload ", WellbeingTheme::key_desc()),
        Span::styled("[Esc] ", WellbeingTheme::key_hint()),
        Span::styled("Home", WellbeingTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WellbeingTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(EdaTab::Overview.next(), EdaTab::Cleaning);
        assert_eq!(EdaTab::Overview.prev(), EdaTab::Correlation);
        assert_eq!(EdaTab::Correlation.next(), EdaTab::Overview);

        let mut tab = EdaTab::default();
        for _ in 0..EdaTab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, EdaTab::Overview);
    }

    #[test]
    fn test_selection_without_report_is_noop() {
        let mut state = EdaViewState::default();
        state.next_feature();
        state.prev_feature();
        state.next_category();
        assert_eq!(state.feature, 0);
        assert_eq!(state.category, 0);
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_bounds_handle_degenerate_input() {
        assert_eq!(bounds(std::iter::empty()), [0.0, 1.0]);
        assert_eq!(bounds([3.0, 3.0].into_iter()), [2.0, 4.0]);
        assert_eq!(bounds([5.0, -1.0, 2.0].into_iter()), [-1.0, 5.0]);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(3.0), "3");
        assert_eq!(fmt_num(2.346), "2.35");
    }
}
