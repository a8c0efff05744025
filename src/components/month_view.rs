use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct MonthView;

impl MonthView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        selected_date: NaiveDate,
        today: NaiveDate,
        marked_days: &HashSet<u32>,
    ) {
        let theme = theme::current();
        let title = format!(" {} ", selected_date.format("%B %Y"));

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = Line::from(
            DAY_NAMES
                .iter()
                .map(|d| Span::styled(format!("{:^5}", d), theme.header))
                .collect::<Vec<_>>(),
        );

        let weeks: Vec<Line> = month_grid(selected_date)
            .into_iter()
            .map(|week| {
                Line::from(
                    week.into_iter()
                        .map(|cell| match cell {
                            Some(date) => day_cell(date, selected_date, today, marked_days),
                            None => Span::raw("     "),
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(weeks.iter().map(|_| Constraint::Length(1)));
        constraints.push(Constraint::Min(0));

        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);
        for (i, week) in weeks.into_iter().enumerate() {
            frame.render_widget(Paragraph::new(week), rows[i + 1]);
        }
    }
}

fn day_cell(
    date: NaiveDate,
    selected_date: NaiveDate,
    today: NaiveDate,
    marked_days: &HashSet<u32>,
) -> Span<'static> {
    let theme = theme::current();
    let marked = marked_days.contains(&date.day());
    let text = if marked {
        format!(" {:>2}* ", date.day())
    } else {
        format!(" {:>2}  ", date.day())
    };

    let style = if date == selected_date {
        let style = if date == today {
            theme.today.add_modifier(Modifier::BOLD)
        } else {
            theme.selected
        };
        style.add_modifier(Modifier::UNDERLINED)
    } else if date == today {
        theme.today
    } else if marked {
        theme.marked
    } else {
        Style::default()
    };

    Span::styled(text, style)
}

/// Sunday-first weeks covering the month of `date`; `None` pads the edges.
fn month_grid(date: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday() as usize;
    let days: Vec<NaiveDate> = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect();

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for (slot, day) in (lead..).zip(days) {
        week[slot % 7] = Some(day);
        if slot % 7 == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days_in_month(date: NaiveDate) -> i64 {
        let first = date.with_day(1).unwrap();
        let next = first.checked_add_months(Months::new(1)).unwrap();
        next.signed_duration_since(first).num_days()
    }

    #[test]
    fn grid_starts_on_the_right_weekday() {
        // March 2024 starts on a Friday.
        let grid = month_grid(date(2024, 3, 15));
        assert_eq!(grid[0][..5], [None::<NaiveDate>; 5]);
        assert_eq!(grid[0][5], Some(date(2024, 3, 1)));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[5][0], Some(date(2024, 3, 31)));
    }

    #[test]
    fn grid_covers_every_day() {
        for (y, m) in [(2024, 2), (2023, 2), (2024, 12), (2026, 10)] {
            let d = date(y, m, 1);
            let count = month_grid(d).iter().flatten().flatten().count() as i64;
            assert_eq!(count, days_in_month(d));
        }
    }

    #[test]
    fn february_2026_fits_in_four_weeks() {
        // Starts on a Sunday with 28 days.
        assert_eq!(month_grid(date(2026, 2, 10)).len(), 4);
    }

    #[test]
    fn marked_day_gets_asterisk() {
        let marked = HashSet::from([20]);
        let cell = day_cell(date(2024, 3, 20), date(2024, 3, 1), date(2024, 3, 2), &marked);
        assert_eq!(cell.content, " 20* ");
        let plain = day_cell(date(2024, 3, 21), date(2024, 3, 1), date(2024, 3, 2), &marked);
        assert_eq!(plain.content, " 21  ");
    }
}
