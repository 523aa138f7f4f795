//! Month-view derivation for the rental calendar widget
//!
//! A pure projection of the unavailability index onto a Monday-started month
//! grid. The widget renders cells as handed to it and never re-derives date
//! logic of its own.

use chrono::{Datelike, Days, NaiveDate};
use rentcal_domain::{AvailabilityError, RentalRequest, Result};
use serde::Serialize;

use crate::availability::UnavailabilityIndex;

/// Render state of one calendar cell.
///
/// Precedence when several apply: filler and past cells win over everything,
/// conflicts over selection highlights, selection over the today ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    /// Filler day belonging to the previous or next month.
    OutsideMonth,
    /// Strictly before the evaluation day.
    Past,
    /// Covered by a booked or blocked range.
    Unavailable,
    /// Start of the currently selected rental window.
    SelectedStart,
    /// Last day of the selected window.
    RangeEnd,
    /// Inside the selected window.
    InRange,
    /// The evaluation day itself, when otherwise free.
    Today,
    /// Free and selectable.
    Free,
}

/// One renderable cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Calendar day this cell shows.
    pub date: NaiveDate,
    /// Render state after precedence resolution.
    pub state: DayState,
    /// Tooltip reason when the day is unavailable.
    pub reason: Option<String>,
    /// Whether the cell may be clicked as a rental start.
    pub selectable: bool,
}

/// A Monday-started month grid with every cell pre-classified.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    /// Year of the displayed month.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Complete weeks covering the month, Monday first.
    pub weeks: Vec<[DayCell; 7]>,
    has_conflict: bool,
}

impl MonthView {
    /// Build the grid for `year`/`month` against the index and the injected
    /// evaluation day. `selection` marks the currently chosen window, if
    /// any.
    ///
    /// The grid spans whole weeks: from the Monday on or before the first of
    /// the month through the Sunday on or after its last day.
    pub fn build(
        year: i32,
        month: u32,
        today: NaiveDate,
        index: &UnavailabilityIndex,
        selection: Option<&RentalRequest>,
    ) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AvailabilityError::InvalidDate(format!("{year:04}-{month:02}")))?;
        let last = last_of_month(first);

        let grid_start = first - Days::new(u64::from(first.weekday().num_days_from_monday()));
        let grid_end = last + Days::new(u64::from(6 - last.weekday().num_days_from_monday()));

        let selected_window = selection.map(|request| (request.start(), request.end_date()));

        let mut weeks = Vec::new();
        let mut monday = grid_start;
        while monday <= grid_end {
            let week: [DayCell; 7] = std::array::from_fn(|offset| {
                classify(monday + Days::new(offset as u64), month, today, index, selected_window)
            });
            weeks.push(week);
            monday = monday.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
        }

        let has_conflict = selection.is_some_and(|request| !index.is_window_free(request));

        Ok(Self { year, month, weeks, has_conflict })
    }

    /// True when a selected window overlaps an unavailable day (drives the
    /// "choose different dates" banner).
    pub const fn has_conflict(&self) -> bool {
        self.has_conflict
    }
}

fn classify(
    date: NaiveDate,
    month: u32,
    today: NaiveDate,
    index: &UnavailabilityIndex,
    selected: Option<(NaiveDate, NaiveDate)>,
) -> DayCell {
    let availability = index.day_availability(date);
    let in_month = date.month() == month;
    let in_selection = selected.is_some_and(|(start, end)| date >= start && date <= end);

    let state = if !in_month {
        DayState::OutsideMonth
    } else if date < today {
        DayState::Past
    } else if availability.unavailable {
        DayState::Unavailable
    } else if selected.is_some_and(|(start, _)| date == start) {
        DayState::SelectedStart
    } else if in_selection && selected.is_some_and(|(_, end)| date == end) {
        DayState::RangeEnd
    } else if in_selection {
        DayState::InRange
    } else if date == today {
        DayState::Today
    } else {
        DayState::Free
    };

    let selectable = in_month && index.is_start_selectable(date, today);
    DayCell { date, state, reason: availability.reason, selectable }
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next_first| next_first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use rentcal_domain::DateRange;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cell(view: &MonthView, target: NaiveDate) -> DayCell {
        view.weeks
            .iter()
            .flatten()
            .find(|c| c.date == target)
            .cloned()
            .unwrap_or_else(|| panic!("day {target} not in grid"))
    }

    #[test]
    fn grid_spans_whole_weeks_monday_first() {
        let index = UnavailabilityIndex::build(&[], &[]);
        // June 2024 starts on a Saturday and ends on a Sunday.
        let view = MonthView::build(2024, 6, day(2024, 6, 1), &index, None).unwrap();

        assert_eq!(view.weeks.len(), 5);
        let first_cell = &view.weeks[0][0];
        assert_eq!(first_cell.date, day(2024, 5, 27));
        assert_eq!(first_cell.date.weekday(), Weekday::Mon);
        assert_eq!(view.weeks[4][6].date, day(2024, 6, 30));
    }

    #[test]
    fn filler_days_are_outside_month_and_unselectable() {
        let index = UnavailabilityIndex::build(&[], &[]);
        let view = MonthView::build(2024, 6, day(2024, 6, 1), &index, None).unwrap();

        let filler = cell(&view, day(2024, 5, 27));
        assert_eq!(filler.state, DayState::OutsideMonth);
        assert!(!filler.selectable);
    }

    #[test]
    fn past_days_disable_even_when_free() {
        let index = UnavailabilityIndex::build(&[], &[]);
        let view = MonthView::build(2024, 6, day(2024, 6, 15), &index, None).unwrap();

        assert_eq!(cell(&view, day(2024, 6, 14)).state, DayState::Past);
        assert_eq!(cell(&view, day(2024, 6, 15)).state, DayState::Today);
        assert_eq!(cell(&view, day(2024, 6, 16)).state, DayState::Free);
    }

    #[test]
    fn unavailable_days_carry_their_tooltip_reason() {
        let blocked = DateRange::new(day(2024, 6, 20), day(2024, 6, 21))
            .unwrap()
            .with_reason("Maintenance");
        let index = UnavailabilityIndex::build(&[], &[blocked]);
        let view = MonthView::build(2024, 6, day(2024, 6, 1), &index, None).unwrap();

        let unavailable = cell(&view, day(2024, 6, 20));
        assert_eq!(unavailable.state, DayState::Unavailable);
        assert_eq!(unavailable.reason.as_deref(), Some("Maintenance"));
        assert!(!unavailable.selectable);
    }

    #[test]
    fn selection_paints_start_range_and_end() {
        let index = UnavailabilityIndex::build(&[], &[]);
        let selection = RentalRequest::new(day(2024, 6, 10), 3).unwrap();
        let view =
            MonthView::build(2024, 6, day(2024, 6, 1), &index, Some(&selection)).unwrap();

        assert_eq!(cell(&view, day(2024, 6, 10)).state, DayState::SelectedStart);
        assert_eq!(cell(&view, day(2024, 6, 11)).state, DayState::InRange);
        assert_eq!(cell(&view, day(2024, 6, 12)).state, DayState::RangeEnd);
        assert_eq!(cell(&view, day(2024, 6, 13)).state, DayState::Free);
        assert!(!view.has_conflict());
    }

    #[test]
    fn conflict_wins_over_selection_highlight() {
        let booked = DateRange::new(day(2024, 6, 11), day(2024, 6, 11)).unwrap();
        let index = UnavailabilityIndex::build(&[booked], &[]);
        let selection = RentalRequest::new(day(2024, 6, 10), 3).unwrap();
        let view =
            MonthView::build(2024, 6, day(2024, 6, 1), &index, Some(&selection)).unwrap();

        assert_eq!(cell(&view, day(2024, 6, 11)).state, DayState::Unavailable);
        assert!(view.has_conflict());
    }

    #[test]
    fn single_day_selection_is_its_own_start() {
        let index = UnavailabilityIndex::build(&[], &[]);
        let selection = RentalRequest::new(day(2024, 6, 10), 1).unwrap();
        let view =
            MonthView::build(2024, 6, day(2024, 6, 1), &index, Some(&selection)).unwrap();

        // Start state wins over the coinciding range end.
        assert_eq!(cell(&view, day(2024, 6, 10)).state, DayState::SelectedStart);
    }

    #[test]
    fn december_grid_rolls_into_next_year() {
        let index = UnavailabilityIndex::build(&[], &[]);
        let view = MonthView::build(2024, 12, day(2024, 12, 1), &index, None).unwrap();

        // Dec 31 2024 is a Tuesday, so the last week is padded with January.
        let last_week = view.weeks.last().unwrap();
        assert_eq!(last_week[6].date, day(2025, 1, 5));
        assert_eq!(last_week[6].state, DayState::OutsideMonth);
    }

    #[test]
    fn invalid_month_is_rejected() {
        let index = UnavailabilityIndex::build(&[], &[]);
        let err = MonthView::build(2024, 13, day(2024, 6, 1), &index, None).unwrap_err();

        assert_eq!(err, AvailabilityError::InvalidDate("2024-13".to_string()));
    }
}
