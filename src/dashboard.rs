use crate::charts;
use crate::models::{CumulativeSeries, PintsInfo};
use crate::ordered::OrderedMap;
use crate::stats::{self, LEGEND_THRESHOLD, MONTH_LEGEND_THRESHOLD};
use crate::timeline;
use serde_json::{Value, json};
use tracing::debug;

/// Widgets the page can mount, keyed by their element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    PintsPerMonth,
    VisitsPerLocation,
    PintsPerLocation,
    LocationNestedPie,
    LocationGrid,
    LeaderboardGrid,
    FriendsCumulative,
    PintsCalendar,
}

impl Widget {
    pub const ALL: [Widget; 8] = [
        Widget::PintsPerMonth,
        Widget::VisitsPerLocation,
        Widget::PintsPerLocation,
        Widget::LocationNestedPie,
        Widget::LocationGrid,
        Widget::LeaderboardGrid,
        Widget::FriendsCumulative,
        Widget::PintsCalendar,
    ];

    pub fn mount_id(self) -> &'static str {
        match self {
            Widget::PintsPerMonth => "pintsPerMonthChart",
            Widget::VisitsPerLocation => "visitsPerLocationChart",
            Widget::PintsPerLocation => "pintsPerLocationChart",
            Widget::LocationNestedPie => "locationInfoNestedPieChart",
            Widget::LocationGrid => "locationInfoGrid",
            Widget::LeaderboardGrid => "leaderboardGrid",
            Widget::FriendsCumulative => "friendsCumulativeChart",
            Widget::PintsCalendar => "pintsCalendarChart",
        }
    }

    pub fn from_mount_id(id: &str) -> Option<Widget> {
        Widget::ALL.into_iter().find(|widget| widget.mount_id() == id)
    }

    pub fn is_grid(self) -> bool {
        matches!(self, Widget::LocationGrid | Widget::LeaderboardGrid)
    }
}

/// Parses a comma separated mount list. `None` means every widget.
pub fn parse_mounts(mounts: Option<&str>) -> Vec<Widget> {
    match mounts {
        None => Widget::ALL.to_vec(),
        Some(list) => {
            let mut widgets = Vec::new();
            for id in list.split(',').map(str::trim).filter(|id| !id.is_empty()) {
                match Widget::from_mount_id(id) {
                    Some(widget) if !widgets.contains(&widget) => widgets.push(widget),
                    Some(_) => {}
                    None => debug!("skipping unknown mount point '{id}'"),
                }
            }
            widgets
        }
    }
}

/// Renderer payloads for the requested widgets, keyed by mount id.
///
/// Each entry is `{"kind": "chart"|"grid", "payload": ...}`.
pub fn build_dashboard(info: &PintsInfo, widgets: &[Widget]) -> OrderedMap<Value> {
    let mut out = OrderedMap::with_capacity(widgets.len());
    for &widget in widgets {
        let kind = if widget.is_grid() { "grid" } else { "chart" };
        out.insert(
            widget.mount_id(),
            json!({ "kind": kind, "payload": render_widget(info, widget) }),
        );
    }
    out
}

pub fn render_widget(info: &PintsInfo, widget: Widget) -> Value {
    match widget {
        Widget::PintsPerMonth => charts::pie_chart(
            "Number of pints per month...",
            &stats::month_series(&info.date_info.pints_per_month_of_the_year),
            MONTH_LEGEND_THRESHOLD,
        ),
        Widget::VisitsPerLocation => charts::pie_chart(
            "Number of visits per pub...",
            &stats::locations_by_visits(&info.location_info),
            LEGEND_THRESHOLD,
        ),
        Widget::PintsPerLocation => charts::pie_chart(
            "Number of pints per pub...",
            &stats::locations_by_pints(&info.location_info),
            LEGEND_THRESHOLD,
        ),
        Widget::LocationNestedPie => charts::nested_location_pie(
            &stats::locations_by_pints(&info.location_info),
            &stats::locations_by_visits(&info.location_info),
            LEGEND_THRESHOLD,
        ),
        Widget::LocationGrid => json!({
            "columns": [
                { "field": "rank_marker", "header": "Rank" },
                { "field": "name", "header": "Pub" },
                { "field": "pint_count", "header": "Pints" },
                { "field": "visit_count", "header": "Visits" },
            ],
            "rows": stats::location_rows(&info.location_info),
        }),
        Widget::LeaderboardGrid => json!({
            "columns": [
                { "field": "rank_marker", "header": "Rank" },
                { "field": "name", "header": "Friend" },
                { "field": "pint_count", "header": "Pints" },
                { "field": "favorite_pub", "header": "Favourite Pub" },
            ],
            "rows": stats::leaderboard_rows(&info.friends_info),
        }),
        Widget::FriendsCumulative => {
            charts::cumulative_line_chart(&friend_series(info), LEGEND_THRESHOLD)
        }
        Widget::PintsCalendar => {
            charts::calendar_chart(&timeline::calendar_heatmap(&info.date_info.time_series_date_info))
        }
    }
}

/// Cumulative pints per friend, friends in leaderboard order.
///
/// Needs both the friend list and the session history from the document.
pub fn friend_series(info: &PintsInfo) -> Vec<CumulativeSeries> {
    let friends = stats::labels(&stats::friends_by_pints(&info.friends_info));
    let updates = timeline::friend_running_totals(&info.date_info.time_series_entry_info);
    timeline::cumulative_series(&friends, &updates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PintsInfo {
        serde_json::from_str(
            r#"{
                "location_info": {
                    "Crown": {"number_of_visits": 5, "number_of_pints": 3.0, "number_of_pints_rank": 2.0},
                    "Lion": {"number_of_visits": 1, "number_of_pints": 8.0, "number_of_pints_rank": 1.0}
                },
                "friends_info": {
                    "Sam": {"pint_count": 5.0, "pint_count_rank": 1.0, "pub_2_frequency": {"Lion": 5.0}},
                    "Jo": {"pint_count": 2.0, "pint_count_rank": 2.0, "pub_2_frequency": {"Crown": 2.0}}
                },
                "date_info": {
                    "pints_per_month_of_the_year": [{"month": "May", "number_of_pints": 7.0}],
                    "time_series_date_info": {"2024-05-01": {"Number": 7.0}},
                    "time_series_entry_info": {
                        "0": {"_datetime_date_": "2024-05-01", "company": ["Sam", "Jo"], "Number": 2.0},
                        "1": {"_datetime_date_": "2024-05-01", "company": ["Sam"], "Number": 3.0}
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_mounts_skips_unknown_and_duplicate_ids() {
        let widgets = parse_mounts(Some("leaderboardGrid, nope,,leaderboardGrid,pintsCalendarChart"));
        assert_eq!(widgets, vec![Widget::LeaderboardGrid, Widget::PintsCalendar]);
        assert_eq!(parse_mounts(None).len(), Widget::ALL.len());
        assert!(parse_mounts(Some("")).is_empty());
    }

    #[test]
    fn dashboard_contains_only_requested_widgets() {
        let board = build_dashboard(&sample(), &[Widget::LeaderboardGrid, Widget::PintsPerLocation]);
        assert_eq!(board.keys().collect::<Vec<_>>(), vec!["leaderboardGrid", "pintsPerLocationChart"]);
        let grid = board.get("leaderboardGrid").unwrap();
        assert_eq!(grid["kind"], "grid");
        assert_eq!(grid["payload"]["rows"][0]["name"], "Sam");
        assert_eq!(grid["payload"]["rows"][0]["favorite_pub"], "Lion");
        let pie = board.get("pintsPerLocationChart").unwrap();
        assert_eq!(pie["payload"]["series"][0]["data"][0]["name"], "Lion");
    }

    #[test]
    fn every_widget_renders_from_an_empty_document() {
        let board = build_dashboard(&PintsInfo::default(), &Widget::ALL);
        assert_eq!(board.len(), Widget::ALL.len());
        let grid = board.get("locationInfoGrid").unwrap();
        assert_eq!(grid["payload"]["rows"], json!([]));
    }

    #[test]
    fn friend_series_aligns_on_sessions() {
        let series = friend_series(&sample());
        assert_eq!(series[0].name, "Sam");
        assert_eq!(series[0].values, vec![0.0, 2.0, 5.0]);
        assert_eq!(series[1].values, vec![0.0, 2.0, 2.0]);
    }

    #[test]
    fn month_chart_shows_a_whole_year_of_legend() {
        let option = render_widget(&sample(), Widget::PintsPerMonth);
        assert_eq!(option["legend"]["selected"]["May"], true);
    }
}
