//! Chart option builders for the page's chart widget.
//!
//! Each call returns a freshly built option object; nothing is shared between
//! renders.

use crate::models::{CalendarHeatmap, CumulativeSeries, SeriesPoint};
use crate::stats::{labels, legend_selection};
use serde_json::{Value, json};

const PALETTE: [&str; 8] = [
    "#394a51", "#7fa99b", "#fbf2d5", "#fdc57b", "#b9965b", "#f9a828", "#07617d", "#2e383f",
];

fn base_option() -> Value {
    json!({
        "color": PALETTE,
        "textStyle": { "fontFamily": "IBM Plex Mono" },
        "tooltip": { "trigger": "item" },
    })
}

fn scroll_legend(names: &[String], threshold: usize) -> Value {
    json!({
        "type": "scroll",
        "orient": "vertical",
        "right": 10,
        "top": 60,
        "bottom": 10,
        "data": names,
        "selected": legend_selection(names, threshold),
    })
}

fn pie_series(name: Option<&str>, radius: Value, data: &[SeriesPoint]) -> Value {
    let mut series = json!({
        "type": "pie",
        "radius": radius,
        "center": ["35%", "55%"],
        "label": { "show": false },
        "emphasis": {
            "itemStyle": {
                "shadowBlur": 20,
                "shadowOffsetX": 0,
                "shadowColor": "rgba(0, 0, 0, 0.5)",
            }
        },
        "data": data,
    });
    if let (Some(name), Some(object)) = (name, series.as_object_mut()) {
        object.insert("name".to_string(), json!(name));
    }
    series
}

fn merge(mut target: Value, extra: Value) -> Value {
    if let (Some(target), Value::Object(extra)) = (target.as_object_mut(), extra) {
        for (key, value) in extra {
            target.insert(key, value);
        }
    }
    target
}

/// Single pie with a scrolling legend; only the first `threshold` slices start visible.
pub fn pie_chart(title: &str, data: &[SeriesPoint], threshold: usize) -> Value {
    let names = labels(data);
    merge(
        base_option(),
        json!({
            "title": { "text": title },
            "legend": scroll_legend(&names, threshold),
            "series": [pie_series(None, json!("70%"), data)],
        }),
    )
}

/// Visits in the inner disc, pints in the outer ring; legend follows pint order.
pub fn nested_location_pie(
    by_pints: &[SeriesPoint],
    by_visits: &[SeriesPoint],
    threshold: usize,
) -> Value {
    let names = labels(by_pints);
    merge(
        base_option(),
        json!({
            "title": {
                "text": "Location Stats",
                "subtext": "Outer ring: Number of pints\nInner ring: Number of times visited",
            },
            "legend": scroll_legend(&names, threshold),
            "series": [
                pie_series(Some("Number of times visited:"), json!([0, "30%"]), by_visits),
                pie_series(Some("Number of pints:"), json!(["45%", "60%"]), by_pints),
            ],
        }),
    )
}

/// One line per friend over the shared session index axis.
pub fn cumulative_line_chart(series: &[CumulativeSeries], threshold: usize) -> Value {
    let names: Vec<String> = series.iter().map(|s| s.name.clone()).collect();
    let points = series.first().map(|s| s.values.len()).unwrap_or(0);
    let axis: Vec<usize> = (0..points).collect();
    let lines: Vec<Value> = series
        .iter()
        .map(|s| {
            json!({
                "name": s.name,
                "type": "line",
                "step": "end",
                "showSymbol": false,
                "data": s.values,
            })
        })
        .collect();

    merge(
        base_option(),
        json!({
            "title": { "text": "Pints over time..." },
            "tooltip": { "trigger": "axis" },
            "legend": scroll_legend(&names, threshold),
            "grid": { "right": 160 },
            "xAxis": { "type": "category", "data": axis },
            "yAxis": { "type": "value" },
            "series": lines,
        }),
    )
}

/// Calendar heatmap scaled to the busiest day.
pub fn calendar_chart(heatmap: &CalendarHeatmap) -> Value {
    let range = match &heatmap.range {
        Some((first, last)) => json!([first, last]),
        None => Value::Null,
    };
    merge(
        base_option(),
        json!({
            "title": { "text": "Pints per day..." },
            "visualMap": {
                "min": 0,
                "max": heatmap.max,
                "orient": "horizontal",
                "left": "center",
                "bottom": 0,
                "inRange": { "color": [PALETTE[2], PALETTE[5], PALETTE[0]] },
            },
            "calendar": { "range": range, "cellSize": ["auto", 16], "top": 70 },
            "series": [{
                "type": "heatmap",
                "coordinateSystem": "calendar",
                "data": heatmap.pairs,
            }],
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, value: f64) -> SeriesPoint {
        SeriesPoint {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn pie_chart_selects_top_entries() {
        let data = vec![point("a", 3.0), point("b", 2.0), point("c", 1.0)];
        let option = pie_chart("Pints", &data, 2);
        assert_eq!(option["title"]["text"], "Pints");
        assert_eq!(option["legend"]["selected"]["a"], true);
        assert_eq!(option["legend"]["selected"]["b"], true);
        assert_eq!(option["legend"]["selected"]["c"], false);
        assert_eq!(option["series"][0]["data"][0]["name"], "a");
        assert_eq!(option["series"][0]["type"], "pie");
    }

    #[test]
    fn builders_return_independent_options() {
        let data = vec![point("a", 1.0)];
        let mut first = pie_chart("One", &data, 7);
        first["title"]["text"] = json!("mutated");
        let second = pie_chart("One", &data, 7);
        assert_eq!(second["title"]["text"], "One");
        assert_eq!(second["color"][0], PALETTE[0]);
    }

    #[test]
    fn nested_pie_has_inner_visits_and_outer_pints() {
        let pints = vec![point("Lion", 8.0), point("Crown", 3.0)];
        let visits = vec![point("Crown", 5.0), point("Lion", 1.0)];
        let option = nested_location_pie(&pints, &visits, 7);
        assert_eq!(option["series"][0]["name"], "Number of times visited:");
        assert_eq!(option["series"][0]["data"][0]["name"], "Crown");
        assert_eq!(option["series"][1]["data"][0]["name"], "Lion");
        assert_eq!(option["legend"]["data"][0], "Lion");
    }

    #[test]
    fn cumulative_chart_shares_the_index_axis() {
        let series = vec![
            CumulativeSeries { name: "X".into(), values: vec![0.0, 1.0, 1.0] },
            CumulativeSeries { name: "Y".into(), values: vec![0.0, 0.0, 2.0] },
        ];
        let option = cumulative_line_chart(&series, 7);
        assert_eq!(option["xAxis"]["data"], json!([0, 1, 2]));
        assert_eq!(option["series"][1]["data"], json!([0.0, 0.0, 2.0]));
        assert_eq!(option["tooltip"]["trigger"], "axis");
    }

    #[test]
    fn calendar_chart_without_days_has_no_range() {
        let heatmap = CalendarHeatmap { pairs: vec![], max: 0.0, range: None };
        let option = calendar_chart(&heatmap);
        assert_eq!(option["visualMap"]["max"], 0.0);
        assert!(option["calendar"]["range"].is_null());
        assert_eq!(option["series"][0]["data"], json!([]));
    }
}
