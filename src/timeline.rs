use crate::models::{CalendarHeatmap, CumulativeSeries, DayEntry, EntryInfo};
use crate::ordered::OrderedMap;
use chrono::NaiveDate;

/// Builds one aligned series per category from per-entry cumulative totals.
///
/// Every series starts at 0 and has `entries.len() + 1` points. A category an
/// entry does not mention keeps its previous value. Keys outside `categories`
/// are ignored.
pub fn cumulative_series<S: AsRef<str>>(
    categories: &[S],
    entries: &[OrderedMap<f64>],
) -> Vec<CumulativeSeries> {
    let mut running = vec![0.0_f64; categories.len()];
    let mut series: Vec<CumulativeSeries> = categories
        .iter()
        .map(|name| {
            let mut values = Vec::with_capacity(entries.len() + 1);
            values.push(0.0);
            CumulativeSeries {
                name: name.as_ref().to_string(),
                values,
            }
        })
        .collect();

    for entry in entries {
        for (idx, category) in categories.iter().enumerate() {
            if let Some(total) = entry.get(category.as_ref()) {
                running[idx] = *total;
            }
            series[idx].values.push(running[idx]);
        }
    }

    series
}

/// Turns session records into per-session running pint totals per friend.
///
/// Sessions are taken in date order (stable for equal dates). Each output map
/// only names the friends present at that session.
pub fn friend_running_totals(entries: &OrderedMap<EntryInfo>) -> Vec<OrderedMap<f64>> {
    let mut sessions: Vec<&EntryInfo> = entries.values().collect();
    sessions.sort_by(|a, b| a.date.cmp(&b.date));

    let mut totals: OrderedMap<f64> = OrderedMap::new();
    sessions
        .into_iter()
        .map(|session| {
            let mut update = OrderedMap::with_capacity(session.company.len());
            for friend in &session.company {
                let total = totals.get(friend).copied().unwrap_or(0.0) + session.pint_count;
                totals.insert(friend.as_str(), total);
                update.insert(friend.as_str(), total);
            }
            update
        })
        .collect()
}

/// `[date, count]` pairs plus the largest count, for colour scaling.
pub fn calendar_heatmap(days: &OrderedMap<DayEntry>) -> CalendarHeatmap {
    let pairs: Vec<(String, f64)> = days
        .iter()
        .map(|(date, day)| (date.to_string(), day.pint_count))
        .collect();
    let max = pairs.iter().fold(0.0_f64, |max, (_, count)| max.max(*count));

    let mut dates: Vec<NaiveDate> = days
        .keys()
        .filter_map(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .collect();
    dates.sort();
    let range = match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => Some((first.to_string(), last.to_string())),
        _ => None,
    };

    CalendarHeatmap { pairs, max, range }
}
