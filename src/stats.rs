use crate::models::{
    FriendStat, LeaderboardRow, LocationRow, LocationStat, MonthStat, SeriesPoint,
};
use crate::ordered::OrderedMap;
use std::fmt;

/// Legend entries shown by default on category charts.
pub const LEGEND_THRESHOLD: usize = 7;
/// Month charts show the whole year.
pub const MONTH_LEGEND_THRESHOLD: usize = 12;

const DEFAULT_ICON: &str = "🍺";

/// Projects `field` out of every record and orders by it, largest first.
///
/// Ties keep input order: `sort_by` is stable.
pub fn rank_by<T>(map: &OrderedMap<T>, field: impl Fn(&T) -> f64) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = map
        .iter()
        .map(|(name, record)| SeriesPoint {
            name: name.to_string(),
            value: field(record),
        })
        .collect();
    points.sort_by(|a, b| b.value.total_cmp(&a.value));
    points
}

pub fn locations_by_pints(locations: &OrderedMap<LocationStat>) -> Vec<SeriesPoint> {
    rank_by(locations, |stat| stat.pint_count)
}

pub fn locations_by_visits(locations: &OrderedMap<LocationStat>) -> Vec<SeriesPoint> {
    rank_by(locations, |stat| f64::from(stat.visit_count))
}

pub fn friends_by_pints(friends: &OrderedMap<FriendStat>) -> Vec<SeriesPoint> {
    rank_by(friends, |stat| stat.pint_count)
}

/// The most frequent category, or `""` when nothing beats zero.
///
/// Seeded with `("", 0)` and only replaced on a strictly greater count, so the
/// first of several equal maxima wins.
pub fn favorite(frequencies: &OrderedMap<f64>) -> String {
    frequencies
        .iter()
        .fold(("", 0.0), |best, (name, &count)| {
            if count > best.1 { (name, count) } else { best }
        })
        .0
        .to_string()
}

/// Marks the first `threshold` labels visible and the rest hidden.
pub fn legend_selection<S: AsRef<str>>(labels: &[S], threshold: usize) -> OrderedMap<bool> {
    let mut selected = OrderedMap::with_capacity(labels.len());
    for (idx, label) in labels.iter().enumerate() {
        selected.insert(label.as_ref(), idx < threshold);
    }
    selected
}

pub fn labels(points: &[SeriesPoint]) -> Vec<String> {
    points.iter().map(|point| point.name.clone()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMarker {
    Gold,
    Silver,
    Bronze,
    Numeral(u32),
}

pub fn rank_marker(rank: u32) -> RankMarker {
    match rank {
        1 => RankMarker::Gold,
        2 => RankMarker::Silver,
        3 => RankMarker::Bronze,
        other => RankMarker::Numeral(other),
    }
}

impl RankMarker {
    pub fn label(&self) -> String {
        match self {
            RankMarker::Gold => "gold".to_string(),
            RankMarker::Silver => "silver".to_string(),
            RankMarker::Bronze => "bronze".to_string(),
            RankMarker::Numeral(rank) => rank.to_string(),
        }
    }

    pub fn icon(&self) -> String {
        match self {
            RankMarker::Gold => "🥇".to_string(),
            RankMarker::Silver => "🥈".to_string(),
            RankMarker::Bronze => "🥉".to_string(),
            RankMarker::Numeral(rank) => rank.to_string(),
        }
    }
}

impl fmt::Display for RankMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Location grid rows, most pints first.
pub fn location_rows(locations: &OrderedMap<LocationStat>) -> Vec<LocationRow> {
    let mut rows: Vec<LocationRow> = locations
        .iter()
        .map(|(name, stat)| LocationRow {
            pint_rank: stat.pint_rank,
            rank_marker: rank_marker(stat.pint_rank).icon(),
            name: name.to_string(),
            pint_count: stat.pint_count,
            visit_count: stat.visit_count,
        })
        .collect();
    rows.sort_by(|a, b| b.pint_count.total_cmp(&a.pint_count));
    rows
}

/// Friends leaderboard rows in rank order, each with its favourite pub.
pub fn leaderboard_rows(friends: &OrderedMap<FriendStat>) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = friends
        .iter()
        .map(|(name, stat)| LeaderboardRow {
            pint_rank: stat.pint_rank,
            rank_marker: rank_marker(stat.pint_rank).icon(),
            name: name.to_string(),
            pint_count: stat.pint_count,
            favorite_pub: favorite(&stat.pub_frequency),
            icon: stat
                .icon
                .as_deref()
                .map(icon_glyph)
                .filter(|icon| !icon.is_empty())
                .unwrap_or_else(|| DEFAULT_ICON.to_string()),
        })
        .collect();
    rows.sort_by_key(|row| row.pint_rank);
    rows
}

/// Decodes a numeric HTML entity such as `&#x1F37A`; anything else is kept.
fn icon_glyph(icon: &str) -> String {
    let trimmed = icon.trim().trim_end_matches(';');
    let code = if let Some(hex) = trimmed.strip_prefix("&#x").or_else(|| trimmed.strip_prefix("&#X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = trimmed.strip_prefix("&#") {
        dec.parse::<u32>().ok()
    } else {
        None
    };
    code.and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_else(|| icon.to_string())
}

/// Months as chart points, in the order received.
pub fn month_series(months: &[MonthStat]) -> Vec<SeriesPoint> {
    months
        .iter()
        .map(|month| SeriesPoint {
            name: month.month.clone(),
            value: month.pint_count,
        })
        .collect()
}
