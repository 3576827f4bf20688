use crate::coerce;
use crate::ordered::OrderedMap;
use serde::{Deserialize, Serialize};

/// The aggregate document produced upstream. Every section may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PintsInfo {
    #[serde(default)]
    pub location_info: OrderedMap<LocationStat>,
    #[serde(default)]
    pub friends_info: OrderedMap<FriendStat>,
    #[serde(default)]
    pub date_info: DateInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationStat {
    #[serde(rename = "number_of_pints")]
    pub pint_count: f64,
    #[serde(rename = "number_of_visits", deserialize_with = "coerce::whole_number")]
    pub visit_count: u32,
    #[serde(rename = "number_of_pints_rank", deserialize_with = "coerce::whole_number")]
    pub pint_rank: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendStat {
    pub pint_count: f64,
    #[serde(rename = "pint_count_rank", deserialize_with = "coerce::whole_number")]
    pub pint_rank: u32,
    #[serde(rename = "pub_2_frequency", default)]
    pub pub_frequency: OrderedMap<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DateInfo {
    #[serde(default)]
    pub pints_per_month_of_the_year: Vec<MonthStat>,
    #[serde(default)]
    pub time_series_date_info: OrderedMap<DayEntry>,
    #[serde(default)]
    pub time_series_entry_info: OrderedMap<EntryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthStat {
    pub month: String,
    #[serde(rename = "number_of_pints")]
    pub pint_count: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_popular_drink: Option<String>,
}

/// One day of the calendar series, keyed by ISO date in the parent map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayEntry {
    #[serde(rename = "Number")]
    pub pint_count: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_number: Option<f64>,
}

/// One drinking session: a date, who was there and how many pints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryInfo {
    #[serde(rename = "_datetime_date_")]
    pub date: String,
    #[serde(default)]
    pub company: Vec<String>,
    #[serde(rename = "Number")]
    pub pint_count: f64,
    #[serde(rename = "Pint", default, skip_serializing_if = "Option::is_none")]
    pub drink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_number: Option<f64>,
}

/// `{name, value}` pair as consumed by pie and bar series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationRow {
    pub pint_rank: u32,
    pub rank_marker: String,
    pub name: String,
    pub pint_count: f64,
    pub visit_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardRow {
    pub pint_rank: u32,
    pub rank_marker: String,
    pub name: String,
    pub pint_count: f64,
    pub favorite_pub: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CumulativeSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarHeatmap {
    pub pairs: Vec<(String, f64)>,
    pub max: f64,
    pub range: Option<(String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecordStore {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub records: Vec<PintRecord>,
}

/// Add-entry form payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordCreate {
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub pint_brand: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_number")]
    pub pint_cost: Option<f64>,
    #[serde(deserialize_with = "coerce::number")]
    pub number: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub friend_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PintRecord {
    pub id: u64,
    pub date: String,
    pub location: String,
    pub pint_brand: Option<String>,
    pub pint_cost: Option<f64>,
    pub number: f64,
    pub comment: Option<String>,
    pub friend_names: Vec<String>,
    pub total_cost: Option<f64>,
}

impl RecordStore {
    /// Stores a submitted entry and returns it with its id and total cost.
    pub fn add(&mut self, payload: RecordCreate) -> PintRecord {
        self.next_id += 1;
        let record = PintRecord {
            id: self.next_id,
            total_cost: payload.pint_cost.map(|cost| cost * payload.number),
            date: payload.date.trim().to_string(),
            location: payload.location.trim().to_string(),
            pint_brand: non_blank(payload.pint_brand),
            pint_cost: payload.pint_cost,
            number: payload.number,
            comment: non_blank(payload.comment),
            friend_names: friend_names(payload.friend_names),
        };
        self.records.push(record.clone());
        record
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Trimmed, non-empty names, first occurrence only.
fn friend_names(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim();
        if !name.is_empty() && !out.iter().any(|existing| existing == name) {
            out.push(name.to_string());
        }
    }
    out
}

#[derive(Debug, Deserialize, Default)]
pub struct DashboardQuery {
    #[serde(default)]
    pub mounts: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_document_shape() {
        let raw = r#"{
            "location_info": {
                "The Crown": {"number_of_visits": 4, "number_of_pints": 9.0, "number_of_pints_rank": 1.0}
            },
            "friends_info": {
                "Sam": {"pint_count": 6.0, "pub_2_frequency": {"The Crown": 4, "Red Lion": 2},
                        "icon": "&#x1F37A", "pint_count_rank": 1.0}
            },
            "date_info": {
                "pints_per_month_of_the_year": [{"month": "March", "number_of_pints": 9.0, "most_popular_drink": "Stout"}],
                "time_series_date_info": {"2024-03-01": {"Number": 3.0, "cumulative_number": 3.0, "company": ["Sam"]}},
                "time_series_entry_info": {"0": {"_datetime_date_": "2024-03-01", "company": ["Sam"], "Number": 3.0, "Pint": "Stout", "cumulative_number": 3.0}}
            }
        }"#;
        let info: PintsInfo = serde_json::from_str(raw).unwrap();
        let crown = info.location_info.get("The Crown").unwrap();
        assert_eq!(crown.pint_rank, 1);
        assert_eq!(crown.visit_count, 4);
        let sam = info.friends_info.get("Sam").unwrap();
        assert_eq!(sam.pub_frequency.keys().collect::<Vec<_>>(), vec!["The Crown", "Red Lion"]);
        assert_eq!(info.date_info.pints_per_month_of_the_year[0].month, "March");
        assert_eq!(info.date_info.time_series_entry_info.get("0").unwrap().company, vec!["Sam"]);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let info: PintsInfo = serde_json::from_str(r#"{"location_info": {}}"#).unwrap();
        assert!(info.friends_info.is_empty());
        assert!(info.date_info.pints_per_month_of_the_year.is_empty());
        assert!(info.date_info.time_series_date_info.is_empty());
    }

    #[test]
    fn record_create_coerces_form_strings() {
        let payload: RecordCreate = serde_json::from_str(
            r#"{"date": "2024-03-01", "location": "The Crown", "pint_brand": "Stout",
                "pint_cost": "5.5", "number": "2", "comment": "", "friend_names": ["Sam"]}"#,
        )
        .unwrap();
        assert_eq!(payload.number, 2.0);
        assert_eq!(payload.pint_cost, Some(5.5));
    }

    #[test]
    fn record_store_assigns_ids_and_totals() {
        let mut store = RecordStore::default();
        let payload: RecordCreate = serde_json::from_str(
            r#"{"date": "2024-03-01", "location": " The Crown ", "pint_cost": 5.0, "number": 2,
                "comment": "  ", "friend_names": [" Sam", "Jo", "", "Sam"]}"#,
        )
        .unwrap();
        let first = store.add(payload.clone());
        assert_eq!(first.id, 1);
        assert_eq!(first.location, "The Crown");
        assert_eq!(first.total_cost, Some(10.0));
        assert_eq!(first.comment, None);
        assert_eq!(first.friend_names, vec!["Sam", "Jo"]);

        let second = store.add(RecordCreate { pint_cost: None, ..payload });
        assert_eq!(second.id, 2);
        assert_eq!(second.total_cost, None);
        assert_eq!(store.records.len(), 2);
    }
}
