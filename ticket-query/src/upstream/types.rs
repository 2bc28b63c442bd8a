//! Upstream API response DTOs.
//!
//! These types map directly to the ticketing site's JSON responses. They
//! use defaults liberally because the upstream omits fields rather than
//! sending null in many cases, and required-field enforcement happens at
//! the conversion boundary so one bad record cannot sink a whole
//! response.

use std::collections::HashMap;

use serde::Deserialize;

/// Envelope of the schedule query endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleResponse {
    /// Non-empty when the upstream rejected the query outright.
    #[serde(default)]
    pub messages: Vec<String>,

    /// The result set; absent or empty when there is nothing to show.
    #[serde(default)]
    pub data: Vec<TrainEntry>,
}

/// One element of the schedule result set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainEntry {
    /// The actual schedule record.
    #[serde(rename = "queryLeftNewDTO")]
    pub query_left_new_dto: LeftTicketDto,
}

/// A single train's schedule record.
///
/// Availability cells hold a seat count ("3"), "有" (plenty), "无" (sold
/// out), or are empty when the class is not offered on this train.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeftTicketDto {
    /// Internal train id, used by the price endpoint.
    #[serde(default)]
    pub train_no: String,

    /// Public train code (e.g. "G6").
    #[serde(default)]
    pub station_train_code: String,

    /// Departure time "HH:MM".
    #[serde(default)]
    pub start_time: String,

    /// Arrival time "HH:MM".
    #[serde(default)]
    pub arrive_time: String,

    /// Journey duration "HH:MM".
    #[serde(default)]
    pub lishi: String,

    /// "Y" when the train can currently be booked.
    #[serde(rename = "canWebBuy", default)]
    pub can_web_buy: String,

    /// Stop sequence number of the origin within this train.
    #[serde(default)]
    pub from_station_no: String,

    /// Stop sequence number of the destination within this train.
    #[serde(default)]
    pub to_station_no: String,

    /// Seat-type code string forwarded to the price endpoint.
    #[serde(default)]
    pub seat_types: String,

    /// 商务/特等 availability.
    #[serde(default)]
    pub swz_num: String,

    /// 一等 availability.
    #[serde(default)]
    pub zy_num: String,

    /// 二等 availability.
    #[serde(default)]
    pub ze_num: String,

    /// 软卧 availability.
    #[serde(default)]
    pub rw_num: String,

    /// 硬卧 availability.
    #[serde(default)]
    pub yw_num: String,

    /// 软座 availability.
    #[serde(default)]
    pub rz_num: String,

    /// 硬座 availability.
    #[serde(default)]
    pub yz_num: String,

    /// 无座 availability.
    #[serde(default)]
    pub wz_num: String,
}

/// Envelope of the price query endpoint.
///
/// `data` maps two-letter fare codes to price strings (e.g. `"O":
/// "¥553.0"`), mixed with unrelated bookkeeping keys the upstream puts
/// in the same object. Non-string values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceResponse {
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

impl PriceResponse {
    /// The fare strings, keyed by fare code.
    pub fn fares(&self) -> HashMap<&str, &str> {
        self.data
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key.as_str(), s)))
            .collect()
    }
}
