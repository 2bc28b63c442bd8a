//! Conversion from upstream DTOs to domain rows.
//!
//! The transformation of raw schedule records into named-field
//! [`TrainListing`] rows happens here, exactly once, so the rest of the
//! pipeline never touches upstream field names or ordering.

use tracing::warn;

use crate::domain::{SeatClass, SeatMap, TrainListing};

use super::types::LeftTicketDto;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A required field was absent or empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a schedule result set, skipping records that fail.
///
/// `from_name` and `to_name` are the display names from the resolved
/// query; the upstream record itself only carries telecodes.
pub fn convert_entries(
    records: &[LeftTicketDto],
    from_name: &str,
    to_name: &str,
) -> Vec<TrainListing> {
    records
        .iter()
        .filter_map(|dto| match convert_entry(dto, from_name, to_name) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(code = %dto.station_train_code, error = %e, "skipping unconvertible record");
                None
            }
        })
        .collect()
}

/// Convert a single schedule record into a row.
pub fn convert_entry(
    dto: &LeftTicketDto,
    from_name: &str,
    to_name: &str,
) -> Result<TrainListing, ConversionError> {
    require(&dto.train_no, "train_no")?;
    require(&dto.station_train_code, "station_train_code")?;
    require(&dto.start_time, "start_time")?;
    require(&dto.arrive_time, "arrive_time")?;
    require(&dto.lishi, "lishi")?;

    let mut availability = SeatMap::default();
    availability.set(SeatClass::Business, dto.swz_num.clone());
    availability.set(SeatClass::FirstClass, dto.zy_num.clone());
    availability.set(SeatClass::SecondClass, dto.ze_num.clone());
    availability.set(SeatClass::SoftSleeper, dto.rw_num.clone());
    availability.set(SeatClass::HardSleeper, dto.yw_num.clone());
    availability.set(SeatClass::SoftSeat, dto.rz_num.clone());
    availability.set(SeatClass::HardSeat, dto.yz_num.clone());
    availability.set(SeatClass::NoSeat, dto.wz_num.clone());

    Ok(TrainListing {
        train_no: dto.train_no.clone(),
        code: dto.station_train_code.clone(),
        from_station: from_name.to_string(),
        to_station: to_name.to_string(),
        departure: dto.start_time.clone(),
        arrival: dto.arrive_time.clone(),
        duration: dto.lishi.clone(),
        bookable: dto.can_web_buy == "Y",
        from_station_no: dto.from_station_no.clone(),
        to_station_no: dto.to_station_no.clone(),
        seat_types: dto.seat_types.clone(),
        availability,
        prices: SeatMap::default(),
    })
}

fn require(value: &str, field: &'static str) -> Result<(), ConversionError> {
    if value.is_empty() {
        return Err(ConversionError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_dto() -> LeftTicketDto {
        LeftTicketDto {
            train_no: "5l0000G10L".into(),
            station_train_code: "G6".into(),
            start_time: "09:00".into(),
            arrive_time: "14:28".into(),
            lishi: "05:28".into(),
            can_web_buy: "Y".into(),
            from_station_no: "01".into(),
            to_station_no: "10".into(),
            seat_types: "9OM".into(),
            swz_num: "sw".into(),
            zy_num: "zy".into(),
            ze_num: "ze".into(),
            rw_num: "rw".into(),
            yw_num: "yw".into(),
            rz_num: "rz".into(),
            yz_num: "yz".into(),
            wz_num: "wz".into(),
        }
    }

    #[test]
    fn seat_columns_map_by_name_not_order() {
        // Each availability field carries a distinct marker, so a wrong
        // column assignment shows up immediately.
        let row = convert_entry(&full_dto(), "北京", "上海").unwrap();

        assert_eq!(row.availability.get(SeatClass::Business), "sw");
        assert_eq!(row.availability.get(SeatClass::FirstClass), "zy");
        assert_eq!(row.availability.get(SeatClass::SecondClass), "ze");
        assert_eq!(row.availability.get(SeatClass::SoftSleeper), "rw");
        assert_eq!(row.availability.get(SeatClass::HardSleeper), "yw");
        assert_eq!(row.availability.get(SeatClass::SoftSeat), "rz");
        assert_eq!(row.availability.get(SeatClass::HardSeat), "yz");
        assert_eq!(row.availability.get(SeatClass::NoSeat), "wz");
    }

    #[test]
    fn scalar_fields_carry_over() {
        let row = convert_entry(&full_dto(), "北京", "上海").unwrap();

        assert_eq!(row.train_no, "5l0000G10L");
        assert_eq!(row.code, "G6");
        assert_eq!(row.from_station, "北京");
        assert_eq!(row.to_station, "上海");
        assert_eq!(row.departure, "09:00");
        assert_eq!(row.arrival, "14:28");
        assert_eq!(row.duration, "05:28");
        assert!(row.bookable);
        assert_eq!(row.seat_types, "9OM");
    }

    #[test]
    fn non_y_flag_means_not_bookable() {
        for flag in ["N", "IS_TIME_NOT_BUY", ""] {
            let mut dto = full_dto();
            dto.can_web_buy = flag.into();
            let row = convert_entry(&dto, "北京", "上海").unwrap();
            assert!(!row.bookable, "flag: {flag:?}");
        }
    }

    #[test]
    fn no_price_lines_before_enrichment() {
        let row = convert_entry(&full_dto(), "北京", "上海").unwrap();
        for class in SeatClass::ALL {
            assert_eq!(row.prices.get(class), &None);
        }
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let mut dto = full_dto();
        dto.train_no = String::new();
        assert_eq!(
            convert_entry(&dto, "北京", "上海").unwrap_err(),
            ConversionError::MissingField("train_no")
        );

        let mut dto = full_dto();
        dto.lishi = String::new();
        assert_eq!(
            convert_entry(&dto, "北京", "上海").unwrap_err(),
            ConversionError::MissingField("lishi")
        );
    }

    #[test]
    fn bad_records_are_skipped_not_fatal() {
        let good = full_dto();
        let mut bad = full_dto();
        bad.station_train_code = String::new();

        let rows = convert_entries(&[good, bad], "北京", "上海");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "G6");
    }
}
