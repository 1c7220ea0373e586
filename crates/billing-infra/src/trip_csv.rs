//! CSV loader for trip sheets
//!
//! Columns are matched by header label, so column order in the file does
//! not matter. `Total Cost` is ignored when present since it is derived.

use std::path::Path;

use billing_domain::model::TripForm;
use billing_types::{Error, Result, TripType};
use tracing::debug;

/// Header accepted in place of `Rate Per Tonne`
const RATE_HEADER_ALIAS: &str = "Rate Pre Tone";

/// A form filled from one CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedTrip {
    /// Line in the file (header is line 1)
    pub line: usize,
    pub form: TripForm,
}

/// Column positions resolved from the header row
struct ColumnMap {
    date: usize,
    trip_type: usize,
    truck_no: usize,
    driver: usize,
    from: usize,
    to: usize,
    product: usize,
    weight_kg: usize,
    rate_per_tonne: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |label: &str, alias: Option<&str>| -> Result<usize> {
            headers
                .iter()
                .position(|h| {
                    h.eq_ignore_ascii_case(label) || alias.is_some_and(|a| h.eq_ignore_ascii_case(a))
                })
                .ok_or_else(|| Error::Import {
                    line: 1,
                    reason: format!("missing required column {:?}", label),
                })
        };

        Ok(Self {
            date: find("Date", None)?,
            trip_type: find("Trip Type", None)?,
            truck_no: find("Truck No", None)?,
            driver: find("Driver", None)?,
            from: find("From", None)?,
            to: find("To", None)?,
            product: find("Product", None)?,
            weight_kg: find("Weight (Kg)", None)?,
            rate_per_tonne: find("Rate Per Tonne", Some(RATE_HEADER_ALIAS))?,
        })
    }
}

/// Load trip forms from a CSV file with a header row.
///
/// Weight and rate are kept as text; they are validated when each form is
/// submitted. An unknown trip type fails the whole load.
pub fn load_trip_forms<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedTrip>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut trips = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx + 2);

        let form = parse_record(&record, &columns, line)?;
        trips.push(ImportedTrip { line, form });
    }

    debug!(rows = trips.len(), path = %path.as_ref().display(), "trip sheet loaded");
    Ok(trips)
}

fn parse_record(record: &csv::StringRecord, columns: &ColumnMap, line: usize) -> Result<TripForm> {
    let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

    let trip_type_text = field(columns.trip_type);
    let trip_type = if trip_type_text.is_empty() {
        TripType::default()
    } else {
        trip_type_text
            .parse::<TripType>()
            .map_err(|reason| Error::Import { line, reason })?
    };

    Ok(TripForm {
        date: field(columns.date),
        trip_type,
        truck_no: field(columns.truck_no),
        driver: field(columns.driver),
        from: field(columns.from),
        to: field(columns.to),
        product: field(columns.product),
        weight_kg: field(columns.weight_kg),
        rate_per_tonne: field(columns.rate_per_tonne),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_by_header_label() {
        let file = write_csv(
            "Driver,Date,Trip Type,Truck No,From,To,Product,Weight (Kg),Rate Per Tonne\n\
             Ravi,01-02-2024,Return,KA01 1111,Mysore,Bangalore,Rice,15000,2500\n",
        );
        let trips = load_trip_forms(file.path()).unwrap();
        assert_eq!(trips.len(), 1);
        let form = &trips[0].form;
        assert_eq!(trips[0].line, 2);
        assert_eq!(form.driver, "Ravi");
        assert_eq!(form.trip_type, TripType::Return);
        assert_eq!(form.weight_kg, "15000");
        assert_eq!(form.rate_per_tonne, "2500");
    }

    #[test]
    fn test_accepts_legacy_rate_header_and_ignores_total() {
        let file = write_csv(
            "Date,Trip Type,Truck No,Driver,From,To,Product,Weight (Kg),Rate Pre Tone,Total Cost\n\
             01-02-2024,Go,T1,D1,A,B,Sand,10000.0,2000.0,999\n",
        );
        let trips = load_trip_forms(file.path()).unwrap();
        assert_eq!(trips[0].form.rate_per_tonne, "2000.0");
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv("Date,Trip Type\n01-01-2024,Go\n");
        let err = load_trip_forms(file.path()).unwrap_err();
        assert!(matches!(err, Error::Import { line: 1, .. }));
    }

    #[test]
    fn test_unknown_trip_type() {
        let file = write_csv(
            "Date,Trip Type,Truck No,Driver,From,To,Product,Weight (Kg),Rate Per Tonne\n\
             01-02-2024,Go,T1,D1,A,B,Sand,10000,2000\n\
             02-02-2024,Roundtrip,T1,D1,B,A,Sand,10000,2000\n",
        );
        let err = load_trip_forms(file.path()).unwrap_err();
        assert!(matches!(err, Error::Import { line: 3, .. }));
    }

    #[test]
    fn test_blank_trip_type_defaults_to_go() {
        let file = write_csv(
            "Date,Trip Type,Truck No,Driver,From,To,Product,Weight (Kg),Rate Per Tonne\n\
             01-02-2024,,T1,D1,A,B,Sand,abc,2000\n",
        );
        let trips = load_trip_forms(file.path()).unwrap();
        assert_eq!(trips[0].form.trip_type, TripType::Go);
        // Weight is validated later, at submission
        assert_eq!(trips[0].form.weight_kg, "abc");
    }
}
