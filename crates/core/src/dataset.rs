//! Point-of-interest CSV loading
//!
//! Reads a tabular export (one place per row), drops rows without usable
//! coordinates and parses operating hours once up front so searches never
//! re-parse them.

use crate::config::DatasetConfig;
use crate::error::{Error, Result, ResultExt};
use nearby_geo::Coordinate;
use nearby_hours::{HoursParser, OperatingHours};
use nearby_search::PointOfInterest;
use std::io::Read;
use std::path::Path;

/// Places read from a CSV file
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Rows with valid coordinates, in file order
    pub pois: Vec<PointOfInterest>,
    /// Rows dropped for missing or non-numeric coordinates
    pub skipped: usize,
}

impl Dataset {
    /// Number of places whose hours could be parsed
    pub fn with_known_hours(&self) -> usize {
        self.pois.iter().filter(|p| p.hours.is_known()).count()
    }
}

/// Loads a dataset from a UTF-8 CSV file
pub fn load(path: impl AsRef<Path>, config: &DatasetConfig, parser: &HoursParser) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let file = std::fs::File::open(path)?;
    read(file, config, parser).context(format!("Reading {}", path.display()))
}

/// Reads a dataset from any CSV source
pub fn read<R: Read>(source: R, config: &DatasetConfig, parser: &HoursParser) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let columns = Columns::locate(reader.headers()?, config)?;

    let mut dataset = Dataset::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        match columns.to_poi(&record, row, parser) {
            Some(poi) => dataset.pois.push(poi),
            None => dataset.skipped += 1,
        }
    }

    if dataset.skipped > 0 {
        tracing::warn!(
            skipped = dataset.skipped,
            "Dropped rows with missing or invalid coordinates"
        );
    }
    tracing::info!(
        loaded = dataset.pois.len(),
        known_hours = dataset.with_known_hours(),
        "Dataset loaded"
    );

    Ok(dataset)
}

/// Header positions of the configured columns
#[derive(Debug)]
struct Columns {
    name: usize,
    latitude: usize,
    longitude: usize,
    hours: Option<usize>,
    attributes: Vec<(String, usize)>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord, config: &DatasetConfig) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == column)
        };
        let require = |column: &str| find(column).ok_or_else(|| Error::missing_column(column));

        let hours = config.hours_column.as_deref().and_then(|column| {
            let index = find(column);
            if index.is_none() {
                tracing::warn!(column, "Hours column not found, all hours will be unknown");
            }
            index
        });

        let attributes = config
            .attribute_columns
            .iter()
            .filter_map(|column| match find(column) {
                Some(index) => Some((column.clone(), index)),
                None => {
                    tracing::warn!(column = %column, "Attribute column not found");
                    None
                }
            })
            .collect();

        Ok(Self {
            name: require(&config.name_column)?,
            latitude: require(&config.latitude_column)?,
            longitude: require(&config.longitude_column)?,
            hours,
            attributes,
        })
    }

    fn to_poi(
        &self,
        record: &csv::StringRecord,
        row: usize,
        parser: &HoursParser,
    ) -> Option<PointOfInterest> {
        let number = |index: usize| record.get(index).and_then(|v| v.parse::<f64>().ok());

        let location = match (number(self.latitude), number(self.longitude)) {
            (Some(lat), Some(lon)) => Coordinate::try_new(lat, lon).ok()?,
            _ => {
                tracing::debug!(row, "Row has no numeric coordinates");
                return None;
            }
        };

        let name = match record.get(self.name) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("row-{}", row + 1),
        };

        let hours = self
            .hours
            .and_then(|index| record.get(index))
            .map_or(OperatingHours::Unknown, |raw| parser.parse(raw));

        let mut poi = PointOfInterest::new(name, location).with_hours(hours);
        for (column, index) in &self.attributes {
            if let Some(value) = record.get(*index).filter(|v| !v.is_empty()) {
                poi = poi.with_attribute(column.clone(), value);
            }
        }

        Some(poi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use nearby_hours::TimeInterval;

    const PARKING_CSV: &str = "\
주차장명,주소,전화번호,위도,경도,운영시간
세종로 공영주차장,종로구 세종대로 189,02-2290-6566,37.5725,126.9760,24시간
시청앞 주차장,중구 태평로1가,,37.5660,126.9775,09:00~18:00
좌표없음 주차장,중구 을지로,02-000-0000,,,0900~1800
잘못된 좌표,중구,,north,east,
범위밖,중구,,123.0,126.9,
";

    fn read_default(text: &str) -> Result<Dataset> {
        read(text.as_bytes(), &DatasetConfig::default(), &HoursParser::default())
    }

    #[test]
    fn test_reads_valid_rows_and_skips_bad_coordinates() {
        let dataset = read_default(PARKING_CSV).unwrap();
        assert_eq!(dataset.pois.len(), 2);
        assert_eq!(dataset.skipped, 3);
        assert_eq!(dataset.pois[0].id, "세종로 공영주차장");
        assert_eq!(dataset.pois[1].location, Coordinate::new(37.5660, 126.9775));
    }

    #[test]
    fn test_hours_parsed_at_load_time() {
        let dataset = read_default(PARKING_CSV).unwrap();
        assert_eq!(dataset.pois[0].hours, OperatingHours::Known(TimeInterval::full_day()));
        assert!(dataset.pois[1].hours.is_known());
        assert_eq!(dataset.with_known_hours(), 2);
    }

    #[test]
    fn test_attributes_passed_through_and_empty_values_dropped() {
        let dataset = read_default(PARKING_CSV).unwrap();
        let first = &dataset.pois[0];
        assert_eq!(first.attribute("주소"), Some("종로구 세종대로 189"));
        assert_eq!(first.attribute("전화번호"), Some("02-2290-6566"));
        assert_eq!(dataset.pois[1].attribute("전화번호"), None);
    }

    #[test]
    fn test_missing_hours_column_means_unknown() {
        let csv = "주차장명,위도,경도\nA,37.5,127.0\n";
        let dataset = read_default(csv).unwrap();
        assert_eq!(dataset.pois[0].hours, OperatingHours::Unknown);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "주차장명,lat,lon\nA,37.5,127.0\n";
        let err = read_default(csv).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingColumn);
        assert!(err.message.contains("위도"));
    }

    #[test]
    fn test_byte_order_mark_in_header() {
        let csv = "\u{feff}주차장명,위도,경도\nA,37.5,127.0\n";
        let dataset = read_default(csv).unwrap();
        assert_eq!(dataset.pois.len(), 1);
    }

    #[test]
    fn test_blank_name_gets_row_label() {
        let csv = "주차장명,위도,경도\n,37.5,127.0\n";
        let dataset = read_default(csv).unwrap();
        assert_eq!(dataset.pois[0].id, "row-1");
    }

    #[test]
    fn test_custom_columns() {
        let config = DatasetConfig {
            name_column: "name".into(),
            latitude_column: "lat".into(),
            longitude_column: "lng".into(),
            hours_column: Some("open".into()),
            attribute_columns: vec!["address".into()],
        };
        let csv = "name,lat,lng,open,address\nPlaza Restroom,37.5663,126.9779,06:00-23:00,Jung-gu\n";
        let dataset = read(csv.as_bytes(), &config, &HoursParser::default()).unwrap();
        assert_eq!(dataset.pois[0].id, "Plaza Restroom");
        assert!(dataset.pois[0].hours.is_known());
        assert_eq!(dataset.pois[0].attribute("address"), Some("Jung-gu"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(
            "/no/such/parking.csv",
            &DatasetConfig::default(),
            &HoursParser::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parking.csv");
        std::fs::write(&path, PARKING_CSV).unwrap();

        let dataset = load(&path, &DatasetConfig::default(), &HoursParser::default()).unwrap();
        assert_eq!(dataset.pois.len(), 2);
    }
}
