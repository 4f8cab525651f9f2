use super::filters::City;
use super::trip_struct::{Trip, TripRecord, TripTable};
use crate::config::CityFiles;
use crate::error::BikeshareError;
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufReader, Read};

const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_start_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let value = value.trim();
    // Si ningún formato sirve devolvemos el error del formato principal
    let first_err = match NaiveDateTime::parse_from_str(value, START_TIME_FORMATS[0]) {
        Ok(start) => return Ok(start),
        Err(e) => e,
    };
    START_TIME_FORMATS[1..]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or(first_err)
}

/// Columnas que serde no exige por ser `Option`, pero que la ciudad debe traer
fn required_columns(city: City) -> &'static [&'static str] {
    if city.has_demographics() {
        &["User Type", "Gender", "Birth Year"]
    } else {
        &["User Type"]
    }
}

/// Lee todos los viajes de un CSV ya abierto
pub fn read_trips<R: Read>(reader: R, city: City) -> Result<TripTable, BikeshareError> {
    let buf_reader = BufReader::with_capacity(64 * 1024, reader); // Buffer de 64KB
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(buf_reader);

    let headers = csv_reader.headers()?.clone();
    if let Some(column) = required_columns(city)
        .iter()
        .find(|column| !headers.iter().any(|h| h.trim() == **column))
    {
        return Err(BikeshareError::MissingColumn {
            path: String::new(),
            column: column.to_string(),
        });
    }

    let mut trips = Vec::new();
    for (row, result) in csv_reader.deserialize::<TripRecord>().enumerate() {
        let record = result?;
        let start = parse_start_time(&record.start_time).map_err(|source| {
            BikeshareError::Timestamp {
                row,
                value: record.start_time.clone(),
                source,
            }
        })?;
        trips.push(Trip::new(row, record, start));
    }

    Ok(TripTable { city, trips })
}

/// Carga el archivo configurado para la ciudad
pub fn load_city(files: &CityFiles, city: City) -> Result<TripTable, BikeshareError> {
    let path = files.path(city);
    let display = path.display().to_string();

    let file = File::open(path).map_err(|source| BikeshareError::Io {
        path: display.clone(),
        source,
    })?;

    read_trips(file, city).map_err(|e| match e {
        BikeshareError::Csv { source, .. } => BikeshareError::Csv {
            path: display,
            source,
        },
        BikeshareError::MissingColumn { column, .. } => BikeshareError::MissingColumn {
            path: display,
            column,
        },
        other => other,
    })
}
