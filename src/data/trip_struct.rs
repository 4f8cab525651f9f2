use super::filters::City;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Una fila del CSV de una ciudad.
///
/// Washington no trae `Gender` ni `Birth Year`; ahí quedan en `None`.
/// Las columnas obligatorias se revisan al leer el encabezado, `Option`
/// solo cubre celdas vacías.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Trip {
    pub row: usize,
    pub record: TripRecord,
    start: NaiveDateTime,
    month: u32,
    day_of_week: Weekday,
    hour: u32,
}

impl Trip {
    /// Los campos derivados salen siempre de `start`
    pub fn new(row: usize, record: TripRecord, start: NaiveDateTime) -> Self {
        Self {
            row,
            record,
            start,
            month: start.month(),
            day_of_week: start.weekday(),
            hour: start.hour(),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn route(&self) -> String {
        format!("{} to {}", self.record.start_station, self.record.end_station)
    }
}

#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
