use super::trip_struct::TripTable;
use crate::error::BikeshareError;
use chrono::Weekday;
use std::collections::HashMap;
use std::hash::Hash;

/// Cuenta ocurrencias, de mayor a menor. Empates en orden de aparición.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match positions.get(&value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by es estable: se conserva el orden de aparición en los empates
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Valor más frecuente, `None` si no hay valores
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub day_of_week: Weekday,
    pub hour: u32,
}

pub fn time_stats(table: &TripTable) -> Result<TimeStats, BikeshareError> {
    let trips = &table.trips;
    Ok(TimeStats {
        month: mode(trips.iter().map(|t| t.month())).ok_or(BikeshareError::EmptySelection)?,
        day_of_week: mode(trips.iter().map(|t| t.day_of_week()))
            .ok_or(BikeshareError::EmptySelection)?,
        hour: mode(trips.iter().map(|t| t.hour())).ok_or(BikeshareError::EmptySelection)?,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    pub route: String,
}

pub fn station_stats(table: &TripTable) -> Result<StationStats, BikeshareError> {
    let trips = &table.trips;
    let start_station = mode(trips.iter().map(|t| t.record.start_station.as_str()))
        .ok_or(BikeshareError::EmptySelection)?;
    let end_station = mode(trips.iter().map(|t| t.record.end_station.as_str()))
        .ok_or(BikeshareError::EmptySelection)?;
    let route = mode(trips.iter().map(|t| t.route())).ok_or(BikeshareError::EmptySelection)?;

    Ok(StationStats {
        start_station: start_station.to_string(),
        end_station: end_station.to_string(),
        route,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub count: usize,
    pub total: f64,
    pub mean: f64,
}

pub fn duration_stats(table: &TripTable) -> Result<DurationStats, BikeshareError> {
    if table.is_empty() {
        return Err(BikeshareError::EmptySelection);
    }

    let count = table.len();
    let total: f64 = table.trips.iter().map(|t| t.record.trip_duration).sum();

    Ok(DurationStats {
        count,
        total,
        mean: total / count as f64,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub gender_counts: Vec<(String, usize)>,
    /// `None` cuando ninguna fila trae Birth Year
    pub birth_year: Option<BirthYearStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_type_counts: Vec<(String, usize)>,
    /// Solo para ciudades con columnas demográficas
    pub demographics: Option<Demographics>,
}

pub fn birth_year_stats<I>(years: I) -> Option<BirthYearStats>
where
    I: IntoIterator<Item = i32>,
{
    let years: Vec<i32> = years.into_iter().collect();
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

pub fn user_stats(table: &TripTable) -> Result<UserStats, BikeshareError> {
    if table.is_empty() {
        return Err(BikeshareError::EmptySelection);
    }

    let trips = &table.trips;
    let user_type_counts = value_counts(trips.iter().filter_map(|t| t.record.user_type.clone()));

    let demographics = if table.city.has_demographics() {
        Some(Demographics {
            gender_counts: value_counts(trips.iter().filter_map(|t| t.record.gender.clone())),
            birth_year: birth_year_stats(
                trips
                    .iter()
                    .filter_map(|t| t.record.birth_year)
                    .map(|year| year as i32),
            ),
        })
    } else {
        None
    };

    Ok(UserStats {
        user_type_counts,
        demographics,
    })
}
