use super::trip_struct::{Trip, TripTable};
use chrono::Weekday;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Recibe la respuesta tal cual la escribió el usuario
    pub fn parse(input: &str) -> Option<City> {
        let input = input.trim().to_lowercase();
        City::ALL.into_iter().find(|city| city.name() == input)
    }

    /// Solo chicago y new york city traen Gender / Birth Year
    pub fn has_demographics(self) -> bool {
        matches!(self, City::Chicago | City::NewYorkCity)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Meses disponibles en los datos (enero a junio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

impl Month {
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    /// Número de mes 1-based según su posición en MONTHS
    pub fn index(self) -> u32 {
        MONTHS
            .iter()
            .position(|m| *m == self)
            .map_or(0, |pos| pos as u32 + 1)
    }
}

pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// `None` significa "all"; `Some(None)` es una respuesta válida sin filtro
pub fn parse_month(input: &str) -> Option<Option<Month>> {
    let input = input.trim().to_lowercase();
    if input == "all" {
        return Some(None);
    }
    MONTHS.into_iter().find(|m| m.name() == input).map(Some)
}

pub fn parse_day(input: &str) -> Option<Option<Weekday>> {
    let input = input.trim().to_lowercase();
    if input == "all" {
        return Some(None);
    }
    DAYS.into_iter().find(|d| day_name(*d) == input).map(Some)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterCriteria {
    pub fn to_filter(&self) -> TripFilter {
        TripFilter::from_criteria(self.month, self.day)
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city: {}, month: {}, day: {}",
            self.city,
            self.month.map_or("all", Month::name),
            self.day.map_or("all", day_name)
        )
    }
}

pub enum TripFilter {
    Everything,
    Month(Month),
    Day(Weekday),
    And(Vec<TripFilter>),
}

impl TripFilter {
    pub fn from_criteria(month: Option<Month>, day: Option<Weekday>) -> TripFilter {
        let mut filters = Vec::new();

        if let Some(month) = month {
            filters.push(TripFilter::Month(month));
        }
        if let Some(day) = day {
            filters.push(TripFilter::Day(day));
        }

        match filters.len() {
            0 => TripFilter::Everything,
            1 => filters.remove(0),
            _ => TripFilter::And(filters),
        }
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            TripFilter::Everything => true,
            TripFilter::Month(month) => trip.month() == month.index(),
            TripFilter::Day(day) => trip.day_of_week() == *day,
            // Todos los filtros deben cumplirse (AND lógico)
            TripFilter::And(filters) => filters.iter().all(|filter| filter.matches(trip)),
        }
    }
}

/// Deja solo los viajes que cumplen el filtro, en el orden original
pub fn apply_filter(table: TripTable, filter: &TripFilter) -> TripTable {
    if let TripFilter::Everything = filter {
        return table;
    }

    let TripTable { city, trips } = table;
    let trips = trips.into_iter().filter(|trip| filter.matches(trip)).collect();
    TripTable { city, trips }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_parse_is_case_insensitive() {
        assert_eq!(City::parse("Chicago"), Some(City::Chicago));
        assert_eq!(City::parse("NEW YORK CITY"), Some(City::NewYorkCity));
        assert_eq!(City::parse(" washington \n"), Some(City::Washington));
        assert_eq!(City::parse("boston"), None);
        assert_eq!(City::parse("new york"), None);
    }

    #[test]
    fn demographics_by_city() {
        assert!(City::Chicago.has_demographics());
        assert!(City::NewYorkCity.has_demographics());
        assert!(!City::Washington.has_demographics());
    }

    #[test]
    fn month_index_is_one_based() {
        assert_eq!(Month::January.index(), 1);
        assert_eq!(Month::June.index(), 6);
    }

    #[test]
    fn month_and_day_accept_all() {
        assert_eq!(parse_month("ALL"), Some(None));
        assert_eq!(parse_month("March"), Some(Some(Month::March)));
        assert_eq!(parse_month("july"), None);
        assert_eq!(parse_day("all"), Some(None));
        assert_eq!(parse_day("Sunday"), Some(Some(Weekday::Sun)));
        assert_eq!(parse_day("sun"), None);
    }

    #[test]
    fn criteria_builds_minimal_filter() {
        assert!(matches!(
            TripFilter::from_criteria(None, None),
            TripFilter::Everything
        ));
        assert!(matches!(
            TripFilter::from_criteria(Some(Month::May), None),
            TripFilter::Month(Month::May)
        ));
        match TripFilter::from_criteria(Some(Month::May), Some(Weekday::Fri)) {
            TripFilter::And(filters) => assert_eq!(filters.len(), 2),
            _ => panic!("expected an AND filter"),
        }
    }

    #[test]
    fn criteria_display() {
        let criteria = FilterCriteria {
            city: City::NewYorkCity,
            month: Some(Month::February),
            day: None,
        };
        assert_eq!(
            criteria.to_string(),
            "city: new york city, month: february, day: all"
        );
    }
}
