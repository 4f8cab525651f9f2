//! Utilidades compartidas por los tests de integración

#![allow(dead_code)]

use bikeshare::data::data_lector;
use bikeshare::{BikeshareError, City, CityFiles, Shell, TripTable};
use std::io::Cursor;

/// CSVs de prueba en tests/test_data
pub fn fixtures() -> CityFiles {
    CityFiles::in_dir("tests/test_data")
}

pub fn load(city: City) -> TripTable {
    data_lector::load_city(&fixtures(), city)
        .unwrap_or_else(|e| panic!("Failed to load fixture for {}: {}", city, e))
}

/// Corre una sesión completa con respuestas ya escritas
pub fn run_session(input: &str) -> (Result<(), BikeshareError>, String) {
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), fixtures());
    let result = shell.run();
    let output = String::from_utf8(shell.into_output()).expect("output should be UTF-8");
    (result, output)
}
