use crate::data::filters::City;
use std::path::{Path, PathBuf};

/// Archivo de datos de cada ciudad
#[derive(Debug, Clone)]
pub struct CityFiles {
    pub chicago: PathBuf,
    pub new_york_city: PathBuf,
    pub washington: PathBuf,
}

impl CityFiles {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            chicago: dir.join("chicago.csv"),
            new_york_city: dir.join("new_york_city.csv"),
            washington: dir.join("washington.csv"),
        }
    }

    pub fn path(&self, city: City) -> &Path {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: PathBuf::from("chicago.csv"),
            new_york_city: PathBuf::from("new_york_city.csv"),
            washington: PathBuf::from("washington.csv"),
        }
    }
}
