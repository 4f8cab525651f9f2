//! Errores del explorador de bikeshare

use std::fmt;

#[derive(Debug)]
pub enum BikeshareError {
    /// No se pudo abrir el archivo de la ciudad
    Io {
        path: String,
        source: std::io::Error,
    },
    /// CSV mal formado o columna que serde exige ausente
    Csv {
        path: String,
        source: csv::Error,
    },
    /// Falta una columna que la ciudad debe traer
    MissingColumn {
        path: String,
        column: String,
    },
    /// `Start Time` que no se pudo interpretar
    Timestamp {
        row: usize,
        value: String,
        source: chrono::ParseError,
    },
    Json(serde_json::Error),
    /// Los filtros no dejaron ningún viaje
    EmptySelection,
    /// Se cerró la entrada mientras se esperaba una respuesta
    InputClosed,
}

impl fmt::Display for BikeshareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BikeshareError::Io { path, source } if path.is_empty() => {
                write!(f, "I/O error: {}", source)
            }
            BikeshareError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            BikeshareError::Csv { path, source } => {
                write!(f, "Invalid trip data in '{}': {}", path, source)
            }
            BikeshareError::MissingColumn { path, column } if path.is_empty() => {
                write!(f, "Missing required column '{}'", column)
            }
            BikeshareError::MissingColumn { path, column } => {
                write!(f, "Missing required column '{}' in '{}'", column, path)
            }
            BikeshareError::Timestamp { row, value, source } => {
                write!(f, "Row {}: invalid start time '{}': {}", row, value, source)
            }
            BikeshareError::Json(source) => write!(f, "Failed to render row: {}", source),
            BikeshareError::EmptySelection => write!(f, "No trips match the selected filters"),
            BikeshareError::InputClosed => write!(f, "Input closed before an answer was given"),
        }
    }
}

impl std::error::Error for BikeshareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BikeshareError::Io { source, .. } => Some(source),
            BikeshareError::Csv { source, .. } => Some(source),
            BikeshareError::Timestamp { source, .. } => Some(source),
            BikeshareError::Json(source) => Some(source),
            BikeshareError::MissingColumn { .. }
            | BikeshareError::EmptySelection
            | BikeshareError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for BikeshareError {
    fn from(err: std::io::Error) -> Self {
        BikeshareError::Io {
            path: String::new(),
            source: err,
        }
    }
}

impl From<csv::Error> for BikeshareError {
    fn from(err: csv::Error) -> Self {
        BikeshareError::Csv {
            path: String::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for BikeshareError {
    fn from(err: serde_json::Error) -> Self {
        BikeshareError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_error_keeps_path_and_source() {
        let err = BikeshareError::Io {
            path: "chicago.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("chicago.csv"));
        assert!(err.source().is_some());
    }

    #[test]
    fn empty_selection_has_no_source() {
        assert!(BikeshareError::EmptySelection.source().is_none());
    }
}
