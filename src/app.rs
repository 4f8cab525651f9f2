use crate::config::CityFiles;
use crate::data::data_lector;
use crate::data::filters::{self, City, FilterCriteria, Month};
use crate::data::stats;
use crate::data::trip_struct::TripTable;
use crate::error::BikeshareError;
use crate::visual;
use chrono::Weekday;
use std::io::{BufRead, Write};
use std::time::Instant;

pub const PAGE_SIZE: usize = 5;

const CITY_PROMPT: &str = "Enter the city (chicago, new york city, washington): ";
const MONTH_PROMPT: &str = "Enter the month (january to june) or 'all': ";
const DAY_PROMPT: &str = "Enter the day of the week or 'all': ";
const RAW_DATA_PROMPT: &str = "\nWould you like to see 5 lines of raw data? Enter yes or no: ";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Estados de la sesión interactiva
pub enum ShellState {
    CollectFilters,
    LoadAndFilter(FilterCriteria),
    Report(TripTable),
    PageRawData(TripTable),
    AskRestart,
    Terminal,
}

/// Reintento de una pregunta: `Rejected` vuelve a `Asking`
enum PromptState<T> {
    Asking,
    Rejected,
    Accepted(T),
}

pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
    files: CityFiles,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, files: CityFiles) -> Self {
        Self {
            input,
            output,
            files,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, BikeshareError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Pregunta hasta que `parse` acepte la respuesta
    fn ask_until<T, F>(&mut self, prompt: &str, error: &str, parse: F) -> Result<T, BikeshareError>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut state = PromptState::Asking;
        loop {
            state = match state {
                PromptState::Asking => {
                    let answer = self.ask(prompt)?;
                    parse(&answer).map_or(PromptState::Rejected, PromptState::Accepted)
                }
                PromptState::Rejected => {
                    writeln!(self.output, "{}", error)?;
                    PromptState::Asking
                }
                PromptState::Accepted(value) => return Ok(value),
            };
        }
    }

    pub fn get_filters(&mut self) -> Result<FilterCriteria, BikeshareError> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city: City = self.ask_until(
            CITY_PROMPT,
            "Invalid input. Please enter a valid city.",
            City::parse,
        )?;
        let month: Option<Month> = self.ask_until(
            MONTH_PROMPT,
            "Invalid input. Please enter a valid month.",
            filters::parse_month,
        )?;
        let day: Option<Weekday> = self.ask_until(
            DAY_PROMPT,
            "Invalid input. Please enter a valid day.",
            filters::parse_day,
        )?;

        writeln!(self.output, "{}", visual::RULE)?;
        Ok(FilterCriteria { city, month, day })
    }

    pub fn load_data(&mut self, criteria: &FilterCriteria) -> Result<TripTable, BikeshareError> {
        let start_time = Instant::now();
        let table = data_lector::load_city(&self.files, criteria.city)?;
        let loaded = table.len();

        let table = filters::apply_filter(table, &criteria.to_filter());

        writeln!(
            self.output,
            "Loaded {} trips for {}, {} match ({}) in {:.2?}",
            loaded,
            criteria.city,
            table.len(),
            criteria,
            start_time.elapsed()
        )?;
        Ok(table)
    }

    fn section_end(&mut self, start_time: Instant) -> Result<(), BikeshareError> {
        writeln!(self.output, "\nThis took {:.2?}.", start_time.elapsed())?;
        writeln!(self.output, "{}", visual::RULE)?;
        Ok(())
    }

    /// Estadísticas en orden fijo: tiempos, estaciones, duración, usuarios
    pub fn report(&mut self, table: &TripTable) -> Result<(), BikeshareError> {
        writeln!(self.output, "\nCalculating The Most Frequent Times of Travel...\n")?;
        let start_time = Instant::now();
        visual::print_time_stats(&mut self.output, &stats::time_stats(table)?)?;
        self.section_end(start_time)?;

        writeln!(self.output, "\nCalculating The Most Popular Stations and Trip...\n")?;
        let start_time = Instant::now();
        visual::print_station_stats(&mut self.output, &stats::station_stats(table)?)?;
        self.section_end(start_time)?;

        writeln!(self.output, "\nCalculating Trip Duration...\n")?;
        let start_time = Instant::now();
        visual::print_duration_stats(&mut self.output, &stats::duration_stats(table)?)?;
        self.section_end(start_time)?;

        writeln!(self.output, "\nCalculating User Stats...\n")?;
        let start_time = Instant::now();
        visual::print_user_stats(&mut self.output, &stats::user_stats(table)?)?;
        self.section_end(start_time)
    }

    /// Muestra de a PAGE_SIZE filas mientras la respuesta sea "yes"
    pub fn display_raw_data(&mut self, table: &TripTable) -> Result<(), BikeshareError> {
        let mut cursor = 0;
        loop {
            let answer = self.ask(RAW_DATA_PROMPT)?;
            if !is_yes(&answer) {
                return Ok(());
            }

            let end = (cursor + PAGE_SIZE).min(table.len());
            let page = table.trips.get(cursor..end).unwrap_or(&[]);
            visual::print_raw_rows(&mut self.output, page)?;

            cursor += PAGE_SIZE;
            if cursor >= table.len() {
                writeln!(self.output, "No more raw data to display.")?;
                return Ok(());
            }
        }
    }

    fn step(&mut self, state: ShellState) -> Result<ShellState, BikeshareError> {
        let next = match state {
            ShellState::CollectFilters => ShellState::LoadAndFilter(self.get_filters()?),
            ShellState::LoadAndFilter(criteria) => {
                let table = self.load_data(&criteria)?;
                if table.is_empty() {
                    writeln!(self.output, "\nNo trips match the selected filters.")?;
                    writeln!(self.output, "{}", visual::RULE)?;
                    ShellState::AskRestart
                } else {
                    ShellState::Report(table)
                }
            }
            ShellState::Report(table) => {
                self.report(&table)?;
                ShellState::PageRawData(table)
            }
            ShellState::PageRawData(table) => {
                self.display_raw_data(&table)?;
                ShellState::AskRestart
            }
            ShellState::AskRestart => {
                if is_yes(&self.ask(RESTART_PROMPT)?) {
                    ShellState::CollectFilters
                } else {
                    ShellState::Terminal
                }
            }
            ShellState::Terminal => ShellState::Terminal,
        };
        Ok(next)
    }

    pub fn run(&mut self) -> Result<(), BikeshareError> {
        let mut state = ShellState::CollectFilters;
        while !matches!(state, ShellState::Terminal) {
            state = self.step(state)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
