pub mod visual;

pub use visual::{
    format_duration, print_duration_stats, print_raw_rows, print_station_stats, print_time_stats,
    print_user_stats, RULE,
};
