use clap::{Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::consts::{DEFAULT_API_URL, DEFAULT_AREA_ID, DEFAULT_METRO_CITY_ID, DEFAULT_USER_AGENT};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Search hh.ru vacancies by title and metro station", long_about = None)]
pub struct Opts {
    /// Log level of application, refined by `LOG` directives
    #[arg(global = true, short, long, env = "LOG_LEVEL", default_value_t = LevelFilter::INFO)]
    pub log: LevelFilter,

    /// Base URL of the job service
    #[arg(global = true, short, long, env = "HH_API_URL", default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Region the search is limited to
    #[arg(global = true, short, long, env = "HH_AREA", default_value_t = DEFAULT_AREA_ID)]
    pub area: u32,

    /// City whose metro stations are offered
    #[arg(global = true, short, long, env = "HH_METRO_CITY", default_value_t = DEFAULT_METRO_CITY_ID)]
    pub metro_city: u32,

    #[arg(global = true, long, env = "HH_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Action {
    /// Load lookups, submit a search and render the results
    Search {
        /// Free-text vacancy title
        #[arg(short, long, default_value = "")]
        text: String,

        /// Metro station name; applied only on an exact match
        #[arg(long, default_value = "")]
        metro: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the autocomplete suggestions for a typed value
    Suggest {
        #[arg(value_enum)]
        list: SuggestList,

        #[arg(default_value = "")]
        value: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Results table followed by the map counter
    Table,
    /// Map markers as a FeatureCollection
    Map,
    /// One vacancy per line as JSON
    Jsonl,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestList {
    Specializations,
    Metro,
}
