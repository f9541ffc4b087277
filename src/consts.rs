pub const DEFAULT_LOG_FILTERS: &[&str] = &[
    #[cfg(not(debug_assertions))]
    "mio=info",
    "hyper_util=info",
    "reqwest=info",
    "rustls=info",
    "hickory_resolver=info",
    "hickory_proto=info",
];

pub const DEFAULT_API_URL: &str = "https://api.hh.ru/";
pub const DEFAULT_USER_AGENT: &str = concat!("hh-vacancy-finder/", env!("CARGO_PKG_VERSION"));

/// Moscow, both as a search area and as a metro city.
pub const DEFAULT_AREA_ID: u32 = 1;
pub const DEFAULT_METRO_CITY_ID: u32 = 1;

pub const TITLE_MAX_CHARS: usize = 50;

pub const HEADER_TITLE: &str = "Должность";
pub const HEADER_EMPLOYER: &str = "Компания";
pub const HEADER_DATE: &str = "Дата";
pub const HEADER_SALARY: &str = "Оклад";
pub const HEADER_LINK: &str = "Ссылка";

pub const LOADING_PLACEHOLDER: &str = "Загрузка...";
pub const SALARY_PLACEHOLDER: &str = "—";
pub const MAP_COUNTER_LABEL: &str = "Вакансий на карте";
