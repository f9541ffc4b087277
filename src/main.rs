use std::io::Write;

use clap::Parser;
use serde_jsonlines::JsonLinesWriter;
use tracing::debug;
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter,
};

use hh_vacancy_finder::consts::DEFAULT_LOG_FILTERS;
use hh_vacancy_finder::models::LookupOption;
use hh_vacancy_finder::opts::{Action, Opts, OutputFormat, SuggestList};
use hh_vacancy_finder::render::{MarkerCollection, VacanciesTable};
use hh_vacancy_finder::{App, HhClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let mut filter = EnvFilter::builder()
        .with_default_directive(opts.log.into())
        .with_env_var("LOG")
        .from_env_lossy();

    for rule in DEFAULT_LOG_FILTERS {
        filter = filter.add_directive(rule.parse().expect("DEFAULT_LOG_FILTERS misconfiguration"));
    }
    registry().with(filter).with(layer().with_writer(std::io::stderr)).init();

    debug!("{opts:#?}");

    let client = HhClient::new(&opts.url, &opts.user_agent)?;
    let mut app = App::new(client, opts.area, opts.metro_city);

    match opts.action {
        Action::Search { text, metro, format } => {
            app.init().await;
            app.set_query(text);
            app.set_metro(metro);
            app.submit().await;
            print_results(&app, format)?;
        }
        Action::Suggest { list, value } => {
            let lines: Vec<String> = match list {
                SuggestList::Specializations => {
                    app.load_specializations().await;
                    app.set_query(value);
                    app.state().specialization_suggestions().into_iter().map(suggestion_line).collect()
                }
                SuggestList::Metro => {
                    app.load_metro().await;
                    app.set_metro(value);
                    app.state().metro_suggestions().into_iter().map(suggestion_line).collect()
                }
            };
            let mut stdout = std::io::stdout().lock();
            for line in lines {
                writeln!(stdout, "{line}")?;
            }
        }
    }

    Ok(())
}

fn suggestion_line(option: &impl LookupOption) -> String {
    format!("{} [{}]", option.label(), option.group_name())
}

fn print_results(app: &App, format: OutputFormat) -> anyhow::Result<()> {
    let state = app.state();
    let mut stdout = std::io::stdout().lock();

    match format {
        OutputFormat::Table => {
            if let Some(table) = VacanciesTable::new(&state.vacancies, state.is_loading).render() {
                write!(stdout, "{table}")?;
            }
            writeln!(stdout, "{}", MarkerCollection::from_vacancies(&state.vacancies).counter())?;
        }
        OutputFormat::Map => {
            let markers = MarkerCollection::from_vacancies(&state.vacancies);
            serde_json::to_writer_pretty(&mut stdout, &markers.to_feature_collection())?;
            writeln!(stdout)?;
        }
        OutputFormat::Jsonl => {
            let mut writer = JsonLinesWriter::new(stdout);
            writer.write_all(&state.vacancies)?;
            writer.flush()?;
        }
    }

    Ok(())
}
