// SPDX-License-Identifier: MPL-2.0
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use vitrine::app::{markup, paths, App, Flags, Message};
use vitrine::domain::ThemeMode;
use vitrine::integrations::Bindings;

const HELP: &str = "\
vitrine: replay interactions against the bundled showcase page

USAGE:
  vitrine [OPTIONS]

OPTIONS:
  -h, --help                    Show this help message
      --lang <LOCALE>           Interface language (e.g. en-US, tr)
      --theme <MODE>            Fallback theme: light, dark or system
      --config-dir <PATH>       Directory holding settings.toml
      --data-dir <PATH>         Directory holding stored preferences
      --scroll <OFFSETS>        Comma separated scroll offsets to replay
      --submit <NAME,EMAIL,MSG> Fill in and submit the contact form
      --realtime <MS>           Drive the page clock in real time for MS milliseconds

ENVIRONMENT:
  RUST_LOG              Log filter (default: info)
  VITRINE_CONFIG_DIR    Override config directory
  VITRINE_DATA_DIR      Override data directory
";

/// Time given to timers after the scripted interactions.
const SETTLE: Duration = Duration::from_secs(6);
const TICK: Duration = Duration::from_millis(16);

struct Script {
    flags: Flags,
    scroll: Vec<f64>,
    submit: Option<[String; 3]>,
    realtime: Option<Duration>,
}

fn parse_args() -> Result<Script, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        theme: args.opt_value_from_fn("--theme", ThemeMode::from_str)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };
    let scroll = args
        .opt_value_from_fn("--scroll", parse_offsets)?
        .unwrap_or_default();
    let submit = args.opt_value_from_fn("--submit", parse_submission)?;
    let realtime = args
        .opt_value_from_str::<_, u64>("--realtime")?
        .map(Duration::from_millis);

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: ignoring extra arguments: {remaining:?}");
    }

    Ok(Script {
        flags,
        scroll,
        submit,
        realtime,
    })
}

fn parse_offsets(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|error| format!("invalid scroll offset '{part}': {error}"))
        })
        .collect()
}

fn parse_submission(raw: &str) -> Result<[String; 3], String> {
    let mut parts = raw.splitn(3, ',').map(str::to_string);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(email), Some(message)) => Ok([name, email, message]),
        _ => Err("expected NAME,EMAIL,MESSAGE".to_string()),
    }
}

fn fill_form(app: &mut App, [name, email, message]: &[String; 3]) {
    for (control, value) in [("name", name), ("email", email), ("message", message)] {
        let selector = format!("#contact-form [name=\"{control}\"]");
        if let Some(input) = app.document().query_selector(&selector) {
            app.document_mut().set_value(input, value);
        }
    }
}

fn replay(app: &mut App, script: &Script) {
    app.update(Message::Load);
    for offset in &script.scroll {
        app.update(Message::Scroll(*offset));
        app.advance(TICK);
    }
    if let Some(fields) = &script.submit {
        fill_form(app, fields);
        app.update(Message::Submit);
    }
}

async fn run_realtime(app: &mut App, total: Duration) {
    let mut interval = tokio::time::interval(TICK);
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        interval.tick().await;
        app.advance(TICK);
        elapsed += TICK;
    }
}

fn print_summary(app: &App) {
    for line in app.summary() {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let script = match parse_args() {
        Ok(script) => script,
        Err(error) => {
            eprintln!("Error: {error}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(script.flags.data_dir.clone(), script.flags.config_dir.clone());

    let mut app = App::new(script.flags.clone(), markup::showcase_page(), Bindings::tracing());
    replay(&mut app, &script);

    match script.realtime {
        Some(total) => run_realtime(&mut app, total).await,
        None => {
            app.advance(SETTLE);
        }
    }

    print_summary(&app);
    app.teardown();
}
