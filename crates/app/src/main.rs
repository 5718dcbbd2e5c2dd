use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, QuestionBank, QuestionPool};
use surf_core::model::{GameSettings, GameSettingsDraft};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    question_bank: Arc<dyn QuestionBank>,
    settings: GameSettings,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<dyn QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    fn settings(&self) -> GameSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::default()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    questions_file: Option<PathBuf>,
    count: Option<u32>,
    seed: Option<u64>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <file.json>] [--count <n>] [--seed <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in surf question bank, 15 questions per session, random order");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SURF_QUESTIONS_FILE, SURF_QUESTION_COUNT, SURF_SEED");
    eprintln!("  RUST_LOG (e.g. RUST_LOG=services=debug)");
}

fn parse_count(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidCount { raw })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidSeed { raw })
}

impl Args {
    /// Environment values first; flags override them.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            questions_file: env("SURF_QUESTIONS_FILE")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            count: env("SURF_QUESTION_COUNT").map(parse_count).transpose()?,
            seed: env("SURF_SEED").map(parse_seed).transpose()?,
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    parsed.questions_file = Some(PathBuf::from(require_value(args, "--questions")?));
                }
                "--count" => parsed.count = Some(parse_count(require_value(args, "--count")?)?),
                "--seed" => parsed.seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn build_app(args: &Args) -> Result<DesktopApp, Box<dyn std::error::Error>> {
    let settings = GameSettingsDraft {
        questions_per_session: args.count,
        ..GameSettingsDraft::new()
    }
    .validate()?;

    let pool = match &args.questions_file {
        Some(path) => QuestionPool::from_json_path(path)?,
        None => QuestionPool::builtin()?,
    };
    if pool.is_empty() {
        log::warn!("question bank is empty; sessions cannot start");
    }

    let draw_count = usize::try_from(settings.questions_per_session())?;
    let mut pool = pool.with_draw_count(draw_count);
    if let Some(seed) = args.seed {
        log::info!("drawing questions with seed {seed}");
        pool = pool.with_seed(seed);
    }

    Ok(DesktopApp {
        question_bank: Arc::new(pool),
        settings,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let app: Arc<dyn UiApp> = Arc::new(build_app(&args)?);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Equation Surf")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
