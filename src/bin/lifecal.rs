use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{Datelike, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lifecal::{
    BackendKind, CalendarPage, Canvas, DEVICES, DeviceCategory, GoalDraft, GoalPage,
    JsonFileStore, Preferences, RenderBackend as _, RenderSettings, SessionConfig, SessionEvent,
    Theme, WallpaperContent, compose_calendar_export, compose_wallpaper, create_backend,
    default_device, device_by_key,
};

const STATE_DIR_ENV: &str = "LIFECAL_STATE_DIR";
const FONT_DIR_ENV: &str = "LIFECAL_FONT_DIR";
const DEFAULT_STATE_DIR: &str = ".lifecal";

#[derive(Parser, Debug)]
#[command(name = "lifecal", version, about = "Year progress as a grid of days")]
struct Cli {
    /// Directory holding saved preferences (default: $LIFECAL_STATE_DIR, then ./.lifecal).
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the year page (and the saved goal) as text.
    Show(ShowArgs),
    /// Render a device wallpaper as a PNG.
    Wallpaper(WallpaperArgs),
    /// Render the flat year calendar as a PNG.
    Export(ExportArgs),
    /// Show, change or list themes.
    Theme {
        #[command(subcommand)]
        cmd: Option<ThemeCommand>,
    },
    /// Set, show or clear the tracked goal.
    Goal {
        #[command(subcommand)]
        cmd: GoalCommand,
    },
    /// List the wallpaper resolutions.
    Devices,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Reference date (YYYY-MM-DD), default today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Days per grid row.
    #[arg(long, default_value_t = lifecal::DEFAULT_COLUMNS)]
    columns: u32,
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Output PNG path.
    #[arg(long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,

    /// Directory for the default-named PNG (default: current directory).
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

impl OutputArgs {
    fn resolve(&self, file_name: String) -> PathBuf {
        match (&self.out, &self.out_dir) {
            (Some(out), _) => out.clone(),
            (None, Some(dir)) => dir.join(file_name),
            (None, None) => PathBuf::from(file_name),
        }
    }
}

#[derive(Parser, Debug)]
struct WallpaperArgs {
    /// Reference date (YYYY-MM-DD), default today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Theme to use; it is also saved as the new default.
    #[arg(long)]
    theme: Option<Theme>,

    /// Device category; picks the category's first resolution.
    #[arg(long, value_enum)]
    device: Option<DeviceCategory>,

    /// Resolution key such as 1290x2796 (see `lifecal devices`).
    #[arg(long)]
    resolution: Option<String>,

    /// Track the saved goal instead of the calendar year.
    #[arg(long)]
    goal: bool,

    /// Render at preview size instead of full resolution.
    #[arg(long)]
    preview: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Reference date (YYYY-MM-DD), default today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Theme to use; it is also saved as the new default.
    #[arg(long)]
    theme: Option<Theme>,

    #[arg(long, default_value_t = lifecal::EXPORT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = lifecal::EXPORT_HEIGHT)]
    height: u32,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Print the saved theme.
    Get,
    /// Save a theme.
    Set { theme: Theme },
    /// List all themes, marking the saved one.
    List,
}

#[derive(Subcommand, Debug)]
enum GoalCommand {
    /// Replace the saved goal.
    Set {
        #[arg(long)]
        title: String,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD), after the start.
        #[arg(long)]
        end: String,
    },
    /// Print goal progress.
    Show {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value_t = lifecal::DEFAULT_COLUMNS)]
        columns: u32,
    },
    /// Delete the saved goal.
    Clear,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let state_dir = state_dir(cli.state_dir.as_deref());
    tracing::debug!(state_dir = %state_dir.display(), "using state directory");
    let mut prefs = Preferences::new(JsonFileStore::in_dir(&state_dir));

    match cli.cmd {
        Command::Show(args) => cmd_show(&prefs, args),
        Command::Wallpaper(args) => cmd_wallpaper(&mut prefs, args),
        Command::Export(args) => cmd_export(&mut prefs, args),
        Command::Theme { cmd } => cmd_theme(&mut prefs, cmd.unwrap_or(ThemeCommand::Get)),
        Command::Goal { cmd } => cmd_goal(&mut prefs, cmd),
        Command::Devices => {
            cmd_devices();
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn state_dir(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(STATE_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
}

fn render_settings() -> RenderSettings {
    RenderSettings {
        font_dirs: std::env::var_os(FONT_DIR_ENV)
            .map(|v| std::env::split_paths(&v).collect())
            .unwrap_or_default(),
        ..RenderSettings::default()
    }
}

fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}

type Prefs = Preferences<JsonFileStore>;

/// The explicit theme (saved as the new default) or the saved one.
fn pick_theme(prefs: &mut Prefs, explicit: Option<Theme>) -> anyhow::Result<Theme> {
    match explicit {
        Some(theme) => {
            prefs.save_theme(theme).context("save theme")?;
            Ok(theme)
        }
        None => Ok(prefs.load_theme().context("load theme")?),
    }
}

fn cmd_show(prefs: &Prefs, args: ShowArgs) -> anyhow::Result<()> {
    let today = today_or(args.date);
    let page = CalendarPage::build(today);
    print!("{}", lifecal::render_text(&page, args.columns));

    if let Some(goal) = prefs.load_goal().context("load goal")? {
        println!();
        let goal_page = GoalPage::build(&goal, today);
        print!("{}", lifecal::render_goal_text(&goal_page, args.columns));
    }
    Ok(())
}

fn cmd_wallpaper(prefs: &mut Prefs, args: WallpaperArgs) -> anyhow::Result<()> {
    let today = today_or(args.date);
    let theme = pick_theme(prefs, args.theme)?;

    let mut config = SessionConfig::new(theme, default_device());
    if let Some(category) = args.device {
        config = config.update(SessionEvent::CategorySelected(category));
    }
    if let Some(key) = &args.resolution {
        config = config.update(SessionEvent::ResolutionSelected(device_by_key(key)?));
    }

    let (content, file_name) = if args.goal {
        let goal = prefs
            .load_goal()
            .context("load goal")?
            .context("no goal is set; use `lifecal goal set` first")?;
        (
            WallpaperContent::goal(&goal, today),
            lifecal::export::goal_wallpaper_file_name(config.device, theme),
        )
    } else {
        (
            WallpaperContent::year(today),
            lifecal::export::wallpaper_file_name(config.device, theme),
        )
    };

    let canvas = if args.preview {
        config.device.preview_size()
    } else {
        config.device.canvas()
    };
    let scene = compose_wallpaper(&content, &config, canvas);
    write_scene(&scene, &args.output.resolve(file_name))
}

fn cmd_export(prefs: &mut Prefs, args: ExportArgs) -> anyhow::Result<()> {
    let today = today_or(args.date);
    let theme = pick_theme(prefs, args.theme)?;
    let canvas = Canvas::new(args.width, args.height)?;

    let scene = compose_calendar_export(today, theme, canvas);
    let path = args
        .output
        .resolve(lifecal::export::calendar_file_name(today.year()));
    write_scene(&scene, &path)
}

fn write_scene(scene: &lifecal::Scene, path: &Path) -> anyhow::Result<()> {
    let mut backend = create_backend(BackendKind::Cpu, &render_settings())?;
    let frame = backend.render_scene(scene).context("render image")?;
    lifecal::export::write_png(&frame, path)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_theme(prefs: &mut Prefs, cmd: ThemeCommand) -> anyhow::Result<()> {
    match cmd {
        ThemeCommand::Get => println!("{}", prefs.load_theme()?),
        ThemeCommand::Set { theme } => {
            prefs.save_theme(theme)?;
            eprintln!("theme set to {}", theme.display_name());
        }
        ThemeCommand::List => {
            let current = prefs.load_theme()?;
            for theme in Theme::ALL {
                let mark = if theme == current { '*' } else { ' ' };
                println!("{mark} {:<10} {}", theme.id(), theme.display_name());
            }
        }
    }
    Ok(())
}

fn cmd_goal(prefs: &mut Prefs, cmd: GoalCommand) -> anyhow::Result<()> {
    match cmd {
        GoalCommand::Set { title, start, end } => {
            let goal = GoalDraft { title, start, end }.validate()?;
            prefs.save_goal(&goal).context("save goal")?;
            eprintln!("goal \"{}\" saved", goal.title);
        }
        GoalCommand::Show { date, columns } => match prefs.load_goal()? {
            Some(goal) => {
                let page = GoalPage::build(&goal, today_or(date));
                print!("{}", lifecal::render_goal_text(&page, columns));
            }
            None => println!("No goal set"),
        },
        GoalCommand::Clear => {
            prefs.clear_goal()?;
            eprintln!("goal cleared");
        }
    }
    Ok(())
}

fn cmd_devices() {
    for d in &DEVICES {
        println!("{:<10} {:<8} {}", d.key, d.category.id(), d.name);
    }
}
