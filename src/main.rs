use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

mod activity_log;
mod cli;
mod effects;
mod error;
mod input;
mod pomodoro;

use activity_log::ActivityLog;
use effects::{AudioDevice, Clock, DesktopNotifier, Notifier, SilentPlayer, SoundPlayer, TokioClock};
use error::PomodoroError;
use pomodoro::SessionRunner;

const REPEAT_MESSAGE: &str = "Let's goooooooo!";
const FAREWELL_MESSAGE: &str = "See you next time!";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let settings = cli::Settings::from_args(&args);

    init_tracing(settings.verbose);

    println!("🍅 Pomodoro Timer");
    println!("======================================================");
    if settings.verbose {
        println!("Verbose mode: ON");
    }
    if let Some(ref path) = settings.log_file {
        println!("Logging to: {}", path.display());
    }
    println!();

    let log = match settings.log_file {
        Some(path) => ActivityLog::new(path),
        None => ActivityLog::disabled(),
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    // The audio device is released when its runner drops at the end of this block.
    if settings.sound {
        let player = AudioDevice::open(&settings.sounds_dir);
        let mut runner = SessionRunner::new(TokioClock, player, DesktopNotifier, log);
        run_sessions(&mut runner, &mut input, &mut output).await?;
    } else {
        let mut runner = SessionRunner::new(TokioClock, SilentPlayer, DesktopNotifier, log);
        run_sessions(&mut runner, &mut input, &mut output).await?;
    }
    Ok(())
}

/// Prompt, run, ask to repeat, until the user says anything but "yes".
/// Returns how many sessions ran.
async fn run_sessions<C, S, N, R, W>(
    runner: &mut SessionRunner<C, S, N>,
    input: &mut R,
    output: &mut W,
) -> Result<usize, PomodoroError>
where
    C: Clock,
    S: SoundPlayer,
    N: Notifier,
    R: BufRead,
    W: Write,
{
    let mut sessions = 0;

    loop {
        let config = input::read_session_config(input, output)?;
        info!(%config, total_seconds = config.total_duration().as_secs(), "starting session");

        let summary = runner.run(&config).await;
        sessions += 1;
        info!(
            completed = summary.completed_intervals,
            waited_seconds = summary.waited.as_secs(),
            phase = runner.phase().as_str(),
            "session complete"
        );

        if !input::ask_repeat(input, output)? {
            writeln!(output, "{}", FAREWELL_MESSAGE)?;
            return Ok(sessions);
        }
        writeln!(output, "{}", REPEAT_MESSAGE)?;
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "pomodoro_timer=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
