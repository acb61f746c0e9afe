//! Headless showroom replay: runs a timed command script and prints one
//! render frame per line as JSON.

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Deserialize;
use showroom::camera::ViewId;
use showroom::configurator::PaintColor;
use showroom::engine::{ShowroomCommand, ShowroomEngine};
use showroom::error::ShowroomError;
use showroom::options::Options;
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Extra time simulated after the last scripted step.
const TAIL: Duration = Duration::from_millis(500);

/// One timed step of a replay script.
///
/// ```json
/// { "at": 0.5, "command": "select_view", "view": "side" }
/// ```
#[derive(Debug, Deserialize)]
struct ScriptStep {
    /// Seconds after session start.
    at: f32,
    #[serde(flatten)]
    command: ShowroomCommand,
}

fn builtin_tour() -> Vec<ScriptStep> {
    let step = |at, command| ScriptStep { at, command };
    vec![
        step(0.0, ShowroomCommand::SelectView { view: ViewId::Front }),
        step(0.5, ShowroomCommand::SelectView { view: ViewId::Side }),
        step(
            2.5,
            ShowroomCommand::SelectColor {
                color: PaintColor::from_rgb(0xef, 0x44, 0x44),
            },
        ),
        step(3.0, ShowroomCommand::NextModel),
        step(3.5, ShowroomCommand::SelectView { view: ViewId::RearQuarter }),
        step(6.0, ShowroomCommand::SelectView { view: ViewId::Top }),
    ]
}

fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ShowroomError> {
    let content = std::fs::read_to_string(path)?;
    let mut steps: Vec<ScriptStep> = serde_json::from_str(&content)
        .map_err(|e| ShowroomError::OptionsParse(e.to_string()))?;
    steps.sort_by(|a, b| a.at.total_cmp(&b.at));
    Ok(steps)
}

/// Simulated time at which the replay stops: the last step, one full
/// transition, and a short tail.
fn replay_end(
    script: &[ScriptStep],
    transition: Duration,
) -> Result<Duration, ShowroomError> {
    let last_step = script.last().map_or(0.0, |s| s.at.max(0.0));
    let last = Duration::try_from_secs_f32(last_step).map_err(|e| {
        ShowroomError::OptionsParse(format!(
            "script step at {last_step}s is out of range: {e}"
        ))
    })?;
    Ok(last + transition + TAIL)
}

fn main() -> Result<(), ShowroomError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match args.get(1) {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let script = match args.get(2) {
        Some(path) => load_script(Path::new(path))?,
        None => builtin_tour(),
    };

    let transition = options.camera.transition_duration();
    let mut engine = ShowroomEngine::new(options)?;

    let end = replay_end(&script, transition)?;

    let start = Instant::now();
    let mut pending = script.into_iter().peekable();
    let mut elapsed = Duration::ZERO;
    let mut out = BufWriter::new(std::io::stdout().lock());

    while elapsed <= end {
        let now = start + elapsed;
        while let Some(step) =
            pending.next_if(|s| s.at <= elapsed.as_secs_f32())
        {
            log::info!("t={:.2}s {:?}", elapsed.as_secs_f32(), step.command);
            if let Err(e) = engine.execute(step.command, now) {
                log::warn!("step at {:.2}s rejected: {e}", step.at);
            }
        }

        let frame = engine.frame(now);
        serde_json::to_writer(&mut out, &frame).map_err(std::io::Error::from)?;
        writeln!(out)?;
        elapsed += FRAME;
    }

    out.flush()?;
    log::info!(
        "Replay finished at view '{}' with model {}",
        engine.state().active_view(),
        engine.state().selected_model()
    );
    Ok(())
}
