//! Plane Dodge headless runner
//!
//! Drives the engine at a fixed 60 Hz with a simple autopilot and reports
//! how far it got. Useful for balance checks without a display:
//!
//! ```text
//! plane-dodge [difficulty] [frames] [seed]
//! ```
//!
//! Set `PLANE_DODGE_HIGHSCORE` to a file path to persist the best score and
//! `PLANE_DODGE_TUNING` to a JSON file to override the game balance.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use plane_dodge::persistence::{HighScoreStore, JsonFileStore, MemoryStore};
    use plane_dodge::platform::{ControlEvent, Direction, ManualClock, RecordingPresenter};
    use plane_dodge::sim::{Engine, EngineOptions, GamePhase};
    use plane_dodge::{Difficulty, Result, Tuning};

    const FRAME_SECONDS: f64 = 1.0 / 60.0;
    const VIEWPORT: (f32, f32) = (1280.0, 720.0);
    /// How far ahead the autopilot looks for obstacles (px)
    const LOOKAHEAD: f32 = 220.0;

    pub struct Args {
        pub difficulty: Difficulty,
        pub frames: u64,
        pub seed: u64,
    }

    impl Args {
        pub fn parse() -> Result<Self> {
            let mut args = std::env::args().skip(1);
            let difficulty = match args.next() {
                Some(name) => name.parse()?,
                None => Difficulty::Easy,
            };
            let frames = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);
            let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
            Ok(Self {
                difficulty,
                frames,
                seed,
            })
        }
    }

    pub fn run(args: Args) -> Result<()> {
        let tuning = match std::env::var("PLANE_DODGE_TUNING") {
            Ok(path) => Tuning::load(std::path::Path::new(&path))?,
            Err(_) => Tuning::default(),
        };
        let options = EngineOptions::new(VIEWPORT.0, VIEWPORT.1)
            .seed(args.seed)
            .tuning(tuning);

        match std::env::var("PLANE_DODGE_HIGHSCORE") {
            Ok(path) => play(options, JsonFileStore::new(path), &args),
            Err(_) => play(options, MemoryStore::new(), &args),
        }
    }

    fn play<S: HighScoreStore>(options: EngineOptions, store: S, args: &Args) -> Result<()> {
        let mut engine = Engine::new(options, ManualClock::new(), RecordingPresenter::new(), store)?;
        engine.handle(ControlEvent::DifficultySelected(
            args.difficulty.as_str().to_string(),
        ))?;
        engine.handle(ControlEvent::StartRequested)?;

        let mut frames = 0;
        while frames < args.frames && engine.phase() == GamePhase::Running {
            steer(&mut engine)?;
            engine.clock().advance(FRAME_SECONDS);
            engine.frame();
            frames += 1;
        }

        let session = engine.session();
        let cause = session
            .end_cause
            .map(|c| c.as_str())
            .unwrap_or("still flying");
        println!(
            "{}: {} frames, score {}, level {}, passed {}, best {} ({})",
            args.difficulty,
            frames,
            session.floored_score(),
            session.level,
            session.obstacles_passed,
            engine.high_score(),
            cause
        );
        Ok(())
    }

    /// Climb away from the nearest threat ahead, otherwise hold mid-screen
    fn steer<S: HighScoreStore>(
        engine: &mut Engine<ManualClock, RecordingPresenter, S>,
    ) -> Result<()> {
        let plane = engine.plane().clone();
        let height = engine.viewport().height;
        let plane_mid = plane.y + plane.height / 2.0;

        let threat = engine
            .obstacles()
            .iter()
            .filter(|o| !o.destroying)
            .map(|o| o.animated_bounds())
            .filter(|b| b.right() >= plane.x && b.x <= plane.x + plane.width + LOOKAHEAD)
            .filter(|b| b.y <= plane.y + plane.height * 2.0 && b.bottom() >= plane.y - plane.height)
            .min_by(|a, b| a.x.total_cmp(&b.x));

        let climb = match threat {
            // Dodge toward whichever side of the obstacle has more room
            Some(b) => b.y > height - b.bottom(),
            None => plane_mid > height / 2.0,
        };
        let (press, release) = if climb {
            (Direction::Up, Direction::Down)
        } else {
            (Direction::Down, Direction::Up)
        };

        engine.handle(ControlEvent::Directional {
            direction: release,
            pressed: false,
        })?;
        // Let gravity do the work when drifting back to center
        let pressed = threat.is_some() || climb;
        engine.handle(ControlEvent::Directional {
            direction: press,
            pressed,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Plane Dodge (headless) starting...");

    let result = headless::Args::parse().and_then(headless::run);
    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host embeds the library directly
}
