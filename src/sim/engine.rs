//! Game loop and session state machine
//!
//! `NotStarted -> Running -> Over -> (reset) -> NotStarted`. One long-lived
//! engine serves every session; replays go through `reset`/`start` rather
//! than rebuilding the engine.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::animation::{advance_destroy, animate};
use super::collision::find_collision;
use super::progression::{
    level_for_score, obstacle_speed, palette_for_level, pass_points, score_multiplier, time_score,
};
use super::spawn::create_obstacle;
use super::state::{EndCause, GamePhase, Obstacle, Palette, Plane, Session, Viewport};
use crate::consts::REFERENCE_FPS;
use crate::error::{GameError, Result};
use crate::highscores::HighScore;
use crate::persistence::HighScoreStore;
use crate::platform::{Clock, ControlEvent, Controls, Direction, Presenter};
use crate::settings::{Difficulty, DifficultyProfile};
use crate::tuning::Tuning;

/// Construction parameters
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub width: f32,
    pub height: f32,
    /// RNG seed for obstacle generation
    pub seed: u64,
    pub tuning: Tuning,
}

impl EngineOptions {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            seed: 0,
            tuning: Tuning::default(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }
}

/// The simulation engine. Owns the plane, obstacles and session exclusively.
pub struct Engine<C: Clock, P: Presenter, S: HighScoreStore> {
    tuning: Tuning,
    viewport: Viewport,
    rng: Pcg32,
    clock: C,
    presenter: P,
    high_score: HighScore<S>,
    difficulty: Option<Difficulty>,
    plane: Plane,
    obstacles: Vec<Obstacle>,
    session: Session,
    controls: Controls,
    palette: &'static Palette,
    /// Clock reading at the previous frame
    last_frame: f64,
    next_id: u32,
}

impl<C: Clock, P: Presenter, S: HighScoreStore> Engine<C, P, S> {
    /// Build an engine. Fails without a usable drawing surface.
    pub fn new(options: EngineOptions, clock: C, mut presenter: P, store: S) -> Result<Self> {
        let viewport = Viewport::new(options.width, options.height)?;
        let tuning = options.tuning;
        let high_score = HighScore::load(store);
        presenter.report_high_score(high_score.best());

        let last_frame = clock.now();
        let mut engine = Self {
            plane: Plane::new(tuning.plane_x, &viewport),
            session: Session::new(0.0, 1.0, pass_points(1, &tuning)),
            tuning,
            viewport,
            rng: Pcg32::seed_from_u64(options.seed),
            clock,
            presenter,
            high_score,
            difficulty: None,
            obstacles: Vec::new(),
            controls: Controls::default(),
            palette: palette_for_level(1),
            last_frame,
            next_id: 1,
        };
        engine.report_hud();

        log::info!(
            "Engine ready: {}x{} viewport, {:?} layout",
            viewport.width,
            viewport.height,
            viewport.device_class()
        );
        Ok(engine)
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn high_score_store(&self) -> &S {
        self.high_score.store()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Apply one inbound control event.
    ///
    /// Refused events leave the state untouched and are forwarded to
    /// `Presenter::report_error` as well as returned.
    pub fn handle(&mut self, event: ControlEvent) -> Result<()> {
        let result = match event {
            ControlEvent::DifficultySelected(name) => self.select_difficulty(&name),
            ControlEvent::StartRequested => self.start(),
            ControlEvent::ResetRequested => self.reset(),
            ControlEvent::Directional { direction, pressed } => {
                self.set_direction(direction, pressed);
                Ok(())
            }
            ControlEvent::TouchActive(active) => {
                self.set_touch(active);
                Ok(())
            }
        };
        if let Err(e) = &result {
            log::warn!("Control event refused: {}", e);
            self.presenter.report_error(e);
        }
        result
    }

    /// Pick the difficulty by name for the next session
    pub fn select_difficulty(&mut self, name: &str) -> Result<()> {
        let difficulty = name.parse::<Difficulty>()?;
        self.set_difficulty(difficulty)
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        if self.session.phase == GamePhase::Running {
            return Err(GameError::InvalidState {
                action: "select difficulty",
                phase: self.session.phase,
            });
        }
        self.difficulty = Some(difficulty);
        let profile = difficulty.profile();
        self.apply_baseline(&profile);
        log::info!(
            "Difficulty selected: {} (scroll {}, thrust {}, dive {}, gravity {})",
            difficulty,
            profile.base_speed,
            profile.plane_speed,
            profile.max_down_speed,
            profile.gravity
        );
        Ok(())
    }

    /// Begin a session. Requires a selected difficulty; from `Over` this
    /// implies a reset first.
    pub fn start(&mut self) -> Result<()> {
        let Some(difficulty) = self.difficulty else {
            return Err(GameError::NoDifficultySelected);
        };
        if self.session.phase == GamePhase::Running {
            return Err(GameError::InvalidState {
                action: "start",
                phase: self.session.phase,
            });
        }

        self.reset_state();
        self.session.phase = GamePhase::Running;
        self.last_frame = self.clock.now();
        log::info!("Starting game on {}", difficulty);
        Ok(())
    }

    /// Return to the start screen after a session ended
    pub fn reset(&mut self) -> Result<()> {
        if self.session.phase == GamePhase::Running {
            return Err(GameError::InvalidState {
                action: "reset",
                phase: self.session.phase,
            });
        }
        self.reset_state();
        log::info!("Game reset");
        Ok(())
    }

    /// Held arrow key state; ignored outside a running session
    pub fn set_direction(&mut self, direction: Direction, pressed: bool) {
        if self.session.phase == GamePhase::Running {
            self.controls.set(direction, pressed);
        }
    }

    /// Touch hold state; ignored outside a running session
    pub fn set_touch(&mut self, active: bool) {
        if self.session.phase == GamePhase::Running {
            self.controls.touch = active;
        }
    }

    /// Follow a viewport resize: plane and obstacle sizing are recomputed
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        self.viewport = Viewport::new(width, height)?;
        let (plane_width, plane_height) = self.viewport.plane_size();
        self.plane.width = plane_width;
        self.plane.height = plane_height;
        log::info!(
            "Resized to {}x{} ({:?})",
            width,
            height,
            self.viewport.device_class()
        );
        Ok(())
    }

    /// One display refresh: sample the clock, simulate, then redraw
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let dt = (now - self.last_frame) as f32;
        self.last_frame = now;

        if self.session.phase == GamePhase::Running {
            self.tick(dt);
        }
        self.render();
    }

    /// Advance a running session by `dt` seconds. No-op in any other phase.
    ///
    /// `dt` is clamped to `[0, max_frame_dt]` so a stalled host (e.g. a
    /// backgrounded tab) cannot produce one huge integration step.
    pub fn tick(&mut self, dt: f32) {
        if self.session.phase != GamePhase::Running {
            return;
        }
        let Some(difficulty) = self.difficulty else {
            return;
        };
        let profile = difficulty.profile();
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.tuning.max_frame_dt)
        } else {
            0.0
        };

        // Plane
        self.plane.speed = self.controls.plane_speed(
            profile.plane_speed,
            profile.max_down_speed,
            profile.gravity,
        );
        self.plane.y += self.plane.speed * dt * REFERENCE_FPS;

        if self.plane.y <= 0.0 {
            log::info!("Game over: plane crashed into the ceiling");
            self.end_game(EndCause::Ceiling);
            return;
        }
        if self.plane.y + self.plane.height >= self.viewport.height {
            log::info!("Game over: plane crashed into the floor");
            self.end_game(EndCause::Floor);
            return;
        }

        // Scoring and progression
        self.session.score += time_score(
            self.tuning.base_score_rate,
            self.session.score_multiplier,
            dt,
        );
        self.validate_score();

        // Obstacles; pass bonuses land before the level is recomputed
        self.update_obstacles(&profile);
        self.update_level(&profile);
        self.check_collisions();

        self.high_score.submit(self.session.floored_score());
        self.report_hud();
    }

    /// Enter `Over`. Repeated calls, or calls outside a running session, do
    /// nothing.
    pub fn end_game(&mut self, cause: EndCause) {
        if self.session.phase != GamePhase::Running {
            return;
        }
        log::info!(
            "Session ended ({}): level {}, scroll speed {:.1}, plane speed {:.1}",
            cause.as_str(),
            self.session.level,
            self.session.obstacle_speed,
            self.plane.speed
        );

        self.session.phase = GamePhase::Over;
        self.session.end_cause = Some(cause);
        if let Some(difficulty) = self.difficulty {
            self.session.obstacle_speed = difficulty.profile().base_speed;
        }
        self.plane.speed = 0.0;
        for obstacle in &mut self.obstacles {
            obstacle.frozen = true;
        }

        let final_score = self.session.floored_score();
        self.high_score.submit(final_score);
        self.presenter.report_game_over(final_score, cause);
        log::info!("Final score: {}", final_score);
    }

    /// Clear and redraw. The plane is always drawn; obstacles only until the
    /// session is over.
    pub fn render(&mut self) {
        self.presenter.clear(self.palette.background);

        if self.session.phase != GamePhase::Over {
            let destroy_frames = self.tuning.destroy_frames;
            for obstacle in &self.obstacles {
                if obstacle.destroying {
                    self.presenter.draw_explosion(
                        obstacle.center(),
                        obstacle.destroy_progress(destroy_frames),
                    );
                } else {
                    self.presenter.draw_shape(
                        obstacle.shape,
                        obstacle.animated_bounds(),
                        obstacle.rotation(),
                        obstacle.color,
                    );
                }
            }
        }

        self.presenter
            .draw_plane(self.plane.bounds(), self.palette.plane);
    }

    fn update_level(&mut self, profile: &DifficultyProfile) {
        let level = level_for_score(self.session.score, self.tuning.points_per_level);
        if level <= self.session.level {
            return;
        }
        self.session.level = level;
        self.session.obstacle_speed = obstacle_speed(profile, level, &self.tuning);
        self.session.score_multiplier = score_multiplier(profile, level, &self.tuning);
        self.session.pass_points = pass_points(level, &self.tuning);
        self.palette = palette_for_level(level);
        log::info!(
            "Level {}: scroll speed {:.1}, score x{:.1}, pass bonus {}",
            level,
            self.session.obstacle_speed,
            self.session.score_multiplier,
            self.session.pass_points
        );
    }

    fn update_obstacles(&mut self, profile: &DifficultyProfile) {
        let spacing = self.tuning.spawn_spacing / profile.obstacle_frequency;
        let spawn_due = match self.obstacles.last() {
            None => true,
            Some(last) => last.x < self.viewport.width - spacing,
        };
        if spawn_due {
            let id = self.next_obstacle_id();
            let obstacle = create_obstacle(
                &mut self.rng,
                id,
                self.session.level,
                &self.viewport,
                self.palette,
                &self.tuning,
            );
            self.obstacles.push(obstacle);
        }

        let speed = self.session.obstacle_speed;
        let plane_x = self.plane.x;
        let pass_bonus = self.session.pass_points as f64;
        let destroy_frames = self.tuning.destroy_frames;
        let viewport = self.viewport;
        let rng = &mut self.rng;
        let session = &mut self.session;

        self.obstacles.retain_mut(|obstacle| {
            if obstacle.destroying {
                return !advance_destroy(obstacle, destroy_frames);
            }

            obstacle.x -= speed;
            animate(obstacle, &viewport, rng);

            if !obstacle.passed && plane_x > obstacle.x + obstacle.width {
                obstacle.passed = true;
                session.score += pass_bonus;
                session.obstacles_passed += 1;
            }

            if obstacle.x + obstacle.width < 0.0 {
                obstacle.destroying = true;
                if !obstacle.passed {
                    session.obstacles_passed += 1;
                }
            }
            true
        });
    }

    fn check_collisions(&mut self) {
        let Some(hit) = find_collision(&self.obstacles, &self.plane) else {
            return;
        };
        log::info!(
            "Game over: plane crashed into {} #{} at ({:.0}, {:.0}); plane at ({:.0}, {:.0})",
            hit.shape.as_str(),
            hit.id,
            hit.x,
            hit.y,
            self.plane.x,
            self.plane.y
        );
        self.end_game(EndCause::Obstacle);
    }

    fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Non-finite score is recovered, not fatal
    fn validate_score(&mut self) {
        if !self.session.score.is_finite() {
            log::error!("Score became {}; resetting to 0", self.session.score);
            self.session.score = 0.0;
        }
    }

    fn apply_baseline(&mut self, profile: &DifficultyProfile) {
        self.session.obstacle_speed = profile.base_speed;
        self.session.score_multiplier = score_multiplier(profile, 1, &self.tuning);
        self.session.pass_points = pass_points(1, &self.tuning);
    }

    fn reset_state(&mut self) {
        self.session = Session::new(0.0, 1.0, pass_points(1, &self.tuning));
        self.obstacles.clear();
        self.plane = Plane::new(self.tuning.plane_x, &self.viewport);
        self.controls = Controls::default();
        self.palette = palette_for_level(1);
        if let Some(difficulty) = self.difficulty {
            self.apply_baseline(&difficulty.profile());
        }
        self.report_hud();
    }

    fn report_hud(&mut self) {
        self.presenter.report_score(self.session.floored_score());
        self.presenter.report_level(self.session.level);
        self.presenter
            .report_obstacles_passed(self.session.obstacles_passed);
        self.presenter.report_high_score(self.high_score.best());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::platform::{ManualClock, RecordingPresenter};
    use crate::sim::state::{Animation, Color, ShapeKind};

    type TestEngine = Engine<ManualClock, RecordingPresenter, MemoryStore>;

    const FRAME: f64 = 1.0 / 60.0;

    fn engine() -> TestEngine {
        Engine::new(
            EngineOptions::new(1000.0, 600.0).seed(12345),
            ManualClock::new(),
            RecordingPresenter::new(),
            MemoryStore::new(),
        )
        .unwrap()
    }

    fn running(difficulty: &str) -> TestEngine {
        let mut e = engine();
        e.select_difficulty(difficulty).unwrap();
        e.start().unwrap();
        e
    }

    fn step(e: &mut TestEngine) {
        e.clock().advance(FRAME);
        e.frame();
    }

    fn rect_obstacle(id: u32, x: f32, y: f32) -> Obstacle {
        Obstacle {
            id,
            x,
            y,
            width: 50.0,
            height: 50.0,
            shape: ShapeKind::Rectangle,
            color: Color(0xff0000),
            scale: 1.0,
            animation: Animation::Fall,
            frozen: false,
            passed: false,
            destroying: false,
            destroy_frame: 0,
        }
    }

    #[test]
    fn test_missing_surface_is_fatal() {
        let result = Engine::new(
            EngineOptions::new(0.0, 600.0),
            ManualClock::new(),
            RecordingPresenter::new(),
            MemoryStore::new(),
        );
        assert!(matches!(result, Err(GameError::InvalidViewport { .. })));
    }

    #[test]
    fn test_start_requires_difficulty() {
        let mut e = engine();
        let err = e.handle(ControlEvent::StartRequested).unwrap_err();
        assert!(matches!(err, GameError::NoDifficultySelected));
        assert_eq!(e.phase(), GamePhase::NotStarted);
        assert_eq!(e.presenter().errors.len(), 1);
    }

    #[test]
    fn test_unknown_difficulty_is_refused() {
        let mut e = engine();
        let err = e
            .handle(ControlEvent::DifficultySelected("impossible".into()))
            .unwrap_err();
        assert!(matches!(err, GameError::UnknownDifficulty(_)));
        assert!(e.difficulty().is_none());
    }

    #[test]
    fn test_select_applies_baseline_speeds() {
        let mut e = engine();
        e.handle(ControlEvent::DifficultySelected("hard".into()))
            .unwrap();
        assert_eq!(e.difficulty(), Some(Difficulty::Hard));
        assert_eq!(e.session().obstacle_speed, 7.0);
        assert_eq!(e.session().score_multiplier, 2.0);
    }

    #[test]
    fn test_cannot_change_difficulty_mid_session() {
        let mut e = running("easy");
        let err = e.select_difficulty("extreme").unwrap_err();
        assert!(matches!(err, GameError::InvalidState { .. }));
        assert_eq!(e.difficulty(), Some(Difficulty::Easy));
        assert!(e.reset().is_err());
        assert!(e.start().is_err());
        assert_eq!(e.phase(), GamePhase::Running);
    }

    #[test]
    fn test_gravity_pulls_plane_down() {
        let mut e = running("easy");
        let start_y = e.plane().y;
        step(&mut e);
        assert!((e.plane().y - (start_y + 3.0)).abs() < 1e-3);
        assert_eq!(e.plane().speed, 3.0);
    }

    #[test]
    fn test_up_input_climbs_and_release_falls() {
        let mut e = running("easy");
        let start_y = e.plane().y;
        e.handle(ControlEvent::Directional {
            direction: Direction::Up,
            pressed: true,
        })
        .unwrap();
        step(&mut e);
        assert!((e.plane().y - (start_y - 6.0)).abs() < 1e-3);

        e.set_direction(Direction::Up, false);
        e.set_direction(Direction::Down, true);
        step(&mut e);
        assert_eq!(e.plane().speed, 8.0);
    }

    #[test]
    fn test_input_ignored_when_not_running() {
        let mut e = engine();
        e.set_direction(Direction::Up, true);
        e.set_touch(true);
        assert_eq!(e.controls(), Controls::default());
    }

    #[test]
    fn test_ceiling_ends_session() {
        let mut e = running("extreme");
        e.set_touch(true);
        for _ in 0..200 {
            step(&mut e);
            if e.phase() == GamePhase::Over {
                break;
            }
        }
        assert_eq!(e.phase(), GamePhase::Over);
        assert_eq!(e.session().end_cause, Some(EndCause::Ceiling));
    }

    #[test]
    fn test_huge_dt_is_clamped() {
        let mut e = running("easy");
        let start_y = e.plane().y;
        e.clock().advance(30.0);
        e.frame();
        // 0.1 s at gravity 3 and 60 fps = 18 px
        assert!((e.plane().y - (start_y + 18.0)).abs() < 1e-3);
        assert_eq!(e.phase(), GamePhase::Running);
    }

    #[test]
    fn test_score_accrues_and_spawns() {
        let mut e = running("easy");
        step(&mut e);
        assert!(e.session().score > 0.0);
        assert_eq!(e.obstacles().len(), 1);
        assert_eq!(e.obstacles()[0].x, 1000.0 - 5.0);
    }

    #[test]
    fn test_spawn_spacing_follows_frequency() {
        let mut e = running("easy");
        step(&mut e);
        // Nothing new until the last obstacle is more than 300 px in
        for _ in 0..60 {
            step(&mut e);
        }
        assert_eq!(e.obstacles().len(), 1);
        step(&mut e);
        assert_eq!(e.obstacles().len(), 2);
    }

    #[test]
    fn test_nan_score_recovers() {
        let mut e = running("easy");
        e.session.score = f64::NAN;
        step(&mut e);
        assert_eq!(e.phase(), GamePhase::Running);
        assert!(e.session().score.is_finite());
        assert!(e.session().score < 1.0);
    }

    #[test]
    fn test_pass_bonus_awarded_once() {
        let mut e = running("easy");
        // Obstacle already behind the plane, clear of it vertically
        let id = e.next_obstacle_id();
        e.obstacles.push(rect_obstacle(id, 20.0, 0.0));
        let before = e.session().score;
        step(&mut e);
        assert_eq!(e.session().obstacles_passed, 1);
        assert!(e.session().score - before >= 2.0);
        step(&mut e);
        assert_eq!(e.session().obstacles_passed, 1);
    }

    #[test]
    fn test_level_up_raises_speed_and_palette() {
        let mut e = running("medium");
        e.session.score = 199.9;
        step(&mut e);
        assert_eq!(e.session().level, 2);
        assert!((e.session().obstacle_speed - 6.3).abs() < 1e-4);
        assert_eq!(e.session().pass_points, 4.0);
        assert_eq!(e.palette(), palette_for_level(2));
    }

    #[test]
    fn test_pass_bonus_crossing_level_boundary_levels_up_same_tick() {
        let mut e = running("easy");
        e.session.score = 98.5;
        let id = e.next_obstacle_id();
        e.obstacles.push(rect_obstacle(id, 20.0, 0.0));
        step(&mut e);

        let session = e.session();
        assert!(session.score >= 100.0);
        assert_eq!(session.obstacles_passed, 1);
        assert_eq!(session.level, 2);
        assert_eq!(session.level, level_for_score(session.score, 100));
        assert!((session.obstacle_speed - 5.3).abs() < 1e-4);
    }

    #[test]
    fn test_time_accrual_crossing_level_boundary() {
        let mut e = running("easy");
        e.session.score = 99.99;
        step(&mut e);
        assert_eq!(e.session().level, 2);
        assert_eq!(e.palette(), palette_for_level(2));
    }

    #[test]
    fn test_level_matches_score_after_every_pass() {
        let mut e = running("easy");
        for _ in 0..60 {
            let id = e.next_obstacle_id();
            e.obstacles.push(rect_obstacle(id, 20.0, 0.0));
            step(&mut e);
            let session = e.session();
            assert_eq!(session.level, level_for_score(session.score, 100));
        }
        assert!(e.session().level >= 2);
    }

    #[test]
    fn test_spinning_rectangle_is_drawn_unrotated() {
        let mut e = running("easy");
        let id = e.next_obstacle_id();
        let mut o = rect_obstacle(id, 600.0, 0.0);
        o.animation = Animation::Spin {
            rotation: 1.0,
            speed: 0.0,
        };
        e.obstacles.push(o);
        step(&mut e);
        let rotation = e.presenter().frame.iter().find_map(|call| match call {
            crate::platform::DrawCall::Shape {
                shape: ShapeKind::Rectangle,
                rotation,
                ..
            } => Some(*rotation),
            _ => None,
        });
        assert_eq!(rotation, Some(0.0));
    }

    #[test]
    fn test_obstacle_collision_ends_game() {
        let mut e = running("easy");
        let plane = e.plane().clone();
        let id = e.next_obstacle_id();
        e.obstacles
            .push(rect_obstacle(id, plane.x + 5.0, plane.y - 10.0));
        step(&mut e);
        assert_eq!(e.phase(), GamePhase::Over);
        assert_eq!(e.session().end_cause, Some(EndCause::Obstacle));
        assert!(e.obstacles().iter().all(|o| o.frozen));
        assert_eq!(e.session().obstacle_speed, 5.0);
        assert_eq!(e.plane().speed, 0.0);
        assert!(e.presenter().game_over.is_some());
    }

    #[test]
    fn test_end_game_is_idempotent() {
        let mut e = running("hard");
        for _ in 0..30 {
            step(&mut e);
        }
        e.end_game(EndCause::Obstacle);
        let once = e.session().clone();
        let plane_once = e.plane().y;
        e.end_game(EndCause::Floor);
        assert_eq!(e.session(), &once);
        assert_eq!(e.plane().y, plane_once);
    }

    #[test]
    fn test_over_stops_simulation_but_draws_plane() {
        let mut e = running("easy");
        step(&mut e);
        e.end_game(EndCause::Obstacle);
        let score = e.session().score;
        let y = e.plane().y;
        step(&mut e);
        assert_eq!(e.session().score, score);
        assert_eq!(e.plane().y, y);
        assert!(e.presenter().plane_drawn());
        assert_eq!(e.presenter().shapes_drawn(), 0);
        assert_eq!(e.presenter().explosions_drawn(), 0);
    }

    #[test]
    fn test_reset_restores_start_screen() {
        let mut e = running("medium");
        for _ in 0..20 {
            step(&mut e);
        }
        e.end_game(EndCause::Floor);
        e.handle(ControlEvent::ResetRequested).unwrap();

        assert_eq!(e.phase(), GamePhase::NotStarted);
        assert_eq!(e.session().score, 0.0);
        assert_eq!(e.session().level, 1);
        assert_eq!(e.session().obstacles_passed, 0);
        assert!(e.obstacles().is_empty());
        assert_eq!(e.plane().y, 300.0);
        assert_eq!(e.session().obstacle_speed, 6.0);
        assert_eq!(e.difficulty(), Some(Difficulty::Medium));
        assert_eq!(e.presenter().score, Some(0));
    }

    #[test]
    fn test_start_from_over_replays() {
        let mut e = running("easy");
        step(&mut e);
        e.end_game(EndCause::Floor);
        e.start().unwrap();
        assert_eq!(e.phase(), GamePhase::Running);
        assert!(e.obstacles().is_empty());
    }

    #[test]
    fn test_high_score_persists_and_never_drops() {
        let mut e = Engine::new(
            EngineOptions::new(1000.0, 600.0),
            ManualClock::new(),
            RecordingPresenter::new(),
            MemoryStore::with_value(3),
        )
        .unwrap();
        assert_eq!(e.presenter().high_score, Some(3));

        e.select_difficulty("easy").unwrap();
        e.start().unwrap();
        e.session.score = 10.5;
        step(&mut e);
        assert_eq!(e.high_score(), 10);
        assert_eq!(e.high_score_store().load_high_score().unwrap(), 10);

        e.end_game(EndCause::Floor);
        e.start().unwrap();
        step(&mut e);
        assert_eq!(e.high_score(), 10);
    }

    #[test]
    fn test_destroying_obstacle_draws_explosion() {
        let mut e = running("easy");
        let id = e.next_obstacle_id();
        let mut o = rect_obstacle(id, 600.0, 0.0);
        o.destroying = true;
        o.destroy_frame = 9;
        e.obstacles.push(o);
        step(&mut e);
        let progress = e.presenter().frame.iter().find_map(|call| match call {
            crate::platform::DrawCall::Explosion { progress, .. } => Some(*progress),
            _ => None,
        });
        assert_eq!(progress, Some(0.5));
    }

    #[test]
    fn test_resize_rescales_plane() {
        let mut e = engine();
        e.resize(400.0, 800.0).unwrap();
        assert_eq!(e.plane().width, 32.0);
        assert_eq!(e.plane().height, 16.0);
        assert!(e.resize(400.0, 0.0).is_err());
        assert_eq!(e.viewport().height, 800.0);
    }
}
