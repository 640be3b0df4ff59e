use plane_dodge::persistence::{HighScoreStore, MemoryStore};
use plane_dodge::platform::{ControlEvent, ManualClock, RecordingPresenter};
use plane_dodge::sim::{
    Animation, EndCause, Engine, EngineOptions, GamePhase, Obstacle, Plane, ShapeKind, Viewport,
    advance_destroy, create_obstacle, find_collision, level_for_score, palette_for_level,
};
use plane_dodge::{GameError, Tuning};
use rand::SeedableRng;
use rand_pcg::Pcg32;

type TestEngine = Engine<ManualClock, RecordingPresenter, MemoryStore>;

const FRAME: f64 = 1.0 / 60.0;

fn engine_with(store: MemoryStore) -> TestEngine {
    Engine::new(
        EngineOptions::new(1000.0, 600.0).seed(7),
        ManualClock::new(),
        RecordingPresenter::new(),
        store,
    )
    .unwrap()
}

fn started(difficulty: &str) -> TestEngine {
    let mut engine = engine_with(MemoryStore::new());
    engine
        .handle(ControlEvent::DifficultySelected(difficulty.into()))
        .unwrap();
    engine.handle(ControlEvent::StartRequested).unwrap();
    engine
}

fn step(engine: &mut TestEngine) {
    engine.clock().advance(FRAME);
    engine.frame();
}

#[test]
fn easy_without_input_falls_to_the_floor() {
    let mut engine = started("easy");
    let plane_height = engine.plane().height;
    assert_eq!(engine.plane().y, 300.0);

    let mut last_y = engine.plane().y;
    let mut ticks = 0;
    while engine.phase() == GamePhase::Running {
        step(&mut engine);
        ticks += 1;
        if engine.phase() == GamePhase::Running {
            assert!((engine.plane().y - last_y - 3.0).abs() < 1e-3);
            last_y = engine.plane().y;
        }
        assert!(ticks < 1000, "plane never reached the floor");
    }

    assert_eq!(engine.session().end_cause, Some(EndCause::Floor));
    assert!(engine.plane().y + plane_height >= 600.0);
    // (600 - 12 - 300) / 3 = 96 ticks to touch the floor, give or take rounding
    assert!((96..=97).contains(&ticks));
}

#[test]
fn level_follows_floored_score() {
    assert_eq!(level_for_score(247.5, 100), 3);
    assert_eq!(level_for_score(99.99, 100), 1);
    assert_eq!(level_for_score(100.0, 100), 2);
}

#[test]
fn level_tracks_score_every_tick() {
    // One point per level so time accrual alone crosses several boundaries
    let tuning = Tuning {
        points_per_level: 1,
        ..Tuning::default()
    };
    let mut engine = Engine::new(
        EngineOptions::new(1000.0, 600.0).seed(7).tuning(tuning),
        ManualClock::new(),
        RecordingPresenter::new(),
        MemoryStore::new(),
    )
    .unwrap();
    engine.select_difficulty("extreme").unwrap();
    engine.start().unwrap();

    let mut last_level = 1;
    for i in 0..40 {
        // Hold mid-screen by alternating climb and fall
        engine.set_touch(i % 3 == 0);
        step(&mut engine);
        assert_eq!(engine.phase(), GamePhase::Running);
        let session = engine.session();
        assert_eq!(session.level, level_for_score(session.score, 1));
        assert!(session.level >= last_level);
        last_level = session.level;
    }
    assert!(last_level >= 3);
}

#[test]
fn destroyed_obstacle_is_removed_after_21_ticks() {
    let viewport = Viewport::new(1000.0, 600.0).unwrap();
    let tuning = Tuning::default();
    let mut rng = Pcg32::seed_from_u64(3);

    let mut obstacles: Vec<_> = (1..=3)
        .map(|id| create_obstacle(&mut rng, id, 1, &viewport, palette_for_level(1), &tuning))
        .collect();
    assert_eq!(obstacles[1].x, 1000.0);
    obstacles[1].destroying = true;

    let retire = |obstacles: &mut Vec<Obstacle>| {
        obstacles.retain_mut(|o| !o.destroying || !advance_destroy(o, tuning.destroy_frames));
    };
    for _ in 0..20 {
        retire(&mut obstacles);
    }
    assert_eq!(obstacles.len(), 3);
    assert_eq!(obstacles[1].destroy_frame, 20);

    retire(&mut obstacles);
    assert_eq!(obstacles.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn rectangle_overlap_scenario() {
    let viewport = Viewport::new(1000.0, 600.0).unwrap();
    let mut rng = Pcg32::seed_from_u64(11);
    let mut rect = create_obstacle(
        &mut rng,
        1,
        1,
        &viewport,
        palette_for_level(1),
        &Tuning::default(),
    );
    rect.shape = ShapeKind::Rectangle;
    rect.animation = Animation::Fall;
    rect.x = 500.0;
    rect.y = 300.0;
    rect.width = 50.0;
    rect.height = 50.0;
    rect.scale = 1.0;

    let mut plane = Plane {
        x: 510.0,
        y: 310.0,
        width: 40.0,
        height: 20.0,
        speed: 0.0,
    };
    let obstacles = [rect];
    assert!(find_collision(&obstacles, &plane).is_some());

    plane.x = 600.0;
    assert!(find_collision(&obstacles, &plane).is_none());
}

#[test]
fn game_over_twice_matches_once() {
    let mut engine = started("medium");
    for _ in 0..10 {
        step(&mut engine);
    }
    engine.end_game(EndCause::Obstacle);
    let once = engine.session().clone();
    let reported = engine.presenter().game_over;

    engine.end_game(EndCause::Obstacle);
    assert_eq!(engine.session(), &once);
    assert_eq!(engine.presenter().game_over, reported);
}

#[test]
fn high_score_round_trips_and_never_decreases() {
    let mut store = MemoryStore::new();
    store.save_high_score(57).unwrap();
    assert_eq!(store.load_high_score().unwrap(), 57);

    let mut engine = engine_with(store);
    assert_eq!(engine.high_score(), 57);
    engine.select_difficulty("easy").unwrap();
    engine.start().unwrap();
    for _ in 0..30 {
        step(&mut engine);
    }
    assert!(engine.session().floored_score() < 57);
    assert_eq!(engine.high_score(), 57);
    assert_eq!(engine.high_score_store().load_high_score().unwrap(), 57);
}

#[test]
fn start_without_difficulty_is_refused() {
    let mut engine = engine_with(MemoryStore::new());
    let err = engine.handle(ControlEvent::StartRequested).unwrap_err();
    assert!(matches!(err, GameError::NoDifficultySelected));
    assert_eq!(engine.phase(), GamePhase::NotStarted);
    assert_eq!(engine.presenter().errors.len(), 1);

    step(&mut engine);
    assert_eq!(engine.session().score, 0.0);
    assert!(engine.obstacles().is_empty());
}

#[test]
fn missing_surface_prevents_construction() {
    let result = Engine::new(
        EngineOptions::new(800.0, f32::NAN),
        ManualClock::new(),
        RecordingPresenter::new(),
        MemoryStore::new(),
    );
    assert!(result.is_err());
}

#[test]
fn plane_is_always_drawn_and_obstacles_vanish_when_over() {
    let mut engine = started("hard");
    for _ in 0..5 {
        step(&mut engine);
        assert!(engine.presenter().plane_drawn());
    }
    assert!(engine.presenter().shapes_drawn() > 0);

    engine.end_game(EndCause::Ceiling);
    step(&mut engine);
    assert!(engine.presenter().plane_drawn());
    assert_eq!(engine.presenter().shapes_drawn(), 0);
    assert_eq!(engine.presenter().game_over.map(|(_, c)| c), Some(EndCause::Ceiling));
}

#[test]
fn replay_reuses_the_engine() {
    let mut engine = started("easy");
    while engine.phase() == GamePhase::Running {
        step(&mut engine);
    }
    engine.handle(ControlEvent::ResetRequested).unwrap();
    assert_eq!(engine.phase(), GamePhase::NotStarted);
    assert!(engine.session().end_cause.is_none());

    engine.handle(ControlEvent::StartRequested).unwrap();
    step(&mut engine);
    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(engine.session().level, 1);
}
