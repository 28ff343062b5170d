use std::sync::{Arc, Mutex};
use std::time::Duration;

use pinfall::prelude::*;
use rand::Rng;
use tokio::sync::watch;
use tokio::time::Instant;

const FRAMES: u32 = 10;

// ---------------------------------------------------------------------------
// Simulated physics
// ---------------------------------------------------------------------------

/// Shared lane physics: one ball, one rack.
#[derive(Debug)]
struct LaneSim {
    standing: u8,
    knocked: u8,
    ball_stops_at: Instant,
    pins_settle_at: Instant,
}

impl LaneSim {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            standing: 10,
            knocked: 0,
            ball_stops_at: now,
            pins_settle_at: now,
        }
    }

    /// Rolls the ball: decides how long it travels and how many of the
    /// standing pins it takes down.
    fn roll(&mut self, force: Force) {
        let mut rng = rand::rng();
        let power = force.magnitude().clamp(0.5, 2.0);
        let aim = force.normalized().map(|n| n.x).unwrap_or(1.0);

        let accuracy = (1.0 - aim.abs() * 2.0).clamp(0.0, 1.0);
        let expected = f32::from(self.standing) * accuracy;
        let spread: f32 = rng.random_range(-2.0..=2.0);
        self.knocked = (expected + spread)
            .round()
            .clamp(0.0, f32::from(self.standing)) as u8;

        let now = Instant::now();
        self.ball_stops_at = now + Duration::from_secs_f32(2.5 / power);
        let wobble = if self.knocked > 0 {
            Duration::from_millis(rng.random_range(300..=2_000))
        } else {
            Duration::ZERO
        };
        self.pins_settle_at = self.ball_stops_at + wobble;
    }
}

type SharedSim = Arc<Mutex<LaneSim>>;

fn lock(sim: &SharedSim) -> Result<std::sync::MutexGuard<'_, LaneSim>, LaneError> {
    sim.lock()
        .map_err(|_| LaneError::Rejected("lane simulation poisoned".into()))
}

struct SimBall(SharedSim);

impl Ball for SimBall {
    fn launch(&mut self, force: Force) -> Result<(), LaneError> {
        lock(&self.0)?.roll(force);
        Ok(())
    }

    fn is_moving(&self) -> Result<bool, LaneError> {
        Ok(Instant::now() < lock(&self.0)?.ball_stops_at)
    }

    fn reset_to_start(&mut self) -> Result<(), LaneError> {
        lock(&self.0)?.ball_stops_at = Instant::now();
        Ok(())
    }
}

struct SimPins(SharedSim);

impl PinGroup for SimPins {
    fn pins_knocked_down(&self) -> Result<u8, LaneError> {
        Ok(lock(&self.0)?.knocked)
    }

    fn all_pins_stationary(&self) -> Result<bool, LaneError> {
        Ok(Instant::now() >= lock(&self.0)?.pins_settle_at)
    }

    fn reset_all_pins(&mut self) -> Result<(), LaneError> {
        let mut sim = lock(&self.0)?;
        sim.standing = 10;
        sim.knocked = 0;
        Ok(())
    }

    fn reset_only_standing_pins(&mut self) -> Result<(), LaneError> {
        let mut sim = lock(&self.0)?;
        sim.standing -= sim.knocked.min(sim.standing);
        sim.knocked = 0;
        Ok(())
    }
}

/// Publishes the lane's input switch to the bowler.
struct SimInput(watch::Sender<bool>);

impl InputGate for SimInput {
    fn set_input_enabled(&mut self, enabled: bool) {
        self.0.send_replace(enabled);
    }
}

// ---------------------------------------------------------------------------
// Bowler and scoreboard
// ---------------------------------------------------------------------------

/// A slightly erratic gesture: mostly straight, varying power.
fn gesture() -> Force {
    let mut rng = rand::rng();
    Force::new(
        rng.random_range(-0.35..=0.35),
        0.0,
        rng.random_range(0.8..=1.6),
    )
}

fn demo_config() -> TurnConfig {
    TurnConfig {
        next_throw_delay: Duration::from_millis(800),
        frame_end_delay: Duration::from_millis(1_200),
        reset_delay: Duration::from_millis(500),
        settle: SettleConfig {
            initial_delay: Duration::from_millis(500),
            ..SettleConfig::default()
        },
        ..TurnConfig::default()
    }
}

fn load_config(path: Option<String>) -> Result<TurnConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(demo_config()),
    }
}

async fn show_scoreboard(mut events: EventReceiver) {
    while let Some(event) = events.recv().await {
        match event {
            LaneEvent::ResultMessage { message } => println!("  {message}"),
            LaneEvent::ScoreChanged { total } => println!("  score {total}"),
            LaneEvent::FrameChanged { frame, throw } => {
                println!("frame {frame}, throw {throw}")
            }
            LaneEvent::FrameComplete { frame, score } => {
                println!("  frame {frame} done: {score}")
            }
        }
    }
}

/// Bowls until `frames` frames are complete and returns the final snapshot.
async fn play(
    config: TurnConfig,
    frames: u32,
    notifier: Notifier,
) -> Result<LaneInfo, PinfallError> {
    let sim: SharedSim = Arc::new(Mutex::new(LaneSim::new()));
    let (input_tx, mut input_rx) = watch::channel(false);
    let lane = spawn_lane(
        config,
        SimBall(sim.clone()),
        SimPins(sim),
        SimInput(input_tx),
        notifier,
    );

    loop {
        // The lane switches input off before acknowledging a launch, so
        // this only returns once the previous throw is fully handled.
        if input_rx.wait_for(|enabled| *enabled).await.is_err() {
            return Err(TurnError::Unavailable.into());
        }
        let info = lane.info().await?;
        if info.frames.len() as u32 >= frames {
            lane.shutdown().await?;
            return Ok(info);
        }
        if !lane.launch(gesture()).await? {
            tracing::debug!("launch ignored, retrying");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info")?;

    let config = load_config(std::env::args().nth(1))?;
    let (notifier, events) = Notifier::channel();
    let scoreboard = tokio::spawn(show_scoreboard(events));

    let info = play(config, FRAMES, notifier).await?;
    scoreboard.await?;

    println!("final: {}", info.scoreline);
    Ok(())
}
