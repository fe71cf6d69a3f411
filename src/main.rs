//! Water Catch entry point
//!
//! Native builds run a headless demo session: the autopilot plays, a logging
//! presenter reports what happens, and the scheduler is driven in simulated
//! 30 ms frames.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::PathBuf;

    use clap::Parser;
    use water_catch::consts::PHYSICS_TICK_MS;
    use water_catch::sim::{DropKind, GamePhase};
    use water_catch::{Frame, GameConfig, Presenter, Session, autopilot, platform};

    /// Upper bound on simulated time for untimed runs (10 minutes)
    const MAX_DEMO_MS: u64 = 10 * 60 * 1000;

    /// Presenter that narrates the session through the logger
    #[derive(Default)]
    struct LogPresenter {
        last_time_left: Option<u32>,
        water: u32,
        bombs: u32,
    }

    impl Presenter for LogPresenter {
        fn on_session_start(&mut self) {
            log::info!("[music] background loop on");
        }

        fn on_frame(&mut self, frame: &Frame<'_>) {
            if frame.time_left != self.last_time_left {
                self.last_time_left = frame.time_left;
                if let Some(secs) = frame.time_left {
                    log::debug!(
                        "Time left: {}s, score {}, {} drops live",
                        secs,
                        frame.score,
                        frame.drops.len()
                    );
                }
            }
        }

        fn on_catch(&mut self, kind: DropKind) {
            match kind {
                DropKind::Water => {
                    self.water += 1;
                    log::info!("[sfx] collect");
                }
                DropKind::Bomb => {
                    self.bombs += 1;
                    log::info!("[sfx] bomb");
                }
            }
        }

        fn on_session_end(&mut self, final_score: i32, high_score: i32) {
            log::info!("[music] background loop off");
            println!("Final Score: {}", final_score);
            println!("High Score: {}", high_score);
            println!("Caught {} water, {} bombs", self.water, self.bombs);
        }

        fn on_pause_toggle(&mut self, paused: bool) {
            let state = if paused { "paused" } else { "resumed" };
            log::info!("[music] background loop {}", state);
        }
    }

    #[derive(Parser, Debug)]
    #[command(name = "water-catch")]
    #[command(about = "Headless Water Catch demo played by the autopilot")]
    struct Args {
        /// JSON config file (defaults apply to missing fields)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Spawner seed, reused for every session
        #[arg(long, value_name = "N")]
        seed: Option<u64>,
        /// End only on a score threshold, never by the clock
        #[arg(long)]
        untimed: bool,
    }

    pub fn run() -> std::process::ExitCode {
        platform::init_logging();

        let args = Args::parse();

        let mut config = match &args.config {
            Some(path) => GameConfig::load_from(path),
            None => GameConfig::load(),
        };
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        if args.untimed {
            config.timed = false;
        }

        log::info!("Water Catch (native demo) starting...");
        let mut session =
            Session::new(config, platform::default_store(), LogPresenter::default());
        session.start();

        let mut elapsed_ms: u64 = 0;
        while session.phase() == GamePhase::Playing && elapsed_ms < MAX_DEMO_MS {
            let step = autopilot::next_step(&session.frame());
            if let Some(step) = step {
                session.step_player(step);
            }
            session.advance(PHYSICS_TICK_MS);
            elapsed_ms += PHYSICS_TICK_MS as u64;
        }

        if session.phase() == GamePhase::Playing {
            log::warn!(
                "Demo stopped after {}s without reaching a threshold",
                elapsed_ms / 1000
            );
            session.pause();
        } else {
            log::info!(
                "Session over after {:.1}s simulated ({:?})",
                elapsed_ms as f64 / 1000.0,
                session.end_reason()
            );
        }
        std::process::ExitCode::SUCCESS
    }

    #[cfg(test)]
    mod tests {
        use clap::CommandFactory;

        use super::*;

        #[test]
        fn test_cli_definition() {
            Args::command().debug_assert();
        }

        #[test]
        fn test_cli_flags() {
            let args = Args::try_parse_from(["water-catch", "--seed=5", "--untimed"]).unwrap();
            assert_eq!(args.seed, Some(5));
            assert!(args.untimed);
            assert!(args.config.is_none());

            let args = Args::try_parse_from(["water-catch", "--config", "game.json"]).unwrap();
            assert_eq!(args.config, Some(PathBuf::from("game.json")));
            assert_eq!(args.seed, None);
            assert!(!args.untimed);
        }

        #[test]
        fn test_cli_rejects_bad_seed() {
            assert!(Args::try_parse_from(["water-catch", "--seed", "abc"]).is_err());
            assert!(Args::try_parse_from(["water-catch", "--frobnicate"]).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    demo::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts embed the library; this is just to satisfy the compiler
}
