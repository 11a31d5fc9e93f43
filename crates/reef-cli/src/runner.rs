//! Timer-gated loop that advances and draws the simulation.

use crate::clock::Clock;
use crate::render::Renderer;
use anyhow::{Context, Result};
use reef_core::RunConfig;
use reef_world::Simulation;
use std::time::Duration;
use tracing::{debug, info};

/// Draw the initial grid, then apply one generation each time the tick
/// interval has passed. Returns once `max_ticks` generations have run;
/// otherwise runs until the future is dropped.
pub async fn run_loop<R: Renderer>(
    simulation: &mut Simulation,
    renderer: &mut R,
    config: &RunConfig,
) -> Result<()> {
    let interval = Duration::try_from_secs_f64(config.tick_interval_secs)
        .context("tick interval does not fit in a duration")?;

    renderer
        .render(simulation.grid())
        .context("failed to draw the grid")?;
    let mut clock = Clock::start();

    loop {
        if let Some(max_ticks) = config.max_ticks {
            if simulation.tick() >= max_ticks {
                info!(ticks = simulation.tick(), "Reached the generation limit");
                return Ok(());
            }
        }

        let remaining = clock.remaining(interval);
        if !remaining.is_zero() {
            tokio::time::sleep(remaining).await;
            continue;
        }

        let report = simulation.step();
        renderer
            .render(simulation.grid())
            .context("failed to draw the grid")?;
        clock.restart();
        debug!(
            tick = simulation.tick(),
            deaths = report.deaths,
            births = report.births,
            "Rendered generation"
        );

        // Give the shutdown signal a chance to run between generations.
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{frame, TerminalRenderer};
    use reef_core::WorldConfig;
    use reef_world::Grid;
    use std::io;

    /// Keeps every grid it was asked to draw
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Grid>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, grid: &Grid) -> io::Result<()> {
            self.frames.push(grid.clone());
            Ok(())
        }
    }

    fn config(max_ticks: u64) -> RunConfig {
        RunConfig {
            world: WorldConfig {
                width: 8,
                height: 6,
                rock_chance: 10,
                creature_chance: 50,
            },
            tick_interval_secs: 0.0,
            seed: Some(3),
            max_ticks: Some(max_ticks),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_runs_until_generation_limit() {
        let config = config(4);
        let mut simulation = Simulation::new(&config).unwrap();
        let mut recorder = Recorder::default();

        run_loop(&mut simulation, &mut recorder, &config).await.unwrap();

        assert_eq!(simulation.tick(), 4);
        assert_eq!(recorder.frames.len(), 5);
        assert_eq!(recorder.frames.last().unwrap(), simulation.grid());
    }

    #[tokio::test]
    async fn test_frames_follow_the_simulation() {
        let config = config(3);
        let mut simulation = Simulation::new(&config).unwrap();
        let mut expected = Simulation::new(&config).unwrap();
        let mut recorder = Recorder::default();

        run_loop(&mut simulation, &mut recorder, &config).await.unwrap();

        assert_eq!(&recorder.frames[0], expected.grid());
        for frame in &recorder.frames[1..] {
            expected.step();
            assert_eq!(frame, expected.grid());
        }
    }

    #[tokio::test]
    async fn test_zero_ticks_draws_initial_grid_only() {
        let config = config(0);
        let mut simulation = Simulation::new(&config).unwrap();
        let mut renderer = TerminalRenderer::without_clear(Vec::new());

        run_loop(&mut simulation, &mut renderer, &config).await.unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, frame(simulation.grid()));
    }

    #[tokio::test]
    async fn test_interval_paces_generations() {
        let config = RunConfig {
            tick_interval_secs: 0.02,
            ..config(3)
        };
        let mut simulation = Simulation::new(&config).unwrap();
        let mut recorder = Recorder::default();

        let started = std::time::Instant::now();
        run_loop(&mut simulation, &mut recorder, &config).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(60));
        assert_eq!(simulation.tick(), 3);
    }
}
