// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mountain car: drive an underpowered car out of a valley.
//!
//! The network sees position and velocity and outputs a throttle, rounded to
//! {-1, 0, +1}. Fitness is `1 / ln(steps)`, so reaching the goal sooner
//! scores higher.

use eonn_config::{EonnConfig, EvolutionConfig, SpawnConfig};
use eonn_neural::Network;

pub const X_MIN: f64 = -1.2;
pub const X_MAX: f64 = 0.5;
pub const V_MIN: f64 = -0.07;
pub const V_MAX: f64 = 0.07;

/// Starting position at the bottom of the valley
pub const START_POSITION: f64 = -0.5354;

pub const MAX_STEPS: usize = 500;

/// Width of the [`draw`] track in characters
pub const TRACK_WIDTH: usize = 72;

/// Pool size of the mountain car benchmark
pub const POOL_SIZE: usize = 20;

/// Mutation deviation used to spawn the initial pool
pub const SPAWN_STD: f64 = 5.0;

/// Breeding parameters the mountain car benchmark runs with
pub fn evolution_config() -> EvolutionConfig {
    EvolutionConfig {
        keep: 5,
        mutate_prob: 0.9,
        mutate_frac: 0.2,
        mutate_std: 8.0,
        mutate_replace: 0.1,
        ..EvolutionConfig::default()
    }
}

/// Configuration the benchmark starts from when no configuration file exists
pub fn preset() -> EonnConfig {
    EonnConfig {
        evolution: evolution_config(),
        spawn: SpawnConfig {
            pool_size: POOL_SIZE,
            std: SPAWN_STD,
            ..SpawnConfig::default()
        },
        ..EonnConfig::default()
    }
}

fn bound(value: f64, lower: f64, upper: f64) -> f64 {
    value.min(upper).max(lower)
}

/// Throttle command of a raw network output
pub fn action(output: f64) -> i8 {
    bound(output, -1.0, 1.0).round() as i8
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: f64,
    pub velocity: f64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            position: START_POSITION,
            velocity: 0.0,
        }
    }
}

impl State {
    /// Advance one step under `action`
    ///
    /// Hitting the left wall stops the car.
    pub fn update(self, action: i8) -> State {
        let velocity = bound(
            self.velocity + 0.001 * f64::from(action) - 0.0025 * (3.0 * self.position).cos(),
            V_MIN,
            V_MAX,
        );
        let position = bound(self.position + velocity, X_MIN, X_MAX);
        let velocity = if position <= X_MIN { 0.0 } else { velocity };
        State { position, velocity }
    }

    pub fn at_goal(&self) -> bool {
        self.position >= X_MAX
    }
}

/// One line of ASCII art: the track with the car drawn as its action
/// (`0` coast, `>` forward, `<` reverse)
pub fn draw(state: &State, action: i8) -> String {
    let cell = (X_MIN - state.position).abs() / ((X_MIN - X_MAX).abs() / TRACK_WIDTH as f64);
    let car = cell as usize;
    let glyph = match action {
        1 => '>',
        -1 => '<',
        _ => '0',
    };
    (0..TRACK_WIDTH)
        .map(|i| if i == car { glyph } else { '-' })
        .collect()
}

/// Outcome of one episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Episode {
    /// Steps taken before reaching the goal (or `max_steps`)
    pub steps: usize,
    pub reached_goal: bool,
}

/// Drive the car with `network` for at most `max_steps` steps
///
/// `observer` sees every state with the action chosen in it. Returns `None`
/// if the network does not have two inputs and at least one output.
pub fn run<O>(network: &mut Network, max_steps: usize, mut observer: O) -> Option<Episode>
where
    O: FnMut(&State, i8),
{
    let mut state = State::default();
    let mut steps = 0;
    for _ in 0..max_steps {
        let outputs = network.propagate(&[state.position, state.velocity], None).ok()?;
        let throttle = action(*outputs.first()?);
        observer(&state, throttle);
        state = state.update(throttle);
        if state.at_goal() {
            return Some(Episode {
                steps,
                reached_goal: true,
            });
        }
        steps += 1;
    }
    Some(Episode {
        steps,
        reached_goal: false,
    })
}

/// Score of an episode length; fewer steps score higher
pub fn score(steps: usize) -> f64 {
    1.0 / (steps.max(2) as f64).ln()
}

/// `1 / ln(steps)` over one episode of [`MAX_STEPS`]; NaN for networks that
/// do not fit the task
pub fn fitness(network: &mut Network) -> f64 {
    match run(network, MAX_STEPS, |_, _| {}) {
        Some(episode) => score(episode.steps),
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eonn_evolutionary::{develop, templates, Gene, Genome};
    use eonn_neural::{ActivationFunction, NeuronPosition};

    /// Output = weight · velocity: push in the direction of motion
    fn energy_pumping(weight: f64) -> Network {
        let genome = Genome::new(vec![
            Gene::neuron(1, NeuronPosition::Input, ActivationFunction::Sum, 0.0),
            Gene::neuron(2, NeuronPosition::Input, ActivationFunction::Sum, 0.0),
            Gene::neuron(3, NeuronPosition::Output, ActivationFunction::Sum, 0.0),
            Gene::synapse(2, 3, weight),
        ])
        .unwrap();
        develop(&genome).unwrap()
    }

    #[test]
    fn test_action_rounding() {
        assert_eq!(action(0.2), 0);
        assert_eq!(action(0.7), 1);
        assert_eq!(action(-42.0), -1);
        assert_eq!(action(-0.5), -1);
    }

    #[test]
    fn test_left_wall_stops_car() {
        let state = State {
            position: X_MIN + 0.01,
            velocity: V_MIN,
        };
        let next = state.update(-1);
        assert_eq!(next.position, X_MIN);
        assert_eq!(next.velocity, 0.0);
    }

    #[test]
    fn test_idle_car_never_escapes() {
        let mut network = develop(&templates::load_mountain_car_genome().unwrap()).unwrap();
        let episode = run(&mut network, MAX_STEPS, |_, _| {}).unwrap();
        assert_eq!(
            episode,
            Episode {
                steps: MAX_STEPS,
                reached_goal: false
            }
        );
        assert_eq!(fitness(&mut network), score(MAX_STEPS));
    }

    #[test]
    fn test_energy_pumping_reaches_goal() {
        let mut network = energy_pumping(1.0e6);
        let episode = run(&mut network, MAX_STEPS, |_, _| {}).unwrap();
        assert!(episode.reached_goal);
        assert!(fitness(&mut network) > score(MAX_STEPS));
    }

    #[test]
    fn test_draw() {
        let line = draw(&State::default(), 1);
        assert_eq!(line.chars().count(), TRACK_WIDTH);
        assert_eq!(line.chars().filter(|&c| c == '>').count(), 1);
        assert!(draw(&State { position: X_MIN, velocity: 0.0 }, -1).starts_with('<'));
    }

    #[test]
    fn test_observer_sees_every_step() {
        let mut network = develop(&templates::load_mountain_car_genome().unwrap()).unwrap();
        let mut seen = 0;
        run(&mut network, 25, |_, _| seen += 1).unwrap();
        assert_eq!(seen, 25);
    }
}
