//! # EONN - Evolutionary Optimization of Neural Networks
//!
//! EONN evolves the weights and biases of neural networks whose topology is
//! fixed by a prototype genome. A pool of organisms is bred generation after
//! generation with tournament selection, averaging/uniform crossover, gaussian
//! mutation and optional elitism, scored by a user-supplied fitness function.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! eonn = "0.1"  # Default: library + benchmark tasks
//! ```
//!
//! ## Feature Flags
//!
//! - **`tasks`** (default): XOR and mountain car fitness functions, and the
//!   `xor` / `mountain_car` binaries driving them
//! - **`file-logging`**: JSON log file per run (see `eonn-observability`)
//!
//! ## Usage Example
//!
//! ```rust
//! use eonn::prelude::*;
//!
//! let mut rng = seeded_rng(Some(1));
//! let genome = eonn::evolutionary::templates::load_xor_genome()?;
//! let pool = Pool::spawn(&genome, 10, 0.5, 0.5, &mut rng)?;
//!
//! let mut fitness = eonn::tasks::xor::fitness;
//! let options = OptimizeOptions { epochs: 5, evals: 1, verbose: false };
//! let pool = optimize(pool, &mut fitness, &options, &EvolutionConfig::default(), &mut rng)?;
//!
//! let champion = pool.champion().expect("pool is never empty");
//! println!("best fitness {}\n{}", champion, champion.genome());
//! # Ok::<(), eonn::evolutionary::EvoError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: eonn-config                                │
//! │  (EvolutionConfig, TOML + env + CLI overrides)          │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Genotype & evolution: eonn-evolutionary                │
//! │  (Gene, Genome, Organism, Pool, optimize)               │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Phenotype: eonn-neural                                 │
//! │  (Network, propagation)                                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Logging for binaries lives in `eonn-observability`.
//!
//! ## License
//!
//! Apache-2.0

// Re-export foundation
pub use eonn_config as config;

// Re-export phenotype and genotype
pub use eonn_evolutionary as evolutionary;
pub use eonn_neural as neural;

// Re-export infrastructure
pub use eonn_observability as observability;

pub mod cli;

#[cfg(feature = "tasks")]
pub mod tasks;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::config::{EonnConfig, EvolutionConfig};
    pub use crate::evolutionary::random::seeded_rng;
    pub use crate::evolutionary::{
        develop, epoch, evaluate, optimize, optimize_with_observer, reproduce, select,
        EpochReport, EvoError, EvoResult, FitnessFunction, Gene, Genome, OptimizeOptions,
        Organism, Pool,
    };
    pub use crate::neural::{ActivationFunction, Network, NeuronId, NeuronPosition};
}
