// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# EONN Evolution & Genome Management

Handles the **genotype** side of EONN and the generational loop built on it:

- Genes and genomes (structurally keyed, always sorted)
- Genetic operators (mutation, crossover, distance)
- Genome text I/O and validation
- Embryogenesis (genome → [`eonn_neural::Network`])
- Organisms, pools and the evolutionary driver

## Separation of Concerns

```text
eonn-evolutionary (Genotype)     eonn-neural (Phenotype)
────────────────────────────     ───────────────────────
│ Gene / Genome           │  →   │ NetworkBuilder     │
│ Text I/O, validation    │      │ Network            │
│ Crossover / mutation    │      │ Propagation        │
│ Organism / Pool / loop  │      └────────────────────┘
└─────────────────────────┘
```

## Topology invariant

Genetic operators never change topology. Crossover and distance are only
defined between genomes whose structural key sequences are identical and fail
with [`EvoError::TopologyMismatch`] otherwise.

## Example

```rust
use eonn_evolutionary::{optimize, random, templates, OptimizeOptions, Pool};
use eonn_config::EvolutionConfig;

let mut rng = random::seeded_rng(Some(7));
let genome = templates::load_xor_genome()?;
let pool = Pool::spawn(&genome, 10, 0.5, 0.5, &mut rng)?;

let mut fitness = |network: &mut eonn_neural::Network| {
    let out = network.propagate(&[1.0, 0.0], Some(1)).map(|o| o[0]).unwrap_or(0.0);
    -(out - 1.0).powi(2)
};
let options = OptimizeOptions { epochs: 3, evals: 1, verbose: false };
let pool = optimize(pool, &mut fitness, &options, &EvolutionConfig::default(), &mut rng)?;
assert_eq!(pool.len(), 10);
# Ok::<(), eonn_evolutionary::EvoError>(())
```

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod embryogenesis;
pub mod evolution;
pub mod fitness;
pub mod genome;
pub mod organism;
pub mod pool;
pub mod random;
pub mod templates;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use embryogenesis::develop;
pub use evolution::{
    epoch, evaluate, optimize, optimize_with_observer, reproduce, select, EpochReport,
    OptimizeOptions,
};
pub use fitness::FitnessFunction;
pub use genome::{Gene, GeneKey, Genome, NeuronGene, SynapseGene, NEURON_TAG, SYNAPSE_TAG};
pub use organism::{compare_fitness, Organism, DEFAULT_MUTATE_REPLACE};
pub use pool::Pool;
pub use types::{EvoError, EvoResult};
pub use validator::{validate_genome, ValidationResult};
