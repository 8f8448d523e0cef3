// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Genome text parser.

One gene per line: a tag (`n` or `s`) followed by whitespace-separated
numbers in payload order. Lines starting with `#` are comments and blank
lines are skipped.

```text
# XOR
n 1 0 0 +0.0000
n 3 1 1 +0.0000
s 1 3 +0.5000
```

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::gene::Gene;
use super::genotype::Genome;
use crate::types::{EvoError, EvoResult};

const COMMENT_PREFIX: char = '#';

impl Genome {
    /// Parse a genome from text
    ///
    /// # Errors
    /// `Parse` (with the 1-based line number) for malformed lines,
    /// `InvalidGenome` if the genes do not form a consistent genome.
    pub fn parse(text: &str) -> EvoResult<Genome> {
        let mut genes = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            genes.push(parse_line(line).map_err(|message| EvoError::Parse {
                line: index + 1,
                message,
            })?);
        }
        Genome::new(genes)
    }

    /// Load a genome from a text file
    pub fn open(path: impl AsRef<Path>) -> EvoResult<Genome> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            EvoError::IoError(format!("failed to read genome {}: {}", path.display(), e))
        })?;
        let genome = Genome::parse(&text)?;
        debug!(
            path = %path.display(),
            genes = genome.len(),
            signature = %genome.signature(),
            "genome loaded"
        );
        Ok(genome)
    }
}

impl FromStr for Genome {
    type Err = EvoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genome::parse(s)
    }
}

fn parse_line(line: &str) -> Result<Gene, String> {
    let mut tokens = line.split_whitespace();
    let tag_token = tokens.next().ok_or_else(|| "empty gene line".to_string())?;

    let mut chars = tag_token.chars();
    let tag = match (chars.next(), chars.next()) {
        (Some(tag), None) => tag,
        _ => return Err(format!("invalid gene tag '{}'", tag_token)),
    };

    let dna = tokens
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| format!("invalid number '{}'", token))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    Gene::from_dna(tag, &dna).map_err(|e| match e {
        EvoError::InvalidArgument(message) => message,
        other => other.to_string(),
    })
}
