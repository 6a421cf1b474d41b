//! Where a run goes.
//!
//! A run is the ordered list of [`Step`]s. The builder never talks to hardware; it hands the
//! program to an [`ExecutionSink`].

use super::instruction::{BlockId, Direction};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub block: BlockId,
    pub name: String,
    pub direction: Direction,
    pub motor_indices: Vec<usize>,
    pub motors: Vec<u8>,
    pub duration: String,
}

pub trait ExecutionSink {
    fn execute(&mut self, program: &[Step]);
}

/// Console line for one step: `direction: 0 motors: [1, 2] duration: 1`.
pub fn format_step(step: &Step) -> String {
    format!(
        "direction: {} motors: {:?} duration: {}",
        step.direction, step.motors, step.duration
    )
}

pub fn write_program<W: Write>(out: &mut W, program: &[Step]) -> io::Result<()> {
    for step in program {
        writeln!(out, "{}", format_step(step))?;
    }
    Ok(())
}

/// Keeps every emitted program for the session.
///
/// The terminal is in raw mode while the builder runs, so programs are logged and shown on the
/// canvas, then written out with [`RunLog::write_to`] once the terminal is restored.
#[derive(Debug, Default)]
pub struct RunLog {
    runs: Vec<Vec<Step>>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> &[Vec<Step>] {
        &self.runs
    }

    pub fn last(&self) -> Option<&[Step]> {
        self.runs.last().map(Vec::as_slice)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (n, program) in self.runs.iter().enumerate() {
            writeln!(out, "run {}:", n + 1)?;
            write_program(out, program)?;
        }
        out.flush()
    }
}

impl ExecutionSink for RunLog {
    fn execute(&mut self, program: &[Step]) {
        match serde_json::to_string(program) {
            Ok(json) => tracing::info!(steps = program.len(), program = %json, "run"),
            Err(err) => tracing::warn!(steps = program.len(), error = %err, "run (unserializable)"),
        }
        self.runs.push(program.to_vec());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/sink.rs"]
mod tests;
