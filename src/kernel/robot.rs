/// The hardware a program is meant for. Blocks refer to motors by index; the robot maps an
/// index to the motor number the hardware uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Robot {
    motors: Vec<u8>,
}

impl Robot {
    pub fn new(motors: Vec<u8>) -> Self {
        Self { motors }
    }

    pub fn motors(&self) -> &[u8] {
        &self.motors
    }

    /// Motor numbers for `indices`. Indices the robot does not have are skipped.
    pub fn resolve(&self, indices: &[usize]) -> Vec<u8> {
        indices
            .iter()
            .filter_map(|&i| self.motors.get(i).copied())
            .collect()
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(vec![1, 2, 3])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/robot.rs"]
mod tests;
