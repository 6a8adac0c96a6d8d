use crate::core::constants::{BASE_ATTRIBUTE_VALUE, NUM_ATTRIBUTES};
use serde::{Deserialize, Serialize};

/// The five cultivation attribute axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeAxis {
    SpiritualPower,
    Physique,
    Consciousness,
    Comprehension,
    Luck,
}

impl AttributeAxis {
    pub fn all() -> [AttributeAxis; NUM_ATTRIBUTES] {
        [
            AttributeAxis::SpiritualPower,
            AttributeAxis::Physique,
            AttributeAxis::Consciousness,
            AttributeAxis::Comprehension,
            AttributeAxis::Luck,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeAxis::SpiritualPower => "Spiritual Power",
            AttributeAxis::Physique => "Physique",
            AttributeAxis::Consciousness => "Consciousness",
            AttributeAxis::Comprehension => "Comprehension",
            AttributeAxis::Luck => "Luck",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeAxis::SpiritualPower => 0,
            AttributeAxis::Physique => 1,
            AttributeAxis::Consciousness => 2,
            AttributeAxis::Comprehension => 3,
            AttributeAxis::Luck => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            values: [BASE_ATTRIBUTE_VALUE; NUM_ATTRIBUTES],
        }
    }

    pub fn get(&self, axis: AttributeAxis) -> u32 {
        self.values[axis.index()]
    }

    pub fn set(&mut self, axis: AttributeAxis, value: u32) {
        self.values[axis.index()] = value;
    }

    /// Adds `amount` to one axis, saturating at `u32::MAX`.
    pub fn add_to(&mut self, axis: AttributeAxis, amount: u32) {
        self.values[axis.index()] = self.values[axis.index()].saturating_add(amount);
    }

    /// Sum of all five axes. Used as the base of the combat power figure.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|v| *v as u64).sum()
    }
}
