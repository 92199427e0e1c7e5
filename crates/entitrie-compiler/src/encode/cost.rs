//! Branch form selection.
//!
//! The implicit single-child form is decided structurally by the encoder.
//! Everything else goes through a [`BranchCost`], which picks between a jump
//! table and a dictionary. The encoder overrides a jump-table choice that
//! the key range cannot express.

use std::collections::BTreeMap;

use entitrie_bytecode::{MAX_BRANCHES, MAX_JUMP_KEY};
use entitrie_core::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchForm {
    JumpTable,
    Dictionary,
}

/// Key statistics of one node's children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchShape {
    pub count: usize,
    pub min: u16,
    pub max: u16,
}

impl BranchShape {
    pub fn of(children: &BTreeMap<u16, NodeId>) -> Option<Self> {
        let (&min, _) = children.first_key_value()?;
        let (&max, _) = children.last_key_value()?;
        Some(Self {
            count: children.len(),
            min,
            max,
        })
    }

    /// Slots a jump table needs, one per key in `min..=max`.
    pub fn span(&self) -> usize {
        usize::from(self.max - self.min) + 1
    }

    pub fn jump_table_words(&self) -> usize {
        self.span()
    }

    pub fn dictionary_words(&self) -> usize {
        self.count * 2
    }

    /// The minimum key must fit the 7-bit jump field and be nonzero, and the
    /// slot count must fit the 7-bit branch field.
    pub fn fits_jump_table(&self) -> bool {
        (1..=MAX_JUMP_KEY).contains(&self.min) && self.span() <= MAX_BRANCHES
    }
}

pub trait BranchCost {
    fn select(&self, shape: &BranchShape) -> BranchForm;
}

/// Fewest branch words, ties to the jump table.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinWords;

impl BranchCost for MinWords {
    fn select(&self, shape: &BranchShape) -> BranchForm {
        if shape.jump_table_words() <= shape.dictionary_words() {
            BranchForm::JumpTable
        } else {
            BranchForm::Dictionary
        }
    }
}

/// Always request the same form.
impl BranchCost for BranchForm {
    fn select(&self, _shape: &BranchShape) -> BranchForm {
        *self
    }
}

impl<C: BranchCost + ?Sized> BranchCost for &C {
    fn select(&self, shape: &BranchShape) -> BranchForm {
        (**self).select(shape)
    }
}
