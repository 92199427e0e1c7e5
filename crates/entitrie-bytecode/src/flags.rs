//! Leading-word layout of an encoded trie node.
//!
//! ```text
//!  15 14 | 13 ........ 7 | 6 ....... 0
//!  VALUE |    BRANCH     |    JUMP
//! ```
//!
//! - VALUE: 0 none, 1 inline in bits 0-13, 2 one trailing word, 3 two trailing words
//! - BRANCH: 0 means at most one child reached implicitly, otherwise the table size
//! - JUMP: with BRANCH 0 the only admissible next character; otherwise the
//!   minimum key of a jump table, or 0 for a sorted dictionary

pub const VALUE_LENGTH: u16 = 0b1100_0000_0000_0000;
pub const BRANCH_LENGTH: u16 = 0b0011_1111_1000_0000;
pub const JUMP_TABLE: u16 = 0b0000_0000_0111_1111;

pub const VALUE_SHIFT: u32 = 14;
pub const BRANCH_SHIFT: u32 = 7;

/// Largest child count the 7-bit branch field can hold.
pub const MAX_BRANCHES: usize = 127;
/// Largest key usable as an implicit next character or jump-table minimum.
pub const MAX_JUMP_KEY: u16 = 127;
/// Largest code unit that fits inline next to the value bits.
pub const MAX_INLINE_VALUE: u16 = 0x3FFF;

/// How a node stores its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueLayout {
    None,
    Inline,
    Single,
    Pair,
}

impl ValueLayout {
    pub fn from_bits(bits: u16) -> Self {
        match bits {
            0 => Self::None,
            1 => Self::Inline,
            2 => Self::Single,
            3 => Self::Pair,
            _ => panic!("invalid value layout: {bits}"),
        }
    }

    /// Field bits, already shifted into position.
    pub fn to_word(self) -> u16 {
        let bits: u16 = match self {
            Self::None => 0,
            Self::Inline => 1,
            Self::Single => 2,
            Self::Pair => 3,
        };
        bits << VALUE_SHIFT
    }

    /// Words the value occupies after the leading word.
    pub fn trailing_words(self) -> usize {
        match self {
            Self::None | Self::Inline => 0,
            Self::Single => 1,
            Self::Pair => 2,
        }
    }
}

/// Outgoing edges of a node, as described by its leading word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchLayout {
    None,
    /// One child, stored immediately after this node.
    Single(u16),
    /// `len` slots for keys `min..min + len`, each holding `target + 1` or 0.
    JumpTable { min: u16, len: usize },
    /// `len` sorted keys followed by `len` target indices.
    Dictionary { len: usize },
}

impl BranchLayout {
    /// Field bits, already shifted into position.
    pub fn to_word(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Single(ch) => {
                assert!(
                    (1..=MAX_JUMP_KEY).contains(&ch),
                    "implicit key out of range: {ch}"
                );
                ch
            }
            Self::JumpTable { min, len } => {
                assert!(
                    (1..=MAX_JUMP_KEY).contains(&min),
                    "jump table minimum out of range: {min}"
                );
                assert!(
                    (1..=MAX_BRANCHES).contains(&len),
                    "jump table length out of range: {len}"
                );
                ((len as u16) << BRANCH_SHIFT) | min
            }
            Self::Dictionary { len } => {
                assert!(
                    (1..=MAX_BRANCHES).contains(&len),
                    "dictionary length out of range: {len}"
                );
                (len as u16) << BRANCH_SHIFT
            }
        }
    }

    /// Words of branch data following the value.
    pub fn data_words(self) -> usize {
        match self {
            Self::None | Self::Single(_) => 0,
            Self::JumpTable { len, .. } => len,
            Self::Dictionary { len } => len * 2,
        }
    }
}

/// View over the leading word of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeWord(pub u16);

impl NodeWord {
    #[inline]
    pub fn value_layout(self) -> ValueLayout {
        ValueLayout::from_bits(self.0 >> VALUE_SHIFT)
    }

    #[inline]
    pub fn branch_count(self) -> usize {
        ((self.0 & BRANCH_LENGTH) >> BRANCH_SHIFT) as usize
    }

    #[inline]
    pub fn jump(self) -> u16 {
        self.0 & JUMP_TABLE
    }

    /// Low 14 bits, meaningful only for [`ValueLayout::Inline`].
    #[inline]
    pub fn inline_value(self) -> u16 {
        self.0 & !VALUE_LENGTH
    }

    #[inline]
    pub fn has_value(self) -> bool {
        self.0 & VALUE_LENGTH != 0
    }

    /// Inline values take over the branch bits, so such nodes have no edges.
    pub fn branches(self) -> BranchLayout {
        if self.value_layout() == ValueLayout::Inline {
            return BranchLayout::None;
        }
        match (self.branch_count(), self.jump()) {
            (0, 0) => BranchLayout::None,
            (0, ch) => BranchLayout::Single(ch),
            (len, 0) => BranchLayout::Dictionary { len },
            (len, min) => BranchLayout::JumpTable { min, len },
        }
    }

    /// No character can be matched past this node.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self.branches() == BranchLayout::None
    }
}
