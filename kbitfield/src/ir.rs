//! Resolved intermediate representation handed to the renderer.


/// Every resolved declaration, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    pub items: Vec<Item>,
}

impl Module {
    pub fn blocks(&self) -> impl Iterator<Item = &ResolvedBlock> {
        self.items.iter().filter_map(|item| match item {
            Item::Block(block) => Some(block),
            Item::Enum(_) => None,
        })
    }

    pub fn unions(&self) -> impl Iterator<Item = &ResolvedUnion> {
        self.items.iter().filter_map(|item| match item {
            Item::Enum(union) => Some(union),
            Item::Block(_) => None,
        })
    }

    /// Looks up a block by its generated type name.
    pub fn block(&self, name: &str) -> Option<&ResolvedBlock> {
        self.blocks().find(|block| block.name == name)
    }

    /// Looks up a union by its generated type name.
    pub fn union(&self, name: &str) -> Option<&ResolvedUnion> {
        self.unions().find(|union| union.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Block(ResolvedBlock),
    Enum(ResolvedUnion),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedBlock {
    /// Generated type name.
    pub name: String,
    /// Name as written in the description.
    pub source_name: String,
    /// Declared parameter list, carried through unchanged.
    pub params: Vec<String>,
    pub words: usize,
    pub fields: Vec<ResolvedField>,
    pub capability: Option<Capability>,
}

impl ResolvedBlock {
    pub fn field(&self, name: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Construction-time discriminant of a capability block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capability {
    /// The capability type enumeration.
    pub enum_name: String,
    /// The enumeration variant naming this block.
    pub variant: String,
    /// The resolved name of the discriminant field.
    pub discriminant: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Word,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub word_index: usize,
    /// True offset of the lowest stored bit from bit zero of the block.
    pub bit_offset: u32,
    pub declared_bits: u32,
    /// Accessor shift within the word.
    pub shift: u32,
    /// Accessor width.
    pub width: u32,
    /// In-word mask, already shifted.
    pub mask: u64,
    pub kind: ValueKind,
    /// Whether the setter is part of the public API.
    pub is_public: bool,
    /// Declared with `field_high`.
    pub high: bool,
    /// The union whose discriminant this field stores, if any.
    pub tag_union: Option<String>,
}

impl ResolvedField {
    /// Reads the field the same way the generated getter does.
    pub fn get(&self, words: &[u64]) -> u64 {
        (words[self.word_index] & self.mask) >> self.shift
    }

    /// Writes the field the same way the generated setter does.
    ///
    /// Bits of `value` that fall outside the field are discarded.
    pub fn set(&self, words: &mut [u64], value: u64) {
        let word = &mut words[self.word_index];
        *word = (*word & !self.mask) | ((value << self.shift) & self.mask);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedUnion {
    /// Generated enumeration name.
    pub name: String,
    /// The field that stores this union's discriminant.
    pub tag_field: String,
    pub tags: Vec<ResolvedTag>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTag {
    pub name: String,
    pub value: u64,
}
