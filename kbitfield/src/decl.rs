//! Resolves a parsed description into the IR.
//!
//! Resolution happens in two passes. The first builds a [`NameTable`] over every top-level
//! declaration, so a block may refer to a union declared anywhere in the file. The second resolves
//! each block and union independently against that table.

use std::collections::{HashMap, HashSet};

use crate::ast::{Block, File, Item, TaggedUnion};
use crate::error::{Error, Result};
use crate::ir::{self, Capability, Module, ResolvedBlock, ResolvedField, ResolvedTag, ResolvedUnion, ValueKind};
use crate::naming::{camelize, strip_prefix, underscore};
use crate::pack::{pack, FieldKind};

/// Names that select the capability rules.
#[derive(Clone, Debug)]
pub struct Policy {
    /// The union enumerating capability types.
    pub capability_union: &'static str,
    /// What that union is renamed to before camelizing.
    pub capability_type: &'static str,
    /// Blocks whose names end with this are capabilities.
    pub capability_suffix: &'static str,
    /// Prefix stripped from field names.
    pub field_prefix: &'static str,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            capability_union: "cap",
            capability_type: "cap_type",
            capability_suffix: "_cap",
            field_prefix: "cap",
        }
    }
}

impl Policy {
    fn union_type_name(&self, name: &str) -> String {
        if name == self.capability_union {
            camelize(self.capability_type)
        } else {
            camelize(name)
        }
    }
}

struct CapabilityUnion<'a> {
    type_name: String,
    tag_field: &'a str,
    variants: HashMap<String, u64>,
}

/// Cross-references gathered from every top-level declaration.
pub struct NameTable<'a> {
    by_tag_field: HashMap<&'a str, String>,
    capability: Option<CapabilityUnion<'a>>,
}

impl<'a> NameTable<'a> {
    pub fn build(file: &File<'a>, policy: &Policy) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut by_tag_field = HashMap::new();
        let mut capability = None;
        for item in &file.items {
            let type_name = match item {
                Item::Block(block) => camelize(block.name),
                Item::TaggedUnion(union) => {
                    let type_name = policy.union_type_name(union.name);
                    by_tag_field
                        .entry(union.tag_field)
                        .or_insert_with(|| type_name.clone());
                    if union.name == policy.capability_union {
                        capability = Some(CapabilityUnion {
                            type_name: type_name.clone(),
                            tag_field: union.tag_field,
                            variants: union
                                .tags
                                .iter()
                                .map(|tag| (camelize(tag.name), tag.value))
                                .collect(),
                        });
                    }
                    type_name
                }
            };
            if !seen.insert(type_name.clone()) {
                return Err(Error::DuplicateName { name: type_name });
            }
        }
        Ok(Self {
            by_tag_field,
            capability,
        })
    }

    /// The union whose discriminant is stored in fields named `field`.
    pub fn union_for_field(&self, field: &str) -> Option<&str> {
        self.by_tag_field.get(field).map(String::as_str)
    }

    fn capability_union(&self, block: &str, variant: &str, policy: &Policy) -> Result<&CapabilityUnion<'a>> {
        let union = self.capability.as_ref().ok_or_else(|| Error::Discriminant {
            block: block.to_string(),
            message: format!("no `{}` tagged union is declared", policy.capability_union),
        })?;
        if !union.variants.contains_key(variant) {
            return Err(Error::Discriminant {
                block: block.to_string(),
                message: format!("`{}` has no `{variant}` tag", union.type_name),
            });
        }
        Ok(union)
    }
}

/// Resolves every declaration in `file`, in order.
pub fn resolve(file: &File<'_>, policy: &Policy) -> Result<Module> {
    let names = NameTable::build(file, policy)?;
    let items = file
        .items
        .iter()
        .map(|item| match item {
            Item::Block(block) => resolve_block(block, &names, policy).map(ir::Item::Block),
            Item::TaggedUnion(union) => Ok(ir::Item::Enum(resolve_union(union, policy)?)),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Module { items })
}

fn resolve_block(block: &Block<'_>, names: &NameTable<'_>, policy: &Policy) -> Result<ResolvedBlock> {
    let name = camelize(block.name);
    let packed = pack(block)?;

    let capability_union = if block.name.ends_with(policy.capability_suffix) {
        Some(names.capability_union(block.name, &name, policy)?)
    } else {
        None
    };

    let mut seen = HashSet::new();
    let mut capability = None;
    let mut fields = Vec::with_capacity(packed.fields.len());
    for field in packed.fields {
        let resolved_name = underscore(strip_prefix(field.name, policy.field_prefix));
        if !seen.insert(resolved_name.clone()) {
            return Err(Error::DuplicateField {
                block: block.name.to_string(),
                field: resolved_name,
            });
        }

        let is_discriminant = match capability_union {
            Some(union) if field.name == union.tag_field => {
                let value = union.variants.get(&name).copied().unwrap_or_default();
                if value & !(field.mask >> field.shift) != 0 {
                    return Err(Error::Discriminant {
                        block: block.name.to_string(),
                        message: format!("tag value {value} does not fit in `{}`", field.name),
                    });
                }
                capability = Some(Capability {
                    enum_name: union.type_name.clone(),
                    variant: name.clone(),
                    discriminant: resolved_name.clone(),
                });
                true
            }
            _ => false,
        };

        fields.push(ResolvedField {
            name: resolved_name,
            word_index: field.word_index,
            bit_offset: field.bit_offset,
            declared_bits: field.declared_bits,
            shift: field.shift,
            width: field.width,
            mask: field.mask,
            kind: if field.width == 1 {
                ValueKind::Bool
            } else {
                ValueKind::Word
            },
            is_public: !is_discriminant,
            high: field.kind == FieldKind::High,
            tag_union: names.union_for_field(field.name).map(str::to_string),
        });
    }

    if let (Some(union), None) = (capability_union, &capability) {
        return Err(Error::Discriminant {
            block: block.name.to_string(),
            message: format!("missing discriminant field `{}`", union.tag_field),
        });
    }

    Ok(ResolvedBlock {
        name,
        source_name: block.name.to_string(),
        params: block.params.iter().map(|param| param.to_string()).collect(),
        words: packed.words,
        fields,
        capability,
    })
}

fn resolve_union(union: &TaggedUnion<'_>, policy: &Policy) -> Result<ResolvedUnion> {
    let name = policy.union_type_name(union.name);
    if union.tags.is_empty() {
        return Err(Error::EmptyUnion { union: name });
    }
    let mut seen = HashSet::new();
    let tags = union
        .tags
        .iter()
        .map(|tag| {
            let tag_name = camelize(tag.name);
            if !seen.insert(tag_name.clone()) {
                return Err(Error::DuplicateTag {
                    union: name.clone(),
                    tag: tag_name,
                });
            }
            Ok(ResolvedTag {
                name: tag_name,
                value: tag.value,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ResolvedUnion {
        name,
        tag_field: union.tag_field.to_string(),
        tags,
    })
}
