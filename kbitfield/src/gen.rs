//! Renders a resolved module as Rust source.

use std::collections::HashMap;

use proc_macro2::{Literal, Span, TokenStream};
use quote::{format_ident, quote};
use snafu::ResultExt;
use syn::{LitInt, Path};

use crate::error::{CapModuleSnafu, Result};
use crate::ir::{Capability, Item, Module, ResolvedBlock, ResolvedField, ResolvedUnion, ValueKind};

/// Renderer settings.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Module providing `CapTrait` and `RawCap`; capability blocks implement the trait when set.
    pub cap_module: Option<Path>,
    /// Named in the generated header.
    pub source_label: Option<String>,
}

impl Config {
    pub fn set_cap_module(&mut self, path: &str) -> Result<()> {
        let parsed = syn::parse_str::<Path>(path).context(CapModuleSnafu { path })?;
        self.cap_module = Some(parsed);
        Ok(())
    }
}

pub fn render(module: &Module, cfg: &Config) -> Result<String> {
    let items = module.items.iter().map(|item| match item {
        Item::Block(block) => generate_block(cfg, block),
        Item::Enum(union) => generate_union(union),
    });
    let file: syn::File = syn::parse2(quote! { #(#items)* })?;

    let mut text = match &cfg.source_label {
        Some(label) => format!("// Generated by kbitfield from {label}. Do not edit.\n\n"),
        None => "// Generated by kbitfield. Do not edit.\n\n".to_string(),
    };
    text.push_str(&prettyplease::unparse(&file));
    Ok(text)
}

fn hex(value: u64) -> LitInt {
    LitInt::new(&format!("{value:#X}"), Span::call_site())
}

fn generate_block(cfg: &Config, block: &ResolvedBlock) -> TokenStream {
    let name = format_ident!("{}", block.name);
    let words = Literal::usize_unsuffixed(block.words);
    let accessors = block.fields.iter().map(generate_accessors);

    let empty = match &block.capability {
        Some(Capability {
            enum_name,
            variant,
            discriminant,
        }) => {
            let enum_name = format_ident!("{}", enum_name);
            let variant = format_ident!("{}", variant);
            let with = format_ident!("with_{}", discriminant);
            let value = match block.field(discriminant).map(|field| field.kind) {
                Some(ValueKind::Bool) => quote! { (#enum_name::#variant as usize) != 0 },
                _ => quote! { #enum_name::#variant as usize },
            };
            quote! { Self([0; #words]).#with(#value) }
        }
        None => quote! { Self([0; #words]) },
    };

    // Raw construction would bypass the discriminant.
    let from_words = block.capability.is_none().then(|| {
        quote! {
            #[inline(always)]
            pub const fn from_words(words: [usize; #words]) -> Self {
                Self(words)
            }
        }
    });

    let cap_trait = match (&cfg.cap_module, &block.capability) {
        (Some(path), Some(_)) => Some(quote! {
            impl #path::CapTrait for #name {
                fn raw_cap(&self) -> #path::RawCap {
                    #path::RawCap::new(self.0)
                }
            }
        }),
        _ => None,
    };

    let doc = format!(
        " `{}`: {} word{}.",
        block.source_name,
        block.words,
        if block.words == 1 { "" } else { "s" },
    );
    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(C)]
        pub struct #name([usize; #words]);

        #[allow(dead_code)]
        impl #name {
            #[inline(always)]
            pub const fn empty() -> Self {
                #empty
            }

            #from_words

            #[inline(always)]
            pub const fn words(&self) -> &[usize; #words] {
                &self.0
            }

            #(#accessors)*
        }

        #cap_trait
    }
}

fn generate_accessors(field: &ResolvedField) -> TokenStream {
    let word = Literal::usize_unsuffixed(field.word_index);
    let shift = Literal::u32_unsuffixed(field.shift);
    let mask = hex(field.mask);

    let get = format_ident!("get_{}", field.name);
    let set = format_ident!("set_{}", field.name);
    let with = format_ident!("with_{}", field.name);
    let visibility = if field.is_public {
        quote! { pub }
    } else {
        quote! {}
    };

    let (ty, extract, widen) = match field.kind {
        ValueKind::Bool => (
            quote! { bool },
            quote! { ((self.0[#word] & #mask) >> #shift) == 1 },
            quote! { let value = value as usize; },
        ),
        ValueKind::Word => (
            quote! { usize },
            quote! { (self.0[#word] & #mask) >> #shift },
            quote! {},
        ),
    };

    let get_doc = match &field.tag_union {
        Some(union) => format!(" Reads `{}`, the [`{union}`] discriminant.", field.name),
        None => format!(" Reads `{}`.", field.name),
    };
    let with_doc = format!(" Returns a copy with `{}` replaced.", field.name);
    let set_doc = format!(" Overwrites `{}`.", field.name);

    quote! {
        #[doc = #get_doc]
        #[inline(always)]
        #[must_use]
        pub const fn #get(&self) -> #ty {
            #extract
        }

        #[doc = #with_doc]
        #[inline(always)]
        #[must_use]
        #visibility const fn #with(self, value: #ty) -> Self {
            #widen
            let mut words = self.0;
            words[#word] = (words[#word] & !#mask) | ((value << #shift) & #mask);
            Self(words)
        }

        #[doc = #set_doc]
        #[inline(always)]
        #visibility fn #set(&mut self, value: #ty) {
            *self = self.#with(value);
        }
    }
}

fn generate_union(union: &ResolvedUnion) -> TokenStream {
    let name = format_ident!("{}", union.name);

    // A repeated value cannot be a second variant, so later tags alias the first.
    let mut first_by_value = HashMap::new();
    let mut variants = Vec::new();
    let mut aliases = Vec::new();
    for tag in &union.tags {
        let tag_name = format_ident!("{}", tag.name);
        match first_by_value.get(&tag.value) {
            Some(first) => aliases.push(quote! { pub const #tag_name: Self = Self::#first; }),
            None => {
                let value = Literal::u64_unsuffixed(tag.value);
                variants.push(quote! { #tag_name = #value, });
                first_by_value.insert(tag.value, tag_name);
            }
        }
    }

    let alias_impl = (!aliases.is_empty()).then(|| {
        quote! {
            #[allow(non_upper_case_globals)]
            impl #name {
                #(#aliases)*
            }
        }
    });

    let doc = format!(" Discriminant values stored in `{}`.", union.tag_field);
    quote! {
        #[doc = #doc]
        #[repr(usize)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum #name {
            #(#variants)*
        }

        #alias_impl
    }
}
