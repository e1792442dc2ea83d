//! Variant resolver
//!
//! Table-driven class selection for components with kinds and sizes.
//! Tables are plain `const` data, so they are immutable and shareable
//! across threads without initialization.

use crate::classes::cn;

/// One variant axis (e.g. `size`) and its choices
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Variant name
    pub name: &'static str,
    /// Choice used when the caller gives none or an unknown one
    pub default: &'static str,
    /// Choice → class string
    pub choices: &'static [(&'static str, &'static str)],
}

impl Variant {
    /// Classes for a choice, falling back to the default choice
    pub fn classes(&self, choice: &str) -> &'static str {
        self.lookup(choice)
            .or_else(|| self.lookup(self.default))
            .unwrap_or("")
    }

    fn lookup(&self, choice: &str) -> Option<&'static str> {
        self.choices
            .iter()
            .find(|(c, _)| *c == choice)
            .map(|(_, classes)| *classes)
    }
}

/// Variant table: base classes plus variant axes
#[derive(Debug, Clone, Copy)]
pub struct VariantConfig {
    /// Classes always applied
    pub base: &'static str,
    /// Axes, applied in declaration order
    pub variants: &'static [Variant],
}

impl VariantConfig {
    /// Resolve `base + selected variants + extra`.
    ///
    /// `selected` holds `(variant name, choice)` pairs; missing names use the
    /// default choice and the right-most pair wins for repeated names.
    pub fn resolve(&self, selected: &[(&str, &str)], extra: &str) -> String {
        let mut parts = Vec::with_capacity(self.variants.len() + 2);
        parts.push(self.base);
        for variant in self.variants {
            let choice = selected
                .iter()
                .rev()
                .find(|(name, _)| *name == variant.name)
                .map(|(_, choice)| *choice)
                .unwrap_or(variant.default);
            parts.push(variant.classes(choice));
        }
        parts.push(extra);
        cn(parts)
    }

    /// Find an axis by name
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: VariantConfig = VariantConfig {
        base: "btn",
        variants: &[
            Variant {
                name: "variant",
                default: "default",
                choices: &[("default", "bg-primary"), ("ghost", "bg-transparent")],
            },
            Variant {
                name: "size",
                default: "md",
                choices: &[("sm", "h-8"), ("md", "h-9")],
            },
        ],
    };

    #[test]
    fn test_defaults() {
        assert_eq!(TABLE.resolve(&[], ""), "btn bg-primary h-9");
    }

    #[test]
    fn test_selected_and_extra() {
        assert_eq!(
            TABLE.resolve(&[("size", "sm"), ("variant", "ghost")], "w-full"),
            "btn bg-transparent h-8 w-full"
        );
    }

    #[test]
    fn test_unknown_choice_falls_back() {
        assert_eq!(TABLE.resolve(&[("variant", "neon")], ""), "btn bg-primary h-9");
    }

    #[test]
    fn test_last_selection_wins() {
        assert_eq!(TABLE.resolve(&[("size", "md"), ("size", "sm")], ""), "btn bg-primary h-8");
    }
}
