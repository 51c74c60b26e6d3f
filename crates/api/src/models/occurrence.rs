use super::position::Range;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Bitset of the roles a symbol plays at an occurrence (SCIP encoding).
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema,
)]
#[serde(transparent)]
pub struct SymbolRoles(u32);

impl SymbolRoles {
    pub const NONE: SymbolRoles = SymbolRoles(0);
    pub const DEFINITION: SymbolRoles = SymbolRoles(0x1);
    pub const IMPORT: SymbolRoles = SymbolRoles(0x2);
    pub const WRITE_ACCESS: SymbolRoles = SymbolRoles(0x4);
    pub const READ_ACCESS: SymbolRoles = SymbolRoles(0x8);
    pub const GENERATED: SymbolRoles = SymbolRoles(0x10);
    pub const TEST: SymbolRoles = SymbolRoles(0x20);
    pub const FORWARD_DEFINITION: SymbolRoles = SymbolRoles(0x40);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set.
    pub const fn contains(&self, other: SymbolRoles) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_definition(&self) -> bool {
        self.contains(Self::DEFINITION)
    }
}

impl BitOr for SymbolRoles {
    type Output = SymbolRoles;

    fn bitor(self, rhs: Self) -> Self::Output {
        SymbolRoles(self.0 | rhs.0)
    }
}

impl fmt::Display for SymbolRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(SymbolRoles, &str); 7] = [
            (SymbolRoles::DEFINITION, "definition"),
            (SymbolRoles::IMPORT, "import"),
            (SymbolRoles::WRITE_ACCESS, "write"),
            (SymbolRoles::READ_ACCESS, "read"),
            (SymbolRoles::GENERATED, "generated"),
            (SymbolRoles::TEST, "test"),
            (SymbolRoles::FORWARD_DEFINITION, "forward-definition"),
        ];

        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(role, _)| self.contains(*role))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

/// A source range annotated with symbol information.
///
/// Positional queries only ever look at `range`; the remaining fields are
/// carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub range: Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default)]
    pub symbol_roles: SymbolRoles,
}

impl Occurrence {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            symbol: None,
            symbol_roles: SymbolRoles::NONE,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_roles(mut self, roles: SymbolRoles) -> Self {
        self.symbol_roles = roles;
        self
    }

    pub fn is_definition(&self) -> bool {
        self.symbol_roles.is_definition()
    }
}
