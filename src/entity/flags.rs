//! Modifier bitsets for functions and variables.

use bitflags::bitflags;

bitflags! {
    /// Modifiers of a function or method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionFlags: u32 {
        const PUBLIC = 1 << 1;
        const PRIVATE = 1 << 2;
        const PROTECTED = 1 << 3;
        const FINAL = 1 << 4;
        const STATIC = 1 << 5;
        const ABSTRACT = 1 << 6;

        const VISIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    }
}

bitflags! {
    /// Modifiers and roles of a variable, member, constant or parameter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VariableFlags: u32 {
        const PUBLIC = 1 << 1;
        const PRIVATE = 1 << 2;
        const PROTECTED = 1 << 3;
        const MEMBER = 1 << 4;
        const STATIC = 1 << 5;
        const CONST = 1 << 6;
        const FUNCTION_ARG = 1 << 7;
        /// Declared through `define()`
        const DEFINE = 1 << 8;

        const VISIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    }
}

impl FunctionFlags {
    /// Replace the visibility bits with `visibility`.
    pub fn with_visibility(self, visibility: FunctionFlags) -> Self {
        (self - Self::VISIBILITY) | (visibility & Self::VISIBILITY)
    }
}

impl VariableFlags {
    /// Replace the visibility bits with `visibility`.
    pub fn with_visibility(self, visibility: VariableFlags) -> Self {
        (self - Self::VISIBILITY) | (visibility & Self::VISIBILITY)
    }
}
