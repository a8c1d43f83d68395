//! Domain constants shared by the tree, the resolver and the driver.

/// Name carried by an inner application (decorator) object.
pub const DECORATOR_SENTINEL: &str = "@";

/// Base reference pointing at the object two levels up.
pub const PARENT_MARKER: &str = "^";

/// Base reference pointing at the object itself.
pub const SELF_MARKER: &str = "$";

/// Prefix of a dot-chain base reference (`.name`).
pub const DOT_PREFIX: char = '.';

/// Number of passes the iteration driver runs before giving up.
pub const DEFAULT_MAX_PASSES: usize = 6;

/// Package used for objects loaded without a package declaration.
pub const ROOT_PACKAGE: &str = "";

/// Separator between segments of a package-qualified name.
pub const PACKAGE_SEPARATOR: char = '.';
