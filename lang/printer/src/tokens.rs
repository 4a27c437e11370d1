//! This module contains the symbols and keywords of the surface language.
//! These constants are used when we prettyprint source code.

// Symbols
//
//

/// The symbol `=>`
pub const FAT_ARROW: &str = "=>";

/// The symbol `->`
pub const ARROW: &str = "->";

/// The symbol `\`
pub const BACKSLASH: &str = "\\";

/// The symbol `,`
pub const COMMA: &str = ",";

/// The symbol `:`
pub const COLON: &str = ":";

/// The symbol `.`
pub const DOT: &str = ".";

/// The symbol `=`
pub const EQUALS: &str = "=";

/// The symbol `@`
pub const AT: &str = "@";

/// The symbol `&&`
pub const AND: &str = "&&";

/// The symbol `||`
pub const OR: &str = "||";

/// The symbol `*`
pub const TIMES: &str = "*";

/// The symbol `+`
pub const PLUS: &str = "+";

/// The symbol `++`
pub const APPEND: &str = "++";

// Keywords
//
//

/// The keyword `fn`
pub const FN: &str = "fn";

/// The keyword `let`
pub const LET: &str = "let";

/// The keyword `in`
pub const IN: &str = "in";

/// The keyword `if`
pub const IF: &str = "if";

/// The keyword `then`
pub const THEN: &str = "then";

/// The keyword `else`
pub const ELSE: &str = "else";

/// The keyword `merge`
pub const MERGE: &str = "merge";

/// The keyword `true`
pub const TRUE: &str = "true";

/// The keyword `false`
pub const FALSE: &str = "false";
