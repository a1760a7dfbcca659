//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens
//! - `MK_AST_NODE!` - Registers node structs as variants of the AST arena

/// Creates a Token instance from a kind and a byte range.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, 4, 6);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            span: Span::new($start as u32, $end as u32),
        }
    };
}

/// Creates a lexer handler that emits one token covering the whole match.
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let start = lexer.pos;
            lexer.push(MK_TOKEN!($kind, start, start + matched.len()));
            lexer.advance_n(matched.len());
        }
    };
}

/// Implements `AstNode` for each struct, tying it to the `Node` variant
/// of the same name.
#[macro_export]
macro_rules! MK_AST_NODE {
    ($($name:ident),* $(,)?) => {
        $(
            impl AstNode for $name {
                const NAME: &'static str = stringify!($name);

                fn into_node(self) -> Node {
                    Node::$name(self)
                }

                fn from_node(node: &Node) -> Option<&Self> {
                    match node {
                        Node::$name(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
                    match node {
                        Node::$name(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn span(&self) -> TokenRange {
                    self.span
                }
            }
        )*
    };
}
