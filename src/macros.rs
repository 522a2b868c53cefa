//! Utility macros for building grammars.
//!
//! - `MK_GRAMMAR!` - Creates a Grammar from a table of operators

/// Creates a Grammar from `symbol => rank` entries.
///
/// Operators associate left-to-right unless the entry ends with
/// `as Right`. Expands to a `Result<Grammar, GrammarError>`.
///
/// # Example
///
/// ```ignore
/// let grammar = MK_GRAMMAR! {
///     "+" => 0,
///     "*" => 1,
///     "^" => 2 as Right,
/// }?;
/// ```
#[macro_export]
macro_rules! MK_GRAMMAR {
    (@associativity) => {
        $crate::grammar::grammar::Associativity::Left
    };
    (@associativity $associativity:ident) => {
        $crate::grammar::grammar::Associativity::$associativity
    };
    ($($symbol:literal => $rank:literal $(as $associativity:ident)?),* $(,)?) => {{
        let grammar = Ok::<_, $crate::errors::errors::GrammarError>(
            $crate::grammar::grammar::Grammar::empty(),
        );
        $(
            let grammar = grammar.and_then(|grammar| {
                grammar.with_operator(
                    $symbol,
                    $rank,
                    $crate::MK_GRAMMAR!(@associativity $($associativity)?),
                )
            });
        )*
        grammar
    }};
}
