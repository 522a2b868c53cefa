use std::{
    collections::{BTreeSet, HashMap},
    fmt::{self, Debug},
    sync::Arc,
};

use lazy_static::lazy_static;

use crate::errors::errors::GrammarError;

use super::operand::{NumericOperand, OperandRecognizer};

lazy_static! {
    pub static ref DEFAULT_PRECEDENCE: HashMap<&'static str, OperatorInfo> = {
        let mut map = HashMap::new();
        map.insert("^", OperatorInfo::new(2, Associativity::Right)); // raise
        map.insert("*", OperatorInfo::new(1, Associativity::Left));
        map.insert("/", OperatorInfo::new(1, Associativity::Left));
        map.insert("%", OperatorInfo::new(1, Associativity::Left));
        map.insert("+", OperatorInfo::new(0, Associativity::Left));
        map.insert("-", OperatorInfo::new(0, Associativity::Left));
        map
    };
}

/// Binding strength of a symbol.
///
/// Parentheses rank above every operator so a stacked open parenthesis is
/// never reduced by comparison.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Rank(i32),
    Parenthesis,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct OperatorInfo {
    pub rank: i32,
    pub associativity: Associativity,
}

impl OperatorInfo {
    pub fn new(rank: i32, associativity: Associativity) -> Self {
        OperatorInfo {
            rank,
            associativity,
        }
    }
}

/// Operator table plus operand recognizer used by the parser.
///
/// A grammar is immutable once built and may be shared between threads.
#[derive(Clone)]
pub struct Grammar {
    operators: HashMap<String, OperatorInfo>,
    operand: Arc<dyn OperandRecognizer>,
}

impl Grammar {
    /// A grammar with no operators and the numeric operand recognizer.
    pub fn empty() -> Self {
        Grammar {
            operators: HashMap::new(),
            operand: Arc::new(NumericOperand),
        }
    }

    /// Builds a grammar from an operator set and a precedence table.
    ///
    /// Every operator must have an entry in `precedence`. Extra entries,
    /// including ones for the parenthesis symbols, are ignored. All operators
    /// built this way associate left-to-right.
    pub fn from_tables<'a>(
        operators: impl IntoIterator<Item = &'a str>,
        precedence: &HashMap<&str, i32>,
    ) -> Result<Self, GrammarError> {
        let mut grammar = Grammar::empty();

        for operator in operators {
            let rank = precedence
                .get(operator)
                .ok_or_else(|| GrammarError::MissingPrecedence {
                    operator: operator.to_string(),
                })?;
            grammar = grammar.with_operator(operator, *rank, Associativity::Left)?;
        }

        Ok(grammar)
    }

    /// Adds (or replaces) an operator.
    pub fn with_operator(
        mut self,
        symbol: &str,
        rank: i32,
        associativity: Associativity,
    ) -> Result<Self, GrammarError> {
        if symbol.is_empty()
            || symbol
                .chars()
                .any(|c| c.is_whitespace() || c == '(' || c == ')')
        {
            return Err(GrammarError::InvalidSymbol {
                symbol: symbol.to_string(),
            });
        }

        self.operators
            .insert(symbol.to_string(), OperatorInfo::new(rank, associativity));
        Ok(self)
    }

    /// Replaces the predicate that classifies non-operator tokens.
    pub fn with_operand_recognizer<R: OperandRecognizer + 'static>(
        mut self,
        recognizer: R,
    ) -> Self {
        self.operand = Arc::new(recognizer);
        self
    }

    pub fn is_operator(&self, token: &str) -> bool {
        self.operators.contains_key(token)
    }

    pub fn is_operand(&self, token: &str) -> bool {
        self.operand.is_operand(token)
    }

    pub fn precedence(&self, symbol: &str) -> Option<Precedence> {
        match symbol {
            "(" | ")" => Some(Precedence::Parenthesis),
            _ => self
                .operators
                .get(symbol)
                .map(|info| Precedence::Rank(info.rank)),
        }
    }

    pub fn associativity(&self, symbol: &str) -> Option<Associativity> {
        self.operators.get(symbol).map(|info| info.associativity)
    }

    /// Operator symbols in sorted order.
    pub fn operators(&self) -> BTreeSet<&str> {
        self.operators.keys().map(String::as_str).collect()
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar {
            operators: DEFAULT_PRECEDENCE
                .iter()
                .map(|(symbol, info)| (symbol.to_string(), *info))
                .collect(),
            operand: Arc::new(NumericOperand),
        }
    }
}

impl Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("operators", &self.operators)
            .finish_non_exhaustive()
    }
}
