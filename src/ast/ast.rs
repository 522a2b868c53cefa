use std::{fmt::Display, str::FromStr};

use crate::errors::errors::NodeError;

/// Binary expression tree.
///
/// A node is either a leaf holding an operand or an operator node owning
/// exactly two subtrees. The tree is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ast {
    value: String,
    children: Option<Box<(Ast, Ast)>>,
}

impl Ast {
    pub fn leaf(value: impl Into<String>) -> Self {
        Ast {
            value: value.into(),
            children: None,
        }
    }

    pub fn node(value: impl Into<String>, left: Ast, right: Ast) -> Self {
        Ast {
            value: value.into(),
            children: Some(Box::new((left, right))),
        }
    }

    /// Builds a leaf or a node from optional children.
    ///
    /// Fails when exactly one child is given.
    pub fn new(
        value: impl Into<String>,
        left: Option<Ast>,
        right: Option<Ast>,
    ) -> Result<Self, NodeError> {
        match (left, right) {
            (None, None) => Ok(Ast::leaf(value)),
            (Some(left), Some(right)) => Ok(Ast::node(value, left, right)),
            _ => Err(NodeError::MissingChild {
                value: value.into(),
            }),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn left(&self) -> Option<&Ast> {
        self.children.as_deref().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Ast> {
        self.children.as_deref().map(|(_, right)| right)
    }

    pub fn children(&self) -> Option<(&Ast, &Ast)> {
        self.children.as_deref().map(|(left, right)| (left, right))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn node_count(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.node_count() + right.node_count(),
            None => 1,
        }
    }

    /// Number of levels, counting a lone leaf as 1.
    pub fn depth(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 1,
        }
    }

    /// Value, left, right.
    pub fn pre_order(&self) -> Vec<&str> {
        self.traverse(Traversal::PreOrder)
    }

    /// Left, value, right.
    pub fn in_order(&self) -> Vec<&str> {
        self.traverse(Traversal::InOrder)
    }

    /// Left, right, value.
    pub fn post_order(&self) -> Vec<&str> {
        self.traverse(Traversal::PostOrder)
    }

    pub fn traverse(&self, order: Traversal) -> Vec<&str> {
        let mut values = Vec::with_capacity(self.node_count());
        self.collect_values(order, &mut values);
        values
    }

    fn collect_values<'a>(&'a self, order: Traversal, values: &mut Vec<&'a str>) {
        let Some((left, right)) = self.children() else {
            values.push(&self.value);
            return;
        };

        match order {
            Traversal::PreOrder => {
                values.push(&self.value);
                left.collect_values(order, values);
                right.collect_values(order, values);
            }
            Traversal::InOrder => {
                left.collect_values(order, values);
                values.push(&self.value);
                right.collect_values(order, values);
            }
            Traversal::PostOrder => {
                left.collect_values(order, values);
                right.collect_values(order, values);
                values.push(&self.value);
            }
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Traversal {
    PreOrder,
    InOrder,
    PostOrder,
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre" => Ok(Traversal::PreOrder),
            "in" => Ok(Traversal::InOrder),
            "post" => Ok(Traversal::PostOrder),
            _ => Err(format!("unknown traversal order `{}`", s)),
        }
    }
}

impl Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Traversal::PreOrder => write!(f, "pre"),
            Traversal::InOrder => write!(f, "in"),
            Traversal::PostOrder => write!(f, "post"),
        }
    }
}
