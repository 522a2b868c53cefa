//! Unit tests for the expression tree.

use crate::errors::errors::NodeError;

use super::ast::{Ast, Traversal};

// 2 + 3 * 4
fn sample() -> Ast {
    Ast::node(
        "+",
        Ast::leaf("2"),
        Ast::node("*", Ast::leaf("3"), Ast::leaf("4")),
    )
}

#[test]
fn test_leaf() {
    let leaf = Ast::leaf("7");

    assert_eq!(leaf.value(), "7");
    assert!(leaf.is_leaf());
    assert!(leaf.left().is_none());
    assert!(leaf.right().is_none());
    assert_eq!(leaf.node_count(), 1);
    assert_eq!(leaf.depth(), 1);
}

#[test]
fn test_node_children() {
    let tree = sample();

    assert!(!tree.is_leaf());
    assert_eq!(tree.left().map(Ast::value), Some("2"));
    assert_eq!(tree.right().map(Ast::value), Some("*"));
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn test_checked_construction() {
    assert_eq!(Ast::new("7", None, None), Ok(Ast::leaf("7")));
    assert_eq!(
        Ast::new("-", Some(Ast::leaf("3")), Some(Ast::leaf("4"))),
        Ok(Ast::node("-", Ast::leaf("3"), Ast::leaf("4")))
    );
}

#[test]
fn test_checked_construction_rejects_one_child() {
    let expected = Err(NodeError::MissingChild {
        value: "+".to_string(),
    });

    assert_eq!(Ast::new("+", Some(Ast::leaf("1")), None), expected);
    assert_eq!(Ast::new("+", None, Some(Ast::leaf("1"))), expected);
}

#[test]
fn test_traversals() {
    let tree = sample();

    assert_eq!(tree.pre_order(), vec!["+", "2", "*", "3", "4"]);
    assert_eq!(tree.in_order(), vec!["2", "+", "3", "*", "4"]);
    assert_eq!(tree.post_order(), vec!["2", "3", "4", "*", "+"]);
}

#[test]
fn test_traverse_by_order() {
    let tree = sample();

    assert_eq!(tree.traverse(Traversal::PreOrder), tree.pre_order());
    assert_eq!(tree.traverse(Traversal::InOrder), tree.in_order());
    assert_eq!(tree.traverse(Traversal::PostOrder), tree.post_order());
}

#[test]
fn test_leaf_traversals() {
    let leaf = Ast::leaf("7");

    assert_eq!(leaf.pre_order(), vec!["7"]);
    assert_eq!(leaf.in_order(), vec!["7"]);
    assert_eq!(leaf.post_order(), vec!["7"]);
}

#[test]
fn test_traversal_parsing() {
    assert_eq!("pre".parse::<Traversal>(), Ok(Traversal::PreOrder));
    assert_eq!("in".parse::<Traversal>(), Ok(Traversal::InOrder));
    assert_eq!("post".parse::<Traversal>(), Ok(Traversal::PostOrder));
    assert!("level".parse::<Traversal>().is_err());
    assert_eq!(Traversal::InOrder.to_string(), "in");
}

#[test]
fn test_render() {
    assert_eq!(sample().render(), "(+)\n ├(2)\n └(*)\n   ├(3)\n   └(4)\n");
}

#[test]
fn test_render_left_nested() {
    let tree = Ast::node(
        "*",
        Ast::node("+", Ast::leaf("2"), Ast::leaf("3")),
        Ast::leaf("4"),
    );

    assert_eq!(tree.to_string(), "(*)\n ├(+)\n │ ├(2)\n │ └(3)\n └(4)\n");
}

#[test]
fn test_render_leaf() {
    assert_eq!(Ast::leaf("7").render(), "(7)\n");
}

#[test]
fn test_to_infix() {
    assert_eq!(sample().to_infix(), "( 2 + ( 3 * 4 ) )");
    assert_eq!(Ast::leaf("7").to_infix(), "7");
}

#[test]
fn test_display_matches_render() {
    let tree = sample();

    assert_eq!(format!("{}", tree), tree.render());
    assert_eq!(format!("{}", Ast::leaf("7")), "(7)\n");
}
