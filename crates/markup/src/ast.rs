//! Abstract syntax tree for markup.
//!
//! The evaluator only relies on the [`MarkupNode`] trait, so trees can be
//! built by hand (or by another grammar engine) without going through
//! [`crate::parser::parse`].

/// Kind of a markup AST node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A sequence of elements and text runs.
    Content,
    /// `<tag[=arg]> body </tag>`: children are `[StartTag, body]`.
    Element,
    /// The opening tag: children are `[TagName, Argument?]`.
    StartTag,
    /// Tag name; the name is the token.
    TagName,
    /// Tag argument (after `=`); the argument is the token.
    Argument,
    /// Literal text; the text is the token.
    Text,
}

/// Minimal interface the evaluator needs from an AST node.
pub trait MarkupNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Raw matched text. Empty for structural nodes.
    fn token(&self) -> &str;

    fn children(&self) -> &[Self];
}

/// Generic AST node produced by the grammar engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ast {
    pub kind: NodeKind,
    pub token: String,
    pub nodes: Vec<Ast>,
}

impl Ast {
    /// A childless node.
    pub fn leaf(kind: NodeKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
            nodes: Vec::new(),
        }
    }

    /// A text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, text)
    }

    /// A sequence of nodes.
    pub fn content(nodes: Vec<Ast>) -> Self {
        Self {
            kind: NodeKind::Content,
            token: String::new(),
            nodes,
        }
    }

    /// An element with the given tag name, optional argument and body.
    ///
    /// ```
    /// use markup::{evaluate, metrics, Ast, Style};
    ///
    /// let tree = Ast::element("b", None, Ast::text("hi"));
    /// assert_eq!(metrics::strip(&evaluate(&tree, &Style::default())), "hi");
    /// ```
    pub fn element(name: &str, argument: Option<&str>, body: Ast) -> Self {
        let mut tag = vec![Ast::leaf(NodeKind::TagName, name)];
        if let Some(argument) = argument {
            tag.push(Ast::leaf(NodeKind::Argument, argument));
        }

        Self {
            kind: NodeKind::Element,
            token: String::new(),
            nodes: vec![
                Ast {
                    kind: NodeKind::StartTag,
                    token: String::new(),
                    nodes: tag,
                },
                body,
            ],
        }
    }
}

impl MarkupNode for Ast {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn token(&self) -> &str {
        &self.token
    }

    fn children(&self) -> &[Self] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_layout() {
        let node = Ast::element("color", Some("#ff0000"), Ast::text("x"));
        assert_eq!(node.kind(), NodeKind::Element);

        let tag = &node.children()[0];
        assert_eq!(tag.kind(), NodeKind::StartTag);
        assert_eq!(tag.children()[0].token(), "color");
        assert_eq!(tag.children()[1].kind(), NodeKind::Argument);
        assert_eq!(tag.children()[1].token(), "#ff0000");

        assert_eq!(node.children()[1].token(), "x");
    }

    #[test]
    fn element_without_argument() {
        let node = Ast::element("b", None, Ast::content(vec![]));
        assert_eq!(node.children()[0].children().len(), 1);
    }
}
