//! Chain of responsibility over string requests.
//!
//! Each [`ChainNode`] owns one [`Handler`] and, optionally, the next node. A
//! request walks the chain in order until some handler claims it; if none does
//! the walk ends in [`Outcome::Unhandled`]. Nothing here performs I/O: callers
//! receive an [`Outcome`] and decide how to render it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal result of sending a request down a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A handler recognized and processed the request.
    Handled { role: Role, request: String },
    /// Every handler declined and the chain ran out.
    Unhandled { request: String },
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled { .. })
    }

    pub fn request(&self) -> &str {
        match self {
            Outcome::Handled { request, .. } | Outcome::Unhandled { request } => request,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Handled { role, request } => {
                write!(f, "{} handled request: {}", role, request)
            }
            Outcome::Unhandled { request } => {
                write!(f, "Request '{}' remained unhandled.", request)
            }
        }
    }
}

/// One link's decision logic.
pub trait Handler {
    /// Pure ownership test for `request`.
    fn can_handle(&self, request: &str) -> bool;

    /// Act on a request this handler claimed via [`Handler::can_handle`].
    fn process(&self, request: &str) -> Outcome;
}

/// Escalation levels of the support desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Operator,
    Manager,
    Director,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Operator => "Operator",
            Role::Manager => "Manager",
            Role::Director => "Director",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handler that claims exactly one request label, compared by equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleHandler {
    role: Role,
    label: String,
}

impl RoleHandler {
    pub fn new(role: Role, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
        }
    }

    pub fn operator(label: impl Into<String>) -> Self {
        Self::new(Role::Operator, label)
    }

    pub fn manager(label: impl Into<String>) -> Self {
        Self::new(Role::Manager, label)
    }

    pub fn director(label: impl Into<String>) -> Self {
        Self::new(Role::Director, label)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Handler for RoleHandler {
    fn can_handle(&self, request: &str) -> bool {
        request == self.label
    }

    fn process(&self, request: &str) -> Outcome {
        Outcome::Handled {
            role: self.role,
            request: request.to_string(),
        }
    }
}

/// A handler plus its owned successor.
pub struct ChainNode {
    handler: Box<dyn Handler>,
    next: Option<Box<ChainNode>>,
}

impl ChainNode {
    pub fn new(handler: impl Handler + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            next: None,
        }
    }

    /// Link `next` as this node's successor and return it, so chains can be
    /// built fluently: `a.set_next(b).set_next(c)`.
    ///
    /// Any previous successor is dropped.
    pub fn set_next(&mut self, next: ChainNode) -> &mut ChainNode {
        self.next.insert(Box::new(next)).as_mut()
    }

    pub fn can_handle(&self, request: &str) -> bool {
        self.handler.can_handle(request)
    }

    pub fn process(&self, request: &str) -> Outcome {
        self.handler.process(request)
    }

    /// Route `request` to the first node whose handler claims it.
    pub fn handle(&self, request: &str) -> Outcome {
        let mut current = Some(self);
        while let Some(node) = current {
            if node.can_handle(request) {
                return node.process(request);
            }
            current = node.next.as_deref();
        }
        Outcome::Unhandled {
            request: request.to_string(),
        }
    }

    /// Number of nodes from here to the end of the chain.
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |node| node.next.as_deref()).count()
    }
}

impl Drop for ChainNode {
    // Unlink iteratively; the default recursive drop overflows on long chains.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Link `handlers` in order and return the entry node.
///
/// Returns `None` when `handlers` is empty.
pub fn build_chain<I>(handlers: I) -> Option<ChainNode>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    I::Item: Handler + 'static,
{
    handlers.into_iter().rev().fold(None, |next, handler| {
        let mut node = ChainNode::new(handler);
        node.next = next.map(Box::new);
        Some(node)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::test_support::support_desk;

    /// Claims everything and counts how often it was asked to process.
    struct Counting {
        processed: Rc<Cell<usize>>,
    }

    impl Handler for Counting {
        fn can_handle(&self, _request: &str) -> bool {
            true
        }

        fn process(&self, request: &str) -> Outcome {
            self.processed.set(self.processed.get() + 1);
            Outcome::Handled {
                role: Role::Director,
                request: request.to_string(),
            }
        }
    }

    #[test]
    fn routes_each_label_to_its_role() {
        let chain = support_desk();
        assert_eq!(
            chain.handle("Simple request"),
            Outcome::Handled {
                role: Role::Operator,
                request: "Simple request".to_string(),
            }
        );
        assert_eq!(
            chain.handle("Medium request"),
            Outcome::Handled {
                role: Role::Manager,
                request: "Medium request".to_string(),
            }
        );
        assert_eq!(
            chain.handle("Complex request"),
            Outcome::Handled {
                role: Role::Director,
                request: "Complex request".to_string(),
            }
        );
    }

    #[test]
    fn unknown_request_is_unhandled() {
        let outcome = support_desk().handle("Unknown request");
        assert_eq!(
            outcome,
            Outcome::Unhandled {
                request: "Unknown request".to_string(),
            }
        );
        assert!(!outcome.is_handled());
        assert_eq!(
            outcome.to_string(),
            "Request 'Unknown request' remained unhandled."
        );
    }

    #[test]
    fn matching_is_exact_equality() {
        let chain = support_desk();
        assert!(!chain.handle("simple request").is_handled());
        assert!(!chain.handle("Simple request ").is_handled());
        assert!(!chain.handle("").is_handled());
    }

    #[test]
    fn set_next_returns_linked_node() {
        let mut operator = ChainNode::new(RoleHandler::operator("a"));
        let manager = operator.set_next(ChainNode::new(RoleHandler::manager("b")));
        assert!(manager.can_handle("b"));
        manager.set_next(ChainNode::new(RoleHandler::director("c")));
        assert_eq!(operator.depth(), 3);
        assert!(operator.handle("c").is_handled());
    }

    #[test]
    fn earlier_match_short_circuits_later_handlers() {
        let processed = Rc::new(Cell::new(0));
        let mut head = ChainNode::new(RoleHandler::operator("first"));
        head.set_next(ChainNode::new(Counting {
            processed: Rc::clone(&processed),
        }));

        let outcome = head.handle("first");
        assert_eq!(outcome.to_string(), "Operator handled request: first");
        assert_eq!(processed.get(), 0);

        head.handle("anything else");
        assert_eq!(processed.get(), 1);
    }

    #[test]
    fn duplicate_labels_resolve_to_earliest_role() {
        let chain = build_chain([
            RoleHandler::manager("same"),
            RoleHandler::director("same"),
        ])
        .expect("chain");
        assert_eq!(
            chain.handle("same"),
            Outcome::Handled {
                role: Role::Manager,
                request: "same".to_string(),
            }
        );
    }

    #[test]
    fn build_chain_preserves_order_and_rejects_empty() {
        assert!(build_chain(Vec::<RoleHandler>::new()).is_none());
        let chain = build_chain(vec![
            RoleHandler::operator("x"),
            RoleHandler::manager("y"),
        ])
        .expect("chain");
        assert_eq!(chain.depth(), 2);
        assert!(chain.can_handle("x"));
        assert!(chain.handle("y").is_handled());
    }

    #[test]
    fn long_chain_does_not_grow_the_stack() {
        let chain = build_chain((0..100_000).map(|i| RoleHandler::operator(i.to_string())))
            .expect("chain");
        assert!(chain.handle("99999").is_handled());
        assert!(!chain.handle("missing").is_handled());
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_value(Outcome::Unhandled {
            request: "x".to_string(),
        })
        .expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "outcome": "unhandled", "request": "x" })
        );
    }

    #[test]
    fn handled_outcome_keeps_typed_role() {
        let outcome = support_desk().handle("Medium request");
        let Outcome::Handled { role, .. } = &outcome else {
            panic!("expected handled outcome, got {:?}", outcome);
        };
        assert_eq!(*role, Role::Manager);
        assert_eq!(role.to_string(), "Manager");

        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "outcome": "handled",
                "role": "Manager",
                "request": "Medium request"
            })
        );
        let back: Outcome = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, outcome);
    }
}
