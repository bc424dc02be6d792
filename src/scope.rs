use crate::model::{Node, Tree};

/// Narrows `tree` to the children of the node whose path contains `scope`.
///
/// An absent or empty scope returns the top-level children unchanged.
/// Returns `None` when no node matches.
pub fn filter<'a>(tree: &'a Tree, scope: Option<&str>) -> Option<&'a [Node]> {
    match scope {
        Some(scope) if !scope.is_empty() => {
            let mut display = None;
            search_level(&tree.children, scope, &mut display);
            display
        }
        _ => Some(tree.children.as_slice()),
    }
}

// A direct match ends the search at its own level only. Siblings searched
// afterwards may still overwrite a match found deeper in an earlier sibling.
fn search_level<'a>(nodes: &'a [Node], scope: &str, display: &mut Option<&'a [Node]>) {
    for node in nodes {
        if node.stack_path.contains(scope) {
            *display = Some(node.children.as_slice());
            return;
        }
        search_level(&node.children, scope, display);
    }
}
