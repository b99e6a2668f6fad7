//! Text renderings of a resolved forest: the JSON object-of-objects form
//! and a unicode dependency tree.

use std::sync::Arc;

use crate::distribution::{Distribution, Forest};

impl Forest {
    /// Render the forest as a JSON object keyed by distribution name, each
    /// value being the same shape for that node's dependencies. A leaf
    /// renders as `{}`.
    ///
    /// With an empty `indent` everything lands on one line, tokens separated
    /// only by the space after each key's colon. With a non-empty `indent`,
    /// every nesting level starts on a new line prefixed by `depth` copies
    /// of the indent string.
    ///
    /// Key order follows the dependency collections, so output for a given
    /// forest is identical across runs and platforms.
    pub fn to_json(&self, indent: &str) -> String {
        let mut out = String::new();
        write_level(&mut out, self.roots(), indent, 0);
        out
    }

    /// Render the forest as a unicode tree, one block per requested root.
    ///
    /// `max_depth` of `Some(n)` stops descending below `n` levels of
    /// dependencies; `None` renders the full tree.
    pub fn render_tree(&self, max_depth: Option<usize>) -> String {
        let mut out = String::new();
        for root in self.roots() {
            out.push_str(&format!("{}\n", root.name()));
            let deps = root.dependencies();
            let count = deps.len();
            for (i, child) in deps.iter().enumerate() {
                let is_last = i == count - 1;
                render_subtree(&mut out, child, "", is_last, 1, max_depth);
            }
        }
        out
    }
}

fn write_level(dst: &mut String, nodes: &[Arc<Distribution>], indent: &str, depth: usize) {
    dst.push('{');
    let depth = depth + 1;
    push_newline(dst, indent, depth);
    for (i, node) in nodes.iter().enumerate() {
        dst.push('"');
        push_escaped(dst, node.name());
        dst.push_str("\": ");
        if node.is_leaf() {
            dst.push_str("{}");
        } else {
            write_level(dst, node.dependencies(), indent, depth);
        }
        if i < nodes.len() - 1 {
            dst.push(',');
            push_newline(dst, indent, depth);
        }
    }
    push_newline(dst, indent, depth - 1);
    dst.push('}');
}

fn push_newline(dst: &mut String, indent: &str, depth: usize) {
    if indent.is_empty() {
        return;
    }
    dst.push('\n');
    for _ in 0..depth {
        dst.push_str(indent);
    }
}

/// Escape the two characters that would break the surrounding quotes.
/// Distribution names are identifiers; nothing else needs escaping.
fn push_escaped(dst: &mut String, name: &str) {
    for c in name.chars() {
        if c == '"' || c == '\\' {
            dst.push('\\');
        }
        dst.push(c);
    }
}

fn render_subtree(
    out: &mut String,
    node: &Arc<Distribution>,
    prefix: &str,
    is_last: bool,
    depth: usize,
    max_depth: Option<usize>,
) {
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(&format!("{prefix}{connector}{}\n", node.name()));

    if let Some(max) = max_depth {
        if depth >= max {
            return;
        }
    }

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let deps = node.dependencies();
    let count = deps.len();
    for (i, child) in deps.iter().enumerate() {
        let is_last = i == count - 1;
        render_subtree(out, child, &child_prefix, is_last, depth + 1, max_depth);
    }
}
