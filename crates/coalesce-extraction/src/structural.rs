//! tree-sitter structural scan of Python source.

use coalesce_core::errors::ParseError;
use tree_sitter::{Node, Parser};

/// Symbols and size collected from a clean parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralScan {
    /// Lowercased routine, type, and imported-module names in document order.
    pub tokens: Vec<String>,
    /// Named nodes in the tree, the basis for the complexity tier.
    pub named_nodes: usize,
}

/// Parse `text` and collect its declared symbols.
///
/// Trees containing ERROR or MISSING nodes are rejected rather than
/// partially harvested.
pub fn scan(unit_id: &str, text: &str, max_tokens: usize) -> Result<StructuralScan, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ParseError::ParserUnavailable {
            reason: e.to_string(),
        })?;

    let tree = parser
        .parse(text, None)
        .ok_or_else(|| ParseError::ParserUnavailable {
            reason: "parser returned no tree".to_string(),
        })?;
    let root = tree.root_node();
    let source = text.as_bytes();

    let mut tokens = Vec::new();
    let mut named_nodes = 0usize;
    let mut error_nodes = 0usize;

    // Iterative pre-order walk; deep trees must not grow the call stack.
    let mut cursor = root.walk();
    'walk: loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            error_nodes += 1;
        }
        if node.is_named() {
            named_nodes += 1;
        }
        if tokens.len() < max_tokens {
            collect_symbols(node, source, &mut tokens);
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    if error_nodes > 0 || root.has_error() {
        return Err(ParseError::Malformed {
            unit_id: unit_id.to_string(),
            error_nodes: error_nodes.max(1),
        });
    }

    tokens.truncate(max_tokens);
    Ok(StructuralScan {
        tokens,
        named_nodes,
    })
}

fn collect_symbols(node: Node, source: &[u8], tokens: &mut Vec<String>) {
    match node.kind() {
        "function_definition" | "class_definition" => {
            if let Some(name) = node
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(source).ok())
            {
                tokens.push(name.to_lowercase());
            }
        }
        "import_statement" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                let module = match child.kind() {
                    "dotted_name" => Some(child),
                    "aliased_import" => child.child_by_field_name("name"),
                    _ => None,
                };
                if let Some(text) = module.and_then(|m| m.utf8_text(source).ok()) {
                    tokens.push(text.to_lowercase());
                }
            }
        }
        "import_from_statement" => {
            if let Some(text) = node
                .child_by_field_name("module_name")
                .and_then(|m| m.utf8_text(source).ok())
            {
                let module = text.trim_start_matches('.');
                if !module.is_empty() {
                    tokens.push(module.to_lowercase());
                }
            }
        }
        _ => {}
    }
}
