//! Java declaration extractor using Tree-sitter.

use solid_lint_core::{
    DeclKind, Declaration, Method, MethodBody, ParseError, SourceParser, SourceTree,
};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

/// Extracts the declaration graph from Java source.
pub struct JavaExtractor {
    language: Language,
}

impl JavaExtractor {
    /// Creates a new Java extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    /// First direct child of the given kind.
    fn child_of_kind<'tree>(node: &Node<'tree>, kind: &str) -> Option<Node<'tree>> {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find(|c| c.kind() == kind);
        found
    }

    /// Whether the declaration's `modifiers` node carries the keyword.
    fn has_modifier(node: &Node<'_>, src: &[u8], keyword: &str) -> bool {
        Self::child_of_kind(node, "modifiers").map_or(false, |mods| {
            let mut cursor = mods.walk();
            let has = mods
                .children(&mut cursor)
                .any(|m| Self::text(&m, src) == keyword);
            has
        })
    }

    /// Names of the types in a `type_list` node.
    fn type_names(list: &Node<'_>, src: &[u8]) -> Vec<String> {
        let mut cursor = list.walk();
        list.children(&mut cursor)
            .filter(Node::is_named)
            .map(|c| Self::text(&c, src).to_owned())
            .collect()
    }

    fn extract_class(node: &Node<'_>, src: &[u8]) -> Option<Declaration> {
        let name = Self::child_of_kind(node, "identifier")
            .map(|n| Self::text(&n, src).to_owned())?;
        let mut decl = Declaration::new(DeclKind::Class, name, node.start_position().row + 1);

        if Self::has_modifier(node, src, "abstract") {
            decl = decl.with_abstract();
        }

        // superclass wraps a single type after the `extends` keyword
        if let Some(sup) = Self::child_of_kind(node, "superclass") {
            let mut cursor = sup.walk();
            for ty in sup.children(&mut cursor).filter(Node::is_named) {
                decl = decl.with_extends(Self::text(&ty, src));
            }
        }

        if let Some(ifaces) = Self::child_of_kind(node, "super_interfaces") {
            if let Some(list) = Self::child_of_kind(&ifaces, "type_list") {
                for name in Self::type_names(&list, src) {
                    decl = decl.with_implements(name);
                }
            }
        }

        if let Some(body) = Self::child_of_kind(node, "class_body") {
            decl = Self::fill_members(decl, &body, src);
        }
        Some(decl)
    }

    fn extract_interface(node: &Node<'_>, src: &[u8]) -> Option<Declaration> {
        let name = Self::child_of_kind(node, "identifier")
            .map(|n| Self::text(&n, src).to_owned())?;
        let mut decl = Declaration::new(DeclKind::Interface, name, node.start_position().row + 1);

        if Self::has_modifier(node, src, "abstract") {
            decl = decl.with_abstract();
        }

        if let Some(ext) = Self::child_of_kind(node, "extends_interfaces") {
            if let Some(list) = Self::child_of_kind(&ext, "type_list") {
                for name in Self::type_names(&list, src) {
                    decl = decl.with_extends(name);
                }
            }
        }

        if let Some(body) = Self::child_of_kind(node, "interface_body") {
            decl = Self::fill_members(decl, &body, src);
        }
        Some(decl)
    }

    /// Scans a class or interface body for methods and member types.
    fn fill_members(mut decl: Declaration, body: &Node<'_>, src: &[u8]) -> Declaration {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            match child.kind() {
                "method_declaration" => {
                    if let Some(method) = Self::extract_method(&child, src) {
                        decl = decl.with_method(method);
                    }
                }
                "class_declaration" => {
                    if let Some(nested) = Self::extract_class(&child, src) {
                        decl = decl.with_nested(nested);
                    }
                }
                "interface_declaration" => {
                    if let Some(nested) = Self::extract_interface(&child, src) {
                        decl = decl.with_nested(nested);
                    }
                }
                _ => {}
            }
        }
        decl
    }

    fn extract_method(node: &Node<'_>, src: &[u8]) -> Option<Method> {
        let name = Self::child_of_kind(node, "identifier")
            .map(|n| Self::text(&n, src).to_owned())?;
        let mut method = Method::new(name, node.start_position().row + 1);

        if Self::has_modifier(node, src, "public") {
            method = method.public();
        }

        // abstract and interface method signatures have no block
        if let Some(block) = Self::child_of_kind(node, "block") {
            let mut body = MethodBody::new(Self::text(&block, src));
            for local in Self::collect_local_types(&block, src) {
                body = body.with_nested(local);
            }
            method = method.with_body(body);
        }
        Some(method)
    }

    /// Collects type declarations found anywhere inside a method body.
    ///
    /// Does not descend into the declarations it finds; their own members
    /// are filled in by the regular extraction.
    fn collect_local_types(node: &Node<'_>, src: &[u8]) -> Vec<Declaration> {
        let mut found = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "class_declaration" => {
                    if let Some(decl) = Self::extract_class(&child, src) {
                        found.push(decl);
                    }
                }
                "interface_declaration" => {
                    if let Some(decl) = Self::extract_interface(&child, src) {
                        found.push(decl);
                    }
                }
                _ => found.extend(Self::collect_local_types(&child, src)),
            }
        }
        found
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for JavaExtractor {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".java"]
    }

    fn parse(&self, source: &str) -> Result<SourceTree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Grammar(e.to_string()))?;

        let src = source.as_bytes();
        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ParseError::Grammar("parser produced no tree".to_string()))?;
        let root = tree.root_node();

        // Tree-sitter is error-tolerant; any ERROR or MISSING node in the
        // tree counts as a parse failure here.
        if root.has_error() {
            let line = first_error_line(&root);
            debug!("rejecting source: syntax error near line {line}");
            return Err(ParseError::Syntax { line });
        }

        let mut result = SourceTree::new();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            match node.kind() {
                "class_declaration" => {
                    if let Some(decl) = Self::extract_class(&node, src) {
                        result.types.push(decl);
                    }
                }
                "interface_declaration" => {
                    if let Some(decl) = Self::extract_interface(&node, src) {
                        result.types.push(decl);
                    }
                }
                _ => {}
            }
        }

        debug!("extracted {} top-level declaration(s)", result.types.len());
        Ok(result)
    }
}

/// 1-based line of the first ERROR or MISSING node under `root`.
fn first_error_line(root: &Node<'_>) -> usize {
    let mut cursor = root.walk();
    'outer: loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return node.start_position().row + 1;
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'outer;
            }
            if !cursor.goto_parent() {
                break 'outer;
            }
        }
    }
    root.start_position().row + 1
}
