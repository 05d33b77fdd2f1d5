//! Arena construction.
//!
//! Front ends that track real source offsets call [`AstBuilder::push`] with
//! each node's span. Hand-built trees (tests, synthesized code) use
//! [`AstBuilder::node`] and the shorthand constructors, which lay nodes out
//! on a synthetic line: every leaf takes the next free offsets and composite
//! nodes cover their children. Building children in source order therefore
//! gives spans whose relative order matches the source.
//!
//! Methods take `&self` so construction calls nest naturally, e.g.
//! `b.expr_stmt(b.call(b.ident("f"), [b.ident("x")]))`. Rust evaluates
//! arguments left to right, which keeps nested calls in source order.

use std::cell::RefCell;

use super::kind::{
    Class, Function, Literal, MethodKind, ModuleDeclKind, ModuleItemKind, NodeKind, PropertyKind,
    Signature, TsKeyword, VarKind,
};
use super::Ast;
use crate::{NodeId, NodeRange, Span, StringInterner};

#[derive(Default)]
struct BuildState {
    kinds: Vec<NodeKind>,
    spans: Vec<Span>,
    lists: Vec<NodeId>,
    cursor: u32,
}

impl BuildState {
    fn push(&mut self, kind: NodeKind, span: Span) -> NodeId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "node counts beyond u32::MAX are not supported"
        )]
        let id = NodeId::new(self.kinds.len() as u32);
        self.kinds.push(kind);
        self.spans.push(span);
        id
    }

    /// Take `width` fresh offsets on the synthetic line.
    fn advance(&mut self, width: u32) -> Span {
        let start = self.cursor;
        let end = start + width.max(1);
        self.cursor = end + 1;
        Span::new(start, end)
    }

    fn covering_span(&mut self, kind: &NodeKind) -> Span {
        let mut span: Option<Span> = None;
        let spans = &self.spans;
        kind.for_each_child(&self.lists, &mut |child| {
            if let Some(&s) = spans.get(child.index()) {
                span = Some(span.map_or(s, |acc| acc.merge(s)));
            }
        });
        match span {
            Some(span) => span,
            None => self.advance(1),
        }
    }
}

/// Incremental builder for an [`Ast`].
pub struct AstBuilder<'i> {
    interner: &'i StringInterner,
    state: RefCell<BuildState>,
}

impl<'i> AstBuilder<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        AstBuilder {
            interner,
            state: RefCell::new(BuildState::default()),
        }
    }

    /// The interner identifier text goes through.
    pub fn interner(&self) -> &'i StringInterner {
        self.interner
    }

    /// Allocate a node with an explicit span.
    pub fn push(&self, kind: NodeKind, span: Span) -> NodeId {
        self.state.borrow_mut().push(kind, span)
    }

    /// Allocate a node whose span covers its children, or the next free
    /// offset when it has none.
    pub fn node(&self, kind: NodeKind) -> NodeId {
        let mut state = self.state.borrow_mut();
        let span = state.covering_span(&kind);
        state.push(kind, span)
    }

    /// Store a list of children and return its range.
    pub fn list(&self, items: impl IntoIterator<Item = NodeId>) -> NodeRange {
        let mut state = self.state.borrow_mut();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "list storage beyond u32::MAX is not supported"
        )]
        let start = state.lists.len() as u32;
        state.lists.extend(items);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "list storage beyond u32::MAX is not supported"
        )]
        let len = state.lists.len() as u32 - start;
        NodeRange::new(start, len)
    }

    /// Freeze the arena and link parents.
    pub fn finish(self, root: NodeId) -> Ast {
        let BuildState {
            kinds,
            spans,
            lists,
            ..
        } = self.state.into_inner();
        let mut parents = vec![None; kinds.len()];
        for (index, kind) in kinds.iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "index comes from an arena bounded by u32"
            )]
            let parent = NodeId::new(index as u32);
            kind.for_each_child(&lists, &mut |child| {
                if let Some(slot) = parents.get_mut(child.index()) {
                    *slot = Some(parent);
                }
            });
        }
        Ast {
            kinds,
            spans,
            parents,
            lists,
            root,
        }
    }

    // Names and literals

    pub fn ident(&self, name: &str) -> NodeId {
        let name_id = self.interner.intern(name);
        let mut state = self.state.borrow_mut();
        let width = u32::try_from(name.len()).unwrap_or(u32::MAX / 2);
        let span = state.advance(width);
        state.push(
            NodeKind::Identifier {
                name: name_id,
                type_annotation: None,
                optional: false,
            },
            span,
        )
    }

    /// Attach a type annotation to an identifier or binding pattern.
    ///
    /// The node keeps its id; its span grows to cover the annotation.
    pub fn annotate(&self, target: NodeId, annotation: NodeId) -> NodeId {
        let mut state = self.state.borrow_mut();
        let annotation_span = state
            .spans
            .get(annotation.index())
            .copied()
            .unwrap_or(Span::DUMMY);
        if let Some(kind) = state.kinds.get_mut(target.index()) {
            match kind {
                NodeKind::Identifier {
                    type_annotation, ..
                }
                | NodeKind::ObjectPattern {
                    type_annotation, ..
                }
                | NodeKind::ArrayPattern {
                    type_annotation, ..
                }
                | NodeKind::RestElement {
                    type_annotation, ..
                } => *type_annotation = Some(annotation),
                _ => return target,
            }
        }
        if let Some(span) = state.spans.get_mut(target.index()) {
            *span = span.merge(annotation_span);
        }
        target
    }

    pub fn private_ident(&self, name: &str) -> NodeId {
        let name_id = self.interner.intern(name);
        let mut state = self.state.borrow_mut();
        let width = u32::try_from(name.len() + 1).unwrap_or(u32::MAX / 2);
        let span = state.advance(width);
        state.push(NodeKind::PrivateIdentifier { name: name_id }, span)
    }

    pub fn str_lit(&self, value: &str) -> NodeId {
        let value = self.interner.intern(value);
        self.node(NodeKind::Literal(Literal::String(value)))
    }

    pub fn num(&self, value: f64) -> NodeId {
        self.node(NodeKind::Literal(Literal::Number(value.to_bits())))
    }

    pub fn this(&self) -> NodeId {
        self.node(NodeKind::ThisExpression)
    }

    // Statements

    pub fn program(&self, body: impl IntoIterator<Item = NodeId>) -> NodeId {
        let body = self.list(body);
        self.node(NodeKind::Program { body })
    }

    pub fn expr_stmt(&self, expression: NodeId) -> NodeId {
        self.node(NodeKind::ExpressionStatement {
            expression,
            directive: None,
        })
    }

    /// Prologue directive such as `"use strict"`.
    pub fn directive(&self, text: &str) -> NodeId {
        let expression = self.str_lit(text);
        let directive = Some(self.interner.intern(text));
        self.node(NodeKind::ExpressionStatement {
            expression,
            directive,
        })
    }

    pub fn block(&self, body: impl IntoIterator<Item = NodeId>) -> NodeId {
        let body = self.list(body);
        self.node(NodeKind::BlockStatement { body })
    }

    pub fn declarator(&self, id: NodeId, init: Option<NodeId>) -> NodeId {
        self.node(NodeKind::VariableDeclarator { id, init })
    }

    /// Declaration with a single declarator.
    pub fn var_decl(&self, kind: VarKind, id: NodeId, init: Option<NodeId>) -> NodeId {
        let declarator = self.declarator(id, init);
        self.var_decls(kind, [declarator])
    }

    pub fn var_decls(&self, kind: VarKind, declarators: impl IntoIterator<Item = NodeId>) -> NodeId {
        let declarations = self.list(declarators);
        self.node(NodeKind::VariableDeclaration {
            kind,
            declarations,
            declare: false,
        })
    }

    pub fn return_stmt(&self, argument: Option<NodeId>) -> NodeId {
        self.node(NodeKind::ReturnStatement { argument })
    }

    pub fn if_stmt(&self, test: NodeId, consequent: NodeId, alternate: Option<NodeId>) -> NodeId {
        self.node(NodeKind::IfStatement {
            test,
            consequent,
            alternate,
        })
    }

    pub fn for_stmt(
        &self,
        init: Option<NodeId>,
        test: Option<NodeId>,
        update: Option<NodeId>,
        body: NodeId,
    ) -> NodeId {
        self.node(NodeKind::ForStatement {
            init,
            test,
            update,
            body,
        })
    }

    pub fn for_of(&self, left: NodeId, right: NodeId, body: NodeId) -> NodeId {
        self.node(NodeKind::ForOfStatement {
            left,
            right,
            body,
            is_await: false,
        })
    }

    pub fn for_in(&self, left: NodeId, right: NodeId, body: NodeId) -> NodeId {
        self.node(NodeKind::ForInStatement { left, right, body })
    }

    pub fn switch(&self, discriminant: NodeId, cases: impl IntoIterator<Item = NodeId>) -> NodeId {
        let cases = self.list(cases);
        self.node(NodeKind::SwitchStatement {
            discriminant,
            cases,
        })
    }

    pub fn case(&self, test: Option<NodeId>, consequent: impl IntoIterator<Item = NodeId>) -> NodeId {
        let consequent = self.list(consequent);
        self.node(NodeKind::SwitchCase { test, consequent })
    }

    pub fn try_catch(&self, block: NodeId, param: Option<NodeId>, handler_body: NodeId) -> NodeId {
        let handler = self.node(NodeKind::CatchClause {
            param,
            body: handler_body,
        });
        self.node(NodeKind::TryStatement {
            block,
            handler: Some(handler),
            finalizer: None,
        })
    }

    pub fn with_stmt(&self, object: NodeId, body: NodeId) -> NodeId {
        self.node(NodeKind::WithStatement { object, body })
    }

    pub fn labeled(&self, label: NodeId, body: NodeId) -> NodeId {
        self.node(NodeKind::LabeledStatement { label, body })
    }

    pub fn break_stmt(&self, label: Option<NodeId>) -> NodeId {
        self.node(NodeKind::BreakStatement { label })
    }

    // Functions and classes

    /// Plain function shape with a block body.
    pub fn func(
        &self,
        id: Option<NodeId>,
        params: impl IntoIterator<Item = NodeId>,
        body: impl IntoIterator<Item = NodeId>,
    ) -> Function {
        let params = self.list(params);
        let body = Some(self.block(body));
        Function {
            id,
            params,
            body,
            ..Function::default()
        }
    }

    /// Body-less function shape (overload signature, `declare function`).
    pub fn signature_func(&self, id: Option<NodeId>, params: impl IntoIterator<Item = NodeId>) -> Function {
        let params = self.list(params);
        Function {
            id,
            params,
            ..Function::default()
        }
    }

    pub fn function_decl(&self, function: Function) -> NodeId {
        self.node(NodeKind::FunctionDeclaration(function))
    }

    pub fn function_expr(&self, function: Function) -> NodeId {
        self.node(NodeKind::FunctionExpression(function))
    }

    /// `function f(...): T;`
    pub fn declare_function(&self, function: Function) -> NodeId {
        self.node(NodeKind::TsDeclareFunction(function))
    }

    /// Arrow with a block body.
    pub fn arrow(
        &self,
        params: impl IntoIterator<Item = NodeId>,
        body: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        let function = self.func(None, params, body);
        self.node(NodeKind::ArrowFunctionExpression(function))
    }

    /// Arrow with an expression body.
    pub fn arrow_expr(&self, params: impl IntoIterator<Item = NodeId>, body: NodeId) -> NodeId {
        let params = self.list(params);
        self.node(NodeKind::ArrowFunctionExpression(Function {
            params,
            body: Some(body),
            ..Function::default()
        }))
    }

    /// Class shape with the given members.
    pub fn class(
        &self,
        id: Option<NodeId>,
        super_class: Option<NodeId>,
        members: impl IntoIterator<Item = NodeId>,
    ) -> Class {
        let body = self.list(members);
        let body = self.node(NodeKind::ClassBody { body });
        Class {
            id,
            super_class,
            super_type_arguments: None,
            type_parameters: None,
            implements: NodeRange::EMPTY,
            body,
            decorators: NodeRange::EMPTY,
            is_abstract: false,
            declare: false,
        }
    }

    pub fn class_decl(&self, class: Class) -> NodeId {
        self.node(NodeKind::ClassDeclaration(class))
    }

    pub fn class_expr(&self, class: Class) -> NodeId {
        self.node(NodeKind::ClassExpression(class))
    }

    pub fn method(&self, key: NodeId, kind: MethodKind, function: Function) -> NodeId {
        let value = self.function_expr(function);
        self.node(NodeKind::MethodDefinition {
            key,
            value,
            kind,
            computed: false,
            is_static: false,
            is_abstract: false,
            decorators: NodeRange::EMPTY,
        })
    }

    pub fn class_property(&self, key: NodeId, value: Option<NodeId>) -> NodeId {
        self.node(NodeKind::PropertyDefinition {
            key,
            value,
            type_annotation: None,
            computed: false,
            is_static: false,
            is_abstract: false,
            declare: false,
            decorators: NodeRange::EMPTY,
        })
    }

    pub fn static_block(&self, body: impl IntoIterator<Item = NodeId>) -> NodeId {
        let body = self.list(body);
        self.node(NodeKind::StaticBlock { body })
    }

    // Expressions

    pub fn call(&self, callee: NodeId, arguments: impl IntoIterator<Item = NodeId>) -> NodeId {
        let arguments = self.list(arguments);
        self.node(NodeKind::CallExpression {
            callee,
            arguments,
            type_arguments: None,
            optional: false,
        })
    }

    pub fn new_expr(&self, callee: NodeId, arguments: impl IntoIterator<Item = NodeId>) -> NodeId {
        let arguments = self.list(arguments);
        self.node(NodeKind::NewExpression {
            callee,
            arguments,
            type_arguments: None,
        })
    }

    /// `object.property`
    pub fn member(&self, object: NodeId, property: &str) -> NodeId {
        let property = self.ident(property);
        self.node(NodeKind::MemberExpression {
            object,
            property,
            computed: false,
            optional: false,
        })
    }

    /// `object[property]`
    pub fn index(&self, object: NodeId, property: NodeId) -> NodeId {
        self.node(NodeKind::MemberExpression {
            object,
            property,
            computed: true,
            optional: false,
        })
    }

    pub fn assign(&self, left: NodeId, right: NodeId) -> NodeId {
        self.assign_op(super::AssignOp::Assign, left, right)
    }

    pub fn assign_op(&self, operator: super::AssignOp, left: NodeId, right: NodeId) -> NodeId {
        self.node(NodeKind::AssignmentExpression {
            operator,
            left,
            right,
        })
    }

    pub fn binary(&self, operator: super::BinaryOp, left: NodeId, right: NodeId) -> NodeId {
        self.node(NodeKind::BinaryExpression {
            operator,
            left,
            right,
        })
    }

    pub fn update(&self, operator: super::UpdateOp, argument: NodeId) -> NodeId {
        self.node(NodeKind::UpdateExpression {
            operator,
            argument,
            prefix: false,
        })
    }

    pub fn unary(&self, operator: super::UnaryOp, argument: NodeId) -> NodeId {
        self.node(NodeKind::UnaryExpression { operator, argument })
    }

    pub fn array(&self, elements: impl IntoIterator<Item = NodeId>) -> NodeId {
        let elements = self.list(elements);
        self.node(NodeKind::ArrayExpression { elements })
    }

    pub fn object(&self, properties: impl IntoIterator<Item = NodeId>) -> NodeId {
        let properties = self.list(properties);
        self.node(NodeKind::ObjectExpression { properties })
    }

    /// `key: value` in an object literal or object pattern.
    pub fn prop(&self, key: NodeId, value: NodeId) -> NodeId {
        self.node(NodeKind::Property {
            key,
            value,
            kind: PropertyKind::Init,
            computed: false,
            shorthand: false,
            method: false,
        })
    }

    /// `{ name }`: key and value are the same identifier node.
    pub fn shorthand(&self, name: &str) -> NodeId {
        let key = self.ident(name);
        self.node(NodeKind::Property {
            key,
            value: key,
            kind: PropertyKind::Init,
            computed: false,
            shorthand: true,
            method: false,
        })
    }

    pub fn spread(&self, argument: NodeId) -> NodeId {
        self.node(NodeKind::SpreadElement { argument })
    }

    // Patterns

    pub fn object_pattern(&self, properties: impl IntoIterator<Item = NodeId>) -> NodeId {
        let properties = self.list(properties);
        self.node(NodeKind::ObjectPattern {
            properties,
            type_annotation: None,
        })
    }

    pub fn array_pattern(&self, elements: impl IntoIterator<Item = NodeId>) -> NodeId {
        let elements = self.list(elements);
        self.node(NodeKind::ArrayPattern {
            elements,
            type_annotation: None,
        })
    }

    pub fn rest(&self, argument: NodeId) -> NodeId {
        self.node(NodeKind::RestElement {
            argument,
            type_annotation: None,
        })
    }

    /// `left = right` default in a pattern or parameter list.
    pub fn default_value(&self, left: NodeId, right: NodeId) -> NodeId {
        self.node(NodeKind::AssignmentPattern { left, right })
    }

    // Modules

    pub fn import(
        &self,
        specifiers: impl IntoIterator<Item = NodeId>,
        source: &str,
        import_kind: ModuleItemKind,
    ) -> NodeId {
        let specifiers = self.list(specifiers);
        let source = self.str_lit(source);
        self.node(NodeKind::ImportDeclaration {
            specifiers,
            source,
            import_kind,
        })
    }

    /// `{ imported as local }`, or `{ name }` when `local` is `None`.
    pub fn import_specifier(&self, imported: &str, local: Option<&str>) -> NodeId {
        let imported = self.ident(imported);
        let local = local.map_or(imported, |local| self.ident(local));
        self.node(NodeKind::ImportSpecifier {
            imported,
            local,
            import_kind: ModuleItemKind::Value,
        })
    }

    pub fn import_default(&self, local: &str) -> NodeId {
        let local = self.ident(local);
        self.node(NodeKind::ImportDefaultSpecifier { local })
    }

    pub fn import_namespace(&self, local: &str) -> NodeId {
        let local = self.ident(local);
        self.node(NodeKind::ImportNamespaceSpecifier { local })
    }

    pub fn export_decl(&self, declaration: NodeId) -> NodeId {
        self.node(NodeKind::ExportNamedDeclaration {
            declaration: Some(declaration),
            specifiers: NodeRange::EMPTY,
            source: None,
            export_kind: ModuleItemKind::Value,
        })
    }

    /// `export { a, b as c }` without a source.
    pub fn export_list(
        &self,
        specifiers: impl IntoIterator<Item = NodeId>,
        export_kind: ModuleItemKind,
    ) -> NodeId {
        let specifiers = self.list(specifiers);
        self.node(NodeKind::ExportNamedDeclaration {
            declaration: None,
            specifiers,
            source: None,
            export_kind,
        })
    }

    pub fn export_specifier(&self, local: &str, exported: Option<&str>) -> NodeId {
        let local = self.ident(local);
        let exported = exported.map_or(local, |exported| self.ident(exported));
        self.node(NodeKind::ExportSpecifier {
            local,
            exported,
            export_kind: ModuleItemKind::Value,
        })
    }

    pub fn export_default(&self, declaration: NodeId) -> NodeId {
        self.node(NodeKind::ExportDefaultDeclaration { declaration })
    }

    // TypeScript

    pub fn keyword(&self, keyword: TsKeyword) -> NodeId {
        self.node(NodeKind::TsKeyword(keyword))
    }

    /// `Name` in a type position.
    pub fn type_ref(&self, name: &str) -> NodeId {
        let type_name = self.ident(name);
        self.node(NodeKind::TsTypeReference {
            type_name,
            type_arguments: None,
        })
    }

    /// `Name<args>` in a type position.
    pub fn generic_ref(&self, name: &str, args: impl IntoIterator<Item = NodeId>) -> NodeId {
        let type_name = self.ident(name);
        let type_arguments = Some(self.type_args(args));
        self.node(NodeKind::TsTypeReference {
            type_name,
            type_arguments,
        })
    }

    pub fn type_args(&self, params: impl IntoIterator<Item = NodeId>) -> NodeId {
        let params = self.list(params);
        self.node(NodeKind::TsTypeParameterInstantiation { params })
    }

    pub fn type_param(&self, name: &str) -> NodeId {
        let name = self.ident(name);
        self.node(NodeKind::TsTypeParameter {
            name,
            constraint: None,
            default: None,
        })
    }

    pub fn type_params(&self, params: impl IntoIterator<Item = NodeId>) -> NodeId {
        let params = self.list(params);
        self.node(NodeKind::TsTypeParameterDeclaration { params })
    }

    /// `typeof expr`
    pub fn type_query(&self, expr_name: NodeId) -> NodeId {
        self.node(NodeKind::TsTypeQuery {
            expr_name,
            type_arguments: None,
        })
    }

    pub fn type_alias(&self, id: NodeId, type_parameters: Option<NodeId>, type_annotation: NodeId) -> NodeId {
        self.node(NodeKind::TsTypeAliasDeclaration {
            id,
            type_parameters,
            type_annotation,
            declare: false,
        })
    }

    pub fn interface(
        &self,
        id: NodeId,
        type_parameters: Option<NodeId>,
        body: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        let body = self.list(body);
        self.node(NodeKind::TsInterfaceDeclaration {
            id,
            type_parameters,
            extends: NodeRange::EMPTY,
            body,
            declare: false,
        })
    }

    pub fn property_signature(&self, key: NodeId, type_annotation: Option<NodeId>) -> NodeId {
        self.node(NodeKind::TsPropertySignature {
            key,
            type_annotation,
            computed: false,
            optional: false,
            readonly: false,
        })
    }

    pub fn function_type(&self, params: impl IntoIterator<Item = NodeId>, return_type: NodeId) -> NodeId {
        let params = self.list(params);
        self.node(NodeKind::TsFunctionType(Signature {
            params,
            return_type: Some(return_type),
            type_parameters: None,
        }))
    }

    pub fn union(&self, types: impl IntoIterator<Item = NodeId>) -> NodeId {
        let types = self.list(types);
        self.node(NodeKind::TsUnionType { types })
    }

    pub fn enum_decl(&self, id: NodeId, members: impl IntoIterator<Item = NodeId>) -> NodeId {
        let members = self.list(members);
        self.node(NodeKind::TsEnumDeclaration {
            id,
            members,
            is_const: false,
            declare: false,
        })
    }

    pub fn enum_member(&self, id: NodeId, initializer: Option<NodeId>) -> NodeId {
        self.node(NodeKind::TsEnumMember {
            id,
            initializer,
            computed: false,
        })
    }

    /// `namespace id { body }`; `declare` marks it ambient.
    pub fn namespace(&self, id: NodeId, body: impl IntoIterator<Item = NodeId>, declare: bool) -> NodeId {
        let body = self.list(body);
        let body = Some(self.node(NodeKind::TsModuleBlock { body }));
        self.node(NodeKind::TsModuleDeclaration {
            id,
            body,
            kind: ModuleDeclKind::Namespace,
            declare,
        })
    }

    // JSX

    /// `<name attrs>children</name>`, self-closing when `children` is empty.
    pub fn jsx_element(
        &self,
        name: NodeId,
        attributes: impl IntoIterator<Item = NodeId>,
        children: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        let attributes = self.list(attributes);
        let children = self.list(children);
        let self_closing = children.is_empty();
        let opening = self.node(NodeKind::JsxOpeningElement {
            name,
            attributes,
            type_arguments: None,
            self_closing,
        });
        self.node(NodeKind::JsxElement {
            opening,
            children,
            closing: None,
        })
    }

    pub fn jsx_ident(&self, name: &str) -> NodeId {
        let name_id = self.interner.intern(name);
        let mut state = self.state.borrow_mut();
        let width = u32::try_from(name.len()).unwrap_or(u32::MAX / 2);
        let span = state.advance(width);
        state.push(NodeKind::JsxIdentifier { name: name_id }, span)
    }

    pub fn jsx_fragment(&self, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        let children = self.list(children);
        self.node(NodeKind::JsxFragment { children })
    }
}
