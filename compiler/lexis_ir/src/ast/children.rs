//! Child enumeration in source order.

use super::kind::{Class, Function, NodeKind, Signature};
use crate::{NodeId, NodeRange};

#[inline]
fn one(id: NodeId, f: &mut impl FnMut(NodeId)) {
    f(id);
}

#[inline]
fn opt(id: Option<NodeId>, f: &mut impl FnMut(NodeId)) {
    if let Some(id) = id {
        f(id);
    }
}

#[inline]
fn list(range: NodeRange, lists: &[NodeId], f: &mut impl FnMut(NodeId)) {
    if let Some(items) = lists.get(range.as_range()) {
        for &id in items {
            f(id);
        }
    }
}

fn function(func: &Function, lists: &[NodeId], f: &mut impl FnMut(NodeId)) {
    opt(func.id, f);
    opt(func.type_parameters, f);
    list(func.params, lists, f);
    opt(func.return_type, f);
    opt(func.body, f);
}

fn class(class: &Class, lists: &[NodeId], f: &mut impl FnMut(NodeId)) {
    list(class.decorators, lists, f);
    opt(class.id, f);
    opt(class.type_parameters, f);
    opt(class.super_class, f);
    opt(class.super_type_arguments, f);
    list(class.implements, lists, f);
    one(class.body, f);
}

fn signature(sig: &Signature, lists: &[NodeId], f: &mut impl FnMut(NodeId)) {
    opt(sig.type_parameters, f);
    list(sig.params, lists, f);
    opt(sig.return_type, f);
}

impl NodeKind {
    /// Call `f` for every direct child, in source order.
    pub(crate) fn for_each_child(&self, lists: &[NodeId], f: &mut impl FnMut(NodeId)) {
        match self {
            NodeKind::Program { body }
            | NodeKind::BlockStatement { body }
            | NodeKind::ClassBody { body }
            | NodeKind::StaticBlock { body }
            | NodeKind::TsModuleBlock { body } => list(*body, lists, f),
            NodeKind::Identifier {
                type_annotation, ..
            } => opt(*type_annotation, f),
            NodeKind::PrivateIdentifier { .. }
            | NodeKind::Literal(_)
            | NodeKind::EmptyStatement
            | NodeKind::DebuggerStatement
            | NodeKind::ThisExpression
            | NodeKind::Super
            | NodeKind::Elision
            | NodeKind::JsxIdentifier { .. }
            | NodeKind::JsxText
            | NodeKind::TsKeyword(_)
            | NodeKind::TsThisType => {}
            NodeKind::TemplateLiteral { expressions } => list(*expressions, lists, f),
            NodeKind::ExpressionStatement { expression, .. } => one(*expression, f),
            NodeKind::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                one(*test, f);
                one(*consequent, f);
                opt(*alternate, f);
            }
            NodeKind::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                opt(*init, f);
                opt(*test, f);
                opt(*update, f);
                one(*body, f);
            }
            NodeKind::ForInStatement { left, right, body }
            | NodeKind::ForOfStatement {
                left, right, body, ..
            } => {
                one(*left, f);
                one(*right, f);
                one(*body, f);
            }
            NodeKind::WhileStatement { test, body } => {
                one(*test, f);
                one(*body, f);
            }
            NodeKind::DoWhileStatement { body, test } => {
                one(*body, f);
                one(*test, f);
            }
            NodeKind::ReturnStatement { argument } | NodeKind::YieldExpression { argument, .. } => {
                opt(*argument, f);
            }
            NodeKind::ThrowStatement { argument }
            | NodeKind::SpreadElement { argument }
            | NodeKind::UnaryExpression { argument, .. }
            | NodeKind::UpdateExpression { argument, .. }
            | NodeKind::AwaitExpression { argument }
            | NodeKind::JsxSpreadAttribute { argument } => one(*argument, f),
            NodeKind::BreakStatement { label } | NodeKind::ContinueStatement { label } => {
                opt(*label, f);
            }
            NodeKind::LabeledStatement { label, body } => {
                one(*label, f);
                one(*body, f);
            }
            NodeKind::SwitchStatement {
                discriminant,
                cases,
            } => {
                one(*discriminant, f);
                list(*cases, lists, f);
            }
            NodeKind::SwitchCase { test, consequent } => {
                opt(*test, f);
                list(*consequent, lists, f);
            }
            NodeKind::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                one(*block, f);
                opt(*handler, f);
                opt(*finalizer, f);
            }
            NodeKind::CatchClause { param, body } => {
                opt(*param, f);
                one(*body, f);
            }
            NodeKind::WithStatement { object, body } => {
                one(*object, f);
                one(*body, f);
            }
            NodeKind::VariableDeclaration { declarations, .. } => list(*declarations, lists, f),
            NodeKind::VariableDeclarator { id, init } => {
                one(*id, f);
                opt(*init, f);
            }
            NodeKind::FunctionDeclaration(func)
            | NodeKind::FunctionExpression(func)
            | NodeKind::ArrowFunctionExpression(func)
            | NodeKind::TsDeclareFunction(func)
            | NodeKind::TsEmptyBodyFunctionExpression(func) => function(func, lists, f),
            NodeKind::ClassDeclaration(c) | NodeKind::ClassExpression(c) => class(c, lists, f),
            NodeKind::MethodDefinition {
                key,
                value,
                decorators,
                ..
            } => {
                list(*decorators, lists, f);
                one(*key, f);
                one(*value, f);
            }
            NodeKind::PropertyDefinition {
                key,
                value,
                type_annotation,
                decorators,
                ..
            }
            | NodeKind::AccessorProperty {
                key,
                value,
                type_annotation,
                decorators,
                ..
            } => {
                list(*decorators, lists, f);
                one(*key, f);
                opt(*type_annotation, f);
                opt(*value, f);
            }
            NodeKind::TsIndexSignature {
                parameters,
                type_annotation,
                ..
            } => {
                list(*parameters, lists, f);
                opt(*type_annotation, f);
            }
            NodeKind::Decorator { expression }
            | NodeKind::ChainExpression { expression }
            | NodeKind::TsNonNullExpression { expression }
            | NodeKind::TsExportAssignment { expression }
            | NodeKind::TsExternalModuleReference { expression }
            | NodeKind::JsxSpreadChild { expression } => one(*expression, f),
            NodeKind::ImportDeclaration {
                specifiers, source, ..
            } => {
                list(*specifiers, lists, f);
                one(*source, f);
            }
            NodeKind::ImportSpecifier {
                imported, local, ..
            } => {
                one(*imported, f);
                if local != imported {
                    one(*local, f);
                }
            }
            NodeKind::ImportDefaultSpecifier { local }
            | NodeKind::ImportNamespaceSpecifier { local } => one(*local, f),
            NodeKind::ExportNamedDeclaration {
                declaration,
                specifiers,
                source,
                ..
            } => {
                opt(*declaration, f);
                list(*specifiers, lists, f);
                opt(*source, f);
            }
            NodeKind::ExportSpecifier {
                local, exported, ..
            } => {
                one(*local, f);
                if exported != local {
                    one(*exported, f);
                }
            }
            NodeKind::ExportDefaultDeclaration { declaration } => one(*declaration, f),
            NodeKind::ExportAllDeclaration {
                exported, source, ..
            } => {
                opt(*exported, f);
                one(*source, f);
            }
            NodeKind::TsNamespaceExportDeclaration { id } => one(*id, f),
            NodeKind::TsImportEqualsDeclaration {
                id,
                module_reference,
                ..
            } => {
                one(*id, f);
                one(*module_reference, f);
            }
            NodeKind::ArrayExpression { elements } => list(*elements, lists, f),
            NodeKind::ObjectExpression { properties } => list(*properties, lists, f),
            NodeKind::Property {
                key,
                value,
                shorthand,
                ..
            } => {
                one(*key, f);
                if !*shorthand || key != value {
                    one(*value, f);
                }
            }
            NodeKind::BinaryExpression { left, right, .. }
            | NodeKind::LogicalExpression { left, right, .. }
            | NodeKind::AssignmentExpression { left, right, .. }
            | NodeKind::AssignmentPattern { left, right } => {
                one(*left, f);
                one(*right, f);
            }
            NodeKind::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                one(*test, f);
                one(*consequent, f);
                one(*alternate, f);
            }
            NodeKind::CallExpression {
                callee,
                arguments,
                type_arguments,
                ..
            }
            | NodeKind::NewExpression {
                callee,
                arguments,
                type_arguments,
            } => {
                one(*callee, f);
                opt(*type_arguments, f);
                list(*arguments, lists, f);
            }
            NodeKind::MemberExpression {
                object, property, ..
            } => {
                one(*object, f);
                one(*property, f);
            }
            NodeKind::SequenceExpression { expressions } => list(*expressions, lists, f),
            NodeKind::TaggedTemplateExpression {
                tag,
                quasi,
                type_arguments,
            } => {
                one(*tag, f);
                opt(*type_arguments, f);
                one(*quasi, f);
            }
            NodeKind::ImportExpression { source, options } => {
                one(*source, f);
                opt(*options, f);
            }
            NodeKind::MetaProperty { meta, property } => {
                one(*meta, f);
                one(*property, f);
            }
            NodeKind::TsAsExpression {
                expression,
                type_annotation,
            }
            | NodeKind::TsSatisfiesExpression {
                expression,
                type_annotation,
            } => {
                one(*expression, f);
                one(*type_annotation, f);
            }
            NodeKind::TsTypeAssertion {
                type_annotation,
                expression,
            } => {
                one(*type_annotation, f);
                one(*expression, f);
            }
            NodeKind::TsInstantiationExpression {
                expression,
                type_arguments,
            } => {
                one(*expression, f);
                one(*type_arguments, f);
            }
            NodeKind::ObjectPattern {
                properties,
                type_annotation,
            } => {
                list(*properties, lists, f);
                opt(*type_annotation, f);
            }
            NodeKind::ArrayPattern {
                elements,
                type_annotation,
            } => {
                list(*elements, lists, f);
                opt(*type_annotation, f);
            }
            NodeKind::RestElement {
                argument,
                type_annotation,
            } => {
                one(*argument, f);
                opt(*type_annotation, f);
            }
            NodeKind::TsParameterProperty {
                parameter,
                decorators,
                ..
            } => {
                list(*decorators, lists, f);
                one(*parameter, f);
            }
            NodeKind::JsxElement {
                opening,
                children,
                closing,
            } => {
                one(*opening, f);
                list(*children, lists, f);
                opt(*closing, f);
            }
            NodeKind::JsxOpeningElement {
                name,
                attributes,
                type_arguments,
                ..
            } => {
                one(*name, f);
                opt(*type_arguments, f);
                list(*attributes, lists, f);
            }
            NodeKind::JsxClosingElement { name } => one(*name, f),
            NodeKind::JsxFragment { children } => list(*children, lists, f),
            NodeKind::JsxMemberExpression { object, property } => {
                one(*object, f);
                one(*property, f);
            }
            NodeKind::JsxNamespacedName { namespace, name } => {
                one(*namespace, f);
                one(*name, f);
            }
            NodeKind::JsxAttribute { name, value } => {
                one(*name, f);
                opt(*value, f);
            }
            NodeKind::JsxExpressionContainer { expression } => opt(*expression, f),
            NodeKind::TsTypeAliasDeclaration {
                id,
                type_parameters,
                type_annotation,
                ..
            } => {
                one(*id, f);
                opt(*type_parameters, f);
                one(*type_annotation, f);
            }
            NodeKind::TsInterfaceDeclaration {
                id,
                type_parameters,
                extends,
                body,
                ..
            } => {
                one(*id, f);
                opt(*type_parameters, f);
                list(*extends, lists, f);
                list(*body, lists, f);
            }
            NodeKind::TsInterfaceHeritage {
                expression,
                type_arguments,
            }
            | NodeKind::TsClassImplements {
                expression,
                type_arguments,
            } => {
                one(*expression, f);
                opt(*type_arguments, f);
            }
            NodeKind::TsEnumDeclaration { id, members, .. } => {
                one(*id, f);
                list(*members, lists, f);
            }
            NodeKind::TsEnumMember {
                id, initializer, ..
            } => {
                one(*id, f);
                opt(*initializer, f);
            }
            NodeKind::TsModuleDeclaration { id, body, .. } => {
                one(*id, f);
                opt(*body, f);
            }
            NodeKind::TsTypeReference {
                type_name,
                type_arguments,
            } => {
                one(*type_name, f);
                opt(*type_arguments, f);
            }
            NodeKind::TsQualifiedName { left, right } => {
                one(*left, f);
                one(*right, f);
            }
            NodeKind::TsTypeQuery {
                expr_name,
                type_arguments,
            } => {
                one(*expr_name, f);
                opt(*type_arguments, f);
            }
            NodeKind::TsImportType {
                argument,
                qualifier,
                type_arguments,
            } => {
                one(*argument, f);
                opt(*qualifier, f);
                opt(*type_arguments, f);
            }
            NodeKind::TsLiteralType { literal } => one(*literal, f),
            NodeKind::TsTemplateLiteralType { types }
            | NodeKind::TsUnionType { types }
            | NodeKind::TsIntersectionType { types } => list(*types, lists, f),
            NodeKind::TsTypeLiteral { members } => list(*members, lists, f),
            NodeKind::TsPropertySignature {
                key,
                type_annotation,
                ..
            } => {
                one(*key, f);
                opt(*type_annotation, f);
            }
            NodeKind::TsMethodSignature { key, signature, .. } => {
                one(*key, f);
                self::signature(signature, lists, f);
            }
            NodeKind::TsCallSignatureDeclaration(sig)
            | NodeKind::TsConstructSignatureDeclaration(sig)
            | NodeKind::TsFunctionType(sig)
            | NodeKind::TsConstructorType { signature: sig, .. } => signature(sig, lists, f),
            NodeKind::TsArrayType { element_type } => one(*element_type, f),
            NodeKind::TsTupleType { element_types } => list(*element_types, lists, f),
            NodeKind::TsNamedTupleMember {
                label,
                element_type,
                ..
            } => {
                one(*label, f);
                one(*element_type, f);
            }
            NodeKind::TsOptionalType { type_annotation }
            | NodeKind::TsRestType { type_annotation }
            | NodeKind::TsTypeOperator {
                type_annotation, ..
            } => one(*type_annotation, f),
            NodeKind::TsConditionalType {
                check_type,
                extends_type,
                true_type,
                false_type,
            } => {
                one(*check_type, f);
                one(*extends_type, f);
                one(*true_type, f);
                one(*false_type, f);
            }
            NodeKind::TsInferType { type_parameter } => one(*type_parameter, f),
            NodeKind::TsMappedType {
                key,
                constraint,
                name_type,
                type_annotation,
            } => {
                one(*key, f);
                one(*constraint, f);
                opt(*name_type, f);
                opt(*type_annotation, f);
            }
            NodeKind::TsIndexedAccessType {
                object_type,
                index_type,
            } => {
                one(*object_type, f);
                one(*index_type, f);
            }
            NodeKind::TsTypePredicate {
                parameter_name,
                type_annotation,
                ..
            } => {
                one(*parameter_name, f);
                opt(*type_annotation, f);
            }
            NodeKind::TsTypeParameterDeclaration { params }
            | NodeKind::TsTypeParameterInstantiation { params } => list(*params, lists, f),
            NodeKind::TsTypeParameter {
                name,
                constraint,
                default,
            } => {
                one(*name, f);
                opt(*constraint, f);
                opt(*default, f);
            }
        }
    }
}
