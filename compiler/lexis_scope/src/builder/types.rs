//! Type positions.
//!
//! Identifiers here are type-namespace references, with two exceptions:
//! `typeof x` and type predicates (`x is T`) name runtime values.

use lexis_ir::ast::{NodeKind, Signature};
use lexis_ir::NodeId;
use lexis_stack::ensure_sufficient_stack;

use super::Builder;
use crate::{AnalyzeError, Definition, DefinitionKind, Namespace, ScopeKind};

/// Nodes that only occur in type positions.
pub(super) fn is_type_node(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::TsTypeReference { .. }
            | NodeKind::TsQualifiedName { .. }
            | NodeKind::TsTypeQuery { .. }
            | NodeKind::TsImportType { .. }
            | NodeKind::TsKeyword(_)
            | NodeKind::TsThisType
            | NodeKind::TsLiteralType { .. }
            | NodeKind::TsTemplateLiteralType { .. }
            | NodeKind::TsTypeLiteral { .. }
            | NodeKind::TsPropertySignature { .. }
            | NodeKind::TsMethodSignature { .. }
            | NodeKind::TsCallSignatureDeclaration(_)
            | NodeKind::TsConstructSignatureDeclaration(_)
            | NodeKind::TsFunctionType(_)
            | NodeKind::TsConstructorType { .. }
            | NodeKind::TsUnionType { .. }
            | NodeKind::TsIntersectionType { .. }
            | NodeKind::TsArrayType { .. }
            | NodeKind::TsTupleType { .. }
            | NodeKind::TsNamedTupleMember { .. }
            | NodeKind::TsOptionalType { .. }
            | NodeKind::TsRestType { .. }
            | NodeKind::TsConditionalType { .. }
            | NodeKind::TsInferType { .. }
            | NodeKind::TsMappedType { .. }
            | NodeKind::TsIndexedAccessType { .. }
            | NodeKind::TsTypeOperator { .. }
            | NodeKind::TsTypePredicate { .. }
            | NodeKind::TsTypeParameterDeclaration { .. }
            | NodeKind::TsTypeParameter { .. }
            | NodeKind::TsTypeParameterInstantiation { .. }
            | NodeKind::TsInterfaceHeritage { .. }
            | NodeKind::TsClassImplements { .. }
    )
}

impl Builder<'_> {
    pub(crate) fn visit_type_opt(&mut self, node: Option<NodeId>) -> Result<(), AnalyzeError> {
        match node {
            Some(node) => self.visit_type(node),
            None => Ok(()),
        }
    }

    fn visit_types(&mut self, nodes: &[NodeId]) -> Result<(), AnalyzeError> {
        for &node in nodes {
            self.visit_type(node)?;
        }
        Ok(())
    }

    pub(crate) fn visit_type(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        ensure_sufficient_stack(|| self.visit_type_inner(node))
    }

    fn visit_type_inner(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        match *self.kind(node)? {
            NodeKind::Identifier { .. } => {
                self.read(node, Namespace::TYPE)?;
                Ok(())
            }
            NodeKind::TsQualifiedName { left, .. } => self.visit_type(left),
            // Heritage clauses (`extends a.B`) name the leftmost object.
            NodeKind::MemberExpression { object, .. } => self.visit_type(object),
            NodeKind::ThisExpression
            | NodeKind::TsThisType
            | NodeKind::TsKeyword(_)
            | NodeKind::Literal(_)
            | NodeKind::TemplateLiteral { .. }
            | NodeKind::UnaryExpression { .. } => Ok(()),
            NodeKind::TsLiteralType { .. } => Ok(()),

            NodeKind::TsTypeReference {
                type_name,
                type_arguments,
            } => {
                self.visit_type(type_name)?;
                self.visit_type_opt(type_arguments)
            }
            NodeKind::TsTypeQuery {
                expr_name,
                type_arguments,
            } => {
                let mut entity = expr_name;
                loop {
                    match *self.kind(entity)? {
                        NodeKind::TsQualifiedName { left, .. } => entity = left,
                        NodeKind::MemberExpression { object, .. } => entity = object,
                        _ => break,
                    }
                }
                match self.kind(entity)? {
                    NodeKind::Identifier { .. } => {
                        self.read(entity, Namespace::VALUE)?;
                    }
                    NodeKind::TsImportType { .. } => self.visit_type(entity)?,
                    _ => {}
                }
                self.visit_type_opt(type_arguments)
            }
            // The qualifier names an export of another module.
            NodeKind::TsImportType { type_arguments, .. } => self.visit_type_opt(type_arguments),
            NodeKind::TsInterfaceHeritage {
                expression,
                type_arguments,
            }
            | NodeKind::TsClassImplements {
                expression,
                type_arguments,
            } => {
                self.visit_type(expression)?;
                self.visit_type_opt(type_arguments)
            }

            NodeKind::TsTemplateLiteralType { types }
            | NodeKind::TsUnionType { types }
            | NodeKind::TsIntersectionType { types } => self.visit_types(self.list(types)),
            NodeKind::TsTupleType { element_types } => self.visit_types(self.list(element_types)),
            NodeKind::TsTypeLiteral { members } => self.visit_types(self.list(members)),
            NodeKind::TsTypeParameterDeclaration { params }
            | NodeKind::TsTypeParameterInstantiation { params } => self.visit_types(self.list(params)),
            NodeKind::TsArrayType { element_type } => self.visit_type(element_type),
            NodeKind::TsNamedTupleMember { element_type, .. } => self.visit_type(element_type),
            NodeKind::TsOptionalType { type_annotation }
            | NodeKind::TsRestType { type_annotation }
            | NodeKind::TsTypeOperator {
                type_annotation, ..
            } => self.visit_type(type_annotation),
            NodeKind::TsIndexedAccessType {
                object_type,
                index_type,
            } => {
                self.visit_type(object_type)?;
                self.visit_type(index_type)
            }

            NodeKind::TsPropertySignature {
                key,
                type_annotation,
                computed,
                ..
            } => {
                if computed {
                    self.visit(key)?;
                }
                self.visit_type_opt(type_annotation)
            }
            NodeKind::TsIndexSignature {
                parameters,
                type_annotation,
                ..
            } => {
                for &param in self.list(parameters) {
                    if let NodeKind::Identifier {
                        type_annotation, ..
                    } = *self.kind(param)?
                    {
                        self.visit_type_opt(type_annotation)?;
                    }
                }
                self.visit_type_opt(type_annotation)
            }
            NodeKind::TsMethodSignature {
                key,
                computed,
                ref signature,
            } => {
                if computed {
                    self.visit(key)?;
                }
                self.visit_signature(node, signature)
            }
            NodeKind::TsCallSignatureDeclaration(ref signature)
            | NodeKind::TsConstructSignatureDeclaration(ref signature)
            | NodeKind::TsFunctionType(ref signature)
            | NodeKind::TsConstructorType { ref signature, .. } => {
                self.visit_signature(node, signature)
            }

            NodeKind::TsConditionalType {
                check_type,
                extends_type,
                true_type,
                false_type,
            } => {
                // `infer` bindings are visible in the true branch only.
                self.open(ScopeKind::ConditionalType, node)?;
                self.visit_type(check_type)?;
                self.visit_type(extends_type)?;
                self.visit_type(true_type)?;
                self.close(node)?;
                self.visit_type(false_type)
            }
            NodeKind::TsInferType { type_parameter } => self.visit_infer(type_parameter),
            NodeKind::TsMappedType {
                key,
                constraint,
                name_type,
                type_annotation,
            } => {
                self.open(ScopeKind::MappedType, node)?;
                self.define_here(Definition::new(DefinitionKind::TypeAlias, key, node))?;
                self.visit_type(constraint)?;
                self.visit_type_opt(name_type)?;
                self.visit_type_opt(type_annotation)?;
                self.close(node)
            }
            NodeKind::TsTypePredicate {
                parameter_name,
                type_annotation,
                ..
            } => {
                if matches!(self.kind(parameter_name)?, NodeKind::Identifier { .. }) {
                    self.read(parameter_name, Namespace::VALUE)?;
                }
                self.visit_type_opt(type_annotation)
            }
            NodeKind::TsTypeParameter {
                name,
                constraint,
                default,
            } => {
                self.define_here(Definition::new(DefinitionKind::TypeAlias, name, node))?;
                self.visit_type_opt(constraint)?;
                self.visit_type_opt(default)
            }

            _ => Err(self.unexpected(node, "type position")),
        }
    }

    /// Signatures and function types: parameters are visible to the
    /// signature's own types only.
    fn visit_signature(&mut self, node: NodeId, signature: &Signature) -> Result<(), AnalyzeError> {
        self.open(ScopeKind::FunctionType, node)?;
        self.visit_type_opt(signature.type_parameters)?;
        for &param in self.list(signature.params) {
            let pattern = self.collect_pattern(param)?;
            for target in &pattern.targets {
                self.define_here(Definition::new(
                    DefinitionKind::Parameter { rest: target.rest },
                    target.identifier,
                    node,
                ))?;
            }
            for &annotation in &pattern.types {
                self.visit_type(annotation)?;
            }
        }
        self.visit_type_opt(signature.return_type)?;
        self.close(node)
    }

    /// `infer U` binds in the nearest conditional type, looking through the
    /// function-type and mapped-type scopes nested inside it.
    fn visit_infer(&mut self, type_parameter: NodeId) -> Result<(), AnalyzeError> {
        let NodeKind::TsTypeParameter {
            name, constraint, ..
        } = *self.kind(type_parameter)?
        else {
            return Err(self.unexpected(type_parameter, "infer"));
        };
        let mut target = self.current();
        let mut walk = Some(target);
        while let Some(id) = walk {
            let scope = &self.scopes[id.index()];
            match scope.kind {
                ScopeKind::FunctionType | ScopeKind::MappedType => walk = scope.parent,
                ScopeKind::ConditionalType => {
                    target = id;
                    break;
                }
                _ => break,
            }
        }
        self.define(target, Definition::new(DefinitionKind::TypeAlias, name, type_parameter))?;
        self.visit_type_opt(constraint)
    }

    /// `type A<T> = ...` and `interface A<T> { ... }`
    pub(crate) fn visit_type_declaration(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        let (id, type_parameters, declare) = match *self.kind(node)? {
            NodeKind::TsTypeAliasDeclaration {
                id,
                type_parameters,
                declare,
                ..
            }
            | NodeKind::TsInterfaceDeclaration {
                id,
                type_parameters,
                declare,
                ..
            } => (id, type_parameters, declare),
            _ => return Err(self.unexpected(node, "type declaration")),
        };
        let ambient = declare || self.in_ambient_context();
        self.define_here(Definition::new(DefinitionKind::TypeAlias, id, node).with_ambient(ambient))?;

        if let Some(type_parameters) = type_parameters {
            self.open(ScopeKind::TypeAlias, node)?;
            self.visit_type(type_parameters)?;
        }
        match *self.kind(node)? {
            NodeKind::TsTypeAliasDeclaration {
                type_annotation, ..
            } => self.visit_type(type_annotation)?,
            NodeKind::TsInterfaceDeclaration { extends, body, .. } => {
                self.visit_types(self.list(extends))?;
                self.visit_types(self.list(body))?;
            }
            _ => {}
        }
        self.close(node)
    }
}
