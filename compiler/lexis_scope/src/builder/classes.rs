//! Class declarations, expressions, and their members.

use lexis_ir::ast::{Class, NodeKind};
use lexis_ir::{NodeId, NodeRange};

use super::Builder;
use crate::{AnalyzeError, Definition, DefinitionKind, ScopeKind};

impl Builder<'_> {
    pub(crate) fn visit_class(&mut self, node: NodeId, class: &Class) -> Result<(), AnalyzeError> {
        let ambient = class.declare || self.in_ambient_context();
        if let (NodeKind::ClassDeclaration(_), Some(id)) = (self.kind(node)?, class.id) {
            self.define_here(Definition::new(DefinitionKind::ClassName, id, node).with_ambient(ambient))?;
        }
        self.visit_list(class.decorators)?;

        self.open(ScopeKind::Class, node)?;
        // The body sees its own binding of the class name, separate from the
        // outer one.
        if let Some(id) = class.id {
            self.define_here(Definition::new(DefinitionKind::ClassName, id, node).with_ambient(ambient))?;
        }
        self.visit_opt(class.super_class)?;
        self.visit_type_opt(class.type_parameters)?;
        self.visit_type_opt(class.super_type_arguments)?;
        for &implements in self.list(class.implements) {
            self.visit_type(implements)?;
        }
        match *self.kind(class.body)? {
            NodeKind::ClassBody { body } => self.visit_class_members(body)?,
            _ => return Err(self.unexpected(class.body, "class body")),
        }
        self.close(node)
    }

    pub(crate) fn visit_class_members(&mut self, members: NodeRange) -> Result<(), AnalyzeError> {
        for &member in self.list(members) {
            self.visit_class_member(member)?;
        }
        Ok(())
    }

    pub(crate) fn visit_class_member(&mut self, member: NodeId) -> Result<(), AnalyzeError> {
        match *self.kind(member)? {
            NodeKind::MethodDefinition {
                key,
                value,
                computed,
                decorators,
                ..
            } => {
                if computed {
                    self.visit(key)?;
                }
                self.visit(value)?;
                self.visit_list(decorators)
            }
            NodeKind::PropertyDefinition {
                key,
                value,
                type_annotation,
                computed,
                decorators,
                ..
            }
            | NodeKind::AccessorProperty {
                key,
                value,
                type_annotation,
                computed,
                decorators,
                ..
            } => {
                if computed {
                    self.visit(key)?;
                }
                if let Some(value) = value {
                    self.open(ScopeKind::ClassFieldInitializer, value)?;
                    self.visit(value)?;
                    self.close(value)?;
                }
                self.visit_list(decorators)?;
                self.visit_type_opt(type_annotation)
            }
            NodeKind::StaticBlock { body } => {
                self.open(ScopeKind::ClassStaticBlock, member)?;
                self.visit_list(body)?;
                self.close(member)
            }
            NodeKind::TsIndexSignature { .. } => self.visit_type(member),
            _ => Err(self.unexpected(member, "class body")),
        }
    }
}
