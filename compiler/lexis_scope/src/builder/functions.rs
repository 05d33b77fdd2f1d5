//! Function-like nodes with a runtime body (or a body-less signature).

use lexis_ir::ast::{Function, NodeKind};
use lexis_ir::NodeId;

use super::Builder;
use crate::{AnalyzeError, Definition, DefinitionKind, ScopeKind};

impl Builder<'_> {
    pub(crate) fn visit_function(&mut self, node: NodeId, func: &Function) -> Result<(), AnalyzeError> {
        let kind = self.kind(node)?;
        let is_arrow = matches!(kind, NodeKind::ArrowFunctionExpression(_));

        // Declarations bind in the enclosing scope; a named expression binds
        // its own name in a scope of its own.
        match (kind, func.id) {
            (NodeKind::FunctionDeclaration(_) | NodeKind::TsDeclareFunction(_), Some(id)) => {
                let ambient = func.declare || self.in_ambient_context();
                self.define_here(
                    Definition::new(DefinitionKind::FunctionName, id, node).with_ambient(ambient),
                )?;
            }
            (NodeKind::FunctionExpression(_), Some(id)) => {
                self.open(ScopeKind::FunctionExpressionName, node)?;
                self.define_here(Definition::new(DefinitionKind::FunctionName, id, node))?;
            }
            _ => {}
        }

        // Parameter decorators run in the enclosing scope.
        for &param in self.list(func.params) {
            if let NodeKind::TsParameterProperty { decorators, .. } = *self.kind(param)? {
                self.visit_list(decorators)?;
            }
        }

        self.open(ScopeKind::Function, node)?;
        if !is_arrow {
            self.define_arguments();
        }

        for &param in self.list(func.params) {
            let pattern = self.collect_pattern(param)?;
            for target in &pattern.targets {
                self.define_here(Definition::new(
                    DefinitionKind::Parameter { rest: target.rest },
                    target.identifier,
                    node,
                ))?;
                self.reference_defaults(target, None, true)?;
            }
            self.visit_pattern_extras(&pattern)?;
        }

        self.visit_type_opt(func.return_type)?;
        self.visit_type_opt(func.type_parameters)?;

        if let Some(body) = func.body {
            // A block body shares the function scope.
            match *self.kind(body)? {
                NodeKind::BlockStatement { body } => self.visit_list(body)?,
                _ => self.visit(body)?,
            }
        }
        self.close(node)
    }
}
