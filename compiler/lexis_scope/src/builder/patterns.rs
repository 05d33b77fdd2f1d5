//! Destructuring targets.
//!
//! A pattern is flattened into the identifiers it binds (with the default
//! values guarding each one), the expressions evaluated while destructuring
//! (computed keys, defaults, member-expression targets), and the type
//! annotations it carries. Callers decide what a target means: a parameter,
//! a declarator, a catch binding, or an assignment.

use lexis_ir::ast::NodeKind;
use lexis_ir::NodeId;
use lexis_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use super::{Access, Builder};
use crate::AnalyzeError;

/// One identifier bound by a pattern.
pub(crate) struct PatternTarget {
    pub(crate) identifier: NodeId,
    /// Direct argument of a rest element.
    pub(crate) rest: bool,
    /// Enclosing `AssignmentPattern`s, outermost first.
    pub(crate) assignments: SmallVec<[NodeId; 2]>,
}

#[derive(Default)]
pub(crate) struct Pattern {
    pub(crate) targets: Vec<PatternTarget>,
    /// Value-position nodes evaluated by the pattern.
    pub(crate) right_hand: Vec<NodeId>,
    /// Type annotations on the pattern and its parts.
    pub(crate) types: Vec<NodeId>,
}

impl Builder<'_> {
    pub(crate) fn collect_pattern(&self, node: NodeId) -> Result<Pattern, AnalyzeError> {
        let mut pattern = Pattern::default();
        let mut assignments = SmallVec::new();
        self.walk_pattern(node, false, &mut assignments, &mut pattern)?;
        Ok(pattern)
    }

    fn walk_pattern(
        &self,
        node: NodeId,
        rest: bool,
        assignments: &mut SmallVec<[NodeId; 2]>,
        out: &mut Pattern,
    ) -> Result<(), AnalyzeError> {
        ensure_sufficient_stack(|| match *self.kind(node)? {
            NodeKind::Identifier {
                type_annotation, ..
            } => {
                out.targets.push(PatternTarget {
                    identifier: node,
                    rest,
                    assignments: assignments.clone(),
                });
                out.types.extend(type_annotation);
                Ok(())
            }
            NodeKind::ObjectPattern {
                properties,
                type_annotation,
            } => {
                for &property in self.list(properties) {
                    match *self.kind(property)? {
                        NodeKind::Property {
                            key,
                            value,
                            computed,
                            ..
                        } => {
                            if computed {
                                out.right_hand.push(key);
                            }
                            self.walk_pattern(value, false, assignments, out)?;
                        }
                        NodeKind::RestElement { .. } => {
                            self.walk_pattern(property, false, assignments, out)?;
                        }
                        _ => return Err(self.unexpected(property, "object pattern")),
                    }
                }
                out.types.extend(type_annotation);
                Ok(())
            }
            NodeKind::ArrayPattern {
                elements,
                type_annotation,
            } => {
                for &element in self.list(elements) {
                    if !matches!(self.kind(element)?, NodeKind::Elision) {
                        self.walk_pattern(element, false, assignments, out)?;
                    }
                }
                out.types.extend(type_annotation);
                Ok(())
            }
            NodeKind::AssignmentPattern { left, right } => {
                assignments.push(node);
                let walked = self.walk_pattern(left, rest, assignments, out);
                assignments.pop();
                walked?;
                out.right_hand.push(right);
                Ok(())
            }
            NodeKind::RestElement {
                argument,
                type_annotation,
            } => {
                self.walk_pattern(argument, true, assignments, out)?;
                out.types.extend(type_annotation);
                Ok(())
            }
            NodeKind::TsParameterProperty { parameter, .. } => {
                self.walk_pattern(parameter, rest, assignments, out)
            }
            // `[a.b] = c` assigns through the member; its object is read.
            NodeKind::MemberExpression { .. } => {
                out.right_hand.push(node);
                Ok(())
            }
            _ => Err(self.unexpected(node, "pattern")),
        })
    }

    /// Write references for the default values guarding `target`.
    pub(crate) fn reference_defaults(
        &mut self,
        target: &PatternTarget,
        implicit_global: Option<NodeId>,
        init: bool,
    ) -> Result<(), AnalyzeError> {
        for &assignment in &target.assignments {
            let NodeKind::AssignmentPattern { right, .. } = *self.kind(assignment)? else {
                return Err(self.unexpected(assignment, "default value"));
            };
            self.reference(
                target.identifier,
                Access::write(Some(right), init, implicit_global),
            )?;
        }
        Ok(())
    }

    /// Visit what a pattern evaluates: right-hand nodes as values, then
    /// annotations as types.
    pub(crate) fn visit_pattern_extras(&mut self, pattern: &Pattern) -> Result<(), AnalyzeError> {
        for &node in &pattern.right_hand {
            self.visit(node)?;
        }
        for &node in &pattern.types {
            self.visit_type(node)?;
        }
        Ok(())
    }

    pub(crate) fn visit_assignment(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        let NodeKind::AssignmentExpression {
            operator,
            left,
            right,
        } = *self.kind(node)?
        else {
            return Err(self.unexpected(node, "assignment"));
        };

        let mut target = left;
        loop {
            match *self.kind(target)? {
                NodeKind::TsAsExpression {
                    expression,
                    type_annotation,
                }
                | NodeKind::TsSatisfiesExpression {
                    expression,
                    type_annotation,
                }
                | NodeKind::TsTypeAssertion {
                    type_annotation,
                    expression,
                } => {
                    self.visit_type(type_annotation)?;
                    target = expression;
                }
                NodeKind::TsNonNullExpression { expression } => target = expression,
                _ => break,
            }
        }

        let is_pattern = matches!(
            self.kind(target)?,
            NodeKind::Identifier { .. }
                | NodeKind::ObjectPattern { .. }
                | NodeKind::ArrayPattern { .. }
                | NodeKind::RestElement { .. }
                | NodeKind::AssignmentPattern { .. }
        );
        if !is_pattern {
            self.visit(target)?;
        } else if operator.is_plain() {
            self.visit_assignment_target(node, target, Some(right))?;
        } else if matches!(self.kind(target)?, NodeKind::Identifier { .. }) {
            self.reference(target, Access::read_write(Some(right)))?;
        }
        self.visit(right)
    }

    /// Write references for every identifier `target` assigns, with
    /// implicit-global tracking outside strict code.
    pub(crate) fn visit_assignment_target(
        &mut self,
        node: NodeId,
        target: NodeId,
        write_expr: Option<NodeId>,
    ) -> Result<(), AnalyzeError> {
        let implicit_global = (!self.current_scope().is_strict).then_some(node);
        let pattern = self.collect_pattern(target)?;
        for target in &pattern.targets {
            self.reference_defaults(target, implicit_global, false)?;
            self.reference(
                target.identifier,
                Access::write(write_expr, false, implicit_global),
            )?;
        }
        self.visit_pattern_extras(&pattern)
    }
}
