//! JSX elements.
//!
//! Compiled JSX calls a factory (`React.createElement`) and, for fragments,
//! names a fragment component. Neither appears in the source, so the first
//! element or fragment records one synthetic reference to each, placed in
//! the scope that declares it.

use lexis_ir::ast::NodeKind;
use lexis_ir::{Name, NodeId, StringInterner};

use super::{Access, Builder};
use crate::{AnalyzeError, AnalyzeOptions, Namespace};

pub(super) struct JsxState {
    pragma: Option<Name>,
    fragment: Option<Name>,
    pragma_referenced: bool,
    fragment_referenced: bool,
}

impl JsxState {
    pub(super) fn new(
        interner: &StringInterner,
        options: &AnalyzeOptions,
    ) -> Result<Self, AnalyzeError> {
        let intern = |name: &Option<String>| {
            name.as_deref()
                .filter(|_| options.jsx)
                .map(|name| interner.try_intern(name))
                .transpose()
        };
        Ok(JsxState {
            pragma: intern(&options.jsx_pragma)?,
            fragment: intern(&options.jsx_fragment_name)?,
            pragma_referenced: false,
            fragment_referenced: false,
        })
    }
}

impl Builder<'_> {
    pub(super) fn visit_jsx(&mut self, node: NodeId, kind: &NodeKind) -> Result<(), AnalyzeError> {
        if !self.options.jsx {
            return Err(AnalyzeError::JsxDisabled { node });
        }
        match *kind {
            NodeKind::JsxElement { opening, children, .. } => {
                self.visit(opening)?;
                self.visit_list(children)
            }
            NodeKind::JsxOpeningElement {
                name,
                attributes,
                type_arguments,
                ..
            } => {
                self.reference_pragma()?;
                self.visit_jsx_name(name)?;
                self.visit_type_opt(type_arguments)?;
                self.visit_list(attributes)
            }
            NodeKind::JsxFragment { children } => {
                self.reference_pragma()?;
                self.reference_fragment()?;
                self.visit_list(children)
            }
            NodeKind::JsxAttribute { value, .. } => self.visit_opt(value),
            NodeKind::JsxSpreadAttribute { argument } => self.visit(argument),
            NodeKind::JsxExpressionContainer { expression } => self.visit_opt(expression),
            NodeKind::JsxSpreadChild { expression } => self.visit(expression),
            NodeKind::JsxClosingElement { .. }
            | NodeKind::JsxText
            | NodeKind::JsxNamespacedName { .. } => Ok(()),
            NodeKind::JsxIdentifier { .. } | NodeKind::JsxMemberExpression { .. } => {
                self.visit_jsx_name(node)
            }
            _ => Err(self.unexpected(node, "JSX")),
        }
    }

    /// Tag names: capitalised identifiers and member roots are component
    /// references; lowercase names are intrinsic elements.
    fn visit_jsx_name(&mut self, name: NodeId) -> Result<(), AnalyzeError> {
        match *self.kind(name)? {
            NodeKind::JsxIdentifier { name: text } => {
                let text = self.interner.lookup(text);
                let component = text != "this"
                    && text.chars().next().is_some_and(|first| !first.is_lowercase());
                if component {
                    self.read(name, Namespace::VALUE)?;
                }
                Ok(())
            }
            NodeKind::JsxMemberExpression { object, .. } => match *self.kind(object)? {
                NodeKind::JsxIdentifier { name: text } if self.interner.lookup(text) == "this" => {
                    Ok(())
                }
                NodeKind::JsxIdentifier { .. } => {
                    self.read(object, Namespace::VALUE)?;
                    Ok(())
                }
                _ => self.visit_jsx_name(object),
            },
            // `<svg:rect>` names an intrinsic element.
            NodeKind::JsxNamespacedName { .. } => Ok(()),
            _ => Err(self.unexpected(name, "JSX tag name")),
        }
    }

    fn reference_pragma(&mut self) -> Result<(), AnalyzeError> {
        if self.jsx.pragma_referenced {
            return Ok(());
        }
        if let Some(pragma) = self.jsx.pragma {
            self.jsx.pragma_referenced = self.reference_declared(pragma)?;
        }
        Ok(())
    }

    fn reference_fragment(&mut self) -> Result<(), AnalyzeError> {
        if self.jsx.fragment_referenced {
            return Ok(());
        }
        if let Some(fragment) = self.jsx.fragment {
            self.jsx.fragment_referenced = self.reference_declared(fragment)?;
        }
        Ok(())
    }

    /// Reference the innermost program declaration of `name` from the scope
    /// that declares it. Returns whether one was found; a name bound nowhere
    /// becomes an implicit global.
    fn reference_declared(&mut self, name: Name) -> Result<bool, AnalyzeError> {
        let found = self.stack.iter().rev().find_map(|frame| {
            let var = self.scopes[frame.scope.index()].lookup(name, Namespace::VALUE)?;
            let identifier = self.variables[var.index()].identifiers.first().copied();
            Some((frame.scope, identifier))
        });
        match found {
            Some((scope, Some(identifier))) => {
                self.reference_in(scope, identifier, Access::read(Namespace::VALUE))?;
                Ok(true)
            }
            // Ambient globals have no declaring identifier to point at.
            Some((_, None)) => Ok(false),
            None => {
                self.define_implicit_jsx(name);
                Ok(false)
            }
        }
    }
}
