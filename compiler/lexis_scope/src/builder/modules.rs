//! Imports, exports, enums, and namespaces.

use lexis_ir::ast::{ModuleDeclKind, ModuleItemKind, NodeKind};
use lexis_ir::NodeId;

use super::Builder;
use crate::{AnalyzeError, Definition, DefinitionKind, Namespace, ScopeKind};

impl Builder<'_> {
    pub(crate) fn visit_import(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        if !self.options.is_module() {
            return Err(AnalyzeError::ImportInScript { node });
        }
        let NodeKind::ImportDeclaration {
            specifiers,
            import_kind,
            ..
        } = *self.kind(node)?
        else {
            return Err(self.unexpected(node, "import"));
        };
        for &specifier in self.list(specifiers) {
            let (local, specifier_kind) = match *self.kind(specifier)? {
                NodeKind::ImportSpecifier {
                    local, import_kind, ..
                } => (local, import_kind),
                NodeKind::ImportDefaultSpecifier { local }
                | NodeKind::ImportNamespaceSpecifier { local } => (local, ModuleItemKind::Value),
                _ => return Err(self.unexpected(specifier, "import specifiers")),
            };
            let def = Definition::new(DefinitionKind::ImportBinding, local, specifier)
                .with_parent(node)
                .with_namespace(Self::item_namespace(import_kind, specifier_kind));
            self.define_here(def)?;
        }
        Ok(())
    }

    /// `import x = A.B.C` / `import x = require("m")`
    pub(crate) fn visit_import_equals(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        let NodeKind::TsImportEqualsDeclaration {
            id,
            module_reference,
            import_kind,
            ..
        } = *self.kind(node)?
        else {
            return Err(self.unexpected(node, "import-equals"));
        };
        let def = Definition::new(DefinitionKind::ImportBinding, id, node)
            .with_parent(node)
            .with_namespace(Self::item_namespace(import_kind, ModuleItemKind::Value));
        self.define_here(def)?;

        let mut entity = module_reference;
        while let NodeKind::TsQualifiedName { left, .. } = *self.kind(entity)? {
            entity = left;
        }
        if matches!(self.kind(entity)?, NodeKind::Identifier { .. }) {
            self.read(entity, Namespace::VALUE)?;
        }
        Ok(())
    }

    pub(crate) fn visit_export_named(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        let NodeKind::ExportNamedDeclaration {
            declaration,
            specifiers,
            source,
            export_kind,
        } = *self.kind(node)?
        else {
            return Err(self.unexpected(node, "export"));
        };
        if let Some(declaration) = declaration {
            return self.visit(declaration);
        }
        // Re-exports name bindings of another module.
        if source.is_some() {
            return Ok(());
        }
        for &specifier in self.list(specifiers) {
            let NodeKind::ExportSpecifier {
                local,
                export_kind: specifier_kind,
                ..
            } = *self.kind(specifier)?
            else {
                return Err(self.unexpected(specifier, "export specifiers"));
            };
            self.read(local, Self::item_namespace(export_kind, specifier_kind))?;
        }
        Ok(())
    }

    /// `export default x` and `export = x` reference both namespaces when
    /// the target is a bare identifier.
    pub(crate) fn visit_export_default(&mut self, target: NodeId) -> Result<(), AnalyzeError> {
        if matches!(self.kind(target)?, NodeKind::Identifier { .. }) {
            self.read(target, Namespace::all())?;
            Ok(())
        } else {
            self.visit(target)
        }
    }

    pub(crate) fn visit_enum(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        let NodeKind::TsEnumDeclaration {
            id,
            members,
            declare,
            ..
        } = *self.kind(node)?
        else {
            return Err(self.unexpected(node, "enum"));
        };
        let ambient = declare || self.in_ambient_context();
        self.define_here(Definition::new(DefinitionKind::EnumName, id, node).with_ambient(ambient))?;

        self.open(ScopeKind::Enum, node)?;
        for &member in self.list(members) {
            let NodeKind::TsEnumMember {
                id,
                initializer,
                computed,
            } = *self.kind(member)?
            else {
                return Err(self.unexpected(member, "enum members"));
            };
            let named = match self.kind(id)? {
                NodeKind::Identifier { .. } => !computed,
                NodeKind::Literal(lexis_ir::ast::Literal::String(_)) => true,
                _ => false,
            };
            if named {
                self.define_here(Definition::new(DefinitionKind::EnumMember, id, member))?;
            }
            self.visit_opt(initializer)?;
        }
        self.close(node)
    }

    /// `namespace A {}`, `module A.B {}`, `declare module "m" {}`, `declare global {}`
    pub(crate) fn visit_module_declaration(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
        let NodeKind::TsModuleDeclaration {
            id,
            body,
            kind,
            declare,
        } = *self.kind(node)?
        else {
            return Err(self.unexpected(node, "namespace"));
        };
        let ambient = declare || kind == ModuleDeclKind::Global || self.in_ambient_context();

        if kind != ModuleDeclKind::Global {
            let mut name = id;
            while let NodeKind::TsQualifiedName { left, .. } = *self.kind(name)? {
                name = left;
            }
            if matches!(self.kind(name)?, NodeKind::Identifier { .. }) {
                self.define_here(
                    Definition::new(DefinitionKind::NamespaceName, name, node).with_ambient(ambient),
                )?;
            }
        }

        self.open(ScopeKind::DeclarationNamespace, node)?;
        self.with_ambient(ambient, |this| match body {
            Some(body) => match *this.kind(body)? {
                NodeKind::TsModuleBlock { body } => this.visit_list(body),
                // `namespace A.B {}` lowered as nested declarations.
                NodeKind::TsModuleDeclaration { .. } => this.visit(body),
                _ => Err(this.unexpected(body, "namespace body")),
            },
            None => Ok(()),
        })?;
        self.close(node)
    }
}
