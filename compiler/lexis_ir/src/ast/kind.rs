//! Node kinds and the small enums they carry.

use crate::{Name, NodeId, NodeRange};

/// Declaration keyword of a `VariableDeclaration`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarKind {
    Var,
    Let,
    Const,
    Using,
    AwaitUsing,
}

impl VarKind {
    /// `var` hoists to the enclosing function; everything else is block scoped.
    #[inline]
    pub const fn is_var(self) -> bool {
        matches!(self, VarKind::Var)
    }
}

/// `import type` / `export type` marker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModuleItemKind {
    #[default]
    Value,
    Type,
}

impl ModuleItemKind {
    #[inline]
    pub const fn is_type(self) -> bool {
        matches!(self, ModuleItemKind::Type)
    }
}

/// Keyword that introduced a `TsModuleDeclaration`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModuleDeclKind {
    /// `namespace A {}`
    Namespace,
    /// `module A {}` or `declare module "a" {}`
    Module,
    /// `declare global {}`
    Global,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Method,
    Constructor,
    Get,
    Set,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Accessibility {
    Public,
    Private,
    Protected,
}

/// Assignment operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssignOp {
    /// `=`
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    ExpAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
    BitOrAssign,
    BitXorAssign,
    BitAndAssign,
    /// `||=`
    OrAssign,
    /// `&&=`
    AndAssign,
    /// `??=`
    NullishAssign,
}

impl AssignOp {
    /// Plain `=`: the target is written without being read.
    #[inline]
    pub const fn is_plain(self) -> bool {
        matches!(self, AssignOp::Assign)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Minus,
    Plus,
    Not,
    BitNot,
    Typeof,
    Void,
    Delete,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Exp,
    BitOr,
    BitXor,
    BitAnd,
    In,
    InstanceOf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    Or,
    And,
    Nullish,
}

/// `keyof T`, `unique symbol`, `readonly T[]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperator {
    Keyof,
    Unique,
    Readonly,
}

/// Built-in keyword types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TsKeyword {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Object,
    Intrinsic,
}

/// Literal values. Floats are stored as bits so the enum stays `Eq + Hash`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    String(Name),
    Number(u64),
    BigInt(Name),
    Boolean(bool),
    Null,
    RegExp { pattern: Name, flags: Name },
}

/// Shared shape of every function-like node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Function {
    /// Name identifier; `None` for anonymous functions and arrows.
    pub id: Option<NodeId>,
    pub params: NodeRange,
    /// Block body, or a bare expression for concise arrows. `None` for
    /// overload signatures, `declare function`, and abstract methods.
    pub body: Option<NodeId>,
    pub type_parameters: Option<NodeId>,
    pub return_type: Option<NodeId>,
    pub is_async: bool,
    pub generator: bool,
    pub declare: bool,
}

/// Shared shape of class declarations and expressions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Class {
    pub id: Option<NodeId>,
    pub super_class: Option<NodeId>,
    pub super_type_arguments: Option<NodeId>,
    pub type_parameters: Option<NodeId>,
    /// `TsClassImplements` nodes.
    pub implements: NodeRange,
    /// The `ClassBody` node.
    pub body: NodeId,
    pub decorators: NodeRange,
    pub is_abstract: bool,
    pub declare: bool,
}

/// Shared shape of signatures in type positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    pub params: NodeRange,
    pub return_type: Option<NodeId>,
    pub type_parameters: Option<NodeId>,
}

/// Every node the front end can produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Program and names
    Program {
        body: NodeRange,
    },
    Identifier {
        name: Name,
        type_annotation: Option<NodeId>,
        optional: bool,
    },
    PrivateIdentifier {
        name: Name,
    },
    Literal(Literal),
    TemplateLiteral {
        expressions: NodeRange,
    },

    // Statements
    ExpressionStatement {
        expression: NodeId,
        /// Raw directive text (`"use strict"`) for prologue statements.
        directive: Option<Name>,
    },
    BlockStatement {
        body: NodeRange,
    },
    EmptyStatement,
    DebuggerStatement,
    IfStatement {
        test: NodeId,
        consequent: NodeId,
        alternate: Option<NodeId>,
    },
    ForStatement {
        init: Option<NodeId>,
        test: Option<NodeId>,
        update: Option<NodeId>,
        body: NodeId,
    },
    ForInStatement {
        left: NodeId,
        right: NodeId,
        body: NodeId,
    },
    ForOfStatement {
        left: NodeId,
        right: NodeId,
        body: NodeId,
        is_await: bool,
    },
    WhileStatement {
        test: NodeId,
        body: NodeId,
    },
    DoWhileStatement {
        body: NodeId,
        test: NodeId,
    },
    ReturnStatement {
        argument: Option<NodeId>,
    },
    ThrowStatement {
        argument: NodeId,
    },
    BreakStatement {
        label: Option<NodeId>,
    },
    ContinueStatement {
        label: Option<NodeId>,
    },
    LabeledStatement {
        label: NodeId,
        body: NodeId,
    },
    SwitchStatement {
        discriminant: NodeId,
        cases: NodeRange,
    },
    SwitchCase {
        test: Option<NodeId>,
        consequent: NodeRange,
    },
    TryStatement {
        block: NodeId,
        handler: Option<NodeId>,
        finalizer: Option<NodeId>,
    },
    CatchClause {
        param: Option<NodeId>,
        body: NodeId,
    },
    WithStatement {
        object: NodeId,
        body: NodeId,
    },
    VariableDeclaration {
        kind: VarKind,
        declarations: NodeRange,
        declare: bool,
    },
    VariableDeclarator {
        id: NodeId,
        init: Option<NodeId>,
    },

    // Functions and classes
    FunctionDeclaration(Function),
    FunctionExpression(Function),
    ArrowFunctionExpression(Function),
    /// Body-less `function f(): T;` overload or `declare function`.
    TsDeclareFunction(Function),
    /// Body-less method value (abstract methods, overload signatures in classes).
    TsEmptyBodyFunctionExpression(Function),
    ClassDeclaration(Class),
    ClassExpression(Class),
    ClassBody {
        body: NodeRange,
    },
    MethodDefinition {
        key: NodeId,
        value: NodeId,
        kind: MethodKind,
        computed: bool,
        is_static: bool,
        is_abstract: bool,
        decorators: NodeRange,
    },
    PropertyDefinition {
        key: NodeId,
        value: Option<NodeId>,
        type_annotation: Option<NodeId>,
        computed: bool,
        is_static: bool,
        is_abstract: bool,
        declare: bool,
        decorators: NodeRange,
    },
    AccessorProperty {
        key: NodeId,
        value: Option<NodeId>,
        type_annotation: Option<NodeId>,
        computed: bool,
        is_static: bool,
        is_abstract: bool,
        decorators: NodeRange,
    },
    StaticBlock {
        body: NodeRange,
    },
    TsIndexSignature {
        parameters: NodeRange,
        type_annotation: Option<NodeId>,
        is_static: bool,
    },
    Decorator {
        expression: NodeId,
    },

    // Modules
    ImportDeclaration {
        specifiers: NodeRange,
        source: NodeId,
        import_kind: ModuleItemKind,
    },
    ImportSpecifier {
        imported: NodeId,
        local: NodeId,
        import_kind: ModuleItemKind,
    },
    ImportDefaultSpecifier {
        local: NodeId,
    },
    ImportNamespaceSpecifier {
        local: NodeId,
    },
    ExportNamedDeclaration {
        declaration: Option<NodeId>,
        specifiers: NodeRange,
        source: Option<NodeId>,
        export_kind: ModuleItemKind,
    },
    ExportSpecifier {
        local: NodeId,
        exported: NodeId,
        export_kind: ModuleItemKind,
    },
    ExportDefaultDeclaration {
        declaration: NodeId,
    },
    ExportAllDeclaration {
        exported: Option<NodeId>,
        source: NodeId,
        export_kind: ModuleItemKind,
    },
    /// `export = x`
    TsExportAssignment {
        expression: NodeId,
    },
    /// `export as namespace X`
    TsNamespaceExportDeclaration {
        id: NodeId,
    },
    /// `import x = A.B` / `import x = require("a")`
    TsImportEqualsDeclaration {
        id: NodeId,
        module_reference: NodeId,
        import_kind: ModuleItemKind,
        is_export: bool,
    },
    TsExternalModuleReference {
        expression: NodeId,
    },

    // Expressions
    ThisExpression,
    Super,
    /// Hole in an array literal or array pattern (`[a, , b]`).
    Elision,
    ArrayExpression {
        elements: NodeRange,
    },
    ObjectExpression {
        properties: NodeRange,
    },
    Property {
        key: NodeId,
        value: NodeId,
        kind: PropertyKind,
        computed: bool,
        shorthand: bool,
        method: bool,
    },
    SpreadElement {
        argument: NodeId,
    },
    UnaryExpression {
        operator: UnaryOp,
        argument: NodeId,
    },
    UpdateExpression {
        operator: UpdateOp,
        argument: NodeId,
        prefix: bool,
    },
    BinaryExpression {
        operator: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
    LogicalExpression {
        operator: LogicalOp,
        left: NodeId,
        right: NodeId,
    },
    AssignmentExpression {
        operator: AssignOp,
        left: NodeId,
        right: NodeId,
    },
    ConditionalExpression {
        test: NodeId,
        consequent: NodeId,
        alternate: NodeId,
    },
    CallExpression {
        callee: NodeId,
        arguments: NodeRange,
        type_arguments: Option<NodeId>,
        optional: bool,
    },
    NewExpression {
        callee: NodeId,
        arguments: NodeRange,
        type_arguments: Option<NodeId>,
    },
    MemberExpression {
        object: NodeId,
        property: NodeId,
        computed: bool,
        optional: bool,
    },
    ChainExpression {
        expression: NodeId,
    },
    SequenceExpression {
        expressions: NodeRange,
    },
    AwaitExpression {
        argument: NodeId,
    },
    YieldExpression {
        argument: Option<NodeId>,
        delegate: bool,
    },
    TaggedTemplateExpression {
        tag: NodeId,
        quasi: NodeId,
        type_arguments: Option<NodeId>,
    },
    ImportExpression {
        source: NodeId,
        options: Option<NodeId>,
    },
    /// `new.target`, `import.meta`
    MetaProperty {
        meta: NodeId,
        property: NodeId,
    },
    TsAsExpression {
        expression: NodeId,
        type_annotation: NodeId,
    },
    TsSatisfiesExpression {
        expression: NodeId,
        type_annotation: NodeId,
    },
    TsTypeAssertion {
        type_annotation: NodeId,
        expression: NodeId,
    },
    TsNonNullExpression {
        expression: NodeId,
    },
    TsInstantiationExpression {
        expression: NodeId,
        type_arguments: NodeId,
    },

    // Patterns
    ObjectPattern {
        properties: NodeRange,
        type_annotation: Option<NodeId>,
    },
    ArrayPattern {
        elements: NodeRange,
        type_annotation: Option<NodeId>,
    },
    RestElement {
        argument: NodeId,
        type_annotation: Option<NodeId>,
    },
    AssignmentPattern {
        left: NodeId,
        right: NodeId,
    },
    /// Constructor parameter with an accessibility or `readonly` modifier.
    TsParameterProperty {
        parameter: NodeId,
        accessibility: Option<Accessibility>,
        readonly: bool,
        decorators: NodeRange,
    },

    // JSX
    JsxElement {
        opening: NodeId,
        children: NodeRange,
        closing: Option<NodeId>,
    },
    JsxOpeningElement {
        name: NodeId,
        attributes: NodeRange,
        type_arguments: Option<NodeId>,
        self_closing: bool,
    },
    JsxClosingElement {
        name: NodeId,
    },
    JsxFragment {
        children: NodeRange,
    },
    JsxIdentifier {
        name: Name,
    },
    JsxMemberExpression {
        object: NodeId,
        property: NodeId,
    },
    JsxNamespacedName {
        namespace: NodeId,
        name: NodeId,
    },
    JsxAttribute {
        name: NodeId,
        value: Option<NodeId>,
    },
    JsxSpreadAttribute {
        argument: NodeId,
    },
    JsxExpressionContainer {
        /// `None` for `{}` / `{/* comment */}`.
        expression: Option<NodeId>,
    },
    JsxSpreadChild {
        expression: NodeId,
    },
    JsxText,

    // TypeScript declarations
    TsTypeAliasDeclaration {
        id: NodeId,
        type_parameters: Option<NodeId>,
        type_annotation: NodeId,
        declare: bool,
    },
    TsInterfaceDeclaration {
        id: NodeId,
        type_parameters: Option<NodeId>,
        /// `TsInterfaceHeritage` nodes.
        extends: NodeRange,
        body: NodeRange,
        declare: bool,
    },
    TsInterfaceHeritage {
        expression: NodeId,
        type_arguments: Option<NodeId>,
    },
    TsClassImplements {
        expression: NodeId,
        type_arguments: Option<NodeId>,
    },
    TsEnumDeclaration {
        id: NodeId,
        members: NodeRange,
        is_const: bool,
        declare: bool,
    },
    TsEnumMember {
        /// Identifier or string literal key.
        id: NodeId,
        initializer: Option<NodeId>,
        computed: bool,
    },
    TsModuleDeclaration {
        /// Identifier, `TsQualifiedName` (`namespace A.B`), or string literal.
        id: NodeId,
        /// `TsModuleBlock`; `None` for `declare module "a";`.
        body: Option<NodeId>,
        kind: ModuleDeclKind,
        declare: bool,
    },
    TsModuleBlock {
        body: NodeRange,
    },

    // TypeScript types
    TsTypeReference {
        type_name: NodeId,
        type_arguments: Option<NodeId>,
    },
    TsQualifiedName {
        left: NodeId,
        right: NodeId,
    },
    /// `typeof x`
    TsTypeQuery {
        expr_name: NodeId,
        type_arguments: Option<NodeId>,
    },
    /// `import("mod").Name<T>`
    TsImportType {
        argument: NodeId,
        qualifier: Option<NodeId>,
        type_arguments: Option<NodeId>,
    },
    TsKeyword(TsKeyword),
    TsThisType,
    TsLiteralType {
        literal: NodeId,
    },
    TsTemplateLiteralType {
        types: NodeRange,
    },
    TsTypeLiteral {
        members: NodeRange,
    },
    TsPropertySignature {
        key: NodeId,
        type_annotation: Option<NodeId>,
        computed: bool,
        optional: bool,
        readonly: bool,
    },
    TsMethodSignature {
        key: NodeId,
        computed: bool,
        signature: Signature,
    },
    TsCallSignatureDeclaration(Signature),
    TsConstructSignatureDeclaration(Signature),
    TsFunctionType(Signature),
    TsConstructorType {
        signature: Signature,
        is_abstract: bool,
    },
    TsUnionType {
        types: NodeRange,
    },
    TsIntersectionType {
        types: NodeRange,
    },
    TsArrayType {
        element_type: NodeId,
    },
    TsTupleType {
        element_types: NodeRange,
    },
    TsNamedTupleMember {
        label: NodeId,
        element_type: NodeId,
        optional: bool,
    },
    TsOptionalType {
        type_annotation: NodeId,
    },
    TsRestType {
        type_annotation: NodeId,
    },
    TsConditionalType {
        check_type: NodeId,
        extends_type: NodeId,
        true_type: NodeId,
        false_type: NodeId,
    },
    TsInferType {
        /// `TsTypeParameter`.
        type_parameter: NodeId,
    },
    TsMappedType {
        /// Key identifier.
        key: NodeId,
        constraint: NodeId,
        name_type: Option<NodeId>,
        type_annotation: Option<NodeId>,
    },
    TsIndexedAccessType {
        object_type: NodeId,
        index_type: NodeId,
    },
    TsTypeOperator {
        operator: TypeOperator,
        type_annotation: NodeId,
    },
    TsTypePredicate {
        /// Identifier or `TsThisType`.
        parameter_name: NodeId,
        type_annotation: Option<NodeId>,
        asserts: bool,
    },
    TsTypeParameterDeclaration {
        params: NodeRange,
    },
    TsTypeParameter {
        name: NodeId,
        constraint: Option<NodeId>,
        default: Option<NodeId>,
    },
    TsTypeParameterInstantiation {
        params: NodeRange,
    },
}

impl NodeKind {
    /// ESTree-style node type name, used in error messages and traces.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Program { .. } => "Program",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::PrivateIdentifier { .. } => "PrivateIdentifier",
            NodeKind::Literal(_) => "Literal",
            NodeKind::TemplateLiteral { .. } => "TemplateLiteral",
            NodeKind::ExpressionStatement { .. } => "ExpressionStatement",
            NodeKind::BlockStatement { .. } => "BlockStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::DebuggerStatement => "DebuggerStatement",
            NodeKind::IfStatement { .. } => "IfStatement",
            NodeKind::ForStatement { .. } => "ForStatement",
            NodeKind::ForInStatement { .. } => "ForInStatement",
            NodeKind::ForOfStatement { .. } => "ForOfStatement",
            NodeKind::WhileStatement { .. } => "WhileStatement",
            NodeKind::DoWhileStatement { .. } => "DoWhileStatement",
            NodeKind::ReturnStatement { .. } => "ReturnStatement",
            NodeKind::ThrowStatement { .. } => "ThrowStatement",
            NodeKind::BreakStatement { .. } => "BreakStatement",
            NodeKind::ContinueStatement { .. } => "ContinueStatement",
            NodeKind::LabeledStatement { .. } => "LabeledStatement",
            NodeKind::SwitchStatement { .. } => "SwitchStatement",
            NodeKind::SwitchCase { .. } => "SwitchCase",
            NodeKind::TryStatement { .. } => "TryStatement",
            NodeKind::CatchClause { .. } => "CatchClause",
            NodeKind::WithStatement { .. } => "WithStatement",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::VariableDeclarator { .. } => "VariableDeclarator",
            NodeKind::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeKind::FunctionExpression(_) => "FunctionExpression",
            NodeKind::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            NodeKind::TsDeclareFunction(_) => "TSDeclareFunction",
            NodeKind::TsEmptyBodyFunctionExpression(_) => "TSEmptyBodyFunctionExpression",
            NodeKind::ClassDeclaration(_) => "ClassDeclaration",
            NodeKind::ClassExpression(_) => "ClassExpression",
            NodeKind::ClassBody { .. } => "ClassBody",
            NodeKind::MethodDefinition { .. } => "MethodDefinition",
            NodeKind::PropertyDefinition { .. } => "PropertyDefinition",
            NodeKind::AccessorProperty { .. } => "AccessorProperty",
            NodeKind::StaticBlock { .. } => "StaticBlock",
            NodeKind::TsIndexSignature { .. } => "TSIndexSignature",
            NodeKind::Decorator { .. } => "Decorator",
            NodeKind::ImportDeclaration { .. } => "ImportDeclaration",
            NodeKind::ImportSpecifier { .. } => "ImportSpecifier",
            NodeKind::ImportDefaultSpecifier { .. } => "ImportDefaultSpecifier",
            NodeKind::ImportNamespaceSpecifier { .. } => "ImportNamespaceSpecifier",
            NodeKind::ExportNamedDeclaration { .. } => "ExportNamedDeclaration",
            NodeKind::ExportSpecifier { .. } => "ExportSpecifier",
            NodeKind::ExportDefaultDeclaration { .. } => "ExportDefaultDeclaration",
            NodeKind::ExportAllDeclaration { .. } => "ExportAllDeclaration",
            NodeKind::TsExportAssignment { .. } => "TSExportAssignment",
            NodeKind::TsNamespaceExportDeclaration { .. } => "TSNamespaceExportDeclaration",
            NodeKind::TsImportEqualsDeclaration { .. } => "TSImportEqualsDeclaration",
            NodeKind::TsExternalModuleReference { .. } => "TSExternalModuleReference",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::Super => "Super",
            NodeKind::Elision => "Elision",
            NodeKind::ArrayExpression { .. } => "ArrayExpression",
            NodeKind::ObjectExpression { .. } => "ObjectExpression",
            NodeKind::Property { .. } => "Property",
            NodeKind::SpreadElement { .. } => "SpreadElement",
            NodeKind::UnaryExpression { .. } => "UnaryExpression",
            NodeKind::UpdateExpression { .. } => "UpdateExpression",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::LogicalExpression { .. } => "LogicalExpression",
            NodeKind::AssignmentExpression { .. } => "AssignmentExpression",
            NodeKind::ConditionalExpression { .. } => "ConditionalExpression",
            NodeKind::CallExpression { .. } => "CallExpression",
            NodeKind::NewExpression { .. } => "NewExpression",
            NodeKind::MemberExpression { .. } => "MemberExpression",
            NodeKind::ChainExpression { .. } => "ChainExpression",
            NodeKind::SequenceExpression { .. } => "SequenceExpression",
            NodeKind::AwaitExpression { .. } => "AwaitExpression",
            NodeKind::YieldExpression { .. } => "YieldExpression",
            NodeKind::TaggedTemplateExpression { .. } => "TaggedTemplateExpression",
            NodeKind::ImportExpression { .. } => "ImportExpression",
            NodeKind::MetaProperty { .. } => "MetaProperty",
            NodeKind::TsAsExpression { .. } => "TSAsExpression",
            NodeKind::TsSatisfiesExpression { .. } => "TSSatisfiesExpression",
            NodeKind::TsTypeAssertion { .. } => "TSTypeAssertion",
            NodeKind::TsNonNullExpression { .. } => "TSNonNullExpression",
            NodeKind::TsInstantiationExpression { .. } => "TSInstantiationExpression",
            NodeKind::ObjectPattern { .. } => "ObjectPattern",
            NodeKind::ArrayPattern { .. } => "ArrayPattern",
            NodeKind::RestElement { .. } => "RestElement",
            NodeKind::AssignmentPattern { .. } => "AssignmentPattern",
            NodeKind::TsParameterProperty { .. } => "TSParameterProperty",
            NodeKind::JsxElement { .. } => "JSXElement",
            NodeKind::JsxOpeningElement { .. } => "JSXOpeningElement",
            NodeKind::JsxClosingElement { .. } => "JSXClosingElement",
            NodeKind::JsxFragment { .. } => "JSXFragment",
            NodeKind::JsxIdentifier { .. } => "JSXIdentifier",
            NodeKind::JsxMemberExpression { .. } => "JSXMemberExpression",
            NodeKind::JsxNamespacedName { .. } => "JSXNamespacedName",
            NodeKind::JsxAttribute { .. } => "JSXAttribute",
            NodeKind::JsxSpreadAttribute { .. } => "JSXSpreadAttribute",
            NodeKind::JsxExpressionContainer { .. } => "JSXExpressionContainer",
            NodeKind::JsxSpreadChild { .. } => "JSXSpreadChild",
            NodeKind::JsxText => "JSXText",
            NodeKind::TsTypeAliasDeclaration { .. } => "TSTypeAliasDeclaration",
            NodeKind::TsInterfaceDeclaration { .. } => "TSInterfaceDeclaration",
            NodeKind::TsInterfaceHeritage { .. } => "TSInterfaceHeritage",
            NodeKind::TsClassImplements { .. } => "TSClassImplements",
            NodeKind::TsEnumDeclaration { .. } => "TSEnumDeclaration",
            NodeKind::TsEnumMember { .. } => "TSEnumMember",
            NodeKind::TsModuleDeclaration { .. } => "TSModuleDeclaration",
            NodeKind::TsModuleBlock { .. } => "TSModuleBlock",
            NodeKind::TsTypeReference { .. } => "TSTypeReference",
            NodeKind::TsQualifiedName { .. } => "TSQualifiedName",
            NodeKind::TsTypeQuery { .. } => "TSTypeQuery",
            NodeKind::TsImportType { .. } => "TSImportType",
            NodeKind::TsKeyword(_) => "TSKeyword",
            NodeKind::TsThisType => "TSThisType",
            NodeKind::TsLiteralType { .. } => "TSLiteralType",
            NodeKind::TsTemplateLiteralType { .. } => "TSTemplateLiteralType",
            NodeKind::TsTypeLiteral { .. } => "TSTypeLiteral",
            NodeKind::TsPropertySignature { .. } => "TSPropertySignature",
            NodeKind::TsMethodSignature { .. } => "TSMethodSignature",
            NodeKind::TsCallSignatureDeclaration(_) => "TSCallSignatureDeclaration",
            NodeKind::TsConstructSignatureDeclaration(_) => "TSConstructSignatureDeclaration",
            NodeKind::TsFunctionType(_) => "TSFunctionType",
            NodeKind::TsConstructorType { .. } => "TSConstructorType",
            NodeKind::TsUnionType { .. } => "TSUnionType",
            NodeKind::TsIntersectionType { .. } => "TSIntersectionType",
            NodeKind::TsArrayType { .. } => "TSArrayType",
            NodeKind::TsTupleType { .. } => "TSTupleType",
            NodeKind::TsNamedTupleMember { .. } => "TSNamedTupleMember",
            NodeKind::TsOptionalType { .. } => "TSOptionalType",
            NodeKind::TsRestType { .. } => "TSRestType",
            NodeKind::TsConditionalType { .. } => "TSConditionalType",
            NodeKind::TsInferType { .. } => "TSInferType",
            NodeKind::TsMappedType { .. } => "TSMappedType",
            NodeKind::TsIndexedAccessType { .. } => "TSIndexedAccessType",
            NodeKind::TsTypeOperator { .. } => "TSTypeOperator",
            NodeKind::TsTypePredicate { .. } => "TSTypePredicate",
            NodeKind::TsTypeParameterDeclaration { .. } => "TSTypeParameterDeclaration",
            NodeKind::TsTypeParameter { .. } => "TSTypeParameter",
            NodeKind::TsTypeParameterInstantiation { .. } => "TSTypeParameterInstantiation",
        }
    }

    /// JSX-only nodes; rejected when JSX is disabled.
    pub fn is_jsx(&self) -> bool {
        matches!(
            self,
            NodeKind::JsxElement { .. }
                | NodeKind::JsxOpeningElement { .. }
                | NodeKind::JsxClosingElement { .. }
                | NodeKind::JsxFragment { .. }
                | NodeKind::JsxIdentifier { .. }
                | NodeKind::JsxMemberExpression { .. }
                | NodeKind::JsxNamespacedName { .. }
                | NodeKind::JsxAttribute { .. }
                | NodeKind::JsxSpreadAttribute { .. }
                | NodeKind::JsxExpressionContainer { .. }
                | NodeKind::JsxSpreadChild { .. }
                | NodeKind::JsxText
        )
    }

    /// The `Function` payload of any function-like node.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            NodeKind::FunctionDeclaration(f)
            | NodeKind::FunctionExpression(f)
            | NodeKind::ArrowFunctionExpression(f)
            | NodeKind::TsDeclareFunction(f)
            | NodeKind::TsEmptyBodyFunctionExpression(f) => Some(f),
            _ => None,
        }
    }

    /// The `Class` payload of a class declaration or expression.
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            NodeKind::ClassDeclaration(c) | NodeKind::ClassExpression(c) => Some(c),
            _ => None,
        }
    }
}
