use tracing::{debug, trace};

use crate::{
    arena::arena::{Arena, Idx},
    ast::{
        ast::{AstNode, NodeId, NodeList, Program},
        expressions::{BinaryOp, Call, Expr, ExprKind, LiteralKind, UnaryOp},
        items::{Enum, Function, FunctionParam, Primary, PrimaryTagKind, Struct},
        statements::{
            Assignment, Block, BlockTagKind, Conditional, Declaration, Return, Statement,
            StatementKind, While,
        },
        types::{Identifier, Qualifier, QualifierKind, SimpleType, TypeKind, TypeNode},
    },
    config::FrontendConfig,
    errors::errors::{Error, ErrorImpl, ErrorKind},
    Span,
};

use super::{
    scope::{ScopeId, ScopeTree},
    symbol::{
        binary_result, match_assignment_types, EnumDecl, FunctionDecl, Primitive, Qualifiers,
        StructDecl, Symbol, SymbolId, SymbolKind, Ty,
    },
    typed_ast::{Resolution, TypedAst},
};

/// Semantic analysis state for one program.
///
/// Holds the scope tree, every symbol created, and the side tables in
/// [`TypedAst`]. Everything borrows names from the program's source.
pub struct TypeChecker<'a> {
    program: &'a Program<'a>,
    pub scopes: ScopeTree<'a>,
    pub symbols: Arena<Symbol<'a>>,
    pub typed_ast: TypedAst,
    pub global_scope: ScopeId,
    current_scope: ScopeId,
    current_function: Option<SymbolId>,
    errors: Vec<Error>,
    config: FrontendConfig,
}

impl<'a> TypeChecker<'a> {
    pub fn new(program: &'a Program<'a>, config: &FrontendConfig) -> Self {
        let mut scopes = ScopeTree::with_capacity(config.scope_capacity);
        let global_scope = scopes.create(None);

        TypeChecker {
            program,
            scopes,
            symbols: Arena::with_capacity(config.symbol_capacity),
            typed_ast: TypedAst::default(),
            global_scope,
            current_scope: global_scope,
            current_function: None,
            errors: vec![],
            config: config.clone(),
        }
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol<'a> {
        &self.symbols[Idx::from_raw(id.0)]
    }

    fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol<'a> {
        &mut self.symbols[Idx::from_raw(id.0)]
    }

    /// Finds a top-level name.
    pub fn lookup_global(&self, name: &str) -> Option<SymbolId> {
        self.scopes.resolve_local(self.global_scope, name)
    }

    /// Human-readable name of a type for diagnostics.
    pub fn describe(&self, ty: Ty) -> String {
        match ty {
            Ty::Primitive(primitive) => primitive.name().to_string(),
            Ty::Pointer => String::from("pointer"),
            Ty::EnumInstance(decl) | Ty::StructInstance(decl) => self.symbol(decl).name.to_string(),
            Ty::EnumDecl(decl) => format!("enum {}", self.symbol(decl).name),
            Ty::StructDecl(decl) => format!("struct {}", self.symbol(decl).name),
            Ty::Function(decl) => format!("func {}", self.symbol(decl).name),
        }
    }

    fn alloc_symbol(&mut self, symbol: Symbol<'a>) -> SymbolId {
        debug!(name = symbol.name, scope = self.current_scope.0, "declare symbol");
        SymbolId(self.symbols.alloc(symbol).raw())
    }

    fn declare(&mut self, name: &'a str, symbol: SymbolId, span: Span) -> Result<(), Error> {
        self.scopes
            .declare(self.current_scope, name, symbol)
            .map_err(|_| redeclaration(name, span))
    }

    fn enter_scope(&mut self, scope: ScopeId) -> ScopeId {
        trace!(scope = scope.0, parent = self.current_scope.0, "enter scope");
        std::mem::replace(&mut self.current_scope, scope)
    }

    fn leave_scope(&mut self, previous: ScopeId) {
        trace!(scope = self.current_scope.0, "leave scope");
        self.current_scope = previous;
    }

    fn report(&mut self, error: Error) {
        if self.limit_reached() {
            return;
        }
        debug!(error = %error, position = error.get_position(), "analysis error");
        self.errors.push(error);
    }

    /// Records the error, if any, and lets analysis carry on.
    fn recover<T>(&mut self, result: Result<T, Error>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.report(error);
                None
            }
        }
    }

    fn limit_reached(&self) -> bool {
        self.config.limit_reached(self.errors.len())
    }

    fn node_span<T: AstNode>(&self, id: NodeId<T>) -> Span {
        self.program.byte_span(self.program.ast.get(id).span())
    }

    fn mismatch(&self, expected: Ty, received: Ty, span: Span) -> Error {
        Error::new(
            ErrorImpl::TypeMismatch {
                expected: self.describe(expected),
                received: self.describe(received),
            },
            span,
        )
    }

    fn expect_assignable(&self, destination: Ty, source: Ty, span: Span) -> Result<(), Error> {
        if match_assignment_types(destination, source) {
            Ok(())
        } else {
            Err(self.mismatch(destination, source, span))
        }
    }

    // NAMES

    /// Name and span of a declaring identifier, which must not be dotted.
    fn plain_name(&self, identifier: NodeId<Identifier>) -> Result<(&'a str, Span), Error> {
        let program = self.program;
        let node = program.ast.get(identifier);
        let name = program.token_text(node.name);
        let span = program.token_span(node.name);

        if let Some(next) = node.next {
            let member = program.ast.get(next).name;
            return Err(Error::new(
                ErrorImpl::InvalidMemberAccess {
                    base: name.to_string(),
                    member: program.token_text(member).to_string(),
                },
                program.token_span(member),
            ));
        }

        Ok((name, span))
    }

    /// Like [`Self::plain_name`], and the name must be new to the current scope.
    fn fresh_name(&self, identifier: NodeId<Identifier>) -> Result<(&'a str, Span), Error> {
        let (name, span) = self.plain_name(identifier)?;
        if self.scopes.resolve_local(self.current_scope, name).is_some() {
            return Err(redeclaration(name, span));
        }
        Ok((name, span))
    }

    fn struct_scope(&self, decl: SymbolId) -> Option<ScopeId> {
        match &self.symbol(decl).kind {
            SymbolKind::Struct(structure) => Some(structure.scope),
            _ => None,
        }
    }

    /// Resolves a possibly dotted name.
    ///
    /// The first segment is looked up through the scope chain. Each later
    /// segment must be a member of the struct instance before it, except
    /// that an enum name may be followed by one final member name.
    pub fn resolve_identifier(&mut self, identifier: NodeId<Identifier>) -> Result<Resolution, Error> {
        let program = self.program;
        let first = program.ast.get(identifier);
        let name = program.token_text(first.name);

        let mut current = self.scopes.resolve(self.current_scope, name).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnresolvedIdentifier {
                    name: name.to_string(),
                },
                program.token_span(first.name),
            )
        })?;
        self.typed_ast
            .record_resolution(identifier, Resolution::Symbol(current));

        let mut base = name;
        let mut segment = first.next;

        while let Some(segment_id) = segment {
            let node = program.ast.get(segment_id);
            let member = program.token_text(node.name);
            let invalid = || {
                Error::new(
                    ErrorImpl::InvalidMemberAccess {
                        base: base.to_string(),
                        member: member.to_string(),
                    },
                    program.token_span(node.name),
                )
            };

            let kind = &self.symbol(current).kind;
            let member_scope = match kind {
                SymbolKind::StructInstance { decl } => self.struct_scope(*decl),
                _ => None,
            };
            let enum_ordinal = match kind {
                SymbolKind::Enum(decl) if node.next.is_none() => Some(decl.ordinal(member)),
                _ => None,
            };

            if let Some(scope) = member_scope {
                current = self.scopes.resolve_local(scope, member).ok_or_else(invalid)?;
                self.typed_ast
                    .record_resolution(segment_id, Resolution::Symbol(current));
            } else if let Some(ordinal) = enum_ordinal {
                let resolution = Resolution::EnumMember {
                    decl: current,
                    ordinal: ordinal.ok_or_else(invalid)?,
                };
                self.typed_ast.record_resolution(segment_id, resolution);
                return Ok(resolution);
            } else {
                return Err(invalid());
            }

            base = member;
            segment = node.next;
        }

        Ok(Resolution::Symbol(current))
    }

    fn resolution_ty(&self, resolution: Resolution) -> Ty {
        match resolution {
            Resolution::Symbol(id) => self.symbol(id).ty(id),
            Resolution::EnumMember { decl, .. } => Ty::EnumInstance(decl),
        }
    }

    /// Type a declaration of this annotation holds.
    fn resolve_type(&mut self, type_node: NodeId<TypeNode>) -> Result<Ty, Error> {
        let program = self.program;

        let identifier = match program.ast.get(type_node).kind {
            TypeKind::Simple(simple) => return Ok(Ty::Primitive(simple_primitive(simple))),
            TypeKind::Named(identifier) => identifier,
        };

        let unknown = || {
            Error::new(
                ErrorImpl::UnknownType {
                    type_: program.identifier_path(identifier),
                },
                program.byte_span(program.ast.get(type_node).span),
            )
        };

        let resolution = match self.resolve_identifier(identifier) {
            Ok(resolution) => resolution,
            Err(error) if error.kind() == ErrorKind::UnresolvedIdentifier => return Err(unknown()),
            Err(error) => return Err(error),
        };

        match resolution {
            Resolution::Symbol(id) => match self.symbol(id).kind {
                SymbolKind::Struct(_) => Ok(Ty::StructInstance(id)),
                SymbolKind::Enum(_) => Ok(Ty::EnumInstance(id)),
                _ => Err(unknown()),
            },
            Resolution::EnumMember { .. } => Err(unknown()),
        }
    }

    fn qualifiers(&self, list: NodeList<NodeId<Qualifier>>) -> Qualifiers {
        let ast = &self.program.ast;
        let mut qualifiers = Qualifiers::default();

        for qualifier in ast.list(list) {
            match ast.get(qualifier).kind {
                QualifierKind::Const => qualifiers.constant = true,
                QualifierKind::Mut => qualifiers.mutable = true,
                QualifierKind::Export => qualifiers.export = true,
            }
        }

        qualifiers
    }

    // EXPRESSIONS

    pub fn check_expr(&mut self, expr_id: NodeId<Expr>) -> Result<Ty, Error> {
        let program = self.program;
        let expr = program.ast.get(expr_id);
        let span = program.byte_span(expr.span);

        let ty = match expr.kind {
            ExprKind::Literal(literal) => Ty::Primitive(match literal.kind {
                LiteralKind::String => Primitive::String,
                LiteralKind::Int => Primitive::U32,
                LiteralKind::Float => Primitive::F32,
                LiteralKind::Bool(_) => Primitive::Bool,
            }),
            ExprKind::Identifier(identifier) => {
                let resolution = self.resolve_identifier(identifier)?;
                self.resolution_ty(resolution)
            }
            ExprKind::Call(call) => self.check_call(call, span)?,
            ExprKind::Unary(unary) => {
                let operand = self.check_expr(unary.operand)?;
                let (valid, expected) = match unary.op {
                    UnaryOp::Not => (operand.is_bool(), "bool"),
                    UnaryOp::Plus | UnaryOp::Minus => (operand.is_numeric(), "numeric"),
                };

                if !valid {
                    return Err(Error::new(
                        ErrorImpl::TypeMismatch {
                            expected: expected.to_string(),
                            received: self.describe(operand),
                        },
                        span,
                    ));
                }
                operand
            }
            ExprKind::Binary(binary) => {
                let left = self.check_expr(binary.left)?;
                let right = self.check_expr(binary.right)?;

                match binary_result(binary.op, left, right) {
                    Some(ty) => ty,
                    None => return Err(self.binary_error(binary.op, left, right, span)),
                }
            }
        };

        trace!(expr = expr_id.raw(), ty = %self.describe(ty), "typed expression");
        self.typed_ast.record_expr_type(expr_id, ty);
        Ok(ty)
    }

    fn binary_error(&self, op: BinaryOp, left: Ty, right: Ty, span: Span) -> Error {
        if left != right {
            return self.mismatch(left, right, span);
        }

        let expected = if op.is_arithmetic() {
            "numeric"
        } else if op.is_logical() {
            "bool"
        } else {
            "numeric or bool"
        };

        Error::new(
            ErrorImpl::TypeMismatch {
                expected: expected.to_string(),
                received: self.describe(left),
            },
            span,
        )
    }

    fn check_call(&mut self, call: Call, span: Span) -> Result<Ty, Error> {
        let program = self.program;
        let name = program.identifier_path(call.identifier);
        let resolution = self.resolve_identifier(call.identifier)?;

        let function = match resolution {
            Resolution::Symbol(id) => match &self.symbol(id).kind {
                SymbolKind::Function(function) => Some((function.params.clone(), function.return_type)),
                _ => None,
            },
            Resolution::EnumMember { .. } => None,
        };

        let Some((params, return_type)) = function else {
            return Err(Error::new(ErrorImpl::NotCallable { name }, span));
        };

        let args: Vec<NodeId<Expr>> = program.ast.list(call.args).collect();
        if args.len() != params.len() {
            return Err(Error::new(
                ErrorImpl::ArityMismatch {
                    function: name,
                    expected: params.len(),
                    received: args.len(),
                },
                span,
            ));
        }

        for (arg, param) in args.into_iter().zip(params) {
            let arg_ty = self.check_expr(arg)?;
            let param_ty = self.symbol(param).ty(param);
            self.expect_assignable(param_ty, arg_ty, self.node_span(arg))?;
        }

        Ok(return_type)
    }

    // STATEMENTS

    fn check_statement(&mut self, statement: NodeId<Statement>) {
        let program = self.program;
        let result = match program.ast.get(statement).kind {
            StatementKind::Conditional(conditional) => self.check_conditional(conditional),
            StatementKind::While(while_stmt) => self.check_while(while_stmt),
            StatementKind::Break(_) | StatementKind::Continue(_) => Ok(()),
            StatementKind::Return(return_stmt) => self.check_return(return_stmt),
            StatementKind::Assignment(assignment) => self.check_assignment(assignment),
            StatementKind::Expr(expr) => self.check_expr(expr).map(|_| ()),
        };
        self.recover(result);
    }

    /// Condition types must be exactly `bool`.
    fn check_condition(&mut self, condition: NodeId<Expr>) {
        let result = self.check_expr(condition).and_then(|ty| {
            if ty.is_bool() {
                Ok(())
            } else {
                Err(self.mismatch(Ty::Primitive(Primitive::Bool), ty, self.node_span(condition)))
            }
        });
        self.recover(result);
    }

    fn check_conditional(&mut self, conditional: NodeId<Conditional>) -> Result<(), Error> {
        let program = self.program;
        let conditional = program.ast.get(conditional);

        self.check_condition(conditional.condition);
        self.check_block(conditional.then_block);
        if let Some(else_block) = conditional.else_block {
            self.check_block(else_block);
        }

        Ok(())
    }

    fn check_while(&mut self, while_stmt: NodeId<While>) -> Result<(), Error> {
        let program = self.program;
        let while_stmt = program.ast.get(while_stmt);

        self.check_condition(while_stmt.condition);
        self.check_block(while_stmt.body);

        Ok(())
    }

    fn check_return(&mut self, return_stmt: NodeId<Return>) -> Result<(), Error> {
        let program = self.program;
        let Some(value) = program.ast.get(return_stmt).value else {
            return Ok(());
        };

        let ty = self.check_expr(value)?;
        let expected = self
            .current_function
            .and_then(|function| match &self.symbol(function).kind {
                SymbolKind::Function(function) => Some(function.return_type),
                _ => None,
            });

        match expected {
            Some(expected) => self.expect_assignable(expected, ty, self.node_span(value)),
            None => Ok(()),
        }
    }

    fn check_assignment(&mut self, assignment: NodeId<Assignment>) -> Result<(), Error> {
        let program = self.program;
        let assignment = program.ast.get(assignment);
        let target_span = self.node_span(assignment.identifier);
        let constant = || {
            Error::new(
                ErrorImpl::AssignToConstant {
                    name: program.identifier_path(assignment.identifier),
                },
                target_span,
            )
        };

        let target = match self.resolve_identifier(assignment.identifier)? {
            Resolution::Symbol(target) => target,
            Resolution::EnumMember { .. } => return Err(constant()),
        };

        // Members of a constant struct are constant too.
        let head = match self.typed_ast.resolution(assignment.identifier) {
            Some(Resolution::Symbol(head)) => head,
            _ => target,
        };
        if self.symbol(head).qualifiers.constant || self.symbol(target).qualifiers.constant {
            return Err(constant());
        }

        let destination = self.symbol(target).ty(target);
        let source = self.check_expr(assignment.value)?;
        self.expect_assignable(destination, source, self.node_span(assignment.value))
    }

    fn check_namespace(&self, namespace: NodeId<Identifier>) -> Result<(), Error> {
        let (name, span) = self.plain_name(namespace)?;
        if self.scopes.resolve_local(self.current_scope, name).is_some() {
            return Err(redeclaration(name, span));
        }
        Ok(())
    }

    fn check_block(&mut self, block: NodeId<Block>) {
        let program = self.program;
        let block = program.ast.get(block);

        if let Some(namespace) = block.namespace {
            let result = self.check_namespace(namespace);
            self.recover(result);
        }

        let scope = self.scopes.create(Some(self.current_scope));
        let previous = self.enter_scope(scope);

        if let Some(statement) = block.statement {
            self.check_statement(statement);
        }

        for declaration in program.ast.list(block.declarations) {
            if self.limit_reached() {
                break;
            }
            let result = self.check_declaration(declaration);
            self.recover(result);
        }

        for tag in program.ast.list(block.tags) {
            if self.limit_reached() {
                break;
            }
            match program.ast.get(tag).kind {
                BlockTagKind::Statement(statement) => self.check_statement(statement),
                BlockTagKind::Block(block) => self.check_block(block),
            }
        }

        self.leave_scope(previous);
    }

    // DECLARATIONS

    /// Declares a variable in the current scope. The initializer is checked
    /// before the name becomes visible.
    pub fn check_declaration(&mut self, declaration_id: NodeId<Declaration>) -> Result<SymbolId, Error> {
        let program = self.program;
        let declaration = program.ast.get(declaration_id);
        let (name, span) = self.fresh_name(declaration.identifier)?;
        let ty = self.resolve_type(declaration.decl_type)?;
        let qualifiers = self.qualifiers(declaration.qualifiers);

        if let Some(initializer) = declaration.initializer {
            let source = self.check_expr(initializer)?;
            self.expect_assignable(ty, source, self.node_span(initializer))?;
        }

        let symbol = self.alloc_symbol(Symbol::instance(name, span, qualifiers, ty));
        self.declare(name, symbol, span)?;
        self.typed_ast.record_definition(declaration_id, symbol);
        Ok(symbol)
    }

    fn check_struct(&mut self, struct_id: NodeId<Struct>) -> Result<(), Error> {
        let program = self.program;
        let structure = program.ast.get(struct_id);
        let (name, span) = self.fresh_name(structure.identifier)?;

        let scope = self.scopes.create(Some(self.current_scope));
        let symbol = self.alloc_symbol(Symbol {
            name,
            span,
            qualifiers: Qualifiers::default(),
            kind: SymbolKind::Struct(StructDecl {
                scope,
                members: vec![],
            }),
        });

        let previous = self.enter_scope(scope);
        for declaration in program.ast.list(structure.declarations) {
            let result = self.check_declaration(declaration);
            let Some(member) = self.recover(result) else {
                continue;
            };

            let member_name = self.symbol(member).name;
            if let SymbolKind::Struct(decl) = &mut self.symbol_mut(symbol).kind {
                decl.members.push((member_name, member));
            }
        }
        self.leave_scope(previous);

        self.declare(name, symbol, span)?;
        self.typed_ast.record_definition(struct_id, symbol);
        Ok(())
    }

    fn check_enum(&mut self, enum_id: NodeId<Enum>) -> Result<(), Error> {
        let program = self.program;
        let enumeration = program.ast.get(enum_id);
        let (name, span) = self.fresh_name(enumeration.identifier)?;

        let mut decl = EnumDecl::default();
        for member in program.ast.list(enumeration.members) {
            let text = program.token_text(member);
            if decl.members.contains_key(text) {
                self.report(redeclaration(text, program.token_span(member)));
                continue;
            }
            let ordinal = decl.members.len() as u32;
            decl.members.insert(text, ordinal);
        }

        let symbol = self.alloc_symbol(Symbol {
            name,
            span,
            qualifiers: Qualifiers::default(),
            kind: SymbolKind::Enum(decl),
        });
        self.declare(name, symbol, span)?;
        self.typed_ast.record_definition(enum_id, symbol);
        Ok(())
    }

    fn check_param(&mut self, param_id: NodeId<FunctionParam>) -> Result<SymbolId, Error> {
        let program = self.program;
        let param = program.ast.get(param_id);
        let (name, span) = self.fresh_name(param.identifier)?;
        let ty = self.resolve_type(param.param_type)?;

        let symbol = self.alloc_symbol(Symbol::instance(name, span, Qualifiers::default(), ty));
        self.declare(name, symbol, span)?;
        self.typed_ast.record_definition(param_id, symbol);
        Ok(symbol)
    }

    /// Whether `existing` is an undefined function with this signature.
    fn completes_forward_declaration(&self, existing: SymbolId, params: &[SymbolId], return_type: Ty) -> bool {
        let SymbolKind::Function(decl) = &self.symbol(existing).kind else {
            return false;
        };

        !decl.defined
            && decl.return_type == return_type
            && decl.params.len() == params.len()
            && decl
                .params
                .iter()
                .zip(params)
                .all(|(a, b)| self.symbol(*a).ty(*a) == self.symbol(*b).ty(*b))
    }

    /// The function's name becomes visible before its body is checked, so
    /// bodies may call themselves.
    fn check_function(&mut self, function_id: NodeId<Function>) -> Result<(), Error> {
        let program = self.program;
        let function = program.ast.get(function_id);
        let header = program.ast.get(function.header);
        let (name, span) = self.plain_name(header.identifier)?;
        let return_type = self.resolve_type(header.return_type)?;

        let scope = self.scopes.create(Some(self.current_scope));
        let previous = self.enter_scope(scope);
        let mut params = vec![];
        for param in program.ast.list(header.params) {
            let result = self.check_param(param);
            if let Some(param) = self.recover(result) {
                params.push(param);
            }
        }
        self.leave_scope(previous);

        let defined = function.body.is_some();
        let symbol = match self.scopes.resolve_local(self.current_scope, name) {
            Some(existing)
                if defined && self.completes_forward_declaration(existing, &params, return_type) =>
            {
                let existing_symbol = self.symbol_mut(existing);
                existing_symbol.qualifiers.export |= header.export;
                if let SymbolKind::Function(decl) = &mut existing_symbol.kind {
                    decl.scope = scope;
                    decl.params = params;
                    decl.defined = true;
                }
                existing
            }
            Some(_) => return Err(redeclaration(name, span)),
            None => {
                let symbol = self.alloc_symbol(Symbol {
                    name,
                    span,
                    qualifiers: Qualifiers {
                        export: header.export,
                        ..Default::default()
                    },
                    kind: SymbolKind::Function(FunctionDecl {
                        scope,
                        params,
                        return_type,
                        defined,
                    }),
                });
                self.declare(name, symbol, span)?;
                symbol
            }
        };
        self.typed_ast.record_definition(function_id, symbol);

        if let Some(body) = function.body {
            let previous_scope = self.enter_scope(scope);
            let previous_function = self.current_function.replace(symbol);
            self.check_block(body);
            self.current_function = previous_function;
            self.leave_scope(previous_scope);
        }

        Ok(())
    }

    fn check_primary(&mut self, primary: NodeId<Primary>) {
        let program = self.program;

        for tag in program.ast.list(program.ast.get(primary).tags) {
            if self.limit_reached() {
                debug!(limit = self.config.error_limit, "error limit reached");
                break;
            }

            let result = match program.ast.get(tag).kind {
                PrimaryTagKind::Declaration(declaration) => self.check_declaration(declaration).map(|_| ()),
                PrimaryTagKind::Struct(structure) => self.check_struct(structure),
                PrimaryTagKind::Enum(enumeration) => self.check_enum(enumeration),
                PrimaryTagKind::Function(function) => self.check_function(function),
            };
            self.recover(result);
        }
    }
}

fn redeclaration(name: &str, span: Span) -> Error {
    Error::new(
        ErrorImpl::Redeclaration {
            name: name.to_string(),
        },
        span,
    )
}

fn simple_primitive(simple: SimpleType) -> Primitive {
    match simple {
        SimpleType::I8 => Primitive::I8,
        SimpleType::U8 => Primitive::U8,
        SimpleType::I32 => Primitive::I32,
        SimpleType::U32 => Primitive::U32,
        SimpleType::F32 => Primitive::F32,
    }
}

/// Analyzes a parsed program.
///
/// Returns the checker, which holds the scope tree, symbols and typed side
/// tables, together with every error found. Analysis continues past errors
/// until `config.error_limit` is reached.
pub fn type_check<'a>(program: &'a Program<'a>, config: &FrontendConfig) -> (TypeChecker<'a>, Vec<Error>) {
    let mut checker = TypeChecker::new(program, config);
    checker.check_primary(program.root);

    debug!(
        symbols = checker.symbols.len(),
        scopes = checker.scopes.len(),
        errors = checker.errors.len(),
        "analysis finished"
    );

    let errors = std::mem::take(&mut checker.errors);
    (checker, errors)
}
