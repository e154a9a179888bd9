use super::{
    AstNode, Block, ErrorNode, Expr, Separated, ast_node, child, children, modifiers, separated,
    token,
};
use crate::{SyntaxKind, SyntaxNode, SyntaxToken};

ast_node!(
    /// Root of a source file.
    CompilationUnit,
    COMPILATION_UNIT
);

impl<'a> CompilationUnit<'a> {
    pub fn usings(self) -> impl Iterator<Item = UsingDirective<'a>> {
        children(self.0)
    }

    /// Namespaces and classes declared at file scope.
    pub fn items(self) -> impl Iterator<Item = Item<'a>> {
        children(self.0)
    }

    /// The end-of-file token; its leading trivia holds whatever follows the
    /// last declaration.
    pub fn eof_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::EOF)
    }
}

ast_node!(UsingDirective, USING_DIRECTIVE);

impl<'a> UsingDirective<'a> {
    pub fn path(self) -> Option<NamePath<'a>> {
        child(self.0)
    }
}

ast_node!(
    /// Dotted name such as `System.Collections`.
    NamePath,
    NAME_PATH
);

impl<'a> NamePath<'a> {
    pub fn segments(self) -> impl Iterator<Item = SyntaxToken<'a>> {
        self.0.child_tokens().filter(|token| token.kind() == SyntaxKind::NAME)
    }
}

ast_node!(Namespace, NAMESPACE);

impl<'a> Namespace<'a> {
    pub fn name(self) -> Option<NamePath<'a>> {
        child(self.0)
    }

    pub fn items(self) -> impl Iterator<Item = Item<'a>> {
        children(self.0)
    }
}

ast_node!(Class, CLASS);

impl<'a> Class<'a> {
    pub fn modifiers(self) -> impl Iterator<Item = SyntaxToken<'a>> {
        modifiers(self.0)
    }

    pub fn name(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::NAME)
    }

    pub fn members(self) -> impl Iterator<Item = Member<'a>> {
        children(self.0)
    }
}

/// Declaration allowed at file or namespace scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    Namespace(Namespace<'a>),
    Class(Class<'a>),
}

impl<'a> AstNode<'a> for Item<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        match syntax.kind() {
            SyntaxKind::NAMESPACE => Some(Self::Namespace(Namespace(syntax))),
            SyntaxKind::CLASS => Some(Self::Class(Class(syntax))),
            _ => None,
        }
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Namespace(it) => it.syntax(),
            Self::Class(it) => it.syntax(),
        }
    }
}

/// Declaration inside a class body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member<'a> {
    Method(Method<'a>),
    Field(Field<'a>),
    Class(Class<'a>),
    Error(ErrorNode<'a>),
}

impl<'a> AstNode<'a> for Member<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        match syntax.kind() {
            SyntaxKind::METHOD => Some(Self::Method(Method(syntax))),
            SyntaxKind::FIELD => Some(Self::Field(Field(syntax))),
            SyntaxKind::CLASS => Some(Self::Class(Class(syntax))),
            SyntaxKind::ERROR => ErrorNode::cast(syntax).map(Self::Error),
            _ => None,
        }
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Method(it) => it.syntax(),
            Self::Field(it) => it.syntax(),
            Self::Class(it) => it.syntax(),
            Self::Error(it) => it.syntax(),
        }
    }
}

ast_node!(Method, METHOD);

impl<'a> Method<'a> {
    pub fn modifiers(self) -> impl Iterator<Item = SyntaxToken<'a>> {
        modifiers(self.0)
    }

    pub fn return_type(self) -> Option<Type<'a>> {
        child(self.0)
    }

    pub fn name(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::NAME)
    }

    pub fn param_list(self) -> Option<ParamList<'a>> {
        child(self.0)
    }

    pub fn body(self) -> Option<Block<'a>> {
        child(self.0)
    }

    /// Terminator of a body-less method.
    pub fn semicolon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::SEMICOLON)
    }
}

ast_node!(ParamList, PARAM_LIST);

impl<'a> ParamList<'a> {
    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_PAREN)
    }

    pub fn params(self) -> impl Iterator<Item = Param<'a>> {
        children(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_PAREN)
    }
}

ast_node!(Param, PARAM);

impl<'a> Param<'a> {
    pub fn ty(self) -> Option<Type<'a>> {
        child(self.0)
    }

    pub fn name(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::NAME)
    }
}

ast_node!(Field, FIELD);

impl<'a> Field<'a> {
    pub fn modifiers(self) -> impl Iterator<Item = SyntaxToken<'a>> {
        modifiers(self.0)
    }

    pub fn declaration(self) -> Option<VariableDeclaration<'a>> {
        child(self.0)
    }

    pub fn semicolon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::SEMICOLON)
    }
}

ast_node!(
    /// A type followed by one or more comma separated declarators.
    VariableDeclaration,
    VARIABLE_DECLARATION
);

impl<'a> VariableDeclaration<'a> {
    pub fn ty(self) -> Option<Type<'a>> {
        child(self.0)
    }

    pub fn declarators(self) -> impl Iterator<Item = VariableDeclarator<'a>> {
        children(self.0)
    }

    /// Declarators interleaved with the commas between them.
    pub fn elements(self) -> impl Iterator<Item = Separated<'a, VariableDeclarator<'a>>> {
        separated(self.0)
    }
}

ast_node!(VariableDeclarator, VARIABLE_DECLARATOR);

impl<'a> VariableDeclarator<'a> {
    pub fn name(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::NAME)
    }

    pub fn initializer(self) -> Option<Initializer<'a>> {
        child(self.0)
    }
}

ast_node!(Initializer, INITIALIZER);

impl<'a> Initializer<'a> {
    pub fn eq_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::EQ)
    }

    pub fn value(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

/// Any type reference: `int`, `Foo.Bar`, `byte[]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Type<'a>(SyntaxNode<'a>);

impl<'a> AstNode<'a> for Type<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        matches!(
            syntax.kind(),
            SyntaxKind::PREDEFINED_TYPE | SyntaxKind::PATH_TYPE | SyntaxKind::ARRAY_TYPE
        )
        .then_some(Self(syntax))
    }

    fn syntax(self) -> SyntaxNode<'a> {
        self.0
    }
}

impl<'a> Type<'a> {
    pub fn is_array(self) -> bool {
        self.0.kind() == SyntaxKind::ARRAY_TYPE
    }

    /// Element type of an array type.
    pub fn element_type(self) -> Option<Type<'a>> {
        if self.is_array() { child(self.0) } else { None }
    }
}
