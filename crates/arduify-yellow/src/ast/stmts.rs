use super::{
    AstNode, ErrorNode, Expr, Separated, VariableDeclaration, ast_node, child, child_after,
    children, separated, token,
};
use crate::{SyntaxKind, SyntaxNode, SyntaxToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stmt<'a> {
    Block(Block<'a>),
    LocalDecl(LocalDeclStmt<'a>),
    Expr(ExprStmt<'a>),
    If(IfStmt<'a>),
    For(ForStmt<'a>),
    Switch(SwitchStmt<'a>),
    Break(BreakStmt<'a>),
    Continue(ContinueStmt<'a>),
    Return(ReturnStmt<'a>),
    While(WhileStmt<'a>),
    Do(DoStmt<'a>),
    Empty(EmptyStmt<'a>),
    Error(ErrorNode<'a>),
}

impl<'a> AstNode<'a> for Stmt<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        let stmt = match syntax.kind() {
            SyntaxKind::BLOCK => Self::Block(Block(syntax)),
            SyntaxKind::LOCAL_DECL_STMT => Self::LocalDecl(LocalDeclStmt(syntax)),
            SyntaxKind::EXPR_STMT => Self::Expr(ExprStmt(syntax)),
            SyntaxKind::IF_STMT => Self::If(IfStmt(syntax)),
            SyntaxKind::FOR_STMT => Self::For(ForStmt(syntax)),
            SyntaxKind::SWITCH_STMT => Self::Switch(SwitchStmt(syntax)),
            SyntaxKind::BREAK_STMT => Self::Break(BreakStmt(syntax)),
            SyntaxKind::CONTINUE_STMT => Self::Continue(ContinueStmt(syntax)),
            SyntaxKind::RETURN_STMT => Self::Return(ReturnStmt(syntax)),
            SyntaxKind::WHILE_STMT => Self::While(WhileStmt(syntax)),
            SyntaxKind::DO_STMT => Self::Do(DoStmt(syntax)),
            SyntaxKind::EMPTY_STMT => Self::Empty(EmptyStmt(syntax)),
            SyntaxKind::ERROR => Self::Error(ErrorNode::cast(syntax)?),
            _ => return None,
        };
        Some(stmt)
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Block(it) => it.syntax(),
            Self::LocalDecl(it) => it.syntax(),
            Self::Expr(it) => it.syntax(),
            Self::If(it) => it.syntax(),
            Self::For(it) => it.syntax(),
            Self::Switch(it) => it.syntax(),
            Self::Break(it) => it.syntax(),
            Self::Continue(it) => it.syntax(),
            Self::Return(it) => it.syntax(),
            Self::While(it) => it.syntax(),
            Self::Do(it) => it.syntax(),
            Self::Empty(it) => it.syntax(),
            Self::Error(it) => it.syntax(),
        }
    }
}

ast_node!(Block, BLOCK);

impl<'a> Block<'a> {
    pub fn l_brace(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_BRACE)
    }

    pub fn statements(self) -> impl Iterator<Item = Stmt<'a>> {
        children(self.0)
    }

    pub fn r_brace(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_BRACE)
    }
}

ast_node!(LocalDeclStmt, LOCAL_DECL_STMT);

impl<'a> LocalDeclStmt<'a> {
    pub fn const_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::CONST_KW)
    }

    pub fn declaration(self) -> Option<VariableDeclaration<'a>> {
        child(self.0)
    }

    pub fn semicolon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::SEMICOLON)
    }
}

ast_node!(ExprStmt, EXPR_STMT);

impl<'a> ExprStmt<'a> {
    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn semicolon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::SEMICOLON)
    }
}

ast_node!(IfStmt, IF_STMT);

impl<'a> IfStmt<'a> {
    pub fn if_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::IF_KW)
    }

    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_PAREN)
    }

    pub fn condition(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_PAREN)
    }

    pub fn then_branch(self) -> Option<Stmt<'a>> {
        child_after(self.0, SyntaxKind::R_PAREN)
    }

    pub fn else_clause(self) -> Option<ElseClause<'a>> {
        child(self.0)
    }
}

ast_node!(ElseClause, ELSE_CLAUSE);

impl<'a> ElseClause<'a> {
    pub fn else_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::ELSE_KW)
    }

    pub fn body(self) -> Option<Stmt<'a>> {
        child(self.0)
    }
}

ast_node!(ForStmt, FOR_STMT);

impl<'a> ForStmt<'a> {
    pub fn for_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::FOR_KW)
    }

    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_PAREN)
    }

    /// `for (int i = 0; ...)`
    pub fn declaration(self) -> Option<VariableDeclaration<'a>> {
        child(self.0)
    }

    /// `for (i = 0, j = 1; ...)`
    pub fn initializers(self) -> Option<ForInitializers<'a>> {
        child(self.0)
    }

    pub fn first_semicolon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::SEMICOLON)
    }

    pub fn condition(self) -> Option<Expr<'a>> {
        self.0
            .children_with_tokens()
            .skip_while(|child| child.kind() != SyntaxKind::SEMICOLON)
            .skip(1)
            .take_while(|child| child.kind() != SyntaxKind::SEMICOLON)
            .find_map(|child| child.into_node().and_then(Expr::cast))
    }

    pub fn second_semicolon(self) -> Option<SyntaxToken<'a>> {
        self.0.child_tokens().filter(|token| token.kind() == SyntaxKind::SEMICOLON).nth(1)
    }

    pub fn incrementors(self) -> Option<ForIncrementors<'a>> {
        child(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_PAREN)
    }

    pub fn body(self) -> Option<Stmt<'a>> {
        child_after(self.0, SyntaxKind::R_PAREN)
    }
}

ast_node!(ForInitializers, INITIALIZER_LIST);

impl<'a> ForInitializers<'a> {
    pub fn elements(self) -> impl Iterator<Item = Separated<'a, Expr<'a>>> {
        separated(self.0)
    }
}

ast_node!(ForIncrementors, INCREMENTOR_LIST);

impl<'a> ForIncrementors<'a> {
    pub fn elements(self) -> impl Iterator<Item = Separated<'a, Expr<'a>>> {
        separated(self.0)
    }
}

ast_node!(SwitchStmt, SWITCH_STMT);

impl<'a> SwitchStmt<'a> {
    pub fn switch_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::SWITCH_KW)
    }

    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_PAREN)
    }

    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_PAREN)
    }

    pub fn l_brace(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_BRACE)
    }

    pub fn sections(self) -> impl Iterator<Item = SwitchSection<'a>> {
        children(self.0)
    }

    pub fn r_brace(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_BRACE)
    }
}

ast_node!(
    /// One or more labels followed by the statements they guard.
    SwitchSection,
    SWITCH_SECTION
);

impl<'a> SwitchSection<'a> {
    pub fn labels(self) -> impl Iterator<Item = SwitchLabel<'a>> {
        children(self.0)
    }

    pub fn statements(self) -> impl Iterator<Item = Stmt<'a>> {
        children(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchLabel<'a> {
    Case(CaseLabel<'a>),
    Default(DefaultLabel<'a>),
}

impl<'a> AstNode<'a> for SwitchLabel<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        match syntax.kind() {
            SyntaxKind::CASE_LABEL => Some(Self::Case(CaseLabel(syntax))),
            SyntaxKind::DEFAULT_LABEL => Some(Self::Default(DefaultLabel(syntax))),
            _ => None,
        }
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Case(it) => it.syntax(),
            Self::Default(it) => it.syntax(),
        }
    }
}

ast_node!(CaseLabel, CASE_LABEL);

impl<'a> CaseLabel<'a> {
    pub fn case_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::CASE_KW)
    }

    pub fn value(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn colon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::COLON)
    }
}

ast_node!(DefaultLabel, DEFAULT_LABEL);

impl<'a> DefaultLabel<'a> {
    pub fn default_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::DEFAULT_KW)
    }

    pub fn colon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::COLON)
    }
}

ast_node!(BreakStmt, BREAK_STMT);

impl<'a> BreakStmt<'a> {
    pub fn break_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::BREAK_KW)
    }

    pub fn semicolon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::SEMICOLON)
    }
}

ast_node!(ContinueStmt, CONTINUE_STMT);

ast_node!(ReturnStmt, RETURN_STMT);

impl<'a> ReturnStmt<'a> {
    pub fn return_token(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::RETURN_KW)
    }

    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn semicolon(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::SEMICOLON)
    }
}

ast_node!(WhileStmt, WHILE_STMT);

ast_node!(DoStmt, DO_STMT);

ast_node!(EmptyStmt, EMPTY_STMT);
