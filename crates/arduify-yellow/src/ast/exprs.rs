use super::{AstNode, ErrorNode, LiteralValue, Type, ast_node, child, children, literal, token};
use crate::{SyntaxKind, SyntaxNode, SyntaxToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr<'a> {
    Ident(Ident<'a>),
    Literal(Literal<'a>),
    Binary(BinaryExpr<'a>),
    Prefix(PrefixExpr<'a>),
    Postfix(PostfixExpr<'a>),
    Paren(ParenExpr<'a>),
    Cast(CastExpr<'a>),
    Assign(AssignExpr<'a>),
    Call(CallExpr<'a>),
    MemberAccess(MemberAccessExpr<'a>),
    Index(IndexExpr<'a>),
    Error(ErrorNode<'a>),
}

impl<'a> AstNode<'a> for Expr<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        let expr = match syntax.kind() {
            SyntaxKind::IDENT => Self::Ident(Ident(syntax)),
            SyntaxKind::LITERAL => Self::Literal(Literal(syntax)),
            SyntaxKind::BINARY_EXPR => Self::Binary(BinaryExpr(syntax)),
            SyntaxKind::PREFIX_EXPR => Self::Prefix(PrefixExpr(syntax)),
            SyntaxKind::POSTFIX_EXPR => Self::Postfix(PostfixExpr(syntax)),
            SyntaxKind::PAREN_EXPR => Self::Paren(ParenExpr(syntax)),
            SyntaxKind::CAST_EXPR => Self::Cast(CastExpr(syntax)),
            SyntaxKind::ASSIGN_EXPR => Self::Assign(AssignExpr(syntax)),
            SyntaxKind::CALL_EXPR => Self::Call(CallExpr(syntax)),
            SyntaxKind::MEMBER_ACCESS_EXPR => Self::MemberAccess(MemberAccessExpr(syntax)),
            SyntaxKind::INDEX_EXPR => Self::Index(IndexExpr(syntax)),
            SyntaxKind::ERROR => Self::Error(ErrorNode::cast(syntax)?),
            _ => return None,
        };
        Some(expr)
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Ident(it) => it.syntax(),
            Self::Literal(it) => it.syntax(),
            Self::Binary(it) => it.syntax(),
            Self::Prefix(it) => it.syntax(),
            Self::Postfix(it) => it.syntax(),
            Self::Paren(it) => it.syntax(),
            Self::Cast(it) => it.syntax(),
            Self::Assign(it) => it.syntax(),
            Self::Call(it) => it.syntax(),
            Self::MemberAccess(it) => it.syntax(),
            Self::Index(it) => it.syntax(),
            Self::Error(it) => it.syntax(),
        }
    }
}

/// The `n`-th direct child expression.
fn nth_expr(parent: SyntaxNode<'_>, n: usize) -> Option<Expr<'_>> {
    parent.children().filter_map(Expr::cast).nth(n)
}

/// The first direct child token that is not trivia.
fn operator(parent: SyntaxNode<'_>) -> Option<SyntaxToken<'_>> {
    parent.child_tokens().find(|token| !token.is_trivia())
}

ast_node!(Ident, IDENT);

impl<'a> Ident<'a> {
    pub fn name(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::NAME)
    }
}

ast_node!(Literal, LITERAL);

impl<'a> Literal<'a> {
    pub fn token(self) -> Option<SyntaxToken<'a>> {
        self.0.first_token()
    }

    /// Decoded value of the literal.
    pub fn value(self) -> LiteralValue<'a> {
        match self.token() {
            Some(token) => literal::value(token.kind(), token.text_trimmed()),
            None => LiteralValue::Invalid(""),
        }
    }
}

ast_node!(BinaryExpr, BINARY_EXPR);

impl<'a> BinaryExpr<'a> {
    pub fn lhs(self) -> Option<Expr<'a>> {
        nth_expr(self.0, 0)
    }

    pub fn op(self) -> Option<SyntaxToken<'a>> {
        operator(self.0)
    }

    pub fn rhs(self) -> Option<Expr<'a>> {
        nth_expr(self.0, 1)
    }
}

ast_node!(PrefixExpr, PREFIX_EXPR);

impl<'a> PrefixExpr<'a> {
    pub fn op(self) -> Option<SyntaxToken<'a>> {
        operator(self.0)
    }

    pub fn operand(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

ast_node!(PostfixExpr, POSTFIX_EXPR);

impl<'a> PostfixExpr<'a> {
    pub fn operand(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn op(self) -> Option<SyntaxToken<'a>> {
        operator(self.0)
    }
}

ast_node!(ParenExpr, PAREN_EXPR);

impl<'a> ParenExpr<'a> {
    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_PAREN)
    }

    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_PAREN)
    }
}

ast_node!(
    /// `(int)value`
    CastExpr,
    CAST_EXPR
);

impl<'a> CastExpr<'a> {
    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_PAREN)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        child(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_PAREN)
    }

    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

ast_node!(AssignExpr, ASSIGN_EXPR);

impl<'a> AssignExpr<'a> {
    pub fn lhs(self) -> Option<Expr<'a>> {
        nth_expr(self.0, 0)
    }

    pub fn op(self) -> Option<SyntaxToken<'a>> {
        operator(self.0)
    }

    pub fn rhs(self) -> Option<Expr<'a>> {
        nth_expr(self.0, 1)
    }
}

ast_node!(CallExpr, CALL_EXPR);

impl<'a> CallExpr<'a> {
    pub fn callee(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn arg_list(self) -> Option<ArgList<'a>> {
        child(self.0)
    }
}

ast_node!(ArgList, ARG_LIST);

impl<'a> ArgList<'a> {
    pub fn l_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_PAREN)
    }

    pub fn args(self) -> impl Iterator<Item = Expr<'a>> {
        children(self.0)
    }

    pub fn r_paren(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_PAREN)
    }
}

ast_node!(
    /// `receiver.name`
    MemberAccessExpr,
    MEMBER_ACCESS_EXPR
);

impl<'a> MemberAccessExpr<'a> {
    pub fn receiver(self) -> Option<Expr<'a>> {
        child(self.0)
    }

    pub fn dot(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::DOT)
    }

    pub fn name(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::NAME)
    }
}

ast_node!(IndexExpr, INDEX_EXPR);

impl<'a> IndexExpr<'a> {
    pub fn receiver(self) -> Option<Expr<'a>> {
        nth_expr(self.0, 0)
    }

    pub fn l_bracket(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::L_BRACKET)
    }

    pub fn index(self) -> Option<Expr<'a>> {
        nth_expr(self.0, 1)
    }

    pub fn r_bracket(self) -> Option<SyntaxToken<'a>> {
        token(self.0, SyntaxKind::R_BRACKET)
    }
}
