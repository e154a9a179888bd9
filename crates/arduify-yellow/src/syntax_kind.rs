#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    L_PAREN,
    R_PAREN,
    L_BRACKET,
    R_BRACKET,
    L_BRACE,
    R_BRACE,
    SEMICOLON,
    COMMA,
    DOT,
    COLON,
    QUESTION,

    EQ,
    PLUS_EQ,
    MINUS_EQ,
    STAR_EQ,
    SLASH_EQ,
    PERCENT_EQ,
    AMP_EQ,
    PIPE_EQ,
    CARET_EQ,
    SHL_EQ,
    SHR_EQ,

    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    AMP,
    PIPE,
    CARET,
    BANG,
    TILDE,
    LT,
    GT,
    LT_EQ,
    GT_EQ,
    EQ_EQ,
    BANG_EQ,
    AMP_AMP,
    PIPE_PIPE,
    SHL,
    SHR,
    PLUS_PLUS,
    MINUS_MINUS,

    USING_KW,
    NAMESPACE_KW,
    CLASS_KW,
    STRUCT_KW,
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    INTERNAL_KW,
    STATIC_KW,
    CONST_KW,
    READONLY_KW,
    VOLATILE_KW,
    IF_KW,
    ELSE_KW,
    FOR_KW,
    WHILE_KW,
    DO_KW,
    SWITCH_KW,
    CASE_KW,
    DEFAULT_KW,
    BREAK_KW,
    CONTINUE_KW,
    RETURN_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,

    VOID_KW,
    BOOL_KW,
    BYTE_KW,
    SBYTE_KW,
    CHAR_KW,
    SHORT_KW,
    USHORT_KW,
    INT_KW,
    UINT_KW,
    LONG_KW,
    ULONG_KW,
    FLOAT_KW,
    DOUBLE_KW,
    DECIMAL_KW,
    STRING_KW,
    OBJECT_KW,

    NAME,
    INT_NUMBER,
    REAL_NUMBER,
    STRING,
    CHAR,

    WHITESPACE,
    NEWLINE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    UNKNOWN,
    EOF,

    COMPILATION_UNIT,
    USING_DIRECTIVE,
    NAME_PATH,
    NAMESPACE,
    CLASS,
    FIELD,
    METHOD,
    PARAM_LIST,
    PARAM,
    VARIABLE_DECLARATION,
    VARIABLE_DECLARATOR,
    INITIALIZER,
    PREDEFINED_TYPE,
    PATH_TYPE,
    ARRAY_TYPE,
    RANK_SPECIFIER,

    BLOCK,
    LOCAL_DECL_STMT,
    EXPR_STMT,
    IF_STMT,
    ELSE_CLAUSE,
    FOR_STMT,
    INITIALIZER_LIST,
    INCREMENTOR_LIST,
    SWITCH_STMT,
    SWITCH_SECTION,
    CASE_LABEL,
    DEFAULT_LABEL,
    BREAK_STMT,
    CONTINUE_STMT,
    RETURN_STMT,
    WHILE_STMT,
    DO_STMT,
    EMPTY_STMT,

    IDENT,
    LITERAL,
    BINARY_EXPR,
    PREFIX_EXPR,
    POSTFIX_EXPR,
    PAREN_EXPR,
    CAST_EXPR,
    ASSIGN_EXPR,
    CALL_EXPR,
    ARG_LIST,
    MEMBER_ACCESS_EXPR,
    INDEX_EXPR,

    ERROR,
    TOMBSTONE,
}

impl SyntaxKind {
    /// Whitespace, line breaks and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Keywords naming a built-in type (`int`, `float`, `void`, ...).
    #[inline]
    pub const fn is_predefined_type(self) -> bool {
        (self as u16) >= (Self::VOID_KW as u16) && (self as u16) <= (Self::OBJECT_KW as u16)
    }

    #[inline]
    pub const fn is_modifier(self) -> bool {
        (self as u16) >= (Self::PUBLIC_KW as u16) && (self as u16) <= (Self::VOLATILE_KW as u16)
    }

    #[inline]
    pub const fn is_assignment_operator(self) -> bool {
        (self as u16) >= (Self::EQ as u16) && (self as u16) <= (Self::SHR_EQ as u16)
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT_NUMBER
                | Self::REAL_NUMBER
                | Self::STRING
                | Self::CHAR
                | Self::TRUE_KW
                | Self::FALSE_KW
                | Self::NULL_KW
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SyntaxKind::*;

    #[test]
    fn kind_ranges() {
        assert!(INT_KW.is_predefined_type());
        assert!(VOID_KW.is_predefined_type());
        assert!(OBJECT_KW.is_predefined_type());
        assert!(!NAME.is_predefined_type());

        assert!(CONST_KW.is_modifier());
        assert!(!CLASS_KW.is_modifier());

        assert!(EQ.is_assignment_operator());
        assert!(SHR_EQ.is_assignment_operator());
        assert!(!EQ_EQ.is_assignment_operator());

        assert!(NEWLINE.is_trivia());
        assert!(!SEMICOLON.is_trivia());
    }
}
