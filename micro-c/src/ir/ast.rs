#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// выражение-оператор, например: a = 10
    Expr(Expression),
    /// return выражение
    Return(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// 10, 0, 42
    Number(i64),
    /// локальная переменная; хранится смещение её слота от rbp
    Variable { offset: usize },
    /// a = выражение; присваивание само является выражением
    Assign {
        target: Box<Expression>,
        value: Box<Expression>,
    },
    /// a + b, a < b и т.д.
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOperator {
    Add,       // +
    Subtract,  // -
    Multiply,  // *
    Divide,    // /
    Equal,     // ==
    NotEqual,  // !=
    Less,      // <
    LessEqual, // <=
    // > и >= в AST не доживают: парсер меняет операнды местами
}
