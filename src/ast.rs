use std::fmt;

/// Binary arithmetic operator. All four are left-associative.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    /// +
    Add,
    /// -
    Subtract,
    /// *
    Multiply,
    /// /
    Divide,
}

impl Operator {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree shared by all three notations.
///
/// Every [Node::Binary] has exactly two children, so a tree with `k` operators
/// always holds `k + 1` operands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    Operand(char),
    Binary(Operator, Box<Node>, Box<Node>),
}

impl Node {
    pub fn binary(op: Operator, left: Node, right: Node) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn operand_count(&self) -> usize {
        match self {
            Self::Operand(_) => 1,
            Self::Binary(_, left, right) => left.operand_count() + right.operand_count(),
        }
    }

    pub fn operator_count(&self) -> usize {
        match self {
            Self::Operand(_) => 0,
            Self::Binary(_, left, right) => 1 + left.operator_count() + right.operator_count(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Self::Operand(_) => 0,
            Self::Binary(_, left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    /// Infix text without the outermost pair of parentheses, e.g. `(A+B)*C`.
    pub fn unwrapped(&self) -> String {
        match self {
            Self::Operand(name) => name.to_string(),
            Self::Binary(op, left, right) => format!("{left}{op}{right}"),
        }
    }
}

/// Renders the fully parenthesised infix form, e.g. `((A+B)*C)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Operand(name) => write!(f, "{name}"),
            Self::Binary(op, left, right) => write!(f, "({left}{op}{right})"),
        }
    }
}
