use std::fmt;

/// Position of an operator relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixing {
    /// Before a single operand, as in `~3`.
    Prefix,
    /// After a single operand, as in `3!`.
    Postfix,
    /// Between two operands, as in `2 + 3`.
    Infix,
}

/// Grouping direction for chains of infix operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// What an operator computes. The evaluator matches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Average,
    Maximum,
    Minimum,
    Negate,
    Factorial,
}

/// An immutable operator descriptor.
///
/// Descriptors live in the static [`OPERATORS`] table and are handed out as
/// `&'static Operator`, so syntax tree nodes can refer to them without
/// copying.
///
/// ## Example
/// ```
/// use minicalc::interpreter::operators::{Fixing, lookup};
///
/// let power = lookup('^', Fixing::Infix).unwrap();
///
/// assert_eq!(power.name(), "power");
/// assert_eq!(power.precedence(), 3);
/// assert_eq!(power.arity(), 2);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Operator {
    symbol:        char,
    name:          &'static str,
    precedence:    u8,
    fixing:        Fixing,
    associativity: Associativity,
    operation:     Operation,
}

impl Operator {
    const fn infix(symbol: char,
                   name: &'static str,
                   precedence: u8,
                   associativity: Associativity,
                   operation: Operation)
                   -> Self {
        Self { symbol,
               name,
               precedence,
               fixing: Fixing::Infix,
               associativity,
               operation }
    }

    const fn unary(symbol: char,
                   name: &'static str,
                   precedence: u8,
                   fixing: Fixing,
                   operation: Operation)
                   -> Self {
        Self { symbol,
               name,
               precedence,
               fixing,
               associativity: Associativity::Right,
               operation }
    }

    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        self.precedence
    }

    #[must_use]
    pub const fn fixing(&self) -> Fixing {
        self.fixing
    }

    /// Only meaningful for infix operators.
    #[must_use]
    pub const fn associativity(&self) -> Associativity {
        self.associativity
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Number of operands: 2 for infix operators, 1 otherwise.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.fixing {
            Fixing::Infix => 2,
            Fixing::Prefix | Fixing::Postfix => 1,
        }
    }

    /// Minimum precedence for the right operand of this infix operator.
    ///
    /// Left-associative operators exclude themselves from their right operand;
    /// right-associative ones let it continue at the same level.
    #[must_use]
    pub const fn next_min_precedence(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Every operator the calculator understands.
///
/// At most one descriptor exists per (symbol, fixing). `-` is the only symbol
/// with two: infix subtraction and prefix negation.
pub static OPERATORS: [Operator; 12] = [
    Operator::infix('+', "add", 1, Associativity::Left, Operation::Add),
    Operator::infix('-', "subtract", 1, Associativity::Left, Operation::Subtract),
    Operator::infix('*', "multiply", 2, Associativity::Left, Operation::Multiply),
    Operator::infix('/', "divide", 2, Associativity::Left, Operation::Divide),
    Operator::infix('%', "modulo", 2, Associativity::Left, Operation::Modulo),
    Operator::infix('^', "power", 3, Associativity::Right, Operation::Power),
    Operator::infix('@', "average", 4, Associativity::Left, Operation::Average),
    Operator::infix('$', "maximum", 4, Associativity::Left, Operation::Maximum),
    Operator::infix('&', "minimum", 4, Associativity::Left, Operation::Minimum),
    Operator::unary('-', "negate", 5, Fixing::Prefix, Operation::Negate),
    Operator::unary('~', "negate", 5, Fixing::Prefix, Operation::Negate),
    Operator::unary('!', "factorial", 6, Fixing::Postfix, Operation::Factorial),
];

/// Finds the descriptor for `symbol` in the given position.
///
/// # Returns
/// The descriptor, or `None` when `symbol` is not an operator in that
/// position (for example `!` as a prefix).
///
/// ## Example
/// ```
/// use minicalc::interpreter::operators::{Fixing, Operation, lookup};
///
/// assert_eq!(lookup('-', Fixing::Infix).unwrap().operation(), Operation::Subtract);
/// assert_eq!(lookup('-', Fixing::Prefix).unwrap().operation(), Operation::Negate);
/// assert!(lookup('!', Fixing::Prefix).is_none());
/// ```
#[must_use]
pub fn lookup(symbol: char, fixing: Fixing) -> Option<&'static Operator> {
    OPERATORS.iter()
             .find(|operator| operator.symbol == symbol && operator.fixing == fixing)
}

/// Returns `true` when `symbol` is an operator in any position.
#[must_use]
pub fn is_operator_symbol(symbol: char) -> bool {
    OPERATORS.iter().any(|operator| operator.symbol == symbol)
}
