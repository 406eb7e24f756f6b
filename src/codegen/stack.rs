use crate::ast::Operator;

/// Evaluation stack of a single generation pass.
#[derive(Debug)]
pub(super) struct EvalStack<T> {
    items: Vec<T>,
}

impl<T> EvalStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pops the operands of `op` as `(op1, op2)`, `op2` being the former top.
    ///
    /// # Panics
    ///
    /// On underflow. Generation is only defined over validated postfix input.
    pub fn pop_operands(&mut self, op: Operator) -> (T, T) {
        let (Some(op2), Some(op1)) = (self.items.pop(), self.items.pop()) else {
            panic!("stack underflow at operator {op}: postfix input was not validated");
        };
        (op1, op2)
    }

    /// # Panics
    ///
    /// When the scan left nothing on the stack.
    pub fn into_top(mut self) -> T {
        self.items
            .pop()
            .unwrap_or_else(|| panic!("empty evaluation stack after scan"))
    }
}
