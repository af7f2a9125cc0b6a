//! A reference evaluator and column constructors for tests.

use std::cell::Cell;
use std::cmp::Ordering;
use std::sync::Arc;

use arrow_array::{ArrayRef, Float64Array, Int64Array};
use arrow_schema::DataType;
use ivy_error::{IvyResult, IvyExpect, ivy_bail};

use crate::{BinaryOp, ChunkedColumn, ColumnView, Config, Context, Value};

/// Evaluates comparisons between numbers and between chars, and counts them.
#[derive(Debug, Default)]
pub struct NumericContext {
    config: Config,
    comparisons: Cell<usize>,
}

impl NumericContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            comparisons: Cell::new(0),
        }
    }

    /// The number of `eval_binary` calls so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons.get()
    }
}

fn order(left: &Value, right: &Value) -> IvyResult<Ordering> {
    Ok(match (left, right) {
        (Value::Int(l), Value::Int(r)) => l.cmp(r),
        (Value::Float(l), Value::Float(r)) => l.cmp(r),
        (Value::Float(l), Value::Int(r)) => l.cmp_int(r),
        (Value::Int(l), Value::Float(r)) => r.cmp_int(l).reverse(),
        (Value::Char(l), Value::Char(r)) => l.cmp(r),
        _ => ivy_bail!(MismatchedTypes: left.kind(), right.kind()),
    })
}

impl Context for NumericContext {
    fn config(&self) -> &Config {
        &self.config
    }

    fn eval_binary(&self, left: &Value, op: BinaryOp, right: &Value) -> IvyResult<Value> {
        self.comparisons.set(self.comparisons.get() + 1);
        let ord = order(left, right)?;
        Ok(Value::from(match op {
            BinaryOp::Lt => ord == Ordering::Less,
            BinaryOp::Ge => ord != Ordering::Less,
            BinaryOp::Eq => ord == Ordering::Equal,
        }))
    }
}

/// An `Int64` column view with one chunk per slice.
pub fn int_view(chunks: &[&[i64]]) -> ColumnView {
    let chunks = chunks
        .iter()
        .map(|c| Arc::new(Int64Array::from(c.to_vec())) as ArrayRef)
        .collect();
    let column = ChunkedColumn::try_new(chunks, DataType::Int64).ivy_expect("Int64 chunks");
    ColumnView::new(column, Config::default())
}

/// A `Float64` column view with one chunk per slice.
pub fn float_view(chunks: &[&[f64]]) -> ColumnView {
    let chunks = chunks
        .iter()
        .map(|c| Arc::new(Float64Array::from(c.to_vec())) as ArrayRef)
        .collect();
    let column = ChunkedColumn::try_new(chunks, DataType::Float64).ivy_expect("Float64 chunks");
    ColumnView::new(column, Config::default())
}
