use std::fmt::{Display, Formatter, Write};

use ivy_error::IvyResult;

use crate::compute::{ValueSource, all_chars};
use crate::{Matrix, Value, ValueKind, Vector};

impl Value {
    /// Render the value the way the language prints it.
    ///
    /// Elements of vectors and columns are separated by single spaces, unless every element is a
    /// char, in which case they are concatenated. Printing a column decodes every row, so it
    /// fails where [`ColumnView::get`](crate::ColumnView::get) fails.
    pub fn sprint(&self) -> IvyResult<String> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    fn write_to(&self, out: &mut String) -> IvyResult<()> {
        match self {
            Self::Int(i) => out.push_str(&i.to_string()),
            Self::Float(f) => out.push_str(&f.to_string()),
            Self::Char(c) => out.push(*c),
            Self::Vector(v) => write_elements(v, out)?,
            Self::Column(c) => write_elements(c, out)?,
            Self::Matrix(m) => write_matrix(m, out)?,
        }
        Ok(())
    }
}

fn write_elements<S: ValueSource>(source: &S, out: &mut String) -> IvyResult<()> {
    let spaces = !all_chars(source)?;
    for i in 0..source.len() {
        if spaces && i > 0 {
            out.push(' ');
        }
        source.get(i)?.write_to(out)?;
    }
    Ok(())
}

/// Rows of the innermost dimension go on their own lines; higher dimensions add a blank line.
fn write_matrix(matrix: &Matrix, out: &mut String) -> IvyResult<()> {
    let shape = matrix.shape();
    if shape.len() <= 1 {
        return write_elements(matrix.data(), out);
    }

    let row_len = shape[shape.len() - 1];
    let spaces = !all_chars(matrix.data())?;
    for (i, elem) in matrix.data().iter().enumerate() {
        if i > 0 {
            if i % row_len != 0 {
                if spaces {
                    out.push(' ');
                }
            } else {
                out.push('\n');
                let mut block = row_len;
                for dim in shape[1..shape.len() - 1].iter().rev() {
                    block *= dim;
                    if i % block == 0 {
                        out.push('\n');
                    }
                }
            }
        }
        elem.write_to(out)?;
    }
    Ok(())
}

/// Values holding elements that cannot be decoded print as `<unprintable KIND>`; use
/// [`Value::sprint`] to observe the error.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.sprint() {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => write!(f, "<unprintable {}>", self.kind()),
        }
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        if write_elements(self, &mut out).is_err() {
            return write!(f, "<unprintable {}>", ValueKind::Vector);
        }
        f.write_char('(')?;
        f.write_str(&out)?;
        f.write_char(')')
    }
}
